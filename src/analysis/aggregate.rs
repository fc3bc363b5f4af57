use crate::models::{MacroBalance, NutritionAnalysis, ScoredFood};

/// Atwater conversion factors.
pub const PROTEIN_KCAL_PER_GRAM: f64 = 4.0;
pub const CARB_KCAL_PER_GRAM: f64 = 4.0;
pub const FAT_KCAL_PER_GRAM: f64 = 9.0;

/// Healthy share of calories per macro, in percent.
pub const PROTEIN_PCT_RANGE: (f64, f64) = (10.0, 35.0);
pub const FAT_PCT_RANGE: (f64, f64) = (20.0, 35.0);
pub const CARB_PCT_RANGE: (f64, f64) = (45.0, 65.0);

/// Round to one decimal place.
#[inline]
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Aggregate macro breakdown over a recommended food list (typically the
/// top-N slice). Percentages are 0 when total calories are 0; fiber and
/// sugar totals are summed regardless.
pub fn analyze(foods: &[ScoredFood]) -> NutritionAnalysis {
    let total_calories: f64 = foods.iter().map(|f| f.food.calories).sum();
    let total_protein: f64 = foods.iter().map(|f| f.food.protein).sum();
    let total_carbs: f64 = foods.iter().map(|f| f.food.carbohydrates).sum();
    let total_fat: f64 = foods.iter().map(|f| f.food.fat).sum();
    let total_fiber: f64 = foods.iter().map(|f| f.food.fiber_or_zero()).sum();
    let total_sugar: f64 = foods.iter().map(|f| f.food.sugar_or_zero()).sum();

    let pct = |grams: f64, kcal_per_gram: f64| {
        if total_calories > 0.0 {
            round1(grams * kcal_per_gram / total_calories * 100.0)
        } else {
            0.0
        }
    };

    NutritionAnalysis {
        total_calories: round1(total_calories),
        protein_percentage: pct(total_protein, PROTEIN_KCAL_PER_GRAM),
        carb_percentage: pct(total_carbs, CARB_KCAL_PER_GRAM),
        fat_percentage: pct(total_fat, FAT_KCAL_PER_GRAM),
        fiber_content: round1(total_fiber),
        sugar_content: round1(total_sugar),
    }
}

/// Macro balance for a single food (or a whole day), from gram amounts.
///
/// Calories are the Atwater estimate; the balance score is the share of
/// macros inside their healthy band. Out-of-band macros each get one
/// adjustment advice line.
pub fn macro_balance(protein: f64, fat: f64, carbohydrates: f64) -> MacroBalance {
    let estimated_calories = protein * PROTEIN_KCAL_PER_GRAM
        + fat * FAT_KCAL_PER_GRAM
        + carbohydrates * CARB_KCAL_PER_GRAM;

    let pct = |grams: f64, kcal_per_gram: f64| {
        if estimated_calories > 0.0 {
            round1(grams * kcal_per_gram / estimated_calories * 100.0)
        } else {
            0.0
        }
    };

    let protein_percentage = pct(protein, PROTEIN_KCAL_PER_GRAM);
    let fat_percentage = pct(fat, FAT_KCAL_PER_GRAM);
    let carbohydrate_percentage = pct(carbohydrates, CARB_KCAL_PER_GRAM);

    let mut in_band = 0u32;
    let mut recommendations = Vec::new();

    if protein_percentage < PROTEIN_PCT_RANGE.0 {
        recommendations.push("Kandungan protein rendah. Tambahkan sumber protein.".to_string());
    } else if protein_percentage > PROTEIN_PCT_RANGE.1 {
        recommendations.push("Kandungan protein tinggi. Kurangi asupan protein.".to_string());
    } else {
        in_band += 1;
    }

    if fat_percentage < FAT_PCT_RANGE.0 {
        recommendations.push("Kandungan lemak rendah. Tambahkan lemak sehat.".to_string());
    } else if fat_percentage > FAT_PCT_RANGE.1 {
        recommendations.push("Kandungan lemak tinggi. Kurangi asupan lemak.".to_string());
    } else {
        in_band += 1;
    }

    if carbohydrate_percentage < CARB_PCT_RANGE.0 {
        recommendations
            .push("Kandungan karbohidrat rendah. Tambahkan karbohidrat kompleks.".to_string());
    } else if carbohydrate_percentage > CARB_PCT_RANGE.1 {
        recommendations
            .push("Kandungan karbohidrat tinggi. Kurangi asupan karbohidrat.".to_string());
    } else {
        in_band += 1;
    }

    MacroBalance {
        estimated_calories: round1(estimated_calories),
        protein_percentage,
        fat_percentage,
        carbohydrate_percentage,
        balance_score: round1(f64::from(in_band) / 3.0 * 100.0),
        recommendations,
    }
}
