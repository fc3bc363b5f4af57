use serde::{Deserialize, Serialize};

use crate::models::food::{FoodRecord, HealthCondition};

/// Descriptive nutrition tag. Labels never feed back into scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HealthLabel {
    #[serde(rename = "tinggi_protein")]
    HighProtein,
    #[serde(rename = "rendah_lemak")]
    LowFat,
    #[serde(rename = "rendah_karbohidrat")]
    LowCarb,
    #[serde(rename = "tinggi_serat")]
    HighFiber,
    #[serde(rename = "rendah_kalori")]
    LowCalorie,
    #[serde(rename = "rendah_gula")]
    LowSugar,
    #[serde(rename = "antioksidan")]
    Antioxidant,
}

impl HealthLabel {
    pub fn id(self) -> &'static str {
        match self {
            HealthLabel::HighProtein => "tinggi_protein",
            HealthLabel::LowFat => "rendah_lemak",
            HealthLabel::LowCarb => "rendah_karbohidrat",
            HealthLabel::HighFiber => "tinggi_serat",
            HealthLabel::LowCalorie => "rendah_kalori",
            HealthLabel::LowSugar => "rendah_gula",
            HealthLabel::Antioxidant => "antioksidan",
        }
    }
}

/// A food record with its evaluation result attached.
///
/// In weighted mode `health_score` is clamped to 1..=5; in strict mode it is
/// the highest priority among the recommend rules that fired.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredFood {
    #[serde(flatten)]
    pub food: FoodRecord,

    pub health_score: i32,

    pub health_labels: Vec<HealthLabel>,

    /// Conditions this food was evaluated against.
    pub suitable_for: Vec<HealthCondition>,

    /// Explanations of the rules that fired (strict mode only).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub explanations: Vec<String>,
}

/// Aggregate macro breakdown over a recommended food list.
///
/// Percentages use the 4/4/9 kcal-per-gram factors and are all 0 when
/// `total_calories` is 0.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NutritionAnalysis {
    pub total_calories: f64,
    pub protein_percentage: f64,
    pub carb_percentage: f64,
    pub fat_percentage: f64,
    pub fiber_content: f64,
    pub sugar_content: f64,
}

/// One food entry inside a meal plan slice.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MealFood {
    pub name: String,
    pub calories: f64,
}

/// Nutrition totals summed over a meal plan slice.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MealTotals {
    pub protein: f64,
    pub carbohydrates: f64,
    pub fat: f64,
    pub fiber: f64,
}

/// A named slice of the ranked food list with summed nutrition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MealPlan {
    pub meal_type: String,
    pub total_calories: f64,
    pub foods: Vec<MealFood>,
    pub nutrition: MealTotals,
}

/// Macro balance analysis for a single food or a day's intake.
///
/// Calories are estimated from the Atwater factors; the balance score counts
/// how many macros fall inside the healthy band (as a percentage of 3).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MacroBalance {
    pub estimated_calories: f64,
    pub protein_percentage: f64,
    pub fat_percentage: f64,
    pub carbohydrate_percentage: f64,
    pub balance_score: f64,
    pub recommendations: Vec<String>,
}

/// Complete result of one recommendation call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationReport {
    pub recommended_foods: Vec<ScoredFood>,
    pub nutrition_analysis: NutritionAnalysis,
    pub health_advice: Vec<String>,
    pub meal_plans: Vec<MealPlan>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::food::FoodCategory;

    #[test]
    fn test_scored_food_flattens_record() {
        let scored = ScoredFood {
            food: FoodRecord {
                name: "Pisang".to_string(),
                category: Some(FoodCategory::Fruit),
                calories: 89.0,
                protein: 1.1,
                fat: 0.3,
                carbohydrates: 22.8,
                fiber: Some(2.6),
                sugar: Some(12.2),
                sodium: None,
                potassium: Some(358.0),
                calcium: None,
                iron: None,
                vitamin_c: None,
            },
            health_score: 4,
            health_labels: vec![HealthLabel::Antioxidant],
            suitable_for: vec![HealthCondition::Hypertension],
            explanations: Vec::new(),
        };

        let json = serde_json::to_value(&scored).unwrap();
        assert_eq!(json["name"], "Pisang");
        assert_eq!(json["health_score"], 4);
        assert_eq!(json["health_labels"][0], "antioksidan");
        assert_eq!(json["suitable_for"][0], "hipertensi");
        assert!(json.get("explanations").is_none());
    }

    #[test]
    fn test_default_analysis_is_zeroed() {
        let analysis = NutritionAnalysis::default();
        assert_eq!(analysis.total_calories, 0.0);
        assert_eq!(analysis.protein_percentage, 0.0);
    }
}
