use crate::analysis::round1;
use crate::models::{FoodCategory, FoodRecord};

const ANIMAL_PROTEIN_KEYWORDS: &[&str] = &[
    "ayam", "daging", "sapi", "kambing", "babi", "ikan", "udang", "telur", "susu", "keju",
    "empal", "cumi", "penyu", "domba",
];

const STAPLE_KEYWORDS: &[&str] = &[
    "nasi", "beras", "jagung", "singkong", "ubi", "kentang", "mie", "pasta", "roti", "oatmeal",
    "ketan", "tepung",
];

const VEGETABLE_KEYWORDS: &[&str] = &[
    "bayam", "kangkung", "brokoli", "wortel", "tomat", "terung", "labu", "daun", "sayur",
    "selada", "buncis", "kacang panjang", "pare", "seledri", "bawang", "cabai",
];

const FRUIT_KEYWORDS: &[&str] = &[
    "pisang", "apel", "jeruk", "mangga", "buah", "nanas", "pepaya", "alpukat", "jambu",
    "kedondong", "nangka", "markisa",
];

const PLANT_PROTEIN_KEYWORDS: &[&str] = &["tahu", "tempe", "kacang", "kedelai", "oncom", "koro"];

const SNACK_KEYWORDS: &[&str] = &[
    "kue", "cake", "biskuit", "kerupuk", "snack", "martabak", "putu", "misro", "getuk",
];

const BEVERAGE_KEYWORDS: &[&str] = &["teh", "kopi", "jus", "es", "minuman", "squash"];

const CONDIMENT_KEYWORDS: &[&str] = &[
    "merica", "garam", "gula", "minyak", "cuka", "petis", "rusip",
];

/// Derive a category from the food name.
///
/// First matching keyword list wins; the order matters (e.g. "kacang
/// panjang" is caught by the vegetable list before the legume list sees
/// "kacang").
pub fn categorize(name: &str) -> FoodCategory {
    let name = name.to_lowercase();
    let matches = |keywords: &[&str]| keywords.iter().any(|k| name.contains(k));

    if matches(ANIMAL_PROTEIN_KEYWORDS) {
        FoodCategory::AnimalProtein
    } else if matches(STAPLE_KEYWORDS) {
        FoodCategory::Staple
    } else if matches(VEGETABLE_KEYWORDS) {
        FoodCategory::Vegetable
    } else if matches(FRUIT_KEYWORDS) {
        FoodCategory::Fruit
    } else if matches(PLANT_PROTEIN_KEYWORDS) {
        FoodCategory::PlantProtein
    } else if matches(SNACK_KEYWORDS) {
        FoodCategory::Snack
    } else if matches(BEVERAGE_KEYWORDS) {
        FoodCategory::Beverage
    } else if matches(CONDIMENT_KEYWORDS) {
        FoodCategory::Condiment
    } else {
        FoodCategory::Other
    }
}

/// Estimate fiber and sugar (grams per 100 g) for a record that carries
/// neither, from category-typical fractions of its carbohydrates. A short
/// list of well-known foods gets fixed reference values instead.
pub fn estimate_fiber_sugar(name: &str, category: FoodCategory, carbohydrates: f64) -> (f64, f64) {
    let name = name.to_lowercase();

    let (fiber, sugar) = if name.contains("bayam") {
        (2.2, 0.4)
    } else if name.contains("brokoli") {
        (2.6, 1.5)
    } else if name.contains("wortel") {
        (2.8, 4.7)
    } else if name.contains("pisang") {
        (2.6, 12.2)
    } else if name.contains("apel") {
        (2.4, 10.4)
    } else if name.contains("nasi merah") || name.contains("beras merah") {
        (1.8, 0.4)
    } else if name.contains("oatmeal") {
        (2.8, 0.3)
    } else {
        match category {
            FoodCategory::Vegetable => (
                (carbohydrates * 0.3).max(0.5),
                (carbohydrates * 0.1).max(0.1),
            ),
            FoodCategory::Fruit => (
                (carbohydrates * 0.15).max(1.0),
                (carbohydrates * 0.6).max(2.0),
            ),
            FoodCategory::PlantProtein => (
                (carbohydrates * 0.25).max(2.0),
                (carbohydrates * 0.05).max(0.5),
            ),
            FoodCategory::Staple => (
                (carbohydrates * 0.08).max(0.5),
                (carbohydrates * 0.02).max(0.1),
            ),
            FoodCategory::AnimalProtein => (0.0, 0.0),
            FoodCategory::Snack => (
                (carbohydrates * 0.02).max(0.1),
                (carbohydrates * 0.4).max(1.0),
            ),
            _ => (
                (carbohydrates * 0.05).max(0.1),
                (carbohydrates * 0.1).max(0.1),
            ),
        }
    };

    (round1(fiber), round1(sugar))
}

/// Fill in category, fiber, and sugar where the record lacks them. Measured
/// values always win over estimates.
pub fn resolve(food: &FoodRecord) -> FoodRecord {
    let mut resolved = food.clone();

    let category = resolved.category.unwrap_or_else(|| categorize(&resolved.name));
    resolved.category = Some(category);

    if resolved.fiber.is_none() || resolved.sugar.is_none() {
        let (fiber, sugar) = estimate_fiber_sugar(&resolved.name, category, resolved.carbohydrates);
        resolved.fiber.get_or_insert(fiber);
        resolved.sugar.get_or_insert(sugar);
    }

    resolved
}
