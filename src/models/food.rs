use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Food category derived from the food name (or given by the dataset).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FoodCategory {
    #[serde(rename = "Protein Hewani")]
    AnimalProtein,
    #[serde(rename = "Makanan Pokok")]
    Staple,
    #[serde(rename = "Sayuran")]
    Vegetable,
    #[serde(rename = "Buah-buahan")]
    Fruit,
    #[serde(rename = "Protein Nabati")]
    PlantProtein,
    #[serde(rename = "Kue dan Snack")]
    Snack,
    #[serde(rename = "Minuman")]
    Beverage,
    #[serde(rename = "Bumbu dan Condiment")]
    Condiment,
    #[serde(rename = "Lainnya")]
    Other,
}

impl FoodCategory {
    /// Vegetables and fruits count as antioxidant sources for scoring.
    pub fn is_antioxidant_source(self) -> bool {
        matches!(self, FoodCategory::Vegetable | FoodCategory::Fruit)
    }

    /// Dataset-facing label.
    pub fn label(self) -> &'static str {
        match self {
            FoodCategory::AnimalProtein => "Protein Hewani",
            FoodCategory::Staple => "Makanan Pokok",
            FoodCategory::Vegetable => "Sayuran",
            FoodCategory::Fruit => "Buah-buahan",
            FoodCategory::PlantProtein => "Protein Nabati",
            FoodCategory::Snack => "Kue dan Snack",
            FoodCategory::Beverage => "Minuman",
            FoodCategory::Condiment => "Bumbu dan Condiment",
            FoodCategory::Other => "Lainnya",
        }
    }
}

impl fmt::Display for FoodCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A declared health condition.
///
/// The first four carry rules, score adjustments, and advice. The rest are
/// accepted identifiers with no effect yet, and `Other` keeps any unknown
/// identifier a caller sends without treating it as an error.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HealthCondition {
    #[serde(rename = "diabetes")]
    Diabetes,
    #[serde(rename = "hipertensi")]
    Hypertension,
    #[serde(rename = "obesitas")]
    Obesity,
    #[serde(rename = "jantung")]
    HeartHealth,
    #[serde(rename = "kolesterol")]
    Cholesterol,
    #[serde(rename = "asam_urat")]
    Gout,
    #[serde(rename = "ginjal")]
    Kidney,
    #[serde(rename = "lambung")]
    Gastric,
    #[serde(rename = "tiroid")]
    Thyroid,
    #[serde(rename = "alergi")]
    Allergy,
    #[serde(untagged)]
    Other(String),
}

/// Identifiers accepted by `conditions` listings and prompts.
pub static KNOWN_CONDITIONS: [HealthCondition; 10] = [
    HealthCondition::Diabetes,
    HealthCondition::Hypertension,
    HealthCondition::Obesity,
    HealthCondition::HeartHealth,
    HealthCondition::Cholesterol,
    HealthCondition::Gout,
    HealthCondition::Kidney,
    HealthCondition::Gastric,
    HealthCondition::Thyroid,
    HealthCondition::Allergy,
];

impl HealthCondition {
    /// Parse an identifier. Unknown identifiers become `Other` and simply
    /// contribute nothing downstream; parsing never fails.
    pub fn parse_id(s: &str) -> Self {
        let id = s.trim().to_lowercase();
        KNOWN_CONDITIONS
            .iter()
            .find(|c| c.id() == id)
            .cloned()
            .unwrap_or(HealthCondition::Other(id))
    }

    /// Stable string identifier, as used by the dataset and the CLI.
    pub fn id(&self) -> &str {
        match self {
            HealthCondition::Diabetes => "diabetes",
            HealthCondition::Hypertension => "hipertensi",
            HealthCondition::Obesity => "obesitas",
            HealthCondition::HeartHealth => "jantung",
            HealthCondition::Cholesterol => "kolesterol",
            HealthCondition::Gout => "asam_urat",
            HealthCondition::Kidney => "ginjal",
            HealthCondition::Gastric => "lambung",
            HealthCondition::Thyroid => "tiroid",
            HealthCondition::Allergy => "alergi",
            HealthCondition::Other(id) => id,
        }
    }
}

impl fmt::Display for HealthCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for HealthCondition {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Self::parse_id(s))
    }
}

/// Nutrient fields a rule predicate can reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Nutrient {
    Calories,
    Protein,
    Fat,
    Carbohydrates,
    Fiber,
    Sugar,
    Sodium,
    Potassium,
    Calcium,
    Iron,
    VitaminC,
}

/// A food item with nutritional data.
///
/// Macros default to 0 when a row omits them; fiber, sugar, and the micro
/// nutrients stay `None` until measured or estimated. Values are per 100 g.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodRecord {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<FoodCategory>,

    #[serde(default)]
    pub calories: f64,

    #[serde(default, alias = "proteins")]
    pub protein: f64,

    #[serde(default)]
    pub fat: f64,

    #[serde(default, alias = "carbohydrate", alias = "carbs")]
    pub carbohydrates: f64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fiber: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sugar: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sodium: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub potassium: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calcium: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iron: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vitamin_c: Option<f64>,
}

impl FoodRecord {
    /// Look up a nutrient value. `None` means the record does not carry the
    /// field, which rule predicates must treat as "not firing".
    pub fn nutrient(&self, nutrient: Nutrient) -> Option<f64> {
        match nutrient {
            Nutrient::Calories => Some(self.calories),
            Nutrient::Protein => Some(self.protein),
            Nutrient::Fat => Some(self.fat),
            Nutrient::Carbohydrates => Some(self.carbohydrates),
            Nutrient::Fiber => self.fiber,
            Nutrient::Sugar => self.sugar,
            Nutrient::Sodium => self.sodium,
            Nutrient::Potassium => self.potassium,
            Nutrient::Calcium => self.calcium,
            Nutrient::Iron => self.iron,
            Nutrient::VitaminC => self.vitamin_c,
        }
    }

    /// Fiber with the unmeasured case treated as zero for scoring.
    #[inline]
    pub fn fiber_or_zero(&self) -> f64 {
        self.fiber.unwrap_or(0.0)
    }

    /// Sugar with the unmeasured case treated as zero for scoring.
    #[inline]
    pub fn sugar_or_zero(&self) -> f64 {
        self.sugar.unwrap_or(0.0)
    }

    /// Basic validation: finite, non-negative nutrient values.
    pub fn is_valid(&self) -> bool {
        let required = [self.calories, self.protein, self.fat, self.carbohydrates];
        let optional = [
            self.fiber,
            self.sugar,
            self.sodium,
            self.potassium,
            self.calcium,
            self.iron,
            self.vitamin_c,
        ];

        !self.name.trim().is_empty()
            && required.iter().all(|v| v.is_finite() && *v >= 0.0)
            && optional
                .iter()
                .flatten()
                .all(|v| v.is_finite() && *v >= 0.0)
    }

    /// Canonical key for lookups (lowercase name).
    pub fn key(&self) -> String {
        self.name.to_lowercase()
    }
}
