pub mod food;
pub mod report;

pub use food::{FoodCategory, FoodRecord, HealthCondition, Nutrient, KNOWN_CONDITIONS};
pub use report::{
    HealthLabel, MacroBalance, MealFood, MealPlan, MealTotals, NutritionAnalysis,
    RecommendationReport, ScoredFood,
};
