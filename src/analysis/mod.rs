pub mod aggregate;
pub mod meals;

pub use aggregate::{analyze, macro_balance, round1};
pub use meals::{build_meal_plans, MealLayout, MealSlot, MIN_FOODS_FOR_PLANS};
