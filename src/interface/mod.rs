pub mod prompts;
pub mod render;

pub use prompts::{prompt_conditions, prompt_ingredients, prompt_yes_no};
pub use render::{display_food_list, display_macro_balance, display_outcome, display_report};
