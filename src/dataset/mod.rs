pub mod category;
pub mod loader;

pub use category::{categorize, estimate_fiber_sugar, resolve};
pub use loader::{load_foods, load_foods_csv, load_foods_json};
