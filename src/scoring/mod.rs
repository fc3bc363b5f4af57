pub mod constants;
pub mod heuristic;

pub use constants::*;
pub use heuristic::{health_labels, health_score};
