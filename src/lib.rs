pub mod analysis;
pub mod cli;
pub mod dataset;
pub mod engine;
pub mod error;
pub mod interface;
pub mod models;
pub mod recommender;
pub mod scoring;

pub use error::{NutriError, Result};
pub use models::{FoodRecord, HealthCondition, RecommendationReport, ScoredFood};
pub use recommender::{RecommendRequest, Recommender, Strategy};
