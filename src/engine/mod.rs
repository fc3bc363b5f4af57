pub mod chaining;
pub mod rules;

pub use chaining::{apply_rules, ClassifiedFood, RecommendedFood, RuleOutcome, NEUTRAL_EXPLANATION};
pub use rules::{Predicate, Rule, RuleAction, RuleSet};
