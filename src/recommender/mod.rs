pub mod advice;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use crate::analysis::{analyze, build_meal_plans, MealLayout};
use crate::dataset::resolve;
use crate::engine::{apply_rules, RuleOutcome, RuleSet};
use crate::models::{FoodRecord, HealthCondition, RecommendationReport, ScoredFood};
use crate::scoring::{health_labels, health_score};

pub use advice::{advice_for, collect_advice};

/// Default top-N cutoff for the recommended list.
pub const DEFAULT_TOP_N: usize = 10;

/// General fallback bounds: "ordinarily healthy" foods offered when the
/// caller opts in and the strategy yields nothing.
const FALLBACK_CAL_LIMIT: f64 = 300.0;
const FALLBACK_FAT_LIMIT: f64 = 15.0;
const FALLBACK_CARB_LIMIT: f64 = 40.0;

/// How foods are scored and selected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Expert rule engine: any firing avoid rule vetoes the food; the score
    /// is the strongest firing recommend priority.
    Strict,
    /// Heuristic point accumulation: penalties lower the score but nothing
    /// is excluded outright.
    #[default]
    Weighted,
}

/// One recommendation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendRequest {
    pub conditions: Vec<HealthCondition>,

    /// Name substrings to pre-filter the dataset with (case-insensitive,
    /// any-of). Empty means no filtering.
    pub available_ingredients: Vec<String>,

    pub top_n: usize,

    pub strategy: Strategy,

    pub layout: MealLayout,

    /// Shuffle seed applied before the stable sort, so equal scores get a
    /// reproducible, seed-determined order. `None` keeps input order on ties.
    pub seed: Option<u64>,

    /// Offer generally healthy foods when the strategy yields nothing.
    pub general_fallback: bool,
}

impl Default for RecommendRequest {
    fn default() -> Self {
        Self {
            conditions: Vec::new(),
            available_ingredients: Vec::new(),
            top_n: DEFAULT_TOP_N,
            strategy: Strategy::default(),
            layout: MealLayout::default(),
            seed: None,
            general_fallback: false,
        }
    }
}

/// The recommendation engine. Holds the immutable rule table; every call is
/// an independent, stateless evaluation, so one instance can be shared
/// freely across threads.
#[derive(Debug, Clone)]
pub struct Recommender {
    rules: RuleSet,
}

impl Default for Recommender {
    fn default() -> Self {
        Self::new(RuleSet::standard())
    }
}

impl Recommender {
    pub fn new(rules: RuleSet) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Rule-engine classification into recommended / avoid / neutral, after
    /// resolving categories and fiber/sugar estimates.
    pub fn classify(
        &self,
        foods: &[FoodRecord],
        conditions: &[HealthCondition],
    ) -> RuleOutcome {
        let resolved: Vec<FoodRecord> = foods
            .iter()
            .filter(|f| f.is_valid())
            .map(resolve)
            .collect();
        apply_rules(&self.rules, &resolved, conditions)
    }

    /// Produce the full recommendation report for one request.
    ///
    /// An empty result is a valid outcome: empty food lists, filters that
    /// match nothing, and strategies that recommend nothing all yield empty
    /// lists and zeroed aggregates, never an error.
    pub fn recommend(&self, foods: &[FoodRecord], request: &RecommendRequest) -> RecommendationReport {
        let resolved: Vec<FoodRecord> = foods
            .iter()
            .filter(|f| f.is_valid())
            .filter(|f| matches_ingredients(f, &request.available_ingredients))
            .map(resolve)
            .collect();

        let mut scored: Vec<ScoredFood> = match request.strategy {
            Strategy::Weighted => resolved
                .iter()
                .map(|food| self.scored(food, &request.conditions))
                .collect(),
            Strategy::Strict => {
                let outcome = apply_rules(&self.rules, &resolved, &request.conditions);
                outcome
                    .recommended
                    .into_iter()
                    .map(|entry| ScoredFood {
                        health_score: entry.score,
                        health_labels: health_labels(&entry.food),
                        suitable_for: request.conditions.clone(),
                        explanations: entry.reasons,
                        food: entry.food,
                    })
                    .collect()
            }
        };

        if scored.is_empty() && request.general_fallback {
            scored = self.general_fallback(&resolved, &request.conditions);
        }

        if let Some(seed) = request.seed {
            let mut rng = StdRng::seed_from_u64(seed);
            scored.shuffle(&mut rng);
        }

        // Stable sort: ties keep their current (input or shuffled) order.
        scored.sort_by(|a, b| b.health_score.cmp(&a.health_score));
        scored.truncate(request.top_n);

        let nutrition_analysis = analyze(&scored);
        let health_advice = collect_advice(&request.conditions);
        let meal_plans = build_meal_plans(&scored, request.layout);

        RecommendationReport {
            recommended_foods: scored,
            nutrition_analysis,
            health_advice,
            meal_plans,
        }
    }

    fn scored(&self, food: &FoodRecord, conditions: &[HealthCondition]) -> ScoredFood {
        ScoredFood {
            health_score: health_score(food, conditions),
            health_labels: health_labels(food),
            suitable_for: conditions.to_vec(),
            explanations: Vec::new(),
            food: food.clone(),
        }
    }

    fn general_fallback(
        &self,
        resolved: &[FoodRecord],
        conditions: &[HealthCondition],
    ) -> Vec<ScoredFood> {
        resolved
            .iter()
            .filter(|f| {
                f.calories <= FALLBACK_CAL_LIMIT
                    && f.fat <= FALLBACK_FAT_LIMIT
                    && f.carbohydrates <= FALLBACK_CARB_LIMIT
            })
            .map(|food| self.scored(food, conditions))
            .collect()
    }
}

fn matches_ingredients(food: &FoodRecord, ingredients: &[String]) -> bool {
    if ingredients.is_empty() {
        return true;
    }
    let name = food.name.to_lowercase();
    ingredients
        .iter()
        .any(|ingredient| name.contains(&ingredient.to_lowercase()))
}
