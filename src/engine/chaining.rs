use serde::{Deserialize, Serialize};

use crate::engine::rules::{Rule, RuleAction, RuleSet};
use crate::models::{FoodRecord, HealthCondition};

/// Explanation attached to foods no rule fired on.
pub const NEUTRAL_EXPLANATION: &str = "Tidak ada aturan khusus yang berlaku";

/// A food placed in the recommended bucket.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendedFood {
    pub food: FoodRecord,
    /// Highest priority among the recommend rules that fired.
    pub score: i32,
    pub reasons: Vec<String>,
}

/// A food placed in the avoid or neutral bucket.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifiedFood {
    pub food: FoodRecord,
    pub reasons: Vec<String>,
}

/// Result of one classification pass over a food collection.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuleOutcome {
    pub recommended: Vec<RecommendedFood>,
    pub avoid: Vec<ClassifiedFood>,
    pub neutral: Vec<ClassifiedFood>,
}

/// Classify every food into recommended / avoid / neutral.
///
/// Applicable rules are the general rules plus each active condition's rules,
/// so general rules fire even with an empty condition list. A single firing
/// avoid rule vetoes the food regardless of recommend rules; the recommended
/// score is the maximum priority among firing recommend rules. Bucket order
/// follows input order.
pub fn apply_rules(
    rules: &RuleSet,
    foods: &[FoodRecord],
    conditions: &[HealthCondition],
) -> RuleOutcome {
    let applicable: Vec<&Rule> = rules
        .iter()
        .filter(|rule| match &rule.condition {
            None => true,
            Some(condition) => conditions.contains(condition),
        })
        .collect();

    let mut outcome = RuleOutcome::default();

    for food in foods {
        let mut recommend_reasons = Vec::new();
        let mut avoid_reasons = Vec::new();
        let mut best_priority = 0u8;

        for rule in &applicable {
            if !rule.predicate.matches(food) {
                continue;
            }
            match rule.action {
                RuleAction::Recommend => {
                    best_priority = best_priority.max(rule.priority);
                    if !recommend_reasons.contains(&rule.explanation) {
                        recommend_reasons.push(rule.explanation.clone());
                    }
                }
                RuleAction::Avoid => {
                    if !avoid_reasons.contains(&rule.explanation) {
                        avoid_reasons.push(rule.explanation.clone());
                    }
                }
            }
        }

        if !avoid_reasons.is_empty() {
            outcome.avoid.push(ClassifiedFood {
                food: food.clone(),
                reasons: avoid_reasons,
            });
        } else if !recommend_reasons.is_empty() {
            outcome.recommended.push(RecommendedFood {
                food: food.clone(),
                score: i32::from(best_priority),
                reasons: recommend_reasons,
            });
        } else {
            outcome.neutral.push(ClassifiedFood {
                food: food.clone(),
                reasons: vec![NEUTRAL_EXPLANATION.to_string()],
            });
        }
    }

    outcome
}

#[cfg(test)]
mod tests {
    use super::*;

    fn food(name: &str) -> FoodRecord {
        FoodRecord {
            name: name.to_string(),
            category: None,
            calories: 0.0,
            protein: 0.0,
            fat: 0.0,
            carbohydrates: 0.0,
            fiber: None,
            sugar: None,
            sodium: None,
            potassium: None,
            calcium: None,
            iron: None,
            vitamin_c: None,
        }
    }

    #[test]
    fn test_recommend_bucket_for_diabetic_friendly_food() {
        let mut oatmeal = food("Oatmeal");
        oatmeal.carbohydrates = 12.0;
        oatmeal.fiber = Some(4.0);
        oatmeal.sugar = Some(0.3);

        let outcome = apply_rules(
            &RuleSet::standard(),
            &[oatmeal],
            &[HealthCondition::Diabetes],
        );

        assert_eq!(outcome.recommended.len(), 1);
        assert_eq!(outcome.recommended[0].score, 2);
        assert!(outcome.avoid.is_empty());
    }

    #[test]
    fn test_avoid_is_a_veto() {
        // Fires both the diabetes recommend rule (fiber > 3, sugar < 8) and
        // the avoid rule (carbs > 25): the veto wins.
        let mut mixed = food("Roti Gandum Manis");
        mixed.carbohydrates = 45.0;
        mixed.fiber = Some(5.0);
        mixed.sugar = Some(6.0);

        let outcome = apply_rules(
            &RuleSet::standard(),
            &[mixed],
            &[HealthCondition::Diabetes],
        );

        assert!(outcome.recommended.is_empty());
        assert_eq!(outcome.avoid.len(), 1);
    }

    #[test]
    fn test_general_rules_apply_without_conditions() {
        let mut jambu = food("Jambu Biji");
        jambu.vitamin_c = Some(228.0);

        let outcome = apply_rules(&RuleSet::standard(), &[jambu], &[]);

        assert_eq!(outcome.recommended.len(), 1);
        assert_eq!(outcome.recommended[0].score, 3);
    }

    #[test]
    fn test_neutral_when_nothing_fires() {
        let plain = food("Air Putih");
        let outcome = apply_rules(&RuleSet::standard(), &[plain], &[HealthCondition::Diabetes]);

        assert!(outcome.recommended.is_empty());
        assert!(outcome.avoid.is_empty());
        assert_eq!(outcome.neutral.len(), 1);
        assert_eq!(outcome.neutral[0].reasons, vec![NEUTRAL_EXPLANATION]);
    }

    #[test]
    fn test_empty_food_list_yields_empty_buckets() {
        let outcome = apply_rules(&RuleSet::standard(), &[], &[HealthCondition::Obesity]);
        assert!(outcome.recommended.is_empty());
        assert!(outcome.avoid.is_empty());
        assert!(outcome.neutral.is_empty());
    }

    #[test]
    fn test_unruled_condition_is_not_an_error() {
        let mut bayam = food("Bayam");
        bayam.iron = Some(2.7);

        let outcome = apply_rules(
            &RuleSet::standard(),
            &[bayam],
            &[HealthCondition::Thyroid],
        );

        // Only the general iron rule fires; the thyroid condition simply has
        // no rules of its own.
        assert_eq!(outcome.recommended.len(), 1);
    }

    #[test]
    fn test_score_is_max_priority() {
        let mut bayam = food("Bayam");
        bayam.calories = 23.0;
        bayam.fiber = Some(2.2);
        bayam.iron = Some(2.7);
        bayam.vitamin_c = Some(28.0);

        let outcome = apply_rules(&RuleSet::standard(), &[bayam], &[HealthCondition::Obesity]);

        // Obesity recommend (priority 2) and both general rules (priority 3)
        // fire; the score keeps the maximum, the reasons keep all of them.
        assert_eq!(outcome.recommended.len(), 1);
        assert_eq!(outcome.recommended[0].score, 3);
        assert_eq!(outcome.recommended[0].reasons.len(), 3);
    }
}
