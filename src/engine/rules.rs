use serde::{Deserialize, Serialize};

use crate::models::{FoodRecord, HealthCondition, Nutrient};

/// A rule predicate over a food's nutrient fields.
///
/// Predicates are data, not closures, so a rule table can be serialized and
/// inspected. A comparison on a nutrient the record does not carry evaluates
/// to false; the rule simply does not fire.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Predicate {
    /// Nutrient value strictly above the threshold.
    Above(Nutrient, f64),
    /// Nutrient value strictly below the threshold.
    Below(Nutrient, f64),
    /// Every sub-predicate matches.
    All(Vec<Predicate>),
    /// At least one sub-predicate matches.
    Any(Vec<Predicate>),
}

impl Predicate {
    pub fn matches(&self, food: &FoodRecord) -> bool {
        match self {
            Predicate::Above(nutrient, threshold) => {
                food.nutrient(*nutrient).map_or(false, |v| v > *threshold)
            }
            Predicate::Below(nutrient, threshold) => {
                food.nutrient(*nutrient).map_or(false, |v| v < *threshold)
            }
            Predicate::All(parts) => parts.iter().all(|p| p.matches(food)),
            Predicate::Any(parts) => parts.iter().any(|p| p.matches(food)),
        }
    }
}

/// What a firing rule says about the food.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleAction {
    Recommend,
    Avoid,
}

/// One condition→action rule.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Rule {
    /// Condition this rule belongs to; `None` means it applies regardless of
    /// the active conditions (a general rule).
    pub condition: Option<HealthCondition>,
    pub predicate: Predicate,
    pub action: RuleAction,
    /// Higher priority is a stronger signal.
    pub priority: u8,
    pub explanation: String,
}

impl Rule {
    fn new(
        condition: Option<HealthCondition>,
        predicate: Predicate,
        action: RuleAction,
        priority: u8,
        explanation: &str,
    ) -> Self {
        Self {
            condition,
            predicate,
            action,
            priority,
            explanation: explanation.to_string(),
        }
    }
}

/// An immutable rule table, built once and shared by reference.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    pub fn new(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Rule> {
        self.rules.iter()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// The standard expert rule table.
    pub fn standard() -> Self {
        use HealthCondition::*;
        use Nutrient::*;
        use Predicate::*;
        use RuleAction::*;

        Self::new(vec![
            Rule::new(
                Some(Diabetes),
                Any(vec![Above(Sugar, 10.0), Above(Carbohydrates, 25.0)]),
                Avoid,
                1,
                "Makanan tinggi gula dan karbohidrat tidak baik untuk penderita diabetes",
            ),
            Rule::new(
                Some(Diabetes),
                All(vec![Above(Fiber, 3.0), Below(Sugar, 8.0)]),
                Recommend,
                2,
                "Makanan tinggi serat dan rendah gula baik untuk penderita diabetes",
            ),
            Rule::new(
                Some(Hypertension),
                Above(Sodium, 200.0),
                Avoid,
                1,
                "Makanan tinggi sodium tidak baik untuk penderita hipertensi",
            ),
            Rule::new(
                Some(Hypertension),
                All(vec![Above(Potassium, 300.0), Below(Sodium, 100.0)]),
                Recommend,
                2,
                "Makanan tinggi kalium dan rendah sodium baik untuk penderita hipertensi",
            ),
            Rule::new(
                Some(Obesity),
                Any(vec![Above(Calories, 200.0), Above(Fat, 15.0)]),
                Avoid,
                1,
                "Makanan tinggi kalori dan lemak tidak baik untuk penderita obesitas",
            ),
            Rule::new(
                Some(Obesity),
                All(vec![Above(Fiber, 2.0), Below(Calories, 100.0)]),
                Recommend,
                2,
                "Makanan tinggi serat dan rendah kalori baik untuk penderita obesitas",
            ),
            Rule::new(
                Some(HeartHealth),
                Any(vec![Above(Fat, 20.0), Above(Sodium, 300.0)]),
                Avoid,
                1,
                "Makanan tinggi lemak dan sodium tidak baik untuk kesehatan jantung",
            ),
            Rule::new(
                Some(HeartHealth),
                All(vec![Above(Fiber, 3.0), Below(Fat, 10.0)]),
                Recommend,
                2,
                "Makanan tinggi serat dan rendah lemak baik untuk kesehatan jantung",
            ),
            Rule::new(
                None,
                Above(VitaminC, 20.0),
                Recommend,
                3,
                "Makanan tinggi vitamin C baik untuk sistem imun",
            ),
            Rule::new(
                None,
                Above(Iron, 2.0),
                Recommend,
                3,
                "Makanan tinggi zat besi baik untuk kesehatan darah",
            ),
        ])
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::standard()
    }
}
