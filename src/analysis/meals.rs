use serde::{Deserialize, Serialize};

use crate::analysis::aggregate::round1;
use crate::models::{MealFood, MealPlan, MealTotals, ScoredFood};

/// Minimum ranked foods before any meal plan is produced.
pub const MIN_FOODS_FOR_PLANS: usize = 3;

/// One named slice of the ranked list.
#[derive(Debug, Clone, Copy)]
pub struct MealSlot {
    pub label: &'static str,
    pub start: usize,
    pub end: usize,
}

/// Which slot table to partition the ranked list with.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MealLayout {
    /// Two-food meals throughout.
    Compact,
    /// Three-food lunch and dinner.
    #[default]
    Extended,
}

const COMPACT_SLOTS: [MealSlot; 3] = [
    MealSlot {
        label: "Sarapan Sehat",
        start: 0,
        end: 2,
    },
    MealSlot {
        label: "Makan Siang Sehat",
        start: 2,
        end: 4,
    },
    MealSlot {
        label: "Makan Malam Sehat",
        start: 4,
        end: 6,
    },
];

const EXTENDED_SLOTS: [MealSlot; 3] = [
    MealSlot {
        label: "Sarapan Sehat",
        start: 0,
        end: 2,
    },
    MealSlot {
        label: "Makan Siang Bergizi",
        start: 2,
        end: 5,
    },
    MealSlot {
        label: "Makan Malam Ringan",
        start: 5,
        end: 8,
    },
];

impl MealLayout {
    pub fn slots(self) -> &'static [MealSlot] {
        match self {
            MealLayout::Compact => &COMPACT_SLOTS,
            MealLayout::Extended => &EXTENDED_SLOTS,
        }
    }
}

/// Partition the ranked food list into meal plans.
///
/// Slices are fixed index ranges from the slot table; a slice that falls
/// wholly past the end of the list is skipped. Fewer than
/// `MIN_FOODS_FOR_PLANS` foods produce no plans at all.
pub fn build_meal_plans(ranked: &[ScoredFood], layout: MealLayout) -> Vec<MealPlan> {
    if ranked.len() < MIN_FOODS_FOR_PLANS {
        return Vec::new();
    }

    layout
        .slots()
        .iter()
        .filter_map(|slot| {
            let slice = ranked.get(slot.start..slot.end.min(ranked.len()))?;
            if slice.is_empty() {
                return None;
            }
            Some(plan_for_slice(slot.label, slice))
        })
        .collect()
}

fn plan_for_slice(label: &str, slice: &[ScoredFood]) -> MealPlan {
    let total_calories: f64 = slice.iter().map(|f| f.food.calories).sum();

    MealPlan {
        meal_type: label.to_string(),
        total_calories: round1(total_calories),
        foods: slice
            .iter()
            .map(|f| MealFood {
                name: f.food.name.clone(),
                calories: f.food.calories,
            })
            .collect(),
        nutrition: MealTotals {
            protein: round1(slice.iter().map(|f| f.food.protein).sum()),
            carbohydrates: round1(slice.iter().map(|f| f.food.carbohydrates).sum()),
            fat: round1(slice.iter().map(|f| f.food.fat).sum()),
            fiber: round1(slice.iter().map(|f| f.food.fiber_or_zero()).sum()),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FoodRecord;

    fn scored(name: &str, calories: f64) -> ScoredFood {
        ScoredFood {
            food: FoodRecord {
                name: name.to_string(),
                category: None,
                calories,
                protein: 5.0,
                fat: 2.0,
                carbohydrates: 10.0,
                fiber: Some(1.5),
                sugar: Some(1.0),
                sodium: None,
                potassium: None,
                calcium: None,
                iron: None,
                vitamin_c: None,
            },
            health_score: 4,
            health_labels: Vec::new(),
            suitable_for: Vec::new(),
            explanations: Vec::new(),
        }
    }

    fn ranked(n: usize) -> Vec<ScoredFood> {
        (0..n)
            .map(|i| scored(&format!("Food {}", i), 100.0 + i as f64))
            .collect()
    }

    #[test]
    fn test_too_few_foods_no_plans() {
        assert!(build_meal_plans(&ranked(0), MealLayout::Extended).is_empty());
        assert!(build_meal_plans(&ranked(2), MealLayout::Extended).is_empty());
    }

    #[test]
    fn test_extended_layout_slices() {
        let plans = build_meal_plans(&ranked(8), MealLayout::Extended);
        assert_eq!(plans.len(), 3);

        assert_eq!(plans[0].meal_type, "Sarapan Sehat");
        assert_eq!(plans[0].foods.len(), 2);
        assert_eq!(plans[1].foods.len(), 3);
        assert_eq!(plans[2].foods.len(), 3);

        // Slices are contiguous and in rank order.
        assert_eq!(plans[0].foods[0].name, "Food 0");
        assert_eq!(plans[1].foods[0].name, "Food 2");
        assert_eq!(plans[2].foods[0].name, "Food 5");
    }

    #[test]
    fn test_partial_tail_slice() {
        // Four foods: breakfast [0,2), lunch [2,4) truncated, no dinner.
        let plans = build_meal_plans(&ranked(4), MealLayout::Extended);
        assert_eq!(plans.len(), 2);
        assert_eq!(plans[1].foods.len(), 2);
    }

    #[test]
    fn test_compact_layout() {
        let plans = build_meal_plans(&ranked(6), MealLayout::Compact);
        assert_eq!(plans.len(), 3);
        assert!(plans.iter().all(|p| p.foods.len() == 2));
        assert_eq!(plans[1].meal_type, "Makan Siang Sehat");
    }

    #[test]
    fn test_slice_totals() {
        let plans = build_meal_plans(&ranked(3), MealLayout::Compact);
        let breakfast = &plans[0];

        assert_eq!(breakfast.total_calories, 201.0);
        assert_eq!(breakfast.nutrition.protein, 10.0);
        assert_eq!(breakfast.nutrition.fiber, 3.0);
    }
}
