use crate::models::{FoodRecord, HealthCondition, HealthLabel};
use crate::scoring::constants::*;

/// Heuristic suitability score in [1,5].
///
/// Point accumulation from a base of 3.0 over the general nutrient thresholds,
/// then one adjustment per active condition, then round and clamp. Unmeasured
/// fiber/sugar count as zero. Pure function: identical inputs always yield the
/// identical score.
pub fn health_score(food: &FoodRecord, conditions: &[HealthCondition]) -> i32 {
    let fiber = food.fiber_or_zero();
    let sugar = food.sugar_or_zero();

    let mut score = BASE_SCORE;

    if food.calories <= CAL_LOW {
        score += 1.0;
    } else if food.calories <= CAL_MODERATE {
        score += 0.5;
    } else if food.calories > CAL_HIGH {
        score -= 1.0;
    }

    if food.protein >= PROTEIN_HIGH {
        score += 1.0;
    } else if food.protein >= PROTEIN_MODERATE {
        score += 0.5;
    } else if food.protein < PROTEIN_LOW {
        score -= 0.5;
    }

    if food.fat <= FAT_LOW {
        score += 1.0;
    } else if food.fat <= FAT_MODERATE {
        score += 0.5;
    } else if food.fat > FAT_HIGH {
        score -= 1.0;
    }

    if food.carbohydrates <= CARB_LOW {
        score += 0.5;
    } else if food.carbohydrates > CARB_HIGH {
        score -= 0.5;
    }

    if fiber >= FIBER_HIGH {
        score += 1.0;
    } else if fiber >= FIBER_MODERATE {
        score += 0.5;
    }

    if sugar <= SUGAR_LOW {
        score += 1.0;
    } else if sugar <= SUGAR_MODERATE {
        score += 0.5;
    } else if sugar > SUGAR_HIGH {
        score -= 1.0;
    }

    if food
        .category
        .is_some_and(|category| category.is_antioxidant_source())
    {
        score += ANTIOXIDANT_BONUS;
    }

    for condition in conditions {
        score += condition_adjustment(food, condition, sugar);
    }

    (score.round() as i32).clamp(SCORE_MIN, SCORE_MAX)
}

fn condition_adjustment(food: &FoodRecord, condition: &HealthCondition, sugar: f64) -> f64 {
    match condition {
        HealthCondition::Diabetes => {
            if food.carbohydrates <= DIABETES_CARB_LIMIT && sugar <= DIABETES_SUGAR_LIMIT {
                1.0
            } else if food.carbohydrates > DIABETES_CARB_PENALTY || sugar > DIABETES_SUGAR_PENALTY {
                -1.0
            } else {
                0.0
            }
        }
        HealthCondition::Hypertension => {
            if food.fat <= HYPERTENSION_FAT_LIMIT && food.calories <= HYPERTENSION_CAL_LIMIT {
                1.0
            } else if food.fat > HYPERTENSION_FAT_PENALTY {
                -1.0
            } else {
                0.0
            }
        }
        HealthCondition::Obesity => {
            if food.calories <= OBESITY_CAL_LIMIT && food.fat <= OBESITY_FAT_LIMIT {
                1.0
            } else if food.calories > OBESITY_CAL_PENALTY || food.fat > OBESITY_FAT_PENALTY {
                -1.0
            } else {
                0.0
            }
        }
        HealthCondition::HeartHealth => {
            if food.fat <= HEART_FAT_LIMIT && food.protein >= HEART_PROTEIN_FLOOR {
                1.0
            } else if food.fat > HEART_FAT_PENALTY {
                -1.0
            } else {
                0.0
            }
        }
        // Conditions without a threshold pair contribute nothing.
        _ => 0.0,
    }
}

/// Descriptive tags derived from the same threshold table.
pub fn health_labels(food: &FoodRecord) -> Vec<HealthLabel> {
    let mut labels = Vec::new();

    if food.protein >= PROTEIN_HIGH {
        labels.push(HealthLabel::HighProtein);
    }
    if food.fat <= FAT_LOW {
        labels.push(HealthLabel::LowFat);
    }
    if food.carbohydrates <= CARB_LOW {
        labels.push(HealthLabel::LowCarb);
    }
    if food.fiber_or_zero() >= FIBER_HIGH {
        labels.push(HealthLabel::HighFiber);
    }
    if food.calories <= CAL_MODERATE {
        labels.push(HealthLabel::LowCalorie);
    }
    if food.sugar_or_zero() <= SUGAR_LOW {
        labels.push(HealthLabel::LowSugar);
    }
    if food
        .category
        .is_some_and(|category| category.is_antioxidant_source())
    {
        labels.push(HealthLabel::Antioxidant);
    }

    labels
}
