use assert_float_eq::*;

use nutri_suggest_rs::analysis::MealLayout;
use nutri_suggest_rs::models::{FoodRecord, HealthCondition};
use nutri_suggest_rs::recommender::{RecommendRequest, Recommender, Strategy};
use nutri_suggest_rs::scoring::health_score;

fn make_food(name: &str, calories: f64, protein: f64, fat: f64, carbs: f64) -> FoodRecord {
    FoodRecord {
        name: name.to_string(),
        category: None,
        calories,
        protein,
        fat,
        carbohydrates: carbs,
        fiber: Some(1.0),
        sugar: Some(1.0),
        sodium: None,
        potassium: None,
        calcium: None,
        iron: None,
        vitamin_c: None,
    }
}

fn lean_food(name: &str) -> FoodRecord {
    let mut food = make_food(name, 80.0, 16.0, 2.0, 10.0);
    food.fiber = Some(4.0);
    food.sugar = Some(1.0);
    food
}

fn junk_food(name: &str) -> FoodRecord {
    let mut food = make_food(name, 500.0, 0.5, 30.0, 60.0);
    food.fiber = Some(0.0);
    food.sugar = Some(20.0);
    food
}

#[test]
fn test_diabetic_scenario_scores_at_least_four() {
    let mut food = make_food("Sayur Berserat", 100.0, 15.0, 2.0, 15.0);
    food.fiber = Some(5.0);
    food.sugar = Some(3.0);

    let score = health_score(&food, &[HealthCondition::Diabetes]);
    assert!(score >= 4, "expected >= 4, got {}", score);
}

#[test]
fn test_greasy_scenario_scores_low_for_hypertension() {
    let mut food = make_food("Gorengan Asin", 450.0, 0.0, 25.0, 0.0);
    food.fiber = Some(0.0);
    food.sugar = Some(0.0);
    food.sodium = Some(350.0);

    let score = health_score(&food, &[HealthCondition::Hypertension]);
    assert!(score <= 2, "expected <= 2, got {}", score);
}

#[test]
fn test_score_clamped_for_any_input() {
    let foods = [
        make_food("Nol", 0.0, 0.0, 0.0, 0.0),
        junk_food("Parah"),
        lean_food("Super"),
        make_food("Biasa", 250.0, 8.0, 12.0, 30.0),
    ];
    let condition_sets: [&[HealthCondition]; 3] = [
        &[],
        &[HealthCondition::Diabetes],
        &[
            HealthCondition::Diabetes,
            HealthCondition::Hypertension,
            HealthCondition::Obesity,
            HealthCondition::HeartHealth,
        ],
    ];

    for food in &foods {
        for conditions in condition_sets {
            let score = health_score(food, conditions);
            assert!((1..=5).contains(&score), "score {} out of range", score);
        }
    }
}

#[test]
fn test_empty_dataset_yields_zeroed_report() {
    let recommender = Recommender::default();
    let request = RecommendRequest {
        conditions: vec![HealthCondition::Obesity],
        ..Default::default()
    };

    let report = recommender.recommend(&[], &request);

    assert!(report.recommended_foods.is_empty());
    assert!(report.meal_plans.is_empty());
    assert_eq!(report.nutrition_analysis.total_calories, 0.0);
    assert_eq!(report.nutrition_analysis.protein_percentage, 0.0);
    assert_eq!(report.nutrition_analysis.carb_percentage, 0.0);
    assert_eq!(report.nutrition_analysis.fat_percentage, 0.0);
}

#[test]
fn test_aggregate_percentages_use_atwater_factors() {
    // Two foods totalling 620 kcal, 40 g protein, 20 g fat, 60 g carbs.
    let foods = vec![
        make_food("Separuh Satu", 310.0, 20.0, 10.0, 30.0),
        make_food("Separuh Dua", 310.0, 20.0, 10.0, 30.0),
    ];

    let report = Recommender::default().recommend(&foods, &RecommendRequest::default());
    let analysis = &report.nutrition_analysis;

    assert_float_absolute_eq!(analysis.total_calories, 620.0, 0.01);
    assert_float_absolute_eq!(analysis.protein_percentage, 25.8, 0.1);
    assert_float_absolute_eq!(analysis.fat_percentage, 29.0, 0.1);
    assert_float_absolute_eq!(analysis.carb_percentage, 38.7, 0.1);
}

#[test]
fn test_ranking_is_descending_and_stable() {
    // Input order: junk, then three identically scored lean foods.
    let foods = vec![
        junk_food("Gorengan"),
        lean_food("Pepes Satu"),
        lean_food("Pepes Dua"),
        lean_food("Pepes Tiga"),
    ];

    let report = Recommender::default().recommend(&foods, &RecommendRequest::default());
    let names: Vec<&str> = report
        .recommended_foods
        .iter()
        .map(|f| f.food.name.as_str())
        .collect();

    for pair in report.recommended_foods.windows(2) {
        assert!(pair[0].health_score >= pair[1].health_score);
    }

    // The tied lean foods keep their input order; the junk food sinks.
    assert_eq!(names, vec!["Pepes Satu", "Pepes Dua", "Pepes Tiga", "Gorengan"]);
}

#[test]
fn test_report_is_idempotent() {
    let foods = vec![
        lean_food("Pepes"),
        junk_food("Gorengan"),
        make_food("Biasa", 250.0, 8.0, 12.0, 30.0),
    ];
    let request = RecommendRequest {
        conditions: vec![HealthCondition::Diabetes],
        ..Default::default()
    };

    let recommender = Recommender::default();
    let first = serde_json::to_string(&recommender.recommend(&foods, &request)).unwrap();
    let second = serde_json::to_string(&recommender.recommend(&foods, &request)).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_meal_plans_cover_ranked_slices() {
    let foods: Vec<FoodRecord> = (0..8)
        .map(|i| lean_food(&format!("Lauk {}", i)))
        .collect();

    let request = RecommendRequest {
        layout: MealLayout::Extended,
        ..Default::default()
    };
    let report = Recommender::default().recommend(&foods, &request);

    assert_eq!(report.meal_plans.len(), 3);
    assert_eq!(report.meal_plans[0].foods.len(), 2);
    assert_eq!(report.meal_plans[1].foods.len(), 3);
    assert_eq!(report.meal_plans[2].foods.len(), 3);

    // Slice totals match the underlying foods.
    let breakfast = &report.meal_plans[0];
    assert_float_absolute_eq!(breakfast.total_calories, 160.0, 0.01);
    assert_float_absolute_eq!(breakfast.nutrition.protein, 32.0, 0.01);
}

#[test]
fn test_no_meal_plans_below_three_foods() {
    let foods = vec![lean_food("Satu"), lean_food("Dua")];
    let report = Recommender::default().recommend(&foods, &RecommendRequest::default());

    assert_eq!(report.recommended_foods.len(), 2);
    assert!(report.meal_plans.is_empty());
}

#[test]
fn test_advice_is_a_fixed_lookup() {
    let request = RecommendRequest {
        conditions: vec![HealthCondition::Diabetes, HealthCondition::HeartHealth],
        ..Default::default()
    };

    let report = Recommender::default().recommend(&[lean_food("Pepes")], &request);

    assert_eq!(report.health_advice.len(), 6);
    assert!(report.health_advice[0].contains("rendah gula"));
    assert!(report.health_advice[3].contains("lemak jenuh"));
}

#[test]
fn test_strict_and_weighted_disagree_by_design() {
    // Over the obesity calorie bound: vetoed under strict, ranked (low)
    // under weighted.
    let foods = vec![make_food("Nasi Uduk", 350.0, 6.0, 8.0, 45.0)];
    let conditions = vec![HealthCondition::Obesity];

    let strict = RecommendRequest {
        conditions: conditions.clone(),
        strategy: Strategy::Strict,
        ..Default::default()
    };
    let weighted = RecommendRequest {
        conditions,
        strategy: Strategy::Weighted,
        ..Default::default()
    };

    let recommender = Recommender::default();
    assert!(recommender.recommend(&foods, &strict).recommended_foods.is_empty());
    assert_eq!(recommender.recommend(&foods, &weighted).recommended_foods.len(), 1);
}

#[test]
fn test_top_n_cutoff() {
    let foods: Vec<FoodRecord> = (0..15)
        .map(|i| lean_food(&format!("Lauk {}", i)))
        .collect();

    let default_report = Recommender::default().recommend(&foods, &RecommendRequest::default());
    assert_eq!(default_report.recommended_foods.len(), 10);

    let top_five = RecommendRequest {
        top_n: 5,
        ..Default::default()
    };
    let report = Recommender::default().recommend(&foods, &top_five);
    assert_eq!(report.recommended_foods.len(), 5);
}
