use crate::engine::RuleOutcome;
use crate::models::{FoodRecord, MacroBalance, RecommendationReport};

/// Display a full recommendation report.
pub fn display_report(report: &RecommendationReport) {
    if report.recommended_foods.is_empty() {
        println!("No foods matched the request (empty dataset or filters).");
        return;
    }

    println!();
    println!("=== Recommended Foods ===");
    println!();

    let max_name_len = report
        .recommended_foods
        .iter()
        .map(|f| f.food.name.len())
        .max()
        .unwrap_or(10);

    for (i, item) in report.recommended_foods.iter().enumerate() {
        let category = item
            .food
            .category
            .map(|c| c.label())
            .unwrap_or("Lainnya");

        let labels = if item.health_labels.is_empty() {
            String::new()
        } else {
            let ids: Vec<&str> = item.health_labels.iter().map(|l| l.id()).collect();
            format!("  [{}]", ids.join(", "))
        };

        println!(
            "{:>3}. {:<width$} ({}) - {:>4.0} cal | score {}{}",
            i + 1,
            item.food.name,
            category,
            item.food.calories,
            item.health_score,
            labels,
            width = max_name_len
        );

        for reason in &item.explanations {
            println!("     - {}", reason);
        }
    }

    let analysis = &report.nutrition_analysis;
    println!();
    println!("--- Nutrition Analysis ---");
    println!("Total calories: {:.1}", analysis.total_calories);
    println!(
        "Macros: protein {:.1}% | carbs {:.1}% | fat {:.1}%",
        analysis.protein_percentage, analysis.carb_percentage, analysis.fat_percentage
    );
    println!(
        "Fiber: {:.1} g, Sugar: {:.1} g",
        analysis.fiber_content, analysis.sugar_content
    );

    if !report.health_advice.is_empty() {
        println!();
        println!("--- Health Advice ---");
        for advice in &report.health_advice {
            println!("  * {}", advice);
        }
    }

    if !report.meal_plans.is_empty() {
        println!();
        println!("--- Meal Plans ---");
        for plan in &report.meal_plans {
            println!();
            println!("{} ({:.0} cal)", plan.meal_type, plan.total_calories);
            for meal_food in &plan.foods {
                println!("  - {} ({:.0} cal)", meal_food.name, meal_food.calories);
            }
            println!(
                "  P:{:.1} C:{:.1} F:{:.1} fiber:{:.1}",
                plan.nutrition.protein,
                plan.nutrition.carbohydrates,
                plan.nutrition.fat,
                plan.nutrition.fiber
            );
        }
    }

    println!();
}

/// Display rule-engine classification buckets.
pub fn display_outcome(outcome: &RuleOutcome) {
    println!();
    println!(
        "=== Classification ({} recommended, {} avoid, {} neutral) ===",
        outcome.recommended.len(),
        outcome.avoid.len(),
        outcome.neutral.len()
    );

    if !outcome.recommended.is_empty() {
        println!();
        println!("Recommended:");
        for entry in &outcome.recommended {
            println!("  {} (priority {})", entry.food.name, entry.score);
            for reason in &entry.reasons {
                println!("    - {}", reason);
            }
        }
    }

    if !outcome.avoid.is_empty() {
        println!();
        println!("Avoid:");
        for entry in &outcome.avoid {
            println!("  {}", entry.food.name);
            for reason in &entry.reasons {
                println!("    - {}", reason);
            }
        }
    }

    if !outcome.neutral.is_empty() {
        println!();
        println!("Neutral:");
        for entry in &outcome.neutral {
            println!("  {}", entry.food.name);
        }
    }

    println!();
}

/// Display a macro balance analysis.
pub fn display_macro_balance(balance: &MacroBalance) {
    println!();
    println!("=== Macro Balance ===");
    println!("Estimated calories: {:.1}", balance.estimated_calories);
    println!(
        "Macros: protein {:.1}% | fat {:.1}% | carbs {:.1}%",
        balance.protein_percentage, balance.fat_percentage, balance.carbohydrate_percentage
    );
    println!("Balance score: {:.1}%", balance.balance_score);

    for advice in &balance.recommendations {
        println!("  * {}", advice);
    }

    println!();
}

/// Display a simple list of foods with their details.
pub fn display_food_list(foods: &[FoodRecord], title: &str) {
    if foods.is_empty() {
        println!("{}: (none)", title);
        return;
    }

    println!();
    println!("=== {} ({} items) ===", title, foods.len());
    println!();

    for food in foods {
        let category = food.category.map(|c| c.label()).unwrap_or("Lainnya");
        println!(
            "  {} [{}] - {} cal, P:{} F:{} C:{}",
            food.name, category, food.calories, food.protein, food.fat, food.carbohydrates
        );
    }

    println!();
}
