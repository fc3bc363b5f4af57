use clap::Parser;

use nutri_suggest_rs::analysis::macro_balance;
use nutri_suggest_rs::cli::{Cli, Command, LayoutArg, StrategyArg};
use nutri_suggest_rs::dataset::{load_foods, resolve};
use nutri_suggest_rs::error::Result;
use nutri_suggest_rs::interface::{
    display_food_list, display_macro_balance, display_outcome, display_report,
    prompt_conditions, prompt_ingredients,
};
use nutri_suggest_rs::models::{HealthCondition, KNOWN_CONDITIONS};
use nutri_suggest_rs::recommender::{advice_for, RecommendRequest, Recommender};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or_default();

    match command {
        Command::Recommend {
            conditions,
            ingredients,
            top,
            strategy,
            layout,
            seed,
            fallback,
            json,
        } => cmd_recommend(
            &cli.file,
            conditions,
            ingredients,
            top,
            strategy,
            layout,
            seed,
            fallback,
            json,
        ),
        Command::Classify { conditions, json } => cmd_classify(&cli.file, conditions, json),
        Command::Analyze {
            protein,
            fat,
            carbohydrates,
            json,
        } => cmd_analyze(protein, fat, carbohydrates, json),
        Command::Conditions => cmd_conditions(),
        Command::Foods => cmd_foods(&cli.file),
    }
}

/// Generate a recommendation report.
#[allow(clippy::too_many_arguments)]
fn cmd_recommend(
    file_path: &str,
    conditions: Vec<String>,
    ingredients: Vec<String>,
    top: usize,
    strategy: StrategyArg,
    layout: LayoutArg,
    seed: Option<u64>,
    fallback: bool,
    json: bool,
) -> Result<()> {
    let foods = load_foods(file_path)?;

    if !json {
        println!("Loaded {} foods from {}", foods.len(), file_path);
    }

    // Flags win; prompts fill in what was omitted (skipped in JSON mode so
    // output stays machine-readable).
    let conditions: Vec<HealthCondition> = if conditions.is_empty() && !json {
        prompt_conditions()?
    } else {
        conditions.iter().map(|s| HealthCondition::parse_id(s)).collect()
    };

    let ingredients = if ingredients.is_empty() && !json {
        prompt_ingredients(&foods)?
    } else {
        ingredients
    };

    let request = RecommendRequest {
        conditions,
        available_ingredients: ingredients,
        top_n: top,
        strategy: strategy.into(),
        layout: layout.into(),
        seed,
        general_fallback: fallback,
    };

    let report = Recommender::default().recommend(&foods, &request);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        display_report(&report);
    }

    Ok(())
}

/// Show the rule-engine buckets for the dataset.
fn cmd_classify(file_path: &str, conditions: Vec<String>, json: bool) -> Result<()> {
    let foods = load_foods(file_path)?;

    let conditions: Vec<HealthCondition> = if conditions.is_empty() && !json {
        prompt_conditions()?
    } else {
        conditions.iter().map(|s| HealthCondition::parse_id(s)).collect()
    };

    let outcome = Recommender::default().classify(&foods, &conditions);

    if json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    } else {
        display_outcome(&outcome);
    }

    Ok(())
}

/// Macro balance for explicit gram amounts.
fn cmd_analyze(protein: f64, fat: f64, carbohydrates: f64, json: bool) -> Result<()> {
    let balance = macro_balance(protein, fat, carbohydrates);

    if json {
        println!("{}", serde_json::to_string_pretty(&balance)?);
    } else {
        display_macro_balance(&balance);
    }

    Ok(())
}

/// List the known condition identifiers with their advice.
fn cmd_conditions() -> Result<()> {
    println!("Known health conditions:");
    for condition in &KNOWN_CONDITIONS {
        let advice = advice_for(condition);
        if advice.is_empty() {
            println!("  {}", condition.id());
        } else {
            println!("  {} ({} advice entries)", condition.id(), advice.len());
        }
    }
    Ok(())
}

/// List dataset foods with derived categories.
fn cmd_foods(file_path: &str) -> Result<()> {
    let foods = load_foods(file_path)?;
    let resolved: Vec<_> = foods.iter().map(resolve).collect();
    display_food_list(&resolved, "Dataset Foods");
    Ok(())
}
