use dialoguer::{Confirm, Input, MultiSelect, Select};
use strsim::jaro_winkler;

use crate::error::Result;
use crate::models::{FoodRecord, HealthCondition, KNOWN_CONDITIONS};

/// Fuzzy-match cutoff for ingredient entry.
const MATCH_THRESHOLD: f64 = 0.7;

/// Prompt for the user's health conditions.
pub fn prompt_conditions() -> Result<Vec<HealthCondition>> {
    let items: Vec<&str> = KNOWN_CONDITIONS.iter().map(|c| c.id()).collect();

    let selected = MultiSelect::new()
        .with_prompt("Select your health conditions (space to toggle, enter to confirm)")
        .items(&items)
        .interact()?;

    Ok(selected
        .into_iter()
        .map(|i| KNOWN_CONDITIONS[i].clone())
        .collect())
}

/// Prompt for available ingredients with fuzzy matching against the dataset.
///
/// Exact substring hits are accepted silently; otherwise the closest food
/// names are offered for confirmation.
pub fn prompt_ingredients(foods: &[FoodRecord]) -> Result<Vec<String>> {
    let mut ingredients = Vec::new();

    loop {
        let input: String = Input::new()
            .with_prompt("Enter an available ingredient (or press Enter to finish)")
            .allow_empty(true)
            .interact_text()?;

        let input = input.trim().to_lowercase();
        if input.is_empty() {
            break;
        }

        // A substring of any food name is usable as-is.
        if foods.iter().any(|f| f.key().contains(&input)) {
            println!("Added: {}", input);
            ingredients.push(input);
            continue;
        }

        // Otherwise suggest the closest names.
        let mut candidates: Vec<(&FoodRecord, f64)> = foods
            .iter()
            .map(|f| (f, jaro_winkler(&f.key(), &input)))
            .filter(|(_, score)| *score > MATCH_THRESHOLD)
            .collect();

        candidates.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

        if candidates.is_empty() {
            println!("No food in the dataset matches '{}'", input);
            continue;
        }

        if candidates.len() == 1 {
            let food = candidates[0].0;
            let confirm = Confirm::new()
                .with_prompt(format!("Did you mean '{}'?", food.name))
                .default(true)
                .interact()?;

            if confirm {
                ingredients.push(food.key());
                println!("Added: {}", food.name);
            }
        } else {
            let options: Vec<String> = candidates
                .iter()
                .take(5)
                .map(|(f, _)| f.name.clone())
                .collect();

            let mut selection_options = options.clone();
            selection_options.push("None of these".to_string());

            let selection = Select::new()
                .with_prompt("Which did you mean?")
                .items(&selection_options)
                .default(0)
                .interact()?;

            if selection < options.len() {
                ingredients.push(options[selection].to_lowercase());
                println!("Added: {}", options[selection]);
            }
        }
    }

    Ok(ingredients)
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}
