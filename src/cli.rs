use clap::{Parser, Subcommand, ValueEnum};

use crate::analysis::MealLayout;
use crate::recommender::Strategy;

/// NutriSuggest: food recommendations for declared health conditions.
#[derive(Parser, Debug)]
#[command(name = "nutri_suggest")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the nutrition dataset (CSV or JSON).
    #[arg(short, long, default_value = "nutrition_dataset.csv")]
    pub file: String,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Recommend foods for a set of health conditions.
    Recommend {
        /// Health condition identifiers (comma separated); prompts
        /// interactively when omitted.
        #[arg(short, long, value_delimiter = ',')]
        conditions: Vec<String>,

        /// Available ingredient name substrings (comma separated).
        #[arg(short, long, value_delimiter = ',')]
        ingredients: Vec<String>,

        /// How many foods to recommend.
        #[arg(short, long, default_value_t = 10)]
        top: usize,

        /// Scoring strategy.
        #[arg(long, value_enum, default_value_t = StrategyArg::Weighted)]
        strategy: StrategyArg,

        /// Meal plan layout.
        #[arg(long, value_enum, default_value_t = LayoutArg::Extended)]
        layout: LayoutArg,

        /// Shuffle seed for the order of equally scored foods.
        #[arg(long)]
        seed: Option<u64>,

        /// Offer generally healthy foods when nothing matches.
        #[arg(long)]
        fallback: bool,

        /// Print the report as JSON instead of formatted text.
        #[arg(long)]
        json: bool,
    },

    /// Show the rule-engine buckets for the whole dataset.
    Classify {
        /// Health condition identifiers (comma separated).
        #[arg(short, long, value_delimiter = ',')]
        conditions: Vec<String>,

        /// Print the buckets as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Macro balance analysis for explicit gram amounts.
    Analyze {
        #[arg(long, default_value_t = 0.0)]
        protein: f64,

        #[arg(long, default_value_t = 0.0)]
        fat: f64,

        #[arg(long, default_value_t = 0.0)]
        carbohydrates: f64,

        /// Print the analysis as JSON.
        #[arg(long)]
        json: bool,
    },

    /// List the known health condition identifiers.
    Conditions,

    /// List dataset foods with their derived categories.
    Foods,
}

impl Default for Command {
    fn default() -> Self {
        Command::Recommend {
            conditions: Vec::new(),
            ingredients: Vec::new(),
            top: 10,
            strategy: StrategyArg::Weighted,
            layout: LayoutArg::Extended,
            seed: None,
            fallback: false,
            json: false,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum StrategyArg {
    /// Rule engine with avoid-veto.
    Strict,
    /// Heuristic point scoring.
    Weighted,
}

impl From<StrategyArg> for Strategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Strict => Strategy::Strict,
            StrategyArg::Weighted => Strategy::Weighted,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LayoutArg {
    /// Two-food meals.
    Compact,
    /// Three-food lunch and dinner.
    Extended,
}

impl From<LayoutArg> for MealLayout {
    fn from(arg: LayoutArg) -> Self {
        match arg {
            LayoutArg::Compact => MealLayout::Compact,
            LayoutArg::Extended => MealLayout::Extended,
        }
    }
}
