use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};

use crate::interface::InputDraft;
use crate::models::{ActivityLevel, DietPreference, Goal, MealSlot, Sex};

/// Diet Planner: a one-day meal plan matched to your calorie needs and budget.
#[derive(Parser, Debug)]
#[command(name = "diet_planner")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to a food catalog JSON file (defaults to the bundled catalog).
    #[arg(short, long, global = true, env = "DIET_PLANNER_CATALOG")]
    pub catalog: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug).
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate a one-day meal plan.
    Plan(PlanArgs),

    /// List catalog items.
    Catalog {
        /// Only show one meal slot.
        #[arg(long, value_enum)]
        slot: Option<MealSlot>,

        /// Write the loaded catalog to a JSON file instead of listing it.
        #[arg(long)]
        export: Option<PathBuf>,
    },

    /// Show nutrition facts and the recipe for a catalog item.
    Recipe {
        /// Item name (case-insensitive).
        name: String,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Plan(PlanArgs::default())
    }
}

#[derive(Args, Debug, Default)]
pub struct PlanArgs {
    /// Age in years (15-100).
    #[arg(long)]
    pub age: Option<u32>,

    #[arg(long, value_enum)]
    pub sex: Option<Sex>,

    /// Weight in kg (30-200).
    #[arg(long)]
    pub weight: Option<f64>,

    /// Height in cm (120-250).
    #[arg(long)]
    pub height: Option<f64>,

    #[arg(long, value_enum)]
    pub activity: Option<ActivityLevel>,

    #[arg(long, value_enum)]
    pub goal: Option<Goal>,

    #[arg(long, value_enum)]
    pub diet: Option<DietPreference>,

    /// Daily food budget (100-5000).
    #[arg(long)]
    pub budget: Option<f64>,

    /// Seed for the veg/non-veg coin used by `--diet both`.
    #[arg(long, env = "DIET_PLANNER_SEED")]
    pub seed: Option<u64>,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Write JSON/CSV output to a file instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Fail instead of prompting for missing values.
    #[arg(long)]
    pub no_prompt: bool,

    /// Print the recipe for every pick after the table.
    #[arg(long)]
    pub recipes: bool,
}

/// What to do about recipes once a table plan is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecipeDisplay {
    Show,
    Ask,
    Skip,
}

impl PlanArgs {
    pub fn draft(&self) -> InputDraft {
        InputDraft {
            age: self.age,
            sex: self.sex,
            weight_kg: self.weight,
            height_cm: self.height,
            activity_level: self.activity,
            goal: self.goal,
            diet_preference: self.diet,
            daily_budget: self.budget,
        }
    }

    /// Prompts need a terminal and no `--no-prompt`.
    pub fn can_prompt(&self, interactive: bool) -> bool {
        interactive && !self.no_prompt
    }

    pub fn recipe_display(&self, interactive: bool) -> RecipeDisplay {
        if self.recipes {
            RecipeDisplay::Show
        } else if self.can_prompt(interactive) {
            RecipeDisplay::Ask
        } else {
            RecipeDisplay::Skip
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Csv,
}
