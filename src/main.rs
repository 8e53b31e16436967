use std::fs::File;
use std::io::{self, IsTerminal};
use std::path::{Path, PathBuf};

use clap::Parser;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use diet_planner_rs::catalog::{
    builtin_catalog, load_catalog, lookup_food, save_catalog, suggest_foods,
};
use diet_planner_rs::cli::{Cli, Command, OutputFormat, PlanArgs, RecipeDisplay};
use diet_planner_rs::error::{PlannerError, Result};
use diet_planner_rs::interface::{
    collect_biometric_input, display_catalog, display_meal_plan, display_recipe, prompt_yes_no,
    write_plan_csv, write_plan_json,
};
use diet_planner_rs::models::{FoodCatalog, MealPlanResult, MealSlot};
use diet_planner_rs::planner::{RandomCoin, compute_meal_plan};

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Log to stderr so JSON/CSV on stdout stays clean. `RUST_LOG` wins over `-v`.
fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "diet_planner_rs=warn",
        1 => "diet_planner_rs=info",
        _ => "diet_planner_rs=debug",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let catalog = open_catalog(cli.catalog.as_deref())?;
    let command = cli.command.unwrap_or_default();

    match command {
        Command::Plan(args) => cmd_plan(&catalog, &args),
        Command::Catalog { slot, export } => cmd_catalog(&catalog, slot, export),
        Command::Recipe { name } => cmd_recipe(&catalog, &name),
    }
}

fn open_catalog(path: Option<&Path>) -> Result<FoodCatalog> {
    match path {
        Some(path) => load_catalog(path),
        None => {
            debug!("using bundled food catalog");
            builtin_catalog()
        }
    }
}

/// Collect inputs, compute the plan and render it.
fn cmd_plan(catalog: &FoodCatalog, args: &PlanArgs) -> Result<()> {
    let interactive = io::stdin().is_terminal() && io::stdout().is_terminal();
    let draft = args.draft();
    let input = if args.can_prompt(interactive) {
        collect_biometric_input(draft)?
    } else {
        draft.complete()?
    };

    let plan = match args.seed {
        Some(seed) => {
            info!(seed, "using seeded diet coin");
            compute_meal_plan(&input, catalog, &mut RandomCoin::seeded(seed))?
        }
        None => compute_meal_plan(&input, catalog, &mut RandomCoin::from_entropy())?,
    };

    match args.format {
        OutputFormat::Table => {
            display_meal_plan(&plan, &input);
            let show_recipes = match args.recipe_display(interactive) {
                RecipeDisplay::Show => true,
                RecipeDisplay::Skip => false,
                // The plan is already printed; a failed prompt only skips recipes.
                RecipeDisplay::Ask => prompt_yes_no("Show recipes for this plan?", false)
                    .unwrap_or_else(|e| {
                        warn!(error = %e, "recipe prompt failed");
                        false
                    }),
            };
            if show_recipes {
                for pick in &plan.slots {
                    display_recipe(pick.slot, &pick.item);
                }
            }
            Ok(())
        }
        OutputFormat::Json => write_output(&plan, args.output.as_deref(), write_plan_json),
        OutputFormat::Csv => write_output(&plan, args.output.as_deref(), write_plan_csv),
    }
}

fn write_output(
    plan: &MealPlanResult,
    path: Option<&Path>,
    write: fn(&MealPlanResult, Box<dyn io::Write>) -> Result<()>,
) -> Result<()> {
    match path {
        Some(path) => {
            write(plan, Box::new(File::create(path)?))?;
            eprintln!("Plan written to {}", path.display());
            Ok(())
        }
        None => write(plan, Box::new(io::stdout().lock())),
    }
}

/// List or export the catalog.
fn cmd_catalog(
    catalog: &FoodCatalog,
    slot: Option<MealSlot>,
    export: Option<PathBuf>,
) -> Result<()> {
    if let Some(path) = export {
        save_catalog(&path, catalog)?;
        println!("Exported {} items to {}", catalog.len(), path.display());
        return Ok(());
    }

    println!("Loaded {} foods", catalog.len());
    display_catalog(catalog, slot);
    Ok(())
}

/// Show one item's recipe, with suggestions for near misses.
fn cmd_recipe(catalog: &FoodCatalog, name: &str) -> Result<()> {
    match lookup_food(catalog, name) {
        Ok((slot, item)) => {
            display_recipe(slot, item);
            Ok(())
        }
        Err(PlannerError::FoodNotFound(_)) => {
            let suggestions = suggest_foods(catalog, name);
            if suggestions.is_empty() {
                return Err(PlannerError::FoodNotFound(name.to_string()));
            }

            println!("No exact match for '{}'. Did you mean:", name);
            for (slot, item) in suggestions {
                println!("  {} ({})", item.name, slot);
            }
            Ok(())
        }
        Err(e) => Err(e),
    }
}
