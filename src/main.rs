use clap::Parser;
use std::path::Path;
use tracing::info;

use meal_plan_optimizer_rs::cli::{Cli, Command};
use meal_plan_optimizer_rs::error::Result;
use meal_plan_optimizer_rs::interface::{
    display_efficiency_ranking, display_food_list, display_result, prompt_constraints,
    prompt_new_food, prompt_select_food, prompt_yes_no,
};
use meal_plan_optimizer_rs::logging::init_logging;
use meal_plan_optimizer_rs::models::{FoodItem, NutrientConstraints};
use meal_plan_optimizer_rs::optimizer::{cost_efficiency, optimize};
use meal_plan_optimizer_rs::state::{
    import_csv, load_constraints_or_default, load_foods, save_foods, FoodCatalog,
};

fn main() {
    let cli = Cli::parse();
    init_logging(if cli.verbose { "debug" } else { "warn" });

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let command = cli.command.unwrap_or_default();
    let constraints_path = cli.constraints.as_deref();

    match command {
        Command::Optimize { interactive, json } => {
            cmd_optimize(&cli.file, constraints_path, interactive, json)
        }
        Command::Add => cmd_add(&cli.file),
        Command::Remove { name } => cmd_remove(&cli.file, &name),
        Command::List => cmd_list(&cli.file),
        Command::Init { force } => cmd_init(&cli.file, force),
        Command::Import { csv } => cmd_import(&cli.file, &csv),
        Command::Rank => cmd_rank(&cli.file, constraints_path),
    }
}

/// Load the catalog, falling back to the starter foods when the file is missing.
fn open_catalog(file_path: &str) -> Result<FoodCatalog> {
    let path = Path::new(file_path);

    if !path.exists() {
        eprintln!("Food catalog not found: {}", file_path);
        eprintln!("Using the starter catalog. Run 'init' to save it.");
        return Ok(FoodCatalog::with_defaults());
    }

    Ok(FoodCatalog::new(load_foods(path)?))
}

/// Constraints from a file (or the defaults), optionally refined interactively.
///
/// With `--interactive`, the file or default values pre-fill the prompts.
fn resolve_constraints(path: Option<&str>, interactive: bool) -> Result<NutrientConstraints> {
    let base = load_constraints_or_default(path)?;

    if interactive {
        prompt_constraints(&base)
    } else {
        Ok(base)
    }
}

/// Compute and display a meal plan.
fn cmd_optimize(
    file_path: &str,
    constraints_path: Option<&str>,
    interactive: bool,
    json: bool,
) -> Result<()> {
    let catalog = open_catalog(file_path)?;
    let foods = catalog.require_valid_foods()?;
    let constraints = resolve_constraints(constraints_path, interactive)?;

    info!(foods = foods.len(), "running optimizer");
    let result = optimize(&foods, &constraints);

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        display_result(&result);
    }

    Ok(())
}

/// Interactively add a food to the catalog.
fn cmd_add(file_path: &str) -> Result<()> {
    let mut catalog = open_catalog(file_path)?;
    let food = prompt_new_food()?;
    let name = food.name.clone();

    catalog.add_food(food);
    save_foods(file_path, &catalog.to_foods())?;
    println!("Added {}. Catalog saved ({} foods).", name, catalog.len());

    Ok(())
}

/// Remove a food by (fuzzy) name.
fn cmd_remove(file_path: &str, name: &str) -> Result<()> {
    let mut catalog = open_catalog(file_path)?;

    let target: Option<FoodItem> = match catalog.find_by_name(name) {
        Some(food) => Some(food.clone()),
        None => {
            let candidates = catalog.fuzzy_matches(name);
            match candidates.len() {
                0 => None,
                1 => {
                    let food = candidates[0];
                    prompt_yes_no(&format!("Did you mean '{}'?", food.name), true)?
                        .then(|| food.clone())
                }
                _ => prompt_select_food(&candidates)?.cloned(),
            }
        }
    };

    let Some(food) = target else {
        println!("No matching food found for '{}'", name);
        return Ok(());
    };

    if !prompt_yes_no(&format!("Remove '{}'?", food.name), true)? {
        return Ok(());
    }

    catalog.remove_food(&food.id)?;
    save_foods(file_path, &catalog.to_foods())?;
    println!("Removed {}. Catalog saved ({} foods).", food.name, catalog.len());

    Ok(())
}

/// Show every food in the catalog; incomplete rows are flagged.
fn cmd_list(file_path: &str) -> Result<()> {
    let catalog = open_catalog(file_path)?;
    if catalog.is_empty() {
        println!("The catalog is empty. Use 'add', 'import' or 'init' to add foods.");
        return Ok(());
    }
    display_food_list(catalog.all_foods(), "Food Catalog");
    Ok(())
}

/// Write the starter catalog.
fn cmd_init(file_path: &str, force: bool) -> Result<()> {
    let path = Path::new(file_path);

    if path.exists() && !force {
        println!("{} already exists. Use --force to overwrite.", file_path);
        return Ok(());
    }

    let catalog = FoodCatalog::with_defaults();
    save_foods(path, &catalog.to_foods())?;
    println!("Wrote {} starter foods to {}.", catalog.len(), file_path);

    Ok(())
}

/// Append CSV rows to the catalog.
fn cmd_import(file_path: &str, csv_path: &str) -> Result<()> {
    let mut catalog = open_catalog(file_path)?;
    let imported = import_csv(csv_path)?;
    let count = imported.len();

    for food in imported {
        catalog.add_food(food);
    }

    save_foods(file_path, &catalog.to_foods())?;
    println!("Imported {} foods. Catalog saved ({} foods).", count, catalog.len());

    Ok(())
}

/// Rank valid foods by cost efficiency under the active constraints.
fn cmd_rank(file_path: &str, constraints_path: Option<&str>) -> Result<()> {
    let catalog = open_catalog(file_path)?;
    let constraints = resolve_constraints(constraints_path, false)?;

    let mut ranking: Vec<(FoodItem, f64)> = catalog
        .valid_foods()
        .into_iter()
        .map(|food| {
            let score = cost_efficiency(&food, &constraints);
            (food, score)
        })
        .collect();

    ranking.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal));
    display_efficiency_ranking(&ranking);

    Ok(())
}
