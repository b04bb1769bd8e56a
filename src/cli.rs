use clap::{Parser, Subcommand};

/// MealPlanOptimizer: find a low-cost daily meal plan that meets nutrient targets.
#[derive(Parser, Debug)]
#[command(name = "meal_plan_optimizer")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the food catalog JSON file.
    #[arg(short, long, default_value = "foods.json", global = true)]
    pub file: String,

    /// Path to a nutrient constraints JSON file.
    #[arg(short, long, global = true)]
    pub constraints: Option<String>,

    /// Enable debug logging (RUST_LOG takes precedence).
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Compute a meal plan from the catalog and constraints.
    Optimize {
        /// Prompt for constraints instead of using the defaults.
        #[arg(short, long)]
        interactive: bool,

        /// Print the result as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Add a food to the catalog.
    Add,

    /// Remove a food from the catalog by name.
    Remove {
        /// Name of the food (fuzzy matched).
        name: String,
    },

    /// List the foods in the catalog.
    List,

    /// Write the starter catalog.
    Init {
        /// Overwrite an existing catalog file.
        #[arg(long)]
        force: bool,
    },

    /// Append foods from a CSV file to the catalog.
    Import {
        /// CSV file with name,cost,calories,protein,fat,carbs,maxServings columns.
        csv: String,
    },

    /// Rank foods by cost per unit of nutrient value.
    Rank,
}

impl Default for Command {
    fn default() -> Self {
        Command::Optimize {
            interactive: false,
            json: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_command_is_none() {
        let cli = Cli::parse_from(["meal_plan_optimizer"]);
        assert!(cli.command.is_none());
        assert_eq!(cli.file, "foods.json");
        assert!(matches!(
            cli.command.unwrap_or_default(),
            Command::Optimize {
                interactive: false,
                json: false
            }
        ));
    }

    #[test]
    fn test_global_options_after_subcommand() {
        let cli = Cli::parse_from([
            "meal_plan_optimizer",
            "optimize",
            "--json",
            "-f",
            "my.json",
            "-c",
            "targets.json",
        ]);
        assert_eq!(cli.file, "my.json");
        assert_eq!(cli.constraints.as_deref(), Some("targets.json"));
        assert!(matches!(cli.command, Some(Command::Optimize { json: true, .. })));
    }

    #[test]
    fn test_remove_takes_name() {
        let cli = Cli::parse_from(["meal_plan_optimizer", "remove", "Eggs"]);
        assert!(matches!(cli.command, Some(Command::Remove { ref name }) if name == "Eggs"));
    }
}
