pub mod cli;
pub mod error;
pub mod interface;
pub mod logging;
pub mod models;
pub mod optimizer;
pub mod state;

pub use error::{MealError, Result};
pub use models::{FoodItem, MealPlanItem, NutrientConstraints, Nutrients, OptimizationResult};
pub use optimizer::optimize;
