mod constraints;
mod food;
mod plan;

pub use constraints::NutrientConstraints;
pub use food::FoodItem;
pub use plan::{MealPlanItem, NutrientStatus, Nutrients, OptimizationResult};
