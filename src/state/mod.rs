mod manager;
mod persistence;

pub use manager::{default_catalog, FoodCatalog};
pub use persistence::{import_csv, load_constraints, load_constraints_or_default, load_foods, save_foods};
