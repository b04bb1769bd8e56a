use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::error::{MealError, Result};
use crate::models::{FoodItem, NutrientConstraints};

/// Load a food catalog from a JSON file.
///
/// Deduplicates by id: the last definition wins but keeps the position of
/// the first, since catalog order feeds the optimizer.
pub fn load_foods<P: AsRef<Path>>(path: P) -> Result<Vec<FoodItem>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let foods: Vec<FoodItem> = serde_json::from_str(&content)?;

    let deduped = dedup_by_id(foods);
    info!(count = deduped.len(), path = %path.display(), "loaded food catalog");
    Ok(deduped)
}

/// Save a food catalog to a JSON file.
pub fn save_foods<P: AsRef<Path>>(path: P, foods: &[FoodItem]) -> Result<()> {
    let path = path.as_ref();
    let deduped = dedup_by_id(foods.to_vec());
    let json = serde_json::to_string_pretty(&deduped)?;
    fs::write(path, json)?;
    debug!(count = deduped.len(), path = %path.display(), "saved food catalog");
    Ok(())
}

/// Load nutrient constraints from a JSON file.
pub fn load_constraints<P: AsRef<Path>>(path: P) -> Result<NutrientConstraints> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// Constraints from `path` when given, otherwise the defaults.
pub fn load_constraints_or_default<P: AsRef<Path>>(
    path: Option<P>,
) -> Result<NutrientConstraints> {
    match path {
        Some(p) => load_constraints(p),
        None => Ok(NutrientConstraints::default()),
    }
}

/// A catalog row as it appears in a CSV import.
#[derive(Debug, Deserialize)]
struct CsvFoodRow {
    name: String,
    cost: f64,
    calories: f64,
    protein: f64,
    fat: f64,
    carbs: f64,
    #[serde(rename = "maxServings", default)]
    max_servings: Option<f64>,
}

/// Read foods from a CSV file with a header row.
///
/// Columns: `name,cost,calories,protein,fat,carbs,maxServings` (the last is
/// optional). Returned foods have empty ids; the catalog assigns them.
/// A row with a non-finite cost, or a non-finite or negative nutrient, is
/// rejected with its line number.
pub fn import_csv<P: AsRef<Path>>(path: P) -> Result<Vec<FoodItem>> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_path(path)?;

    let mut foods = Vec::new();
    for (idx, row) in rdr.deserialize().enumerate() {
        let row: CsvFoodRow = row?;
        let food = FoodItem::new(
            String::new(),
            row.name,
            row.cost,
            row.calories,
            row.protein,
            row.fat,
            row.carbs,
            row.max_servings,
        );

        if let Some((field, value)) = food.bad_value() {
            // header is line 1
            return Err(MealError::InvalidInput(format!(
                "line {}: {} has invalid {} value {}",
                idx + 2,
                food.name,
                field,
                value
            )));
        }
        foods.push(food);
    }

    debug!(count = foods.len(), "imported CSV rows");
    Ok(foods)
}

fn dedup_by_id(foods: Vec<FoodItem>) -> Vec<FoodItem> {
    let mut position: HashMap<String, usize> = HashMap::new();
    let mut deduped: Vec<FoodItem> = Vec::with_capacity(foods.len());

    for food in foods {
        match position.get(&food.id) {
            Some(&idx) => {
                warn!(id = %food.id, name = %food.name, "duplicate food id, keeping last definition");
                deduped[idx] = food;
            }
            None => {
                position.insert(food.id.clone(), deduped.len());
                deduped.push(food);
            }
        }
    }

    deduped
}
