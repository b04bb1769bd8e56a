use std::collections::HashSet;
use std::time::{SystemTime, UNIX_EPOCH};

use strsim::jaro_winkler;
use tracing::debug;

use crate::error::{MealError, Result};
use crate::models::FoodItem;
use crate::optimizer::constants::FUZZY_MATCH_THRESHOLD;

/// An ordered, editable food catalog.
///
/// Order is preserved because the optimizer's top-up passes walk foods in
/// catalog order.
pub struct FoodCatalog {
    foods: Vec<FoodItem>,
}

impl FoodCatalog {
    /// Create a catalog from a list of foods.
    pub fn new(foods: Vec<FoodItem>) -> Self {
        Self { foods }
    }

    /// The starter catalog.
    pub fn with_defaults() -> Self {
        Self::new(default_catalog())
    }

    /// Get a food by id.
    pub fn get_food(&self, id: &str) -> Option<&FoodItem> {
        self.foods.iter().find(|f| f.id == id)
    }

    /// Find a food by name (case-insensitive, surrounding whitespace ignored).
    pub fn find_by_name(&self, name: &str) -> Option<&FoodItem> {
        let needle = name.trim().to_lowercase();
        self.foods.iter().find(|f| f.name.trim().to_lowercase() == needle)
    }

    /// Foods whose names resemble `query`, best match first.
    pub fn fuzzy_matches(&self, query: &str) -> Vec<&FoodItem> {
        let needle = query.trim().to_lowercase();
        let mut candidates: Vec<(&FoodItem, f64)> = self
            .foods
            .iter()
            .map(|f| (f, jaro_winkler(&f.name.to_lowercase(), &needle)))
            .filter(|(_, score)| *score > FUZZY_MATCH_THRESHOLD)
            .collect();

        candidates.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        candidates.into_iter().map(|(f, _)| f).collect()
    }

    /// Append a food, assigning a fresh id when it has none or a taken one.
    ///
    /// Returns the id the food was stored under.
    pub fn add_food(&mut self, mut food: FoodItem) -> String {
        if food.id.is_empty() || self.get_food(&food.id).is_some() {
            food.id = self.next_id();
        }
        debug!(food = %food.debug_string(), "added food");
        let id = food.id.clone();
        self.foods.push(food);
        id
    }

    /// Remove a food by id, returning it.
    pub fn remove_food(&mut self, id: &str) -> Result<FoodItem> {
        let idx = self
            .foods
            .iter()
            .position(|f| f.id == id)
            .ok_or_else(|| MealError::FoodNotFound(id.to_string()))?;
        Ok(self.foods.remove(idx))
    }

    /// Rows fit to optimize over: non-blank name and positive cost.
    pub fn valid_foods(&self) -> Vec<FoodItem> {
        let valid: Vec<FoodItem> = self.foods.iter().filter(|f| f.is_valid()).cloned().collect();
        let skipped = self.foods.len() - valid.len();
        if skipped > 0 {
            debug!(skipped, "ignoring incomplete food rows");
        }
        valid
    }

    /// Valid rows, or [`MealError::NoValidFoods`] when there are none.
    pub fn require_valid_foods(&self) -> Result<Vec<FoodItem>> {
        let valid = self.valid_foods();
        if valid.is_empty() {
            return Err(MealError::NoValidFoods);
        }
        Ok(valid)
    }

    /// Get all foods in catalog order.
    pub fn all_foods(&self) -> &[FoodItem] {
        &self.foods
    }

    /// Convert to a list of foods for JSON serialization.
    pub fn to_foods(&self) -> Vec<FoodItem> {
        self.foods.clone()
    }

    /// Count of foods in the catalog.
    pub fn len(&self) -> usize {
        self.foods.len()
    }

    /// Check if the catalog has no foods.
    pub fn is_empty(&self) -> bool {
        self.foods.is_empty()
    }

    /// Timestamp-based id, bumped until it is unused.
    fn next_id(&self) -> String {
        let taken: HashSet<&str> = self.foods.iter().map(|f| f.id.as_str()).collect();
        let mut candidate = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis())
            .unwrap_or_default();

        while taken.contains(candidate.to_string().as_str()) {
            candidate += 1;
        }
        candidate.to_string()
    }
}

/// Five everyday staples with realistic per-serving values.
pub fn default_catalog() -> Vec<FoodItem> {
    vec![
        FoodItem::new("1", "Rice", 20.0, 130.0, 2.7, 0.3, 28.0, Some(3.0)),
        FoodItem::new("2", "Lentils", 30.0, 116.0, 9.0, 0.4, 20.0, Some(3.0)),
        FoodItem::new("3", "Milk", 25.0, 61.0, 3.2, 3.3, 4.8, Some(4.0)),
        FoodItem::new("4", "Eggs", 15.0, 155.0, 13.0, 11.0, 1.1, Some(4.0)),
        FoodItem::new("5", "Vegetables", 35.0, 65.0, 3.0, 0.5, 13.0, Some(5.0)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(name: &str, cost: f64) -> FoodItem {
        FoodItem::new("", name, cost, 100.0, 5.0, 5.0, 5.0, Some(5.0))
    }

    #[test]
    fn test_find_by_name_case_insensitive() {
        let catalog = FoodCatalog::with_defaults();
        assert!(catalog.find_by_name("rice").is_some());
        assert!(catalog.find_by_name("  EGGS ").is_some());
        assert!(catalog.find_by_name("banana").is_none());
    }

    #[test]
    fn test_fuzzy_matches() {
        let catalog = FoodCatalog::with_defaults();
        let matches = catalog.fuzzy_matches("lentil");
        assert_eq!(matches.first().map(|f| f.name.as_str()), Some("Lentils"));
        assert!(catalog.fuzzy_matches("xyz").is_empty());
    }

    #[test]
    fn test_add_food_assigns_unique_ids() {
        let mut catalog = FoodCatalog::with_defaults();
        let a = catalog.add_food(row("Tofu", 12.0));
        let b = catalog.add_food(row("Tempeh", 14.0));
        assert_ne!(a, b);
        assert_eq!(catalog.len(), 7);
        assert_eq!(catalog.get_food(&b).unwrap().name, "Tempeh");

        // colliding id is replaced
        let dup = FoodItem::new("1", "Tofu", 12.0, 76.0, 8.0, 4.8, 1.9, None);
        let id = catalog.add_food(dup);
        assert_ne!(id, "1");
        assert_eq!(catalog.get_food("1").unwrap().name, "Rice");
    }

    #[test]
    fn test_remove_food() {
        let mut catalog = FoodCatalog::with_defaults();
        let removed = catalog.remove_food("3").unwrap();
        assert_eq!(removed.name, "Milk");
        assert_eq!(catalog.len(), 4);

        assert!(matches!(
            catalog.remove_food("3"),
            Err(MealError::FoodNotFound(_))
        ));
    }

    #[test]
    fn test_valid_foods_filters_incomplete_rows() {
        let mut catalog = FoodCatalog::with_defaults();
        catalog.add_food(row("", 10.0));
        catalog.add_food(row("Unpriced", 0.0));

        let valid = catalog.valid_foods();
        assert_eq!(valid.len(), 5);
        assert_eq!(valid[0].name, "Rice");
    }

    #[test]
    fn test_require_valid_foods() {
        let mut catalog = FoodCatalog::new(Vec::new());
        assert!(catalog.is_empty());
        catalog.add_food(row("  ", 10.0));
        assert!(!catalog.is_empty());
        assert!(matches!(
            catalog.require_valid_foods(),
            Err(MealError::NoValidFoods)
        ));
    }
}
