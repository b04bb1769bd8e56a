use serde::{Deserialize, Serialize};

/// Min/max daily targets for each tracked nutrient.
///
/// No ordering between a min and its max is enforced; the optimizer
/// tolerates inverted and negative bounds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NutrientConstraints {
    pub min_calories: f64,
    pub max_calories: f64,
    pub min_protein: f64,
    pub max_protein: f64,
    pub min_fat: f64,
    pub max_fat: f64,
    pub min_carbs: f64,
    pub max_carbs: f64,
}

impl Default for NutrientConstraints {
    fn default() -> Self {
        Self {
            min_calories: 2000.0,
            max_calories: 2500.0,
            min_protein: 50.0,
            max_protein: 150.0,
            min_fat: 40.0,
            max_fat: 80.0,
            min_carbs: 250.0,
            max_carbs: 350.0,
        }
    }
}

impl NutrientConstraints {
    /// Midpoint of the calorie range, used to seed the plan.
    #[inline]
    pub fn target_calories(&self) -> f64 {
        (self.min_calories + self.max_calories) / 2.0
    }

    /// Bounds per nutrient as `(label, min, max)`, in display order.
    pub fn bounds(&self) -> [(&'static str, f64, f64); 4] {
        [
            ("Calories", self.min_calories, self.max_calories),
            ("Protein", self.min_protein, self.max_protein),
            ("Fat", self.min_fat, self.max_fat),
            ("Carbs", self.min_carbs, self.max_carbs),
        ]
    }
}
