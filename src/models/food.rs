use serde::{Deserialize, Serialize};

use crate::optimizer::constants::DEFAULT_MAX_SERVINGS;

/// A catalog entry: per-serving cost and nutrient content.
///
/// `max_servings` caps how many servings a plan may use; a missing or
/// non-positive cap falls back to [`DEFAULT_MAX_SERVINGS`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodItem {
    pub id: String,

    pub name: String,

    /// Currency units per serving.
    pub cost: f64,

    pub calories: f64,

    pub protein: f64,

    pub fat: f64,

    pub carbs: f64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_servings: Option<f64>,
}

impl FoodItem {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        cost: f64,
        calories: f64,
        protein: f64,
        fat: f64,
        carbs: f64,
        max_servings: Option<f64>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            cost,
            calories,
            protein,
            fat,
            carbs,
            max_servings,
        }
    }

    /// Effective serving cap.
    #[inline]
    pub fn cap(&self) -> f64 {
        match self.max_servings {
            Some(max) if max > 0.0 => max,
            _ => DEFAULT_MAX_SERVINGS,
        }
    }

    /// Calories bought per unit of cost; 0 when either side is not positive.
    #[inline]
    pub fn calories_per_cost(&self) -> f64 {
        ratio(self.calories, self.cost)
    }

    /// Protein bought per unit of cost; 0 when either side is not positive.
    #[inline]
    pub fn protein_per_cost(&self) -> f64 {
        ratio(self.protein, self.cost)
    }

    /// A row the optimizer may be called with: named and positively priced.
    pub fn is_valid(&self) -> bool {
        !self.name.trim().is_empty() && self.cost > 0.0
    }

    /// First field holding a non-finite cost or a non-finite or negative
    /// nutrient value, if any.
    pub fn bad_value(&self) -> Option<(&'static str, f64)> {
        if !self.cost.is_finite() {
            return Some(("cost", self.cost));
        }
        [
            ("calories", self.calories),
            ("protein", self.protein),
            ("fat", self.fat),
            ("carbs", self.carbs),
        ]
        .into_iter()
        .find(|(_, value)| !value.is_finite() || *value < 0.0)
    }

    /// Debug string for logging.
    pub fn debug_string(&self) -> String {
        format!(
            "{} [{}]: cost {}, {} cal, P:{} F:{} C:{}, cap {}",
            self.name,
            self.id,
            self.cost,
            self.calories,
            self.protein,
            self.fat,
            self.carbs,
            self.cap()
        )
    }
}

fn ratio(value: f64, cost: f64) -> f64 {
    if value > 0.0 && cost > 0.0 {
        value / cost
    } else {
        0.0
    }
}
