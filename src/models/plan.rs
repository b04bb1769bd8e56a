use serde::{Deserialize, Serialize};

use crate::models::{FoodItem, NutrientConstraints};

/// One selected food in a meal plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealPlanItem {
    /// The catalog entry this line came from.
    pub food: FoodItem,

    /// Servings, rounded to 2 decimals.
    pub servings: f64,

    /// `food.cost * servings`, rounded to 2 decimals.
    pub cost: f64,
}

impl MealPlanItem {
    pub fn new(food: FoodItem, servings: f64, cost: f64) -> Self {
        Self {
            food,
            servings,
            cost,
        }
    }
}

/// Nutrient totals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Nutrients {
    pub calories: f64,
    pub protein: f64,
    pub fat: f64,
    pub carbs: f64,
}

impl Nutrients {
    /// Apply `f` to every field.
    pub fn map(self, f: impl Fn(f64) -> f64) -> Self {
        Self {
            calories: f(self.calories),
            protein: f(self.protein),
            fat: f(self.fat),
            carbs: f(self.carbs),
        }
    }

    /// Values in the same order as [`NutrientConstraints::bounds`].
    pub fn values(&self) -> [f64; 4] {
        [self.calories, self.protein, self.fat, self.carbs]
    }
}

/// Where an achieved value sits relative to its target band.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NutrientStatus {
    BelowMin,
    Within,
    AboveMax,
}

impl NutrientStatus {
    pub fn classify(value: f64, min: f64, max: f64) -> Self {
        if value < min {
            NutrientStatus::BelowMin
        } else if value > max {
            NutrientStatus::AboveMax
        } else {
            NutrientStatus::Within
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            NutrientStatus::BelowMin => "below min",
            NutrientStatus::Within => "ok",
            NutrientStatus::AboveMax => "above max",
        }
    }
}

/// Output of a single optimization call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizationResult {
    /// Selected foods, most expensive first.
    pub meal_plan: Vec<MealPlanItem>,

    pub total_cost: f64,

    /// Achieved totals, rounded to 1 decimal.
    pub nutrients: Nutrients,

    /// The constraints the plan was built for.
    pub constraints: NutrientConstraints,
}

impl OptimizationResult {
    /// Per-nutrient status against the echoed constraints.
    pub fn statuses(&self) -> [(&'static str, f64, f64, f64, NutrientStatus); 4] {
        let values = self.nutrients.values();
        let bounds = self.constraints.bounds();
        std::array::from_fn(|i| {
            let (label, min, max) = bounds[i];
            let value = values[i];
            (label, value, min, max, NutrientStatus::classify(value, min, max))
        })
    }

    pub fn is_empty(&self) -> bool {
        self.meal_plan.is_empty()
    }
}
