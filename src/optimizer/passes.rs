//! The four greedy passes.
//!
//! Each pass takes ownership of the serving vector and hands back the
//! refined one. No pass ever lowers a serving, and every increment is
//! clamped to the food's remaining capacity.

use tracing::debug;

use crate::models::{FoodItem, NutrientConstraints};
use crate::optimizer::calculations::{calculate_nutrients, shortfall};
use crate::optimizer::ranking::{rank_by_calorie_cost, rank_by_protein_cost};

/// Servings per catalog entry, parallel to the catalog.
pub type Servings = Vec<f64>;

/// Remaining servings before `food` hits its cap.
#[inline]
fn spare_capacity(food: &FoodItem, current: f64) -> f64 {
    food.cap() - current
}

/// Servings to add toward closing `gap` for a nutrient worth `per_serving`.
#[inline]
fn top_up_amount(gap: f64, per_serving: f64, food: &FoodItem, current: f64) -> f64 {
    (gap / per_serving).min(spare_capacity(food, current))
}

/// Pass 1: seed servings toward the calorie midpoint, best calories-per-cost first.
///
/// Assigns (rather than adds) each food's serving while the remaining
/// calorie target is positive.
pub fn seed_calories(
    foods: &[FoodItem],
    constraints: &NutrientConstraints,
    mut servings: Servings,
) -> Servings {
    let mut remaining = constraints.target_calories();

    for idx in rank_by_calorie_cost(foods) {
        let food = &foods[idx];

        if remaining > 0.0 && food.calories > 0.0 {
            let serving = (remaining / food.calories).min(food.cap());
            servings[idx] = serving;
            remaining = (remaining - food.calories * serving).max(0.0);
        }
    }

    debug!(
        remaining_calories = remaining,
        calories = calculate_nutrients(foods, &servings).calories,
        "calorie seeding done"
    );
    servings
}

/// Pass 2: close the protein gap, best protein-per-cost first.
///
/// The gap is re-measured after every addition.
pub fn top_up_protein(
    foods: &[FoodItem],
    constraints: &NutrientConstraints,
    mut servings: Servings,
) -> Servings {
    let mut nutrients = calculate_nutrients(foods, &servings);

    for idx in rank_by_protein_cost(foods) {
        let food = &foods[idx];
        let gap = shortfall(constraints.min_protein, nutrients.protein);

        if gap > 0.0 && food.protein > 0.0 && servings[idx] < food.cap() {
            servings[idx] += top_up_amount(gap, food.protein, food, servings[idx]);
            nutrients = calculate_nutrients(foods, &servings);
        }
    }

    debug!(protein = nutrients.protein, "protein top-up done");
    servings
}

/// Pass 3: single sweep in catalog order toward the calorie minimum.
///
/// The gap is measured once before the sweep and not refreshed, so each
/// eligible food is sized against the full original shortfall.
pub fn top_up_calories(
    foods: &[FoodItem],
    constraints: &NutrientConstraints,
    mut servings: Servings,
) -> Servings {
    let mut nutrients = calculate_nutrients(foods, &servings);
    let gap = shortfall(constraints.min_calories, nutrients.calories);

    for (idx, food) in foods.iter().enumerate() {
        if gap > 0.0 && food.calories > 0.0 && servings[idx] < food.cap() {
            servings[idx] += top_up_amount(gap, food.calories, food, servings[idx]);
            nutrients = calculate_nutrients(foods, &servings);
        }
    }

    debug!(gap, calories = nutrients.calories, "calorie top-up done");
    servings
}

/// Pass 4: sweep in catalog order toward the carb minimum.
///
/// Stops at the first food that brings carbs to the minimum; later foods
/// are left untouched.
pub fn top_up_carbs(
    foods: &[FoodItem],
    constraints: &NutrientConstraints,
    mut servings: Servings,
) -> Servings {
    let mut nutrients = calculate_nutrients(foods, &servings);
    let gap = shortfall(constraints.min_carbs, nutrients.carbs);

    if gap > 0.0 {
        for (idx, food) in foods.iter().enumerate() {
            if food.carbs > 0.0 && servings[idx] < food.cap() {
                servings[idx] += top_up_amount(gap, food.carbs, food, servings[idx]);
                nutrients = calculate_nutrients(foods, &servings);

                if nutrients.carbs >= constraints.min_carbs {
                    debug!(stopped_at = %food.name, "carb minimum reached");
                    break;
                }
            }
        }
    }

    debug!(gap, carbs = nutrients.carbs, "carb top-up done");
    servings
}

/// Run all four passes in order from an all-zero vector.
pub fn run_passes(foods: &[FoodItem], constraints: &NutrientConstraints) -> Servings {
    let servings = vec![0.0; foods.len()];
    let servings = seed_calories(foods, constraints, servings);
    let servings = top_up_protein(foods, constraints, servings);
    let servings = top_up_calories(foods, constraints, servings);
    top_up_carbs(foods, constraints, servings)
}
