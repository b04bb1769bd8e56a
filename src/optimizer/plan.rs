use std::cmp::Ordering;

use tracing::debug;

use crate::models::{FoodItem, MealPlanItem, NutrientConstraints, OptimizationResult};
use crate::optimizer::calculations::{calculate_nutrients, round_to};
use crate::optimizer::constants::*;
use crate::optimizer::passes::run_passes;

/// Compute a low-cost meal plan for `foods` under `constraints`.
///
/// Runs the greedy passes, then rounds and filters the servings into a
/// plan sorted by descending cost. Never fails: an empty catalog yields an
/// empty plan with zero cost and zero nutrients, and unreachable targets
/// simply leave the achieved totals outside their bands.
pub fn optimize(foods: &[FoodItem], constraints: &NutrientConstraints) -> OptimizationResult {
    debug!(foods = foods.len(), "optimizing meal plan");

    let servings = run_passes(foods, constraints);
    build_result(foods, &servings, constraints)
}

/// Turn raw servings into the caller-facing result.
///
/// Item costs use the unrounded serving; the total is the rounded sum of
/// the already-rounded item costs.
pub fn build_result(
    foods: &[FoodItem],
    servings: &[f64],
    constraints: &NutrientConstraints,
) -> OptimizationResult {
    let mut meal_plan: Vec<MealPlanItem> = foods
        .iter()
        .zip(servings)
        .map(|(food, &raw)| {
            MealPlanItem::new(
                food.clone(),
                round_to(raw, SERVING_DECIMALS),
                round_to(food.cost * raw, COST_DECIMALS),
            )
        })
        .filter(|item| item.servings > MIN_PLAN_SERVINGS)
        .collect();

    meal_plan.sort_by(|a, b| b.cost.partial_cmp(&a.cost).unwrap_or(Ordering::Equal));

    let total_cost = round_to(meal_plan.iter().map(|item| item.cost).sum(), COST_DECIMALS);
    let nutrients =
        calculate_nutrients(foods, servings).map(|value| round_to(value, NUTRIENT_DECIMALS));

    debug!(items = meal_plan.len(), total_cost, "meal plan built");

    OptimizationResult {
        meal_plan,
        total_cost,
        nutrients,
        constraints: constraints.clone(),
    }
}
