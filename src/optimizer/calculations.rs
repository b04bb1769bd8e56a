use crate::models::{FoodItem, NutrientConstraints, Nutrients};
use crate::optimizer::constants::*;

/// Sum each nutrient over the catalog, weighted by servings.
///
/// `servings` is parallel to `foods`; missing trailing entries count as 0.
pub fn calculate_nutrients(foods: &[FoodItem], servings: &[f64]) -> Nutrients {
    foods
        .iter()
        .zip(servings)
        .fold(Nutrients::default(), |acc, (food, &qty)| Nutrients {
            calories: acc.calories + food.calories * qty,
            protein: acc.protein + food.protein * qty,
            fat: acc.fat + food.fat * qty,
            carbs: acc.carbs + food.carbs * qty,
        })
}

/// Shortfall below a minimum bound, clamped at 0.
#[inline]
pub fn shortfall(min: f64, achieved: f64) -> f64 {
    (min - achieved).max(0.0)
}

/// Round to `decimals` places with ties going toward positive infinity.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10_f64.powi(decimals as i32);
    (value * factor + 0.5).floor() / factor
}

/// Whether every nutrient lies within ±5% of its band.
///
/// Informational only; plans are never rejected on this basis.
pub fn check_constraints(nutrients: &Nutrients, constraints: &NutrientConstraints) -> bool {
    let lower = 1.0 - FEASIBILITY_TOLERANCE;
    let upper = 1.0 + FEASIBILITY_TOLERANCE;

    nutrients
        .values()
        .into_iter()
        .zip(constraints.bounds())
        .all(|(value, (_, min, max))| value >= min * lower && value <= max * upper)
}

/// Cost per unit of normalized nutrient value. Lower is better.
///
/// Each nutrient is scaled by its min bound (floored at 1) and protein is
/// weighted by [`PROTEIN_VALUE_WEIGHT`]. A food with no nutrient value
/// scores its raw cost.
pub fn cost_efficiency(food: &FoodItem, constraints: &NutrientConstraints) -> f64 {
    let min_cal = constraints.min_calories.max(MIN_BOUND_FLOOR);
    let min_prot = constraints.min_protein.max(MIN_BOUND_FLOOR);
    let min_fat = constraints.min_fat.max(MIN_BOUND_FLOOR);
    let min_carb = constraints.min_carbs.max(MIN_BOUND_FLOOR);

    let total_value = food.calories / min_cal
        + (food.protein / min_prot) * PROTEIN_VALUE_WEIGHT
        + food.fat / min_fat
        + food.carbs / min_carb;

    if total_value > 0.0 {
        food.cost / total_value
    } else {
        food.cost
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rice() -> FoodItem {
        FoodItem::new("1", "Rice", 20.0, 130.0, 2.7, 0.3, 28.0, Some(3.0))
    }

    fn eggs() -> FoodItem {
        FoodItem::new("2", "Eggs", 15.0, 155.0, 13.0, 11.0, 1.1, Some(4.0))
    }

    #[test]
    fn test_calculate_nutrients() {
        let foods = vec![rice(), eggs()];
        let totals = calculate_nutrients(&foods, &[3.0, 4.0]);
        assert!((totals.calories - 1010.0).abs() < 1e-9);
        assert!((totals.protein - 60.1).abs() < 1e-9);
        assert!((totals.fat - 44.9).abs() < 1e-9);
        assert!((totals.carbs - 88.4).abs() < 1e-9);
    }

    #[test]
    fn test_calculate_nutrients_empty() {
        assert_eq!(calculate_nutrients(&[], &[]), Nutrients::default());
    }

    #[test]
    fn test_shortfall_clamps() {
        assert_eq!(shortfall(50.0, 20.0), 30.0);
        assert_eq!(shortfall(50.0, 80.0), 0.0);
        assert_eq!(shortfall(-10.0, 0.0), 0.0);
    }

    #[test]
    fn test_round_to_half_up() {
        assert_eq!(round_to(0.125, 2), 0.13);
        assert_eq!(round_to(2.5, 0), 3.0);
        assert_eq!(round_to(-2.5, 0), -2.0);
        assert_eq!(round_to(12.344, 2), 12.34);
        assert_eq!(round_to(1010.04, 1), 1010.0);
    }

    #[test]
    fn test_check_constraints_tolerance() {
        let constraints = NutrientConstraints::default();
        let inside = Nutrients {
            calories: 1905.0, // 2000 * 0.95 = 1900
            protein: 157.0,   // 150 * 1.05 = 157.5
            fat: 60.0,
            carbs: 300.0,
        };
        assert!(check_constraints(&inside, &constraints));

        let outside = Nutrients {
            calories: 1850.0,
            ..inside
        };
        assert!(!check_constraints(&outside, &constraints));
    }

    #[test]
    fn test_cost_efficiency() {
        let constraints = NutrientConstraints::default();
        let food = eggs();
        let value = 155.0 / 2000.0 + (13.0 / 50.0) * 1.5 + 11.0 / 40.0 + 1.1 / 250.0;
        assert!((cost_efficiency(&food, &constraints) - 15.0 / value).abs() < 1e-9);
    }

    #[test]
    fn test_cost_efficiency_without_nutrients() {
        let food = FoodItem::new("3", "Water", 5.0, 0.0, 0.0, 0.0, 0.0, None);
        assert_eq!(cost_efficiency(&food, &NutrientConstraints::default()), 5.0);
    }
}
