use crate::models::{FoodItem, NutrientStatus, OptimizationResult};
use crate::optimizer::calculations::check_constraints;
use crate::optimizer::constants::{COST_BAR_WIDTH, FEASIBILITY_TOLERANCE};

/// Display an optimization result: totals, item table, cost bars, nutrients.
pub fn display_result(result: &OptimizationResult) {
    if result.is_empty() {
        println!("No meal plan generated (no food reached a meaningful serving).");
        return;
    }

    println!();
    println!("=== Optimal Meal Plan ===");
    println!();
    println!("Total daily cost: {:.2}", result.total_cost);
    println!();

    let name_width = name_column_width(result);

    println!(
        "{:<width$}  {:>8}  {:>10}  {:>10}",
        "Food Item",
        "Servings",
        "Per Serv.",
        "Total",
        width = name_width
    );
    for item in &result.meal_plan {
        println!(
            "{:<width$}  {:>8.2}  {:>10.2}  {:>10.2}",
            item.food.name,
            item.servings,
            item.food.cost,
            item.cost,
            width = name_width
        );
    }
    println!(
        "{:<width$}  {:>8}  {:>10}  {:>10.2}",
        "Total",
        "",
        "",
        result.total_cost,
        width = name_width
    );

    println!();
    println!("--- Cost Breakdown ---");
    let max_cost = result
        .meal_plan
        .iter()
        .map(|item| item.cost)
        .fold(0.0, f64::max);
    for item in &result.meal_plan {
        println!(
            "{:<width$}  {} {:.2}",
            item.food.name,
            cost_bar(item.cost, max_cost, COST_BAR_WIDTH),
            item.cost,
            width = name_width
        );
    }

    println!();
    println!("--- Nutrients ---");
    for (label, value, min, max, status) in result.statuses() {
        let marker = match status {
            NutrientStatus::Within => " ",
            NutrientStatus::BelowMin => "↓",
            NutrientStatus::AboveMax => "↑",
        };
        println!(
            "{} {:<9} {:>8.1}  (target {}-{})  {}",
            marker,
            label,
            value,
            min,
            max,
            status.label()
        );
    }

    let within = check_constraints(&result.nutrients, &result.constraints);
    println!();
    println!(
        "Within ±{:.0}% of every target: {}",
        FEASIBILITY_TOLERANCE * 100.0,
        if within { "yes" } else { "no" }
    );
    println!();
}

/// Width of the name column, in characters.
///
/// Formatting pads by `char` count, so widths must be measured the same way.
pub fn name_column_width(result: &OptimizationResult) -> usize {
    result
        .meal_plan
        .iter()
        .map(|item| item.food.name.chars().count())
        .max()
        .unwrap_or(10)
        .max("Food Item".len())
}

/// A bar whose length is proportional to `cost / max_cost`.
pub fn cost_bar(cost: f64, max_cost: f64, width: usize) -> String {
    if max_cost <= 0.0 || cost <= 0.0 {
        return String::new();
    }
    let filled = ((cost / max_cost) * width as f64).round() as usize;
    "█".repeat(filled.clamp(1, width))
}

/// Display a list of foods with their details.
pub fn display_food_list(foods: &[FoodItem], title: &str) {
    if foods.is_empty() {
        println!("{}: (none)", title);
        return;
    }

    println!();
    println!("=== {} ({} items) ===", title, foods.len());
    println!();

    for food in foods {
        let marker = if food.is_valid() { " " } else { "!" };
        println!(
            "{} {} - cost {:.2}, {} cal, P:{} F:{} C:{}, max {} servings",
            marker,
            food.name,
            food.cost,
            food.calories,
            food.protein,
            food.fat,
            food.carbs,
            food.cap()
        );
    }

    println!();
}

/// Display foods ordered by cost efficiency (lower is better).
pub fn display_efficiency_ranking(ranking: &[(FoodItem, f64)]) {
    if ranking.is_empty() {
        println!("No valid foods to rank.");
        return;
    }

    println!();
    println!("=== Cost Efficiency (cost per unit of nutrient value) ===");
    println!();

    for (i, (food, score)) in ranking.iter().enumerate() {
        println!("{:>3}. {:<20} {:>10.2}", i + 1, food.name, score);
    }

    println!();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{MealPlanItem, NutrientConstraints, Nutrients};

    fn result_with(names: &[&str]) -> OptimizationResult {
        OptimizationResult {
            meal_plan: names
                .iter()
                .map(|name| {
                    let food = FoodItem::new(*name, *name, 1.0, 100.0, 1.0, 1.0, 1.0, None);
                    MealPlanItem::new(food, 1.0, 1.0)
                })
                .collect(),
            total_cost: 0.0,
            nutrients: Nutrients::default(),
            constraints: NutrientConstraints::default(),
        }
    }

    #[test]
    fn test_name_width_counts_chars() {
        // 12 chars, 15 bytes
        let result = result_with(&["Crème brûlée", "Rice"]);
        assert_eq!(name_column_width(&result), 12);

        let padded = format!("{:<width$}|", "Rice", width = name_column_width(&result));
        assert_eq!(padded.chars().count(), 13);
    }

    #[test]
    fn test_name_width_minimum_is_header() {
        let result = result_with(&["Egg"]);
        assert_eq!(name_column_width(&result), "Food Item".len());
    }

    #[test]
    fn test_cost_bar_proportional() {
        assert_eq!(cost_bar(60.0, 60.0, 10).chars().count(), 10);
        assert_eq!(cost_bar(30.0, 60.0, 10).chars().count(), 5);
    }

    #[test]
    fn test_cost_bar_minimum_and_empty() {
        assert_eq!(cost_bar(0.01, 100.0, 10).chars().count(), 1);
        assert!(cost_bar(0.0, 100.0, 10).is_empty());
        assert!(cost_bar(5.0, 0.0, 10).is_empty());
    }
}
