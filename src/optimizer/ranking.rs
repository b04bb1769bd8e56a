use std::cmp::Ordering;

use crate::models::FoodItem;

/// A catalog index paired with its ranking score.
#[derive(Debug, Clone, Copy)]
struct Ranked {
    idx: usize,
    score: f64,
}

/// Rank catalog indices by descending `score`.
///
/// The sort is stable: foods with equal scores keep catalog order.
fn rank_by(foods: &[FoodItem], score: impl Fn(&FoodItem) -> f64) -> Vec<Ranked> {
    let mut ranked: Vec<Ranked> = foods
        .iter()
        .enumerate()
        .map(|(idx, food)| Ranked {
            idx,
            score: score(food),
        })
        .collect();

    // Higher is better, so reverse the comparison
    ranked.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
    ranked
}

/// Indices ordered by calories per unit cost.
pub fn rank_by_calorie_cost(foods: &[FoodItem]) -> Vec<usize> {
    rank_by(foods, FoodItem::calories_per_cost)
        .into_iter()
        .map(|r| r.idx)
        .collect()
}

/// Indices ordered by protein per unit cost.
pub fn rank_by_protein_cost(foods: &[FoodItem]) -> Vec<usize> {
    rank_by(foods, FoodItem::protein_per_cost)
        .into_iter()
        .map(|r| r.idx)
        .collect()
}
