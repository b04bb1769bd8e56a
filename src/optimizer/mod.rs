pub mod calculations;
pub mod constants;
pub mod passes;
pub mod plan;
pub mod ranking;

pub use calculations::{
    calculate_nutrients, check_constraints, cost_efficiency, round_to, shortfall,
};
pub use constants::*;
pub use passes::{
    run_passes, seed_calories, top_up_calories, top_up_carbs, top_up_protein, Servings,
};
pub use plan::{build_result, optimize};
pub use ranking::{rank_by_calorie_cost, rank_by_protein_cost};
