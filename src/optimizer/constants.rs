/// Serving cap applied when a food has no positive `max_servings`.
pub const DEFAULT_MAX_SERVINGS: f64 = 10.0;

/// Rounded servings must exceed this to appear in the plan.
pub const MIN_PLAN_SERVINGS: f64 = 0.01;

/// Decimal places kept for servings and costs.
pub const SERVING_DECIMALS: u32 = 2;
pub const COST_DECIMALS: u32 = 2;

/// Decimal places kept for achieved nutrient totals.
pub const NUTRIENT_DECIMALS: u32 = 1;

// ─────────────────────────────────────────────────────────────────────────────
// Utility scoring (not used to build the plan)
// ─────────────────────────────────────────────────────────────────────────────

/// Relative slack around each bound for the tolerance check (±5%).
pub const FEASIBILITY_TOLERANCE: f64 = 0.05;

/// Weight of protein relative to the other nutrients in cost efficiency.
pub const PROTEIN_VALUE_WEIGHT: f64 = 1.5;

/// Floor applied to each min bound before normalizing nutrient values.
pub const MIN_BOUND_FLOOR: f64 = 1.0;

// ─────────────────────────────────────────────────────────────────────────────
// Catalog defaults
// ─────────────────────────────────────────────────────────────────────────────

/// Cap given to rows added through the CLI.
pub const NEW_FOOD_MAX_SERVINGS: f64 = 5.0;

/// Minimum Jaro-Winkler similarity for a fuzzy name match.
pub const FUZZY_MATCH_THRESHOLD: f64 = 0.7;

/// Width in characters of a full-length cost bar.
pub const COST_BAR_WIDTH: usize = 40;
