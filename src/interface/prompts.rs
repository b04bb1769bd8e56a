use dialoguer::{Confirm, Input, Select};

use crate::error::{MealError, Result};
use crate::models::{FoodItem, NutrientConstraints};
use crate::optimizer::constants::NEW_FOOD_MAX_SERVINGS;

/// Parse a number typed at a prompt.
pub fn parse_number(input: &str, field: &str) -> Result<f64> {
    input
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| MealError::InvalidInput(format!("Invalid number for {}: '{}'", field, input)))
}

/// Prompt for a number with a default value.
pub fn prompt_number(prompt: &str, default: f64) -> Result<f64> {
    let input: String = Input::new()
        .with_prompt(prompt)
        .default(default.to_string())
        .interact_text()?;

    parse_number(&input, prompt)
}

/// Prompt for all eight nutrient bounds, pre-filled with `defaults`.
pub fn prompt_constraints(defaults: &NutrientConstraints) -> Result<NutrientConstraints> {
    Ok(NutrientConstraints {
        min_calories: prompt_number("Min calories", defaults.min_calories)?,
        max_calories: prompt_number("Max calories", defaults.max_calories)?,
        min_protein: prompt_number("Min protein (g)", defaults.min_protein)?,
        max_protein: prompt_number("Max protein (g)", defaults.max_protein)?,
        min_fat: prompt_number("Min fat (g)", defaults.min_fat)?,
        max_fat: prompt_number("Max fat (g)", defaults.max_fat)?,
        min_carbs: prompt_number("Min carbs (g)", defaults.min_carbs)?,
        max_carbs: prompt_number("Max carbs (g)", defaults.max_carbs)?,
    })
}

/// Prompt for a new food row. The id is left empty for the catalog to fill.
pub fn prompt_new_food() -> Result<FoodItem> {
    let name: String = Input::new()
        .with_prompt("Food name")
        .interact_text()?;

    if name.trim().is_empty() {
        return Err(MealError::InvalidInput("Food name cannot be blank".to_string()));
    }

    let cost = prompt_number("Cost per serving", 0.0)?;
    if cost <= 0.0 {
        return Err(MealError::InvalidInput(
            "Cost per serving must be positive".to_string(),
        ));
    }

    let calories = prompt_number("Calories per serving", 0.0)?;
    let protein = prompt_number("Protein per serving (g)", 0.0)?;
    let fat = prompt_number("Fat per serving (g)", 0.0)?;
    let carbs = prompt_number("Carbs per serving (g)", 0.0)?;
    let max_servings = prompt_number("Max servings", NEW_FOOD_MAX_SERVINGS)?;

    Ok(FoodItem::new(
        String::new(),
        name.trim(),
        cost,
        calories,
        protein,
        fat,
        carbs,
        Some(max_servings),
    ))
}

/// Let the user pick one of several foods, or none.
pub fn prompt_select_food<'a>(candidates: &[&'a FoodItem]) -> Result<Option<&'a FoodItem>> {
    let mut options: Vec<String> = candidates
        .iter()
        .take(5)
        .map(|f| f.name.clone())
        .collect();
    let shown = options.len();
    options.push("None of these".to_string());

    let selection = Select::new()
        .with_prompt("Which did you mean?")
        .items(&options)
        .default(0)
        .interact()?;

    Ok((selection < shown).then(|| candidates[selection]))
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}
