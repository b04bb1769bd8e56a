pub mod prompts;
pub mod render;

pub use prompts::{
    parse_number, prompt_constraints, prompt_new_food, prompt_number, prompt_select_food,
    prompt_yes_no,
};
pub use render::{
    cost_bar, display_efficiency_ranking, display_food_list, display_result, name_column_width,
};
