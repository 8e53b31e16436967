pub mod prompts;
pub mod render;

pub use prompts::{
    InputDraft, collect_biometric_input, prompt_activity_level, prompt_age, prompt_budget,
    prompt_diet_preference, prompt_goal, prompt_height, prompt_sex, prompt_weight, prompt_yes_no,
};
pub use render::{
    display_catalog, display_meal_plan, display_recipe, write_plan_csv, write_plan_json,
};
