use dialoguer::{Confirm, Input, Select};

use crate::error::{PlannerError, Result};
use crate::models::{ActivityLevel, BiometricInput, DietPreference, Goal, Sex, check_range};
use crate::planner::constants::{AGE_RANGE, BUDGET_RANGE, HEIGHT_RANGE_CM, WEIGHT_RANGE_KG};

/// Partially filled form; `None` fields are asked for interactively.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InputDraft {
    pub age: Option<u32>,
    pub sex: Option<Sex>,
    pub weight_kg: Option<f64>,
    pub height_cm: Option<f64>,
    pub activity_level: Option<ActivityLevel>,
    pub goal: Option<Goal>,
    pub diet_preference: Option<DietPreference>,
    pub daily_budget: Option<f64>,
}

impl InputDraft {
    /// Names of the fields still missing.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.age.is_none() {
            missing.push("age");
        }
        if self.sex.is_none() {
            missing.push("sex");
        }
        if self.weight_kg.is_none() {
            missing.push("weight");
        }
        if self.height_cm.is_none() {
            missing.push("height");
        }
        if self.activity_level.is_none() {
            missing.push("activity");
        }
        if self.goal.is_none() {
            missing.push("goal");
        }
        if self.diet_preference.is_none() {
            missing.push("diet");
        }
        if self.daily_budget.is_none() {
            missing.push("budget");
        }
        missing
    }

    /// Build the input without prompting; fails if any field is missing.
    pub fn complete(&self) -> Result<BiometricInput> {
        let missing = self.missing_fields();
        if !missing.is_empty() {
            return Err(PlannerError::InvalidInput(format!(
                "missing required fields: {}",
                missing.join(", ")
            )));
        }

        match *self {
            InputDraft {
                age: Some(age),
                sex: Some(sex),
                weight_kg: Some(weight_kg),
                height_cm: Some(height_cm),
                activity_level: Some(activity_level),
                goal: Some(goal),
                diet_preference: Some(diet_preference),
                daily_budget: Some(daily_budget),
            } => {
                let input = BiometricInput {
                    age,
                    sex,
                    weight_kg,
                    height_cm,
                    activity_level,
                    goal,
                    diet_preference,
                    daily_budget,
                };
                input.validate()?;
                Ok(input)
            }
            _ => Err(PlannerError::InvalidInput("incomplete input".to_string())),
        }
    }
}

/// Prompt for a number until it parses and falls within `range`.
fn prompt_in_range(prompt: &str, field: &str, default: f64, range: (f64, f64)) -> Result<f64> {
    let input: String = Input::new()
        .with_prompt(format!("{} ({}-{})", prompt, range.0, range.1))
        .default(default.to_string())
        .validate_with(|s: &String| -> std::result::Result<(), String> {
            let value: f64 = s.trim().parse().map_err(|_| "Invalid number".to_string())?;
            check_range(field, value, range).map_err(|e| e.to_string())
        })
        .interact_text()?;

    input
        .trim()
        .parse()
        .map_err(|_| PlannerError::InvalidInput("Invalid number".to_string()))
}

/// Prompt for one of a fixed set of options.
fn prompt_choice<T: Copy>(
    prompt: &str,
    options: &[T],
    label: fn(&T) -> &'static str,
    default: usize,
) -> Result<T> {
    let items: Vec<&str> = options.iter().map(label).collect();

    let selection = Select::new()
        .with_prompt(prompt)
        .items(&items)
        .default(default)
        .interact()?;

    Ok(options[selection])
}

pub fn prompt_age() -> Result<u32> {
    let age = prompt_in_range("Age in years", "age", 30.0, AGE_RANGE)?;
    if age.fract() != 0.0 {
        return Err(PlannerError::InvalidInput(
            "Age must be a whole number".to_string(),
        ));
    }
    Ok(age as u32)
}

pub fn prompt_sex() -> Result<Sex> {
    prompt_choice("Sex", &Sex::ALL, Sex::description, 0)
}

pub fn prompt_weight() -> Result<f64> {
    prompt_in_range("Weight in kg", "weight", 70.0, WEIGHT_RANGE_KG)
}

pub fn prompt_height() -> Result<f64> {
    prompt_in_range("Height in cm", "height", 170.0, HEIGHT_RANGE_CM)
}

pub fn prompt_activity_level() -> Result<ActivityLevel> {
    prompt_choice(
        "Activity level",
        &ActivityLevel::ALL,
        ActivityLevel::description,
        2,
    )
}

pub fn prompt_goal() -> Result<Goal> {
    prompt_choice("Goal", &Goal::ALL, Goal::description, 1)
}

pub fn prompt_diet_preference() -> Result<DietPreference> {
    prompt_choice(
        "Diet preference",
        &DietPreference::ALL,
        DietPreference::description,
        0,
    )
}

pub fn prompt_budget() -> Result<f64> {
    prompt_in_range("Daily food budget", "budget", 500.0, BUDGET_RANGE)
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

/// Fill every missing field of the draft interactively.
pub fn collect_biometric_input(draft: InputDraft) -> Result<BiometricInput> {
    let filled = InputDraft {
        age: Some(draft.age.map_or_else(prompt_age, Ok)?),
        sex: Some(draft.sex.map_or_else(prompt_sex, Ok)?),
        weight_kg: Some(draft.weight_kg.map_or_else(prompt_weight, Ok)?),
        height_cm: Some(draft.height_cm.map_or_else(prompt_height, Ok)?),
        activity_level: Some(draft.activity_level.map_or_else(prompt_activity_level, Ok)?),
        goal: Some(draft.goal.map_or_else(prompt_goal, Ok)?),
        diet_preference: Some(draft.diet_preference.map_or_else(prompt_diet_preference, Ok)?),
        daily_budget: Some(draft.daily_budget.map_or_else(prompt_budget, Ok)?),
    };

    filled.complete()
}
