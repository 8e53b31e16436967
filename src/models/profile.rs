use serde::{Deserialize, Serialize};

use crate::error::{PlannerError, Result};
use crate::planner::constants::{AGE_RANGE, BUDGET_RANGE, HEIGHT_RANGE_CM, WEIGHT_RANGE_KG};

/// Biological sex, used only by the BMR formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    pub const ALL: [Sex; 2] = [Sex::Male, Sex::Female];

    pub fn description(&self) -> &'static str {
        match self {
            Sex::Male => "Male",
            Sex::Female => "Female",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "camelCase")]
pub enum ActivityLevel {
    /// Little or no exercise
    Sedentary,
    /// Light exercise 1-3 days/week
    Light,
    /// Moderate exercise 3-5 days/week
    Moderate,
    /// Hard exercise 6-7 days/week
    Active,
    /// Very hard exercise or a physical job
    #[value(name = "very-active", alias = "veryActive")]
    VeryActive,
}

impl ActivityLevel {
    pub const ALL: [ActivityLevel; 5] = [
        ActivityLevel::Sedentary,
        ActivityLevel::Light,
        ActivityLevel::Moderate,
        ActivityLevel::Active,
        ActivityLevel::VeryActive,
    ];

    pub fn description(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "Sedentary (little or no exercise)",
            ActivityLevel::Light => "Light (exercise 1-3 days/week)",
            ActivityLevel::Moderate => "Moderate (exercise 3-5 days/week)",
            ActivityLevel::Active => "Active (exercise 6-7 days/week)",
            ActivityLevel::VeryActive => "Very active (hard exercise or physical job)",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Goal {
    Lose,
    Maintain,
    Gain,
}

impl Goal {
    pub const ALL: [Goal; 3] = [Goal::Lose, Goal::Maintain, Goal::Gain];

    pub fn description(&self) -> &'static str {
        match self {
            Goal::Lose => "Lose weight",
            Goal::Maintain => "Maintain weight",
            Goal::Gain => "Gain weight",
        }
    }
}

/// Which diet types the selector may pick from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum DietPreference {
    Veg,
    #[value(name = "nonveg", alias = "non-veg")]
    NonVeg,
    /// Veg or non-veg, decided per slot by a coin flip.
    Both,
}

impl DietPreference {
    pub const ALL: [DietPreference; 3] =
        [DietPreference::Veg, DietPreference::NonVeg, DietPreference::Both];

    pub fn description(&self) -> &'static str {
        match self {
            DietPreference::Veg => "Vegetarian",
            DietPreference::NonVeg => "Non-vegetarian",
            DietPreference::Both => "Both (mix per meal)",
        }
    }
}

/// Inputs for one plan request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BiometricInput {
    pub age: u32,
    pub sex: Sex,
    pub weight_kg: f64,
    pub height_cm: f64,
    pub activity_level: ActivityLevel,
    pub goal: Goal,
    pub diet_preference: DietPreference,
    /// Daily spend limit, currency-agnostic.
    pub daily_budget: f64,
}

impl BiometricInput {
    /// Check every numeric field against its accepted range.
    pub fn validate(&self) -> Result<()> {
        check_range("age", self.age as f64, AGE_RANGE)?;
        check_range("weight", self.weight_kg, WEIGHT_RANGE_KG)?;
        check_range("height", self.height_cm, HEIGHT_RANGE_CM)?;
        check_range("budget", self.daily_budget, BUDGET_RANGE)?;
        Ok(())
    }
}

/// Reject values outside `[min, max]`, including NaN and infinities.
pub fn check_range(field: &str, value: f64, (min, max): (f64, f64)) -> Result<()> {
    if value.is_finite() && (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(PlannerError::InvalidInput(format!(
            "{} must be between {} and {} (got {})",
            field, min, max, value
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_input() -> BiometricInput {
        BiometricInput {
            age: 30,
            sex: Sex::Male,
            weight_kg: 70.0,
            height_cm: 175.0,
            activity_level: ActivityLevel::Moderate,
            goal: Goal::Maintain,
            diet_preference: DietPreference::Veg,
            daily_budget: 500.0,
        }
    }

    #[test]
    fn test_validate_accepts_bounds() {
        let mut input = sample_input();
        assert!(input.validate().is_ok());

        input.age = 15;
        input.weight_kg = 200.0;
        input.height_cm = 120.0;
        input.daily_budget = 5000.0;
        assert!(input.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_out_of_range() {
        let mut input = sample_input();
        input.age = 14;
        assert!(matches!(input.validate(), Err(PlannerError::InvalidInput(_))));

        let mut input = sample_input();
        input.weight_kg = f64::NAN;
        assert!(input.validate().is_err());

        let mut input = sample_input();
        input.daily_budget = 99.0;
        assert!(input.validate().is_err());
    }

    #[test]
    fn test_serde_names() {
        let json = r#"{"age": 25, "sex": "female", "weightKg": 60, "heightCm": 165,
            "activityLevel": "veryActive", "goal": "lose", "dietPreference": "nonveg",
            "dailyBudget": 300}"#;
        let input: BiometricInput = serde_json::from_str(json).unwrap();
        assert_eq!(input.activity_level, ActivityLevel::VeryActive);
        assert_eq!(input.diet_preference, DietPreference::NonVeg);
        assert_eq!(input.sex, Sex::Female);
    }
}
