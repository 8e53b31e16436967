use serde::{Deserialize, Serialize};

use crate::models::{BiometricInput, Goal, Sex};
use crate::planner::constants::*;

/// Energy figures derived from a biometric input, unrounded.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnergyProfile {
    pub bmi: f64,
    pub bmr: f64,
    pub target_calories: f64,
}

impl EnergyProfile {
    pub fn from_input(input: &BiometricInput) -> Self {
        let bmi = calculate_bmi(input.weight_kg, input.height_cm);
        let bmr = calculate_bmr(input.weight_kg, input.height_cm, input.age, input.sex);
        let target_calories = calculate_target_calories(bmr, input);
        Self {
            bmi,
            bmr,
            target_calories,
        }
    }
}

/// Body-mass index: weight(kg) / height(m)².
///
/// Returns 0 for a zero or negative weight/height.
pub fn calculate_bmi(weight_kg: f64, height_cm: f64) -> f64 {
    if weight_kg <= 0.0 || height_cm <= 0.0 {
        return 0.0;
    }
    let height_m = height_cm / 100.0;
    weight_kg / (height_m * height_m)
}

/// Basal metabolic rate using Mifflin-St Jeor.
///
/// Men: 10w + 6.25h - 5a + 5. Women: 10w + 6.25h - 5a - 161.
/// Returns 0 when weight, height or age is zero.
pub fn calculate_bmr(weight_kg: f64, height_cm: f64, age: u32, sex: Sex) -> f64 {
    if weight_kg <= 0.0 || height_cm <= 0.0 || age == 0 {
        return 0.0;
    }
    let base = BMR_WEIGHT_COEF * weight_kg + BMR_HEIGHT_COEF * height_cm
        - BMR_AGE_COEF * age as f64;
    match sex {
        Sex::Male => base + BMR_MALE_OFFSET,
        Sex::Female => base + BMR_FEMALE_OFFSET,
    }
}

/// Daily calorie target: BMR × activity factor + goal offset.
pub fn calculate_target_calories(bmr: f64, input: &BiometricInput) -> f64 {
    bmr * activity_factor(input.activity_level) + goal_adjustment(input.goal)
}

/// Expected weekly body-mass change in kg for a goal.
pub fn weekly_change_kg(goal: Goal) -> f64 {
    match goal {
        Goal::Lose => -GOAL_WEEKLY_CHANGE_KG,
        Goal::Maintain => 0.0,
        Goal::Gain => GOAL_WEEKLY_CHANGE_KG,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl BmiCategory {
    pub fn description(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::Normal => "Normal weight",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::Obese => "Obese",
        }
    }

    /// One-line advice shown next to the category.
    pub fn advice(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => {
                "Focus on a calorie surplus (about +500 kcal/day for ~0.5 kg gain per week)."
            }
            BmiCategory::Normal => {
                "Maintain your current weight with a balanced diet and regular exercise."
            }
            BmiCategory::Overweight => {
                "Follow a calorie deficit (about -500 kcal/day for ~0.5 kg loss per week)."
            }
            BmiCategory::Obese => {
                "Consult a healthcare provider; start with a 500 kcal/day deficit."
            }
        }
    }
}

pub fn classify_bmi(bmi: f64) -> BmiCategory {
    if bmi < BMI_UNDERWEIGHT_BELOW {
        BmiCategory::Underweight
    } else if bmi < BMI_NORMAL_BELOW {
        BmiCategory::Normal
    } else if bmi < BMI_OVERWEIGHT_BELOW {
        BmiCategory::Overweight
    } else {
        BmiCategory::Obese
    }
}

/// Round to a fixed number of decimal places.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10_f64.powi(decimals as i32);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ActivityLevel, DietPreference};

    fn input(sex: Sex, activity_level: ActivityLevel, goal: Goal) -> BiometricInput {
        BiometricInput {
            age: 30,
            sex,
            weight_kg: 70.0,
            height_cm: 175.0,
            activity_level,
            goal,
            diet_preference: DietPreference::Veg,
            daily_budget: 500.0,
        }
    }

    #[test]
    fn test_bmi_zero_guard() {
        assert_eq!(calculate_bmi(0.0, 175.0), 0.0);
        assert_eq!(calculate_bmi(70.0, 0.0), 0.0);
    }

    #[test]
    fn test_bmr_female_offset() {
        let male = calculate_bmr(70.0, 175.0, 30, Sex::Male);
        let female = calculate_bmr(70.0, 175.0, 30, Sex::Female);
        assert!((male - female - 166.0).abs() < 1e-9);
        assert_eq!(calculate_bmr(70.0, 175.0, 0, Sex::Male), 0.0);
    }

    #[test]
    fn test_target_calories_maintain_is_tdee() {
        let i = input(Sex::Male, ActivityLevel::Sedentary, Goal::Maintain);
        let profile = EnergyProfile::from_input(&i);
        assert!((profile.target_calories - profile.bmr * 1.2).abs() < 1e-9);
    }

    #[test]
    fn test_gain_and_lose_are_symmetric() {
        let lose = EnergyProfile::from_input(&input(Sex::Female, ActivityLevel::Active, Goal::Lose));
        let gain = EnergyProfile::from_input(&input(Sex::Female, ActivityLevel::Active, Goal::Gain));
        assert!((gain.target_calories - lose.target_calories - 1000.0).abs() < 1e-9);
        assert_eq!(weekly_change_kg(Goal::Lose), -0.5);
    }

    #[test]
    fn test_classify_bmi_boundaries() {
        assert_eq!(classify_bmi(18.4), BmiCategory::Underweight);
        assert_eq!(classify_bmi(18.5), BmiCategory::Normal);
        assert_eq!(classify_bmi(24.99), BmiCategory::Normal);
        assert_eq!(classify_bmi(25.0), BmiCategory::Overweight);
        assert_eq!(classify_bmi(30.0), BmiCategory::Obese);
    }

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(22.857, 1), 22.9);
        assert_eq!(round_to(1648.75, 0), 1649.0);
        assert_eq!(round_to(3.456, 2), 3.46);
    }
}
