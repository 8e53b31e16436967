use crate::models::{ActivityLevel, Goal, MealSlot};

/// Mifflin-St Jeor coefficients.
pub const BMR_WEIGHT_COEF: f64 = 10.0;
pub const BMR_HEIGHT_COEF: f64 = 6.25;
pub const BMR_AGE_COEF: f64 = 5.0;
pub const BMR_MALE_OFFSET: f64 = 5.0;
pub const BMR_FEMALE_OFFSET: f64 = -161.0;

/// Daily calorie offset for a lose/gain goal.
///
/// 500 kcal/day is roughly 0.5 kg of body mass per week. Rendered advice
/// text quotes this number.
pub const GOAL_CALORIE_OFFSET: f64 = 500.0;

/// Weekly body-mass change implied by `GOAL_CALORIE_OFFSET`.
pub const GOAL_WEEKLY_CHANGE_KG: f64 = 0.5;

// ─────────────────────────────────────────────────────────────────────────────
// Slot shares (each column sums to 1.0)
// ─────────────────────────────────────────────────────────────────────────────

pub const BREAKFAST_CALORIE_SHARE: f64 = 0.25;
pub const LUNCH_CALORIE_SHARE: f64 = 0.35;
pub const DINNER_CALORIE_SHARE: f64 = 0.30;
pub const SNACK_CALORIE_SHARE: f64 = 0.07;
pub const DRINK_CALORIE_SHARE: f64 = 0.03;

pub const BREAKFAST_BUDGET_SHARE: f64 = 0.20;
pub const LUNCH_BUDGET_SHARE: f64 = 0.35;
pub const DINNER_BUDGET_SHARE: f64 = 0.30;
pub const SNACK_BUDGET_SHARE: f64 = 0.10;
pub const DRINK_BUDGET_SHARE: f64 = 0.05;

// ─────────────────────────────────────────────────────────────────────────────
// BMI bands
// ─────────────────────────────────────────────────────────────────────────────

pub const BMI_UNDERWEIGHT_BELOW: f64 = 18.5;
pub const BMI_NORMAL_BELOW: f64 = 25.0;
pub const BMI_OVERWEIGHT_BELOW: f64 = 30.0;

// ─────────────────────────────────────────────────────────────────────────────
// Accepted input ranges (inclusive)
// ─────────────────────────────────────────────────────────────────────────────

pub const AGE_RANGE: (f64, f64) = (15.0, 100.0);
pub const WEIGHT_RANGE_KG: (f64, f64) = (30.0, 200.0);
pub const HEIGHT_RANGE_CM: (f64, f64) = (120.0, 250.0);
pub const BUDGET_RANGE: (f64, f64) = (100.0, 5000.0);

/// Activity multiplier applied to BMR.
pub fn activity_factor(level: ActivityLevel) -> f64 {
    match level {
        ActivityLevel::Sedentary => 1.2,
        ActivityLevel::Light => 1.375,
        ActivityLevel::Moderate => 1.55,
        ActivityLevel::Active => 1.725,
        ActivityLevel::VeryActive => 1.9,
    }
}

/// Additive calorie offset for a goal.
pub fn goal_adjustment(goal: Goal) -> f64 {
    match goal {
        Goal::Lose => -GOAL_CALORIE_OFFSET,
        Goal::Maintain => 0.0,
        Goal::Gain => GOAL_CALORIE_OFFSET,
    }
}

/// Fraction of the daily calorie target given to a slot.
pub fn calorie_share(slot: MealSlot) -> f64 {
    match slot {
        MealSlot::Breakfast => BREAKFAST_CALORIE_SHARE,
        MealSlot::Lunch => LUNCH_CALORIE_SHARE,
        MealSlot::Dinner => DINNER_CALORIE_SHARE,
        MealSlot::Snack => SNACK_CALORIE_SHARE,
        MealSlot::Drink => DRINK_CALORIE_SHARE,
    }
}

/// Fraction of the daily budget given to a slot.
pub fn budget_share(slot: MealSlot) -> f64 {
    match slot {
        MealSlot::Breakfast => BREAKFAST_BUDGET_SHARE,
        MealSlot::Lunch => LUNCH_BUDGET_SHARE,
        MealSlot::Dinner => DINNER_BUDGET_SHARE,
        MealSlot::Snack => SNACK_BUDGET_SHARE,
        MealSlot::Drink => DRINK_BUDGET_SHARE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shares_sum_to_one() {
        let calories: f64 = MealSlot::ALL.iter().map(|s| calorie_share(*s)).sum();
        let budget: f64 = MealSlot::ALL.iter().map(|s| budget_share(*s)).sum();
        assert!((calories - 1.0).abs() < 1e-9);
        assert!((budget - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_goal_adjustment_symmetric() {
        assert_eq!(goal_adjustment(Goal::Lose), -500.0);
        assert_eq!(goal_adjustment(Goal::Maintain), 0.0);
        assert_eq!(goal_adjustment(Goal::Gain), 500.0);
    }

    #[test]
    fn test_activity_factor_increases() {
        let factors: Vec<f64> = ActivityLevel::ALL.iter().map(|l| activity_factor(*l)).collect();
        assert!(factors.windows(2).all(|w| w[0] < w[1]));
    }
}
