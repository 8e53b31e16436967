pub mod calculations;
pub mod coin;
pub mod constants;
pub mod distribution;
pub mod ranking;

pub use calculations::{
    BmiCategory, EnergyProfile, calculate_bmi, calculate_bmr, calculate_target_calories,
    classify_bmi, round_to, weekly_change_kg,
};
pub use coin::{DietCoin, FixedCoin, RandomCoin};
pub use constants::*;
pub use distribution::{SlotTarget, distribute};
pub use ranking::{
    budget_overflow, compute_meal_plan, filter_by_diet, rank_candidates, select_best_food,
};
