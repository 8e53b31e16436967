use serde::{Deserialize, Serialize};

use crate::models::MealSlot;
use crate::planner::constants::{budget_share, calorie_share};

/// Calorie target and spending cap for one slot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SlotTarget {
    pub calories: f64,
    pub budget: f64,
}

impl SlotTarget {
    pub fn for_slot(slot: MealSlot, target_calories: f64, daily_budget: f64) -> Self {
        Self {
            calories: target_calories * calorie_share(slot),
            budget: daily_budget * budget_share(slot),
        }
    }
}

/// Split the day's calories and budget across all slots, in plan order.
pub fn distribute(target_calories: f64, daily_budget: f64) -> [(MealSlot, SlotTarget); 5] {
    MealSlot::ALL.map(|slot| (slot, SlotTarget::for_slot(slot, target_calories, daily_budget)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distribute_lunch_share() {
        let targets = distribute(2000.0, 1000.0);
        let (slot, lunch) = targets[1];
        assert_eq!(slot, MealSlot::Lunch);
        assert!((lunch.calories - 700.0).abs() < 1e-9);
        assert!((lunch.budget - 350.0).abs() < 1e-9);
    }

    #[test]
    fn test_distribute_preserves_totals() {
        for (calories, budget) in [(1200.0, 100.0), (2055.5625, 742.0), (4100.0, 5000.0)] {
            let targets = distribute(calories, budget);
            let cal_sum: f64 = targets.iter().map(|(_, t)| t.calories).sum();
            let budget_sum: f64 = targets.iter().map(|(_, t)| t.budget).sum();
            assert!((cal_sum - calories).abs() < 1e-6);
            assert!((budget_sum - budget).abs() < 1e-6);
        }
    }
}
