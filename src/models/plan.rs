use serde::{Deserialize, Serialize};

use crate::models::{FoodItem, MealSlot};
use crate::planner::calculations::{BmiCategory, EnergyProfile, classify_bmi, round_to};
use crate::planner::distribution::SlotTarget;
use crate::planner::ranking::budget_overflow;

/// The item chosen for one slot, with the target it was chosen against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlotPick {
    pub slot: MealSlot,
    pub target: SlotTarget,
    pub item: FoodItem,
}

impl SlotPick {
    pub fn new(slot: MealSlot, target: SlotTarget, item: FoodItem) -> Self {
        Self { slot, target, item }
    }

    /// How far the item's price exceeds the slot budget (0 when within).
    pub fn budget_overflow(&self) -> f64 {
        budget_overflow(self.item.price, self.target.budget)
    }
}

/// Nutrient and cost totals for a plan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PlanTotals {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fats: f64,
    pub fiber: f64,
    pub cost: f64,
}

impl PlanTotals {
    /// Exact sums over the given items.
    pub fn sum<'a>(items: impl IntoIterator<Item = &'a FoodItem>) -> Self {
        items.into_iter().fold(Self::default(), |acc, item| Self {
            calories: acc.calories + item.calories,
            protein: acc.protein + item.protein_g,
            carbs: acc.carbs + item.carbs_g,
            fats: acc.fats + item.fats_g,
            fiber: acc.fiber + item.fiber_g,
            cost: acc.cost + item.price,
        })
    }

    /// Display rounding: calories to integer, nutrients to 1 decimal,
    /// cost to 2 decimals.
    pub fn rounded(&self) -> Self {
        Self {
            calories: self.calories.round(),
            protein: round_to(self.protein, 1),
            carbs: round_to(self.carbs, 1),
            fats: round_to(self.fats, 1),
            fiber: round_to(self.fiber, 1),
            cost: round_to(self.cost, 2),
        }
    }
}

/// A one-day plan: energy figures, one pick per slot, and totals.
///
/// Numbers are rounded for display; `slots` holds exactly one entry per
/// `MealSlot` in plan order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealPlanResult {
    pub bmi: f64,
    pub bmi_category: BmiCategory,
    pub bmr: f64,
    pub target_calories: f64,
    pub slots: Vec<SlotPick>,
    pub totals: PlanTotals,
}

impl MealPlanResult {
    pub fn new(energy: &EnergyProfile, slots: Vec<SlotPick>) -> Self {
        let totals = PlanTotals::sum(slots.iter().map(|p| &p.item)).rounded();
        Self {
            bmi: round_to(energy.bmi, 1),
            bmi_category: classify_bmi(energy.bmi),
            bmr: energy.bmr.round(),
            target_calories: energy.target_calories.round(),
            slots,
            totals,
        }
    }

    /// The item picked for a slot.
    pub fn item(&self, slot: MealSlot) -> Option<&FoodItem> {
        self.slots.iter().find(|p| p.slot == slot).map(|p| &p.item)
    }

    /// Difference between total calories and the target (positive = over).
    pub fn calorie_gap(&self) -> f64 {
        self.totals.calories - self.target_calories
    }
}
