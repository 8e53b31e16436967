use std::cmp::Ordering;

use tracing::{debug, info, warn};

use crate::error::{PlannerError, Result};
use crate::models::{
    BiometricInput, DietPreference, DietType, FoodCatalog, FoodItem, MealPlanResult, MealSlot,
    SlotPick,
};
use crate::planner::calculations::EnergyProfile;
use crate::planner::coin::DietCoin;
use crate::planner::distribution::{SlotTarget, distribute};

/// Candidate food with its ranking keys.
#[derive(Debug)]
struct Candidate<'a> {
    food: &'a FoodItem,
    budget_overflow: f64,
    calorie_distance: f64,
}

impl<'a> Candidate<'a> {
    fn new(food: &'a FoodItem, target: &SlotTarget) -> Self {
        Self {
            food,
            budget_overflow: budget_overflow(food.price, target.budget),
            calorie_distance: (food.calories - target.calories).abs(),
        }
    }

    /// Over-budget amount first, then calorie distance. Lower is better.
    fn cmp_rank(&self, other: &Self) -> Ordering {
        self.budget_overflow
            .total_cmp(&other.budget_overflow)
            .then_with(|| self.calorie_distance.total_cmp(&other.calorie_distance))
    }
}

/// Amount by which a price exceeds the slot budget; 0 when within budget.
pub fn budget_overflow(price: f64, max_budget: f64) -> f64 {
    (price - max_budget).max(0.0)
}

fn of_type(foods: &[FoodItem], diet_type: DietType) -> Vec<&FoodItem> {
    foods.iter().filter(|f| f.diet_type == diet_type).collect()
}

/// Narrow a slot's foods to the requested diet.
///
/// `Both` flips the coin once: non-veg on `true`, veg otherwise, switching
/// to the other subset if the chosen one is empty. Any empty result falls
/// back to the slot's veg items, which may itself be empty.
pub fn filter_by_diet<'a, C: DietCoin + ?Sized>(
    foods: &'a [FoodItem],
    preference: DietPreference,
    coin: &mut C,
) -> Vec<&'a FoodItem> {
    let filtered = match preference {
        DietPreference::Veg => of_type(foods, DietType::Veg),
        DietPreference::NonVeg => of_type(foods, DietType::NonVeg),
        DietPreference::Both => {
            let veg = of_type(foods, DietType::Veg);
            let nonveg = of_type(foods, DietType::NonVeg);
            let pick_nonveg = coin.pick_nonveg();
            debug!(pick_nonveg, "diet coin flipped");

            let (chosen, other) = if pick_nonveg {
                (nonveg, veg)
            } else {
                (veg, nonveg)
            };
            if chosen.is_empty() { other } else { chosen }
        }
    };

    if filtered.is_empty() {
        warn!(?preference, "no items match diet preference, falling back to veg");
        return of_type(foods, DietType::Veg);
    }

    filtered
}

/// Rank candidates for a slot, best first.
///
/// The sort is stable, so fully tied items keep catalog order.
pub fn rank_candidates<'a>(candidates: &[&'a FoodItem], target: &SlotTarget) -> Vec<&'a FoodItem> {
    let mut ranked: Vec<Candidate> = candidates
        .iter()
        .map(|&food| Candidate::new(food, target))
        .collect();

    ranked.sort_by(|a, b| a.cmp_rank(b));

    ranked.into_iter().map(|c| c.food).collect()
}

/// Choose the best food for one slot.
///
/// Filters by diet (with fallback) and returns the top-ranked item, or
/// `EmptyCatalog` when nothing is eligible.
pub fn select_best_food<'a, C: DietCoin + ?Sized>(
    slot: MealSlot,
    foods: &'a [FoodItem],
    target: &SlotTarget,
    preference: DietPreference,
    coin: &mut C,
) -> Result<&'a FoodItem> {
    let filtered = filter_by_diet(foods, preference, coin);

    let best = rank_candidates(&filtered, target)
        .into_iter()
        .next()
        .ok_or(PlannerError::EmptyCatalog(slot))?;

    debug!(
        %slot,
        candidates = filtered.len(),
        target_calories = target.calories,
        max_budget = target.budget,
        pick = %best.debug_string(),
        "selected food for slot"
    );

    Ok(best)
}

/// Compute a one-day meal plan.
///
/// Validates the input, derives the calorie target, splits calories and
/// budget across slots and picks one item per slot independently. Each
/// slot is a local nearest match; the five picks are not jointly optimized.
pub fn compute_meal_plan<C: DietCoin + ?Sized>(
    input: &BiometricInput,
    catalog: &FoodCatalog,
    coin: &mut C,
) -> Result<MealPlanResult> {
    input.validate()?;

    let energy = EnergyProfile::from_input(input);
    debug!(
        bmi = energy.bmi,
        bmr = energy.bmr,
        target_calories = energy.target_calories,
        "computed energy profile"
    );

    let mut picks = Vec::with_capacity(MealSlot::ALL.len());
    for (slot, target) in distribute(energy.target_calories, input.daily_budget) {
        let food = select_best_food(
            slot,
            catalog.items(slot),
            &target,
            input.diet_preference,
            coin,
        )?;
        picks.push(SlotPick::new(slot, target, food.clone()));
    }

    let plan = MealPlanResult::new(&energy, picks);
    info!(
        target_calories = plan.target_calories,
        total_calories = plan.totals.calories,
        total_cost = plan.totals.cost,
        "meal plan generated"
    );

    Ok(plan)
}
