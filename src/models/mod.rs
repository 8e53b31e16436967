mod food;
mod plan;
mod profile;

pub use food::{DietType, FoodCatalog, FoodItem, MealSlot};
pub use plan::{MealPlanResult, PlanTotals, SlotPick};
pub use profile::{ActivityLevel, BiometricInput, DietPreference, Goal, Sex, check_range};
