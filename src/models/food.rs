use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Whether a food item is vegetarian.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DietType {
    Veg,
    NonVeg,
}

impl DietType {
    pub fn label(&self) -> &'static str {
        match self {
            DietType::Veg => "veg",
            DietType::NonVeg => "non-veg",
        }
    }
}

/// One of the five meal categories of a day plan.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
    clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum MealSlot {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
    Drink,
}

impl MealSlot {
    /// All slots in plan order.
    pub const ALL: [MealSlot; 5] = [
        MealSlot::Breakfast,
        MealSlot::Lunch,
        MealSlot::Dinner,
        MealSlot::Snack,
        MealSlot::Drink,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            MealSlot::Breakfast => "breakfast",
            MealSlot::Lunch => "lunch",
            MealSlot::Dinner => "dinner",
            MealSlot::Snack => "snack",
            MealSlot::Drink => "drink",
        }
    }
}

impl fmt::Display for MealSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A catalog entry with nutrition facts and a price per serving.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodItem {
    pub name: String,

    /// Serving description, e.g. "1 cup (200g)".
    #[serde(rename = "quantity", default)]
    pub quantity_label: String,

    pub calories: f64,

    #[serde(rename = "protein")]
    pub protein_g: f64,

    #[serde(rename = "carbs")]
    pub carbs_g: f64,

    #[serde(rename = "fats")]
    pub fats_g: f64,

    #[serde(rename = "fiber")]
    pub fiber_g: f64,

    pub price: f64,

    #[serde(rename = "type")]
    pub diet_type: DietType,

    #[serde(rename = "recipe", default)]
    pub recipe_text: String,
}

impl FoodItem {
    /// All numeric fields must be finite and non-negative.
    pub fn is_valid(&self) -> bool {
        [
            self.calories,
            self.protein_g,
            self.carbs_g,
            self.fats_g,
            self.fiber_g,
            self.price,
        ]
        .iter()
        .all(|v| v.is_finite() && *v >= 0.0)
    }

    #[inline]
    pub fn is_veg(&self) -> bool {
        self.diet_type == DietType::Veg
    }

    /// Debug string for logging.
    pub fn debug_string(&self) -> String {
        format!(
            "{}: {} cal, P:{} C:{} F:{} Fi:{}, price:{} ({})",
            self.name,
            self.calories,
            self.protein_g,
            self.carbs_g,
            self.fats_g,
            self.fiber_g,
            self.price,
            self.diet_type.label()
        )
    }
}

/// Read-only candidate foods per meal slot.
///
/// Loaded once and shared by reference; nothing mutates it after
/// construction. A slot missing from the source data reads as empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FoodCatalog {
    slots: BTreeMap<MealSlot, Vec<FoodItem>>,
}

impl FoodCatalog {
    pub fn new(slots: BTreeMap<MealSlot, Vec<FoodItem>>) -> Self {
        Self { slots }
    }

    /// Items for a slot, in catalog order.
    pub fn items(&self, slot: MealSlot) -> &[FoodItem] {
        self.slots.get(&slot).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Iterate every item with its slot.
    pub fn iter(&self) -> impl Iterator<Item = (MealSlot, &FoodItem)> {
        self.slots
            .iter()
            .flat_map(|(slot, items)| items.iter().map(move |item| (*slot, item)))
    }

    /// Find an item by name (case-insensitive).
    pub fn find(&self, name: &str) -> Option<(MealSlot, &FoodItem)> {
        let wanted = name.trim().to_lowercase();
        self.iter()
            .find(|(_, item)| item.name.to_lowercase() == wanted)
    }

    /// Total number of items across all slots.
    pub fn len(&self) -> usize {
        self.slots.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl FromIterator<(MealSlot, FoodItem)> for FoodCatalog {
    fn from_iter<I: IntoIterator<Item = (MealSlot, FoodItem)>>(iter: I) -> Self {
        let mut slots: BTreeMap<MealSlot, Vec<FoodItem>> = BTreeMap::new();
        for (slot, item) in iter {
            slots.entry(slot).or_default().push(item);
        }
        Self { slots }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_item() -> FoodItem {
        FoodItem {
            name: "Oats Poha".to_string(),
            quantity_label: "1 cup (180g)".to_string(),
            calories: 200.0,
            protein_g: 8.0,
            carbs_g: 36.0,
            fats_g: 4.0,
            fiber_g: 6.0,
            price: 30.0,
            diet_type: DietType::Veg,
            recipe_text: String::new(),
        }
    }

    #[test]
    fn test_is_valid() {
        let item = sample_item();
        assert!(item.is_valid());

        let mut invalid = sample_item();
        invalid.price = -1.0;
        assert!(!invalid.is_valid());

        let mut nan = sample_item();
        nan.calories = f64::NAN;
        assert!(!nan.is_valid());
    }

    #[test]
    fn test_deserialize_catalog_field_names() {
        let json = r#"{
            "snack": [
                {"name": "Roasted Chana", "quantity": "50g", "calories": 180, "protein": 10,
                 "carbs": 27, "fats": 3, "fiber": 8, "price": 20, "type": "veg"}
            ],
            "dinner": [
                {"name": "Grilled Fish", "quantity": "1 plate", "calories": 350, "protein": 32,
                 "carbs": 10, "fats": 18, "fiber": 2, "price": 160, "type": "nonveg",
                 "recipe": "Grill with lemon."}
            ]
        }"#;

        let catalog: FoodCatalog = serde_json::from_str(json).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.items(MealSlot::Snack)[0].diet_type, DietType::Veg);
        assert_eq!(catalog.items(MealSlot::Snack)[0].recipe_text, "");
        assert_eq!(catalog.items(MealSlot::Dinner)[0].diet_type, DietType::NonVeg);
        assert!(catalog.items(MealSlot::Breakfast).is_empty());
    }

    #[test]
    fn test_find_case_insensitive() {
        let catalog: FoodCatalog = vec![(MealSlot::Breakfast, sample_item())]
            .into_iter()
            .collect();

        let (slot, item) = catalog.find("  OATS poha ").unwrap();
        assert_eq!(slot, MealSlot::Breakfast);
        assert_eq!(item.name, "Oats Poha");
        assert!(catalog.find("Dosa").is_none());
    }

    #[test]
    fn test_slot_order() {
        let mut sorted = MealSlot::ALL.to_vec();
        sorted.sort();
        assert_eq!(sorted, MealSlot::ALL.to_vec());
        assert_eq!(MealSlot::Drink.to_string(), "drink");
    }
}
