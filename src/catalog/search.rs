use strsim::jaro_winkler;

use crate::error::{PlannerError, Result};
use crate::models::{FoodCatalog, FoodItem, MealSlot};

/// Minimum Jaro-Winkler similarity for a suggestion.
const SUGGESTION_THRESHOLD: f64 = 0.7;

/// Maximum number of suggestions returned.
const MAX_SUGGESTIONS: usize = 5;

/// Find an item by exact (case-insensitive) name.
pub fn lookup_food<'a>(catalog: &'a FoodCatalog, name: &str) -> Result<(MealSlot, &'a FoodItem)> {
    catalog
        .find(name)
        .ok_or_else(|| PlannerError::FoodNotFound(name.to_string()))
}

/// Items whose names resemble `query`, most similar first.
pub fn suggest_foods<'a>(catalog: &'a FoodCatalog, query: &str) -> Vec<(MealSlot, &'a FoodItem)> {
    let query = query.trim().to_lowercase();

    let mut candidates: Vec<(MealSlot, &FoodItem, f64)> = catalog
        .iter()
        .map(|(slot, item)| (slot, item, jaro_winkler(&item.name.to_lowercase(), &query)))
        .filter(|(_, _, score)| *score > SUGGESTION_THRESHOLD)
        .collect();

    candidates.sort_by(|a, b| b.2.partial_cmp(&a.2).unwrap_or(std::cmp::Ordering::Equal));

    candidates
        .into_iter()
        .take(MAX_SUGGESTIONS)
        .map(|(slot, item, _)| (slot, item))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::builtin_catalog;

    #[test]
    fn test_lookup_exact() {
        let catalog = builtin_catalog().unwrap();
        let (slot, item) = lookup_food(&catalog, "ragi porridge").unwrap();
        assert_eq!(slot, MealSlot::Breakfast);
        assert_eq!(item.name, "Ragi Porridge");
    }

    #[test]
    fn test_lookup_missing() {
        let catalog = builtin_catalog().unwrap();
        assert!(matches!(
            lookup_food(&catalog, "Pizza Margherita"),
            Err(PlannerError::FoodNotFound(_))
        ));
    }

    #[test]
    fn test_suggest_close_spelling() {
        let catalog = builtin_catalog().unwrap();
        let suggestions = suggest_foods(&catalog, "Ragi Porige");
        assert!(!suggestions.is_empty());
        assert_eq!(suggestions[0].1.name, "Ragi Porridge");
    }
}
