use std::fs;
use std::path::Path;

use tracing::{info, warn};

use crate::error::{PlannerError, Result};
use crate::models::{FoodCatalog, MealSlot};

/// Catalog shipped with the binary.
const BUILTIN_CATALOG: &str = include_str!("../../data/food_catalog.json");

/// Parse the bundled catalog.
pub fn builtin_catalog() -> Result<FoodCatalog> {
    parse_catalog(BUILTIN_CATALOG)
}

/// Load a catalog from a JSON file.
///
/// The file maps slot names to arrays of items. Invalid items (negative or
/// non-finite numbers) are skipped with a warning.
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<FoodCatalog> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let catalog = parse_catalog(&content)?;
    info!(path = %path.display(), items = catalog.len(), "loaded food catalog");
    Ok(catalog)
}

/// Parse catalog JSON, dropping invalid items.
pub fn parse_catalog(json: &str) -> Result<FoodCatalog> {
    let raw: FoodCatalog = serde_json::from_str(json)?;

    let catalog: FoodCatalog = raw
        .iter()
        .filter(|(slot, item)| {
            let valid = item.is_valid();
            if !valid {
                warn!(%slot, item = %item.debug_string(), "skipping invalid catalog item");
            }
            valid
        })
        .map(|(slot, item)| (slot, item.clone()))
        .collect();

    if catalog.is_empty() {
        return Err(PlannerError::InvalidCatalog(
            "catalog contains no valid items".to_string(),
        ));
    }

    for slot in MealSlot::ALL {
        if catalog.items(slot).is_empty() {
            warn!(%slot, "catalog has no items for slot");
        }
    }

    Ok(catalog)
}

/// Save a catalog as pretty-printed JSON.
pub fn save_catalog<P: AsRef<Path>>(path: P, catalog: &FoodCatalog) -> Result<()> {
    let json = serde_json::to_string_pretty(catalog)?;
    fs::write(path, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_builtin_catalog_covers_every_slot() {
        let catalog = builtin_catalog().unwrap();
        for slot in MealSlot::ALL {
            assert!(!catalog.items(slot).is_empty(), "no items for {}", slot);
        }
    }

    #[test]
    fn test_load_and_save_roundtrip() {
        let json = r#"{
            "breakfast": [
                {"name": "Upma", "quantity": "1 cup", "calories": 210, "protein": 7,
                 "carbs": 40, "fats": 4, "fiber": 5, "price": 25, "type": "veg"}
            ]
        }"#;

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let catalog = load_catalog(file.path()).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.items(MealSlot::Breakfast)[0].name, "Upma");

        let out_file = NamedTempFile::new().unwrap();
        save_catalog(out_file.path(), &catalog).unwrap();

        let reloaded = load_catalog(out_file.path()).unwrap();
        assert_eq!(reloaded, catalog);
    }

    #[test]
    fn test_invalid_items_are_skipped() {
        let json = r#"{
            "snack": [
                {"name": "Good", "calories": 100, "protein": 2, "carbs": 10, "fats": 1,
                 "fiber": 1, "price": 10, "type": "veg"},
                {"name": "Bad", "calories": -5, "protein": 2, "carbs": 10, "fats": 1,
                 "fiber": 1, "price": 10, "type": "veg"}
            ]
        }"#;

        let catalog = parse_catalog(json).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.items(MealSlot::Snack)[0].name, "Good");
    }

    #[test]
    fn test_empty_catalog_is_rejected() {
        assert!(matches!(
            parse_catalog("{}"),
            Err(PlannerError::InvalidCatalog(_))
        ));
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(
            load_catalog("/nonexistent/catalog.json"),
            Err(PlannerError::Io(_))
        ));
    }
}
