mod loader;
mod search;

pub use loader::{builtin_catalog, load_catalog, parse_catalog, save_catalog};
pub use search::{lookup_food, suggest_foods};
