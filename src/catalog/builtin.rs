//! Bundled default catalog. The host may supply its own default preset; this
//! one backs the demo binary and tests.

use once_cell::sync::Lazy;

use crate::models::{Category, DEFAULT_PRESET_ID, Item, Preset};

static BUILTIN: Lazy<Preset> = Lazy::new(|| Preset {
    id: DEFAULT_PRESET_ID.to_string(),
    name: "Groceries".to_string(),
    categories: vec![
        Category {
            id: "produce".to_string(),
            name: "Produce".to_string(),
            items: vec![
                item("apples", "Apples", "kg", 0.5),
                item("bananas", "Bananas", "kg", 0.5),
                item("tomatoes", "Tomatoes", "kg", 0.25),
            ],
        },
        Category {
            id: "dairy".to_string(),
            name: "Dairy".to_string(),
            items: vec![
                item("milk", "Milk", "liter", 1.0),
                item("eggs", "Eggs", "pcs", 6.0),
                item("butter", "Butter", "pack", 1.0),
            ],
        },
        Category {
            id: "pantry".to_string(),
            name: "Pantry".to_string(),
            items: vec![
                item("rice", "Rice", "kg", 1.0),
                item("flour", "Flour", "kg", 0.5),
                item("olive-oil", "Olive Oil", "liter", 0.25),
            ],
        },
    ],
    is_default: true,
});

fn item(id: &str, name: &str, unit: &str, increment_step: f64) -> Item {
    Item {
        id: id.to_string(),
        name: name.to_string(),
        unit: unit.to_string(),
        increment_step,
    }
}

/// A fresh copy of the bundled default preset.
pub fn default_preset() -> Preset {
    BUILTIN.clone()
}
