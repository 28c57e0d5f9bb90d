//! Core data model shared by the catalog, selection, and selector modules.

/// Identifier of a preset, assigned by the sync service (or the reserved
/// default id below).
pub type PresetId = String;

/// Identifier of a catalog item within a preset.
pub type ItemId = String;

/// Reserved id of the built-in default preset. Never assigned by the sync
/// service and never present in the user cache.
pub const DEFAULT_PRESET_ID: &str = "builtin:default";

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub unit: String,
    /// Quantum by which the quantity changes per tap. Positive, may be
    /// fractional.
    pub increment_step: f64,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub items: Vec<Item>,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Preset {
    pub id: PresetId,
    pub name: String,
    /// May be empty when the sync service returns name-only summaries.
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub is_default: bool,
}

impl Preset {
    /// Look up an item definition anywhere in this preset's categories.
    pub fn find_item(&self, item_id: &str) -> Option<&Item> {
        self.categories
            .iter()
            .flat_map(|category| category.items.iter())
            .find(|item| item.id == item_id)
    }
}

// Display so a selection control can show the preset directly.
impl std::fmt::Display for Preset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_default {
            write!(f, "{} (Default)", self.name)
        } else {
            write!(f, "{}", self.name)
        }
    }
}

/// The preset the selection currently belongs to. Always resolvable against
/// the default preset or the user cache.
#[derive(Debug, Clone, PartialEq)]
pub struct ActivePreset {
    pub id: PresetId,
    pub name: String,
}

impl ActivePreset {
    pub fn is_default(&self) -> bool {
        self.id == DEFAULT_PRESET_ID
    }
}

/// Live quantity record for one selected item. The step is captured when the
/// entry is created and never changes afterwards, even if the catalog item
/// is later redefined.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectedEntry {
    pub name: String,
    pub unit: String,
    pub increment_step: f64,
    pub quantity: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preset_display_marks_default() {
        let preset = Preset {
            id: DEFAULT_PRESET_ID.to_string(),
            name: "Groceries".to_string(),
            categories: vec![],
            is_default: true,
        };
        assert_eq!(preset.to_string(), "Groceries (Default)");

        let user = Preset {
            id: "p-1".to_string(),
            name: "Weekly".to_string(),
            categories: vec![],
            is_default: false,
        };
        assert_eq!(user.to_string(), "Weekly");
    }

    #[test]
    fn test_preset_deserializes_without_categories() {
        // Name-only summaries are what the sync service returns from list
        // calls; categories and the default flag must default.
        let preset: Preset =
            serde_json::from_str(r#"{"id":"p-7","name":"Camping"}"#).expect("valid summary");
        assert_eq!(preset.id, "p-7");
        assert!(preset.categories.is_empty());
        assert!(!preset.is_default);
    }

    #[test]
    fn test_find_item_searches_all_categories() {
        let preset = Preset {
            id: "p-1".to_string(),
            name: "Weekly".to_string(),
            categories: vec![
                Category {
                    id: "produce".to_string(),
                    name: "Produce".to_string(),
                    items: vec![Item {
                        id: "apples".to_string(),
                        name: "Apples".to_string(),
                        unit: "kg".to_string(),
                        increment_step: 0.5,
                    }],
                },
                Category {
                    id: "dairy".to_string(),
                    name: "Dairy".to_string(),
                    items: vec![Item {
                        id: "milk".to_string(),
                        name: "Milk".to_string(),
                        unit: "l".to_string(),
                        increment_step: 1.0,
                    }],
                },
            ],
            is_default: false,
        };

        assert_eq!(
            preset.find_item("milk").map(|i| i.name.as_str()),
            Some("Milk")
        );
        assert!(preset.find_item("bread").is_none());
    }
}
