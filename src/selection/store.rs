use std::collections::BTreeMap;

use tracing::debug;

use crate::models::{Item, ItemId, SelectedEntry};

/// In-memory tally of selected items. Pure arithmetic, no I/O, never fails;
/// item metadata is validated by the catalog that supplies it.
///
/// Invariant: an entry exists exactly as long as its quantity is positive.
/// A decrement that lands at or below zero removes the entry outright.
#[derive(Debug, Default)]
pub struct SelectionStore {
    entries: BTreeMap<ItemId, SelectedEntry>,
}

/// Snapshot handed to the rendering/sharing layer.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionSummary {
    pub distinct: usize,
    pub preview: Vec<String>,
}

impl SelectionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `step` to the item's quantity, creating the entry on first
    /// selection. The entry captures the item's own increment step at
    /// creation; later catalog changes do not reach it.
    pub fn increment(&mut self, item: &Item, step: f64) {
        let entry = self
            .entries
            .entry(item.id.clone())
            .or_insert_with(|| SelectedEntry {
                name: item.name.clone(),
                unit: item.unit.clone(),
                increment_step: item.increment_step,
                quantity: 0.0,
            });
        entry.quantity = apply_step(entry.quantity, step);
        debug!(item = %item.id, quantity = entry.quantity, "incremented selection");
    }

    /// Subtract the entry's recorded step. Removes the entry when the result
    /// is zero or below. No-op for items that were never selected.
    pub fn decrement(&mut self, item_id: &str) {
        let Some(entry) = self.entries.get_mut(item_id) else {
            return;
        };
        let next = apply_step(entry.quantity, -entry.increment_step);
        if next <= 0.0 {
            self.entries.remove(item_id);
            debug!(item = %item_id, "selection entry removed");
        } else {
            entry.quantity = next;
            debug!(item = %item_id, quantity = next, "decremented selection");
        }
    }

    /// Drop every entry. Called on each preset activation.
    pub fn reset(&mut self) {
        self.entries.clear();
    }

    pub fn quantity(&self, item_id: &str) -> Option<f64> {
        self.entries.get(item_id).map(|entry| entry.quantity)
    }

    pub fn get(&self, item_id: &str) -> Option<&SelectedEntry> {
        self.entries.get(item_id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> impl Iterator<Item = (&ItemId, &SelectedEntry)> {
        self.entries.iter()
    }

    /// Distinct-item count plus a short preview line per entry, in map
    /// iteration order.
    pub fn summarize(&self) -> SelectionSummary {
        let preview = self
            .entries
            .values()
            .map(|entry| {
                format!(
                    "{} {}{}",
                    short_name(&entry.name),
                    format_quantity(entry.quantity),
                    unit_initial(&entry.unit)
                )
            })
            .collect();
        SelectionSummary {
            distinct: self.entries.len(),
            preview,
        }
    }
}

/// Apply a signed step to a quantity under the shared precision rule: when
/// either the step or the result carries a fractional part, round to the
/// larger fractional-digit count of step and prior quantity (at least one
/// digit); otherwise keep the result integral. Increment and decrement both
/// go through here so an inverse pair restores the prior value.
fn apply_step(quantity: f64, step: f64) -> f64 {
    let next = quantity + step;
    if fraction_digits(step) == 0 && fraction_digits(next) == 0 {
        return next;
    }
    let precision = fraction_digits(step)
        .max(fraction_digits(quantity))
        .max(1);
    round_to(next, precision)
}

/// Count of significant fractional digits in the shortest decimal rendering
/// of `value` (3 for 0.125, 1 for 2.5, 0 for 4).
fn fraction_digits(value: f64) -> u32 {
    let text = format!("{}", value);
    match text.split_once('.') {
        Some((_, frac)) => frac.trim_end_matches('0').len() as u32,
        None => 0,
    }
}

fn round_to(value: f64, digits: u32) -> f64 {
    let factor = 10f64.powi(digits as i32);
    (value * factor).round() / factor
}

/// Quantities render in shortest form: 2 rather than 2.0, 1.5 as is.
pub fn format_quantity(quantity: f64) -> String {
    format!("{}", quantity)
}

fn short_name(name: &str) -> &str {
    name.split_whitespace().next().unwrap_or(name)
}

fn unit_initial(unit: &str) -> String {
    unit.chars().next().map(String::from).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, step: f64) -> Item {
        Item {
            id: id.to_string(),
            name: format!("Item {}", id),
            unit: "kg".to_string(),
            increment_step: step,
        }
    }

    #[test]
    fn test_integer_steps_accumulate_exactly() {
        let mut store = SelectionStore::new();
        let rice = item("rice", 2.0);
        for _ in 0..25 {
            store.increment(&rice, 2.0);
        }
        assert_eq!(store.quantity("rice"), Some(50.0));
    }

    #[test]
    fn test_fractional_step_round_trips_to_removal() {
        let mut store = SelectionStore::new();
        let apples = item("apples", 0.5);
        for _ in 0..4 {
            store.increment(&apples, 0.5);
        }
        assert_eq!(store.quantity("apples"), Some(2.0));
        for _ in 0..4 {
            store.decrement("apples");
        }
        assert!(store.get("apples").is_none());
    }

    #[test]
    fn test_half_step_scenario() {
        let mut store = SelectionStore::new();
        let apples = item("apples", 0.5);
        store.increment(&apples, 0.5);
        store.increment(&apples, 0.5);
        store.increment(&apples, 0.5);
        assert_eq!(store.quantity("apples"), Some(1.5));

        store.decrement("apples");
        assert_eq!(store.quantity("apples"), Some(1.0));

        store.decrement("apples");
        assert_eq!(store.quantity("apples"), Some(0.5));
        store.decrement("apples");
        assert!(store.get("apples").is_none());
    }

    #[test]
    fn test_no_entry_ever_sits_at_zero_or_below() {
        let mut store = SelectionStore::new();
        let eggs = item("eggs", 6.0);
        store.increment(&eggs, 6.0);
        store.decrement("eggs");
        assert!(store.get("eggs").is_none());
        // Further decrements on the removed entry stay a no-op.
        store.decrement("eggs");
        assert!(store.is_empty());
    }

    #[test]
    fn test_decrement_uses_recorded_step_not_current_catalog() {
        let mut store = SelectionStore::new();
        let mut flour = item("flour", 0.25);
        store.increment(&flour, 0.25);
        store.increment(&flour, 0.25);
        assert_eq!(store.quantity("flour"), Some(0.5));

        // A redefined catalog step must not affect the live entry.
        flour.increment_step = 1.0;
        store.decrement("flour");
        assert_eq!(store.quantity("flour"), Some(0.25));
    }

    #[test]
    fn test_tenth_steps_stay_at_one_digit() {
        let mut store = SelectionStore::new();
        let milk = item("milk", 0.1);
        for _ in 0..3 {
            store.increment(&milk, 0.1);
        }
        // 0.1 + 0.1 + 0.1 would drift to 0.30000000000000004 unrounded.
        assert_eq!(store.quantity("milk"), Some(0.3));
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut store = SelectionStore::new();
        store.increment(&item("a", 1.0), 1.0);
        store.increment(&item("b", 0.5), 0.5);
        assert_eq!(store.len(), 2);
        store.reset();
        assert!(store.is_empty());
    }

    #[test]
    fn test_summarize_preview_format() {
        let mut store = SelectionStore::new();
        store.increment(
            &Item {
                id: "apples".to_string(),
                name: "Green Apples".to_string(),
                unit: "kg".to_string(),
                increment_step: 0.5,
            },
            0.5,
        );
        store.increment(
            &Item {
                id: "milk".to_string(),
                name: "Milk".to_string(),
                unit: "liter".to_string(),
                increment_step: 1.0,
            },
            1.0,
        );

        let summary = store.summarize();
        assert_eq!(summary.distinct, 2);
        assert_eq!(summary.preview, vec!["Green 0.5k", "Milk 1l"]);
    }

    #[test]
    fn test_fraction_digits() {
        assert_eq!(fraction_digits(4.0), 0);
        assert_eq!(fraction_digits(2.5), 1);
        assert_eq!(fraction_digits(0.125), 3);
        assert_eq!(fraction_digits(-0.5), 1);
    }
}
