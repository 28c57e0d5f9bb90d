//! Outbound share text. The layout is a contract for consumers parsing the
//! shared list; change it deliberately.

use crate::models::Preset;
use crate::selection::{SelectionStore, format_quantity};

/// Grouped-by-category plain text: a header naming the preset, one block per
/// category that has selected items, one `- name: quantity unit` line per
/// item, and a trailing distinct-item count.
pub fn share_text(preset: &Preset, selection: &SelectionStore) -> String {
    let mut out = String::new();
    out.push_str(&preset.name);
    out.push('\n');

    for category in &preset.categories {
        let selected: Vec<_> = category
            .items
            .iter()
            .filter_map(|item| selection.get(&item.id))
            .collect();
        if selected.is_empty() {
            continue;
        }
        out.push('\n');
        out.push_str(&category.name);
        out.push_str(":\n");
        for entry in selected {
            out.push_str(&format!(
                "- {}: {} {}\n",
                entry.name,
                format_quantity(entry.quantity),
                entry.unit
            ));
        }
    }

    out.push('\n');
    out.push_str(&format!("Total: {} item(s)\n", selection.len()));
    out
}
