//! Read-only views of how a wearer looks with their current clothing.
use std::collections::HashSet;

use super::types::{BodySlot, Garment, Item, ItemId, MessageKind, Wearer};

/// One visible fragment of a wearer's appearance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppearanceEntry {
    /// Bare description of a slot nothing visible covers.
    Naked { slot: BodySlot, text: String },
    /// The outermost visible garment, listed at the first slot it shows on.
    Garment {
        slot: BodySlot,
        item: ItemId,
        text: String,
    },
}

impl AppearanceEntry {
    pub fn slot(&self) -> BodySlot {
        match self {
            AppearanceEntry::Naked { slot, .. } | AppearanceEntry::Garment { slot, .. } => *slot,
        }
    }

    pub fn text(&self) -> &str {
        match self {
            AppearanceEntry::Naked { text, .. } | AppearanceEntry::Garment { text, .. } => text,
        }
    }
}

fn worn_text(item: &Item, garment: &Garment) -> String {
    let toggled = match garment.messages.get(MessageKind::WornToggled) {
        "" => None,
        text => Some(text),
    };
    let base = match (garment.is_toggled(), toggled) {
        (true, Some(text)) => text,
        _ => garment.messages.get(MessageKind::Worn),
    };
    let base = if base.is_empty() { item.name.as_str() } else { base };
    match garment.style() {
        Some(style) => format!("{} {}", base, style),
        None => base.to_string(),
    }
}

/// Walk the slots in display order and report what shows on each.
///
/// A slot shows its outermost garment that no other garment covers, even
/// when the covering garment sits on a different slot. Each
/// garment is reported once even when it spans several slots. See-through
/// garments let the slot's naked text show as well. A slot whose occupants
/// are all covered shows nothing.
pub fn describe_worn_state(wearer: &Wearer) -> Vec<AppearanceEntry> {
    let mut entries = Vec::new();
    let mut shown: HashSet<&ItemId> = HashSet::new();

    for slot in BodySlot::ALL {
        let naked = wearer.naked(slot);
        let stack = wearer.slot(slot);
        if stack.is_empty() {
            if !naked.is_empty() {
                entries.push(AppearanceEntry::Naked {
                    slot,
                    text: naked.to_string(),
                });
            }
            continue;
        }

        let visible = stack.iter().rev().find_map(|id| {
            let item = wearer.item(id)?;
            let garment = item.garment.as_ref()?;
            garment.covered_by().is_none().then_some((item, garment))
        });
        let Some((item, garment)) = visible else {
            continue;
        };

        if shown.insert(&item.id) {
            entries.push(AppearanceEntry::Garment {
                slot,
                item: item.id.clone(),
                text: worn_text(item, garment),
            });
        }
        if garment.seethru && !naked.is_empty() {
            entries.push(AppearanceEntry::Naked {
                slot,
                text: naked.to_string(),
            });
        }
    }
    entries
}

/// Flatten [`describe_worn_state`] into prose. Head, left shoulder and groin
/// open a new paragraph when they have naked text of their own.
pub fn render_appearance(wearer: &Wearer) -> String {
    let entries = describe_worn_state(wearer);
    let mut out = String::new();

    for slot in BodySlot::ALL {
        if slot.starts_paragraph() && !wearer.naked(slot).is_empty() && !out.is_empty() {
            let keep = out.trim_end().len();
            out.truncate(keep);
            out.push_str("\n\n");
        }
        for entry in entries.iter().filter(|entry| entry.slot() == slot) {
            if !out.is_empty() && !out.ends_with('\n') {
                out.push(' ');
            }
            out.push_str(entry.text());
        }
    }

    let keep = out.trim_end().len();
    out.truncate(keep);
    out
}
