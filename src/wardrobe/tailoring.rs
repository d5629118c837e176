//! Builder-side edits to garments: worn/wear/toggle messages and the slot
//! sets a garment covers.
//!
//! Coverage may only change while a garment is off, otherwise the wearer's
//! slot stacks would stop matching the garment's active coverage.
use log::debug;

use super::errors::ClothingError;
use super::types::{BodySlot, Garment, ItemId, MessageKind, Wearer};
use crate::logutil::preview;

/// Which of a garment's two slot sets an edit targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoverageSet {
    Normal,
    Toggled,
}

fn tailor<'a>(wearer: &'a mut Wearer, id: &ItemId) -> Result<(String, &'a mut Garment), ClothingError> {
    let item = wearer
        .item_mut(id)
        .ok_or_else(|| ClothingError::NotInInventory(id.to_string()))?;
    let name = item.name.clone();
    match item.garment.as_mut() {
        Some(garment) => Ok((name, garment)),
        None => Err(ClothingError::NotClothing(name)),
    }
}

/// Set (or clear, with blank text) one of a garment's messages.
pub fn set_message(
    wearer: &mut Wearer,
    id: &ItemId,
    kind: MessageKind,
    text: &str,
) -> Result<String, ClothingError> {
    let (name, garment) = tailor(wearer, id)?;
    garment.messages.set(kind, text);
    debug!("{} message for {} set to {}", kind, id, preview(text));
    Ok(format!("{} message for {} set as: {}", kind, name, text.trim()))
}

/// All messages of a garment, empty ones included, in canonical order.
pub fn list_messages(wearer: &Wearer, id: &ItemId) -> Result<Vec<(MessageKind, String)>, ClothingError> {
    let item = wearer
        .item(id)
        .ok_or_else(|| ClothingError::NotInInventory(id.to_string()))?;
    let garment = item
        .garment
        .as_ref()
        .ok_or_else(|| ClothingError::NotClothing(item.name.clone()))?;
    Ok(garment
        .messages
        .entries()
        .into_iter()
        .map(|(kind, text)| (kind, text.to_string()))
        .collect())
}

fn slots_mut(garment: &mut Garment, set: CoverageSet) -> &mut std::collections::BTreeSet<BodySlot> {
    match set {
        CoverageSet::Normal => &mut garment.coverage,
        CoverageSet::Toggled => &mut garment.toggle_coverage,
    }
}

/// Add a slot to a carried garment's normal or toggled coverage.
pub fn add_coverage(
    wearer: &mut Wearer,
    id: &ItemId,
    set: CoverageSet,
    slot: BodySlot,
) -> Result<String, ClothingError> {
    let (name, garment) = tailor(wearer, id)?;
    if garment.is_worn() {
        return Err(ClothingError::TailoringWornGarment(name));
    }
    if !slots_mut(garment, set).insert(slot) {
        return Err(ClothingError::SlotAlreadyCovered {
            item: name,
            slot: slot.to_string(),
        });
    }
    debug!("{} gains {:?} coverage of {}", id, set, slot);
    Ok(match set {
        CoverageSet::Normal => format!("Added coverage {} for {}", slot, name),
        CoverageSet::Toggled => format!("Added toggle coverage {} for {}", slot, name),
    })
}

/// Remove a slot from a carried garment's normal or toggled coverage.
pub fn remove_coverage(
    wearer: &mut Wearer,
    id: &ItemId,
    set: CoverageSet,
    slot: BodySlot,
) -> Result<String, ClothingError> {
    let (name, garment) = tailor(wearer, id)?;
    if garment.is_worn() {
        return Err(ClothingError::TailoringWornGarment(name));
    }
    if !slots_mut(garment, set).remove(&slot) {
        return Err(ClothingError::SlotNotCovered {
            item: name,
            slot: slot.to_string(),
        });
    }
    debug!("{} loses {:?} coverage of {}", id, set, slot);
    Ok(match set {
        CoverageSet::Normal => format!("Removed coverage {} for {}", slot, name),
        CoverageSet::Toggled => format!("Removed toggle coverage {} for {}", slot, name),
    })
}
