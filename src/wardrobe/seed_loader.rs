//! Seed data loaders for wardrobes
//!
//! A wardrobe seed describes one wearer: naked descriptions, carried items
//! and the wear/cover actions to replay on startup. Seeds use plain string
//! keys so builders can edit them by hand; every key is validated here and
//! the replay goes through the coverage engine, so a loaded wearer always
//! satisfies the engine's invariants.

use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::fs;
use std::path::Path;

use super::engine::{cover, pick_up, toggle, wear};
use super::errors::WardrobeError;
use super::types::{BodySlot, ClothingRules, Garment, Item, ItemId, MessageKind, Wearer};

/// Load a wearer from a wardrobe seed file such as data/seeds/wardrobe.json
pub fn load_wardrobe_from_json<P: AsRef<Path>>(
    path: P,
    rules: &ClothingRules,
) -> Result<Wearer, WardrobeError> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;
    let wearer = wardrobe_from_str(&contents, rules)?;
    info!(
        "Loaded wardrobe for {} from {} ({} items, {} worn)",
        wearer.name,
        path.display(),
        wearer.items().len(),
        wearer.worn_count()
    );
    Ok(wearer)
}

/// Build a wearer from wardrobe seed JSON text
pub fn wardrobe_from_str(json: &str, rules: &ClothingRules) -> Result<Wearer, WardrobeError> {
    let seed: WardrobeSeed = serde_json::from_str(json)?;
    let mut wearer = Wearer::new(&seed.wearer);

    for (slot, text) in &seed.nakeds {
        wearer.set_naked(slot.parse::<BodySlot>()?, text);
    }

    let mut seen = HashSet::new();
    for item_seed in seed.items {
        let item = item_seed.into_item()?;
        if !seen.insert(item.id.clone()) {
            return Err(WardrobeError::DuplicateItem(item.id.to_string()));
        }
        pick_up(&mut wearer, item)?;
    }

    for step in &seed.toggled {
        toggle(&mut wearer, &ItemId::new(step))?;
    }
    for step in &seed.wear {
        let outcome = wear(&mut wearer, &ItemId::new(&step.item), step.style.as_deref(), rules)?;
        debug!("seed replay: {}", outcome.observer);
    }
    for step in &seed.cover {
        let outcome = cover(
            &mut wearer,
            &ItemId::new(&step.target),
            &ItemId::new(&step.with),
            rules,
        )?;
        debug!("seed replay: {}", outcome.observer);
    }

    Ok(wearer)
}

// ============================================================================
// Seed Data Structures (JSON format)
// ============================================================================

#[derive(Debug, Serialize, Deserialize)]
struct WardrobeSeed {
    wearer: String,
    #[serde(default)]
    nakeds: BTreeMap<String, String>,
    #[serde(default)]
    items: Vec<ItemSeed>,
    /// Item ids toggled before anything is worn.
    #[serde(default)]
    toggled: Vec<String>,
    #[serde(default)]
    wear: Vec<WearSeed>,
    #[serde(default)]
    cover: Vec<CoverSeed>,
}

#[derive(Debug, Serialize, Deserialize)]
struct ItemSeed {
    #[serde(default)]
    id: Option<String>,
    name: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    garment: Option<GarmentSeed>,
}

#[derive(Debug, Serialize, Deserialize)]
struct GarmentSeed {
    #[serde(default)]
    coverage: Vec<String>,
    #[serde(default)]
    toggle_coverage: Vec<String>,
    #[serde(default, rename = "type")]
    clothing_type: Option<String>,
    #[serde(default)]
    messages: BTreeMap<String, String>,
    #[serde(default)]
    seethru: bool,
}

#[derive(Debug, Serialize, Deserialize)]
struct WearSeed {
    item: String,
    #[serde(default)]
    style: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
struct CoverSeed {
    target: String,
    with: String,
}

fn parse_slots(names: &[String]) -> Result<Vec<BodySlot>, WardrobeError> {
    names
        .iter()
        .map(|name| name.parse::<BodySlot>().map_err(WardrobeError::from))
        .collect()
}

impl ItemSeed {
    fn into_item(self) -> Result<Item, WardrobeError> {
        let id = match self.id.as_deref() {
            Some(id) if !id.trim().is_empty() => ItemId::new(id),
            _ => ItemId::generate(),
        };
        let garment = match self.garment {
            Some(seed) => Some(seed.into_garment()?),
            None => None,
        };
        Ok(Item {
            id,
            name: self.name,
            description: self.description,
            garment,
        })
    }
}

impl GarmentSeed {
    fn into_garment(self) -> Result<Garment, WardrobeError> {
        let mut garment = Garment::new()
            .with_coverage(&parse_slots(&self.coverage)?)
            .with_toggle_coverage(&parse_slots(&self.toggle_coverage)?);
        if let Some(kind) = self.clothing_type.as_deref() {
            garment = garment.with_type(kind);
        }
        for (key, text) in &self.messages {
            garment = garment.with_message(key.parse::<MessageKind>()?, text);
        }
        if self.seethru {
            garment = garment.see_through();
        }
        Ok(garment)
    }
}
