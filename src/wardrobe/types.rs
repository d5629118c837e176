use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::fmt;
use std::str::FromStr;

use super::errors::ClothingError;

pub const WARDROBE_SCHEMA_VERSION: u8 = 1;

/// Anatomical locations a garment can occupy.
///
/// Declaration order is the canonical display order used when rendering a
/// wearer's appearance, so `Ord` follows it as well.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "kebab-case")]
pub enum BodySlot {
    Head,
    LeftEye,
    RightEye,
    Face,
    Neck,
    LeftShoulder,
    RightShoulder,
    Chest,
    Back,
    LeftUpperarm,
    RightUpperarm,
    LeftForearm,
    RightForearm,
    LeftHand,
    RightHand,
    Abdomen,
    Groin,
    Butt,
    LeftThigh,
    RightThigh,
    LeftCalf,
    RightCalf,
    LeftFoot,
    RightFoot,
}

impl BodySlot {
    pub const ALL: [BodySlot; 24] = [
        BodySlot::Head,
        BodySlot::LeftEye,
        BodySlot::RightEye,
        BodySlot::Face,
        BodySlot::Neck,
        BodySlot::LeftShoulder,
        BodySlot::RightShoulder,
        BodySlot::Chest,
        BodySlot::Back,
        BodySlot::LeftUpperarm,
        BodySlot::RightUpperarm,
        BodySlot::LeftForearm,
        BodySlot::RightForearm,
        BodySlot::LeftHand,
        BodySlot::RightHand,
        BodySlot::Abdomen,
        BodySlot::Groin,
        BodySlot::Butt,
        BodySlot::LeftThigh,
        BodySlot::RightThigh,
        BodySlot::LeftCalf,
        BodySlot::RightCalf,
        BodySlot::LeftFoot,
        BodySlot::RightFoot,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            BodySlot::Head => "head",
            BodySlot::LeftEye => "left-eye",
            BodySlot::RightEye => "right-eye",
            BodySlot::Face => "face",
            BodySlot::Neck => "neck",
            BodySlot::LeftShoulder => "left-shoulder",
            BodySlot::RightShoulder => "right-shoulder",
            BodySlot::Chest => "chest",
            BodySlot::Back => "back",
            BodySlot::LeftUpperarm => "left-upperarm",
            BodySlot::RightUpperarm => "right-upperarm",
            BodySlot::LeftForearm => "left-forearm",
            BodySlot::RightForearm => "right-forearm",
            BodySlot::LeftHand => "left-hand",
            BodySlot::RightHand => "right-hand",
            BodySlot::Abdomen => "abdomen",
            BodySlot::Groin => "groin",
            BodySlot::Butt => "butt",
            BodySlot::LeftThigh => "left-thigh",
            BodySlot::RightThigh => "right-thigh",
            BodySlot::LeftCalf => "left-calf",
            BodySlot::RightCalf => "right-calf",
            BodySlot::LeftFoot => "left-foot",
            BodySlot::RightFoot => "right-foot",
        }
    }

    /// Slots that open a new paragraph in a rendered appearance.
    pub fn starts_paragraph(self) -> bool {
        matches!(self, BodySlot::Head | BodySlot::LeftShoulder | BodySlot::Groin)
    }
}

impl fmt::Display for BodySlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BodySlot {
    type Err = ClothingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        BodySlot::ALL
            .iter()
            .copied()
            .find(|slot| slot.as_str() == wanted)
            .ok_or_else(|| ClothingError::UnknownSlot(s.trim().to_string()))
    }
}

/// Category tag used by quantity limits and auto-cover rules.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ClothingType {
    Hat,
    Gloves,
    Socks,
    Shoes,
    Jewelry,
    Top,
    Undershirt,
    Bottom,
    Underpants,
    Fullbody,
    Outerwear,
    Other(String),
}

impl ClothingType {
    pub fn as_str(&self) -> &str {
        match self {
            ClothingType::Hat => "hat",
            ClothingType::Gloves => "gloves",
            ClothingType::Socks => "socks",
            ClothingType::Shoes => "shoes",
            ClothingType::Jewelry => "jewelry",
            ClothingType::Top => "top",
            ClothingType::Undershirt => "undershirt",
            ClothingType::Bottom => "bottom",
            ClothingType::Underpants => "underpants",
            ClothingType::Fullbody => "fullbody",
            ClothingType::Outerwear => "outerwear",
            ClothingType::Other(tag) => tag,
        }
    }
}

impl From<String> for ClothingType {
    fn from(tag: String) -> Self {
        let tag = tag.trim().to_lowercase();
        match tag.as_str() {
            "hat" => ClothingType::Hat,
            "gloves" => ClothingType::Gloves,
            "socks" => ClothingType::Socks,
            "shoes" => ClothingType::Shoes,
            "jewelry" => ClothingType::Jewelry,
            "top" => ClothingType::Top,
            "undershirt" => ClothingType::Undershirt,
            "bottom" => ClothingType::Bottom,
            "underpants" => ClothingType::Underpants,
            "fullbody" => ClothingType::Fullbody,
            "outerwear" => ClothingType::Outerwear,
            _ => ClothingType::Other(tag),
        }
    }
}

impl From<&str> for ClothingType {
    fn from(tag: &str) -> Self {
        ClothingType::from(tag.to_string())
    }
}

impl From<ClothingType> for String {
    fn from(kind: ClothingType) -> Self {
        kind.as_str().to_string()
    }
}

impl fmt::Display for ClothingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Named message slots a garment carries for wear/remove/toggle events and
/// for its worn appearance. The `o` variants are what onlookers see.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum MessageKind {
    Wear,
    OWear,
    Remove,
    ORemove,
    Toggle1,
    OToggle1,
    Toggle2,
    OToggle2,
    Worn,
    WornToggled,
    Tease,
    OTease,
    DTease,
}

impl MessageKind {
    pub const ALL: [MessageKind; 13] = [
        MessageKind::Wear,
        MessageKind::OWear,
        MessageKind::Remove,
        MessageKind::ORemove,
        MessageKind::Toggle1,
        MessageKind::OToggle1,
        MessageKind::Toggle2,
        MessageKind::OToggle2,
        MessageKind::Worn,
        MessageKind::WornToggled,
        MessageKind::Tease,
        MessageKind::OTease,
        MessageKind::DTease,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            MessageKind::Wear => "wear",
            MessageKind::OWear => "owear",
            MessageKind::Remove => "remove",
            MessageKind::ORemove => "oremove",
            MessageKind::Toggle1 => "toggle1",
            MessageKind::OToggle1 => "otoggle1",
            MessageKind::Toggle2 => "toggle2",
            MessageKind::OToggle2 => "otoggle2",
            MessageKind::Worn => "worn",
            MessageKind::WornToggled => "worntoggled",
            MessageKind::Tease => "tease",
            MessageKind::OTease => "otease",
            MessageKind::DTease => "dtease",
        }
    }
}

impl fmt::Display for MessageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MessageKind {
    type Err = ClothingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().trim_start_matches('@').to_lowercase();
        MessageKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.as_str() == wanted)
            .ok_or_else(|| ClothingError::UnknownMessage(s.trim().to_string()))
    }
}

/// Display text keyed by [`MessageKind`]. Missing keys read as empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct GarmentMessages(BTreeMap<MessageKind, String>);

impl GarmentMessages {
    pub fn get(&self, kind: MessageKind) -> &str {
        self.0.get(&kind).map(String::as_str).unwrap_or("")
    }

    pub fn set(&mut self, kind: MessageKind, text: &str) {
        let text = text.trim();
        if text.is_empty() {
            self.0.remove(&kind);
        } else {
            self.0.insert(kind, text.to_string());
        }
    }

    /// Every message kind with its current text, in [`MessageKind::ALL`] order.
    pub fn entries(&self) -> Vec<(MessageKind, &str)> {
        MessageKind::ALL
            .iter()
            .map(|kind| (*kind, self.get(*kind)))
            .collect()
    }
}

/// Stable identifier of an item inside a wearer's item table.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    pub fn new(id: &str) -> Self {
        Self(id.trim().to_string())
    }

    /// Fresh random id for items created without one.
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ItemId {
    fn from(id: &str) -> Self {
        ItemId::new(id)
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum WornState {
    NotWorn,
    Worn,
    WornToggled,
}

/// The clothing facet of an item: what it covers and how it is being worn.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Garment {
    #[serde(default)]
    pub(crate) coverage: BTreeSet<BodySlot>,
    #[serde(default)]
    pub(crate) toggle_coverage: BTreeSet<BodySlot>,
    #[serde(default)]
    pub clothing_type: Option<ClothingType>,
    #[serde(default)]
    pub messages: GarmentMessages,
    /// Naked descriptions stay visible through this garment.
    #[serde(default)]
    pub seethru: bool,
    #[serde(default)]
    pub(crate) worn: bool,
    #[serde(default)]
    pub(crate) toggled: bool,
    #[serde(default)]
    pub(crate) style: Option<String>,
    #[serde(default)]
    pub(crate) covered_by: Option<ItemId>,
    /// Wear sequence number; orders this garment inside every slot stack.
    #[serde(default)]
    pub(crate) layer: u64,
}

impl Garment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_coverage(mut self, slots: &[BodySlot]) -> Self {
        self.coverage.extend(slots.iter().copied());
        self
    }

    pub fn with_toggle_coverage(mut self, slots: &[BodySlot]) -> Self {
        self.toggle_coverage.extend(slots.iter().copied());
        self
    }

    pub fn with_type(mut self, kind: impl Into<ClothingType>) -> Self {
        self.clothing_type = Some(kind.into());
        self
    }

    pub fn with_message(mut self, kind: MessageKind, text: &str) -> Self {
        self.messages.set(kind, text);
        self
    }

    pub fn see_through(mut self) -> Self {
        self.seethru = true;
        self
    }

    pub fn worn_state(&self) -> WornState {
        match (self.worn, self.toggled) {
            (false, _) => WornState::NotWorn,
            (true, false) => WornState::Worn,
            (true, true) => WornState::WornToggled,
        }
    }

    pub fn is_worn(&self) -> bool {
        self.worn
    }

    /// Slots covered while worn normally. Edit through the tailoring helpers.
    pub fn coverage(&self) -> &BTreeSet<BodySlot> {
        &self.coverage
    }

    pub fn toggle_coverage(&self) -> &BTreeSet<BodySlot> {
        &self.toggle_coverage
    }

    pub fn is_toggled(&self) -> bool {
        self.toggled
    }

    pub fn style(&self) -> Option<&str> {
        self.style.as_deref()
    }

    pub fn covered_by(&self) -> Option<&ItemId> {
        self.covered_by.as_ref()
    }

    /// Slots occupied while worn in the current toggle state.
    pub fn active_coverage(&self) -> &BTreeSet<BodySlot> {
        if self.toggled {
            &self.toggle_coverage
        } else {
            &self.coverage
        }
    }

    pub(crate) fn is_of_type(&self, kind: &ClothingType) -> bool {
        self.clothing_type.as_ref() == Some(kind)
    }
}

/// Anything a wearer can carry. Only items with a [`Garment`] can be worn.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub garment: Option<Garment>,
}

impl Item {
    pub fn new(id: &str, name: &str) -> Self {
        Self {
            id: ItemId::new(id),
            name: name.to_string(),
            description: String::new(),
            garment: None,
        }
    }

    pub fn clothing(id: &str, name: &str, garment: Garment) -> Self {
        Self {
            garment: Some(garment),
            ..Self::new(id, name)
        }
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.description = description.to_string();
        self
    }

    pub fn is_worn(&self) -> bool {
        self.garment.as_ref().map(Garment::is_worn).unwrap_or(false)
    }
}

/// A character that carries items and wears garments.
///
/// `worn_by_slot` always holds an entry for every [`BodySlot`]; the last id
/// of a slot's sequence is the outermost layer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Wearer {
    pub name: String,
    pub nakeds: BTreeMap<BodySlot, String>,
    pub(crate) items: Vec<Item>,
    pub(crate) worn_by_slot: BTreeMap<BodySlot, Vec<ItemId>>,
    pub(crate) next_layer: u64,
    pub schema_version: u8,
}

impl Wearer {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            nakeds: BodySlot::ALL.iter().map(|slot| (*slot, String::new())).collect(),
            items: Vec::new(),
            worn_by_slot: BodySlot::ALL.iter().map(|slot| (*slot, Vec::new())).collect(),
            next_layer: 1,
            schema_version: WARDROBE_SCHEMA_VERSION,
        }
    }

    pub fn with_naked(mut self, slot: BodySlot, text: &str) -> Self {
        self.set_naked(slot, text);
        self
    }

    pub fn set_naked(&mut self, slot: BodySlot, text: &str) {
        self.nakeds.insert(slot, text.trim().to_string());
    }

    pub fn naked(&self, slot: BodySlot) -> &str {
        self.nakeds.get(&slot).map(String::as_str).unwrap_or("")
    }

    /// Items in acquisition order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn item(&self, id: &ItemId) -> Option<&Item> {
        self.items.iter().find(|item| &item.id == id)
    }

    pub fn carries(&self, id: &ItemId) -> bool {
        self.item(id).is_some()
    }

    /// Garment ids occupying `slot`, innermost first.
    pub fn slot(&self, slot: BodySlot) -> &[ItemId] {
        self.worn_by_slot
            .get(&slot)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn worn_items(&self) -> impl Iterator<Item = &Item> {
        self.items.iter().filter(|item| item.is_worn())
    }

    pub fn worn_count(&self) -> usize {
        self.worn_items().count()
    }

    /// Name for messages; falls back to the raw id for dangling references.
    pub fn item_name(&self, id: &ItemId) -> String {
        self.item(id)
            .map(|item| item.name.clone())
            .unwrap_or_else(|| id.to_string())
    }

    pub(crate) fn item_mut(&mut self, id: &ItemId) -> Option<&mut Item> {
        self.items.iter_mut().find(|item| &item.id == id)
    }

    pub(crate) fn take_item(&mut self, id: &ItemId) -> Option<Item> {
        let index = self.items.iter().position(|item| &item.id == id)?;
        Some(self.items.remove(index))
    }

    pub(crate) fn allocate_layer(&mut self) -> u64 {
        let layer = self.next_layer;
        self.next_layer += 1;
        layer
    }

    fn layer_of(&self, id: &ItemId) -> u64 {
        self.item(id)
            .and_then(|item| item.garment.as_ref())
            .map(|garment| garment.layer)
            .unwrap_or(0)
    }

    /// Place `id` in the slot stack after every garment worn before it.
    /// A slot never holds the same garment twice.
    pub(crate) fn insert_layered(&mut self, slot: BodySlot, id: &ItemId, layer: u64) {
        if self.slot(slot).contains(id) {
            return;
        }
        let position = {
            let stack = self.slot(slot);
            stack
                .iter()
                .position(|other| self.layer_of(other) > layer)
                .unwrap_or(stack.len())
        };
        self.worn_by_slot
            .entry(slot)
            .or_default()
            .insert(position, id.clone());
    }

    pub(crate) fn withdraw_from_slot(&mut self, slot: BodySlot, id: &ItemId) {
        if let Some(stack) = self.worn_by_slot.get_mut(&slot) {
            stack.retain(|other| other != id);
        }
    }

    pub(crate) fn withdraw_everywhere(&mut self, id: &ItemId) {
        for stack in self.worn_by_slot.values_mut() {
            stack.retain(|other| other != id);
        }
    }
}

/// Limits and cover rules applied by the coverage engine.
///
/// Zero for `wear_style_max_length` or `overall_limit` means unlimited.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClothingRules {
    #[serde(default = "default_wear_style_max_length")]
    pub wear_style_max_length: usize,
    #[serde(default = "default_overall_limit")]
    pub overall_limit: usize,
    /// Re-wearing a worn garment with a new style only changes the style.
    #[serde(default = "default_allow_restyle")]
    pub allow_restyle: bool,
    #[serde(default = "default_cant_cover_with")]
    pub cant_cover_with: Vec<ClothingType>,
    #[serde(default = "default_type_limits")]
    pub type_limits: HashMap<ClothingType, usize>,
    #[serde(default = "default_autocover")]
    pub autocover: HashMap<ClothingType, Vec<ClothingType>>,
}

fn default_wear_style_max_length() -> usize {
    50
}

fn default_overall_limit() -> usize {
    20
}

fn default_type_limits() -> HashMap<ClothingType, usize> {
    [
        (ClothingType::Hat, 1),
        (ClothingType::Gloves, 1),
        (ClothingType::Socks, 1),
        (ClothingType::Shoes, 1),
    ]
    .into_iter()
    .collect()
}

fn default_cant_cover_with() -> Vec<ClothingType> {
    vec![ClothingType::Jewelry]
}

fn default_autocover() -> HashMap<ClothingType, Vec<ClothingType>> {
    [
        (ClothingType::Top, vec![ClothingType::Undershirt]),
        (ClothingType::Bottom, vec![ClothingType::Underpants]),
        (
            ClothingType::Fullbody,
            vec![ClothingType::Undershirt, ClothingType::Underpants],
        ),
        (ClothingType::Shoes, vec![ClothingType::Socks]),
    ]
    .into_iter()
    .collect()
}

fn default_allow_restyle() -> bool {
    true
}

impl Default for ClothingRules {
    fn default() -> Self {
        Self {
            wear_style_max_length: default_wear_style_max_length(),
            overall_limit: default_overall_limit(),
            allow_restyle: default_allow_restyle(),
            cant_cover_with: default_cant_cover_with(),
            type_limits: default_type_limits(),
            autocover: default_autocover(),
        }
    }
}

impl ClothingRules {
    /// Rules with every limit lifted and no cover tables.
    pub fn unrestricted() -> Self {
        Self {
            wear_style_max_length: 0,
            overall_limit: 0,
            allow_restyle: true,
            cant_cover_with: Vec::new(),
            type_limits: HashMap::new(),
            autocover: HashMap::new(),
        }
    }

    pub fn style_limit(&self) -> Option<usize> {
        (self.wear_style_max_length > 0).then_some(self.wear_style_max_length)
    }

    pub fn overall_limit(&self) -> Option<usize> {
        (self.overall_limit > 0).then_some(self.overall_limit)
    }

    pub fn type_limit(&self, kind: &ClothingType) -> Option<usize> {
        self.type_limits.get(kind).copied()
    }

    pub fn can_cover_with(&self, kind: Option<&ClothingType>) -> bool {
        kind.map(|kind| !self.cant_cover_with.contains(kind))
            .unwrap_or(true)
    }

    pub fn autocovered_by(&self, kind: Option<&ClothingType>) -> &[ClothingType] {
        kind.and_then(|kind| self.autocover.get(kind))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

/// What an engine call produced, for the command layer to relay.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClothingOutcome {
    /// Shown to the acting wearer.
    pub actor: String,
    /// Shown to everyone else in the room.
    pub observer: String,
    /// Shown to the receiving character of a give.
    pub recipient: Option<String>,
    /// Garments newly covered or revealed by the call.
    pub affected: Vec<String>,
}
