//! Clothing coverage and layering for Dirge characters.
//!
//! The host game owns parsing, sessions and persistence; this module owns
//! the rules for what a wearer has on, which garment shows on each body
//! slot, and which garments hide others.

pub mod appearance;
pub mod engine;
pub mod errors;
pub mod inventory;
pub mod seed_loader;
pub mod tailoring;
pub mod types;

pub use appearance::{describe_worn_state, render_appearance, AppearanceEntry};
pub use engine::{cover, drop_item, give_item, pick_up, remove, toggle, uncover, wear};
pub use errors::{ClothingError, ErrorClass, WardrobeError};
pub use inventory::{format_inventory, inventory_view, InventoryView};
pub use seed_loader::{load_wardrobe_from_json, wardrobe_from_str};
pub use tailoring::{add_coverage, list_messages, remove_coverage, set_message, CoverageSet};
pub use types::*;
