//! # Dirgewear - clothing coverage and layering for the Dirge text game
//!
//! Dirgewear holds the rules behind what a character is wearing: which
//! garment occupies which body slot, which layer shows on top, which garments
//! hide others, and how wear styles and toggled states change the picture.
//! The host game supplies command parsing, sessions and persistence and
//! calls into this crate with one wearer at a time.
//!
//! ## Features
//!
//! - **Slot Layering**: 24 body slots, each holding a stack of garments in wear order.
//! - **Covering**: explicit and rule-driven (auto-cover) hiding of one garment by another.
//! - **Toggle States**: garments with an alternate coverage set (unbuttoned, rolled up).
//! - **Limits**: per-type and overall wear limits and a maximum wear-style length.
//! - **Appearance**: slot-ordered description with see-through garments and naked fallbacks.
//! - **Tailoring**: builder edits to garment messages and coverage.
//!
//! ## Quick Start
//!
//! ```rust
//! use dirgewear::wardrobe::{
//!     pick_up, render_appearance, wear, BodySlot, ClothingRules, Garment, Item, ItemId, MessageKind,
//!     Wearer,
//! };
//!
//! let rules = ClothingRules::default();
//! let mut vex = Wearer::new("Vex").with_naked(BodySlot::Head, "Shaved sides.");
//! pick_up(
//!     &mut vex,
//!     Item::clothing(
//!         "scarf",
//!         "a red scarf",
//!         Garment::new()
//!             .with_coverage(&[BodySlot::Neck])
//!             .with_message(MessageKind::Worn, "A red scarf"),
//!     ),
//! )
//! .unwrap();
//!
//! let outcome = wear(&mut vex, &ItemId::new("scarf"), Some("wrapped loosely"), &rules).unwrap();
//! assert_eq!(outcome.actor, "You put on a red scarf, wrapped loosely.");
//! assert_eq!(render_appearance(&vex), "Shaved sides. A red scarf wrapped loosely");
//! ```
//!
//! ## Module Organization
//!
//! - [`wardrobe`] - data model, coverage engine, appearance and tailoring
//! - [`config`] - TOML configuration for clothing rules and logging
//! - [`logutil`] - log-safe previews of player-written text

pub mod config;
pub mod logutil;
pub mod wardrobe;
