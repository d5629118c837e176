//! Coverage engine: wear, remove, cover, uncover, toggle and the transfer
//! hooks that keep a wearer's slot stacks consistent.
//!
//! Every operation checks all of its preconditions before touching the
//! wearer, so a returned error always means nothing changed.
//!
//! Removal policy: a garment can be taken off unless another garment is
//! recorded as covering it (`covered_by`). Slot stacks are not consulted;
//! a garment under another in some slot can still be removed, and it is
//! taken out of every slot by identity. Removing a covering garment
//! uncovers everything it was hiding.
use log::debug;

use super::errors::ClothingError;
use super::types::{
    BodySlot, ClothingOutcome, ClothingRules, ClothingType, Garment, Item, ItemId, MessageKind,
    Wearer,
};
use crate::logutil::preview;

// ============================================================================
// Lookup helpers
// ============================================================================

fn garment_of<'a>(
    wearer: &'a Wearer,
    id: &ItemId,
) -> Result<(&'a Item, &'a Garment), ClothingError> {
    let item = wearer
        .item(id)
        .ok_or_else(|| ClothingError::NotInInventory(id.to_string()))?;
    let garment = item
        .garment
        .as_ref()
        .ok_or_else(|| ClothingError::NotClothing(item.name.clone()))?;
    Ok((item, garment))
}

fn garment_mut<'a>(wearer: &'a mut Wearer, id: &ItemId) -> Result<&'a mut Garment, ClothingError> {
    let Item { name, garment, .. } = wearer
        .item_mut(id)
        .ok_or_else(|| ClothingError::NotInInventory(id.to_string()))?;
    garment
        .as_mut()
        .ok_or_else(|| ClothingError::NotClothing(name.clone()))
}

fn message_or(garment: &Garment, kind: MessageKind, fallback: String) -> String {
    match garment.messages.get(kind) {
        "" => fallback,
        text => text.to_string(),
    }
}

/// "a", "a and b", "a, b and c"
fn join_names(names: &[String]) -> String {
    match names {
        [] => String::new(),
        [only] => only.clone(),
        [head @ .., last] => format!("{} and {}", head.join(", "), last),
    }
}

fn compose(subject: &str, text: &str, extras: &[String]) -> String {
    let mut line = format!("{} {}", subject, text.trim().trim_end_matches('.'));
    for extra in extras {
        line.push_str(", ");
        line.push_str(extra);
    }
    line.push('.');
    line
}

// ============================================================================
// Wearing
// ============================================================================

/// Put on a carried garment, optionally with a wear style.
///
/// A garment that is already worn may be restyled when the rules allow it
/// and a style is given; its slots and layer are left alone.
pub fn wear(
    wearer: &mut Wearer,
    id: &ItemId,
    style: Option<&str>,
    rules: &ClothingRules,
) -> Result<ClothingOutcome, ClothingError> {
    let style = style.map(str::trim).filter(|style| !style.is_empty());
    let (item, garment) = garment_of(wearer, id)?;

    if let (Some(style), Some(max)) = (style, rules.style_limit()) {
        if style.chars().count() > max {
            return Err(ClothingError::StyleTooLong { max });
        }
    }

    if garment.worn {
        return match style {
            Some(style) if rules.allow_restyle => restyle(wearer, id, style),
            _ => Err(ClothingError::AlreadyWorn(item.name.clone())),
        };
    }

    if let Some(limit) = rules.overall_limit() {
        if wearer.worn_count() >= limit {
            return Err(ClothingError::OverallLimitExceeded { limit });
        }
    }

    if let Some(kind) = garment.clothing_type.as_ref() {
        if let Some(limit) = rules.type_limit(kind) {
            let same_type = wearer
                .worn_items()
                .filter(|other| {
                    other
                        .garment
                        .as_ref()
                        .map(|g| g.is_of_type(kind))
                        .unwrap_or(false)
                })
                .count();
            if same_type >= limit {
                return Err(ClothingError::TypeLimitExceeded {
                    clothing_type: kind.to_string(),
                    limit,
                });
            }
        }
    }

    let name = item.name.clone();
    let slots: Vec<BodySlot> = garment.active_coverage().iter().copied().collect();
    let covers: Vec<ClothingType> = rules
        .autocovered_by(garment.clothing_type.as_ref())
        .to_vec();
    let wear_text = message_or(garment, MessageKind::Wear, format!("put on {}", name));
    let owear_text = message_or(garment, MessageKind::OWear, format!("puts on {}", name));

    let layer = wearer.allocate_layer();
    {
        let garment = garment_mut(wearer, id)?;
        garment.worn = true;
        garment.style = style.map(str::to_string);
        garment.covered_by = None;
        garment.layer = layer;
    }
    for slot in &slots {
        wearer.insert_layered(*slot, id, layer);
    }
    let covered = autocover(wearer, id, &covers);

    debug!(
        "{} wears {} (layer {}, {} slots, style {:?}, covering {:?})",
        wearer.name,
        id,
        layer,
        slots.len(),
        style.map(preview),
        covered
    );

    let mut extras: Vec<String> = style.map(str::to_string).into_iter().collect();
    if !covered.is_empty() {
        extras.push(format!("covering {}", join_names(&covered)));
    }
    Ok(ClothingOutcome {
        actor: compose("You", &wear_text, &extras),
        observer: compose(&wearer.name, &owear_text, &extras),
        recipient: None,
        affected: covered,
    })
}

fn restyle(wearer: &mut Wearer, id: &ItemId, style: &str) -> Result<ClothingOutcome, ClothingError> {
    let name = wearer.item_name(id);
    garment_mut(wearer, id)?.style = Some(style.to_string());
    debug!("{} restyles {} as {}", wearer.name, id, preview(style));
    Ok(ClothingOutcome {
        actor: format!("You are now wearing {} {}.", name, style),
        observer: format!("{} is now wearing {} {}.", wearer.name, name, style),
        recipient: None,
        affected: Vec::new(),
    })
}

/// Mark worn, uncovered garments of the listed types as covered by `id`.
fn autocover(wearer: &mut Wearer, id: &ItemId, kinds: &[ClothingType]) -> Vec<String> {
    let mut covered = Vec::new();
    if kinds.is_empty() {
        return covered;
    }
    for item in wearer.items.iter_mut() {
        if &item.id == id {
            continue;
        }
        let Some(garment) = item.garment.as_mut() else {
            continue;
        };
        if garment.worn
            && garment.covered_by.is_none()
            && kinds.iter().any(|kind| garment.is_of_type(kind))
        {
            garment.covered_by = Some(id.clone());
            covered.push(item.name.clone());
        }
    }
    covered
}

// ============================================================================
// Removing
// ============================================================================

/// Take off a worn garment that nothing covers.
pub fn remove(wearer: &mut Wearer, id: &ItemId) -> Result<ClothingOutcome, ClothingError> {
    let (item, garment) = garment_of(wearer, id)?;
    if !garment.worn {
        return Err(ClothingError::NotWorn(item.name.clone()));
    }
    if let Some(blocker) = garment.covered_by.as_ref() {
        return Err(ClothingError::BlockedByCovering {
            target: item.name.clone(),
            blocker: wearer.item_name(blocker),
        });
    }

    let name = item.name.clone();
    let remove_text = message_or(garment, MessageKind::Remove, format!("take off {}", name));
    let oremove_text = message_or(garment, MessageKind::ORemove, format!("takes off {}", name));

    let revealed = take_off(wearer, id);
    debug!("{} removes {} (revealing {:?})", wearer.name, id, revealed);

    let extras: Vec<String> = if revealed.is_empty() {
        Vec::new()
    } else {
        vec![format!("revealing {}", join_names(&revealed))]
    };
    Ok(ClothingOutcome {
        actor: compose("You", &remove_text, &extras),
        observer: compose(&wearer.name, &oremove_text, &extras),
        recipient: None,
        affected: revealed,
    })
}

/// Clear worn state and slot entries for `id` without any checks, and
/// uncover whatever it was hiding. Returns the names of uncovered garments.
pub(crate) fn take_off(wearer: &mut Wearer, id: &ItemId) -> Vec<String> {
    wearer.withdraw_everywhere(id);
    if let Some(garment) = wearer.item_mut(id).and_then(|item| item.garment.as_mut()) {
        garment.worn = false;
        garment.style = None;
        garment.covered_by = None;
        garment.layer = 0;
    }

    let mut revealed = Vec::new();
    for item in wearer.items.iter_mut() {
        if let Some(garment) = item.garment.as_mut() {
            if garment.covered_by.as_ref() == Some(id) {
                garment.covered_by = None;
                revealed.push(item.name.clone());
            }
        }
    }
    revealed
}

// ============================================================================
// Covering
// ============================================================================

/// Hide the worn `target` under `covering`, putting `covering` on first when
/// it is only carried.
pub fn cover(
    wearer: &mut Wearer,
    target: &ItemId,
    covering: &ItemId,
    rules: &ClothingRules,
) -> Result<ClothingOutcome, ClothingError> {
    let (target_item, target_garment) = garment_of(wearer, target)?;
    let (covering_item, covering_garment) = garment_of(wearer, covering)?;
    let target_name = target_item.name.clone();
    let covering_name = covering_item.name.clone();

    if target == covering {
        return Err(ClothingError::SelfCover(target_name));
    }
    if !target_garment.worn {
        return Err(ClothingError::TargetNotWorn(target_name));
    }
    if !rules.can_cover_with(covering_garment.clothing_type.as_ref()) {
        return Err(ClothingError::ForbiddenCoverType {
            covering: covering_name,
            clothing_type: covering_garment
                .clothing_type
                .as_ref()
                .map(ToString::to_string)
                .unwrap_or_default(),
        });
    }
    if let Some(by) = target_garment.covered_by.as_ref() {
        return Err(ClothingError::AlreadyCovered {
            target: target_name,
            by: wearer.item_name(by),
        });
    }
    if let Some(by) = covering_garment.covered_by.as_ref() {
        return Err(ClothingError::CoveringAlreadyCovered {
            covering: covering_name,
            by: wearer.item_name(by),
        });
    }

    let put_on = if covering_garment.worn {
        None
    } else {
        Some(wear(wearer, covering, None, rules)?)
    };
    garment_mut(wearer, target)?.covered_by = Some(covering.clone());
    debug!("{} covers {} with {}", wearer.name, target, covering);

    let mut actor = format!("You cover {} with {}.", target_name, covering_name);
    let mut observer = format!("{} covers {} with {}.", wearer.name, target_name, covering_name);
    let mut affected = Vec::new();
    if let Some(put_on) = put_on {
        actor = format!("{} {}", put_on.actor, actor);
        observer = format!("{} {}", put_on.observer, observer);
        affected = put_on.affected;
    }
    if !affected.contains(&target_name) {
        affected.push(target_name);
    }
    Ok(ClothingOutcome {
        actor,
        observer,
        recipient: None,
        affected,
    })
}

/// Reveal a covered garment. Only one layer may be lifted at a time: if the
/// covering garment is itself covered the request is refused.
pub fn uncover(wearer: &mut Wearer, target: &ItemId) -> Result<ClothingOutcome, ClothingError> {
    let (item, garment) = garment_of(wearer, target)?;
    let name = item.name.clone();
    if !garment.worn {
        return Err(ClothingError::NotWorn(name));
    }
    let Some(covering) = garment.covered_by.clone() else {
        return Err(ClothingError::NotCovered(name));
    };

    let covering_name = wearer.item_name(&covering);
    let covering_is_covered = wearer
        .item(&covering)
        .and_then(|item| item.garment.as_ref())
        .map(|garment| garment.covered_by.is_some())
        .unwrap_or(false);
    if covering_is_covered {
        return Err(ClothingError::LayeredTooDeep {
            target: name,
            covering: covering_name,
        });
    }

    garment_mut(wearer, target)?.covered_by = None;
    debug!("{} uncovers {} from under {}", wearer.name, target, covering);

    Ok(ClothingOutcome {
        actor: format!("You uncover {} from beneath {}.", name, covering_name),
        observer: format!(
            "{} uncovers {} from beneath {}.",
            wearer.name, name, covering_name
        ),
        recipient: None,
        affected: vec![name],
    })
}

// ============================================================================
// Toggling
// ============================================================================

/// Switch a garment between its normal and toggled coverage.
///
/// A carried garment only flips its flag; a worn one also moves between
/// slot stacks, re-entering each stack at the position its layer gives it.
pub fn toggle(wearer: &mut Wearer, id: &ItemId) -> Result<ClothingOutcome, ClothingError> {
    let (item, garment) = garment_of(wearer, id)?;
    let name = item.name.clone();
    let turning_on = !garment.toggled;
    let (from, to) = if turning_on {
        (&garment.coverage, &garment.toggle_coverage)
    } else {
        (&garment.toggle_coverage, &garment.coverage)
    };
    let leaving: Vec<BodySlot> = from.difference(to).copied().collect();
    let entering: Vec<BodySlot> = to.difference(from).copied().collect();

    let (actor_kind, observer_kind) = if turning_on {
        (MessageKind::Toggle1, MessageKind::OToggle1)
    } else {
        (MessageKind::Toggle2, MessageKind::OToggle2)
    };
    let actor_text = message_or(garment, actor_kind, format!("adjust {}", name));
    let observer_text = message_or(garment, observer_kind, format!("adjusts {}", name));
    let worn = garment.worn;
    let layer = garment.layer;

    garment_mut(wearer, id)?.toggled = turning_on;
    if worn {
        for slot in &leaving {
            wearer.withdraw_from_slot(*slot, id);
        }
        for slot in &entering {
            wearer.insert_layered(*slot, id, layer);
        }
    }
    debug!(
        "{} toggles {} {} (-{:?} +{:?})",
        wearer.name,
        id,
        if turning_on { "on" } else { "off" },
        leaving,
        entering
    );

    Ok(ClothingOutcome {
        actor: compose("You", &actor_text, &[]),
        observer: compose(&wearer.name, &observer_text, &[]),
        recipient: None,
        affected: Vec::new(),
    })
}

// ============================================================================
// Transfers
// ============================================================================

/// Refuse covered garments, then quietly take off worn ones.
fn release(wearer: &mut Wearer, id: &ItemId) -> Result<Vec<String>, ClothingError> {
    let item = wearer
        .item(id)
        .ok_or_else(|| ClothingError::NotInInventory(id.to_string()))?;
    let Some(garment) = item.garment.as_ref() else {
        return Ok(Vec::new());
    };
    if let Some(blocker) = garment.covered_by.as_ref() {
        return Err(ClothingError::CoveredCannotTransfer {
            target: item.name.clone(),
            blocker: wearer.item_name(blocker),
        });
    }
    let worn = garment.worn;
    if worn {
        Ok(take_off(wearer, id))
    } else {
        Ok(Vec::new())
    }
}

/// Drop an item, taking it off first if worn. The caller places the
/// returned item in the room.
pub fn drop_item(
    wearer: &mut Wearer,
    id: &ItemId,
) -> Result<(Item, ClothingOutcome), ClothingError> {
    let revealed = release(wearer, id)?;
    let item = wearer
        .take_item(id)
        .ok_or_else(|| ClothingError::NotInInventory(id.to_string()))?;
    debug!("{} drops {}", wearer.name, id);

    let outcome = ClothingOutcome {
        actor: format!("You drop {}.", item.name),
        observer: format!("{} drops {}.", wearer.name, item.name),
        recipient: None,
        affected: revealed,
    };
    Ok((item, outcome))
}

/// Hand an item to another wearer, taking it off first if worn.
pub fn give_item(
    giver: &mut Wearer,
    id: &ItemId,
    recipient: &mut Wearer,
) -> Result<ClothingOutcome, ClothingError> {
    let name = giver
        .item(id)
        .map(|item| item.name.clone())
        .ok_or_else(|| ClothingError::NotInInventory(id.to_string()))?;
    if recipient.carries(id) {
        return Err(ClothingError::RecipientHasItem {
            recipient: recipient.name.clone(),
            item: name,
        });
    }

    let revealed = release(giver, id)?;
    let item = giver
        .take_item(id)
        .ok_or_else(|| ClothingError::NotInInventory(id.to_string()))?;
    pick_up(recipient, item)?;
    debug!("{} gives {} to {}", giver.name, id, recipient.name);

    Ok(ClothingOutcome {
        actor: format!("You give {} to {}.", name, recipient.name),
        observer: format!("{} gives {} to {}.", giver.name, name, recipient.name),
        recipient: Some(format!("{} gives you {}.", giver.name, name)),
        affected: revealed,
    })
}

/// Take possession of an item. Worn state left over from a previous owner
/// is cleared; the toggle flag is kept.
pub fn pick_up(wearer: &mut Wearer, mut item: Item) -> Result<ClothingOutcome, ClothingError> {
    if wearer.carries(&item.id) {
        return Err(ClothingError::AlreadyCarried(item.name));
    }
    if let Some(garment) = item.garment.as_mut() {
        garment.worn = false;
        garment.style = None;
        garment.covered_by = None;
        garment.layer = 0;
    }
    let outcome = ClothingOutcome {
        actor: format!("You pick up {}.", item.name),
        observer: format!("{} picks up {}.", wearer.name, item.name),
        recipient: None,
        affected: Vec::new(),
    };
    wearer.items.push(item);
    Ok(outcome)
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wardrobe::types::WornState;

    fn shirt() -> Item {
        Item::clothing(
            "shirt",
            "a grey shirt",
            Garment::new()
                .with_type("top")
                .with_coverage(&[BodySlot::Chest, BodySlot::Back, BodySlot::Abdomen])
                .with_message(MessageKind::Wear, "pull on a grey shirt")
                .with_message(MessageKind::OWear, "pulls on a grey shirt"),
        )
    }

    fn jacket() -> Item {
        Item::clothing(
            "jacket",
            "a leather jacket",
            Garment::new()
                .with_type("outerwear")
                .with_coverage(&[BodySlot::Chest, BodySlot::Back, BodySlot::LeftUpperarm]),
        )
    }

    fn ring() -> Item {
        Item::clothing(
            "ring",
            "a silver ring",
            Garment::new()
                .with_type("jewelry")
                .with_coverage(&[BodySlot::LeftHand]),
        )
    }

    fn wearer_with(items: Vec<Item>) -> Wearer {
        let mut wearer = Wearer::new("Vex");
        for item in items {
            pick_up(&mut wearer, item).unwrap();
        }
        wearer
    }

    fn id(raw: &str) -> ItemId {
        ItemId::new(raw)
    }

    #[test]
    fn wear_occupies_active_slots_only() {
        let mut wearer = wearer_with(vec![shirt()]);
        let rules = ClothingRules::default();

        let outcome = wear(&mut wearer, &id("shirt"), None, &rules).unwrap();
        assert_eq!(outcome.actor, "You pull on a grey shirt.");
        assert_eq!(outcome.observer, "Vex pulls on a grey shirt.");

        for slot in BodySlot::ALL {
            let expected = matches!(slot, BodySlot::Chest | BodySlot::Back | BodySlot::Abdomen);
            assert_eq!(wearer.slot(slot).contains(&id("shirt")), expected, "{}", slot);
        }
        let garment = wearer.item(&id("shirt")).unwrap().garment.as_ref().unwrap();
        assert_eq!(garment.worn_state(), WornState::Worn);
    }

    #[test]
    fn wear_appends_style_to_messages() {
        let mut wearer = wearer_with(vec![shirt()]);
        let outcome = wear(
            &mut wearer,
            &id("shirt"),
            Some("half tucked in"),
            &ClothingRules::default(),
        )
        .unwrap();
        assert_eq!(outcome.actor, "You pull on a grey shirt, half tucked in.");
    }

    #[test]
    fn wear_rejects_plain_items_and_strangers() {
        let mut wearer = wearer_with(vec![Item::new("rock", "a rock")]);
        let rules = ClothingRules::default();
        assert_eq!(
            wear(&mut wearer, &id("rock"), None, &rules),
            Err(ClothingError::NotClothing("a rock".into()))
        );
        assert_eq!(
            wear(&mut wearer, &id("hat"), None, &rules),
            Err(ClothingError::NotInInventory("hat".into()))
        );
    }

    #[test]
    fn wearing_twice_without_style_is_rejected() {
        let mut wearer = wearer_with(vec![shirt()]);
        let rules = ClothingRules::default();
        wear(&mut wearer, &id("shirt"), None, &rules).unwrap();
        let before = wearer.clone();
        assert_eq!(
            wear(&mut wearer, &id("shirt"), None, &rules),
            Err(ClothingError::AlreadyWorn("a grey shirt".into()))
        );
        assert_eq!(wearer, before);
    }

    #[test]
    fn restyle_changes_only_the_style() {
        let mut wearer = wearer_with(vec![shirt()]);
        let rules = ClothingRules::default();
        wear(&mut wearer, &id("shirt"), None, &rules).unwrap();
        let chest_before = wearer.slot(BodySlot::Chest).to_vec();

        let outcome = wear(&mut wearer, &id("shirt"), Some("inside out"), &rules).unwrap();
        assert_eq!(outcome.actor, "You are now wearing a grey shirt inside out.");
        assert_eq!(wearer.slot(BodySlot::Chest), chest_before.as_slice());
        let garment = wearer.item(&id("shirt")).unwrap().garment.as_ref().unwrap();
        assert_eq!(garment.style(), Some("inside out"));

        let strict = ClothingRules {
            allow_restyle: false,
            ..ClothingRules::default()
        };
        assert!(matches!(
            wear(&mut wearer, &id("shirt"), Some("backwards"), &strict),
            Err(ClothingError::AlreadyWorn(_))
        ));
    }

    #[test]
    fn overall_limit_counts_worn_garments() {
        let mut wearer = wearer_with(vec![shirt(), jacket()]);
        let rules = ClothingRules {
            overall_limit: 1,
            ..ClothingRules::default()
        };
        wear(&mut wearer, &id("shirt"), None, &rules).unwrap();
        assert_eq!(
            wear(&mut wearer, &id("jacket"), None, &rules),
            Err(ClothingError::OverallLimitExceeded { limit: 1 })
        );
        assert!(!wearer.slot(BodySlot::LeftUpperarm).contains(&id("jacket")));
    }

    #[test]
    fn remove_clears_slots_and_state() {
        let mut wearer = wearer_with(vec![shirt()]);
        let before = wearer.slot(BodySlot::Chest).to_vec();
        wear(&mut wearer, &id("shirt"), Some("loosely"), &ClothingRules::default()).unwrap();

        let outcome = remove(&mut wearer, &id("shirt")).unwrap();
        assert_eq!(outcome.actor, "You take off a grey shirt.");
        assert_eq!(wearer.slot(BodySlot::Chest), before.as_slice());
        let garment = wearer.item(&id("shirt")).unwrap().garment.as_ref().unwrap();
        assert!(!garment.is_worn());
        assert_eq!(garment.style(), None);
        assert_eq!(
            remove(&mut wearer, &id("shirt")),
            Err(ClothingError::NotWorn("a grey shirt".into()))
        );
    }

    #[test]
    fn remove_out_of_the_middle_of_a_stack() {
        let mut wearer = wearer_with(vec![shirt(), jacket()]);
        let rules = ClothingRules::unrestricted();
        wear(&mut wearer, &id("shirt"), None, &rules).unwrap();
        wear(&mut wearer, &id("jacket"), None, &rules).unwrap();

        remove(&mut wearer, &id("shirt")).unwrap();
        assert_eq!(wearer.slot(BodySlot::Chest), &[id("jacket")]);
        assert!(wearer.slot(BodySlot::Abdomen).is_empty());
    }

    #[test]
    fn cover_refuses_jewelry_and_self() {
        let mut wearer = wearer_with(vec![shirt(), ring()]);
        let rules = ClothingRules::default();
        wear(&mut wearer, &id("shirt"), None, &rules).unwrap();

        assert_eq!(
            cover(&mut wearer, &id("shirt"), &id("shirt"), &rules),
            Err(ClothingError::SelfCover("a grey shirt".into()))
        );
        assert_eq!(
            cover(&mut wearer, &id("shirt"), &id("ring"), &rules),
            Err(ClothingError::ForbiddenCoverType {
                covering: "a silver ring".into(),
                clothing_type: "jewelry".into()
            })
        );
        assert!(!wearer.item(&id("ring")).unwrap().is_worn());
    }

    #[test]
    fn cover_requires_worn_target() {
        let mut wearer = wearer_with(vec![shirt(), jacket()]);
        assert_eq!(
            cover(&mut wearer, &id("shirt"), &id("jacket"), &ClothingRules::default()),
            Err(ClothingError::TargetNotWorn("a grey shirt".into()))
        );
    }

    #[test]
    fn cover_failure_while_auto_wearing_changes_nothing() {
        let mut wearer = wearer_with(vec![shirt(), jacket()]);
        let rules = ClothingRules {
            overall_limit: 1,
            ..ClothingRules::default()
        };
        wear(&mut wearer, &id("shirt"), None, &rules).unwrap();
        let before = wearer.clone();
        assert_eq!(
            cover(&mut wearer, &id("shirt"), &id("jacket"), &rules),
            Err(ClothingError::OverallLimitExceeded { limit: 1 })
        );
        assert_eq!(wearer, before);
    }

    #[test]
    fn uncover_needs_a_cover() {
        let mut wearer = wearer_with(vec![shirt()]);
        wear(&mut wearer, &id("shirt"), None, &ClothingRules::default()).unwrap();
        assert_eq!(
            uncover(&mut wearer, &id("shirt")),
            Err(ClothingError::NotCovered("a grey shirt".into()))
        );
    }

    #[test]
    fn toggle_on_carried_garment_only_flips_flag() {
        let mut wearer = wearer_with(vec![Item::clothing(
            "sleeves",
            "a sleeved shirt",
            Garment::new()
                .with_coverage(&[BodySlot::LeftForearm])
                .with_toggle_coverage(&[BodySlot::LeftUpperarm]),
        )]);
        toggle(&mut wearer, &id("sleeves")).unwrap();
        assert!(wearer.slot(BodySlot::LeftUpperarm).is_empty());

        wear(&mut wearer, &id("sleeves"), None, &ClothingRules::default()).unwrap();
        let garment = wearer.item(&id("sleeves")).unwrap().garment.as_ref().unwrap();
        assert_eq!(garment.worn_state(), WornState::WornToggled);
        assert_eq!(wearer.slot(BodySlot::LeftUpperarm), &[id("sleeves")]);
        assert!(wearer.slot(BodySlot::LeftForearm).is_empty());
    }

    #[test]
    fn toggle_uses_direction_specific_messages() {
        let mut wearer = wearer_with(vec![Item::clothing(
            "coat",
            "a long coat",
            Garment::new()
                .with_coverage(&[BodySlot::Chest])
                .with_message(MessageKind::Toggle1, "unbutton your coat")
                .with_message(MessageKind::OToggle1, "unbuttons their coat")
                .with_message(MessageKind::Toggle2, "button up your coat"),
        )]);
        let on = toggle(&mut wearer, &id("coat")).unwrap();
        assert_eq!(on.actor, "You unbutton your coat.");
        assert_eq!(on.observer, "Vex unbuttons their coat.");
        let off = toggle(&mut wearer, &id("coat")).unwrap();
        assert_eq!(off.actor, "You button up your coat.");
        assert_eq!(off.observer, "Vex adjusts a long coat.");
    }

    #[test]
    fn toggle_rejects_plain_items() {
        let mut wearer = wearer_with(vec![Item::new("rock", "a rock")]);
        assert_eq!(
            toggle(&mut wearer, &id("rock")),
            Err(ClothingError::NotClothing("a rock".into()))
        );
    }

    #[test]
    fn drop_takes_off_worn_garment() {
        let mut wearer = wearer_with(vec![shirt()]);
        wear(&mut wearer, &id("shirt"), None, &ClothingRules::default()).unwrap();

        let (item, outcome) = drop_item(&mut wearer, &id("shirt")).unwrap();
        assert_eq!(outcome.actor, "You drop a grey shirt.");
        assert!(!item.is_worn());
        assert!(!wearer.carries(&id("shirt")));
        assert!(wearer.slot(BodySlot::Chest).is_empty());
    }

    #[test]
    fn drop_plain_item() {
        let mut wearer = wearer_with(vec![Item::new("rock", "a rock")]);
        let (item, _) = drop_item(&mut wearer, &id("rock")).unwrap();
        assert_eq!(item.name, "a rock");
        assert!(wearer.items().is_empty());
    }

    #[test]
    fn pick_up_clears_stale_worn_state() {
        let mut stale = shirt();
        if let Some(garment) = stale.garment.as_mut() {
            garment.worn = true;
            garment.covered_by = Some(id("ghost"));
        }
        let mut wearer = Wearer::new("Vex");
        pick_up(&mut wearer, stale).unwrap();
        let garment = wearer.item(&id("shirt")).unwrap().garment.as_ref().unwrap();
        assert!(!garment.is_worn());
        assert!(garment.covered_by().is_none());
        assert!(matches!(
            pick_up(&mut wearer, shirt()),
            Err(ClothingError::AlreadyCarried(_))
        ));
    }

    #[test]
    fn join_names_reads_naturally() {
        assert_eq!(join_names(&["a".into()]), "a");
        assert_eq!(join_names(&["a".into(), "b".into()]), "a and b");
        assert_eq!(join_names(&["a".into(), "b".into(), "c".into()]), "a, b and c");
    }
}
