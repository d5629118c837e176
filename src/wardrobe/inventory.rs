/// Carried-versus-worn inventory listing
use super::types::{Item, Wearer};

// ============================================================================
// Inventory Views
// ============================================================================

/// A wearer's items split by whether they are being worn.
#[derive(Debug, Clone, PartialEq)]
pub struct InventoryView<'a> {
    pub carried: Vec<&'a Item>,
    pub worn: Vec<&'a Item>,
}

impl InventoryView<'_> {
    pub fn is_empty(&self) -> bool {
        self.carried.is_empty() && self.worn.is_empty()
    }
}

/// Split a wearer's items, keeping acquisition order within each half
pub fn inventory_view(wearer: &Wearer) -> InventoryView<'_> {
    let (worn, carried): (Vec<&Item>, Vec<&Item>) =
        wearer.items().iter().partition(|item| item.is_worn());
    InventoryView { carried, worn }
}

fn item_line(wearer: &Wearer, item: &Item) -> String {
    let mut line = format!("  {}", item.name);
    if let Some(garment) = item.garment.as_ref() {
        if let Some(style) = garment.style() {
            line.push_str(&format!(" ({})", style));
        }
        if let Some(by) = garment.covered_by() {
            line.push_str(&format!(" [under {}]", wearer.item_name(by)));
        }
    }
    if !item.description.is_empty() {
        line.push_str(" - ");
        line.push_str(&item.description);
    }
    line
}

/// Format inventory for display, carried items first
pub fn format_inventory(wearer: &Wearer) -> Vec<String> {
    let view = inventory_view(wearer);
    if view.is_empty() {
        return vec!["You are not carrying or wearing anything.".to_string()];
    }

    let mut lines = vec!["You are carrying:".to_string()];
    if view.carried.is_empty() {
        lines.push("  Nothing.".to_string());
    }
    lines.extend(view.carried.iter().map(|item| item_line(wearer, item)));

    lines.push("You are wearing:".to_string());
    if view.worn.is_empty() {
        lines.push("  Nothing.".to_string());
    }
    lines.extend(view.worn.iter().map(|item| item_line(wearer, item)));
    lines
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wardrobe::engine::{pick_up, wear};
    use crate::wardrobe::types::{BodySlot, ClothingRules, Garment, ItemId};

    fn test_wearer() -> Wearer {
        let mut wearer = Wearer::new("Vex");
        pick_up(
            &mut wearer,
            Item::new("knife", "a switchblade").with_description("Chipped and dull."),
        )
        .unwrap();
        pick_up(
            &mut wearer,
            Item::clothing(
                "scarf",
                "a red scarf",
                Garment::new().with_coverage(&[BodySlot::Neck]),
            ),
        )
        .unwrap();
        wearer
    }

    #[test]
    fn test_empty_inventory() {
        let wearer = Wearer::new("Vex");
        assert_eq!(
            format_inventory(&wearer),
            vec!["You are not carrying or wearing anything.".to_string()]
        );
    }

    #[test]
    fn test_split_follows_worn_state() {
        let mut wearer = test_wearer();
        let view = inventory_view(&wearer);
        assert_eq!(view.carried.len(), 2);
        assert!(view.worn.is_empty());

        wear(
            &mut wearer,
            &ItemId::new("scarf"),
            Some("wrapped twice"),
            &ClothingRules::default(),
        )
        .unwrap();
        let view = inventory_view(&wearer);
        assert_eq!(view.carried.len(), 1);
        assert_eq!(view.worn[0].name, "a red scarf");
    }

    #[test]
    fn test_format_lists_both_sections() {
        let mut wearer = test_wearer();
        wear(
            &mut wearer,
            &ItemId::new("scarf"),
            Some("wrapped twice"),
            &ClothingRules::default(),
        )
        .unwrap();
        assert_eq!(
            format_inventory(&wearer),
            vec![
                "You are carrying:".to_string(),
                "  a switchblade - Chipped and dull.".to_string(),
                "You are wearing:".to_string(),
                "  a red scarf (wrapped twice)".to_string(),
            ]
        );
    }

    #[test]
    fn test_format_placeholder_when_nothing_worn() {
        let wearer = test_wearer();
        let lines = format_inventory(&wearer);
        assert_eq!(lines.last().map(String::as_str), Some("  Nothing."));
    }
}
