//! The multiset of swatches picked into the current mix.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{Colour, ColourKey};

/// Quantities of each picked colour.
///
/// Values are immutable snapshots: the mixer returns a fresh map for every
/// change. A colour recorded with quantity 0 behaves exactly like one that
/// was never picked.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PickedColours {
    quantities: BTreeMap<ColourKey, u32>,
}

impl PickedColours {
    /// An empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Quantity picked of `colour`, 0 when absent.
    pub fn quantity(&self, colour: Colour) -> u32 {
        self.quantities.get(&colour.key()).copied().unwrap_or(0)
    }

    /// Sum of all quantities.
    pub fn total(&self) -> u64 {
        self.quantities.values().map(|&q| q as u64).sum()
    }

    /// True when nothing has a non-zero quantity.
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// Iterate over recorded keys and their quantities, zeros included.
    pub fn iter(&self) -> impl Iterator<Item = (ColourKey, u32)> + '_ {
        self.quantities.iter().map(|(&k, &q)| (k, q))
    }

    /// Entries with a non-zero quantity.
    fn nonzero(&self) -> impl Iterator<Item = (ColourKey, u32)> + '_ {
        self.iter().filter(|&(_, q)| q != 0)
    }

    pub(crate) fn with_quantity(&self, key: ColourKey, quantity: u32) -> Self {
        let mut clone = self.clone();
        clone.quantities.insert(key, quantity);
        clone
    }
}

// Zero entries are kept for display but never affect equality.
impl PartialEq for PickedColours {
    fn eq(&self, other: &Self) -> bool {
        self.nonzero().eq(other.nonzero())
    }
}

impl Eq for PickedColours {}

impl FromIterator<(ColourKey, u32)> for PickedColours {
    fn from_iter<I: IntoIterator<Item = (ColourKey, u32)>>(iter: I) -> Self {
        Self {
            quantities: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Colour = Colour::rgb(255.0, 0.0, 0.0);

    #[test]
    fn test_absent_colour_has_zero_quantity() {
        assert_eq!(PickedColours::new().quantity(RED), 0);
    }

    #[test]
    fn test_with_quantity_leaves_source_untouched() {
        let empty = PickedColours::new();
        let one = empty.with_quantity(RED.key(), 1);

        assert_eq!(empty.quantity(RED), 0);
        assert_eq!(one.quantity(RED), 1);
    }

    #[test]
    fn test_zero_entries_count_as_empty() {
        let picked = PickedColours::new().with_quantity(RED.key(), 0);
        assert!(picked.is_empty());
        assert_eq!(picked.iter().count(), 1);
    }

    #[test]
    fn test_zero_entries_do_not_affect_equality() {
        let zero = PickedColours::new().with_quantity(RED.key(), 0);
        assert_eq!(zero, PickedColours::new());

        let one = PickedColours::new().with_quantity(RED.key(), 1);
        assert_ne!(one, PickedColours::new());
        assert_ne!(one, zero);

        let mixed = one.with_quantity(Colour::WHITE.key(), 0);
        assert_eq!(mixed, one);
    }

    #[test]
    fn test_serializes_as_hex_keyed_map() {
        let picked: PickedColours = [(RED.key(), 2), (Colour::WHITE.key(), 1)]
            .into_iter()
            .collect();
        let json = serde_json::to_string(&picked).unwrap();
        assert_eq!(json, r##"{"#ff0000":2,"#ffffff":1}"##);

        let back: PickedColours = serde_json::from_str(&json).unwrap();
        assert_eq!(back, picked);
    }

    #[test]
    fn test_rejects_invalid_keys() {
        assert!(serde_json::from_str::<PickedColours>(r#"{"red":1}"#).is_err());
    }
}
