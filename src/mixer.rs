//! Quantity-weighted mixing of picked swatches.
//!
//! Selections are never edited in place. Each operation takes the current
//! snapshot and returns the next one, so an older snapshot can still be
//! evaluated while a newer one is being built.

use crate::types::{Colour, PickedColours};

/// Add `amount` units of `colour` to the selection.
pub fn add_picked_colour(existing: &PickedColours, colour: Colour, amount: u32) -> PickedColours {
    let key = colour.key();
    let quantity = existing.quantity(colour).saturating_add(amount);
    tracing::trace!(colour = %key, quantity, "picked colour added");
    existing.with_quantity(key, quantity)
}

/// Remove one unit of `colour` from the selection, never going below zero.
///
/// The colour stays recorded with quantity 0 when it runs out.
pub fn remove_picked_colour(existing: &PickedColours, colour: Colour) -> PickedColours {
    let key = colour.key();
    let quantity = existing.quantity(colour).saturating_sub(1);
    tracing::trace!(colour = %key, quantity, "picked colour removed");
    existing.with_quantity(key, quantity)
}

/// The quantity-weighted average of every picked colour.
///
/// An empty selection (total quantity 0) mixes to white.
pub fn calculate_colour(picked: &PickedColours) -> Colour {
    let total = picked.total();
    if total == 0 {
        return Colour::WHITE;
    }

    let (mut r, mut g, mut b) = (0.0, 0.0, 0.0);
    for (key, quantity) in picked.iter() {
        let colour = key.colour();
        let weight = quantity as f64;
        r += weight * colour.r;
        g += weight * colour.g;
        b += weight * colour.b;
    }

    let n = total as f64;
    Colour::rgb((r / n).round(), (g / n).round(), (b / n).round())
}
