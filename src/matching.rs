//! Scoring a mix against the colour to match.

use std::fmt;

use serde::Serialize;

use crate::convert::rgb_to_lab;
use crate::distance::delta_e;
use crate::mixer::calculate_colour;
use crate::types::{Colour, PickedColours};

/// Upper bound on the reported difference. The distance formula is not
/// normalized and can exceed this for very different colours.
pub const MAX_DIFFERENCE: f64 = 100.0;

/// A mix within this difference of the target counts as a match.
pub const MATCH_TOLERANCE: f64 = 1.0;

/// Outcome of comparing the current mix with the target.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MatchResult {
    /// The colour the current selection mixes to.
    pub mixed: Colour,
    /// ΔE from the mix to the target, capped at [`MAX_DIFFERENCE`].
    pub difference: f64,
    pub is_match: bool,
}

impl MatchResult {
    /// The difference rounded to two decimals, as a percentage label.
    pub fn difference_label(&self) -> String {
        let rounded = (self.difference * 100.0).round() / 100.0;
        format!("{}%", rounded)
    }
}

impl fmt::Display for MatchResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.mixed, self.difference_label())?;
        if self.is_match {
            write!(f, " match")?;
        }
        Ok(())
    }
}

/// Mix the selection and score it against `target`.
pub fn evaluate(picked: &PickedColours, target: Colour) -> MatchResult {
    let mixed = calculate_colour(picked);
    let raw = delta_e(rgb_to_lab(mixed), rgb_to_lab(target));
    let difference = raw.min(MAX_DIFFERENCE);
    let is_match = difference <= MATCH_TOLERANCE;

    tracing::debug!(
        mixed = %mixed,
        target = %target,
        raw,
        difference,
        is_match,
        "evaluated mix"
    );

    MatchResult {
        mixed,
        difference,
        is_match,
    }
}
