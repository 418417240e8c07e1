//! Parsing `NAME*N` / `#RRGGBB*N` picks from the command line.

use crate::error::{Result, SwatchError};
use crate::mixer::{add_picked_colour, remove_picked_colour};
use crate::types::{Colour, Palette, PickedColours};

/// One command-line pick: a colour and a signed unit count.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pick {
    pub colour: Colour,
    /// Units to add (positive) or remove (negative). Zero only records the
    /// colour.
    pub amount: i64,
}

/// Parse a pick against `palette`.
///
/// Palette names are tried first (case-insensitive), then hex.
pub fn parse_pick(input: &str, palette: &Palette) -> Result<Pick> {
    let (name, amount) = match input.rsplit_once('*') {
        Some((name, count)) => {
            let amount = count.trim().parse::<i64>().map_err(|_| SwatchError::Parse {
                message: format!("Invalid amount in pick {:?}", input),
                help: Some("Write the amount as a whole number, e.g. red*3 or red*-1".to_string()),
            })?;
            (name.trim(), amount)
        }
        None => (input.trim(), 1),
    };

    let colour = resolve_colour(name, palette)?;
    Ok(Pick { colour, amount })
}

fn resolve_colour(name: &str, palette: &Palette) -> Result<Colour> {
    if let Some(colour) = palette.get(name) {
        return Ok(colour);
    }
    if name.starts_with('#') {
        return Colour::from_hex(name);
    }

    Colour::from_hex(name).map_err(|_| SwatchError::UnknownColour {
        name: name.to_string(),
        help: Some(format!(
            "Available colours: {}",
            palette.names().collect::<Vec<_>>().join(", ")
        )),
    })
}

/// Apply a single pick to a selection snapshot.
pub fn apply_pick(picked: &PickedColours, pick: Pick) -> PickedColours {
    if pick.amount >= 0 {
        let amount = u32::try_from(pick.amount).unwrap_or(u32::MAX);
        return add_picked_colour(picked, pick.colour, amount);
    }

    // Removals past zero only re-record the zero, so stop once there.
    let current = picked.quantity(pick.colour).max(1) as u64;
    let times = pick.amount.unsigned_abs().min(current);

    let mut next = picked.clone();
    for _ in 0..times {
        next = remove_picked_colour(&next, pick.colour);
    }
    next
}

/// Parse and apply every pick in order.
pub fn apply_picks<S: AsRef<str>>(inputs: &[S], palette: &Palette) -> Result<PickedColours> {
    inputs.iter().try_fold(PickedColours::new(), |picked, input| {
        let pick = parse_pick(input.as_ref(), palette)?;
        Ok(apply_pick(&picked, pick))
    })
}
