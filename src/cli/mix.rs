//! Mix command.

use clap::Args;
use serde::Serialize;

use crate::cli::convert::json_error;
use crate::cli::pick::apply_picks;
use crate::cli::Context;
use crate::error::Result;
use crate::mixer::calculate_colour;
use crate::output::Printer;
use crate::types::{Colour, PickedColours};

/// Mix picked colours by quantity
#[derive(Args, Debug)]
pub struct MixArgs {
    /// Picks: NAME or #RRGGBB, optionally followed by *N (N may be negative)
    #[arg(required = true)]
    pub picks: Vec<String>,

    /// Print JSON instead of text
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct MixReport<'a> {
    picked: &'a PickedColours,
    total: u64,
    mixed: String,
}

pub fn run(args: MixArgs, ctx: &Context) -> Result<()> {
    let picked = apply_picks(&args.picks, &ctx.palette)?;
    let mixed = calculate_colour(&picked);

    if args.json {
        let report = MixReport {
            picked: &picked,
            total: picked.total(),
            mixed: mixed.to_hex(),
        };
        let json = serde_json::to_string_pretty(&report).map_err(json_error)?;
        ctx.printer.line(&json);
    } else {
        ctx.printer.line(&render(&picked, mixed, &ctx.printer));
    }
    Ok(())
}

/// One line per recorded colour, then the mixed result.
pub fn render(picked: &PickedColours, mixed: Colour, printer: &Printer) -> String {
    let mut lines: Vec<String> = picked
        .iter()
        .map(|(key, quantity)| {
            format!(
                "{}{} {}",
                printer.swatch(key.colour()),
                key,
                printer.dim(&format!("x{}", quantity))
            )
        })
        .collect();

    lines.push(format!(
        "{}{}",
        printer.swatch(mixed),
        printer.bold(&format!("= {}", mixed))
    ));
    lines.join("\n")
}
