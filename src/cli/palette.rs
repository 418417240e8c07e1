use clap::Args;
use serde::Serialize;

use crate::cli::convert::json_error;
use crate::cli::Context;
use crate::convert::{text_colour, TextColour};
use crate::error::Result;
use crate::output::Printer;
use crate::types::Palette;

/// List the active palette
#[derive(Args, Debug)]
pub struct PaletteArgs {
    /// Print JSON instead of text
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct SwatchReport<'a> {
    name: &'a str,
    hex: String,
    text: TextColour,
}

pub fn run(args: PaletteArgs, ctx: &Context) -> Result<()> {
    if args.json {
        let swatches: Vec<SwatchReport> = ctx
            .palette
            .iter()
            .map(|entry| SwatchReport {
                name: &entry.name,
                hex: entry.colour.to_hex(),
                text: text_colour(entry.colour),
            })
            .collect();
        let json = serde_json::to_string_pretty(&swatches).map_err(json_error)?;
        ctx.printer.line(&json);
    } else {
        ctx.printer.line(&render(&ctx.palette, &ctx.printer));
    }
    Ok(())
}

pub fn render(palette: &Palette, printer: &Printer) -> String {
    let width = palette.names().map(str::len).max().unwrap_or(0);

    palette
        .iter()
        .map(|entry| {
            format!(
                "{}{:<width$}  {}  {}",
                printer.swatch(entry.colour),
                entry.name,
                entry.colour,
                text_colour(entry.colour)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
