//! Convert command: one colour in every model.

use clap::Args;
use serde::Serialize;

use crate::cli::Context;
use crate::convert::{rgb_to_hsl, rgb_to_hsv, rgb_to_lab, text_colour, TextColour};
use crate::error::{Result, SwatchError};
use crate::output::Printer;
use crate::types::{Colour, Hsl, Hsv, Lab};

/// Show a colour in every supported colour model
#[derive(Args, Debug)]
pub struct ConvertArgs {
    /// Colour as six hex digits, with or without '#'
    pub colour: String,

    /// Print JSON instead of text
    #[arg(long)]
    pub json: bool,
}

/// Everything the convert command reports about one colour.
#[derive(Debug, Serialize)]
pub struct Conversion {
    pub hex: String,
    pub rgb: Colour,
    pub hsl: Hsl,
    pub hsv: Hsv,
    pub lab: Lab,
    pub text: TextColour,
}

impl Conversion {
    pub fn of(colour: Colour) -> Self {
        Self {
            hex: colour.to_hex(),
            rgb: colour,
            hsl: rgb_to_hsl(colour),
            hsv: rgb_to_hsv(colour),
            lab: rgb_to_lab(colour),
            text: text_colour(colour),
        }
    }
}

pub fn run(args: ConvertArgs, ctx: &Context) -> Result<()> {
    let colour = Colour::from_hex(&args.colour)?;
    let conversion = Conversion::of(colour);

    if args.json {
        let json = serde_json::to_string_pretty(&conversion).map_err(json_error)?;
        ctx.printer.line(&json);
    } else {
        ctx.printer.line(&render(&conversion, &ctx.printer));
    }
    Ok(())
}

/// Render the text form, one model per line.
pub fn render(c: &Conversion, printer: &Printer) -> String {
    let [r, g, b] = c.rgb.to_bytes();
    [
        format!("hex   {}{}", printer.swatch(c.rgb), c.hex),
        format!("rgb   {} {} {}", r, g, b),
        format!("hsl   {:.4} {:.4} {:.4}", c.hsl.h, c.hsl.s, c.hsl.l),
        format!("hsv   {:.4} {:.4} {:.4}", c.hsv.h, c.hsv.s, c.hsv.v),
        format!("lab   {:.2} {:.2} {:.2}", c.lab.l, c.lab.a, c.lab.b),
        format!("text  {} {}", c.text, printer.dim(c.text.css())),
    ]
    .join("\n")
}

pub(crate) fn json_error(e: serde_json::Error) -> SwatchError {
    SwatchError::Parse {
        message: format!("Failed to encode JSON: {}", e),
        help: None,
    }
}
