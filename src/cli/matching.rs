//! Match command: score a mix against a target.

use clap::Args;
use serde::Serialize;

use crate::cli::convert::json_error;
use crate::cli::pick::apply_picks;
use crate::cli::Context;
use crate::error::Result;
use crate::matching::{evaluate, MatchResult};
use crate::output::Printer;
use crate::types::Colour;

/// Score a mix against a target colour
#[derive(Args, Debug)]
pub struct MatchArgs {
    /// Colour to match, as six hex digits
    #[arg(long, short)]
    pub target: String,

    /// Picks: NAME or #RRGGBB, optionally followed by *N (N may be negative)
    pub picks: Vec<String>,

    /// Print JSON instead of text
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct MatchReport {
    target: String,
    mixed: String,
    difference: f64,
    label: String,
    is_match: bool,
}

impl MatchReport {
    fn new(target: Colour, result: &MatchResult) -> Self {
        Self {
            target: target.to_hex(),
            mixed: result.mixed.to_hex(),
            difference: result.difference,
            label: result.difference_label(),
            is_match: result.is_match,
        }
    }
}

pub fn run(args: MatchArgs, ctx: &Context) -> Result<()> {
    let target = Colour::from_hex(&args.target)?;
    if args.picks.is_empty() {
        ctx.printer.warning("Empty", "nothing picked, mixing as white");
    }
    let picked = apply_picks(&args.picks, &ctx.palette)?;
    let result = evaluate(&picked, target);

    if args.json {
        let json = serde_json::to_string_pretty(&MatchReport::new(target, &result))
            .map_err(json_error)?;
        ctx.printer.line(&json);
    } else {
        ctx.printer.line(&render(target, &result, &ctx.printer));
    }

    if result.is_match {
        ctx.printer.status("Matched", &target.to_hex());
    }
    Ok(())
}

pub fn render(target: Colour, result: &MatchResult, printer: &Printer) -> String {
    [
        format!("target      {}{}", printer.swatch(target), target),
        format!("mixed       {}{}", printer.swatch(result.mixed), result.mixed),
        format!("difference  {}", result.difference_label()),
        format!("match       {}", if result.is_match { "yes" } else { "no" }),
    ]
    .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Palette;

    fn score(target: &str, picks: &[&str]) -> (Colour, MatchResult) {
        let target = Colour::from_hex(target).unwrap();
        let picked = apply_picks(picks, &Palette::basic()).unwrap();
        (target, evaluate(&picked, target))
    }

    #[test]
    fn test_render_exact_match() {
        let (target, result) = score("ff8080", &["red", "white"]);
        insta::assert_snapshot!(render(target, &result, &Printer::plain()), @r"
        target      #ff8080
        mixed       #ff8080
        difference  0%
        match       yes
        ");
    }

    #[test]
    fn test_render_capped_difference() {
        let (target, result) = score("#ffffff", &["black*3"]);
        insta::assert_snapshot!(render(target, &result, &Printer::plain()), @r"
        target      #ffffff
        mixed       #000000
        difference  100%
        match       no
        ");
    }

    #[test]
    fn test_no_picks_is_white() {
        let (_, result) = score("ffffff", &[]);
        assert!(result.is_match);
    }

    #[test]
    fn test_json_report() {
        let (target, result) = score("ff8080", &["red", "white"]);
        let value = serde_json::to_value(MatchReport::new(target, &result)).unwrap();

        assert_eq!(value["target"], "#ff8080");
        assert_eq!(value["mixed"], "#ff8080");
        assert_eq!(value["label"], "0%");
        assert_eq!(value["is_match"], true);
    }
}
