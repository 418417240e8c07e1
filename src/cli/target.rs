//! Target command: pick a random colour to aim for.

use clap::Args;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::cli::Context;
use crate::error::Result;
use crate::target::random_target;
use crate::types::Colour;

/// Generate a random target colour
#[derive(Args, Debug)]
pub struct TargetArgs {
    /// Seed for a reproducible target
    #[arg(long)]
    pub seed: Option<u64>,
}

pub fn run(args: TargetArgs, ctx: &Context) -> Result<()> {
    let target = generate(args.seed);
    tracing::debug!(seed = ?args.seed, target = %target, "generated target");
    ctx.printer.line(&format!("{}{}", ctx.printer.swatch(target), target));
    Ok(())
}

fn generate(seed: Option<u64>) -> Colour {
    match seed {
        Some(seed) => random_target(&mut StdRng::seed_from_u64(seed)),
        None => random_target(&mut rand::rng()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_targets_repeat() {
        assert_eq!(generate(Some(3)), generate(Some(3)));
    }

    #[test]
    fn test_unseeded_target_is_valid_hex() {
        let hex = generate(None).to_hex();
        assert_eq!(Colour::from_hex(&hex).unwrap().to_hex(), hex);
    }
}
