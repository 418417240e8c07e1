use clap::Parser;
use miette::Result;
use swatch::cli::{self, Cli, Context};
use swatch::logging::{init_logging, resolve_level};
use swatch::output::Printer;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let printer = Printer::new();

    // Config loading logs, so start with the flag/env level and refine after.
    let logging = init_logging(resolve_level(cli.verbose, None))?;
    let config = cli::load_config(&cli, &printer)?;
    logging.set_level(resolve_level(cli.verbose, config.log_level.as_deref()))?;

    let ctx = Context::new(&config, printer)?;
    cli::run(cli.command, &ctx)?;

    Ok(())
}
