//! Command-line interface for `symdex`.

use std::process::ExitCode;

use clap::Parser;
use symdex::cli::{
    CommandContext,
    args::{Cli, Commands},
    commands, logging,
};

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    // `init` must work even when an existing config file is broken.
    let ctx = match cli.command {
        Commands::Init(_) => CommandContext::load_cwd_only(),
        _ => CommandContext::load(),
    };

    match ctx {
        Ok(mut ctx) => commands::run(cli.command, &mut ctx),
        Err(code) => code,
    }
}
