//! Implementation of `symdex config`.

use std::process::ExitCode;

use symdex_highlight::Highlighter;

use crate::cli::{context::CommandContext, output::{dim, rule}};

/// Prints the merged settings, framed by rules, and where the nearest config lives.
pub fn run(ctx: &CommandContext) -> ExitCode {
    let toml = match ctx.config.settings_to_toml() {
        Ok(toml) => toml,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };
    match &ctx.config.config_root {
        Some(root) => println!("{}", dim(&format!("nearest config: {}", root.display()))),
        None => println!("{}", dim("no config files found, showing defaults")),
    }
    println!("{}", rule(40));
    print!("{}", Highlighter::new().highlight_toml(&toml));
    println!("{}", rule(40));
    ExitCode::SUCCESS
}
