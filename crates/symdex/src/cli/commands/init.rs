//! Implementation of `symdex init`.

use std::{fs, path::PathBuf, process::ExitCode};

use symdex_config::{
    CONFIG_FILENAME, detect_search_dir, global_config_path, global_template, local_template_for,
};
use symdex_highlight::Highlighter;

use crate::cli::{
    args::InitCommand,
    context::CommandContext,
    output::{dim, subheader},
};

/// Writes a `.symdex.toml` template.
///
/// A local config is pointed at the project's generated search directory when one is found.
pub fn run(ctx: &CommandContext, cmd: &InitCommand) -> ExitCode {
    let Some((config_path, global)) = target(ctx, cmd.global) else {
        eprintln!("error: could not determine home directory");
        return ExitCode::FAILURE;
    };

    if config_path.exists() && !cmd.force {
        eprintln!(
            "error: configuration file already exists: {}",
            config_path.display()
        );
        eprintln!("use --force to overwrite");
        return ExitCode::FAILURE;
    }

    let detected = (!global).then(|| detect_search_dir(&ctx.cwd)).flatten();
    let template = if global {
        global_template()
    } else {
        local_template_for(detected)
    };

    if let Err(e) = fs::write(&config_path, &template) {
        eprintln!("error: failed to write {}: {e}", config_path.display());
        return ExitCode::FAILURE;
    }

    println!("Created {}", config_path.display());
    match detected {
        Some(dir) => println!("{}", dim(&format!("Using search data in {dir}"))),
        None if !global => println!(
            "{}",
            dim("No generated search data found; set [artifacts] dir to enable search.")
        ),
        None => {}
    }
    println!();
    println!("{}", subheader("Configuration written:"));
    print!("{}", Highlighter::new().highlight_toml(&template));

    ExitCode::SUCCESS
}

/// Returns the config path to write and whether it is the global one.
///
/// Running in the home directory always targets the global config.
fn target(ctx: &CommandContext, global: bool) -> Option<(PathBuf, bool)> {
    let global_path = global_config_path();
    let in_home = global_path
        .as_deref()
        .and_then(|p| p.parent())
        .is_some_and(|home| home == ctx.cwd);

    if global || in_home {
        global_path.map(|p| (p, true))
    } else {
        Some((ctx.cwd.join(CONFIG_FILENAME), false))
    }
}
