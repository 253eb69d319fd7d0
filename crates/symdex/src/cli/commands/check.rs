//! Implementation of `symdex check`.

use std::{collections::BTreeMap, process::ExitCode, slice};

use symdex_config::{ConfigWarning, discover_config_files};
use symdex_index::{IndexStore, SymbolKind};

use crate::cli::{
    args::CheckCommand,
    context::{CommandContext, report_search_disabled},
    output::{dim, subheader, success, warning},
};

/// Loads every artifact and reports what it contains.
///
/// Exits with failure if any artifact is malformed, since search would be disabled.
pub fn run(ctx: &CommandContext, cmd: &CheckCommand) -> ExitCode {
    let explicit = !cmd.artifacts.artifacts.is_empty();

    if !explicit {
        let config_files = discover_config_files(&ctx.cwd);
        println!("{}", subheader("Config files:"));
        if config_files.is_empty() {
            println!("   {}", dim("(none found)"));
        }
        for path in &config_files {
            println!("   {}", path.display());
        }
        println!();
    }

    let paths = match ctx.artifact_paths(&cmd.artifacts) {
        Ok(p) => p,
        Err(code) => return code,
    };

    println!("{}", subheader("Artifacts:"));
    let mut kind_totals: BTreeMap<SymbolKind, usize> = BTreeMap::new();
    let mut total = 0;
    for path in &paths {
        let store = match IndexStore::load_files(slice::from_ref(path)) {
            Ok(store) => store,
            Err(e) => {
                println!("   {} {}", path.display(), warning("malformed"));
                report_search_disabled(&e);
                return ExitCode::FAILURE;
            }
        };
        println!(
            "   {} {}",
            path.display(),
            dim(&format!("({} entries)", store.len()))
        );
        for (kind, count) in store.kind_counts() {
            *kind_totals.entry(kind).or_default() += count;
        }
        total += store.len();
    }
    println!();

    println!("{}", subheader(&format!("Entries: {total}")));
    for (kind, count) in &kind_totals {
        println!("   {kind:<10} {count}");
    }
    println!();

    if !explicit {
        print_warnings(&ctx.config.validate());
    }

    println!("{}", success("Search ready."));
    ExitCode::SUCCESS
}

/// Prints configuration warnings, if any.
fn print_warnings(warnings: &[ConfigWarning]) {
    if warnings.is_empty() {
        return;
    }
    println!("{}", subheader(&format!("Warnings ({}):", warnings.len())));
    for w in warnings {
        println!("   {}", warning(&w.to_string()));
    }
    println!();
}
