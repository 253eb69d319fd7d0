//! Implementation of `symdex ls`.

use std::process::ExitCode;

use comfy_table::{Cell, Table, presets::UTF8_FULL_CONDENSED};
use symdex_index::IndexEntry;

use crate::cli::{args::LsCommand, context::CommandContext, output::dim};

/// Lists every indexed entry, in original order.
pub fn run(ctx: &mut CommandContext, cmd: &LsCommand) -> ExitCode {
    let store = match ctx.store(&cmd.artifacts) {
        Ok(s) => s,
        Err(code) => return code,
    };

    let kinds = &cmd.kinds.kinds;
    let entries: Vec<&IndexEntry> = store
        .all()
        .filter(|e| kinds.is_empty() || kinds.contains(&e.kind))
        .collect();

    if entries.is_empty() {
        println!("{}", dim("No entries."));
        return ExitCode::SUCCESS;
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);

    table.set_header(vec!["Key", "Kind", "Name", "Locations"]);

    if cmd.long {
        for entry in &entries {
            let urls: Vec<&str> = entry.locations.iter().map(|l| l.url.as_str()).collect();
            table.add_row(vec![
                Cell::new(&entry.key),
                Cell::new(entry.kind),
                Cell::new(&entry.display_name),
                Cell::new(urls.join("\n")),
            ]);
        }
    } else {
        for entry in &entries {
            table.add_row(vec![
                Cell::new(&entry.key),
                Cell::new(entry.kind),
                Cell::new(&entry.display_name),
                Cell::new(entry.locations.len()),
            ]);
        }
    }

    println!("{table}");
    println!("{}", dim(&format!("{} entries", entries.len())));
    ExitCode::SUCCESS
}
