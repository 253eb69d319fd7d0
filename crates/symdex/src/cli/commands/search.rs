//! Implementation of `symdex search`.

use std::process::ExitCode;

use symdex_highlight::Highlighter;
use symdex_query::search_with;

use crate::cli::{
    args::SearchCommand,
    context::CommandContext,
    output::{QueryOutput, print_json, print_results, subheader},
};

/// Searches the index and prints grouped results for each query.
pub fn run(ctx: &mut CommandContext, cmd: &SearchCommand) -> ExitCode {
    let params = match ctx.search_params(&cmd.params) {
        Ok(p) => p,
        Err(code) => return code,
    };

    let store = match ctx.store(&cmd.artifacts) {
        Ok(s) => s,
        Err(code) => return code,
    };

    let mut outputs = Vec::with_capacity(cmd.queries.len());
    for query in &cmd.queries {
        match search_with(query, &store, &params) {
            Ok(results) => outputs.push(QueryOutput {
                query: query.clone(),
                results,
            }),
            Err(e) => {
                eprintln!("error: {e}");
                return ExitCode::FAILURE;
            }
        }
    }

    if cmd.json {
        return print_json(&outputs);
    }

    let highlighter = Highlighter::new();
    let show_headings = outputs.len() > 1;
    for (i, output) in outputs.iter().enumerate() {
        if show_headings {
            if i > 0 {
                println!();
            }
            println!("{}", subheader(&format!("{}:", output.query)));
        }
        print_results(&output.results, &highlighter);
    }

    ExitCode::SUCCESS
}
