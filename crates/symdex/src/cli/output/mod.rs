//! Rendering and JSON serialization for CLI output.

use std::process::ExitCode;

use serde::Serialize;
pub use symdex_highlight::{dim, header, kind_label, rule, subheader, success, warning};
use symdex_highlight::Highlighter;
use symdex_query::{ResultLocation, SearchResult};

/// JSON output for a single query's results.
#[derive(Serialize)]
struct JsonQueryResults<'a> {
    /// The query as given.
    query: &'a str,
    /// Grouped results, best first.
    results: &'a [SearchResult],
}

/// JSON output for `symdex search`.
#[derive(Serialize)]
struct JsonSearchOutput<'a> {
    /// Results grouped by query.
    queries: Vec<JsonQueryResults<'a>>,
}

/// A query together with its results.
pub struct QueryOutput {
    /// The query as given.
    pub query: String,
    /// Grouped results, best first.
    pub results: Vec<SearchResult>,
}

/// Prints query results as pretty JSON.
pub fn print_json(outputs: &[QueryOutput]) -> ExitCode {
    let json_output = JsonSearchOutput {
        queries: outputs
            .iter()
            .map(|o| JsonQueryResults {
                query: &o.query,
                results: &o.results,
            })
            .collect(),
    };
    match serde_json::to_string_pretty(&json_output) {
        Ok(json_str) => {
            println!("{json_str}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: failed to serialize JSON: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Prints grouped results for one query.
pub fn print_results(results: &[SearchResult], highlighter: &Highlighter) {
    if results.is_empty() {
        println!("{}", dim("No results found."));
        return;
    }
    for result in results {
        print!("{}", format_result(result, highlighter));
    }
}

/// Formats one grouped result: a title line followed by one line per location.
pub fn format_result(result: &SearchResult, highlighter: &Highlighter) -> String {
    let mut out = format!(
        "{} {}\n",
        header(&result.display_name),
        kind_label(result.kind.as_str())
    );
    for location in &result.locations {
        out.push_str("  ");
        out.push_str(&format_location(location, highlighter));
        out.push('\n');
    }
    out
}

/// Formats a location as `url  scope`, marking external targets.
fn format_location(location: &ResultLocation, highlighter: &Highlighter) -> String {
    let mut line = location.url.clone();
    if let Some(context) = &location.context {
        line.push_str("  ");
        line.push_str(&highlighter.highlight_signature(context));
    }
    if location.external {
        line.push(' ');
        line.push_str(&dim("(external)"));
    }
    line
}

#[cfg(test)]
mod tests {
    use symdex_query::SymbolKind;

    use super::*;

    /// Removes ANSI escapes.
    fn plain(input: &str) -> String {
        let mut out = String::new();
        let mut in_escape = false;
        for ch in input.chars() {
            match (in_escape, ch) {
                (false, '\u{1b}') => in_escape = true,
                (true, 'm') => in_escape = false,
                (true, _) => {}
                (false, c) => out.push(c),
            }
        }
        out
    }

    #[test]
    fn formats_grouped_result() {
        let result = SearchResult {
            key: "tile".into(),
            display_name: "Tile".into(),
            kind: SymbolKind::Type,
            exact: true,
            locations: vec![
                ResultLocation {
                    url: "../classtson_1_1Tile.html".into(),
                    context: Some("tson::Tile".into()),
                    kind: SymbolKind::Type,
                    external: false,
                },
                ResultLocation {
                    url: "https://example.org/tile.html".into(),
                    context: None,
                    kind: SymbolKind::Other,
                    external: true,
                },
            ],
        };

        let text = plain(&format_result(&result, &Highlighter::new()));
        assert_eq!(
            text,
            "Tile [type]\n  ../classtson_1_1Tile.html  tson::Tile\n  https://example.org/tile.html (external)\n"
        );
    }
}
