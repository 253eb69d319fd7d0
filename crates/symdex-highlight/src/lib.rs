//! Syntax highlighting and terminal styling for symdex output.
//!
//! Search results carry C++ scopes and signatures (`tson::Terrain::Terrain(const
//! nlohmann::json &json)`), and the `config` command prints TOML. This crate highlights both
//! for the terminal and provides the small set of ANSI styles used for headers, kind labels
//! and status lines.

#![warn(missing_docs)]

use syntect::{
    easy::HighlightLines,
    highlighting::Style,
    parsing::SyntaxSet,
    util::{LinesWithEndings, as_24_bit_terminal_escaped},
};
use two_face::{
    syntax::extra_newlines as extra_syntaxes,
    theme::{EmbeddedLazyThemeSet, EmbeddedThemeName, extra as extra_themes},
};

/// Syntax used for symbol scopes and signatures.
const SIGNATURE_SYNTAX: &str = "cpp";

/// A syntax highlighter producing 24-bit terminal escapes.
pub struct Highlighter {
    /// Language definitions, including the two-face extras (TOML among them).
    syntax_set: SyntaxSet,
    /// Available color themes.
    theme_set: EmbeddedLazyThemeSet,
    /// The theme in use.
    theme: EmbeddedThemeName,
}

impl Default for Highlighter {
    fn default() -> Self {
        Self::new()
    }
}

impl Highlighter {
    /// Creates a highlighter with the Dracula theme.
    pub fn new() -> Self {
        Self {
            syntax_set: extra_syntaxes(),
            theme_set: extra_themes(),
            theme: EmbeddedThemeName::Dracula,
        }
    }

    /// Highlights TOML content.
    pub fn highlight_toml(&self, content: &str) -> String {
        self.highlight(content, "toml")
    }

    /// Highlights a single-line symbol scope or signature.
    ///
    /// Unlike [`Highlighter::highlight`], the result carries no trailing newline so it can be
    /// embedded in a line of output.
    pub fn highlight_signature(&self, signature: &str) -> String {
        let line = signature.lines().next().unwrap_or_default();
        self.highlight(line, SIGNATURE_SYNTAX)
    }

    /// Highlights content with the named syntax (by extension or name).
    ///
    /// Unknown syntaxes fall back to plain text.
    pub fn highlight(&self, content: &str, syntax_name: &str) -> String {
        let syntax = self
            .syntax_set
            .find_syntax_by_extension(syntax_name)
            .or_else(|| self.syntax_set.find_syntax_by_name(syntax_name))
            .unwrap_or_else(|| self.syntax_set.find_syntax_plain_text());

        let theme = self.theme_set.get(self.theme);
        let mut highlighter = HighlightLines::new(syntax, theme);

        let mut output = String::new();
        for line in LinesWithEndings::from(content) {
            let ranges: Vec<(Style, &str)> = highlighter
                .highlight_line(line, &self.syntax_set)
                .unwrap_or_else(|_| vec![(Style::default(), line)]);
            output.push_str(&as_24_bit_terminal_escaped(&ranges[..], false));
        }
        output.push_str(colors::RESET);
        output
    }
}

/// ANSI escape codes.
pub mod colors {
    /// Bold text.
    pub const BOLD: &str = "\x1b[1m";
    /// Cyan text.
    pub const CYAN: &str = "\x1b[36m";
    /// Green text.
    pub const GREEN: &str = "\x1b[32m";
    /// Yellow text.
    pub const YELLOW: &str = "\x1b[33m";
    /// Red text.
    pub const RED: &str = "\x1b[31m";
    /// Magenta text.
    pub const MAGENTA: &str = "\x1b[35m";
    /// Blue text.
    pub const BLUE: &str = "\x1b[34m";
    /// Dim text.
    pub const DIM: &str = "\x1b[2m";
    /// Reset all formatting.
    pub const RESET: &str = "\x1b[0m";
}

/// Wraps `text` in the given style codes.
fn styled(codes: &[&str], text: &str) -> String {
    format!("{}{}{}", codes.concat(), text, colors::RESET)
}

/// Formats a header (bold cyan).
pub fn header(text: &str) -> String {
    styled(&[colors::BOLD, colors::CYAN], text)
}

/// Formats a subheader (bold).
pub fn subheader(text: &str) -> String {
    styled(&[colors::BOLD], text)
}

/// Formats secondary text (dim).
pub fn dim(text: &str) -> String {
    styled(&[colors::DIM], text)
}

/// Formats a success message (green).
pub fn success(text: &str) -> String {
    styled(&[colors::GREEN], text)
}

/// Formats a warning (yellow).
pub fn warning(text: &str) -> String {
    styled(&[colors::YELLOW], text)
}

/// Formats an error (red).
pub fn error(text: &str) -> String {
    styled(&[colors::RED], text)
}

/// Formats a symbol kind label, colored by kind name.
///
/// Unknown names are dimmed.
pub fn kind_label(kind: &str) -> String {
    let color = match kind {
        "type" => colors::YELLOW,
        "function" => colors::GREEN,
        "member" => colors::BLUE,
        "namespace" => colors::MAGENTA,
        "file" => colors::CYAN,
        _ => colors::DIM,
    };
    styled(&[color], &format!("[{kind}]"))
}

/// Returns a dimmed horizontal rule.
pub fn rule(width: usize) -> String {
    dim(&"\u{2500}".repeat(width))
}
