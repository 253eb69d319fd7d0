//! Configuration templates for `symdex init`.
//!
//! Templates ship as valid TOML files and are written out commented, so a fresh config changes
//! nothing until the user opts in. When `init` finds generated search data, the local template
//! gets a live `[artifacts]` section pointing at it.

/// Local configuration template (valid TOML).
const LOCAL_TEMPLATE: &str = include_str!("../templates/config.toml");

/// Global configuration template (valid TOML).
const GLOBAL_TEMPLATE: &str = include_str!("../templates/config-global.toml");

/// Returns the commented local configuration template.
pub fn local_template() -> String {
    local_template_for(None)
}

/// Returns the local template, with an active artifact directory if one is given.
///
/// `artifact_dir` is written as-is and resolves relative to the config file.
pub fn local_template_for(artifact_dir: Option<&str>) -> String {
    let mut out = comment_out(LOCAL_TEMPLATE);
    if let Some(dir) = artifact_dir {
        out.push_str("\n[artifacts]\n");
        out.push_str(&format!("dir = {}\n", toml_string(dir)));
    }
    out
}

/// Returns the commented global configuration template.
pub fn global_template() -> String {
    comment_out(GLOBAL_TEMPLATE)
}

/// Prefixes every non-empty, non-comment line with `# `.
fn comment_out(template: &str) -> String {
    template
        .lines()
        .map(|line| {
            if line.is_empty() || line.starts_with('#') {
                format!("{line}\n")
            } else {
                format!("# {line}\n")
            }
        })
        .collect()
}

/// Quotes a value as a TOML basic string.
fn toml_string(value: &str) -> String {
    toml::Value::String(value.to_string()).to_string()
}
