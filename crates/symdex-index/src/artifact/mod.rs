//! Raw artifact parsing.
//!
//! An artifact is an array of records. Each record is `[key, group, group, ...]` and every
//! group is one of two layouts:
//!
//! - nested, as emitted by documentation generators:
//!   `[displayName, [url, flag, context], [url, flag, context], ...]`
//! - flat: `[displayName, url, context]`
//!
//! All groups of a record merge into a single [`IndexEntry`]. Validation is strict; the first
//! problem found aborts the whole artifact.

mod lexer;
mod literal;

use serde_json::Value;

use crate::{
    IndexEntry, Location,
    error::MalformedIndexError,
    escape::{decode_entities, decode_key},
};

/// Surface syntax of an artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactFormat {
    /// A bare JSON-style literal.
    Json,
    /// A script assigning the literal to a variable (`var searchData = [...];`).
    ///
    /// Keys in this format carry the generator's `_XX` escaping.
    Script,
}

/// Parses a raw artifact into validated entries, in record order.
pub fn parse_artifact(raw: &str) -> Result<(Vec<IndexEntry>, ArtifactFormat), MalformedIndexError> {
    let literal = literal::parse(raw)?;
    let Value::Array(records) = literal.value else {
        return Err(MalformedIndexError::NotAnArray);
    };

    let entries = records
        .iter()
        .enumerate()
        .map(|(index, record)| RecordReader::new(index, literal.format).read(record))
        .collect::<Result<Vec<_>, _>>()?;

    Ok((entries, literal.format))
}

/// Converts one record value into an entry.
struct RecordReader {
    /// Zero-based record index, for error reporting.
    record: usize,
    /// Syntax of the artifact the record came from.
    format: ArtifactFormat,
}

impl RecordReader {
    /// Creates a reader for the record at `record`.
    fn new(record: usize, format: ArtifactFormat) -> Self {
        Self { record, format }
    }

    /// Reads and validates a record.
    fn read(&self, value: &Value) -> Result<IndexEntry, MalformedIndexError> {
        let Value::Array(fields) = value else {
            return Err(MalformedIndexError::RecordNotArray {
                record: self.record,
            });
        };

        let key = self.read_key(fields.first())?;

        let mut display_name = None;
        let mut locations = Vec::new();
        for group in &fields[1..] {
            let name = self.read_group(group, &key, &mut locations)?;
            display_name.get_or_insert(name);
        }

        let Some(display_name) = display_name else {
            return Err(MalformedIndexError::NoLocations {
                record: self.record,
                key,
            });
        };
        if locations.is_empty() {
            return Err(MalformedIndexError::NoLocations {
                record: self.record,
                key,
            });
        }

        Ok(IndexEntry::new(key, display_name, locations))
    }

    /// Reads and normalizes the record key.
    fn read_key(&self, value: Option<&Value>) -> Result<String, MalformedIndexError> {
        let raw = match value {
            Some(Value::String(s)) => s,
            None | Some(Value::Null) => {
                return Err(MalformedIndexError::MissingKey {
                    record: self.record,
                });
            }
            Some(_) => return Err(self.invalid("key", "a string")),
        };

        let decoded = match self.format {
            ArtifactFormat::Script => decode_key(raw)
                .ok_or_else(|| self.invalid("key", "valid UTF-8 once unescaped"))?,
            ArtifactFormat::Json => raw.clone(),
        };
        let key = decoded.trim().to_lowercase();

        if key.is_empty() {
            return Err(MalformedIndexError::MissingKey {
                record: self.record,
            });
        }
        Ok(key)
    }

    /// Reads one location group, appending its locations. Returns the group's display name.
    fn read_group(
        &self,
        value: &Value,
        key: &str,
        locations: &mut Vec<Location>,
    ) -> Result<String, MalformedIndexError> {
        let Value::Array(items) = value else {
            return Err(self.invalid("location group", "an array"));
        };

        let display_name = match items.first() {
            Some(Value::String(s)) if !s.trim().is_empty() => decode_entities(s),
            Some(Value::String(_) | Value::Null) | None => {
                return Err(MalformedIndexError::MissingDisplayName {
                    record: self.record,
                    key: key.to_string(),
                });
            }
            Some(_) => return Err(self.invalid("display name", "a string")),
        };

        match items.get(1) {
            None => {}
            Some(Value::String(_)) => {
                if items.len() > 3 {
                    return Err(self.invalid("flat location", "[name, url, context]"));
                }
                let location = self.read_location(&items[1], None, items.get(2), key, locations.len())?;
                locations.push(location);
            }
            Some(_) => {
                for item in &items[1..] {
                    let location = self.read_nested_location(item, key, locations.len())?;
                    locations.push(location);
                }
            }
        }

        Ok(display_name)
    }

    /// Reads a nested `[url, flag, context]` location.
    fn read_nested_location(
        &self,
        value: &Value,
        key: &str,
        index: usize,
    ) -> Result<Location, MalformedIndexError> {
        let Value::Array(parts) = value else {
            return Err(self.invalid("location", "an array"));
        };
        if parts.is_empty() || parts.len() > 3 {
            return Err(self.invalid("location", "[url, flag, context]"));
        }
        self.read_location(&parts[0], parts.get(1), parts.get(2), key, index)
    }

    /// Builds a location from its url, optional link flag and optional context.
    fn read_location(
        &self,
        url: &Value,
        flag: Option<&Value>,
        context: Option<&Value>,
        key: &str,
        index: usize,
    ) -> Result<Location, MalformedIndexError> {
        let Value::String(url) = url else {
            return Err(self.invalid("url", "a string"));
        };
        if url.trim().is_empty() {
            return Err(MalformedIndexError::EmptyUrl {
                record: self.record,
                key: key.to_string(),
                location: index,
            });
        }

        let external = match flag {
            None | Some(Value::Null) => false,
            Some(Value::Number(n)) => n.as_i64() == Some(0),
            Some(Value::Bool(b)) => !b,
            Some(_) => return Err(self.invalid("link flag", "a number")),
        };

        let context = match context {
            None | Some(Value::Null) => None,
            Some(Value::String(s)) => Some(decode_entities(s)),
            Some(_) => return Err(self.invalid("context", "a string or null")),
        };

        Ok(Location::new(url.as_str(), context).with_external(external))
    }

    /// Builds an invalid-field error for this record.
    fn invalid(&self, field: &'static str, expected: &'static str) -> MalformedIndexError {
        MalformedIndexError::InvalidField {
            record: self.record,
            field,
            expected,
        }
    }
}
