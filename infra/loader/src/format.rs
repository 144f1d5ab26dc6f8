//! Parsing of bundle documents into flat entry maps.
//!
//! Nested tables flatten into dotted keys (`menu.file.open`). Arrays become
//! [`ResourceValue::List`] and may only hold scalars or further arrays.

use crate::error::{LoaderError, LoaderErrorExt};
use lingo_domain::{BundleEntries, ResourceValue};
use std::path::Path;

/// Supported document formats, chosen by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Json,
    Toml,
}

impl Format {
    /// Detects the format from the extension of `path` (case-insensitive).
    ///
    /// # Errors
    /// Returns [`LoaderError::UnsupportedFormat`] for any other extension.
    pub fn from_path(path: &Path) -> Result<Self, LoaderError> {
        let extension = path.extension().and_then(|ext| ext.to_str()).map(str::to_ascii_lowercase);

        match extension.as_deref() {
            Some("json") => Ok(Self::Json),
            Some("toml") => Ok(Self::Toml),
            _ => Err(LoaderError::UnsupportedFormat {
                message: path.display().to_string().into(),
                context: Some("Expected a .json or .toml bundle".into()),
            }),
        }
    }

    /// Parses `text` into flattened entries.
    ///
    /// # Errors
    /// Syntax errors surface as [`LoaderError::Json`] / [`LoaderError::Toml`];
    /// structural problems (non-table root, `null`, tables inside arrays,
    /// colliding flattened keys) as [`LoaderError::Malformed`].
    pub fn parse(self, text: &str) -> Result<BundleEntries, LoaderError> {
        let mut entries = BundleEntries::default();
        match self {
            Self::Json => {
                let document: serde_json::Value =
                    serde_json::from_str(text).context("Failed to parse bundle")?;
                let serde_json::Value::Object(map) = document else {
                    return Err(malformed("root", "top level must be an object"));
                };
                flatten_json("", map, &mut entries)?;
            },
            Self::Toml => {
                let table: toml::Table = toml::from_str(text).context("Failed to parse bundle")?;
                flatten_toml("", table, &mut entries)?;
            },
        }
        Ok(entries)
    }
}

fn malformed(key: &str, reason: &'static str) -> LoaderError {
    LoaderError::Malformed { message: key.to_owned().into(), context: Some(reason.into()) }
}

fn join(prefix: &str, key: &str) -> String {
    if prefix.is_empty() { key.to_owned() } else { format!("{prefix}.{key}") }
}

fn insert(entries: &mut BundleEntries, key: String, value: ResourceValue) -> Result<(), LoaderError> {
    if entries.contains_key(&key) {
        return Err(malformed(&key, "duplicate key after flattening"));
    }
    entries.insert(key, value);
    Ok(())
}

fn flatten_json(
    prefix: &str,
    map: serde_json::Map<String, serde_json::Value>,
    entries: &mut BundleEntries,
) -> Result<(), LoaderError> {
    for (key, value) in map {
        let key = join(prefix, &key);
        match value {
            serde_json::Value::Object(nested) => flatten_json(&key, nested, entries)?,
            other => {
                let value = json_value(&key, other)?;
                insert(entries, key, value)?;
            },
        }
    }
    Ok(())
}

fn json_value(key: &str, value: serde_json::Value) -> Result<ResourceValue, LoaderError> {
    use serde_json::Value;

    match value {
        Value::Bool(flag) => Ok(ResourceValue::Bool(flag)),
        Value::Number(number) => number
            .as_i64()
            .map(ResourceValue::Integer)
            .or_else(|| number.as_f64().map(ResourceValue::Float))
            .ok_or_else(|| malformed(key, "number is out of range")),
        Value::String(text) => Ok(ResourceValue::Text(text)),
        Value::Array(items) => items
            .into_iter()
            .map(|item| json_value(key, item))
            .collect::<Result<Vec<_>, _>>()
            .map(ResourceValue::List),
        Value::Null => Err(malformed(key, "null values are not allowed")),
        Value::Object(_) => Err(malformed(key, "tables are not allowed inside arrays")),
    }
}

fn flatten_toml(prefix: &str, table: toml::Table, entries: &mut BundleEntries) -> Result<(), LoaderError> {
    for (key, value) in table {
        let key = join(prefix, &key);
        match value {
            toml::Value::Table(nested) => flatten_toml(&key, nested, entries)?,
            other => {
                let value = toml_value(&key, other)?;
                insert(entries, key, value)?;
            },
        }
    }
    Ok(())
}

fn toml_value(key: &str, value: toml::Value) -> Result<ResourceValue, LoaderError> {
    use toml::Value;

    match value {
        Value::Boolean(flag) => Ok(ResourceValue::Bool(flag)),
        Value::Integer(number) => Ok(ResourceValue::Integer(number)),
        Value::Float(number) => Ok(ResourceValue::Float(number)),
        Value::String(text) => Ok(ResourceValue::Text(text)),
        Value::Datetime(datetime) => Ok(ResourceValue::Text(datetime.to_string())),
        Value::Array(items) => items
            .into_iter()
            .map(|item| toml_value(key, item))
            .collect::<Result<Vec<_>, _>>()
            .map(ResourceValue::List),
        Value::Table(_) => Err(malformed(key, "tables are not allowed inside arrays")),
    }
}
