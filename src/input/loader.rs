use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, warn};

use crate::input::reference::TableReference;

/// Input path read when none is given on the command line.
pub const DEFAULT_INPUT_PATH: &str = "test_result.json";

/// Fatal failures while reading the extractor output.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The input file does not exist.
    #[error("input file not found: {}", path.display())]
    InputNotFound {
        /// Path that was looked up.
        path: PathBuf,
    },
    /// The file exists but is not a sequence of table-reference records.
    #[error("malformed input in {}: {reason}", path.display())]
    MalformedInput {
        /// Path of the offending file.
        path: PathBuf,
        /// Decoder or validation message.
        reason: String,
    },
    /// The file exists but could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Unreadable {
        /// Path of the unreadable file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

/// One record as serialized by the extractor (`TableInfo`).
#[derive(Debug, Deserialize)]
struct RawRecord {
    #[serde(rename = "DBName", alias = "database_name", default)]
    database_name: Option<String>,
    #[serde(rename = "TBName", alias = "table_name")]
    table_name: String,
}

/// Read and decode the extractor output at `path`.
pub fn load_references(path: &Path) -> Result<Vec<TableReference>, LoadError> {
    let content = std::fs::read(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => LoadError::InputNotFound {
            path: path.to_path_buf(),
        },
        _ => LoadError::Unreadable {
            path: path.to_path_buf(),
            source,
        },
    })?;

    let references = parse_references(&content).map_err(|reason| LoadError::MalformedInput {
        path: path.to_path_buf(),
        reason,
    })?;

    if references.is_empty() {
        warn!(path = %path.display(), "input contains no table references");
    } else {
        debug!(path = %path.display(), records = references.len(), "loaded table references");
    }
    Ok(references)
}

/// Decode a JSON array of extractor records.
///
/// A top-level `null` decodes to an empty sequence, matching how the
/// extractor serializes an empty result. Bytes that are not UTF-8 are a
/// decode error like any other malformed JSON.
pub fn parse_references(json: impl AsRef<[u8]>) -> Result<Vec<TableReference>, String> {
    let raw: Option<Vec<RawRecord>> = serde_json::from_slice(json.as_ref())
        .map_err(|e| format!("invalid table reference JSON: {e}"))?;

    raw.unwrap_or_default()
        .into_iter()
        .enumerate()
        .map(|(index, record)| {
            if record.table_name.is_empty() {
                return Err(format!("record {index} has an empty table name"));
            }
            Ok(TableReference::new(
                record.database_name.as_deref(),
                record.table_name,
            ))
        })
        .collect()
}
