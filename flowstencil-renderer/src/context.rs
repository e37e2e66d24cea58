//! Template context — the rendering payload built from one record.

use std::collections::BTreeMap;

use serde::Serialize;

use flowstencil_core::Record;

use crate::error::ContentParseError;

/// Rendering payload exposed to the template.
///
/// Serializes with exactly the key `attributes` and, when present,
/// `content`. An absent `content` is omitted entirely (no key, not null), so
/// templates referencing `content.*` fall through to the engine's
/// missing-path rule instead of seeing an empty value.
#[derive(Debug, Clone, Serialize)]
pub struct TemplateContext {
    /// The record's attribute mapping, values verbatim strings.
    pub attributes: BTreeMap<String, String>,
    /// Parsed JSON payload. Present iff JSON parsing is enabled and the
    /// payload is non-empty.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<serde_json::Value>,
}

impl TemplateContext {
    /// Build the context for one record.
    ///
    /// A zero-length payload with JSON parsing enabled is not a parse
    /// error; parsing is never attempted on empty input and `content` is
    /// simply absent.
    pub fn build(record: &Record, parse_json_content: bool) -> Result<Self, ContentParseError> {
        let content = if parse_json_content && record.payload_size() > 0 {
            Some(parse_content(record)?)
        } else {
            None
        };
        Ok(TemplateContext {
            attributes: record.attributes().clone(),
            content,
        })
    }
}

/// Parse a record's payload into a generic JSON value tree.
///
/// Pure function of the payload bytes. Callers must not invoke this on an
/// empty payload.
pub fn parse_content(record: &Record) -> Result<serde_json::Value, ContentParseError> {
    serde_json::from_slice(record.payload()).map_err(|e| ContentParseError {
        record: record.id(),
        cause: e.to_string(),
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
