//! Error types for flowstencil-renderer.

use thiserror::Error;

use flowstencil_core::RecordId;

/// A record's payload was requested as JSON but did not parse.
///
/// Deliberately a distinct type from [`RenderError`] so the router can route
/// the offending record to the `json_failure` edge specifically.
#[derive(Debug, Error)]
#[error("record {record} does not contain valid JSON content: {cause}")]
pub struct ContentParseError {
    /// Id of the offending record.
    pub record: RecordId,
    /// Human-readable cause from the JSON parser.
    pub cause: String,
}

/// All errors that can arise from the template engine.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The template source failed to compile. Surfaces at session start,
    /// never per record.
    #[error("template compilation error: {0}")]
    Compile(#[source] minijinja::Error),

    /// The engine failed while rendering a record's context.
    #[error("template render error: {0}")]
    Render(#[source] minijinja::Error),
}
