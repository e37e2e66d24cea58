//! Error types for flowstencil-processor.

use std::path::PathBuf;

use thiserror::Error;

use flowstencil_renderer::RenderError;

/// Session-start configuration failure. Fatal before any record is
/// processed; never a per-record outcome.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The template source is missing or empty.
    #[error("template source is required and must be non-empty")]
    MissingTemplate,

    /// The template source failed to compile.
    #[error("invalid template: {0}")]
    Template(#[from] RenderError),

    /// A string property could not be coerced to a boolean.
    #[error("property `{key}` must be `true` or `false`, got `{value}`")]
    InvalidBool { key: String, value: String },

    /// A property key that is not part of the configuration surface.
    #[error("unknown property `{key}`")]
    UnknownProperty { key: String },
}

/// Failure on the render-and-persist path, with annotated path where one
/// exists. Recovered locally by routing the record to the `failure` edge.
#[derive(Debug, Error)]
pub enum WriteError {
    /// No unique output file could be allocated in the output directory.
    #[error("could not create an output file in {dir}: {source}")]
    Create {
        dir: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Writing or syncing the rendered content failed.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The completed file could not be persisted at its final path.
    #[error("could not persist output file at {path}: {source}")]
    Persist {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The engine failed while rendering the record's context. Cannot occur
    /// for a well-formed context once the template compiled; shares the
    /// write-failure route when it does.
    #[error(transparent)]
    Render(#[from] RenderError),
}
