//! The template-to-file step — context build, render, persist, route.
//!
//! Single pass per record, no retries, no backward transitions:
//! context-build failure routes to `json_failure`, render/persist failure to
//! `failure`, and success stamps the output path and routes to `success`.

use std::path::PathBuf;

use flowstencil_core::{Edge, ProcessSession, Record};
use flowstencil_renderer::{ContentParseError, TemplateContext, TemplateEngine};

use crate::config::TemplateFileConfig;
use crate::error::{ConfigError, WriteError};
use crate::writer::OutputWriter;

// ---------------------------------------------------------------------------
// Outcome
// ---------------------------------------------------------------------------

/// Terminal result of processing one record. Exactly one per invocation.
#[derive(Debug)]
pub enum Outcome {
    /// Rendered text persisted; `path` was stamped onto the record.
    Success { path: PathBuf },
    /// The payload was requested as JSON but did not parse; record routed
    /// unchanged.
    ContentParseFailure { cause: ContentParseError },
    /// The rendered text could not be persisted; record routed unchanged.
    WriteFailure { cause: WriteError },
}

impl Outcome {
    /// Edge that receives the record for this outcome.
    pub fn edge(&self) -> Edge {
        match self {
            Outcome::Success { .. } => Edge::Success,
            Outcome::ContentParseFailure { .. } => Edge::JsonFailure,
            Outcome::WriteFailure { .. } => Edge::Failure,
        }
    }
}

// ---------------------------------------------------------------------------
// TemplateFileStep
// ---------------------------------------------------------------------------

/// One record-transformation step: render the session template against a
/// record's context and persist the output to a uniquely named file.
///
/// Construct once per processing session and share across invocations. The
/// engine and writer are session-scoped services; [`TemplateFileStep::process`]
/// takes `&self` and is safe to call concurrently, one in-flight record per
/// caller.
#[derive(Debug)]
pub struct TemplateFileStep {
    config: TemplateFileConfig,
    engine: TemplateEngine,
    writer: OutputWriter,
}

impl TemplateFileStep {
    /// Validate `config` and compile its template.
    ///
    /// A missing or syntactically invalid template fails here, before any
    /// record is processed. Output files go to the process-wide temporary
    /// directory.
    pub fn new(config: TemplateFileConfig) -> Result<Self, ConfigError> {
        Self::with_writer(config, OutputWriter::new())
    }

    /// Like [`TemplateFileStep::new`] with an explicit writer; used in tests
    /// to scope output files to a private directory.
    pub fn with_writer(
        config: TemplateFileConfig,
        writer: OutputWriter,
    ) -> Result<Self, ConfigError> {
        if config.template.is_empty() {
            return Err(ConfigError::MissingTemplate);
        }
        let engine = TemplateEngine::new(&config.template)?;
        Ok(TemplateFileStep {
            config,
            engine,
            writer,
        })
    }

    pub fn config(&self) -> &TemplateFileConfig {
        &self.config
    }

    /// Run one invocation against the host session.
    ///
    /// A session with no record queued is a no-op; otherwise the record is
    /// processed and handed to exactly one edge.
    pub fn trigger(&self, session: &mut dyn ProcessSession) {
        let Some(record) = session.take() else {
            return;
        };
        let (record, outcome) = self.process(record);
        session.transfer(record, outcome.edge());
    }

    /// Run the context-build → render → persist pass for one record.
    ///
    /// Returns the record to route together with its terminal outcome. The
    /// record is stamped with the output path attribute only on success; on
    /// either failure it is returned unchanged.
    pub fn process(&self, record: Record) -> (Record, Outcome) {
        let context = match TemplateContext::build(&record, self.config.parse_json_content) {
            Ok(context) => context,
            Err(cause) => {
                tracing::error!("{cause}");
                return (record, Outcome::ContentParseFailure { cause });
            }
        };

        let path = match self.render_and_write(&context) {
            Ok(path) => path,
            Err(cause) => {
                tracing::error!("record {}: {cause}", record.id());
                return (record, Outcome::WriteFailure { cause });
            }
        };

        tracing::debug!("record {}: rendered output at {}", record.id(), path.display());
        let record = record.with_attribute(
            self.config.output_path_attribute.as_str(),
            path.display().to_string(),
        );
        (record, Outcome::Success { path })
    }

    fn render_and_write(&self, context: &TemplateContext) -> Result<PathBuf, WriteError> {
        let rendered = self.engine.render(context)?;
        self.writer
            .create_and_write(&self.config.file_prefix, &self.config.file_suffix, &rendered)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
