//! # flowstencil-processor
//!
//! The template-to-file pipeline step: build a rendering context from a
//! record, render the session template, persist the output to a uniquely
//! named file, and route the record by outcome (`success` / `failure` /
//! `json_failure`).

pub mod config;
pub mod error;
pub mod step;
pub mod writer;

pub use config::TemplateFileConfig;
pub use error::{ConfigError, WriteError};
pub use step::{Outcome, TemplateFileStep};
pub use writer::OutputWriter;
