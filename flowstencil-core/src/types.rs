//! Domain types for flowstencil records and routing.
//!
//! Attribute mappings are `BTreeMap<String, String>`: deterministic key
//! order regardless of insertion sequence, which keeps template contexts
//! stable across runs.

use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, Utc};
use uuid::Uuid;

// ---------------------------------------------------------------------------
// Newtypes
// ---------------------------------------------------------------------------

/// Stable unique identifier of a [`Record`], assigned at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RecordId(pub Uuid);

impl RecordId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for RecordId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

// ---------------------------------------------------------------------------
// Routing edges
// ---------------------------------------------------------------------------

/// Terminal routing destination of a processed record.
///
/// Exactly one edge receives each record per invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Edge {
    /// Rendered output persisted; the record carries the output path.
    Success,
    /// Rendered output could not be persisted.
    Failure,
    /// Record content was requested as JSON but did not parse.
    JsonFailure,
}

impl Edge {
    /// All edges in a stable order.
    pub fn all() -> &'static [Edge] {
        &[Edge::Success, Edge::Failure, Edge::JsonFailure]
    }

    /// Wire name of the edge, as exposed to the host pipeline.
    pub fn name(&self) -> &'static str {
        match self {
            Edge::Success => "success",
            Edge::Failure => "failure",
            Edge::JsonFailure => "json_failure",
        }
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ---------------------------------------------------------------------------
// Record
// ---------------------------------------------------------------------------

/// One unit of data flowing through the pipeline: a string-keyed attribute
/// mapping plus an opaque byte payload.
///
/// Records are immutable on input. Attribute additions go through
/// [`Record::with_attribute`], which produces a new record value; the id and
/// creation timestamp survive the copy.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    id: RecordId,
    created_at: DateTime<Utc>,
    attributes: BTreeMap<String, String>,
    payload: Vec<u8>,
}

impl Record {
    /// A fresh record with no attributes and an empty payload.
    pub fn new() -> Self {
        Record {
            id: RecordId::new(),
            created_at: Utc::now(),
            attributes: BTreeMap::new(),
            payload: Vec::new(),
        }
    }

    pub fn id(&self) -> RecordId {
        self.id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn attributes(&self) -> &BTreeMap<String, String> {
        &self.attributes
    }

    /// Value of a single attribute, if set.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    pub fn payload(&self) -> &[u8] {
        &self.payload
    }

    /// Payload size in bytes.
    pub fn payload_size(&self) -> usize {
        self.payload.len()
    }

    /// A new record with one attribute added (or replaced). Identity and
    /// payload are carried over unchanged.
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Record {
        self.attributes.insert(name.into(), value.into());
        self
    }

    /// A new record with the payload replaced. Identity and attributes are
    /// carried over unchanged.
    pub fn with_payload(mut self, payload: impl Into<Vec<u8>>) -> Record {
        self.payload = payload.into();
        self
    }
}

impl Default for Record {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
