//! # flowstencil-harness
//!
//! In-memory host for exercising a [`TemplateFileStep`] outside a real
//! pipeline: [`FlowSession`] implements the session interface with a FIFO
//! input queue and per-edge transfer lists, and [`TestRunner`] bundles a
//! step with a session for scenario tests.

use std::collections::VecDeque;

use flowstencil_core::{Edge, ProcessSession, Record};
use flowstencil_processor::TemplateFileStep;

// ---------------------------------------------------------------------------
// FlowSession
// ---------------------------------------------------------------------------

/// In-memory [`ProcessSession`]: records are taken in enqueue order and
/// collected per edge in transfer order.
#[derive(Debug, Default)]
pub struct FlowSession {
    queue: VecDeque<Record>,
    success: Vec<Record>,
    failure: Vec<Record>,
    json_failure: Vec<Record>,
}

impl FlowSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a record for the next trigger.
    pub fn enqueue(&mut self, record: Record) {
        self.queue.push_back(record);
    }

    /// Records transferred to `edge`, in transfer order.
    pub fn records_for(&self, edge: Edge) -> &[Record] {
        match edge {
            Edge::Success => &self.success,
            Edge::Failure => &self.failure,
            Edge::JsonFailure => &self.json_failure,
        }
    }

    /// Number of records transferred to `edge`.
    pub fn transfer_count(&self, edge: Edge) -> usize {
        self.records_for(edge).len()
    }

    /// Number of records still waiting to be taken.
    pub fn queued(&self) -> usize {
        self.queue.len()
    }
}

impl ProcessSession for FlowSession {
    fn take(&mut self) -> Option<Record> {
        self.queue.pop_front()
    }

    fn transfer(&mut self, record: Record, edge: Edge) {
        match edge {
            Edge::Success => self.success.push(record),
            Edge::Failure => self.failure.push(record),
            Edge::JsonFailure => self.json_failure.push(record),
        }
    }
}

// ---------------------------------------------------------------------------
// TestRunner
// ---------------------------------------------------------------------------

/// A step bundled with a [`FlowSession`]: enqueue records, run triggers,
/// assert on edges.
pub struct TestRunner {
    step: TemplateFileStep,
    session: FlowSession,
}

impl TestRunner {
    pub fn new(step: TemplateFileStep) -> Self {
        TestRunner {
            step,
            session: FlowSession::new(),
        }
    }

    pub fn enqueue(&mut self, record: Record) {
        self.session.enqueue(record);
    }

    /// Trigger the step once. An empty queue is a no-op, like a host
    /// invoking the step with nothing to do.
    pub fn run(&mut self) {
        self.step.trigger(&mut self.session);
    }

    /// Trigger until the input queue is drained.
    pub fn run_to_completion(&mut self) {
        while self.session.queued() > 0 {
            self.run();
        }
    }

    pub fn records_for(&self, edge: Edge) -> &[Record] {
        self.session.records_for(edge)
    }

    pub fn transfer_count(&self, edge: Edge) -> usize {
        self.session.transfer_count(edge)
    }

    pub fn step(&self) -> &TemplateFileStep {
        &self.step
    }
}

/// Initialise an env-filtered fmt tracing subscriber for tests. Safe to call
/// more than once; later calls are no-ops.
pub fn init_test_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = fmt().with_env_filter(filter).with_target(false).try_init();
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
