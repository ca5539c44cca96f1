//! buildlog
//!
//! Streaming translator from an agent's stream-json build session to a
//! human-readable, line-oriented log.
//!
//! The pipeline is `source` (line reader) → `interpreter` (decode with
//! `parser`, render, update counters) → `sink` (line emitter), driven by
//! [`pipeline::run`].

pub mod config;
pub mod interpreter;
pub mod logging;
pub mod model;
pub mod parser;
pub mod pipeline;
pub mod sink;
pub mod source;

pub use pipeline::{run, run_stdio, run_with, RunSummary};
