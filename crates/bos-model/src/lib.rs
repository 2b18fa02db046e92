//! Core types for Boolean Optimizer Studio.
//!
//! This crate is the UI-free half of the application: the wire contract with
//! the optimization service, input validation, the projection of a service
//! response into typed view fragments, and the truth-table CSV exporter.
//!
//! # Module Organization
//!
//! - [`method`]: the simplification method selector and its variable limits
//! - [`request`]: the request body posted to the service
//! - [`response`]: the tolerant response model (every section optional)
//! - [`validate`]: pre-dispatch input validation and variable counting
//! - [`render`]: `RenderPlan` — response → view-fragment projection
//! - [`export`]: truth-table CSV serialization

pub mod export;
pub mod method;
pub mod render;
pub mod request;
pub mod response;
pub mod validate;

pub use export::{ExportError, TRUTH_TABLE_FILENAME, truth_table_csv, write_truth_table_csv};
pub use method::Method;
pub use render::{
    ChartChunk, ChartTableView, KmapView, MintermView, PiStageTable, PrimeImplicantView,
    RenderPlan, ResultSummary, TraceView, TruthTableView,
};
pub use request::OptimizationRequest;
pub use response::{Bit, ChartRow, Grouping, KmapData, OptimizationResponse, PiRow, ThreadTrace};
pub use validate::{ValidationError, distinct_variable_count, validate};
