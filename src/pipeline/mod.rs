//! Batch pipeline
//!
//! Configuration, validation, per-document assembly and the parallel batch
//! runner.

pub mod artifacts;
pub mod assembler;
pub mod error_code;
pub mod errors;
pub mod observer;
pub mod runner;
pub mod spec;
pub mod validation;

pub use artifacts::TokenSet;
pub use assembler::{assemble, score_text, DocumentOutcome};
pub use observer::{BatchObserver, BatchSummary, NoopObserver, TracingObserver};
pub use runner::{BatchOutput, MetricsEngine};
pub use spec::{AnalysisSpec, LexiconSpec, RuntimeSpec};
pub use validation::{ValidationEngine, ValidationReport};
