//! Verdict Report
//!
//! Translation of test-execution outcomes into the flat status shape a
//! downstream report consumer ingests. The [`OutcomeMapper`] dispatches
//! over an [`Outcome`] and hands a [`ReportStatus`] keyword, plus
//! rendered [`ErrorDetails`] for failure-like outcomes, to a sink
//! callback exactly once.
//!
//! Error formatting lives behind the [`ErrorRenderer`] seam.
//! [`SourceChainRenderer`] is the default implementation.

mod mapper;
mod outcome;
mod render;

pub use mapper::OutcomeMapper;
pub use outcome::{Outcome, ReportStatus, TestError};
pub use render::{ErrorDetails, ErrorRenderer, SourceChainRenderer};
