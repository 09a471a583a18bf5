//! Resume-to-job matching engine.
//!
//! Extracts plain text from uploaded resume files, derives structured skill /
//! education / experience records from that text (and from job postings),
//! scores the two records against each other with fixed category weights, and
//! renders a recruiter-facing summary. The surrounding job-board system
//! (routing, auth, persistence, notifications) lives elsewhere — it hands the
//! engine record types from [`models`] and persists whatever [`analyzer`]
//! returns.

pub mod analyzer;
pub mod config;
pub mod errors;
pub mod extract;
pub mod matching;
pub mod models;

pub use analyzer::{AnalysisOutcome, AnalysisPayload, BatchEntry, ResumeAnalyzer};
pub use config::EngineConfig;
pub use errors::EngineError;
