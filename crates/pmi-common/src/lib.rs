//! Common types and utilities for the pmi initializer synthesizer.
//!
//! This crate provides foundational types used across all pmi crates:
//! - Source spans (`Span`)
//! - Line/column positions for reporting (`LineMap`, `Position`)
//! - Diagnostics and the diagnostic message table

// Span - Source location tracking (byte offsets)
pub mod span;
pub use span::Span;

// Position types for line/column source locations
pub mod position;
pub use position::{LineMap, Position};

pub mod diagnostics;
pub use diagnostics::{
    Diagnostic, DiagnosticCategory, DiagnosticMessage, diagnostic_codes, format_message,
    get_diagnostic_message, get_message_template,
};

#[cfg(test)]
#[path = "tests/span_tests.rs"]
mod span_tests;

#[cfg(test)]
#[path = "tests/position_tests.rs"]
mod position_tests;

#[cfg(test)]
#[path = "tests/diagnostics_tests.rs"]
mod diagnostics_tests;
