//! Grammar validation.

mod diagnostics;
mod engine;
mod length;

pub mod leaf;

pub use diagnostics::{CollectingSink, Diagnostic, DiagnosticKind, DiagnosticSink, NullSink, TracingSink};
pub use engine::{Validator, ValidatorConfig, is_option_valid, is_value_valid};
pub use length::{LENGTH_STRATEGIES, LengthStrategy, classify_length};
