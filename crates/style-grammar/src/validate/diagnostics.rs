//! Diagnostic side channel for validation.
//!
//! Sinks observe rejections for tooling; they never influence the result.

use parking_lot::Mutex;

/// What a diagnostic is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagnosticKind {
    /// The value matched none of the property's options.
    Mismatch,
    /// The property has no grammar in the registry.
    UnknownProperty,
    /// The grammar nested deeper than the configured limit.
    DepthExceeded,
}

impl DiagnosticKind {
    /// Whether this points at a bug in the grammar data rather than input.
    pub fn is_configuration(&self) -> bool {
        !matches!(self, DiagnosticKind::Mismatch)
    }
}

/// One validation diagnostic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// What went wrong.
    pub kind: DiagnosticKind,
    /// The property being validated.
    pub property: String,
    /// The grammar the value was checked against.
    pub pattern: String,
    /// The offending value.
    pub value: String,
}

/// A receiver for validation diagnostics.
pub trait DiagnosticSink: Send + Sync {
    /// Record one diagnostic.
    fn report(&self, diagnostic: &Diagnostic);
}

/// Forwards diagnostics to `tracing`.
///
/// Configuration problems are logged at `warn`, rejected input at `debug`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn report(&self, diagnostic: &Diagnostic) {
        match diagnostic.kind {
            DiagnosticKind::Mismatch => tracing::debug!(
                "Rejected value '{}' for property '{}' (expected {})",
                diagnostic.value,
                diagnostic.property,
                diagnostic.pattern
            ),
            DiagnosticKind::UnknownProperty => tracing::warn!(
                "No grammar registered for property '{}'",
                diagnostic.property
            ),
            DiagnosticKind::DepthExceeded => tracing::warn!(
                "Grammar for property '{}' nests too deeply while checking '{}'",
                diagnostic.property,
                diagnostic.value
            ),
        }
    }
}

/// Discards all diagnostics.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl DiagnosticSink for NullSink {
    fn report(&self, _diagnostic: &Diagnostic) {}
}

/// Keeps diagnostics in memory, e.g. for a linting report.
#[derive(Debug, Default)]
pub struct CollectingSink {
    entries: Mutex<Vec<Diagnostic>>,
}

impl CollectingSink {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of the diagnostics collected so far.
    pub fn snapshot(&self) -> Vec<Diagnostic> {
        self.entries.lock().clone()
    }

    /// Drain the diagnostics collected so far.
    pub fn take(&self) -> Vec<Diagnostic> {
        std::mem::take(&mut *self.entries.lock())
    }

    /// Number of diagnostics collected.
    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    /// Check if nothing was collected.
    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }
}

impl DiagnosticSink for CollectingSink {
    fn report(&self, diagnostic: &Diagnostic) {
        self.entries.lock().push(diagnostic.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mismatch() -> Diagnostic {
        Diagnostic {
            kind: DiagnosticKind::Mismatch,
            property: "width".into(),
            pattern: "length".into(),
            value: "wide".into(),
        }
    }

    #[test]
    fn collecting_sink_drains() {
        let sink = CollectingSink::new();
        sink.report(&mismatch());
        sink.report(&mismatch());

        assert_eq!(sink.len(), 2);
        assert_eq!(sink.take().len(), 2);
        assert!(sink.is_empty());
    }

    #[test]
    fn kind_classification() {
        assert!(!DiagnosticKind::Mismatch.is_configuration());
        assert!(DiagnosticKind::UnknownProperty.is_configuration());
        assert!(DiagnosticKind::DepthExceeded.is_configuration());
    }

    #[test]
    fn tracing_sink_does_not_panic() {
        TracingSink.report(&mismatch());
        NullSink.report(&mismatch());
    }
}
