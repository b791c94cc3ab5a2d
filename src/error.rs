use thiserror::Error;

/// Failures the formatter reports to its caller.
///
/// Everything else degrades instead of failing: a loader that cannot read
/// the source produces an empty window, and malformed highlighter markup is
/// left under-repaired with a warning.
#[derive(Debug, Error)]
pub enum TraceError {
    /// Fault line numbers are 1-based; zero can only come from a caller bug.
    #[error("invalid fault line {line}: line numbers start at 1")]
    InvalidErrorLine { line: usize },
}
