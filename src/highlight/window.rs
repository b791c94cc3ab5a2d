use super::repair::repair_lines;
use super::types::{HighlightedLine, RepairedLine};
use crate::error::TraceError;

/// Lines of context to keep before the fault line.
pub const CONTEXT_BEFORE: usize = 8;

/// Lines of context to keep after the fault line.
pub const CONTEXT_AFTER: usize = 3;

/// Slice bounds of a context window, 0-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowSpec {
    pub start: usize,
    pub length: usize,
}

/// Compute the window bounds around a 1-based fault line.
pub fn window_spec(error_line: usize) -> Result<WindowSpec, TraceError> {
    if error_line == 0 {
        return Err(TraceError::InvalidErrorLine { line: error_line });
    }

    let start = error_line.saturating_sub(CONTEXT_BEFORE + 1);
    let length = (error_line - 1 - start) + CONTEXT_AFTER + 1;

    Ok(WindowSpec { start, length })
}

/// Repair the full line sequence, then cut the context window around
/// `error_line` (1-based).
///
/// Files of up to `CONTEXT_BEFORE` lines are returned whole. A fault line
/// past end-of-file clamps the window to the last available lines.
pub fn extract(
    lines: &[HighlightedLine],
    error_line: usize,
) -> Result<Vec<RepairedLine>, TraceError> {
    let spec = window_spec(error_line)?;
    let mut repaired = repair_lines(lines, error_line);

    let total = repaired.len();
    if total <= CONTEXT_BEFORE {
        return Ok(repaired);
    }

    let start = if spec.start >= total {
        total.saturating_sub(spec.length)
    } else {
        spec.start
    };
    let end = (start + spec.length).min(total);

    repaired.truncate(end);
    Ok(repaired.split_off(start))
}
