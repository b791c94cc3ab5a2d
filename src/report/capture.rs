use crate::backtrace::{group, CallBlock, CallFrame};
use crate::error::TraceError;
use crate::highlight::{extract, HighlightedLine, RepairedLine};
use serde::{Deserialize, Serialize};
use std::io;

/// A raised fault as handed over by an error or exception hook.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fault {
    pub file: String,
    /// 1-based line the fault was raised on.
    pub line: usize,
    pub message: String,
    /// Captured stack, innermost call first. May be empty when the fault
    /// was raised at the top level.
    #[serde(default)]
    pub frames: Vec<CallFrame>,
}

/// Everything a renderer needs to display one captured fault.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FaultReport {
    pub file: String,
    pub line: usize,
    pub message: String,
    /// Context window around the fault line; empty when the source could
    /// not be loaded.
    pub window: Vec<RepairedLine>,
    pub blocks: Vec<CallBlock>,
}

/// Build a report for a fault, reading the highlighted source through the
/// injected `loader`.
///
/// A loader failure is recoverable: the report keeps its message and
/// backtrace and ships an empty window. Capturing never touches process
/// state and never aborts; whether to render, log or re-raise stays with
/// the caller.
pub fn capture<F>(loader: F, fault: &Fault) -> Result<FaultReport, TraceError>
where
    F: FnOnce(&str) -> io::Result<Vec<HighlightedLine>>,
{
    if fault.line == 0 {
        return Err(TraceError::InvalidErrorLine { line: fault.line });
    }

    let window = match loader(&fault.file) {
        Ok(lines) => extract(&lines, fault.line)?,
        Err(err) => {
            log::warn!("could not load source for {}: {}", fault.file, err);
            Vec::new()
        }
    };

    Ok(FaultReport {
        file: fault.file.clone(),
        line: fault.line,
        message: fault.message.clone(),
        window,
        blocks: group(&fault.frames),
    })
}
