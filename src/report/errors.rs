use serde::Serialize;

/// Severity classes for collected runtime errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    Fatal,
    Error,
    Parse,
    Warning,
    Strict,
    Notice,
    Deprecated,
    Unknown,
}

impl Severity {
    /// Display label used when listing collected errors.
    pub fn label(self) -> &'static str {
        match self {
            Severity::Fatal => "FATAL",
            Severity::Error => "ERROR",
            Severity::Parse => "PARSE",
            Severity::Warning => "WARNING",
            Severity::Strict => "STRICT",
            Severity::Notice => "NOTICE",
            Severity::Deprecated => "DEPRECATED",
            Severity::Unknown => "UNKNOWN",
        }
    }
}

/// One collected error with its origin, if known.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoggedError {
    pub severity: Severity,
    pub message: String,
    pub file: Option<String>,
    pub line: Option<usize>,
}

/// Collects raised errors for deferred display.
///
/// Non-fatal errors should not interrupt the page being produced, so a
/// hook records them here and a footer (or a log sink) drains them later.
#[derive(Debug, Default)]
pub struct ErrorLog {
    entries: Vec<LoggedError>,
}

impl ErrorLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(
        &mut self,
        severity: Severity,
        message: impl Into<String>,
        file: Option<String>,
        line: Option<usize>,
    ) {
        self.entries.push(LoggedError {
            severity,
            message: message.into(),
            file,
            line,
        });
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Return everything collected so far and empty the log.
    pub fn drain(&mut self) -> Vec<LoggedError> {
        std::mem::take(&mut self.entries)
    }
}
