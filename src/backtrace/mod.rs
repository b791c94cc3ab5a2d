mod group;

pub use group::{format_call, group};

use serde::{Deserialize, Serialize};

/// One captured call-stack entry, as delivered innermost-call-first by the
/// runtime's stack capture.
///
/// A frame raised from dynamically evaluated code carries no file.
/// Arguments arrive already stringified by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallFrame {
    pub file: Option<String>,
    pub line: Option<usize>,
    pub function_name: String,
    pub class_name: Option<String>,
    #[serde(default)]
    pub args: Vec<String>,
}

/// A maximal run of chronologically consecutive calls attributed to one
/// file. `file` is `None` for a block opened by a frame with no file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CallBlock {
    pub file: Option<String>,
    pub calls: Vec<String>,
}
