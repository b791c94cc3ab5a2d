mod repair;
mod types;
mod window;

pub use repair::repair_lines;
pub use types::{HighlightedLine, RepairedLine, SpanToken};
pub use window::{extract, window_spec, WindowSpec, CONTEXT_AFTER, CONTEXT_BEFORE};
