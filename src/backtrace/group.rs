use super::{CallBlock, CallFrame};

/// Render one frame as `"<line>: <Class>::<function>(<args>)"`, omitting
/// the pieces the frame does not carry.
pub fn format_call(frame: &CallFrame) -> String {
    let mut call = String::new();

    if let Some(line) = frame.line {
        call.push_str(&line.to_string());
        call.push_str(": ");
    }

    if let Some(class) = &frame.class_name {
        call.push_str(class);
        call.push_str("::");
    }

    call.push_str(&frame.function_name);
    call.push('(');
    call.push_str(&frame.args.join(", "));
    call.push(')');

    call
}

/// Regroup an innermost-first stack into chronological per-file blocks.
///
/// The walk keeps a sticky notion of the current file: a frame joins the
/// open block only when it names the same file the scope last saw. A frame
/// with a different file, or with no file at all, closes the block and
/// opens a new one keyed by its own file. Frames without a file leave the
/// sticky file alone, so later frames from that file fall into the block
/// such a frame opened.
pub fn group(frames: &[CallFrame]) -> Vec<CallBlock> {
    let mut blocks = Vec::new();
    let mut current: Option<CallBlock> = None;
    let mut current_file: Option<String> = None;

    // The capture facility reports the innermost call first; walk the
    // frames in the order the calls actually happened
    for frame in frames.iter().rev() {
        let joins_current = match (&frame.file, &current_file) {
            (Some(file), Some(last)) => current.is_some() && file == last,
            _ => false,
        };

        if !joins_current {
            if let Some(block) = current.take() {
                blocks.push(block);
            }
            current = Some(CallBlock {
                file: frame.file.clone(),
                calls: Vec::new(),
            });
        }

        if let Some(file) = &frame.file {
            current_file = Some(file.clone());
        }

        if let Some(block) = current.as_mut() {
            block.calls.push(format_call(frame));
        }
    }

    if let Some(block) = current {
        blocks.push(block);
    }

    blocks
}
