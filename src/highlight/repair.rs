use super::types::{HighlightedLine, RepairedLine, SpanToken};

/// Colour state dangling at a line boundary: how many spans are still open
/// and the colour they were opened with.
#[derive(Debug, Clone, Default)]
struct Carry {
    count: usize,
    color: Option<String>,
}

/// A line with no markup and nothing but whitespace text.
fn is_blank(tokens: &[SpanToken]) -> bool {
    tokens.iter().all(|t| match t {
        SpanToken::Text(text) => text.trim().is_empty(),
        _ => false,
    })
}

/// Repair one line given the carry from the previous line, returning the
/// self-contained tokens and the carry for the next line.
fn repair_line(tokens: &[SpanToken], carry: Carry) -> (Vec<SpanToken>, Carry) {
    let mut out = Vec::with_capacity(tokens.len() + 2 * carry.count);

    // Re-open whatever the previous line left dangling
    if let Some(color) = &carry.color {
        for _ in 0..carry.count {
            out.push(SpanToken::Open(color.clone()));
        }
    }
    out.extend_from_slice(tokens);

    let opens = out
        .iter()
        .filter(|t| matches!(t, SpanToken::Open(_)))
        .count();
    let closes = out.iter().filter(|t| matches!(t, SpanToken::Close)).count();

    if opens > closes {
        let dangling = opens - closes;

        // The colour of the last span opened is the one that survives
        let color = out.iter().rev().find_map(|t| match t {
            SpanToken::Open(c) => Some(c.clone()),
            _ => None,
        });

        for _ in 0..dangling {
            out.push(SpanToken::Close);
        }

        return (
            out,
            Carry {
                count: dangling,
                color,
            },
        );
    }

    if closes > opens {
        // Upstream contract violation: a close with no matching open
        // anywhere before it. The line stays under-repaired.
        log::warn!(
            "highlighted line closes {} span(s) it never opened",
            closes - opens
        );
    }

    (out, Carry::default())
}

/// Make every line independently renderable.
///
/// Runs over the full line sequence because a dangling colour can originate
/// many lines before any window that is later cut from the result. The line
/// at `error_line` (1-based) loses its colouring entirely; the renderer
/// styles it as the fault line instead.
pub fn repair_lines(lines: &[HighlightedLine], error_line: usize) -> Vec<RepairedLine> {
    let mut carry = Carry::default();
    let mut out = Vec::with_capacity(lines.len());

    for (index, line) in lines.iter().enumerate() {
        let number = index + 1;

        if number == error_line {
            // Strip all colour markup; its opens and closes vanish together,
            // so the carry passes over this line unchanged.
            let text_only = line
                .tokens
                .iter()
                .filter(|t| matches!(t, SpanToken::Text(_)))
                .cloned()
                .collect();
            out.push(RepairedLine {
                number,
                tokens: text_only,
                is_error_line: true,
            });
            continue;
        }

        if is_blank(&line.tokens) {
            out.push(RepairedLine {
                number,
                tokens: line.tokens.clone(),
                is_error_line: false,
            });
            continue;
        }

        let (tokens, next) = repair_line(&line.tokens, carry);
        carry = next;
        out.push(RepairedLine {
            number,
            tokens,
            is_error_line: false,
        });
    }

    out
}
