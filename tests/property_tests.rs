use fault_trace::highlight::{repair_lines, HighlightedLine, SpanToken};
use proptest::prelude::*;

const COLORS: [&str; 4] = ["0000bb", "007700", "dd0000", "ff8000"];

/// Raw opcodes for generated highlighter output.
#[derive(Debug, Clone)]
enum RawOp {
    Text(String),
    Open(usize),
    Close,
}

fn arb_op() -> impl Strategy<Value = RawOp> {
    prop_oneof![
        3 => "[a-z ]{0,6}".prop_map(RawOp::Text),
        2 => (0usize..COLORS.len()).prop_map(RawOp::Open),
        2 => Just(RawOp::Close),
    ]
}

/// Build a multi-line fixture with random dangling opens, plus an error
/// line choice that sometimes lands past end-of-file.
///
/// Closes that would underflow the open-span depth are dropped during
/// construction, honouring the highlighter contract that a close always has
/// a matching open somewhere before it. The error line keeps its spans to
/// itself (a local depth): its colouring is stripped during repair, so a
/// span crossing its boundary would manufacture the orphan-close case that
/// the contract rules out.
fn arb_fixture() -> impl Strategy<Value = (Vec<HighlightedLine>, usize)> {
    (
        prop::collection::vec(prop::collection::vec(arb_op(), 0..8), 0..12),
        0usize..64,
    )
        .prop_map(|(raw, seed)| {
            let error_line = seed % (raw.len() + 2) + 1;
            let mut depth = 0usize;

            let lines = raw
                .into_iter()
                .enumerate()
                .map(|(index, ops)| {
                    let is_error = index + 1 == error_line;
                    let mut local = 0usize;
                    let mut tokens = Vec::new();

                    for op in ops {
                        match op {
                            RawOp::Text(text) => tokens.push(SpanToken::Text(text)),
                            RawOp::Open(c) => {
                                if is_error {
                                    local += 1;
                                } else {
                                    depth += 1;
                                }
                                tokens.push(SpanToken::Open(COLORS[c].to_string()));
                            }
                            RawOp::Close => {
                                if is_error {
                                    if local > 0 {
                                        local -= 1;
                                        tokens.push(SpanToken::Close);
                                    }
                                } else if depth > 0 {
                                    depth -= 1;
                                    tokens.push(SpanToken::Close);
                                }
                            }
                        }
                    }

                    HighlightedLine { tokens }
                })
                .collect();

            (lines, error_line)
        })
}

proptest! {
    #[test]
    fn repaired_lines_are_self_contained((lines, error_line) in arb_fixture()) {
        for line in repair_lines(&lines, error_line) {
            prop_assert_eq!(
                line.opens(),
                line.closes(),
                "line {} is not self-contained",
                line.number
            );
        }
    }

    #[test]
    fn repair_preserves_visible_text((lines, error_line) in arb_fixture()) {
        let original: String = lines.iter().map(HighlightedLine::visible_text).collect();
        let repaired: String = repair_lines(&lines, error_line)
            .iter()
            .map(|l| l.visible_text())
            .collect();

        prop_assert_eq!(original, repaired);
    }

    #[test]
    fn repair_is_idempotent((lines, error_line) in arb_fixture()) {
        let once = repair_lines(&lines, error_line);
        let as_input: Vec<HighlightedLine> =
            once.iter().map(|l| l.to_highlighted()).collect();
        let twice = repair_lines(&as_input, error_line);

        prop_assert_eq!(once, twice);
    }
}
