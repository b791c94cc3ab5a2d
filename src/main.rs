use std::fs;
use std::io::{self, Read, Write};

use fault_trace::highlight::HighlightedLine;
use fault_trace::report::{capture, Fault};

/// Load a source file as plain, uncoloured highlighted lines.
///
/// Colouring is optional at the formatter's interface, so a loader that
/// never colours anything is still a valid collaborator.
fn load_plain(path: &str) -> io::Result<Vec<HighlightedLine>> {
    let contents = fs::read_to_string(path)?;
    Ok(contents.lines().map(HighlightedLine::plain).collect())
}

fn main() -> io::Result<()> {
    // Fault description arrives as JSON on stdin, report leaves as JSON on
    // stdout, status goes to stderr
    let mut input = String::new();
    io::stdin().read_to_string(&mut input)?;

    if input.trim().is_empty() {
        eprintln!("Usage: pipe a fault description to stdin, e.g.");
        eprintln!(
            "  {{\"file\": \"app.rs\", \"line\": 42, \"message\": \"oops\", \"frames\": []}}"
        );
        std::process::exit(2);
    }

    let fault: Fault = match serde_json::from_str(&input) {
        Ok(fault) => fault,
        Err(err) => {
            eprintln!("Could not parse fault description: {}", err);
            std::process::exit(2);
        }
    };

    let report = match capture(load_plain, &fault) {
        Ok(report) => report,
        Err(err) => {
            eprintln!("{}", err);
            std::process::exit(2);
        }
    };

    let json = serde_json::to_string_pretty(&report).expect("report serializes");
    writeln!(io::stdout(), "{}", json)?;

    Ok(())
}
