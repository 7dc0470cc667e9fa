//! Golden comparison and layout-constant re-parsing.

use std::fmt;

/// One line-level difference between expected and actual text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LineDiff {
    /// Both sides have a line here, with different content.
    Changed {
        line: usize,
        expected: String,
        actual: String,
    },
    /// Expected has a line the actual output is missing.
    Missing { line: usize, expected: String },
    /// Actual output has a line beyond the expected text.
    Extra { line: usize, actual: String },
}

/// Outcome of one golden comparison. A mismatch is a failing test
/// condition, not a process failure.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GoldenReport {
    pub diffs: Vec<LineDiff>,
}

impl GoldenReport {
    pub fn is_match(&self) -> bool {
        self.diffs.is_empty()
    }
}

impl fmt::Display for GoldenReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_match() {
            return write!(f, "golden: match");
        }
        writeln!(f, "golden: {} line(s) differ", self.diffs.len())?;
        for diff in &self.diffs {
            match diff {
                LineDiff::Changed {
                    line,
                    expected,
                    actual,
                } => {
                    writeln!(f, "line {line}:")?;
                    writeln!(f, "  - {expected}")?;
                    writeln!(f, "  + {actual}")?;
                }
                LineDiff::Missing { line, expected } => {
                    writeln!(f, "line {line}:")?;
                    writeln!(f, "  - {expected}")?;
                }
                LineDiff::Extra { line, actual } => {
                    writeln!(f, "line {line}:")?;
                    writeln!(f, "  + {actual}")?;
                }
            }
        }
        Ok(())
    }
}

/// Compare rendered output against stored expected text.
///
/// Both documents are trimmed of leading/trailing whitespace, split into
/// lines, and compared positionally. Line numbers are 1-based over the
/// trimmed expected text.
pub fn compare_golden(expected: &str, actual: &str) -> GoldenReport {
    let expected: Vec<&str> = expected.trim().lines().collect();
    let actual: Vec<&str> = actual.trim().lines().collect();

    let mut diffs = Vec::new();
    for i in 0..expected.len().max(actual.len()) {
        let line = i + 1;
        match (expected.get(i), actual.get(i)) {
            (Some(e), Some(a)) if e != a => diffs.push(LineDiff::Changed {
                line,
                expected: e.to_string(),
                actual: a.to_string(),
            }),
            (Some(_), Some(_)) => {}
            (Some(e), None) => diffs.push(LineDiff::Missing {
                line,
                expected: e.to_string(),
            }),
            (None, Some(a)) => diffs.push(LineDiff::Extra {
                line,
                actual: a.to_string(),
            }),
            (None, None) => {}
        }
    }

    GoldenReport { diffs }
}

/// Re-extract `(name, size, alignment)` triples from rendered text.
///
/// Reads the `struct <name> size N align M` and `union <name> size N
/// align M ...` declaration lines the renderer emits. Rendering a model
/// and parsing the result must reproduce the model's layout facts
/// exactly; this is the round-trip check the regression suite relies on.
pub fn parse_layout_constants(text: &str) -> Vec<(String, u32, u32)> {
    let mut constants = Vec::new();

    for line in text.lines() {
        let mut tokens = line.split_whitespace();
        let kind = tokens.next();
        if !matches!(kind, Some("struct") | Some("union")) {
            continue;
        }
        let Some(name) = tokens.next() else {
            continue;
        };
        let rest: Vec<&str> = tokens.collect();
        let size = keyed_number(&rest, "size");
        let align = keyed_number(&rest, "align");
        if let (Some(size), Some(align)) = (size, align) {
            constants.push((name.to_string(), size, align));
        }
    }

    constants
}

fn keyed_number(tokens: &[&str], key: &str) -> Option<u32> {
    let position = tokens.iter().position(|&t| t == key)?;
    tokens.get(position + 1)?.parse().ok()
}
