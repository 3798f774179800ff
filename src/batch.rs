//! Simplifying many expressions from a reader
//!
//! One expression per line. Blank lines and lines starting with `#` are
//! skipped. Each expression produces one output line,
//! `<original> => <simplified>`, or `<original> => invalid expression` if it
//! could not be simplified; a failure never stops the batch.

use crate::Simplifier;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;
use tracing::{debug, info};

/// Text written in place of a result that could not be computed
pub const INVALID_EXPRESSION: &str = "invalid expression";

/// Totals for one batch run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    /// Expressions read
    pub expressions: usize,
    /// Expressions whose text changed
    pub simplified: usize,
    /// Expressions that failed
    pub failed: usize,
    /// Catalog passes across successfully simplified expressions
    pub passes: usize,
}

/// Simplify every expression in `reader`, writing one line per expression
///
/// # Examples
///
/// ```
/// use boolcalc::batch::simplify_reader;
/// use boolcalc::Simplifier;
///
/// # fn main() -> std::io::Result<()> {
/// let input = "A & A\n# comment\n\n(A & ~A)\n";
/// let mut output = Vec::new();
/// let summary = simplify_reader(&Simplifier::default(), input.as_bytes(), &mut output)?;
///
/// assert_eq!(summary.expressions, 2);
/// assert_eq!(String::from_utf8(output).unwrap(), "A & A => A\n(A & ~A) => False\n");
/// # Ok(())
/// # }
/// ```
pub fn simplify_reader<R: BufRead, W: Write>(
    simplifier: &Simplifier,
    reader: R,
    mut writer: W,
) -> io::Result<BatchSummary> {
    let mut summary = BatchSummary::default();

    for (line_number, line) in reader.lines().enumerate() {
        let line = line?;
        let expression = line.trim();
        if expression.is_empty() || expression.starts_with('#') {
            continue;
        }
        summary.expressions += 1;

        match simplifier.simplify(expression) {
            Ok(result) => {
                if result.changed() {
                    summary.simplified += 1;
                }
                summary.passes += result.stats.passes;
                writeln!(writer, "{} => {}", expression, result.simplified)?;
            }
            Err(err) => {
                debug!(line = line_number + 1, error = %err, "expression failed");
                summary.failed += 1;
                writeln!(writer, "{} => {}", expression, INVALID_EXPRESSION)?;
            }
        }
    }

    writer.flush()?;
    info!(
        expressions = summary.expressions,
        simplified = summary.simplified,
        failed = summary.failed,
        "batch complete"
    );
    Ok(summary)
}

/// Simplify every expression in the file at `path`
pub fn simplify_file<P: AsRef<Path>, W: Write>(
    simplifier: &Simplifier,
    path: P,
    writer: W,
) -> io::Result<BatchSummary> {
    let file = File::open(path)?;
    simplify_reader(simplifier, BufReader::new(file), writer)
}
