//! Core logic of the `mango-match` binary.
//!
//! Reads newline-delimited JSON documents and writes every document matched
//! by a selector, one per line.

use crate::error::{BuildError, MatchError};
use crate::selector::Selector;
use log::{debug, warn};
use serde_json::Value;
use std::io::{self, BufRead, Write};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("invalid selector: {0}")]
    Selector(#[from] BuildError),

    #[error(transparent)]
    Io(#[from] io::Error),

    #[error("line {line}: {source}")]
    Read { line: usize, source: io::Error },

    #[error("line {line}: {source}")]
    Document {
        line: usize,
        source: serde_json::Error,
    },

    #[error("line {line}: document is not a JSON object")]
    NotAnObject { line: usize },

    #[error("line {line}: {source}")]
    Match { line: usize, source: MatchError },
}

#[derive(Debug, Clone, Copy, Default)]
pub struct FilterOptions {
    /// Fail on a document that is not a JSON object instead of skipping it.
    pub strict: bool,
    /// Count matches without writing them.
    pub count_only: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterSummary {
    pub scanned: usize,
    pub matched: usize,
    pub skipped: usize,
}

/// Filters newline-delimited JSON from `input` into `output`.
///
/// Blank lines are ignored. Matching documents are re-serialized compactly,
/// unless `options.count_only` is set.
pub fn filter_documents<R: BufRead, W: Write>(
    selector: &Selector,
    input: R,
    output: &mut W,
    options: &FilterOptions,
) -> Result<FilterSummary, CliError> {
    let mut summary = FilterSummary::default();

    for (idx, line) in input.lines().enumerate() {
        let line_no = idx + 1;
        let line = line.map_err(|source| CliError::Read {
            line: line_no,
            source,
        })?;
        if line.trim().is_empty() {
            continue;
        }
        summary.scanned += 1;

        let value: Value = serde_json::from_str(&line).map_err(|source| CliError::Document {
            line: line_no,
            source,
        })?;
        let doc = match value {
            Value::Object(doc) => doc,
            _ if options.strict => return Err(CliError::NotAnObject { line: line_no }),
            _ => {
                warn!("line {line_no}: skipping non-object document");
                summary.skipped += 1;
                continue;
            }
        };

        let matched = selector
            .matches(&doc)
            .map_err(|source| CliError::Match { line: line_no, source })?;
        if !matched {
            continue;
        }
        summary.matched += 1;
        if !options.count_only {
            serde_json::to_writer(&mut *output, &doc).map_err(io::Error::from)?;
            output.write_all(b"\n")?;
        }
    }

    debug!(
        "scanned {} document(s), {} matched, {} skipped",
        summary.scanned, summary.matched, summary.skipped
    );
    Ok(summary)
}
