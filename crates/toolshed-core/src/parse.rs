//! CSV ingestion: header-validated record parsing and normalization.
//!
//! Parsing is lenient at the row level (a bad row is dropped, never fatal)
//! and strict at the header level: the header row must carry all four
//! expected column names, case-sensitively. Alternate casings or delimiters
//! are a parse failure, not guessed at.

use thiserror::Error;
use tracing::debug;

use crate::model::{Category, Item, RawRecord};

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("failed to read CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("header row is missing required column '{0}'")]
    MissingColumn(&'static str),
}

/// Positions of the expected columns in the header row.
struct ColumnIndex {
    name: usize,
    description: usize,
    url: usize,
    kind: usize,
}

impl ColumnIndex {
    fn from_headers(headers: &csv::StringRecord) -> Result<Self, ParseError> {
        let find = |wanted: &'static str| {
            headers
                .iter()
                .position(|h| h == wanted)
                .ok_or(ParseError::MissingColumn(wanted))
        };
        Ok(Self {
            name: find("Name")?,
            description: find("Description")?,
            url: find("Url")?,
            kind: find("Type")?,
        })
    }
}

/// Parse raw delimited text into [`RawRecord`]s.
///
/// Columns are matched by header name, order-independent. Empty lines are
/// skipped. Rows with mismatched field counts produce partially-populated
/// records rather than aborting the parse.
pub fn parse_records(input: &str) -> Result<Vec<RawRecord>, ParseError> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(input.as_bytes());

    let index = ColumnIndex::from_headers(reader.headers()?)?;

    let mut records = Vec::new();
    for result in reader.records() {
        let row = match result {
            Ok(row) => row,
            Err(err) => {
                debug!(error = %err, "skipping malformed row");
                continue;
            }
        };
        if row.is_empty() {
            continue;
        }

        let field = |i: usize| row.get(i).map(str::to_string);
        records.push(RawRecord {
            name: field(index.name),
            description: field(index.description),
            url: field(index.url),
            kind: field(index.kind),
        });
    }

    Ok(records)
}

/// Normalize a raw record into an [`Item`], or reject it.
///
/// Rejects records without a name or without a URL — a directory entry
/// exists to be opened, so both are required on every ingestion path.
/// The type label is trimmed and preserved verbatim for display, with
/// `"Other"` standing in for an empty column.
pub fn normalize(record: RawRecord) -> Option<Item> {
    let name = record.name.unwrap_or_default();
    let url = record.url.unwrap_or_default();
    if name.is_empty() || url.is_empty() {
        return None;
    }

    let kind = match record.kind.as_deref().map(str::trim) {
        Some(label) if !label.is_empty() => label.to_string(),
        _ => Category::Other.as_str().to_string(),
    };
    let category = Category::from_label(&kind);

    Some(Item {
        name,
        description: record.description.unwrap_or_default(),
        url,
        kind,
        category,
    })
}

/// Parse and normalize in one pass, preserving input order.
pub fn parse_items(input: &str) -> Result<Vec<Item>, ParseError> {
    Ok(parse_records(input)?.into_iter().filter_map(normalize).collect())
}
