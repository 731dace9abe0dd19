use crate::error::BridgeError;

/// Columns in engine output are tab-separated.
const COLUMN_SEPARATOR: char = '\t';

/// One row of engine output: (category name, value) pairs in column order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultRow {
    pub pairs: Vec<(String, String)>,
}

/// Parsed engine output. The header is the first non-blank line of the raw
/// text and is never emitted as a row.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ResultSet {
    pub header: Vec<String>,
    pub rows: Vec<ResultRow>,
}

/// Parse the engine's tabular output.
///
/// Lines split on `\n`; blank (whitespace-only) lines are dropped rather
/// than treated as empty rows, which also absorbs any `\r`. Fields split on
/// tab and are trimmed. Every data row must match the header's field count;
/// a ragged row is malformed output, never silently truncated or padded.
/// Empty input yields an empty set with no header.
pub fn parse(raw: &str) -> Result<ResultSet, BridgeError> {
    let mut lines = raw.split('\n').filter(|line| !line.trim().is_empty());

    let header = match lines.next() {
        Some(line) => split_columns(line),
        None => return Ok(ResultSet::default()),
    };

    let mut rows = Vec::new();
    for (idx, line) in lines.enumerate() {
        let fields = split_columns(line);
        if fields.len() != header.len() {
            return Err(BridgeError::MalformedOutput {
                row: idx + 1,
                expected: header.len(),
                found: fields.len(),
            });
        }
        rows.push(ResultRow {
            pairs: header.iter().cloned().zip(fields).collect(),
        });
    }

    Ok(ResultSet { header, rows })
}

fn split_columns(line: &str) -> Vec<String> {
    line.split(COLUMN_SEPARATOR)
        .map(|field| field.trim().to_string())
        .collect()
}
