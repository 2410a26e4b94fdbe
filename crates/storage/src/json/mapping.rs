use crate::repository::{QuestionRecord, StorageError};

fn ser<E: core::fmt::Display>(e: E) -> StorageError {
    StorageError::Serialization(e.to_string())
}

/// Parse a JSON array of question records.
pub(crate) fn parse_records(raw: &str) -> Result<Vec<QuestionRecord>, StorageError> {
    serde_json::from_str(raw).map_err(ser)
}

/// Render records as pretty-printed JSON with a trailing newline.
pub(crate) fn render_records(records: &[QuestionRecord]) -> Result<String, StorageError> {
    let mut out = serde_json::to_string_pretty(records).map_err(ser)?;
    out.push('\n');
    Ok(out)
}
