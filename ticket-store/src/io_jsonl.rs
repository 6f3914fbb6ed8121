//! JSONL reader for ticket dumps.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::{debug, info};

use crate::errors::UploadError;
use crate::record::TicketRecord;

/// Reads all ticket records from a JSONL file.
///
/// - Blank (whitespace-only) lines are skipped.
/// - The first malformed line aborts the read; there is no per-line recovery.
///
/// # Errors
/// - [`UploadError::InputNotFound`] if `jsonl_path` does not exist.
/// - [`UploadError::Io`] if the file cannot be read.
/// - [`UploadError::Parse`] with the 1-based line number of a malformed row.
pub fn read_all_records(jsonl_path: impl AsRef<Path>) -> Result<Vec<TicketRecord>, UploadError> {
    let path = jsonl_path.as_ref();
    if !path.exists() {
        return Err(UploadError::InputNotFound(path.to_path_buf()));
    }

    info!("Reading ticket JSONL: {:?}", path);

    let reader = BufReader::new(File::open(path)?);

    let mut out = Vec::new();
    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let record: TicketRecord = serde_json::from_str(&line)
            .map_err(|source| UploadError::Parse { line: i + 1, source })?;
        out.push(record);
    }

    debug!("Loaded {} ticket records", out.len());
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_jsonl(contents: &str) -> tempfile::NamedTempFile {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(contents.as_bytes()).unwrap();
        f
    }

    #[test]
    fn skips_blank_lines() {
        let f = write_jsonl(
            "{\"text\":\"a\",\"metadata\":{\"ticketId\":\"T-1\"}}\n\n   \n{\"text\":\"b\"}\r\n",
        );
        let records = read_all_records(f.path()).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].ticket_label(), "T-1");
        assert_eq!(records[1].text.as_ref().and_then(|v| v.as_str()), Some("b"));
    }

    #[test]
    fn malformed_line_is_fatal_with_line_number() {
        let f = write_jsonl("{\"text\":\"ok\"}\n\n{not json}\n{\"text\":\"never read\"}\n");
        let err = read_all_records(f.path()).unwrap_err();
        assert!(matches!(err, UploadError::Parse { line: 3, .. }), "{err:?}");
    }

    #[test]
    fn missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("vector-store-data.jsonl");
        let err = read_all_records(&path).unwrap_err();
        match err {
            UploadError::InputNotFound(p) => assert_eq!(p, path),
            other => panic!("expected InputNotFound, got {other:?}"),
        }
    }

    #[test]
    fn empty_file_yields_no_records() {
        let f = write_jsonl("");
        assert!(read_all_records(f.path()).unwrap().is_empty());
    }
}
