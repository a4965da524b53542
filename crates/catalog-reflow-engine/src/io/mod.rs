use crate::reflow::{FieldOrder, Record};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Read a scanned catalog file and return its content
pub fn read_catalog_file(path: &Path) -> Result<String, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    fs::read_to_string(path).map_err(IoError::Io)
}

/// Write reflowed records to a sink, one tab-separated line per record
pub fn write_records<W: Write>(
    sink: &mut W,
    records: &[Record],
    order: &FieldOrder,
) -> Result<(), IoError> {
    for record in records {
        sink.write_all(record.to_tsv(order).as_bytes())
            .map_err(IoError::Io)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reflow::EntryMeta;

    fn sample_record(text: &str) -> Record {
        Record::new(&EntryMeta::default(), text.to_string())
    }

    #[test]
    fn test_read_catalog_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("v26p1.txt");
        fs::write(&path, "ACTUAL BUSINESS ENGLISH, by P. H. Deffendall.\n").unwrap();

        let content = read_catalog_file(&path).unwrap();
        assert_eq!(content, "ACTUAL BUSINESS ENGLISH, by P. H. Deffendall.\n");
    }

    #[test]
    fn test_read_missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let result = read_catalog_file(&dir.path().join("nonexistent.txt"));
        assert!(matches!(result, Err(IoError::NotFound(_))));
    }

    #[test]
    fn test_write_records_one_line_per_record() {
        let records = vec![sample_record("FIRST TITLE."), sample_record("SECOND TITLE.")];
        let mut sink = Vec::new();

        write_records(&mut sink, &records, &FieldOrder::default()).unwrap();

        let out = String::from_utf8(sink).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with("\tFIRST TITLE."));
        assert!(lines[1].ends_with("\tSECOND TITLE."));
        assert!(out.ends_with('\n'));
    }

    #[test]
    fn test_written_lines_have_six_fields() {
        let records = vec![sample_record("AARON BURR, a play in four acts")];
        let mut sink = Vec::new();

        write_records(&mut sink, &records, &FieldOrder::default()).unwrap();

        let out = String::from_utf8(sink).unwrap();
        assert_eq!(out.trim_end().split('\t').count(), 6);
    }
}
