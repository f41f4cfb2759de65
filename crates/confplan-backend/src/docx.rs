//! DOCX abstract extraction.
//!
//! # Architecture
//!
//! Manual ZIP + XML parsing (docx-rs is writer-only).
//!
//! A `.docx` file is a ZIP archive; the body text lives in
//! `word/document.xml`. The extractor streams that part through
//! quick-xml, collecting `w:t` runs and turning paragraph ends into
//! newlines, then matches labeled fields in the raw text:
//!
//! ```text
//! Név: Kovács Anna
//! Előadás címe: Gépi tanulás a gyakorlatban
//! ```
//!
//! Label patterns cover accented and unaccented Hungarian spellings,
//! case-insensitively, because that is what the submitted abstracts use.
//!
//! Extraction is batch-oriented and per-file fault tolerant: a file that
//! cannot be read is recorded with [`ExtractionStatus::Error`] and the
//! batch continues; a file missing a labeled field is recorded with
//! [`ExtractionStatus::Warning`] and an `"N/A"` placeholder.

use confplan_core::{ConfplanError, Result, RosterEntry};
use once_cell::sync::Lazy;
use quick_xml::events::Event;
use quick_xml::Reader;
use regex::Regex;
use std::io::{Cursor, Read};
use std::path::Path;
use zip::ZipArchive;

/// Placeholder recorded when a labeled field is missing.
pub const MISSING_FIELD: &str = "N/A";

/// Placeholder recorded when a file cannot be processed at all.
pub const FAILED_FIELD: &str = "ERROR";

static NAME_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(?:Név|Nev)\s*:\s*([^\r\n]*)").expect("name pattern is valid")
});

static TITLE_RE: Lazy<Regex> = Lazy::new(|| {
    // Longest alternatives first so "Előadás címe:" is not eaten by "Cím"
    Regex::new(r"(?i)(?:Előadás\s+címe|Eloadas\s+cime|Cím|Cim)\s*:\s*([^\r\n]*)")
        .expect("title pattern is valid")
});

/// Outcome of extracting one abstract file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExtractionStatus {
    /// Both fields found.
    Ok,
    /// One or both fields missing; placeholders recorded.
    Warning,
    /// The file could not be processed.
    Error,
}

/// One extracted abstract: source file plus the recovered fields.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct AbstractRecord {
    /// Source file name (no directory components).
    pub file_name: String,
    /// Extracted speaker name, or a placeholder.
    pub name: String,
    /// Extracted talk title, or a placeholder.
    pub title: String,
    /// Per-file outcome.
    pub status: ExtractionStatus,
}

/// Backend for extracting speaker/title fields from Word abstracts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct DocxTextExtractor;

impl DocxTextExtractor {
    /// Create a new extractor instance.
    #[inline]
    #[must_use = "creates an extractor instance that should be used for parsing"]
    pub const fn new() -> Self {
        Self
    }

    /// Extract the raw body text of a `.docx` file.
    ///
    /// # Errors
    /// Returns [`ConfplanError::ExtractionError`] if the archive cannot
    /// be opened, lacks `word/document.xml`, or the XML is malformed.
    pub fn extract_text(&self, data: &[u8]) -> Result<String> {
        let mut archive = ZipArchive::new(Cursor::new(data))
            .map_err(|e| ConfplanError::ExtractionError(format!("not a DOCX archive: {e}")))?;

        let mut xml = String::new();
        archive
            .by_name("word/document.xml")
            .map_err(|e| {
                ConfplanError::ExtractionError(format!("missing word/document.xml: {e}"))
            })?
            .read_to_string(&mut xml)
            .map_err(|e| {
                ConfplanError::ExtractionError(format!("unreadable document.xml: {e}"))
            })?;

        Self::document_xml_to_text(&xml)
    }

    /// Collect `w:t` runs from document XML, paragraph ends as newlines.
    fn document_xml_to_text(xml: &str) -> Result<String> {
        let mut reader = Reader::from_str(xml);
        let mut text = String::new();
        let mut in_run_text = false;

        loop {
            match reader.read_event() {
                Ok(Event::Start(e)) if e.name().as_ref() == b"w:t" => in_run_text = true,
                Ok(Event::End(e)) => match e.name().as_ref() {
                    b"w:t" => in_run_text = false,
                    b"w:p" => text.push('\n'),
                    _ => {}
                },
                Ok(Event::Empty(e)) if e.name().as_ref() == b"w:br" => text.push('\n'),
                Ok(Event::Text(t)) if in_run_text => {
                    let run = t.unescape().map_err(|e| {
                        ConfplanError::ExtractionError(format!("bad XML text run: {e}"))
                    })?;
                    text.push_str(&run);
                }
                Ok(Event::Eof) => break,
                Ok(_) => {}
                Err(e) => {
                    return Err(ConfplanError::ExtractionError(format!(
                        "XML parse error at offset {}: {e}",
                        reader.buffer_position()
                    )));
                }
            }
        }

        Ok(text)
    }

    /// Match the labeled name/title fields in raw abstract text.
    fn extract_fields(text: &str) -> (Option<String>, Option<String>) {
        let capture = |re: &Regex| {
            re.captures(text)
                .map(|c| c[1].trim().to_string())
                .filter(|s| !s.is_empty())
        };
        (capture(&NAME_RE), capture(&TITLE_RE))
    }

    /// Extract one abstract from raw bytes, never failing the caller.
    #[must_use]
    pub fn extract_record(&self, file_name: &str, data: &[u8]) -> AbstractRecord {
        match self.extract_text(data) {
            Ok(text) => {
                let (name, title) = Self::extract_fields(&text);
                let status = if name.is_none() || title.is_none() {
                    ExtractionStatus::Warning
                } else {
                    ExtractionStatus::Ok
                };
                AbstractRecord {
                    file_name: file_name.to_string(),
                    name: name.unwrap_or_else(|| MISSING_FIELD.to_string()),
                    title: title.unwrap_or_else(|| MISSING_FIELD.to_string()),
                    status,
                }
            }
            Err(e) => {
                log::warn!("failed to process {file_name}: {e}");
                AbstractRecord {
                    file_name: file_name.to_string(),
                    name: FAILED_FIELD.to_string(),
                    title: FAILED_FIELD.to_string(),
                    status: ExtractionStatus::Error,
                }
            }
        }
    }

    /// Extract a batch of abstract files, one record per path.
    ///
    /// Unreadable files become [`ExtractionStatus::Error`] records; the
    /// batch itself never fails.
    #[must_use]
    pub fn extract_batch<P: AsRef<Path>>(&self, paths: &[P]) -> Vec<AbstractRecord> {
        paths
            .iter()
            .map(|path| {
                let path = path.as_ref();
                let file_name = path
                    .file_name()
                    .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into());
                match std::fs::read(path) {
                    Ok(data) => self.extract_record(&file_name, &data),
                    Err(e) => {
                        log::warn!("cannot read {}: {e}", path.display());
                        AbstractRecord {
                            file_name,
                            name: FAILED_FIELD.to_string(),
                            title: FAILED_FIELD.to_string(),
                            status: ExtractionStatus::Error,
                        }
                    }
                }
            })
            .collect()
    }
}

/// Convert extraction records into roster entries, dropping failed files.
///
/// `Warning` records are kept: their placeholders are valid roster data
/// the operator can fix up later, matching the transfer behavior of the
/// planning tool.
#[must_use]
pub fn records_to_entries(records: &[AbstractRecord]) -> Vec<RosterEntry> {
    records
        .iter()
        .filter(|r| r.status != ExtractionStatus::Error)
        .map(|r| RosterEntry::new(r.name.clone(), r.title.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use zip::write::SimpleFileOptions;
    use zip::ZipWriter;

    /// Build a minimal DOCX archive whose body holds the given paragraphs.
    fn fake_docx(paragraphs: &[&str]) -> Vec<u8> {
        let mut body = String::new();
        for p in paragraphs {
            body.push_str("<w:p><w:r><w:t>");
            body.push_str(&p.replace('&', "&amp;").replace('<', "&lt;"));
            body.push_str("</w:t></w:r></w:p>");
        }
        let xml = format!(
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\
             <w:document xmlns:w=\"http://schemas.openxmlformats.org/wordprocessingml/2006/main\">\
             <w:body>{body}</w:body></w:document>"
        );

        let mut cursor = Cursor::new(Vec::new());
        let mut writer = ZipWriter::new(&mut cursor);
        writer
            .start_file("word/document.xml", SimpleFileOptions::default())
            .unwrap();
        writer.write_all(xml.as_bytes()).unwrap();
        writer.finish().unwrap();
        cursor.into_inner()
    }

    #[test]
    fn test_extract_text_joins_paragraphs_with_newlines() {
        let docx = fake_docx(&["first", "second"]);
        let text = DocxTextExtractor::new().extract_text(&docx).unwrap();
        assert_eq!(text, "first\nsecond\n");
    }

    #[test]
    fn test_extract_record_both_fields() {
        let docx = fake_docx(&[
            "Absztrakt",
            "Név: Kovács Anna",
            "Előadás címe: Gépi tanulás a gyakorlatban",
        ]);
        let record = DocxTextExtractor::new().extract_record("anna.docx", &docx);
        assert_eq!(record.status, ExtractionStatus::Ok);
        assert_eq!(record.name, "Kovács Anna");
        assert_eq!(record.title, "Gépi tanulás a gyakorlatban");
        assert_eq!(record.file_name, "anna.docx");
    }

    #[test]
    fn test_extract_record_unaccented_labels() {
        let docx = fake_docx(&["Nev: Nagy Peter", "Eloadas cime: Rust a szerveroldalon"]);
        let record = DocxTextExtractor::new().extract_record("peter.docx", &docx);
        assert_eq!(record.status, ExtractionStatus::Ok);
        assert_eq!(record.name, "Nagy Peter");
        assert_eq!(record.title, "Rust a szerveroldalon");
    }

    #[test]
    fn test_extract_record_short_title_label() {
        let docx = fake_docx(&["Név: X", "Cím: Y"]);
        let record = DocxTextExtractor::new().extract_record("x.docx", &docx);
        assert_eq!(record.status, ExtractionStatus::Ok);
        assert_eq!(record.title, "Y");
    }

    #[test]
    fn test_labels_are_case_insensitive() {
        let docx = fake_docx(&["NÉV: X", "CÍM: Y"]);
        let record = DocxTextExtractor::new().extract_record("x.docx", &docx);
        assert_eq!(record.status, ExtractionStatus::Ok);
    }

    #[test]
    fn test_missing_title_yields_warning_placeholder() {
        let docx = fake_docx(&["Név: Kovács Anna", "no title label here"]);
        let record = DocxTextExtractor::new().extract_record("anna.docx", &docx);
        assert_eq!(record.status, ExtractionStatus::Warning);
        assert_eq!(record.name, "Kovács Anna");
        assert_eq!(record.title, MISSING_FIELD);
    }

    #[test]
    fn test_missing_both_fields_yields_warning() {
        let docx = fake_docx(&["just some prose"]);
        let record = DocxTextExtractor::new().extract_record("prose.docx", &docx);
        assert_eq!(record.status, ExtractionStatus::Warning);
        assert_eq!(record.name, MISSING_FIELD);
        assert_eq!(record.title, MISSING_FIELD);
    }

    #[test]
    fn test_empty_label_value_counts_as_missing() {
        let docx = fake_docx(&["Név:   ", "Cím: T"]);
        let record = DocxTextExtractor::new().extract_record("x.docx", &docx);
        assert_eq!(record.status, ExtractionStatus::Warning);
        assert_eq!(record.name, MISSING_FIELD);
    }

    #[test]
    fn test_garbage_bytes_yield_error_record() {
        let record = DocxTextExtractor::new().extract_record("broken.docx", b"not a zip");
        assert_eq!(record.status, ExtractionStatus::Error);
        assert_eq!(record.name, FAILED_FIELD);
        assert_eq!(record.title, FAILED_FIELD);
    }

    #[test]
    fn test_archive_without_document_xml_is_error() {
        let mut cursor = Cursor::new(Vec::new());
        let mut writer = ZipWriter::new(&mut cursor);
        writer
            .start_file("other.xml", SimpleFileOptions::default())
            .unwrap();
        writer.write_all(b"<x/>").unwrap();
        writer.finish().unwrap();

        let result = DocxTextExtractor::new().extract_text(&cursor.into_inner());
        match result {
            Err(ConfplanError::ExtractionError(msg)) => {
                assert!(msg.contains("word/document.xml"));
            }
            other => panic!("expected ExtractionError, got {other:?}"),
        }
    }

    #[test]
    fn test_escaped_entities_are_unescaped() {
        let docx = fake_docx(&["Név: Tóth & Fia", "Cím: A < B"]);
        let record = DocxTextExtractor::new().extract_record("x.docx", &docx);
        assert_eq!(record.name, "Tóth & Fia");
        assert_eq!(record.title, "A < B");
    }

    #[test]
    fn test_extract_batch_mixes_outcomes() {
        let dir = tempfile::tempdir().unwrap();
        let good = dir.path().join("good.docx");
        let bad = dir.path().join("bad.docx");
        std::fs::write(&good, fake_docx(&["Név: A", "Cím: T1"])).unwrap();
        std::fs::write(&bad, b"garbage").unwrap();
        let missing = dir.path().join("missing.docx");

        let records = DocxTextExtractor::new().extract_batch(&[good, bad, missing]);
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].status, ExtractionStatus::Ok);
        assert_eq!(records[1].status, ExtractionStatus::Error);
        assert_eq!(records[2].status, ExtractionStatus::Error);
    }

    #[test]
    fn test_records_to_entries_drops_errors_keeps_warnings() {
        let records = vec![
            AbstractRecord {
                file_name: "a.docx".into(),
                name: "A".into(),
                title: "T1".into(),
                status: ExtractionStatus::Ok,
            },
            AbstractRecord {
                file_name: "b.docx".into(),
                name: "B".into(),
                title: MISSING_FIELD.into(),
                status: ExtractionStatus::Warning,
            },
            AbstractRecord {
                file_name: "c.docx".into(),
                name: FAILED_FIELD.into(),
                title: FAILED_FIELD.into(),
                status: ExtractionStatus::Error,
            },
        ];
        let entries = records_to_entries(&records);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].name, "A");
        assert_eq!(entries[1].title, MISSING_FIELD);
    }
}
