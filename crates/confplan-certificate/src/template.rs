//! DOCX certificate template filling.
//!
//! # Architecture
//!
//! A template is an ordinary `.docx` file containing `<<NEV>>` and
//! `<<ELOADAS>>` placeholders (accented variants `<<NÉV>>` and
//! `<<ELŐADÁS>>` are also recognized). Rendering copies every archive
//! entry into a fresh ZIP, rewriting the text parts — the main body,
//! headers and footers — with placeholder substitution. Values are
//! XML-escaped; placeholders are matched both raw and in their
//! `&lt;&lt;…&gt;&gt;` entity-escaped form, since Word escapes the
//! angle brackets when it stores the text.
//!
//! Placeholders must sit inside a single text run. Word occasionally
//! splits a run at spell-check or formatting boundaries; re-typing the
//! placeholder in one go fixes such a template.

use confplan_core::{ConfplanError, Participant, Result};
use std::io::{Cursor, Read, Write};
use std::path::Path;
use zip::write::SimpleFileOptions;
use zip::{ZipArchive, ZipWriter};

/// Placeholder keys substituted with the participant's name.
const NAME_KEYS: [&str; 2] = ["NEV", "NÉV"];

/// Placeholder keys substituted with the talk title.
const TITLE_KEYS: [&str; 2] = ["ELOADAS", "ELŐADÁS"];

/// A loaded certificate template.
///
/// # Examples
///
/// ```no_run
/// use confplan_certificate::CertificateTemplate;
/// use confplan_core::{Roster, RosterEntry};
///
/// let template = CertificateTemplate::from_file("template.docx")?;
/// let roster = Roster::from_entries([RosterEntry::new("Kovács Anna", "Gépi tanulás")]);
/// let rendered: Vec<u8> = template.render(&roster.participants()[0])?;
/// # Ok::<(), confplan_core::ConfplanError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CertificateTemplate {
    data: Vec<u8>,
}

impl CertificateTemplate {
    /// Load a template from raw `.docx` bytes.
    ///
    /// # Errors
    /// Returns [`ConfplanError::TemplateError`] if the bytes are not a
    /// ZIP archive or the archive lacks `word/document.xml`.
    pub fn from_bytes(data: Vec<u8>) -> Result<Self> {
        let mut archive = ZipArchive::new(Cursor::new(&data))
            .map_err(|e| ConfplanError::TemplateError(format!("not a DOCX archive: {e}")))?;
        archive.by_name("word/document.xml").map_err(|e| {
            ConfplanError::TemplateError(format!("template has no word/document.xml: {e}"))
        })?;
        Ok(Self { data })
    }

    /// Load a template from a file path.
    ///
    /// # Errors
    /// Returns [`ConfplanError::IoError`] on read failure or the errors
    /// of [`CertificateTemplate::from_bytes`].
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let data = std::fs::read(path.as_ref())?;
        Self::from_bytes(data)
    }

    /// Render one certificate, returning the filled `.docx` bytes.
    ///
    /// # Errors
    /// Returns [`ConfplanError::TemplateError`] if the archive cannot be
    /// rewritten or a text part is not valid UTF-8.
    pub fn render(&self, participant: &Participant) -> Result<Vec<u8>> {
        let mut archive = ZipArchive::new(Cursor::new(&self.data))
            .map_err(|e| ConfplanError::TemplateError(format!("cannot reopen template: {e}")))?;

        let mut cursor = Cursor::new(Vec::new());
        let mut writer = ZipWriter::new(&mut cursor);
        let options = SimpleFileOptions::default();

        for index in 0..archive.len() {
            let mut entry = archive.by_index(index).map_err(|e| {
                ConfplanError::TemplateError(format!("cannot read template entry: {e}"))
            })?;
            let name = entry.name().to_string();

            if entry.is_dir() {
                writer.add_directory(name, options).map_err(|e| {
                    ConfplanError::TemplateError(format!("cannot write directory: {e}"))
                })?;
                continue;
            }

            let mut content = Vec::new();
            entry.read_to_end(&mut content).map_err(|e| {
                ConfplanError::TemplateError(format!("cannot read {name}: {e}"))
            })?;

            if is_text_part(&name) {
                let xml = String::from_utf8(content).map_err(|e| {
                    ConfplanError::TemplateError(format!("{name} is not UTF-8: {e}"))
                })?;
                content = substitute(&xml, participant).into_bytes();
            }

            writer
                .start_file(name.clone(), options)
                .map_err(|e| ConfplanError::TemplateError(format!("cannot write {name}: {e}")))?;
            writer.write_all(&content)?;
        }

        writer
            .finish()
            .map_err(|e| ConfplanError::TemplateError(format!("cannot finish archive: {e}")))?;
        log::debug!("rendered certificate for {}", participant.name);
        Ok(cursor.into_inner())
    }
}

/// Whether an archive entry is a text part that carries placeholders.
fn is_text_part(name: &str) -> bool {
    name == "word/document.xml"
        || ((name.starts_with("word/header") || name.starts_with("word/footer"))
            && name.ends_with(".xml"))
}

/// Escape a substitution value for inclusion in XML text.
fn xml_escape(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

/// Replace all placeholder occurrences in one XML part.
fn substitute(xml: &str, participant: &Participant) -> String {
    let mut out = xml.to_string();
    let pairs = NAME_KEYS
        .iter()
        .map(|key| (*key, participant.name.as_str()))
        .chain(TITLE_KEYS.iter().map(|key| (*key, participant.title.as_str())));

    for (key, value) in pairs {
        let escaped_value = xml_escape(value);
        out = out.replace(&format!("&lt;&lt;{key}&gt;&gt;"), &escaped_value);
        out = out.replace(&format!("<<{key}>>"), &escaped_value);
    }
    out
}
