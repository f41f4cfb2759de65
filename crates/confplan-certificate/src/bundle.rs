//! Batch certificate generation into a single ZIP bundle.

use crate::template::CertificateTemplate;
use confplan_backend::sanitize_filename;
use confplan_core::{ConfplanError, Participant, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::io::{Cursor, Write};
use std::path::Path;
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

/// Phase of a running bundle generation, reported through the progress
/// callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProcessingStep {
    /// Template is being validated.
    Parsing,
    /// Certificates are being rendered, one per participant.
    Generating,
    /// Rendered documents are being packed into the archive.
    Zipping,
    /// The bundle is finished.
    Completed,
}

/// A progress report emitted during bundle generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Progress {
    /// Current phase.
    pub step: ProcessingStep,
    /// Participants processed so far in this phase.
    pub current: usize,
    /// Total participants.
    pub total: usize,
    /// Human-readable description of the current item.
    pub message: String,
}

/// Generate one certificate per participant and pack them into a ZIP.
///
/// Archive entries are named `certificate_<name>.docx` with the name run
/// through [`sanitize_filename`]. Colliding stems get a numeric suffix
/// (`_2`, `_3`, …); names that sanitize to nothing fall back to the
/// participant id.
///
/// The callback receives a [`Progress`] per phase transition and per
/// rendered certificate.
///
/// # Errors
/// Returns [`ConfplanError::TemplateError`] if rendering or archive
/// writing fails.
pub fn generate_bundle<F>(
    template: &CertificateTemplate,
    participants: &[Participant],
    mut on_progress: F,
) -> Result<Vec<u8>>
where
    F: FnMut(&Progress),
{
    let total = participants.len();
    on_progress(&Progress {
        step: ProcessingStep::Parsing,
        current: 0,
        total,
        message: "Validating template".to_string(),
    });

    let mut cursor = Cursor::new(Vec::new());
    let mut writer = ZipWriter::new(&mut cursor);
    let options = SimpleFileOptions::default();
    let mut used_stems: HashMap<String, usize> = HashMap::new();

    for (index, participant) in participants.iter().enumerate() {
        on_progress(&Progress {
            step: ProcessingStep::Generating,
            current: index + 1,
            total,
            message: participant.name.clone(),
        });

        let rendered = template.render(participant)?;
        let entry_name = bundle_entry_name(participant, &mut used_stems);

        on_progress(&Progress {
            step: ProcessingStep::Zipping,
            current: index + 1,
            total,
            message: entry_name.clone(),
        });

        writer
            .start_file(entry_name.clone(), options)
            .map_err(|e| {
                ConfplanError::TemplateError(format!("cannot write {entry_name}: {e}"))
            })?;
        writer.write_all(&rendered)?;
    }

    writer
        .finish()
        .map_err(|e| ConfplanError::TemplateError(format!("cannot finish bundle: {e}")))?;

    on_progress(&Progress {
        step: ProcessingStep::Completed,
        current: total,
        total,
        message: format!("{total} certificates generated"),
    });
    log::info!("generated certificate bundle with {total} entries");
    Ok(cursor.into_inner())
}

/// Generate a bundle and write it to a file path.
///
/// # Errors
/// Returns [`ConfplanError::IoError`] on write failure or the errors of
/// [`generate_bundle`].
pub fn write_bundle_file<P, F>(
    path: P,
    template: &CertificateTemplate,
    participants: &[Participant],
    on_progress: F,
) -> Result<()>
where
    P: AsRef<Path>,
    F: FnMut(&Progress),
{
    let bundle = generate_bundle(template, participants, on_progress)?;
    std::fs::write(path.as_ref(), bundle)?;
    Ok(())
}

/// Pick a unique archive entry name for one participant.
fn bundle_entry_name(
    participant: &Participant,
    used_stems: &mut HashMap<String, usize>,
) -> String {
    let mut stem = sanitize_filename(&participant.name);
    if stem.chars().all(|c| c == '_') {
        stem = format!("participant_{}", participant.id);
    }

    let count = used_stems.entry(stem.clone()).or_insert(0);
    *count += 1;
    if *count > 1 {
        format!("certificate_{stem}_{count}.docx")
    } else {
        format!("certificate_{stem}.docx")
    }
}
