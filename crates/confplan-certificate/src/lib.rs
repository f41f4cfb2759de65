//! Certificate generation for `confplan_rs`
//!
//! Fills a `.docx` certificate template once per participant and packs
//! the rendered documents into a single ZIP bundle.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────┐     render()      ┌──────────────────────┐
//! │ CertificateTemplate │ ────────────────▶ │ filled .docx (bytes) │
//! │ (<<NEV>>/<<ELOADAS>>│                   └──────────────────────┘
//! │  placeholders)      │                              │
//! └─────────────────────┘                              ▼
//!                           generate_bundle()  ┌───────────────────┐
//!                        ─────────────────────▶│ certificates.zip  │
//!                           (progress events)  └───────────────────┘
//! ```
//!
//! # Quick Start
//!
//! ```no_run
//! use confplan_certificate::{generate_bundle, CertificateTemplate};
//! use confplan_core::{Roster, RosterEntry};
//!
//! let template = CertificateTemplate::from_file("template.docx")?;
//! let roster = Roster::from_entries([RosterEntry::new("Kovács Anna", "Gépi tanulás")]);
//! let bundle = generate_bundle(&template, roster.participants(), |progress| {
//!     println!("{:?} {}/{}", progress.step, progress.current, progress.total);
//! })?;
//! std::fs::write("certificates.zip", bundle)?;
//! # Ok::<(), confplan_core::ConfplanError>(())
//! ```

pub mod bundle;
pub mod template;

pub use bundle::{generate_bundle, write_bundle_file, ProcessingStep, Progress};
pub use template::CertificateTemplate;
