// CLI tool has many numeric conversions for progress display.
// These are safe because counts and positions are well within
// representable ranges.
#![allow(
    clippy::cast_possible_truncation, // progress bars - safe ranges
    clippy::too_many_lines,           // CLI main() is necessarily large
    clippy::needless_pass_by_value,   // clap requires owned values
    clippy::unnecessary_wraps,        // consistent Result return for CLI handlers
    clippy::must_use_candidate        // CLI functions don't need must_use
)]

//! Confplan CLI - Conference planning from the command line
//!
//! Extracts speaker data from Word abstracts, imports rosters from
//! spreadsheets, generates certificate bundles, and derives talk
//! schedules.

use anyhow::{Context, Result};
use chrono::NaiveTime;
use clap::{Parser, Subcommand};
use colored::Colorize;
use confplan_backend::{
    records_to_entries, write_roster_csv_file, CsvRosterBackend, DocxTextExtractor,
    ExtractionStatus, RosterSource, XlsxRosterBackend,
};
use confplan_certificate::{write_bundle_file, CertificateTemplate, ProcessingStep};
use confplan_core::{derive_schedule, schedule_to_text, Roster, RosterEntry, ScheduleConfig};
use indicatif::{ProgressBar, ProgressStyle};
use std::fs;
use std::path::{Path, PathBuf};

/// Parse a `FROM:TO` reorder directive into a pair of indices.
fn parse_move(s: &str) -> Result<(usize, usize), String> {
    let (from, to) = s
        .split_once(':')
        .ok_or_else(|| format!("expected FROM:TO, got '{s}'"))?;
    let from = from
        .trim()
        .parse::<usize>()
        .map_err(|_| format!("invalid FROM index: '{from}'"))?;
    let to = to
        .trim()
        .parse::<usize>()
        .map_err(|_| format!("invalid TO index: '{to}'"))?;
    Ok((from, to))
}

/// Parse a `HH:MM` start time.
fn parse_start_time(s: &str) -> Result<NaiveTime, String> {
    NaiveTime::parse_from_str(s.trim(), "%H:%M")
        .map_err(|_| format!("expected HH:MM (24-hour), got '{s}'"))
}

/// Pick the roster backend from the file extension.
///
/// `.xlsx` and `.xlsm` go through calamine; everything else is treated
/// as delimited text.
fn load_roster_entries(path: &Path) -> Result<Vec<RosterEntry>> {
    let extension = path
        .extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .unwrap_or_default();

    let entries = match extension.as_str() {
        "xlsx" | "xlsm" => XlsxRosterBackend::new().load_file(path),
        _ => CsvRosterBackend::new().load_file(path),
    }
    .with_context(|| format!("Failed to import roster from {}", path.display()))?;
    Ok(entries)
}

/// Verbosity level for output control
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Verbosity {
    /// Suppress all output except errors
    Quiet,
    /// Normal output (default)
    Normal,
    /// Verbose output with extra details
    Verbose,
}

impl Verbosity {
    /// Create from CLI flags
    const fn from_flags(quiet: bool, verbose: bool) -> Self {
        if quiet {
            Self::Quiet
        } else if verbose {
            Self::Verbose
        } else {
            Self::Normal
        }
    }

    /// Check if output should be shown (not quiet)
    const fn should_show_output(self) -> bool {
        !matches!(self, Self::Quiet)
    }

    /// Check if verbose output is requested
    const fn is_verbose(self) -> bool {
        matches!(self, Self::Verbose)
    }
}

#[derive(Parser, Debug)]
#[command(
    name = "confplan",
    about = "Plan conferences: extract abstracts, import rosters, generate certificates and schedules",
    long_about = "Plan conferences from the command line.\n\
                  \n\
                  Extract speaker names and talk titles from Word abstracts, import\n\
                  rosters from XLSX or CSV spreadsheets, fill certificate templates\n\
                  into a ZIP bundle, and derive a time-sequenced talk schedule.",
    version
)]
struct Args {
    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Show detailed processing information
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Extract speaker names and talk titles from Word abstracts
    #[command(long_about = "Extract speaker names and talk titles from .docx abstracts.\n\
                      \n\
                      Looks for 'Név:' and 'Cím:' / 'Előadás címe:' labels in each\n\
                      document. Files without the labels are kept with placeholder\n\
                      fields; unreadable files are reported and skipped.\n\
                      \n\
                      Examples:\n\
                        confplan extract abstracts/*.docx -o roster.csv\n\
                        confplan extract a.docx b.docx --json")]
    Extract {
        /// Input .docx files
        #[arg(value_name = "INPUTS", required = true)]
        inputs: Vec<PathBuf>,

        /// Output roster CSV path (default: roster.csv)
        #[arg(short, long, value_name = "OUTPUT")]
        output: Option<PathBuf>,

        /// Print extraction records as JSON instead of writing a CSV
        #[arg(long)]
        json: bool,
    },

    /// Import a roster from an XLSX or CSV spreadsheet
    #[command(long_about = "Import a participant roster from a spreadsheet.\n\
                      \n\
                      Reads the first sheet of an .xlsx/.xlsm workbook or a delimited\n\
                      text file (delimiter auto-detected). A header row containing\n\
                      'Név' or 'Cím' is skipped; rows missing a name or title are\n\
                      dropped.\n\
                      \n\
                      Examples:\n\
                        confplan import roster.xlsx\n\
                        confplan import roster.csv -o normalized.csv")]
    Import {
        /// Input spreadsheet (.xlsx, .xlsm, or delimited text)
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        /// Write the normalized roster as CSV instead of printing it
        #[arg(short, long, value_name = "OUTPUT")]
        output: Option<PathBuf>,
    },

    /// Fill a certificate template for every participant into a ZIP
    #[command(long_about = "Generate one certificate per participant.\n\
                      \n\
                      Fills <<NEV>> and <<ELOADAS>> placeholders in a .docx template\n\
                      and packs the rendered documents into a single ZIP bundle.\n\
                      \n\
                      Examples:\n\
                        confplan certificates -t template.docx -r roster.xlsx\n\
                        confplan certificates -t template.docx -r roster.csv -o certs.zip")]
    Certificates {
        /// Certificate template (.docx with <<NEV>>/<<ELOADAS>> placeholders)
        #[arg(short, long, value_name = "TEMPLATE")]
        template: PathBuf,

        /// Roster spreadsheet (.xlsx, .xlsm, or delimited text)
        #[arg(short, long, value_name = "ROSTER")]
        roster: PathBuf,

        /// Output ZIP path (default: certificates.zip)
        #[arg(short, long, value_name = "OUTPUT")]
        output: Option<PathBuf>,
    },

    /// Derive a time-sequenced talk schedule from a roster
    #[command(long_about = "Derive a talk schedule from a roster.\n\
                      \n\
                      Talks are laid out back to back from the start time; a break is\n\
                      inserted after every N talks unless --no-break is given. Talks\n\
                      can be reordered before scheduling with repeated --move flags.\n\
                      \n\
                      Examples:\n\
                        confplan schedule -r roster.xlsx\n\
                        confplan schedule -r roster.csv --start 10:00 --slot-minutes 30\n\
                        confplan schedule -r roster.csv --move 3:0 --move 1:2 -o schedule.txt")]
    Schedule {
        /// Roster spreadsheet (.xlsx, .xlsm, or delimited text)
        #[arg(short, long, value_name = "ROSTER")]
        roster: PathBuf,

        /// First talk start time (24-hour HH:MM)
        #[arg(long, value_name = "HH:MM", default_value = "09:00", value_parser = parse_start_time)]
        start: NaiveTime,

        /// Minutes per talk
        #[arg(long, value_name = "N", default_value_t = 20)]
        slot_minutes: u32,

        /// Disable break insertion
        #[arg(long)]
        no_break: bool,

        /// Insert a break after every N talks
        #[arg(long, value_name = "N", default_value_t = 3)]
        break_after: u32,

        /// Break length in minutes
        #[arg(long, value_name = "N", default_value_t = 15)]
        break_minutes: u32,

        /// Move the talk at index FROM to index TO before scheduling
        /// (0-based, applied in order, may be repeated)
        #[arg(long = "move", value_name = "FROM:TO", value_parser = parse_move)]
        moves: Vec<(usize, usize)>,

        /// Output file path (default: stdout)
        #[arg(short, long, value_name = "OUTPUT")]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();
    let verbosity = Verbosity::from_flags(args.quiet, args.verbose);

    match args.command {
        Commands::Extract {
            inputs,
            output,
            json,
        } => extract_command(inputs, output, json, verbosity),
        Commands::Import { input, output } => import_command(input, output, verbosity),
        Commands::Certificates {
            template,
            roster,
            output,
        } => certificates_command(template, roster, output, verbosity),
        Commands::Schedule {
            roster,
            start,
            slot_minutes,
            no_break,
            break_after,
            break_minutes,
            moves,
            output,
        } => {
            let config = ScheduleConfig {
                start_time: start,
                slot_minutes,
                break_enabled: !no_break,
                break_after,
                break_minutes,
            };
            schedule_command(roster, config, moves, output, verbosity)
        }
    }
}

fn extract_command(
    inputs: Vec<PathBuf>,
    output: Option<PathBuf>,
    json: bool,
    verbosity: Verbosity,
) -> Result<()> {
    let extractor = DocxTextExtractor::new();
    let records = extractor.extract_batch(&inputs);

    if verbosity.should_show_output() {
        for record in &records {
            let marker = match record.status {
                ExtractionStatus::Ok => "✓".green().bold(),
                ExtractionStatus::Warning => "!".yellow().bold(),
                ExtractionStatus::Error => "✗".red().bold(),
            };
            eprintln!("{} {} — {} | {}", marker, record.file_name, record.name, record.title);
        }
    }

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&records).context("Failed to serialize records")?
        );
        return Ok(());
    }

    let entries = records_to_entries(&records);
    let failed = records
        .iter()
        .filter(|r| r.status == ExtractionStatus::Error)
        .count();

    let output = output.unwrap_or_else(|| PathBuf::from("roster.csv"));
    write_roster_csv_file(&output, &entries)
        .with_context(|| format!("Failed to write roster to {}", output.display()))?;

    if verbosity.should_show_output() {
        eprintln!(
            "{} {} of {} abstracts extracted to {}",
            "✓".green().bold(),
            entries.len().to_string().cyan(),
            records.len(),
            output.display().to_string().bright_white()
        );
        if failed > 0 {
            eprintln!(
                "{} {failed} file(s) could not be read",
                "Warning:".yellow().bold()
            );
        }
    }
    Ok(())
}

fn import_command(input: PathBuf, output: Option<PathBuf>, verbosity: Verbosity) -> Result<()> {
    let entries = load_roster_entries(&input)?;

    if verbosity.is_verbose() {
        eprintln!(
            "{} Imported {} participants from {}",
            "Info:".blue().bold(),
            entries.len(),
            input.display()
        );
    }

    match output {
        Some(path) => {
            write_roster_csv_file(&path, &entries)
                .with_context(|| format!("Failed to write roster to {}", path.display()))?;
            if verbosity.should_show_output() {
                eprintln!(
                    "{} {} participants written to {}",
                    "✓".green().bold(),
                    entries.len().to_string().cyan(),
                    path.display().to_string().bright_white()
                );
            }
        }
        None => {
            for (index, entry) in entries.iter().enumerate() {
                println!("{index:>3}. {} | {}", entry.name, entry.title);
            }
        }
    }
    Ok(())
}

fn certificates_command(
    template_path: PathBuf,
    roster_path: PathBuf,
    output: Option<PathBuf>,
    verbosity: Verbosity,
) -> Result<()> {
    let template = CertificateTemplate::from_file(&template_path)
        .with_context(|| format!("Failed to load template {}", template_path.display()))?;

    let entries = load_roster_entries(&roster_path)?;
    if entries.is_empty() {
        eprintln!(
            "{} Roster is empty: {}",
            "Error:".red().bold(),
            roster_path.display()
        );
        anyhow::bail!("Roster is empty: {}", roster_path.display());
    }
    let roster = Roster::from_entries(entries);
    let output = output.unwrap_or_else(|| PathBuf::from("certificates.zip"));

    let progress = if verbosity.should_show_output() {
        let pb = ProgressBar::new(roster.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
                .expect("template is compile-time constant")
                .progress_chars("█▓▒░  "),
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    write_bundle_file(&output, &template, roster.participants(), |report| {
        if report.step == ProcessingStep::Generating {
            progress.set_position(report.current as u64);
            progress.set_message(report.message.clone());
        }
    })
    .with_context(|| format!("Failed to write bundle to {}", output.display()))?;
    progress.finish_and_clear();

    if verbosity.should_show_output() {
        eprintln!(
            "{} {} certificates written to {}",
            "✓".green().bold(),
            roster.len().to_string().cyan(),
            output.display().to_string().bright_white()
        );
    }
    Ok(())
}

fn schedule_command(
    roster_path: PathBuf,
    config: ScheduleConfig,
    moves: Vec<(usize, usize)>,
    output: Option<PathBuf>,
    verbosity: Verbosity,
) -> Result<()> {
    let entries = load_roster_entries(&roster_path)?;
    let mut roster = Roster::from_entries(entries);

    for (from, to) in moves {
        roster.reorder(from, to).with_context(|| {
            format!("Cannot move talk {from} to position {to}")
        })?;
        if verbosity.is_verbose() {
            eprintln!("{} Moved talk {from} to position {to}", "Info:".blue().bold());
        }
    }

    let schedule = derive_schedule(roster.participants(), &config)
        .context("Failed to derive schedule")?;
    let text = schedule_to_text(&schedule);

    match output {
        Some(path) => {
            fs::write(&path, &text)
                .with_context(|| format!("Failed to write schedule to {}", path.display()))?;
            if verbosity.should_show_output() {
                eprintln!(
                    "{} {} schedule items written to {}",
                    "✓".green().bold(),
                    schedule.len().to_string().cyan(),
                    path.display().to_string().bright_white()
                );
            }
        }
        None => println!("{text}"),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_move_basic() {
        assert_eq!(parse_move("2:0").unwrap(), (2, 0));
        assert_eq!(parse_move("0:7").unwrap(), (0, 7));
    }

    #[test]
    fn test_parse_move_whitespace() {
        assert_eq!(parse_move(" 3 : 1 ").unwrap(), (3, 1));
    }

    #[test]
    fn test_parse_move_errors() {
        assert!(parse_move("").is_err());
        assert!(parse_move("3").is_err());
        assert!(parse_move("a:b").is_err());
        assert!(parse_move("-1:0").is_err());
        assert!(parse_move("1:").is_err());
    }

    #[test]
    fn test_parse_start_time_basic() {
        let parsed = parse_start_time("09:30").unwrap();
        assert_eq!(parsed, NaiveTime::from_hms_opt(9, 30, 0).unwrap());
    }

    #[test]
    fn test_parse_start_time_midnight_and_late() {
        assert_eq!(
            parse_start_time("00:00").unwrap(),
            NaiveTime::from_hms_opt(0, 0, 0).unwrap()
        );
        assert_eq!(
            parse_start_time("23:59").unwrap(),
            NaiveTime::from_hms_opt(23, 59, 0).unwrap()
        );
    }

    #[test]
    fn test_parse_start_time_errors() {
        assert!(parse_start_time("25:00").is_err());
        assert!(parse_start_time("9am").is_err());
        assert!(parse_start_time("").is_err());
    }

    #[test]
    fn test_verbosity_from_flags() {
        assert_eq!(Verbosity::from_flags(true, false), Verbosity::Quiet);
        assert_eq!(Verbosity::from_flags(false, true), Verbosity::Verbose);
        assert_eq!(Verbosity::from_flags(false, false), Verbosity::Normal);
    }

    #[test]
    fn test_verbosity_output_control() {
        assert!(!Verbosity::Quiet.should_show_output());
        assert!(Verbosity::Normal.should_show_output());
        assert!(Verbosity::Verbose.is_verbose());
        assert!(!Verbosity::Normal.is_verbose());
    }
}
