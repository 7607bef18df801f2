// src/cli.rs
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::core::{ConfigManager, FsOps};
use crate::types::{OutputFormat, ResumeInfo, ResumeRenderer};
use crate::utils::validate_file_extension;
use crate::ResumeExtractor;

const SUMMARY_HEADERS: [&str; 11] = [
    "file", "name", "email", "phone", "education", "skills", "major", "level", "position",
    "languages", "links",
];

#[derive(Parser)]
#[command(name = "cvextract")]
#[command(about = "Extract structured fields from resume files")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Configuration file (.yaml, .yml or .toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Directory holding skills.csv, majors.csv and positions.csv
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Write JSON logs to this file instead of stderr
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Extract one resume and print the result
    Parse {
        file: PathBuf,
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Extract every resume in a directory into a CSV summary
    Batch {
        dir: PathBuf,
        #[arg(long, default_value = "summary.csv")]
        output: PathBuf,
    },
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct BatchReport {
    pub processed: usize,
    pub skipped: usize,
}

pub fn handle_command(cli: Cli) -> Result<()> {
    let mut config = ConfigManager::load(cli.config.as_deref())?.extractor;
    if let Some(dir) = cli.data_dir {
        config = config.with_data_dir(dir);
    }

    let extractor = ResumeExtractor::new(&config)?;

    match cli.command {
        Command::Parse { file, format } => {
            let rendered = run_parse(&extractor, &file, format)?;
            println!("{}", rendered.trim_end());
        }
        Command::Batch { dir, output } => {
            let report = run_batch(&extractor, &dir, &output)?;
            println!(
                "Processed {} resume(s), skipped {}. Summary written to {}",
                report.processed,
                report.skipped,
                output.display()
            );
        }
    }

    Ok(())
}

pub fn run_parse(extractor: &ResumeExtractor, file: &Path, format: OutputFormat) -> Result<String> {
    let info = extractor.extract_file(file)?;
    ResumeRenderer::render(&info, format)
}

/// Extract every resume in `dir` and write one CSV row per file.
/// A file that fails to load is logged and skipped.
pub fn run_batch(extractor: &ResumeExtractor, dir: &Path, output: &Path) -> Result<BatchReport> {
    validate_file_extension(&output.to_string_lossy(), &["csv"])?;

    let files = FsOps::list_resume_files(dir)?;
    info!("Found {} resume(s) in {}", files.len(), dir.display());

    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        FsOps::ensure_dir_exists(parent)?;
    }

    let mut writer = csv::Writer::from_path(output)
        .with_context(|| format!("Failed to create summary file: {}", output.display()))?;
    writer
        .write_record(SUMMARY_HEADERS)
        .context("Failed to write summary header")?;

    let mut report = BatchReport::default();
    for file in &files {
        match extractor.extract_file(file) {
            Ok(info) => {
                writer
                    .write_record(summary_row(file, &info))
                    .with_context(|| format!("Failed to write summary row for {}", file.display()))?;
                report.processed += 1;
            }
            Err(e) => {
                warn!("Skipping {}: {:#}", file.display(), e);
                report.skipped += 1;
            }
        }
    }

    writer.flush().context("Failed to flush summary file")?;
    Ok(report)
}

pub fn summary_row(file: &Path, info: &ResumeInfo) -> Vec<String> {
    let file_name = file
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();

    let languages = info
        .languages
        .iter()
        .map(|l| format!("{} ({})", l.language, l.level))
        .collect::<Vec<_>>()
        .join("; ");

    vec![
        file_name,
        info.name.clone().unwrap_or_default(),
        info.email.clone(),
        info.phone.clone().unwrap_or_default(),
        info.education.join("; "),
        info.skills.join("; "),
        info.degree_major.clone(),
        info.experience.level_of_experience.to_string(),
        info.experience.suggested_position.clone(),
        languages,
        info.links.len().to_string(),
    ]
}
