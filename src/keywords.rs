// src/keywords.rs
//! Keyword CSV files: skills, majors and position indicator verbs

use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;
use tracing::info;

use crate::config::{ExtractorConfig, MatchMode};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PositionKeywords {
    pub position: String,
    /// Lowercased verbs that point at this position
    pub keywords: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct PositionRow {
    position: String,
    keywords: String,
}

/// Every keyword list a run needs, loaded once.
#[derive(Debug, Clone, Default)]
pub struct KeywordStore {
    pub skills: Vec<String>,
    pub majors: Vec<String>,
    pub positions: Vec<PositionKeywords>,
    pub match_mode: MatchMode,
}

impl KeywordStore {
    pub fn load(config: &ExtractorConfig) -> Result<Self> {
        let skills = load_keywords(&config.skills_path())?;
        let majors = load_keywords(&config.majors_path())?;
        let positions = load_positions(&config.positions_path())?;

        info!(
            "Loaded {} skills, {} majors, {} positions from {}",
            skills.len(),
            majors.len(),
            positions.len(),
            config.data_dir_absolute().display()
        );

        Ok(Self {
            skills,
            majors,
            positions,
            match_mode: config.keyword_match,
        })
    }

    /// Lowercased verbs of every position, used to widen the verb lexicon
    pub fn position_verbs(&self) -> impl Iterator<Item = &str> {
        self.positions
            .iter()
            .flat_map(|p| p.keywords.iter().map(String::as_str))
    }
}

/// First column of every row, no header. Blank cells and repeats are dropped.
pub fn load_keywords(path: &Path) -> Result<Vec<String>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("Failed to open keyword file: {}", path.display()))?;

    let mut seen = HashSet::new();
    let mut keywords = Vec::new();

    for (line, record) in reader.records().enumerate() {
        let record = record.with_context(|| {
            format!("Malformed row {} in {}", line + 1, path.display())
        })?;
        if let Some(value) = record.get(0) {
            if !value.is_empty() && seen.insert(value.to_string()) {
                keywords.push(value.to_string());
            }
        }
    }

    Ok(keywords)
}

/// Headered CSV with `position` and `keywords` columns. The keywords cell is
/// itself a comma separated list.
pub fn load_positions(path: &Path) -> Result<Vec<PositionKeywords>> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("Failed to open positions file: {}", path.display()))?;

    let mut positions = Vec::new();
    for row in reader.deserialize::<PositionRow>() {
        let row = row.with_context(|| format!("Malformed positions row in {}", path.display()))?;
        if row.position.is_empty() {
            continue;
        }

        let keywords = row
            .keywords
            .split(',')
            .map(|k| k.trim().to_lowercase())
            .filter(|k| !k.is_empty())
            .collect();

        positions.push(PositionKeywords {
            position: row.position,
            keywords,
        });
    }

    Ok(positions)
}
