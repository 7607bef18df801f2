// src/lib.rs
use anyhow::{Context, Result};
use std::path::Path;
use tracing::{debug, info};

pub mod cli;
pub mod config;
pub mod core;
pub mod document;
pub mod extract;
pub mod keywords;
pub mod nlp;
pub mod types;
pub mod utils;

use config::ExtractorConfig;
use document::load_document;
use keywords::KeywordStore;
use nlp::{Annotator, RuleAnnotator};
use types::ResumeInfo;

/// Runs every field extractor over one resume
pub struct ResumeExtractor {
    keywords: KeywordStore,
    annotator: Box<dyn Annotator>,
}

impl ResumeExtractor {
    /// Load the keyword files named by `config` and build the annotator
    pub fn new(config: &ExtractorConfig) -> Result<Self> {
        let keywords = KeywordStore::load(config).context("Failed to load keyword files")?;
        Ok(Self::with_keywords(keywords))
    }

    /// Build from keywords already in memory. Position verbs join the verb lexicon.
    pub fn with_keywords(keywords: KeywordStore) -> Self {
        let annotator = RuleAnnotator::new().with_verbs(keywords.position_verbs());
        Self {
            keywords,
            annotator: Box::new(annotator),
        }
    }

    pub fn with_annotator(mut self, annotator: Box<dyn Annotator>) -> Self {
        self.annotator = annotator;
        self
    }

    pub fn extract_file(&self, path: &Path) -> Result<ResumeInfo> {
        let document = load_document(path)
            .with_context(|| format!("Failed to load resume: {}", path.display()))?;

        info!(
            "Extracting fields from {} ({} chars, {} link annotations)",
            path.display(),
            document.text.len(),
            document.annotation_links.len()
        );

        Ok(self.extract_text(&document.text, &document.annotation_links))
    }

    /// Annotate `text` once and run every extractor over it.
    /// `extra_links` are link targets found outside the text, e.g. PDF annotations.
    pub fn extract_text(&self, text: &str, extra_links: &[String]) -> ResumeInfo {
        let doc = self.annotator.annotate(text);
        let mode = self.keywords.match_mode;

        let work_history = extract::extract_experience(text);
        let today = chrono::Local::now().date_naive();

        let info = ResumeInfo {
            name: extract::extract_name(&doc),
            email: extract::extract_email(&doc),
            phone: extract::extract_phone(text),
            education: extract::extract_education(&doc),
            skills: extract::extract_skills(text, &self.keywords.skills, mode),
            degree_major: extract::extract_major(text, &self.keywords.majors, mode),
            experience: extract::extract_experience_profile(&doc, &self.keywords.positions),
            total_experience_months: extract::total_experience_months(&work_history, today),
            work_history,
            languages: extract::extract_languages(text),
            links: extract::extract_links(text, extra_links),
        };

        debug!(
            "Extracted {} skills, {} jobs, {} languages, {} links",
            info.skills.len(),
            info.work_history.len(),
            info.languages.len(),
            info.links.len()
        );

        info
    }
}

/// Convenience function for a one-off extraction
pub fn extract_resume(path: &Path, config: &ExtractorConfig) -> Result<ResumeInfo> {
    ResumeExtractor::new(config)?.extract_file(path)
}
