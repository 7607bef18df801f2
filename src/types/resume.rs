// src/types/resume.rs
//! Record types produced by a single extraction run

use serde::{Deserialize, Serialize};
use std::fmt;

pub const POSITION_NOT_IDENTIFIED: &str = "Position Not Identified";
pub const UNKNOWN_LEVEL: &str = "Unknown";

// ===== Flat Resume Record =====

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResumeInfo {
    pub name: Option<String>,
    pub email: String,
    pub phone: Option<String>,
    pub education: Vec<String>,
    pub skills: Vec<String>,
    pub degree_major: String,
    pub experience: ExperienceProfile,
    pub total_experience_months: Option<u32>,
    pub work_history: Vec<ExperienceEntry>,
    pub languages: Vec<LanguageEntry>,
    pub links: LinkGroups,
}

/// Ordinal seniority derived from the action verbs of a resume.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ExperienceLevel {
    #[default]
    #[serde(rename = "Entry Level")]
    EntryLevel,
    #[serde(rename = "Mid-Junior")]
    MidJunior,
    #[serde(rename = "Mid-Senior")]
    MidSenior,
    #[serde(rename = "Senior")]
    Senior,
}

impl ExperienceLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExperienceLevel::EntryLevel => "Entry Level",
            ExperienceLevel::MidJunior => "Mid-Junior",
            ExperienceLevel::MidSenior => "Mid-Senior",
            ExperienceLevel::Senior => "Senior",
        }
    }
}

impl fmt::Display for ExperienceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperienceProfile {
    pub level_of_experience: ExperienceLevel,
    pub suggested_position: String,
}

impl Default for ExperienceProfile {
    fn default() -> Self {
        Self {
            level_of_experience: ExperienceLevel::EntryLevel,
            suggested_position: POSITION_NOT_IDENTIFIED.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl ExperienceEntry {
    pub fn is_empty(&self) -> bool {
        self.start_date.is_none()
            && self.end_date.is_none()
            && self.job_title.is_none()
            && self.company.is_none()
            && self.description.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageEntry {
    pub language: String,
    pub level: String,
}

impl LanguageEntry {
    pub fn new(language: &str, level: &str) -> Self {
        Self {
            language: language.to_string(),
            level: level.to_string(),
        }
    }

    pub fn has_known_level(&self) -> bool {
        self.level != UNKNOWN_LEVEL
    }
}

/// Hyperlinks grouped by where they point.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkGroups {
    pub professional_network: Vec<String>,
    pub code_hosting: Vec<String>,
    pub email: Vec<String>,
    pub other: Vec<String>,
}

impl LinkGroups {
    pub fn is_empty(&self) -> bool {
        self.professional_network.is_empty()
            && self.code_hosting.is_empty()
            && self.email.is_empty()
            && self.other.is_empty()
    }

    pub fn len(&self) -> usize {
        self.professional_network.len() + self.code_hosting.len() + self.email.len() + self.other.len()
    }
}
