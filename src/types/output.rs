// src/types/output.rs
//! Rendering of a `ResumeInfo` into the supported output formats

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use super::resume::{ExperienceEntry, ResumeInfo};

const NOT_FOUND: &str = "Not Found";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Yaml,
    Toml,
}

pub struct ResumeRenderer;

impl ResumeRenderer {
    pub fn render(info: &ResumeInfo, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Text => Ok(Self::to_text(info)),
            OutputFormat::Json => {
                serde_json::to_string_pretty(info).context("Failed to serialize resume as JSON")
            }
            OutputFormat::Yaml => {
                serde_yaml::to_string(info).context("Failed to serialize resume as YAML")
            }
            OutputFormat::Toml => {
                toml::to_string_pretty(info).context("Failed to serialize resume as TOML")
            }
        }
    }

    /// Human readable report, one field per line.
    pub fn to_text(info: &ResumeInfo) -> String {
        let mut out = String::new();

        out.push_str(&format!(
            "Full Name: {}\n",
            info.name.as_deref().unwrap_or(NOT_FOUND)
        ));
        out.push_str(&format!("Email: {}\n", or_not_found(&info.email)));
        out.push_str(&format!(
            "Phone Number: {}\n",
            info.phone.as_deref().unwrap_or(NOT_FOUND)
        ));
        out.push_str(&format!(
            "Education (Universities/Institutes): {}\n",
            join_or_not_found(&info.education)
        ));
        out.push_str(&format!("Skills: {}\n", join_or_not_found(&info.skills)));
        out.push_str(&format!("Degree Major: {}\n", or_not_found(&info.degree_major)));
        out.push_str(&format!(
            "Experience Level: {}\n",
            info.experience.level_of_experience
        ));
        out.push_str(&format!(
            "Suggested Position: {}\n",
            info.experience.suggested_position
        ));

        if let Some(months) = info.total_experience_months {
            out.push_str(&format!(
                "Total Experience: {} years {} months\n",
                months / 12,
                months % 12
            ));
        }

        if info.work_history.is_empty() {
            out.push_str(&format!("Work History: {}\n", NOT_FOUND));
        } else {
            out.push_str("Work History:\n");
            for entry in &info.work_history {
                out.push_str(&format!("  - {}\n", describe_entry(entry)));
                if let Some(description) = &entry.description {
                    out.push_str(&format!("    {}\n", description));
                }
            }
        }

        if info.languages.is_empty() {
            out.push_str(&format!("Languages: {}\n", NOT_FOUND));
        } else {
            let languages: Vec<String> = info
                .languages
                .iter()
                .map(|l| format!("{} ({})", l.language, l.level))
                .collect();
            out.push_str(&format!("Languages: {}\n", languages.join(", ")));
        }

        if info.links.is_empty() {
            out.push_str(&format!("Links: {}\n", NOT_FOUND));
        } else {
            out.push_str("Links:\n");
            let groups = [
                ("Professional Network", &info.links.professional_network),
                ("Code Hosting", &info.links.code_hosting),
                ("Email", &info.links.email),
                ("Other", &info.links.other),
            ];
            for (label, links) in groups {
                if !links.is_empty() {
                    out.push_str(&format!("  {}: {}\n", label, links.join(", ")));
                }
            }
        }

        out
    }
}

fn or_not_found(value: &str) -> &str {
    if value.is_empty() {
        NOT_FOUND
    } else {
        value
    }
}

fn join_or_not_found(values: &[String]) -> String {
    if values.is_empty() {
        NOT_FOUND.to_string()
    } else {
        values.join(", ")
    }
}

fn describe_entry(entry: &ExperienceEntry) -> String {
    let role = match (&entry.job_title, &entry.company) {
        (Some(title), Some(company)) => format!("{} at {}", title, company),
        (Some(title), None) => title.clone(),
        (None, Some(company)) => company.clone(),
        (None, None) => "(untitled)".to_string(),
    };

    match (&entry.start_date, &entry.end_date) {
        (Some(start), Some(end)) => format!("{} ({} - {})", role, start, end),
        (Some(start), None) => format!("{} ({})", role, start),
        _ => role,
    }
}
