// src/extract/languages.rs
//! Spoken languages and proficiency levels from the Languages section

use super::sections::{inline_heading, is_heading, section_heading, Section};
use crate::config::MatchMode;
use crate::types::{LanguageEntry, UNKNOWN_LEVEL};
use crate::utils::keyword_positions;

pub const KNOWN_LANGUAGES: [&str; 5] = ["English", "Arabic", "French", "Spanish", "German"];

/// Longest first
pub const PROFICIENCY_LEVELS: [&str; 12] = [
    "Upper-Intermediate",
    "Conversational",
    "Intermediate",
    "Professional",
    "Elementary",
    "Proficient",
    "Bilingual",
    "Beginner",
    "Advanced",
    "Fluent",
    "Native",
    "Basic",
];

const SEGMENT_SEPARATORS: [char; 4] = [',', ';', '|', '•'];

pub fn extract_languages(text: &str) -> Vec<LanguageEntry> {
    let mut entries: Vec<LanguageEntry> = Vec::new();

    for line in languages_block(text) {
        for segment in line.split(SEGMENT_SEPARATORS) {
            let lower = segment.to_lowercase().replace("upper intermediate", "upper-intermediate");
            let languages = languages_in(&lower);
            let levels = levels_in(&lower);

            if languages.is_empty() {
                // "English" on one line, "Fluent" on the next
                if let (Some((_, level)), Some(last)) = (levels.first(), entries.last_mut()) {
                    if !last.has_known_level() {
                        last.level = level.to_string();
                    }
                }
                continue;
            }

            for (i, (start, language)) in languages.iter().enumerate() {
                let next_start = languages.get(i + 1).map_or(lower.len(), |(next, _)| *next);
                let following = levels
                    .iter()
                    .find(|(position, _)| *position > *start && *position < next_start);

                // "Fluent in English" puts the level first
                let level = match following {
                    Some((_, level)) => Some(*level),
                    None if languages.len() == 1 => levels.first().map(|(_, level)| *level),
                    None => None,
                };

                entries.push(LanguageEntry::new(language, level.unwrap_or(UNKNOWN_LEVEL)));
            }
        }
    }

    entries
}

/// Lines after the Languages heading, up to the next section heading.
/// Content on the heading line itself (`Languages: English`) is included.
pub fn languages_block(text: &str) -> Vec<&str> {
    let mut collecting = false;
    let mut lines = Vec::new();

    for line in text.lines() {
        let trimmed = line.trim();

        if !collecting {
            if section_heading(trimmed) == Some(Section::Languages) {
                collecting = true;
            } else if let Some((Section::Languages, rest)) = inline_heading(trimmed) {
                collecting = true;
                lines.push(rest);
            }
            continue;
        }

        if is_heading(trimmed) || inline_heading(trimmed).is_some() {
            break;
        }
        if !trimmed.is_empty() {
            lines.push(trimmed);
        }
    }

    lines
}

/// Known languages in `lower` with their first offset, in order of appearance
fn languages_in(lower: &str) -> Vec<(usize, &'static str)> {
    let mut found: Vec<(usize, &'static str)> = KNOWN_LANGUAGES
        .iter()
        .filter_map(|language| {
            keyword_positions(lower, language, MatchMode::WholeWord)
                .first()
                .map(|position| (*position, *language))
        })
        .collect();
    found.sort_by_key(|(position, _)| *position);
    found
}

/// Every proficiency token in `lower` with its offset, in order of appearance.
/// At equal offsets the longer token comes first.
fn levels_in(lower: &str) -> Vec<(usize, &'static str)> {
    let mut found: Vec<(usize, &'static str)> = PROFICIENCY_LEVELS
        .iter()
        .flat_map(|level| {
            keyword_positions(lower, level, MatchMode::WholeWord)
                .into_iter()
                .map(move |position| (position, *level))
        })
        .collect();
    found.sort_by_key(|(position, level)| (*position, std::cmp::Reverse(level.len())));
    found
}
