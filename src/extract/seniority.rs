// src/extract/seniority.rs
//! Experience level and suggested position from action verbs

use tracing::debug;

use crate::keywords::PositionKeywords;
use crate::nlp::AnnotatedText;
use crate::types::{ExperienceLevel, ExperienceProfile, POSITION_NOT_IDENTIFIED};

pub const SENIOR_KEYWORDS: [&str; 7] = [
    "lead", "manage", "direct", "oversee", "supervise", "orchestrate", "govern",
];
pub const MID_SENIOR_KEYWORDS: [&str; 7] = [
    "develop", "design", "analyze", "implement", "coordinate", "execute", "strategize",
];
pub const MID_JUNIOR_KEYWORDS: [&str; 7] = [
    "assist", "support", "collaborate", "participate", "aid", "facilitate", "contribute",
];

/// Highest tier whose keywords appear among the verb lemmas
pub fn experience_level(verbs: &[&str]) -> ExperienceLevel {
    let uses_any = |keywords: &[&'static str]| keywords.iter().any(|k| verbs.contains(k));

    if uses_any(&SENIOR_KEYWORDS) {
        ExperienceLevel::Senior
    } else if uses_any(&MID_SENIOR_KEYWORDS) {
        ExperienceLevel::MidSenior
    } else if uses_any(&MID_JUNIOR_KEYWORDS) {
        ExperienceLevel::MidJunior
    } else {
        ExperienceLevel::EntryLevel
    }
}

pub fn suggest_position(verbs: &[&str], positions: &[PositionKeywords]) -> String {
    positions
        .iter()
        .find(|p| p.keywords.iter().any(|k| verbs.contains(&k.as_str())))
        .map(|p| p.position.clone())
        .unwrap_or_else(|| POSITION_NOT_IDENTIFIED.to_string())
}

pub fn extract_experience_profile(
    doc: &AnnotatedText,
    positions: &[PositionKeywords],
) -> ExperienceProfile {
    let verbs = doc.verbs();
    let profile = ExperienceProfile {
        level_of_experience: experience_level(&verbs),
        suggested_position: suggest_position(&verbs, positions),
    };

    debug!(
        "{} verbs -> {} / {}",
        verbs.len(),
        profile.level_of_experience,
        profile.suggested_position
    );

    profile
}
