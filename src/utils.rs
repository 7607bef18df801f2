// src/utils.rs
use anyhow::Result;
use std::collections::HashSet;

use crate::config::MatchMode;

/// Normalize text coming out of a PDF or a text file: unix newlines, page
/// breaks as newlines, non-breaking spaces as spaces, no trailing blanks.
pub fn normalize_extracted_text(text: &str) -> String {
    text.replace("\r\n", "\n")
        .replace(['\r', '\u{0C}'], "\n")
        .replace('\u{A0}', " ")
        .split('\n')
        .map(str::trim_end)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Collapse runs of whitespace into single spaces
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Keep the first occurrence of every value
pub fn dedup_preserving_order(values: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    values
        .into_iter()
        .filter(|value| seen.insert(value.clone()))
        .collect()
}

/// Case-insensitive keyword test. `haystack_lower` must already be lowercased.
pub fn contains_keyword(haystack_lower: &str, keyword: &str, mode: MatchMode) -> bool {
    !keyword_positions(haystack_lower, keyword, mode).is_empty()
}

/// Byte offsets of every match of `keyword` in `haystack_lower`
pub fn keyword_positions(haystack_lower: &str, keyword: &str, mode: MatchMode) -> Vec<usize> {
    let needle = keyword.to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }

    haystack_lower
        .match_indices(&needle)
        .map(|(start, _)| start)
        .filter(|&start| match mode {
            MatchMode::Substring => true,
            MatchMode::WholeWord => {
                let end = start + needle.len();
                let before = haystack_lower[..start].chars().next_back();
                let after = haystack_lower[end..].chars().next();
                !before.map(is_word_char).unwrap_or(false)
                    && !after.map(is_word_char).unwrap_or(false)
            }
        })
        .collect()
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Validate file extension against allowed types
pub fn validate_file_extension(filename: &str, allowed: &[&str]) -> Result<()> {
    let ext = std::path::Path::new(filename)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_lowercase())
        .ok_or_else(|| anyhow::anyhow!("File has no extension: {}", filename))?;

    if !allowed.contains(&ext.as_str()) {
        anyhow::bail!(
            "Unsupported file extension: {}. Allowed: {:?}",
            ext,
            allowed
        );
    }

    Ok(())
}
