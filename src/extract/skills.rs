// src/extract/skills.rs
//! Keyword matching for skills and the degree major

use std::collections::BTreeSet;

use crate::config::MatchMode;
use crate::utils::contains_keyword;

/// Single letters and anything with a digit are noise, not skills
pub fn is_valid_skill(skill: &str) -> bool {
    skill.chars().count() > 1 && !skill.chars().any(|c| c.is_ascii_digit())
}

/// Every valid skill keyword found in `text`, sorted and without repeats
pub fn extract_skills(text: &str, keywords: &[String], mode: MatchMode) -> Vec<String> {
    let lower = text.to_lowercase();

    keywords
        .iter()
        .filter(|keyword| is_valid_skill(keyword))
        .filter(|keyword| contains_keyword(&lower, keyword, mode))
        .cloned()
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// First major, in keyword file order, mentioned in `text`
pub fn extract_major(text: &str, majors: &[String], mode: MatchMode) -> String {
    let lower = text.to_lowercase();

    majors
        .iter()
        .find(|major| contains_keyword(&lower, major, mode))
        .cloned()
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_is_valid_skill() {
        assert!(is_valid_skill("Go"));
        assert!(!is_valid_skill("R"));
        assert!(!is_valid_skill("S3"));
    }

    #[test]
    fn test_skills_sorted_and_filtered() {
        let keywords = list(&["SQL", "Python", "C", "Excel", "Python", "EC2", "Docker"]);
        let text = "Built ETL jobs in python and sql on EC2. Reporting in Excel.";

        assert_eq!(
            extract_skills(text, &keywords, MatchMode::Substring),
            vec!["Excel", "Python", "SQL"]
        );
    }

    #[test]
    fn test_skills_whole_word_mode() {
        let keywords = list(&["Java", "JavaScript"]);
        let text = "Frontend work in JavaScript";

        assert_eq!(
            extract_skills(text, &keywords, MatchMode::Substring),
            vec!["Java", "JavaScript"]
        );
        assert_eq!(
            extract_skills(text, &keywords, MatchMode::WholeWord),
            vec!["JavaScript"]
        );
    }

    #[test]
    fn test_major_first_in_file_order() {
        let majors = list(&["Computer Science", "Mathematics", "Science"]);
        assert_eq!(
            extract_major("BSc in Mathematics and Computer Science", &majors, MatchMode::Substring),
            "Computer Science"
        );
        assert_eq!(extract_major("No degree", &majors, MatchMode::Substring), "");
    }
}
