// src/extract/contact.rs
//! Name, email and phone number

use once_cell::sync::Lazy;
use regex::Regex;

use crate::nlp::{AnnotatedText, EntityLabel, PartOfSpeech, Token};

/// Optional country code, a 3 digit area code (parentheses allowed), then 3 and 4 digits.
/// The leading guard keeps an opening parenthesis inside the match.
static PHONE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:^|[^\w+(])((?:\+?\d{1,3}[-.\s]?)?\(?\d{3}\)?[-.\s]?\d{3}[-.\s]?\d{4})\b")
        .expect("valid phone pattern")
});

const HONORIFICS: &[&str] = &["mr", "mrs", "ms", "miss", "dr", "prof"];

const MAX_NAME_WORDS: usize = 4;

/// First two words of the first phrase made only of proper nouns.
/// "Motivated Python developer" is one phrase, so it never yields "Motivated Python".
pub fn extract_name(doc: &AnnotatedText) -> Option<String> {
    phrases(doc)
        .into_iter()
        .map(|phrase| {
            let honorifics = phrase
                .iter()
                .take_while(|t| HONORIFICS.contains(&t.text.to_lowercase().as_str()))
                .count();
            &phrase[honorifics..]
        })
        .find(|phrase| {
            (2..=MAX_NAME_WORDS).contains(&phrase.len())
                && phrase.iter().all(|t| t.is(PartOfSpeech::ProperNoun))
        })
        .map(|phrase| doc.span(&phrase[0], &phrase[1]).to_string())
}

/// Runs of tokens on one line separated by whitespace alone
fn phrases(doc: &AnnotatedText) -> Vec<&[Token]> {
    let tokens = &doc.tokens;
    let mut phrases = Vec::new();
    let mut start = 0;

    for i in 1..=tokens.len() {
        let ends_here = i == tokens.len() || {
            let (left, right) = (&tokens[i - 1], &tokens[i]);
            left.line != right.line || !doc.gap(left, right).chars().all(char::is_whitespace)
        };
        if ends_here {
            phrases.push(&tokens[start..i]);
            start = i;
        }
    }

    phrases
}

pub fn extract_email(doc: &AnnotatedText) -> String {
    doc.entities(EntityLabel::Email)
        .next()
        .map(|entity| entity.text.clone())
        .unwrap_or_default()
}

pub fn extract_phone(text: &str) -> Option<String> {
    PHONE_PATTERN
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nlp::{Annotator, RuleAnnotator};

    fn annotate(text: &str) -> AnnotatedText {
        RuleAnnotator::new().annotate(text)
    }

    #[test]
    fn test_phone_with_parenthesised_area_code_is_unchanged() {
        assert_eq!(
            extract_phone("Phone: (555) 123-4567").as_deref(),
            Some("(555) 123-4567")
        );
    }

    #[test]
    fn test_phone_formats() {
        assert_eq!(
            extract_phone("Mobile +1 555-123-4567\n").as_deref(),
            Some("+1 555-123-4567")
        );
        assert_eq!(
            extract_phone("555.123.4567 | jane@example.com").as_deref(),
            Some("555.123.4567")
        );
        assert_eq!(extract_phone("2015 - 2019, 12 months"), None);
    }

    #[test]
    fn test_name_skips_headings() {
        let doc = annotate("RESUME\nJane Doe\nSoftware Engineer\n");
        assert_eq!(extract_name(&doc).as_deref(), Some("Jane Doe"));
    }

    #[test]
    fn test_name_requires_same_line() {
        let doc = annotate("Jane\nDoe\n");
        assert_eq!(extract_name(&doc), None);
    }

    #[test]
    fn test_name_after_summary_and_degree_lines() {
        let doc = annotate("Summary\nMotivated Python developer\nJane Doe\n");
        assert_eq!(extract_name(&doc).as_deref(), Some("Jane Doe"));

        let doc = annotate("Curriculum Vitae\nBSc Graduate\nJane Doe\n");
        assert_eq!(extract_name(&doc).as_deref(), Some("Jane Doe"));
    }

    #[test]
    fn test_name_beside_contact_details() {
        let doc = annotate("Dr. Jane Doe | jane@example.com | Berlin\n");
        assert_eq!(extract_name(&doc).as_deref(), Some("Jane Doe"));
    }

    #[test]
    fn test_email_first_or_empty() {
        let doc = annotate("Jane Doe\njane@example.com\nalt@example.org\n");
        assert_eq!(extract_email(&doc), "jane@example.com");

        let doc = annotate("Jane Doe\n");
        assert_eq!(extract_email(&doc), "");
    }
}
