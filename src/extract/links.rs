// src/extract/links.rs
//! Link detection and grouping by link type

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

use crate::types::LinkGroups;

static URL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"(?i)\b(?:https?://|www\.)[^\s<>()"']+|\b(?:linkedin\.com|github\.com|gitlab\.com|bitbucket\.org)/[^\s<>()"']*"#,
    )
    .expect("valid url pattern")
});

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:mailto:)?[\w.%+-]+@[\w-]+(?:\.[\w-]+)*\.[a-z]{2,}\b")
        .expect("valid email pattern")
});

const TRAILING_PUNCTUATION: &[char] = &['.', ',', ';', ':', ')', ']', '}', '>', '\'', '"'];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind {
    ProfessionalNetwork,
    CodeHosting,
    Email,
    Other,
}

/// Every link in `text` plus any link annotations from the source file,
/// grouped by kind. Duplicates are dropped, first spelling wins.
pub fn extract_links(text: &str, annotation_links: &[String]) -> LinkGroups {
    let mut groups = LinkGroups::default();
    let mut seen = HashSet::new();

    let found = annotation_links
        .iter()
        .map(|link| clean_link(link))
        .chain(URL_PATTERN.find_iter(text).map(|m| clean_link(m.as_str())))
        .chain(EMAIL_PATTERN.find_iter(text).map(|m| clean_link(m.as_str())));

    for link in found {
        if link.is_empty() || !seen.insert(dedup_key(&link)) {
            continue;
        }

        match classify_link(&link) {
            LinkKind::ProfessionalNetwork => groups.professional_network.push(link),
            LinkKind::CodeHosting => groups.code_hosting.push(link),
            LinkKind::Email => groups.email.push(link),
            LinkKind::Other => groups.other.push(link),
        }
    }

    groups
}

pub fn classify_link(link: &str) -> LinkKind {
    let lower = link.to_lowercase();
    let host = host_of(&lower);

    if !lower.contains("://") && lower.contains('@') && !lower.contains('/') {
        return LinkKind::Email;
    }

    if host_matches(host, "linkedin.com") {
        LinkKind::ProfessionalNetwork
    } else if ["github.com", "gitlab.com", "bitbucket.org"]
        .iter()
        .any(|domain| host_matches(host, domain))
    {
        LinkKind::CodeHosting
    } else {
        LinkKind::Other
    }
}

/// Trim sentence punctuation and turn `mailto:` links into bare addresses
fn clean_link(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches(TRAILING_PUNCTUATION);

    match strip_prefix_ignore_case(trimmed, "mailto:") {
        Some(address) => address
            .split('?')
            .next()
            .unwrap_or_default()
            .to_string(),
        None => trimmed.to_string(),
    }
}

fn strip_prefix_ignore_case<'a>(value: &'a str, prefix: &str) -> Option<&'a str> {
    let head = value.get(..prefix.len())?;
    head.eq_ignore_ascii_case(prefix)
        .then(|| &value[prefix.len()..])
}

fn dedup_key(link: &str) -> String {
    let lower = link.to_lowercase();
    let without_scheme = lower
        .strip_prefix("https://")
        .or_else(|| lower.strip_prefix("http://"))
        .unwrap_or(&lower);
    without_scheme
        .strip_prefix("www.")
        .unwrap_or(without_scheme)
        .trim_end_matches('/')
        .to_string()
}

fn host_of(lower: &str) -> &str {
    let without_scheme = lower.split_once("://").map_or(lower, |(_, rest)| rest);
    without_scheme
        .split(['/', '?', '#'])
        .next()
        .unwrap_or_default()
}

fn host_matches(host: &str, domain: &str) -> bool {
    host == domain || host.ends_with(&format!(".{domain}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_links_grouped_by_kind() {
        let text = "Jane Doe\nlinkedin.com/in/janedoe | https://github.com/janedoe\n\
                    Portfolio: https://janedoe.dev. Email: jane@example.com\n";
        let groups = extract_links(text, &[]);

        assert_eq!(groups.professional_network, vec!["linkedin.com/in/janedoe"]);
        assert_eq!(groups.code_hosting, vec!["https://github.com/janedoe"]);
        assert_eq!(groups.other, vec!["https://janedoe.dev"]);
        assert_eq!(groups.email, vec!["jane@example.com"]);
        assert_eq!(groups.len(), 4);
    }

    #[test]
    fn test_annotation_links_first_and_deduplicated() {
        let annotations = vec![
            "https://www.linkedin.com/in/janedoe/".to_string(),
            "mailto:jane@example.com?subject=Hi".to_string(),
        ];
        let text = "www.linkedin.com/in/janedoe\njane@example.com\n";
        let groups = extract_links(text, &annotations);

        assert_eq!(
            groups.professional_network,
            vec!["https://www.linkedin.com/in/janedoe/"]
        );
        assert_eq!(groups.email, vec!["jane@example.com"]);
        assert!(groups.code_hosting.is_empty());
    }

    #[test]
    fn test_classify_link() {
        assert_eq!(
            classify_link("https://uk.linkedin.com/in/x"),
            LinkKind::ProfessionalNetwork
        );
        assert_eq!(classify_link("gitlab.com/x"), LinkKind::CodeHosting);
        assert_eq!(classify_link("https://bitbucket.org/x"), LinkKind::CodeHosting);
        assert_eq!(classify_link("a@b.io"), LinkKind::Email);
        assert_eq!(classify_link("https://notgithub.com"), LinkKind::Other);
    }

    #[test]
    fn test_no_links() {
        assert!(extract_links("No links here.", &[]).is_empty());
    }
}
