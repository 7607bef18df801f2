// src/nlp/rules.rs
//! Lexicon and pattern based annotator

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;
use tracing::debug;

use super::lexicon::{
    ACTION_VERBS, GERUND_PREPOSITIONS, IRREGULAR_VERBS, MONTHS, NON_NAME_WORDS, ORG_CONNECTORS,
    VERB_CONTEXT_WORDS,
};
use super::tokenizer::split_words;
use super::{tokenize, AnnotatedText, Annotator, Entity, EntityLabel, PartOfSpeech, Token};
use crate::extract::sections::{line_sections, Section};

/// A run of capitalised words, optionally joined by lowercase connectors
static CAPITALISED_RUN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[A-Z][\w.'&-]*(?:[ \t]+(?:(?:of|and|the|for|de|&)[ \t]+)*[A-Z][\w.'&-]*)*")
        .expect("valid capitalised run pattern")
});

static EMAIL_LIKE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[\w.%+-]+@[\w-]+(?:\.[\w-]+)*\.[A-Za-z]{2,}$").expect("valid email pattern")
});

/// Head words that make a capitalised run an organisation
const ORG_MARKERS: &[&str] = &[
    "university", "college", "institute", "school", "academy", "inc", "ltd", "llc", "corp",
    "corporation", "technologies", "labs", "group",
];

/// Degree abbreviations that often precede an institution on the same line
const DEGREE_PREFIXES: &[&str] = &[
    "b.sc", "bsc", "m.sc", "msc", "b.a", "ba", "m.a", "ma", "mba", "phd", "ph.d", "b.s", "bs",
    "m.s", "ms", "b.eng", "m.eng",
];

pub struct RuleAnnotator {
    verbs: HashSet<String>,
    non_names: HashSet<&'static str>,
}

impl Default for RuleAnnotator {
    fn default() -> Self {
        Self::new()
    }
}

impl RuleAnnotator {
    pub fn new() -> Self {
        Self {
            verbs: ACTION_VERBS.iter().map(|v| v.to_string()).collect(),
            non_names: NON_NAME_WORDS.iter().copied().collect(),
        }
    }

    /// Add verbs to the lexicon (lowercased)
    pub fn with_verbs<'a>(mut self, verbs: impl IntoIterator<Item = &'a str>) -> Self {
        for verb in verbs {
            let verb = verb.trim().to_lowercase();
            if !verb.is_empty() && !verb.contains(char::is_whitespace) {
                self.verbs.insert(verb);
            }
        }
        self
    }

    /// Base form of `word` if it is an inflection of a known verb
    pub fn lemmatize(&self, word: &str) -> Option<String> {
        let lower = word.to_lowercase();
        if self.verbs.contains(&lower) {
            return Some(lower);
        }

        if let Some((_, base)) = IRREGULAR_VERBS.iter().find(|(form, _)| *form == lower) {
            if self.verbs.contains(*base) {
                return Some(base.to_string());
            }
        }

        candidate_stems(&lower)
            .into_iter()
            .find(|stem| self.verbs.contains(stem))
    }

    /// `verb_context` is false where a verb form reads as a noun: in a skills
    /// list, or right after a determiner, adjective or noun ("system design").
    fn tag(&self, token: &mut Token, verb_context: bool) {
        let first = token.text.chars().next().unwrap_or(' ');

        if verb_context && (first.is_lowercase() || token.line_start) {
            if let Some(lemma) = self.lemmatize(&token.text) {
                token.pos = PartOfSpeech::Verb;
                token.lemma = Some(lemma);
                return;
            }
        }

        if first.is_uppercase() && self.is_name_like(&token.text) {
            token.pos = PartOfSpeech::ProperNoun;
        }
    }

    fn is_name_like(&self, word: &str) -> bool {
        word.chars().count() > 1
            && word
                .chars()
                .all(|c| c.is_alphabetic() || c == '-' || c == '\'')
            && !self.non_names.contains(word.to_lowercase().as_str())
            && !MONTHS.contains(&word.to_lowercase().as_str())
    }

    fn organisations(&self, text: &str) -> Vec<Entity> {
        let mut entities = Vec::new();

        for run in CAPITALISED_RUN.find_iter(text) {
            let lower = run.as_str().to_lowercase();
            let is_org = lower
                .split_whitespace()
                .any(|w| ORG_MARKERS.contains(&w.trim_matches(|c: char| !c.is_alphanumeric())));
            if !is_org {
                continue;
            }

            if let Some((start, end)) = trim_org_span(run.as_str()) {
                entities.push(Entity {
                    label: EntityLabel::Org,
                    text: run.as_str()[start..end].to_string(),
                    start: run.start() + start,
                    end: run.start() + end,
                });
            }
        }

        entities
    }
}

impl Annotator for RuleAnnotator {
    fn annotate(&self, text: &str) -> AnnotatedText {
        let sections = line_sections(text);
        let mut tokens = tokenize(text);

        for i in 0..tokens.len() {
            let (before, rest) = tokens.split_at_mut(i);
            let token = &mut rest[0];

            let in_skills = sections.get(token.line).copied().flatten() == Some(Section::Skills);
            let verb_context = !in_skills && allows_verb(text, before.last(), token);
            self.tag(token, verb_context);
        }

        let mut entities = self.organisations(text);
        entities.extend(
            tokens
                .iter()
                .filter(|t| EMAIL_LIKE.is_match(&t.text))
                .map(|t| Entity {
                    label: EntityLabel::Email,
                    text: t.text.clone(),
                    start: t.start,
                    end: t.end,
                }),
        );
        entities.sort_by_key(|e| e.start);

        debug!(
            "Annotated {} tokens, {} entities",
            tokens.len(),
            entities.len()
        );

        AnnotatedText {
            text: text.to_string(),
            tokens,
            entities,
        }
    }
}

/// Whether `token` can be a verb given the word right before it.
/// A new line or punctuation in between starts a fresh clause.
fn allows_verb(text: &str, previous: Option<&Token>, token: &Token) -> bool {
    let Some(previous) = previous else {
        return true;
    };
    let gap = text.get(previous.end..token.start).unwrap_or("");
    if previous.line != token.line || !gap.trim().is_empty() {
        return true;
    }

    let previous = previous.text.to_lowercase();
    if VERB_CONTEXT_WORDS.contains(&previous.as_str()) || previous.ends_with("ly") {
        return true;
    }

    GERUND_PREPOSITIONS.contains(&previous.as_str()) && token.text.to_lowercase().ends_with("ing")
}

/// Possible base forms of an inflected verb, most likely first
fn candidate_stems(word: &str) -> Vec<String> {
    let mut stems = Vec::new();

    if let Some(stem) = word.strip_suffix("ies").or_else(|| word.strip_suffix("ied")) {
        stems.push(format!("{stem}y"));
    }
    if let Some(stem) = word.strip_suffix("ing") {
        push_stem_variants(&mut stems, stem);
    }
    if let Some(stem) = word.strip_suffix("ed") {
        // "managed" is "manage" + "d"
        stems.push(format!("{stem}e"));
        push_stem_variants(&mut stems, stem);
    }
    if let Some(stem) = word.strip_suffix("es") {
        stems.push(stem.to_string());
    }
    if let Some(stem) = word.strip_suffix('s') {
        stems.push(stem.to_string());
    }

    stems
}

fn push_stem_variants(stems: &mut Vec<String>, stem: &str) {
    if stem.is_empty() {
        return;
    }
    stems.push(stem.to_string());
    stems.push(format!("{stem}e"));

    // planned -> plan, running -> run
    let mut chars = stem.chars().rev();
    if let (Some(last), Some(prev)) = (chars.next(), chars.next()) {
        if last == prev && !"aeiou".contains(last) {
            stems.push(stem[..stem.len() - last.len_utf8()].to_string());
        }
    }
}

/// Byte range of an organisation run once leading degree abbreviations and
/// trailing months or connectors are removed.
fn trim_org_span(run: &str) -> Option<(usize, usize)> {
    let words = split_words(run, char::is_whitespace);

    let normalized = |w: &str| w.trim_end_matches(['.', ',']).to_lowercase();

    let first = words
        .iter()
        .position(|(_, w)| !DEGREE_PREFIXES.contains(&normalized(w).as_str()))?;
    let last = words.iter().rposition(|(_, w)| {
        let n = normalized(w);
        !MONTHS.contains(&n.as_str()) && !ORG_CONNECTORS.contains(&n.as_str())
    })?;

    if last < first {
        return None;
    }

    let start = words[first].0;
    let end = words[last].0 + words[last].1.len();
    Some((start, end))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn annotate(text: &str) -> AnnotatedText {
        RuleAnnotator::new().annotate(text)
    }

    #[test]
    fn test_lemmatize_regular_inflections() {
        let annotator = RuleAnnotator::new();
        assert_eq!(annotator.lemmatize("managed").as_deref(), Some("manage"));
        assert_eq!(annotator.lemmatize("developing").as_deref(), Some("develop"));
        assert_eq!(annotator.lemmatize("supervises").as_deref(), Some("supervise"));
        assert_eq!(annotator.lemmatize("planned").as_deref(), Some("plan"));
        assert_eq!(annotator.lemmatize("running").as_deref(), Some("run"));
        assert_eq!(annotator.lemmatize("Analyzed").as_deref(), Some("analyze"));
    }

    #[test]
    fn test_lemmatize_irregular_and_unknown() {
        let annotator = RuleAnnotator::new();
        assert_eq!(annotator.lemmatize("led").as_deref(), Some("lead"));
        assert_eq!(annotator.lemmatize("oversaw").as_deref(), Some("oversee"));
        assert_eq!(annotator.lemmatize("banana"), None);
    }

    #[test]
    fn test_with_verbs_extends_lexicon() {
        let annotator = RuleAnnotator::new().with_verbs(["Prototype", "two words", ""]);
        assert_eq!(annotator.lemmatize("prototype").as_deref(), Some("prototype"));
        assert_eq!(annotator.lemmatize("two words"), None);
        assert_eq!(annotator.lemmatize("prototyped").as_deref(), Some("prototype"));
    }

    #[test]
    fn test_verbs_at_line_start_and_lowercase() {
        let doc = annotate("Managed a team of five\nand supervised interns\nTeam Lead");
        assert_eq!(doc.verbs(), vec!["manage", "supervise"]);
    }

    #[test]
    fn test_proper_nouns() {
        let doc = annotate("Jane Doe\nResume");
        assert!(doc.tokens[0].is(PartOfSpeech::ProperNoun));
        assert!(doc.tokens[1].is(PartOfSpeech::ProperNoun));
        assert!(doc.tokens[2].is(PartOfSpeech::Other));
    }

    #[test]
    fn test_email_entities() {
        let doc = annotate("Contact: jane.doe@example.com, not-an-email@");
        let emails: Vec<_> = doc.entities(EntityLabel::Email).map(|e| e.text.as_str()).collect();
        assert_eq!(emails, vec!["jane.doe@example.com"]);
    }

    #[test]
    fn test_org_entities_trim_degrees_and_months() {
        let doc = annotate(
            "BSc Computer Science, Stanford University Sep 2015 - Jun 2019\nUniversity of Cairo\n",
        );
        let orgs: Vec<_> = doc.entities(EntityLabel::Org).map(|e| e.text.as_str()).collect();
        assert_eq!(orgs, vec!["Stanford University", "University of Cairo"]);

        let org = doc.entities(EntityLabel::Org).next().unwrap();
        assert_eq!(&doc.text[org.start..org.end], "Stanford University");
    }

    #[test]
    fn test_org_entities_company_suffix() {
        let doc = annotate("Software Engineer at Acme Corp since 2020");
        let orgs: Vec<_> = doc.entities(EntityLabel::Org).map(|e| e.text.as_str()).collect();
        assert_eq!(orgs, vec!["Acme Corp"]);
    }

    #[test]
    fn test_verb_forms_used_as_nouns() {
        let doc = annotate("Summary\nPassionate about system design and customer support\n");
        assert!(doc.verbs().is_empty());

        let doc = annotate("Improved the design of reports, reduced costs");
        assert_eq!(doc.verbs(), vec!["improve", "reduce"]);

        let doc = annotate("Worked as a tech lead intern");
        assert!(doc.verbs().is_empty());
    }

    #[test]
    fn test_gerund_after_preposition() {
        let doc = annotate("Assisted with reporting and helped the team");
        assert_eq!(doc.verbs(), vec!["assist", "report", "help"]);
    }

    #[test]
    fn test_skills_section_has_no_verbs() {
        let doc = annotate("Skills\nLead generation, Design\nExperience\nLed a team\n");
        assert_eq!(doc.verbs(), vec!["lead"]);

        let doc = annotate("Skills: project management, testing\n");
        assert!(doc.verbs().is_empty());
    }
}
