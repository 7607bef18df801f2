// src/nlp/mod.rs
//! Text annotation: tokens, coarse part-of-speech tags and entity spans.
//!
//! The extractors only depend on `AnnotatedText`. Anything that can produce one
//! (the bundled `RuleAnnotator`, or a statistical model behind the same trait)
//! can drive the pipeline.

pub mod lexicon;
pub mod rules;
pub mod tokenizer;

pub use rules::RuleAnnotator;
pub use tokenizer::tokenize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PartOfSpeech {
    ProperNoun,
    Verb,
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub text: String,
    /// Byte offsets into the annotated text
    pub start: usize,
    pub end: usize,
    pub line: usize,
    /// First word on its line, after bullets
    pub line_start: bool,
    pub pos: PartOfSpeech,
    /// Base form, set for verbs
    pub lemma: Option<String>,
}

impl Token {
    pub fn is(&self, pos: PartOfSpeech) -> bool {
        self.pos == pos
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityLabel {
    Org,
    Email,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entity {
    pub label: EntityLabel,
    pub text: String,
    pub start: usize,
    pub end: usize,
}

/// Output of one annotation pass, shared by every extractor.
#[derive(Debug, Clone, Default)]
pub struct AnnotatedText {
    pub text: String,
    pub tokens: Vec<Token>,
    pub entities: Vec<Entity>,
}

impl AnnotatedText {
    /// Lemmas of every verb token, in document order
    pub fn verbs(&self) -> Vec<&str> {
        self.tokens
            .iter()
            .filter(|t| t.is(PartOfSpeech::Verb))
            .filter_map(|t| t.lemma.as_deref())
            .collect()
    }

    pub fn entities(&self, label: EntityLabel) -> impl Iterator<Item = &Entity> {
        self.entities.iter().filter(move |e| e.label == label)
    }

    /// Source text between two tokens
    pub fn gap(&self, left: &Token, right: &Token) -> &str {
        self.text.get(left.end..right.start).unwrap_or("")
    }

    pub fn span(&self, first: &Token, last: &Token) -> &str {
        self.text.get(first.start..last.end).unwrap_or("")
    }
}

/// Turns raw resume text into tokens and entities.
pub trait Annotator: Send + Sync {
    fn annotate(&self, text: &str) -> AnnotatedText;
}
