// src/nlp/tokenizer.rs
//! Line-aware word tokenizer

use super::{PartOfSpeech, Token};

/// Characters that separate tokens besides whitespace
const SEPARATORS: [char; 4] = [',', ';', '|', ':'];

/// Split `text` into word tokens. Each token records its byte span, its line
/// and whether it is the first word on that line. Leading and trailing
/// punctuation is stripped, bullets and dashes on their own produce nothing.
pub fn tokenize(text: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut line_offset = 0;

    for (line_index, line) in text.split('\n').enumerate() {
        let mut first_on_line = true;

        for (start, raw) in split_words(line, is_separator) {
            let trimmed_start = raw.len() - raw.trim_start_matches(is_trimmable).len();
            let word = raw.trim_matches(is_trimmable);
            if word.is_empty() {
                continue;
            }

            let start = line_offset + start + trimmed_start;
            tokens.push(Token {
                text: word.to_string(),
                start,
                end: start + word.len(),
                line: line_index,
                line_start: first_on_line,
                pos: PartOfSpeech::Other,
                lemma: None,
            });
            first_on_line = false;
        }

        line_offset += line.len() + 1;
    }

    tokens
}

/// Byte offset and text of every chunk of `line` between boundary characters
pub(super) fn split_words(line: &str, is_boundary: impl Fn(char) -> bool) -> Vec<(usize, &str)> {
    let mut words = Vec::new();
    let mut word_start: Option<usize> = None;

    for (i, c) in line.char_indices() {
        match (is_boundary(c), word_start) {
            (true, Some(start)) => {
                words.push((start, &line[start..i]));
                word_start = None;
            }
            (false, None) => word_start = Some(i),
            _ => {}
        }
    }
    if let Some(start) = word_start {
        words.push((start, &line[start..]));
    }

    words
}

fn is_separator(c: char) -> bool {
    c.is_whitespace() || SEPARATORS.contains(&c)
}

fn is_trimmable(c: char) -> bool {
    !c.is_alphanumeric() && !matches!(c, '+' | '#')
}
