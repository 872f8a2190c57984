//! Heuristic named-entity recognition over capitalized word spans.
//!
//! Stands in for a statistical tagger: proper nouns are found by
//! capitalization, then classified as person, place or organization from
//! known-name tables, suffixes and the preposition in front of them.

use once_cell::sync::Lazy;
use regex::Regex;

use super::category::Label;
use super::tables::{
    is_filler, JOB_KEYWORDS, KNOWN_ORGANIZATIONS, KNOWN_PLACES, LOCATION_CUES,
    LOCATION_SUFFIXES, ORGANIZATION_CUES, ORGANIZATION_SUFFIXES, PERSON_CUES,
};

static WORD_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[\p{L}\p{N}][\p{L}\p{N}'’\-]*").expect("Invalid word regex")
});

const ARTICLES: [&str; 3] = ["a", "an", "the"];

/// One word of the input with its position and sentence context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Token<'a> {
    pub text: &'a str,
    pub start: usize,
    pub end: usize,
    /// First word of the text or of a sentence.
    pub sentence_start: bool,
    /// Only whitespace separates this word from the previous one.
    pub joined: bool,
}

impl Token<'_> {
    pub fn is_capitalized(&self) -> bool {
        self.text.chars().next().is_some_and(char::is_uppercase)
    }

    /// Lower-cased text with typographic apostrophes folded to ASCII.
    pub fn normalized(&self) -> String {
        self.text.replace('’', "'").to_lowercase()
    }
}

/// Splits text into words, recording sentence starts and punctuation gaps.
pub(crate) fn tokenize(text: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut previous_end: Option<usize> = None;

    for m in WORD_PATTERN.find_iter(text) {
        let (sentence_start, joined) = match previous_end {
            None => (true, false),
            Some(end) => {
                let gap = &text[end..m.start()];
                let sentence_start = gap.contains(['.', '!', '?', '\n']);
                let joined = gap.chars().all(char::is_whitespace);
                (sentence_start, joined)
            }
        };
        tokens.push(Token {
            text: m.as_str(),
            start: m.start(),
            end: m.end(),
            sentence_start,
            joined,
        });
        previous_end = Some(m.end());
    }

    tokens
}

/// An entity found by a recognizer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaggedEntity {
    pub label: Label,
    pub text: String,
}

impl TaggedEntity {
    fn new(label: Label, text: impl Into<String>) -> Self {
        Self {
            label,
            text: text.into(),
        }
    }
}

/// Pluggable named-entity recognition.
///
/// Implementations only ever emit `Person`, `Location` or `Organization`,
/// in text order.
pub trait EntityRecognizer: Send + Sync + std::fmt::Debug {
    /// Short identifier, used in logs.
    fn recognizer_id(&self) -> &str;

    fn recognize(&self, text: &str) -> Vec<TaggedEntity>;
}

/// Capitalization and context based recognizer.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicTagger;

impl HeuristicTagger {
    pub fn new() -> Self {
        Self
    }

    fn is_candidate(token: &Token<'_>) -> bool {
        token.is_capitalized() && !is_filler(&token.normalized())
    }

    fn classify(tokens: &[Token<'_>], start: usize, end: usize, text: &str) -> Option<Label> {
        let span = &text[tokens[start].start..tokens[end - 1].end];
        let last = tokens[end - 1].text;

        if KNOWN_ORGANIZATIONS.contains(&span) || ORGANIZATION_SUFFIXES.contains(&last) {
            return Some(Label::Organization);
        }
        if KNOWN_PLACES.contains(&span) || LOCATION_SUFFIXES.contains(&last) {
            return Some(Label::Location);
        }

        let first = &tokens[start];
        let (prev1, prev2) = if first.sentence_start || start == 0 {
            (None, None)
        } else {
            let prev1 = tokens[start - 1].normalized();
            let prev2 = (start >= 2 && !tokens[start - 1].sentence_start)
                .then(|| format!("{} {}", tokens[start - 2].normalized(), prev1));
            (Some(prev1), prev2)
        };
        let has_cue = |cues: &[&str]| {
            prev1.as_deref().is_some_and(|p| cues.contains(&p))
                || prev2.as_deref().is_some_and(|p| cues.contains(&p))
        };

        if has_cue(PERSON_CUES) {
            return Some(Label::Person);
        }
        if has_cue(ORGANIZATION_CUES) {
            return Some(Label::Organization);
        }
        if has_cue(LOCATION_CUES) {
            return Some(Label::Location);
        }
        if prev1.as_deref().is_some_and(|p| ARTICLES.contains(&p)) {
            return None;
        }

        let single = end - start == 1;
        if single {
            let lower = first.normalized();
            if JOB_KEYWORDS.iter().any(|(keyword, _)| *keyword == lower) {
                return None;
            }
        }

        if !single || !first.sentence_start {
            Some(Label::Person)
        } else {
            None
        }
    }
}

impl EntityRecognizer for HeuristicTagger {
    fn recognizer_id(&self) -> &str {
        "heuristic"
    }

    fn recognize(&self, text: &str) -> Vec<TaggedEntity> {
        let tokens = tokenize(text);
        let mut entities = Vec::new();
        let mut i = 0;

        while i < tokens.len() {
            if !Self::is_candidate(&tokens[i]) {
                i += 1;
                continue;
            }

            let start = i;
            let mut end = i + 1;
            while end < tokens.len() && tokens[end].joined && Self::is_candidate(&tokens[end]) {
                end += 1;
            }

            if let Some(label) = Self::classify(&tokens, start, end, text) {
                let span = &text[tokens[start].start..tokens[end - 1].end];
                entities.push(TaggedEntity::new(label, span));
            }
            i = end;
        }

        entities
    }
}
