// src/message.rs
//! Pipeline data entities: `Message`, `Token`, and the coarse POS tag set.
//!
//! Messages arrive already tokenized, lemmatized and POS-tagged by earlier
//! pipeline stages; this crate only fills in `Token::score` and
//! `Message::sentiment`.

use serde::{Deserialize, Serialize};

/// Coarse part-of-speech tag, WordNet style.
///
/// Wire tags are `"n"`, `"v"`, `"a"`, `"r"`. Any other tag deserializes to
/// [`SimplePos::Other`] so a noisy tagger upstream degrades to an
/// empty-lookup result instead of a parse failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SimplePos {
    #[serde(rename = "n")]
    Noun,
    #[serde(rename = "v")]
    Verb,
    #[serde(rename = "a")]
    Adjective,
    #[serde(rename = "r")]
    Adverb,
    #[serde(other)]
    Other,
}

impl SimplePos {
    /// Lexicon partition tag, `None` for [`SimplePos::Other`].
    pub fn tag(self) -> Option<&'static str> {
        match self {
            SimplePos::Noun => Some("n"),
            SimplePos::Verb => Some("v"),
            SimplePos::Adjective => Some("a"),
            SimplePos::Adverb => Some("r"),
            SimplePos::Other => None,
        }
    }
}

/// A single token of a message, as produced by the upstream lemmatizer and
/// POS tagger. `score` starts unset and is filled in during scoring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Token {
    /// Surface form, if the tokenizer kept it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Dictionary base form. Empty or absent means the lemmatizer had
    /// nothing for this token; such tokens are never scored.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lemma: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub simple_pos: Option<SimplePos>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
}

impl Token {
    /// Token with a lemma and POS tag, the common case in tests and demos.
    pub fn lemmatized(lemma: impl Into<String>, pos: SimplePos) -> Self {
        Self {
            text: None,
            lemma: Some(lemma.into()),
            simple_pos: Some(pos),
            score: None,
        }
    }

    /// Lemma if present and non-empty.
    pub fn lemma(&self) -> Option<&str> {
        self.lemma.as_deref().filter(|l| !l.is_empty())
    }
}

/// A message flowing through the analysis pipeline.
///
/// `tokens: None` means tokenization never ran for this message and is
/// distinct from an empty token list; `sentiment: None` means the message
/// has not been scored yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// ISO-style language code selecting the lexicon partition, e.g. "en".
    pub language: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tokens: Option<Vec<Token>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sentiment: Option<f64>,
}

impl Message {
    pub fn new(language: impl Into<String>, tokens: Vec<Token>) -> Self {
        Self {
            text: None,
            language: language.into(),
            tokens: Some(tokens),
            sentiment: None,
        }
    }

    /// Message for which tokenization never ran.
    pub fn untokenized(language: impl Into<String>) -> Self {
        Self {
            text: None,
            language: language.into(),
            tokens: None,
            sentiment: None,
        }
    }
}
