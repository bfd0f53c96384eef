// src/analyzer.rs
//! # Sentiment Analyzer
//! Pure, per-message scoring stage: resolve each lemmatized token's synsets,
//! average their polarities into a token score, then average the token
//! scores into the message sentiment. No I/O beyond the two read-only
//! lexicon lookups, so the host pipeline may run it from any number of
//! worker threads against one shared instance.

use std::sync::Arc;
use tracing::debug;

use crate::message::Message;
use crate::polarity::{mean_polarity, PolarityLookup, SentiWordNet};
use crate::synsets::{MultiWordNet, SynsetLookup};

/// Synset-based sentiment scoring stage.
///
/// The two lexicon handles are injected at construction and only ever read,
/// so a single analyzer can be shared across concurrent pipeline workers.
#[derive(Clone)]
pub struct SentimentAnalyzer {
    synsets: Arc<dyn SynsetLookup>,
    polarity: Arc<dyn PolarityLookup>,
}

impl SentimentAnalyzer {
    /// Stage name used by hosts that register pipeline stages by name.
    pub const NAME: &'static str = "sentiwordnet";

    pub fn new(synsets: Arc<dyn SynsetLookup>, polarity: Arc<dyn PolarityLookup>) -> Self {
        Self { synsets, polarity }
    }

    /// Analyzer backed by the default lexicons (env-var paths or the
    /// embedded seeds; see [`MultiWordNet::load_default`]).
    pub fn with_default_lexicons() -> anyhow::Result<Self> {
        Ok(Self::new(
            Arc::new(MultiWordNet::load_default()?),
            Arc::new(SentiWordNet::load_default()?),
        ))
    }

    /// Score `message` in place.
    ///
    /// - `tokens: None` (tokenization never ran): the message is returned
    ///   untouched, `sentiment` included.
    /// - Tokens without a lemma are skipped: no score, no effect on the
    ///   message average.
    /// - Every lemma-bearing token gets a score, `0.0` when its synsets
    ///   carry no polarity information.
    /// - `sentiment` becomes the mean of the scored tokens, `0.0` when none
    ///   were scored.
    pub fn analyze(&self, message: &mut Message) {
        let tokens = match message.tokens.as_mut() {
            Some(t) => t,
            None => return,
        };

        let language = &message.language;
        let mut total = 0.0;
        let mut scored = 0usize;

        for token in tokens.iter_mut() {
            let lemma = match token.lemma() {
                Some(l) => l,
                None => continue,
            };
            let synsets = self.synsets.synsets(lemma, language, token.simple_pos);
            // A lookup miss at either level contributes a neutral 0; it is
            // still counted toward the message average.
            let score = mean_polarity(self.polarity.as_ref(), &synsets);
            token.score = Some(score);
            total += score;
            scored += 1;
        }

        let sentiment = if scored > 0 {
            total / scored as f64
        } else {
            0.0
        };
        message.sentiment = Some(sentiment);

        debug!(
            target: "analyzer",
            language = %message.language,
            tokens = tokens_len(message),
            scored,
            sentiment,
            "message scored"
        );
    }
}

fn tokens_len(message: &Message) -> usize {
    message.tokens.as_ref().map_or(0, Vec::len)
}
