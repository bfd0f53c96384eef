// src/polarity.rs
//! # Polarity Aggregator
//!
//! Reduces a set of synset ids to one scalar: the arithmetic mean of the
//! polarity scores found for them. Synsets without a score are excluded from
//! both sum and divisor; no information at all means neutral `0.0`.

use anyhow::{Context, Result};
use once_cell::sync::Lazy;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tracing::info;

pub const ENV_SENTIWORDNET_PATH: &str = "SENTIWORDNET_PATH";

/// Read-only lookup from a synset id to its polarity score.
pub trait PolarityLookup: Send + Sync {
    /// Polarity for one synset, `None` when the database has no entry.
    fn polarity(&self, synset: &str) -> Option<f64>;
}

/// Mean polarity over the synsets that have a database entry.
///
/// Empty input, or input where nothing is found, yields `0.0` — the
/// pipeline-wide "no information is neutral" convention. Never NaN.
pub fn mean_polarity<L>(lookup: &L, synsets: &[String]) -> f64
where
    L: PolarityLookup + ?Sized,
{
    let mut sum = 0.0;
    let mut found = 0u32;
    for id in synsets {
        if let Some(score) = lookup.polarity(id) {
            sum += score;
            found += 1;
        }
    }
    if found > 0 {
        sum / f64::from(found)
    } else {
        0.0
    }
}

static BUILTIN: Lazy<SentiWordNet> = Lazy::new(|| {
    let raw = include_str!("../lexicons/sentiwordnet.json");
    SentiWordNet::from_json(raw).expect("valid built-in sentiwordnet lexicon")
});

/// In-memory polarity store. JSON shape: flat `synset id → score` map.
/// Language-independent; synset ids are shared across lexicon languages.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct SentiWordNet {
    scores: HashMap<String, f64>,
}

impl SentiWordNet {
    pub fn from_json(raw: &str) -> Result<Self> {
        serde_json::from_str(raw).context("parsing sentiwordnet lexicon JSON")
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)
            .with_context(|| format!("reading sentiwordnet lexicon from {}", path.display()))?;
        let swn = Self::from_json(&raw)?;
        info!(
            target: "lexicon",
            path = %path.display(),
            synsets = swn.scores.len(),
            "sentiwordnet lexicon loaded"
        );
        Ok(swn)
    }

    /// Load from `$SENTIWORDNET_PATH` if set, otherwise the built-in seed.
    pub fn load_default() -> Result<Self> {
        match std::env::var(ENV_SENTIWORDNET_PATH) {
            Ok(p) => Self::load_from_file(p),
            Err(_) => Ok(Self::builtin().clone()),
        }
    }

    /// Built-in seed scores, embedded at compile time.
    pub fn builtin() -> &'static Self {
        &BUILTIN
    }

    pub fn insert(&mut self, synset: &str, score: f64) {
        self.scores.insert(synset.to_string(), score);
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }
}

impl PolarityLookup for SentiWordNet {
    fn polarity(&self, synset: &str) -> Option<f64> {
        self.scores.get(synset).copied()
    }
}
