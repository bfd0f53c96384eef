// src/synsets.rs
//! # Synset Resolver
//!
//! Maps `(lemma, language, POS)` to the synset ids listed for it in a
//! multilingual WordNet. The production store is an in-memory map loaded
//! from JSON (path, env var, or a built-in seed); a miss at any level is a
//! normal empty result, never an error.

use anyhow::{Context, Result};
use once_cell::sync::Lazy;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tracing::info;

use crate::message::SimplePos;

pub const ENV_MULTIWORDNET_PATH: &str = "MULTIWORDNET_PATH";

/// Partition tag for lemma entries the lexicon does not disambiguate by POS.
const ANY_POS: &str = "*";

/// Read-only lookup from a lemma to its synset ids.
///
/// Implementations must be pure: same inputs, same outputs, no side effects.
pub trait SynsetLookup: Send + Sync {
    /// Synset ids matching the `(lemma, language, pos)` triple.
    /// Never fails; unknown lemma, language or POS yields an empty vec.
    fn synsets(&self, lemma: &str, language: &str, pos: Option<SimplePos>) -> Vec<String>;
}

static BUILTIN: Lazy<MultiWordNet> = Lazy::new(|| {
    let raw = include_str!("../lexicons/multiwordnet.json");
    MultiWordNet::from_json(raw).expect("valid built-in multiwordnet lexicon")
});

/// In-memory multilingual synset store.
///
/// JSON shape: `language → lemma → partition → [synset ids]`, where a
/// partition is one of the coarse POS tags (`"n"`, `"v"`, `"a"`, `"r"`) or
/// `"*"` for entries the lexicon keeps POS-agnostic.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct MultiWordNet {
    entries: HashMap<String, HashMap<String, HashMap<String, Vec<String>>>>,
}

impl MultiWordNet {
    pub fn from_json(raw: &str) -> Result<Self> {
        serde_json::from_str(raw).context("parsing multiwordnet lexicon JSON")
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)
            .with_context(|| format!("reading multiwordnet lexicon from {}", path.display()))?;
        let wn = Self::from_json(&raw)?;
        info!(
            target: "lexicon",
            path = %path.display(),
            languages = wn.entries.len(),
            "multiwordnet lexicon loaded"
        );
        Ok(wn)
    }

    /// Load from `$MULTIWORDNET_PATH` if set, otherwise the built-in seed.
    pub fn load_default() -> Result<Self> {
        match std::env::var(ENV_MULTIWORDNET_PATH) {
            Ok(p) => Self::load_from_file(p),
            Err(_) => Ok(Self::builtin().clone()),
        }
    }

    /// Built-in seed lexicon, embedded at compile time.
    pub fn builtin() -> &'static Self {
        &BUILTIN
    }

    /// Register synset ids for a lemma. Mainly useful for building fixtures;
    /// production data comes from the JSON loaders.
    pub fn insert(
        &mut self,
        language: &str,
        lemma: &str,
        pos: Option<SimplePos>,
        ids: Vec<String>,
    ) {
        let partition = pos.and_then(SimplePos::tag).unwrap_or(ANY_POS);
        self.entries
            .entry(normalize(language))
            .or_default()
            .entry(normalize(lemma))
            .or_default()
            .entry(partition.to_string())
            .or_default()
            .extend(ids);
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl SynsetLookup for MultiWordNet {
    fn synsets(&self, lemma: &str, language: &str, pos: Option<SimplePos>) -> Vec<String> {
        let partitions = match self
            .entries
            .get(&normalize(language))
            .and_then(|lemmas| lemmas.get(&normalize(lemma)))
        {
            Some(p) => p,
            None => return Vec::new(),
        };

        match pos.and_then(SimplePos::tag) {
            // POS filter: the tagged partition, else whatever the lexicon
            // keeps POS-agnostic for this lemma.
            Some(tag) => partitions
                .get(tag)
                .or_else(|| partitions.get(ANY_POS))
                .cloned()
                .unwrap_or_default(),
            // No usable POS: all partitions, deduplicated and in a stable
            // order so lookups stay deterministic.
            None => {
                let mut all: Vec<String> = partitions.values().flatten().cloned().collect();
                all.sort();
                all.dedup();
                all
            }
        }
    }
}

/// Lemma/language keys are matched case-insensitively with surrounding
/// whitespace ignored.
fn normalize(key: &str) -> String {
    key.trim().to_lowercase()
}
