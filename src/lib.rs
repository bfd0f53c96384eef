// src/lib.rs
// Public library surface for integration tests (and host pipelines).

pub mod analyzer;
pub mod message;
pub mod polarity;
pub mod synsets;

// ---- Re-exports for stable public API ----
pub use crate::analyzer::SentimentAnalyzer;
pub use crate::message::{Message, SimplePos, Token};
pub use crate::polarity::{mean_polarity, PolarityLookup, SentiWordNet};
pub use crate::synsets::{MultiWordNet, SynsetLookup};
