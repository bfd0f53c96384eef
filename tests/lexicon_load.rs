// tests/lexicon_load.rs
//
// Loading the production lexicons: explicit file paths, the embedded seeds,
// and end-to-end scoring on top of them.

use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use synset_sentiment_analyzer::{
    Message, MultiWordNet, PolarityLookup, SentiWordNet, SentimentAnalyzer, SimplePos,
    SynsetLookup, Token,
};

fn temp_file(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("synset-analyzer-{}-{}", std::process::id(), name));
    fs::write(&path, contents).expect("write temp lexicon");
    path
}

#[test]
fn multiwordnet_loads_from_json_file() {
    let path = temp_file(
        "mwn.json",
        r#"{"en": {"fine": {"a": ["11111111-a"], "*": ["22222222-n"]}}}"#,
    );
    let wn = MultiWordNet::load_from_file(&path).unwrap();
    fs::remove_file(&path).ok();

    assert_eq!(
        wn.synsets("fine", "en", Some(SimplePos::Adjective)),
        vec!["11111111-a"]
    );
    // No verb partition, so the POS-agnostic one answers.
    assert_eq!(
        wn.synsets("fine", "en", Some(SimplePos::Verb)),
        vec!["22222222-n"]
    );
}

#[test]
fn sentiwordnet_loads_from_json_file() {
    let path = temp_file("swn.json", r#"{"11111111-a": 0.5, "22222222-n": -0.125}"#);
    let swn = SentiWordNet::load_from_file(&path).unwrap();
    fs::remove_file(&path).ok();

    assert_eq!(swn.polarity("11111111-a"), Some(0.5));
    assert_eq!(swn.polarity("22222222-n"), Some(-0.125));
    assert_eq!(swn.polarity("33333333-v"), None);
}

#[test]
fn missing_file_is_an_error_with_path_context() {
    let err = MultiWordNet::load_from_file("/nonexistent/mwn.json").unwrap_err();
    assert!(format!("{err:#}").contains("/nonexistent/mwn.json"));
}

#[test]
fn malformed_json_is_an_error() {
    let path = temp_file("broken.json", "{not json");
    assert!(SentiWordNet::load_from_file(&path).is_err());
    fs::remove_file(&path).ok();
}

#[test]
fn builtin_seeds_score_english_and_italian() {
    let analyzer = SentimentAnalyzer::new(
        Arc::new(MultiWordNet::builtin().clone()),
        Arc::new(SentiWordNet::builtin().clone()),
    );

    let mut en = Message::new(
        "en",
        vec![
            Token::lemmatized("good", SimplePos::Adjective),
            Token::lemmatized("terrible", SimplePos::Adjective),
        ],
    );
    analyzer.analyze(&mut en);
    // good/a → (0.625 + 0.5)/2, terrible/a → -0.75; message mean of the two.
    let want = (0.5625 + -0.75) / 2.0;
    assert!((en.sentiment.unwrap() - want).abs() < 1e-9);

    let mut it = Message::new("it", vec![Token::lemmatized("felice", SimplePos::Adjective)]);
    analyzer.analyze(&mut it);
    assert!((it.sentiment.unwrap() - 0.75).abs() < 1e-9);
}

#[test]
fn shared_synset_ids_score_the_same_across_languages() {
    // MultiWordNet aligns languages on the same synset ids, so "good" and
    // "buono" resolve to overlapping polarity entries.
    let wn = MultiWordNet::builtin();
    let swn = SentiWordNet::builtin();

    let en = wn.synsets("good", "en", Some(SimplePos::Adjective));
    let it = wn.synsets("buono", "it", Some(SimplePos::Adjective));
    assert!(it.iter().all(|id| en.contains(id)));
    assert!(it.iter().all(|id| swn.polarity(id).is_some()));
}
