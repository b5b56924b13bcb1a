// Unit tests for bundle filtering and serialization.
//
// These drive the filter with a model parsed from an in-memory cursor and
// the real curated vocabulary, then check what actually lands on disk:
// which words, how many decimal places, and how compact the JSON is.

use std::io::Cursor;

use briquette::bundle::filter::{build_bundle, round6};
use briquette::bundle::inspect::inspect;
use briquette::bundle::writer::write_bundle;
use briquette::model::KeyedVectors;
use briquette::vocabulary::build_vocabulary;

const MIXED_MODEL: &str = "8 3\n\
    game 0.1234567891 -0.9876543219 0.5\n\
    movie 1.0 2.0 3.0\n\
    music -0.0000004 0.0000006 0.25\n\
    tutorial 0.111111111 0.222222222 0.333333333\n\
    stream 4.0 5.0 6.0\n\
    the 9.0 9.0 9.0\n\
    lol 8.0 8.0 8.0\n\
    rt 7.0 7.0 7.0\n";

fn mixed_model() -> KeyedVectors {
    KeyedVectors::read_word2vec_text(Cursor::new(MIXED_MODEL)).unwrap()
}

// ============================================================
// Chain: model -> vocabulary -> filter
// ============================================================

#[test]
fn bundle_retains_only_model_hits() {
    let bundle = build_bundle(&mixed_model(), &build_vocabulary());

    let keys: Vec<&str> = bundle.words().keys().map(|k| k.as_str()).collect();
    assert_eq!(keys, vec!["game", "movie", "music", "stream", "tutorial"]);
    // Model words outside the vocabulary never make it in
    assert!(!bundle.contains("the"));
    assert!(!bundle.contains("lol"));
}

#[test]
fn every_stored_component_is_six_place_stable() {
    let bundle = build_bundle(&mixed_model(), &build_vocabulary());

    for (word, vector) in bundle.words() {
        assert_eq!(vector.len(), 3, "Wrong arity for {word}");
        for &component in vector {
            assert_eq!(
                round6(component),
                component,
                "Component of {word} not rounded: {component}"
            );
        }
    }
}

#[test]
fn tiny_magnitudes_collapse_to_zero() {
    // -0.0000004 and 0.0000006 sit below and above the rounding threshold
    let bundle = build_bundle(&mixed_model(), &build_vocabulary());
    let music = bundle.get("music").unwrap();
    assert_eq!(music[0], 0.0);
    assert_eq!(music[1], 0.000001);
}

// ============================================================
// Chain: filter -> writer -> raw JSON
// ============================================================

#[test]
fn rounded_values_serialize_compactly() {
    let dir = std::env::temp_dir().join("briquette-bundle-serialize-test");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("bundle.json");

    let bundle = build_bundle(&mixed_model(), &build_vocabulary());
    write_bundle(&bundle, &path).unwrap();

    let json = std::fs::read_to_string(&path).unwrap();
    assert!(json.contains(r#""game":[0.123457,-0.987654,0.5]"#), "{json}");
    assert!(!json.contains("0.1234567891"));
    assert!(!json.contains("0.111111111"));

    std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn empty_intersection_writes_empty_object() {
    let dir = std::env::temp_dir().join("briquette-bundle-empty-test");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("bundle.json");

    let model =
        KeyedVectors::read_word2vec_text(Cursor::new("2 2\nthe 1.0 2.0\nlol 3.0 4.0\n")).unwrap();
    let bundle = build_bundle(&model, &build_vocabulary());
    assert_eq!(bundle.word_count(), 0);

    let size_kb = write_bundle(&bundle, &path).unwrap();
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "{}");
    assert!(size_kb > 0.0);

    std::fs::remove_dir_all(&dir).unwrap();
}

// ============================================================
// Chain: writer -> inspect
// ============================================================

#[test]
fn written_bundle_inspects_back() {
    let dir = std::env::temp_dir().join("briquette-bundle-inspect-test");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("bundle.json");

    let bundle = build_bundle(&mixed_model(), &build_vocabulary());
    let written_kb = write_bundle(&bundle, &path).unwrap();

    let info = inspect(&path).unwrap();
    assert_eq!(info.word_count, bundle.word_count());
    assert_eq!(info.dimension, bundle.dimension());
    assert_eq!(info.size_kb, written_kb);

    std::fs::remove_dir_all(&dir).unwrap();
}
