use std::fs;
use std::path::PathBuf;

use emoscan::error::{Diagnostic, EmoscanError};
use emoscan::keyword::{KeywordSet, KeywordSetLoader};
use emoscan::matcher::{MatchEngine, SpanScope, check_files, diagnostic_of, flag_of};
use tempfile::{TempDir, tempdir};

fn write(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

fn flag(keywords: &[&str], text: &str, scope: SpanScope) -> u8 {
    let keywords = KeywordSetLoader::from_lines(keywords).unwrap();
    let engine = MatchEngine::new(keywords).unwrap().with_scope(scope);
    flag_of(&engine.check(text))
}

#[test]
fn test_case_insensitive_keywords_and_text() {
    for text in ["I feel JOY", "joy", "Joy!", "so much jOy."] {
        assert_eq!(flag(&["joy"], text, SpanScope::Document), 1, "{text}");
    }
    assert_eq!(flag(&["  JOY  "], "what joy", SpanScope::Document), 1);
}

#[test]
fn test_exact_word_matching() {
    assert_eq!(flag(&["joy"], "enjoyment", SpanScope::Document), 0);
    assert_eq!(flag(&["joy"], "I feel joy!", SpanScope::Document), 1);
    assert_eq!(flag(&["joy"], "joyful", SpanScope::Document), 0);
}

#[test]
fn test_whole_document_finds_keyword_anywhere() {
    assert_eq!(
        flag(&["joy"], "Calm morning. Then I felt joy.", SpanScope::Document),
        1
    );
}

#[test]
fn test_first_sentence_boundaries() {
    let keywords = KeywordSetLoader::from_lines(["happy"]).unwrap();
    let engine = MatchEngine::new(keywords)
        .unwrap()
        .with_scope(SpanScope::FirstSentence);

    let report = engine.check("I am happy. The weather is calm.").unwrap();
    assert_eq!(report.span, "I am happy.");
    assert_eq!(report.flag(), 1);

    let report = engine.check("The weather is calm. I am happy.").unwrap();
    assert_eq!(report.span, "The weather is calm.");
    assert_eq!(report.flag(), 0);

    assert_eq!(
        flag(&["great"], "feeling great today", SpanScope::FirstSentence),
        1
    );
}

#[test]
fn test_order_and_duplicates_irrelevant() {
    let texts = [
        "I am happy.",
        "Fear and sorrow.",
        "Nothing to see here.",
        "LOVE",
    ];
    let lines = ["happy", "fear", "love"];
    let shuffled = ["love", "", "happy", "fear", "love", "HAPPY"];

    for text in texts {
        assert_eq!(
            flag(&lines, text, SpanScope::Document),
            flag(&shuffled, text, SpanScope::Document),
            "{text}"
        );
    }
}

#[test]
fn test_empty_dictionary_always_zero() {
    let dir = tempdir().unwrap();
    let keywords = write(&dir, "words.txt", "\n   \n\t\n");
    let input = write(&dir, "input.txt", "I am happy and full of joy.");

    for scope in [SpanScope::Document, SpanScope::FirstSentence] {
        let outcome = check_files(&keywords, &input, scope);
        assert_eq!(flag_of(&outcome), 0);
        assert_eq!(diagnostic_of(&outcome), Some(Diagnostic::EmptyDictionary));
    }
}

#[test]
fn test_unreadable_dictionary_always_zero() {
    let dir = tempdir().unwrap();
    let input = write(&dir, "input.txt", "I am happy.");

    let outcome = check_files(dir.path().join("nope.txt"), &input, SpanScope::Document);
    assert_eq!(flag_of(&outcome), 0);
    assert_eq!(
        diagnostic_of(&outcome),
        Some(Diagnostic::KeywordSourceUnavailable)
    );
}

#[test]
fn test_dictionary_checked_before_input() {
    let dir = tempdir().unwrap();

    // Both sources missing: the dictionary condition wins.
    let outcome = check_files(
        dir.path().join("words.txt"),
        dir.path().join("input.txt"),
        SpanScope::Document,
    );
    assert_eq!(
        diagnostic_of(&outcome),
        Some(Diagnostic::KeywordSourceUnavailable)
    );
}

#[test]
fn test_empty_input_always_zero() {
    let dir = tempdir().unwrap();
    let keywords = write(&dir, "words.txt", "happy\n");

    for content in ["", "   ", "\n\n\t "] {
        let input = write(&dir, "input.txt", content);
        for scope in [SpanScope::Document, SpanScope::FirstSentence] {
            let outcome = check_files(&keywords, &input, scope);
            assert_eq!(flag_of(&outcome), 0);
            assert!(matches!(outcome, Err(EmoscanError::EmptyInput)));
        }
    }
}

#[test]
fn test_missing_input() {
    let dir = tempdir().unwrap();
    let keywords = write(&dir, "words.txt", "happy\n");

    let outcome = check_files(&keywords, dir.path().join("input.txt"), SpanScope::Document);
    assert_eq!(flag_of(&outcome), 0);
    assert_eq!(
        diagnostic_of(&outcome),
        Some(Diagnostic::TextSourceUnavailable)
    );
}

#[test]
fn test_file_round_trip_reports_matches() {
    let dir = tempdir().unwrap();
    let keywords = write(
        &dir,
        "emotion_words.txt",
        "happy\nsad\nangry\njoy\nfear\nlove\n",
    );
    let input = write(
        &dir,
        "input_paragraph.txt",
        "I am feeling very happy today. This brings me great joy and excitement!\n\
         The weather is quite neutral and calm. Nothing special is happening.\n",
    );

    let report = check_files(&keywords, &input, SpanScope::Document).unwrap();
    assert_eq!(report.flag(), 1);
    assert_eq!(report.matched_keywords, vec!["happy", "joy"]);

    let report = check_files(&keywords, &input, SpanScope::FirstSentence).unwrap();
    assert_eq!(report.flag(), 1);
    assert_eq!(report.matched_keywords, vec!["happy"]);
}

#[test]
fn test_idempotent_outcomes() {
    let dir = tempdir().unwrap();
    let keywords = write(&dir, "words.txt", "\n");
    let input = write(&dir, "input.txt", "joy");

    let first = check_files(&keywords, &input, SpanScope::Document);
    let second = check_files(&keywords, &input, SpanScope::Document);
    assert_eq!(flag_of(&first), flag_of(&second));
    assert_eq!(diagnostic_of(&first), diagnostic_of(&second));

    let engine = MatchEngine::new(KeywordSet::from_words(["joy"])).unwrap();
    assert_eq!(engine.check("joy").unwrap(), engine.check("joy").unwrap());
}

#[test]
fn test_engine_rejects_empty_keyword_set() {
    let outcome = MatchEngine::new(KeywordSet::default()).and_then(|e| e.check("I am happy."));
    assert_eq!(flag_of(&outcome), 0);
    assert_eq!(diagnostic_of(&outcome), Some(Diagnostic::EmptyDictionary));
}

#[test]
fn test_decomposed_accents_split_words() {
    assert_eq!(flag(&["joy"], "joy\u{0301} today", SpanScope::Document), 1);
    assert_eq!(flag(&["joy"], "enjoy\u{0301}ment", SpanScope::Document), 0);
}
