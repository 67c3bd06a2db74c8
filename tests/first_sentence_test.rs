use emoscan::sentence::{first_sentence, first_sentence_end};

#[test]
fn test_first_terminator_followed_by_whitespace() {
    assert_eq!(
        first_sentence("I am happy. The weather is calm."),
        "I am happy."
    );
    assert_eq!(first_sentence("Wow! Really? Yes."), "Wow!");
    assert_eq!(first_sentence("Is it over?\nNo."), "Is it over?");
}

#[test]
fn test_terminator_at_end_of_text() {
    assert_eq!(first_sentence("It ended."), "It ended.");
    assert_eq!(first_sentence("  It ended.  "), "It ended.");
}

#[test]
fn test_terminator_inside_token_is_not_a_boundary() {
    assert_eq!(
        first_sentence("Version 1.5 shipped today. Nobody noticed."),
        "Version 1.5 shipped today."
    );
    assert_eq!(first_sentence("e.g.the next"), "e.g.the next");
}

#[test]
fn test_no_terminator_returns_whole_trimmed_text() {
    assert_eq!(first_sentence("  feeling great today \n"), "feeling great today");
    assert!(first_sentence_end("feeling great today").is_none());
}

#[test]
fn test_abbreviations_split_early() {
    assert_eq!(first_sentence("Dr. Smith is happy."), "Dr.");
}

#[test]
fn test_sentence_spans_lines() {
    assert_eq!(
        first_sentence("This sentence\nwraps a line. Then stops."),
        "This sentence\nwraps a line."
    );
}
