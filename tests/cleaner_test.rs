use corpus_harvester::{clean_text, word_count};

#[test]
fn strips_foreign_script_and_collapses_whitespace() {
    assert_eq!(clean_text("Hello मराठी  123 वाक्य."), "मराठी वाक्य");
}

#[test]
fn keeps_allowed_punctuation_and_devanagari_digits() {
    let text = "वाक्य। १२३, ठीक!";
    assert_eq!(clean_text(text), text);
}

#[test]
fn cleaning_is_idempotent() {
    let samples = [
        "Hello मराठी  123 वाक्य.",
        "  \t\nमराठी   grammar?  ",
        "",
        "abc def",
        "वाक्य। १२३, ठीक!",
    ];
    for raw in samples {
        let once = clean_text(raw);
        assert_eq!(clean_text(&once), once, "not idempotent for {:?}", raw);
    }
}

#[test]
fn clean_single_spaced_input_passes_through() {
    let text = "मराठी भाषा सुंदर आहे, नाही?";
    assert_eq!(clean_text(text), text);
}

#[test]
fn fully_disallowed_input_becomes_empty() {
    assert_eq!(clean_text("abc 123 XYZ."), "");
}

#[test]
fn word_count_counts_whitespace_separated_tokens() {
    assert_eq!(word_count(""), 0);
    assert_eq!(word_count("मराठी"), 1);
    assert_eq!(word_count("मराठी भाषा सुंदर"), 3);
}
