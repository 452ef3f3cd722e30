use vote_buddy::message::Language;
use vote_buddy::services::prompt::{
    GREET_MARKER, detect_language, refusal, resolve_language, system_prompt,
};

#[test]
fn detects_devanagari_as_hindi() {
    assert_eq!(detect_language("मतदान केंद्र कहाँ है?"), Some(Language::Hi));
    // Mixed script still counts as Hindi.
    assert_eq!(detect_language("EPIC card कैसे बनेगा"), Some(Language::Hi));
}

#[test]
fn detects_latin_as_english() {
    assert_eq!(detect_language("Where do I vote?"), Some(Language::En));
}

#[test]
fn digits_and_punctuation_are_undecided() {
    assert_eq!(detect_language("1234 ???"), None);
}

#[test]
fn explicit_language_wins_over_detection() {
    assert_eq!(
        resolve_language(Some(Language::En), "मतदान केंद्र कहाँ है?"),
        Language::En
    );
}

#[test]
fn undecided_input_falls_back_to_hindi() {
    assert_eq!(resolve_language(None, "1234"), Language::Hi);
    assert_eq!(resolve_language(None, "Where do I vote?"), Language::En);
}

#[test]
fn system_prompt_carries_language_instruction() {
    let en = system_prompt(Language::En);
    let hi = system_prompt(Language::Hi);

    assert!(en.contains("English"));
    assert!(hi.contains("Hindi"));
    assert_ne!(en, hi);

    // The refusal line the model must echo is embedded verbatim.
    assert!(en.contains(refusal(Language::En)));
    assert!(hi.contains(refusal(Language::Hi)));
}

#[test]
fn greet_marker_matches_frontend_contract() {
    assert_eq!(GREET_MARKER, "GREET_USER");
    let prompt = system_prompt(Language::En);
    assert!(prompt.contains(GREET_MARKER));
}
