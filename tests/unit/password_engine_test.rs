//! Unit tests for the Password Engine.
//!
//! Covers generation against the character-class options, the strength
//! checklist, and the label table.

use passvault::services::password_engine::{
    character_pool, score_password, strength_label, strength_percent, PasswordEngine,
    PasswordEngineTrait, LOWERCASE, NUMBERS, SYMBOLS, UPPERCASE,
};
use passvault::types::credential::PasswordOptions;
use passvault::types::strength::Severity;
use rstest::rstest;

fn opts(length: usize, uppercase: bool, lowercase: bool, numbers: bool, symbols: bool) -> PasswordOptions {
    PasswordOptions { length, uppercase, lowercase, numbers, symbols }
}

// ─── Generation ───

#[test]
fn test_generate_default_options() {
    let engine = PasswordEngine::new();
    let pw = engine.generate(&PasswordOptions::default()).unwrap();
    assert_eq!(pw.chars().count(), 16);
}

#[test]
fn test_generate_no_classes_falls_back_to_lowercase() {
    let engine = PasswordEngine::new();
    let pw = engine.generate(&opts(12, false, false, false, false)).unwrap();
    assert_eq!(pw.len(), 12);
    assert!(pw.chars().all(|c| c.is_ascii_lowercase()));
}

#[rstest]
#[case(opts(20, true, false, false, false), UPPERCASE)]
#[case(opts(20, false, true, false, false), LOWERCASE)]
#[case(opts(20, false, false, true, false), NUMBERS)]
#[case(opts(20, false, false, false, true), SYMBOLS)]
fn test_generate_single_class(#[case] options: PasswordOptions, #[case] alphabet: &str) {
    let engine = PasswordEngine::new();
    let pw = engine.generate(&options).unwrap();
    assert_eq!(pw.len(), 20);
    assert!(pw.chars().all(|c| alphabet.contains(c)), "{pw} escaped {alphabet}");
}

#[rstest]
#[case(0, 1)]
#[case(1, 1)]
#[case(8, 8)]
#[case(32, 32)]
#[case(100_000, 1024)]
fn test_generate_length_is_clamped(#[case] requested: usize, #[case] expected: usize) {
    let engine = PasswordEngine::new();
    let pw = engine.generate(&opts(requested, true, true, true, true)).unwrap();
    assert_eq!(pw.chars().count(), expected);
}

#[test]
fn test_generate_uniqueness() {
    let engine = PasswordEngine::new();
    let options = opts(20, true, true, true, true);
    let pw1 = engine.generate(&options).unwrap();
    let pw2 = engine.generate(&options).unwrap();
    assert_ne!(pw1, pw2);
}

#[test]
fn test_pool_sizes() {
    assert_eq!(character_pool(&opts(8, true, true, true, true)).len(), 26 + 26 + 10 + 26);
    assert_eq!(character_pool(&opts(8, false, false, true, false)).len(), 10);
    assert_eq!(character_pool(&opts(8, false, false, false, false)).len(), 26);
}

// ─── Scoring ───

#[rstest]
#[case("", 0)]
#[case("a", 1)]
#[case("A", 1)]
#[case("1", 1)]
#[case("!", 1)]
#[case("aA1!", 4)]
#[case("abcdefgh", 2)]
#[case("abcdefghijkl", 3)]
#[case("Abcdefgh1!", 5)]
#[case("Abcdefghijk1!", 5)]
#[case("correct horse battery", 4)]
fn test_score_table(#[case] password: &str, #[case] expected: u8) {
    assert_eq!(score_password(password), expected, "score for {password:?}");
}

#[test]
fn test_score_short_lowercase_below_full_mix() {
    assert!(score_password("a") < score_password("Abcdefgh1!"));
}

#[test]
fn test_score_counts_characters_not_bytes() {
    // 7 chars but 14 bytes in UTF-8
    assert_eq!(score_password("ééééééé"), 1);
}

// ─── Labels ───

#[rstest]
#[case(0, "Very Weak", Severity::Lowest)]
#[case(1, "Very Weak", Severity::Lowest)]
#[case(2, "Weak", Severity::Low)]
#[case(3, "Moderate", Severity::Mid)]
#[case(4, "Strong", Severity::High)]
#[case(5, "Very Strong", Severity::Highest)]
#[case(6, "Unknown", Severity::Undefined)]
#[case(-1, "Unknown", Severity::Undefined)]
fn test_label_table(#[case] score: i32, #[case] text: &str, #[case] severity: Severity) {
    let label = strength_label(score);
    assert_eq!(label.text, text);
    assert_eq!(label.severity, severity);
}

#[test]
fn test_severity_is_ordered() {
    assert!(Severity::Lowest < Severity::Low);
    assert!(Severity::Low < Severity::Mid);
    assert!(Severity::Mid < Severity::High);
    assert!(Severity::High < Severity::Highest);
}

#[test]
fn test_engine_methods_match_free_functions() {
    let engine = PasswordEngine::new();
    assert_eq!(engine.score("Abcdefgh1!"), score_password("Abcdefgh1!"));
    assert_eq!(engine.label(3), strength_label(3));
    assert_eq!(strength_percent(engine.score("Abcdefgh1!")), 100);
}
