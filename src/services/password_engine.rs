//! Password generation and strength scoring.
//!
//! Generation draws each character independently and uniformly from the union
//! of the selected character classes. Nothing forces every selected class to
//! appear in the output, so short passwords can miss a class by chance.
//!
//! Scoring is a fixed, stateless checklist over the password text and never
//! touches the random source.

use log::debug;

use crate::services::random_source::{RandomSource, SystemRandomSource};
use crate::types::credential::PasswordOptions;
use crate::types::errors::GeneratorError;
use crate::types::strength::{Severity, StrengthLabel, MAX_STRENGTH_SCORE};

pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const NUMBERS: &str = "0123456789";
pub const SYMBOLS: &str = "!@#$%^&*()_+-=[]{}|;:,.<>?";

/// Trait defining password generation and strength evaluation.
pub trait PasswordEngineTrait {
    fn generate(&self, options: &PasswordOptions) -> Result<String, GeneratorError>;
    fn score(&self, password: &str) -> u8;
    fn label(&self, score: i32) -> StrengthLabel;
}

/// Password engine parameterized over its randomness port.
pub struct PasswordEngine<R: RandomSource = SystemRandomSource> {
    random: R,
}

impl PasswordEngine<SystemRandomSource> {
    /// Creates an engine backed by the operating system's secure random source.
    pub fn new() -> Self {
        Self::with_random_source(SystemRandomSource::new())
    }
}

impl Default for PasswordEngine<SystemRandomSource> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: RandomSource> PasswordEngine<R> {
    pub fn with_random_source(random: R) -> Self {
        Self { random }
    }

    /// Scores a password and looks up its label in one call, for live feedback
    /// while the user types.
    pub fn evaluate(&self, password: &str) -> (u8, StrengthLabel) {
        let score = self.score(password);
        (score, self.label(i32::from(score)))
    }
}

impl<R: RandomSource> PasswordEngineTrait for PasswordEngine<R> {
    fn generate(&self, options: &PasswordOptions) -> Result<String, GeneratorError> {
        let pool = character_pool(options);
        let length = options.effective_length();
        debug!(
            "Generating password: length={}, pool_size={}, fallback={}",
            length,
            pool.len(),
            options.has_no_classes()
        );

        let mut password = String::with_capacity(length);
        for _ in 0..length {
            let index = self.random.index_below(pool.len())?;
            password.push(pool[index]);
        }
        Ok(password)
    }

    fn score(&self, password: &str) -> u8 {
        score_password(password)
    }

    fn label(&self, score: i32) -> StrengthLabel {
        strength_label(score)
    }
}

/// Builds the character pool for `options`: uppercase, lowercase, digits,
/// symbols, in that order. Falls back to the lowercase alphabet when no class
/// is selected, so the pool is never empty.
pub fn character_pool(options: &PasswordOptions) -> Vec<char> {
    let mut pool = String::new();
    if options.uppercase {
        pool.push_str(UPPERCASE);
    }
    if options.lowercase {
        pool.push_str(LOWERCASE);
    }
    if options.numbers {
        pool.push_str(NUMBERS);
    }
    if options.symbols {
        pool.push_str(SYMBOLS);
    }

    if pool.is_empty() {
        pool.push_str(LOWERCASE);
    }

    pool.chars().collect()
}

/// Scores `password` on a 0–5 scale.
///
/// One point each for: at least 8 characters, at least 12 characters, an
/// ASCII uppercase letter, an ASCII lowercase letter, an ASCII digit, and any
/// other character. The raw sum can reach 6, so it is capped.
pub fn score_password(password: &str) -> u8 {
    let length = password.chars().count();
    let mut score = 0u8;

    if length >= 8 {
        score += 1;
    }
    if length >= 12 {
        score += 1;
    }
    if password.chars().any(|c| c.is_ascii_uppercase()) {
        score += 1;
    }
    if password.chars().any(|c| c.is_ascii_lowercase()) {
        score += 1;
    }
    if password.chars().any(|c| c.is_ascii_digit()) {
        score += 1;
    }
    if password.chars().any(|c| !c.is_ascii_alphanumeric()) {
        score += 1;
    }

    score.min(MAX_STRENGTH_SCORE)
}

/// Maps a score to its display label. Scores outside 0–5 map to "Unknown".
pub fn strength_label(score: i32) -> StrengthLabel {
    let (text, severity) = match score {
        0 | 1 => ("Very Weak", Severity::Lowest),
        2 => ("Weak", Severity::Low),
        3 => ("Moderate", Severity::Mid),
        4 => ("Strong", Severity::High),
        5 => ("Very Strong", Severity::Highest),
        _ => ("Unknown", Severity::Undefined),
    };
    StrengthLabel { text, severity }
}

/// Fill level of the strength meter, 0–100.
pub fn strength_percent(score: u8) -> u8 {
    let score = u32::from(score.min(MAX_STRENGTH_SCORE));
    (score * 100 / u32::from(MAX_STRENGTH_SCORE)) as u8
}
