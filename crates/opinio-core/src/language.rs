//! Supported corpus languages and a heuristic language detector.
//!
//! The detector scores lowercased word tokens against small per-language
//! function-word lists, with accented characters as an extra signal. It
//! deliberately recognises more languages than the pipeline supports (de, es)
//! so that, say, a German comment is identified as German and rejected,
//! rather than misread as low-confidence French.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Languages the pipeline can train models for and classify.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Fr,
    En,
}

impl Language {
    /// All supported languages, in corpus-build order.
    pub const ALL: [Language; 2] = [Language::Fr, Language::En];

    /// Two-letter ISO 639-1 code.
    pub fn code(&self) -> &'static str {
        match self {
            Language::Fr => "fr",
            Language::En => "en",
        }
    }

    /// The counterpart language a cross-lingual source must be augmented into.
    pub fn other(&self) -> Language {
        match self {
            Language::Fr => Language::En,
            Language::En => Language::Fr,
        }
    }

    /// Parse a two-letter code into a supported language.
    pub fn from_code(code: &str) -> Option<Language> {
        match code {
            "fr" => Some(Language::Fr),
            "en" => Some(Language::En),
            _ => None,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

// ── Detection word lists ──
//
// Function words only, except for a handful of greetings common in short
// feedback messages. Tokens are matched exactly, not by substring: substring
// matching misfires badly on short inputs ("monde" contains "de").

const FRENCH_WORDS: &[&str] = &[
    "le", "la", "les", "de", "des", "du", "un", "une", "et", "est", "sont", "suis", "je", "tu",
    "il", "elle", "on", "nous", "vous", "ne", "pas", "ce", "cette", "que", "qui", "mais", "avec",
    "pour", "dans", "sur", "tres", "très", "etes", "êtes", "bonjour", "merci", "oui", "c", "d",
    "j", "l",
];

const ENGLISH_WORDS: &[&str] = &[
    "the", "is", "are", "was", "were", "be", "been", "have", "has", "had", "do", "does", "did",
    "will", "would", "a", "an", "to", "of", "in", "for", "on", "with", "at", "from", "by", "i",
    "you", "he", "she", "it", "we", "they", "not", "this", "that", "and", "or", "so", "hello",
    "very",
];

const GERMAN_WORDS: &[&str] = &[
    "der", "die", "das", "ist", "sind", "ich", "du", "sie", "wir", "ihr", "ein", "eine", "nicht",
    "und", "zu", "mit", "für", "auf", "haben", "werden", "sehr", "gut", "ja", "nein", "heute",
];

const SPANISH_WORDS: &[&str] = &[
    "el", "los", "las", "de", "que", "es", "en", "un", "una", "por", "con", "para", "no", "muy",
    "yo", "esta", "este", "pero", "como", "hola", "gracias",
];

/// Characters that only appear in French among the scored languages.
const FRENCH_ACCENTS: &str = "àâçéèêëîïôûùÿœ";
/// Characters that only appear in German among the scored languages.
const GERMAN_ACCENTS: &str = "äöß";
/// Characters that only appear in Spanish among the scored languages.
const SPANISH_ACCENTS: &str = "ñ¿¡";

/// Detect the language of a text, returning its two-letter code.
///
/// Returns `None` when the text carries no usable signal (empty input,
/// numbers only, or a language none of the word lists cover).
pub fn detect_language(text: &str) -> Option<&'static str> {
    let lower = text.to_lowercase();
    let tokens: Vec<&str> = lower
        .split(|c: char| !c.is_alphabetic())
        .filter(|t| !t.is_empty())
        .collect();

    let accent_score = |alphabet: &str| -> usize {
        2 * lower.chars().filter(|c| alphabet.contains(*c)).count()
    };
    let word_score =
        |words: &[&str]| -> usize { tokens.iter().filter(|t| words.contains(t)).count() };

    let scored = [
        ("fr", word_score(FRENCH_WORDS) + accent_score(FRENCH_ACCENTS)),
        ("en", word_score(ENGLISH_WORDS)),
        ("de", word_score(GERMAN_WORDS) + accent_score(GERMAN_ACCENTS)),
        ("es", word_score(SPANISH_WORDS) + accent_score(SPANISH_ACCENTS)),
    ];

    let mut best: Option<(&'static str, usize)> = None;
    for (code, score) in scored {
        if score > 0 && best.map_or(true, |(_, b)| score > b) {
            best = Some((code, score));
        }
    }
    best.map(|(code, _)| code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_roundtrip() {
        for language in Language::ALL {
            assert_eq!(Language::from_code(language.code()), Some(language));
        }
        assert_eq!(Language::from_code("de"), None);
        assert_eq!(Language::from_code(""), None);
    }

    #[test]
    fn other_flips() {
        assert_eq!(Language::Fr.other(), Language::En);
        assert_eq!(Language::En.other(), Language::Fr);
    }

    #[test]
    fn detects_french_greeting() {
        assert_eq!(detect_language("Bonjour le monde"), Some("fr"));
    }

    #[test]
    fn detects_english_greeting() {
        assert_eq!(detect_language("Hello world"), Some("en"));
    }

    #[test]
    fn detects_french_complaint() {
        assert_eq!(
            detect_language("Vous etes nul affreux c'est zero"),
            Some("fr")
        );
    }

    #[test]
    fn detects_english_praise() {
        assert_eq!(
            detect_language("I love you, you are so beautiful"),
            Some("en")
        );
    }

    #[test]
    fn detects_german() {
        assert_eq!(
            detect_language("Das Wetter ist heute nicht gut"),
            Some("de")
        );
    }

    #[test]
    fn detects_spanish() {
        assert_eq!(
            detect_language("Hola, el producto es muy bueno pero caro"),
            Some("es")
        );
    }

    #[test]
    fn accents_pull_towards_french() {
        assert_eq!(detect_language("C'était très agréable"), Some("fr"));
    }

    #[test]
    fn no_signal_is_none() {
        assert_eq!(detect_language(""), None);
        assert_eq!(detect_language("12345 !!!"), None);
        assert_eq!(detect_language("xkcd qwert zuiop"), None);
    }
}
