use std::str::SplitWhitespace;

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// anything that is neither an ASCII word character nor ASCII whitespace
    static ref PUNCTUATION: Regex = Regex::new(r"[^0-9A-Za-z_\t\n\f\r ]").unwrap();
}

/// Token iterator over a `NormalizedText`.
/// A clone resumes from the same position; call `NormalizedText::tokens` again to start over.
pub type Tokens<'a> = SplitWhitespace<'a>;

/// Text normalizer
/// Turns raw free text into lowercase tokens without punctuation.
///
/// # Examples
/// ```
/// use movie_similarity::TextNormalizer;
/// let text = TextNormalizer::normalize("Space, Robots & FIGHT!");
/// let tokens: Vec<&str> = text.tokens().collect();
/// assert_eq!(tokens, vec!["space", "robots", "fight"]);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct TextNormalizer;

impl TextNormalizer {
    /// Lowercase `text` and strip every character that is not an ASCII word
    /// character (`[0-9A-Za-z_]`) or ASCII whitespace. Accented letters and
    /// Unicode spaces are removed, not kept or split on.
    /// Splitting into tokens is deferred to `NormalizedText::tokens`.
    pub fn normalize(text: &str) -> NormalizedText {
        let lowered = text.to_lowercase();
        let cleaned = PUNCTUATION.replace_all(&lowered, "").into_owned();
        NormalizedText { cleaned }
    }

    /// Normalize and collect the tokens right away
    pub fn tokenize(text: &str) -> Vec<String> {
        Self::normalize(text).tokens().map(str::to_string).collect()
    }
}

/// Lowercased, punctuation free text
/// The token sequence is produced lazily and can be iterated any number of times.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedText {
    cleaned: String,
}

impl NormalizedText {
    /// Fresh iterator over the tokens, in text order
    #[inline]
    pub fn tokens(&self) -> Tokens<'_> {
        self.cleaned.split_whitespace()
    }

    #[inline]
    pub fn token_count(&self) -> usize {
        self.tokens().count()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens().next().is_none()
    }

    pub fn as_str(&self) -> &str {
        &self.cleaned
    }
}

impl From<&str> for NormalizedText {
    fn from(text: &str) -> Self {
        TextNormalizer::normalize(text)
    }
}
