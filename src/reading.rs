//! Reading time estimation
//!
//! Words are whitespace-delimited tokens with leading and trailing
//! punctuation removed. Tokens that are nothing but punctuation (`--`,
//! `...`) are not words.

use crate::constants::WORDS_PER_MINUTE;

/// Strip non-alphanumeric characters from both ends of a token
pub fn clean_word(token: &str) -> &str {
    token.trim_matches(|c: char| !c.is_alphanumeric())
}

/// Count cleaned words in `text`
pub fn count_words(text: &str) -> usize {
    text.split_whitespace()
        .filter(|token| !clean_word(token).is_empty())
        .count()
}

/// Minutes needed to read `word_count` words.
///
/// Rounds up, so any non-empty text takes at least one minute. Zero words
/// take zero minutes.
pub fn estimate_minutes(word_count: usize, words_per_minute: usize) -> usize {
    if word_count == 0 {
        return 0;
    }
    word_count.div_ceil(words_per_minute.max(1)).max(1)
}

/// Result of a single estimate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadingEstimate {
    pub words: usize,
    pub minutes: usize,
}

/// Estimates reading time at a fixed reading speed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadingTimeEstimator {
    words_per_minute: usize,
}

impl ReadingTimeEstimator {
    /// Create estimator with a custom reading speed (clamped to at least 1)
    pub fn new(words_per_minute: usize) -> Self {
        Self {
            words_per_minute: words_per_minute.max(1),
        }
    }

    /// Reading speed in words per minute
    pub fn words_per_minute(&self) -> usize {
        self.words_per_minute
    }

    /// Estimate reading time for `text`
    pub fn estimate(&self, text: &str) -> ReadingEstimate {
        let words = count_words(text);
        let minutes = estimate_minutes(words, self.words_per_minute);
        log::debug!(
            "{} words at {} wpm -> {} min",
            words,
            self.words_per_minute,
            minutes
        );
        ReadingEstimate { words, minutes }
    }
}

impl Default for ReadingTimeEstimator {
    fn default() -> Self {
        Self::new(WORDS_PER_MINUTE)
    }
}
