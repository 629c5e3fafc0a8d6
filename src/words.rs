// -*- coding: utf-8 -*-
//
// Copyright 2021 Michael Buesch <m@bues.ch>
//
// SPDX-License-Identifier: MIT OR Apache-2.0
//

use rand::{Rng, SeedableRng, distr::Alphanumeric};
use rand_chacha::ChaCha8Rng;

pub const MIN_WORD_LEN: usize = 2;
pub const MAX_WORD_LEN: usize = 30;

/// Fixed seed, so that every run with the same word count
/// produces the same file.
pub const SEED: u64 = 42;

/// Endless source of random alphanumeric words.
pub struct WordGenerator {
    rng: ChaCha8Rng,
}

impl WordGenerator {
    pub fn new() -> WordGenerator {
        WordGenerator::with_seed(SEED)
    }

    pub fn with_seed(seed: u64) -> WordGenerator {
        WordGenerator {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Generate one word with a length in MIN_WORD_LEN..=MAX_WORD_LEN.
    pub fn next_word(&mut self) -> String {
        let num_chars = self.rng.random_range(MIN_WORD_LEN..=MAX_WORD_LEN);
        (&mut self.rng)
            .sample_iter(Alphanumeric)
            .take(num_chars)
            .map(char::from)
            .collect()
    }
}

impl Iterator for WordGenerator {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        Some(self.next_word())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_bounds() {
        for word in WordGenerator::new().take(5000) {
            assert!(word.len() >= MIN_WORD_LEN, "too short: {:?}", word);
            assert!(word.len() <= MAX_WORD_LEN, "too long: {:?}", word);
            assert!(word.chars().all(|c| c.is_ascii_alphanumeric()), "bad char in {:?}", word);
        }
    }

    #[test]
    fn test_length_range_covered() {
        let mut seen = [false; MAX_WORD_LEN + 1];
        for word in WordGenerator::new().take(5000) {
            seen[word.len()] = true;
        }
        assert!(seen[MIN_WORD_LEN]);
        assert!(seen[MAX_WORD_LEN]);
        assert!(seen[..MIN_WORD_LEN].iter().all(|s| !s));
    }

    #[test]
    fn test_alphabet_covered() {
        let text: String = WordGenerator::new().take(2000).collect();
        assert!(text.chars().any(|c| c.is_ascii_lowercase()));
        assert!(text.chars().any(|c| c.is_ascii_uppercase()));
        assert!(text.chars().any(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_deterministic() {
        let a: Vec<String> = WordGenerator::new().take(100).collect();
        let b: Vec<String> = WordGenerator::new().take(100).collect();
        assert_eq!(a, b);

        let c: Vec<String> = WordGenerator::with_seed(SEED + 1).take(100).collect();
        assert_ne!(a, c);
    }

    #[test]
    fn test_prefix_stable() {
        // A shorter run is a prefix of a longer one.
        let short: Vec<String> = WordGenerator::new().take(3).collect();
        let long: Vec<String> = WordGenerator::new().take(50).collect();
        assert_eq!(short[..], long[..3]);
    }
}

// vim: ts=4 sw=4 expandtab
