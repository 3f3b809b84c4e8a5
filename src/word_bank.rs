use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::{GameError, GameResult};

/// Immutable list of candidate words, normalized to uppercase.
#[derive(Debug, Clone)]
pub struct WordBank {
    words: Vec<String>,
}

impl WordBank {
    pub fn new<I, S>(words: I) -> GameResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| normalize_word(w.as_ref()))
            .collect::<GameResult<Vec<String>>>()?;

        if words.is_empty() {
            return Err(GameError::EmptyBank);
        }

        Ok(Self { words })
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false: construction rejects empty banks.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Uniform draw from the bank.
    pub fn draw_with<R: Rng + ?Sized>(&self, rng: &mut R) -> &str {
        // non-empty by construction
        self.words.choose(rng).map(String::as_str).unwrap_or_default()
    }

    pub fn draw(&self) -> &str {
        self.draw_with(&mut rand::thread_rng())
    }
}

fn normalize_word(word: &str) -> GameResult<String> {
    let trimmed = word.trim();
    if trimmed.is_empty() || !trimmed.chars().all(char::is_alphabetic) {
        return Err(GameError::InvalidWord(word.to_string()));
    }
    Ok(trimmed.to_uppercase())
}
