use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::ops::Deref;
use serde::Serialize;

use crate::services::letter_loader::LetterInventory;
use crate::services::word_loader::Lexicon;

/// Number of letters on a rack
pub const RACK_SIZE: usize = 10;

/// The letters available to both players for one round
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rack(Vec<char>);

impl Rack {
    pub fn new(letters: Vec<char>) -> Self {
        Rack(letters)
    }

    /// Parse a rack typed as a string, e.g. "catxxxxxxx".
    /// Returns `None` unless it has exactly `RACK_SIZE` letters.
    pub fn parse(s: &str) -> Option<Self> {
        let letters: Vec<char> = s.trim().chars().flat_map(char::to_uppercase).collect();
        if letters.len() != RACK_SIZE || !letters.iter().all(|c| c.is_alphabetic()) {
            return None;
        }
        Some(Rack(letters))
    }
}

impl Deref for Rack {
    type Target = [char];

    fn deref(&self) -> &[char] {
        &self.0
    }
}

impl fmt::Display for Rack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.iter().try_for_each(|c| write!(f, "{}", c))
    }
}

/// Application state shared across all handlers
pub struct AppState {
    pub lexicon: Lexicon,
    pub inventory: LetterInventory,
}

#[derive(Serialize)]
pub struct ConfigResponse {
    pub values: HashMap<char, u32>,
    pub bag: BTreeMap<char, usize>,
    pub rack_size: usize,
    pub word_count: usize,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct ScoredWord {
    pub word: String,
    pub score: u32,
}

#[derive(Serialize)]
pub struct SolveResponse {
    pub rack: String,
    pub words: Vec<ScoredWord>,
    pub total: u32,
}
