use std::collections::{BTreeSet, HashMap};
use std::fs::File;
use std::io::{self, BufRead};
use std::path::Path;
use log::info;

use crate::error::LoadError;

/// Longest word kept from the word list.
pub const MAX_WORD_LEN: usize = 10;

/// Dictionary words partitioned by first letter
#[derive(Debug, Default)]
pub struct Lexicon {
    buckets: HashMap<char, BTreeSet<String>>,
    len: usize,
}

impl Lexicon {
    /// Load the word list at `file_path` (one word per line)
    pub fn load(file_path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = file_path.as_ref();
        let file = File::open(path).map_err(|e| LoadError::from_io(path, e))?;
        let lexicon = Self::from_reader(io::BufReader::new(file))
            .map_err(|e| LoadError::from_io(path, e))?;

        info!("Loaded {} words (max_len {}) from {}", lexicon.len(), MAX_WORD_LEN, path.display());
        Ok(lexicon)
    }

    pub fn from_reader<R: BufRead>(reader: R) -> io::Result<Self> {
        let mut lexicon = Lexicon::default();
        for line in reader.lines() {
            let line = line?;
            lexicon.insert(line.trim());
        }
        Ok(lexicon)
    }

    fn insert(&mut self, word: &str) {
        if word.chars().count() > MAX_WORD_LEN {
            return;
        }
        let Some(first) = word.chars().next() else {
            return;
        };
        if self.buckets.entry(first).or_default().insert(word.to_string()) {
            self.len += 1;
        }
    }

    pub fn contains(&self, word: &str) -> bool {
        match word.chars().next() {
            Some(first) => self
                .buckets
                .get(&first)
                .map_or(false, |bucket| bucket.contains(word)),
            None => false,
        }
    }

    /// Words starting with `letter`, in alphabetical order
    pub fn bucket(&self, letter: char) -> impl Iterator<Item = &str> {
        self.buckets
            .get(&letter)
            .into_iter()
            .flat_map(|bucket| bucket.iter().map(String::as_str))
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl<'a> FromIterator<&'a str> for Lexicon {
    fn from_iter<T: IntoIterator<Item = &'a str>>(iter: T) -> Self {
        let mut lexicon = Lexicon::default();
        for word in iter {
            lexicon.insert(word.trim());
        }
        lexicon
    }
}
