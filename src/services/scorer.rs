use log::warn;

use crate::services::letter_loader::LetterInventory;

/// Flat per-letter scoring, no bonuses or multipliers
pub struct Scorer<'a> {
    inventory: &'a LetterInventory,
}

impl<'a> Scorer<'a> {
    pub fn new(inventory: &'a LetterInventory) -> Self {
        Self { inventory }
    }

    /// Sum of the point values of each letter in `word`
    pub fn score(&self, word: &str) -> u32 {
        word.chars()
            .map(|c| {
                self.inventory.value_of(c).unwrap_or_else(|| {
                    warn!("No point value for letter '{}' in {}", c, word);
                    0
                })
            })
            .sum()
    }

    pub fn total<'w, I>(&self, words: I) -> u32
    where
        I: IntoIterator<Item = &'w str>,
    {
        words.into_iter().map(|w| self.score(w)).sum()
    }
}
