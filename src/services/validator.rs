use crate::services::word_loader::Lexicon;
use crate::utils::can_form;

/// Decides whether a submitted word counts for a rack
pub struct WordValidator<'a> {
    lexicon: &'a Lexicon,
}

impl<'a> WordValidator<'a> {
    pub fn new(lexicon: &'a Lexicon) -> Self {
        Self { lexicon }
    }

    /// True iff `word` is a dictionary word that can be spelled from `letters`.
    /// `word` is matched against the lexicon as given, so callers uppercase it first.
    pub fn is_valid(&self, word: &str, letters: &[char]) -> bool {
        if word.is_empty() || !self.lexicon.contains(word) {
            return false;
        }
        can_form(word, letters)
    }

    pub fn lexicon(&self) -> &'a Lexicon {
        self.lexicon
    }
}
