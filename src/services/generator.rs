use log::debug;

use crate::services::validator::WordValidator;
use crate::utils::distinct_letters;

/// Find every dictionary word that can be formed from `letters`.
///
/// Only the buckets of letters actually on the rack are scanned, once each, so
/// a word can't show up twice. Results follow the rack order of first letters
/// and are alphabetical within each letter.
pub fn find_all_words<'a>(validator: &WordValidator<'a>, letters: &[char]) -> Vec<&'a str> {
    let lexicon = validator.lexicon();

    let words: Vec<&'a str> = distinct_letters(letters)
        .into_iter()
        .flat_map(move |first| lexicon.bucket(first))
        .filter(|word| validator.is_valid(word, letters))
        .collect();

    debug!("Found {} words for rack {}", words.len(), letters.iter().collect::<String>());
    words
}
