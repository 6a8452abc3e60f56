use rand::seq::SliceRandom;
use rand::Rng;

/// Check if a word can be formed using only the available letters.
/// Each available letter can be used once, so multiplicities must line up.
pub fn can_form(word: &str, letters: &[char]) -> bool {
    let mut remaining = letters.to_vec();

    for ch in word.chars().flat_map(char::to_uppercase) {
        match remaining.iter().position(|&c| c == ch) {
            Some(idx) => {
                remaining.swap_remove(idx);
            }
            None => return false,
        }
    }

    true
}

/// Select `count` items from the bag, with replacement
pub fn select_random_from_bag<R: Rng + ?Sized>(
    bag: &[char],
    count: usize,
    rng: &mut R,
) -> Vec<char> {
    (0..count).filter_map(|_| bag.choose(&mut *rng).copied()).collect()
}

/// Distinct letters in order of first appearance
pub fn distinct_letters(letters: &[char]) -> Vec<char> {
    let mut seen = Vec::with_capacity(letters.len());
    for &c in letters {
        if !seen.contains(&c) {
            seen.push(c);
        }
    }
    seen
}
