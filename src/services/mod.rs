pub mod generator;
pub mod letter_loader;
pub mod scorer;
pub mod validator;
pub mod word_loader;

use std::path::Path;
use log::warn;

use crate::error::LoadError;
use letter_loader::LetterInventory;
use word_loader::Lexicon;

/// Load both startup sources; either one missing aborts before anything else runs
pub fn load_sources(
    words_path: &Path,
    letters_path: &Path,
) -> Result<(Lexicon, LetterInventory), LoadError> {
    let lexicon = Lexicon::load(words_path)?;
    if lexicon.is_empty() {
        warn!(
            "{} has no words of {} letters or fewer",
            words_path.display(),
            word_loader::MAX_WORD_LEN
        );
    }
    let inventory = LetterInventory::load(letters_path)?;
    Ok((lexicon, inventory))
}
