use std::io::{self, Write};
use log::debug;
use tokio::io::{AsyncBufRead, Lines};
use tokio::time::{timeout, timeout_at, Duration, Instant};

use crate::models::Rack;
use crate::services::scorer::Scorer;
use crate::services::validator::WordValidator;

/// What happened to a submitted word
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submission {
    Accepted,
    /// Not a dictionary word, or not formable from the rack
    Invalid,
    /// Already accepted for this player this round
    Duplicate,
}

/// One player's accepted words for a round, in submission order
#[derive(Debug, Default, Clone)]
pub struct PlayerWordList {
    words: Vec<String>,
}

impl PlayerWordList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Uppercase `entry` and keep it if it's a new valid word for `rack`
    pub fn submit(
        &mut self,
        entry: &str,
        validator: &WordValidator<'_>,
        rack: &Rack,
    ) -> Submission {
        let word = entry.trim().to_uppercase();

        let outcome = if !validator.is_valid(&word, rack) {
            Submission::Invalid
        } else if self.words.contains(&word) {
            Submission::Duplicate
        } else {
            self.words.push(word.clone());
            Submission::Accepted
        };

        debug!("Submission {:?}: {:?}", word, outcome);
        outcome
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn total(&self, scorer: &Scorer<'_>) -> u32 {
        scorer.total(self.words.iter().map(String::as_str))
    }
}

/// Both players' results for a single rack
#[derive(Debug, Clone)]
pub struct RoundSummary {
    pub rack: Rack,
    pub players: [PlayerWordList; 2],
}

impl RoundSummary {
    pub fn scores(&self, scorer: &Scorer<'_>) -> [u32; 2] {
        [self.players[0].total(scorer), self.players[1].total(scorer)]
    }
}

/// Take word entries until `window` has elapsed or input ends.
///
/// Each read races the deadline, so a line arriving after it is never scored.
pub async fn run_entry_window<R, W>(
    lines: &mut Lines<R>,
    out: &mut W,
    rack: &Rack,
    validator: &WordValidator<'_>,
    window: Duration,
) -> io::Result<PlayerWordList>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let deadline = Instant::now() + window;
    let mut player = PlayerWordList::new();

    // a line already buffered would still beat an expired timeout_at
    while Instant::now() < deadline {
        write!(out, "\nThe letters are: {}\nEnter a word: ", rack)?;
        out.flush()?;

        match timeout_at(deadline, lines.next_line()).await {
            Ok(Ok(Some(entry))) => {
                player.submit(&entry, validator, rack);
            }
            Ok(Ok(None)) => {
                debug!("Input closed during entry window");
                break;
            }
            Ok(Err(e)) => return Err(e),
            Err(_) => break,
        }
    }

    drain_buffered(lines).await?;
    writeln!(out)?;
    Ok(player)
}

/// Discard lines that were already waiting when the window closed, so a word
/// typed just too late can't answer the next prompt.
pub async fn drain_buffered<R>(lines: &mut Lines<R>) -> io::Result<()>
where
    R: AsyncBufRead + Unpin,
{
    while let Ok(line) = timeout(Duration::ZERO, lines.next_line()).await {
        match line? {
            Some(late) => debug!("Dropped late entry {:?}", late),
            None => break,
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::word_loader::Lexicon;
    use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

    fn lexicon() -> Lexicon {
        ["CAT", "ACT", "TAX", "TACT"].into_iter().collect()
    }

    fn rack() -> Rack {
        Rack::parse("CATXXXXXXX").unwrap()
    }

    #[test]
    fn test_submit_outcomes() {
        let lexicon = lexicon();
        let validator = WordValidator::new(&lexicon);
        let rack = rack();
        let mut player = PlayerWordList::new();

        assert_eq!(player.submit("cat", &validator, &rack), Submission::Accepted);
        assert_eq!(player.submit("CAT", &validator, &rack), Submission::Duplicate);
        assert_eq!(player.submit(" Cat ", &validator, &rack), Submission::Duplicate);
        assert_eq!(player.submit("TACT", &validator, &rack), Submission::Invalid);
        assert_eq!(player.submit("DOG", &validator, &rack), Submission::Invalid);
        assert_eq!(player.submit("", &validator, &rack), Submission::Invalid);
        assert_eq!(player.submit("tax", &validator, &rack), Submission::Accepted);

        assert_eq!(player.words(), ["CAT", "TAX"]);
    }

    #[tokio::test]
    async fn test_window_collects_until_eof() {
        let lexicon = lexicon();
        let validator = WordValidator::new(&lexicon);
        let rack = rack();
        let input: &[u8] = b"cat\nxyz\nact\ncat\n";
        let mut lines = input.lines();
        let mut out = Vec::new();

        let window = Duration::from_secs(15);
        let player = run_entry_window(&mut lines, &mut out, &rack, &validator, window)
            .await
            .unwrap();

        assert_eq!(player.words(), ["CAT", "ACT"]);
        let shown = String::from_utf8(out).unwrap();
        assert!(shown.contains("The letters are: CATXXXXXXX"));
        assert_eq!(shown.matches("Enter a word: ").count(), 5);
    }

    #[tokio::test]
    async fn test_late_entries_are_ignored() {
        let lexicon = lexicon();
        let validator = WordValidator::new(&lexicon);
        let rack = rack();
        let (reader, mut writer) = tokio::io::duplex(64);
        let mut lines = BufReader::new(reader).lines();
        let mut out = Vec::new();

        let feeder = tokio::spawn(async move {
            writer.write_all(b"CAT\n").await.unwrap();
            tokio::time::sleep(Duration::from_millis(500)).await;
            writer.write_all(b"ACT\n").await.unwrap();
            writer
        });

        let window = Duration::from_millis(150);
        let player = run_entry_window(&mut lines, &mut out, &rack, &validator, window)
            .await
            .unwrap();
        assert_eq!(player.words(), ["CAT"]);

        // nothing was waiting at close, so a line sent afterwards reaches the next reader
        let _writer = feeder.await.unwrap();
        assert_eq!(lines.next_line().await.unwrap().as_deref(), Some("ACT"));
    }

    #[tokio::test]
    async fn test_lines_waiting_at_close_are_dropped() {
        let lexicon = lexicon();
        let validator = WordValidator::new(&lexicon);
        let rack = rack();
        let input: &[u8] = b"cat\nact\n\n";
        let mut lines = input.lines();
        let mut out = Vec::new();

        // a window that is already over when it opens reads nothing
        let player = run_entry_window(&mut lines, &mut out, &rack, &validator, Duration::ZERO)
            .await
            .unwrap();

        assert!(player.words().is_empty());
        assert_eq!(lines.next_line().await.unwrap(), None);
    }

    #[test]
    fn test_round_scores() {
        use crate::services::letter_loader::LetterInventory;
        use std::path::Path;

        let lexicon = lexicon();
        let validator = WordValidator::new(&lexicon);
        let inventory =
            LetterInventory::from_reader("1 A1 C1 T1\n8 X1\n".as_bytes(), Path::new("letters"))
                .unwrap();
        let scorer = Scorer::new(&inventory);
        let rack = rack();

        let mut first = PlayerWordList::new();
        first.submit("CAT", &validator, &rack);
        first.submit("TAX", &validator, &rack);
        let mut second = PlayerWordList::new();
        second.submit("ACT", &validator, &rack);
        second.submit("ACT", &validator, &rack);

        let summary = RoundSummary { rack, players: [first, second] };
        assert_eq!(summary.scores(&scorer), [13, 3]);
    }
}
