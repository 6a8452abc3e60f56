use std::io::{self, Write};
use log::{debug, info};
use tokio::io::{AsyncBufRead, Lines};
use tokio::time::Duration;

use crate::game::round::{run_entry_window, RoundSummary};
use crate::models::Rack;
use crate::services::generator::find_all_words;
use crate::services::letter_loader::LetterInventory;
use crate::services::scorer::Scorer;
use crate::services::validator::WordValidator;
use crate::services::word_loader::Lexicon;

/// Console game over a loaded lexicon and letter inventory
pub struct Game<'a> {
    inventory: &'a LetterInventory,
    validator: WordValidator<'a>,
    scorer: Scorer<'a>,
    window: Duration,
}

impl<'a> Game<'a> {
    pub fn new(lexicon: &'a Lexicon, inventory: &'a LetterInventory, window: Duration) -> Self {
        Self {
            inventory,
            validator: WordValidator::new(lexicon),
            scorer: Scorer::new(inventory),
            window,
        }
    }

    /// Menu loop: start rounds until the player quits or input ends
    pub async fn run<R, W>(&self, lines: &mut Lines<R>, out: &mut W) -> io::Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: Write,
    {
        writeln!(out, "Welcome to Mini Scrabble.")?;

        loop {
            let menu = "\nTo start a game, enter \"S\", and to quit, enter \"Q\": ";
            let Some(choice) = prompt(lines, out, menu).await? else {
                break;
            };

            match choice.trim().to_uppercase().as_str() {
                "Q" => break,
                "S" => {
                    let rack = self.inventory.draw_rack();
                    self.play_round(lines, out, rack).await?;
                }
                _ => writeln!(out, "Invalid input.")?,
            }
        }

        writeln!(out, "\n***PROGRAM EXITED***")?;
        Ok(())
    }

    /// One round on `rack`: both entry windows, the results, then the optional reveal
    pub async fn play_round<R, W>(
        &self,
        lines: &mut Lines<R>,
        out: &mut W,
        rack: Rack,
    ) -> io::Result<RoundSummary>
    where
        R: AsyncBufRead + Unpin,
        W: Write,
    {
        let secs = self.window.as_secs();
        writeln!(
            out,
            "\nIn this game, you will be shown {} letters, and you will have {} seconds to\n\
             enter as many words as you can that can be formed from those letters.",
            rack.len(),
            secs
        )?;

        let ready = "\nPlayer 1, when you are ready to begin, press \"Enter\".";
        wait_until_ready(lines, out, ready).await?;
        let first = run_entry_window(lines, out, &rack, &self.validator, self.window).await?;

        let ready = "\nTime Up. Player 2, when you are ready to begin, press \"Enter\".";
        wait_until_ready(lines, out, ready).await?;
        let second = run_entry_window(lines, out, &rack, &self.validator, self.window).await?;
        writeln!(out, "\nTime Up.\n")?;

        let summary = RoundSummary { rack, players: [first, second] };
        self.print_summary(out, &summary)?;

        let reveal = "\nTo see all possible words from these letters, enter \"A\", \
                      otherwise, just press \"Enter\": ";
        let reveal = prompt(lines, out, reveal).await?;
        if reveal.map_or(false, |r| r.trim().eq_ignore_ascii_case("A")) {
            self.print_all_words(out, &summary.rack)?;
        }

        Ok(summary)
    }

    fn print_summary<W: Write>(&self, out: &mut W, summary: &RoundSummary) -> io::Result<()> {
        let [p1_score, p2_score] = summary.scores(&self.scorer);
        info!("Round on {} finished: {} to {}", summary.rack, p1_score, p2_score);

        writeln!(out, "***SCORES***")?;
        writeln!(out, "Player 1: {}", p1_score)?;
        writeln!(out, "Player 2: {}", p2_score)?;

        for (idx, player) in summary.players.iter().enumerate() {
            writeln!(out, "\n***PLAYER {}'s WORDS***", idx + 1)?;
            for word in player.words() {
                writeln!(out, "{}", word)?;
            }
        }
        Ok(())
    }

    fn print_all_words<W: Write>(&self, out: &mut W, rack: &Rack) -> io::Result<()> {
        writeln!(out, "\n***ALL POSSIBLE WORDS WITH LETTERS \"{}\"***", rack)?;

        let mut computer_score = 0;
        for word in find_all_words(&self.validator, rack) {
            let score = self.scorer.score(word);
            computer_score += score;
            writeln!(out, "{} ({})", word, score)?;
        }

        writeln!(out, "\nThe computer's score was: {}", computer_score)?;
        Ok(())
    }
}

/// Show `message` and wait for a line; `None` once input has ended
async fn prompt<R, W>(
    lines: &mut Lines<R>,
    out: &mut W,
    message: &str,
) -> io::Result<Option<String>>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    write!(out, "{}", message)?;
    out.flush()?;
    lines.next_line().await
}

/// Show `message` and wait for a bare Enter. Stray words don't count as ready.
async fn wait_until_ready<R, W>(lines: &mut Lines<R>, out: &mut W, message: &str) -> io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut line = prompt(lines, out, message).await?;
    while let Some(entry) = line {
        if entry.trim().is_empty() {
            break;
        }
        debug!("Ignoring {:?} while waiting for Enter", entry);
        line = lines.next_line().await?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;
    use tokio::io::AsyncBufReadExt;

    fn fixtures() -> (Lexicon, LetterInventory) {
        let lexicon = Lexicon::from_reader("CAT\nACT\nTAX\nDOG\n".as_bytes()).unwrap();
        let inventory =
            LetterInventory::from_reader("1 A1 C1 T1\n8 X1\n".as_bytes(), Path::new("letters"))
                .unwrap();
        (lexicon, inventory)
    }

    async fn play(script: &'static [u8]) -> (RoundSummary, String) {
        let (lexicon, inventory) = fixtures();
        let game = Game::new(&lexicon, &inventory, Duration::from_secs(15));
        let mut lines = script.lines();
        let mut out = Vec::new();

        let summary = game
            .play_round(&mut lines, &mut out, Rack::parse("CATXXXXXXX").unwrap())
            .await
            .unwrap();
        (summary, String::from_utf8(out).unwrap())
    }

    #[tokio::test]
    async fn test_round_until_eof() {
        // an in-memory reader never blocks, so player 1's window runs to end of input
        let (summary, shown) = play(b"\ncat\ntax\ncat\ndog\n").await;

        assert_eq!(summary.players[0].words(), ["CAT", "TAX"]);
        assert!(summary.players[1].words().is_empty());
        assert!(shown.contains("***SCORES***\nPlayer 1: 13\nPlayer 2: 0\n"));
        assert!(shown.contains("***PLAYER 1's WORDS***\nCAT\nTAX\n"));
        assert!(!shown.contains("***ALL POSSIBLE WORDS"));
    }

    #[tokio::test]
    async fn test_two_windows_and_reveal() {
        use tokio::io::{AsyncWriteExt, BufReader};

        let (lexicon, inventory) = fixtures();
        let game = Game::new(&lexicon, &inventory, Duration::from_millis(200));
        let (reader, mut writer) = tokio::io::duplex(256);
        let mut lines = BufReader::new(reader).lines();
        let mut out = Vec::new();

        let feeder = tokio::spawn(async move {
            writer.write_all(b"\ncat\ntax\n").await.unwrap();
            tokio::time::sleep(Duration::from_millis(400)).await;
            writer.write_all(b"\nact\nact\ndog\n").await.unwrap();
            tokio::time::sleep(Duration::from_millis(400)).await;
            writer.write_all(b"a\n").await.unwrap();
        });

        let summary = game
            .play_round(&mut lines, &mut out, Rack::parse("CATXXXXXXX").unwrap())
            .await
            .unwrap();
        feeder.await.unwrap();
        let shown = String::from_utf8(out).unwrap();

        assert_eq!(summary.players[0].words(), ["CAT", "TAX"]);
        assert_eq!(summary.players[1].words(), ["ACT"]);
        assert!(shown.contains("Player 1: 13\nPlayer 2: 3\n"));
        assert!(shown.contains("***PLAYER 2's WORDS***\nACT\n"));
        assert!(shown.contains("***ALL POSSIBLE WORDS WITH LETTERS \"CATXXXXXXX\"***"));
        assert!(shown.contains("CAT (3)\nACT (3)\nTAX (10)\n"));
        assert!(shown.contains("The computer's score was: 16"));
    }

    #[tokio::test]
    async fn test_late_words_do_not_start_player_two() {
        use tokio::io::{AsyncWriteExt, BufReader};

        let (lexicon, inventory) = fixtures();
        let game = Game::new(&lexicon, &inventory, Duration::from_millis(200));
        let (reader, mut writer) = tokio::io::duplex(256);
        let mut lines = BufReader::new(reader).lines();
        let mut out = Vec::new();

        let feeder = tokio::spawn(async move {
            writer.write_all(b"\ncat\n").await.unwrap();
            tokio::time::sleep(Duration::from_millis(300)).await;
            // player 1 is still typing after time ran out
            writer.write_all(b"tax\nact\n").await.unwrap();
            tokio::time::sleep(Duration::from_millis(400)).await;
            writer.write_all(b"\n").await.unwrap();
        });

        let summary = game
            .play_round(&mut lines, &mut out, Rack::parse("CATXXXXXXX").unwrap())
            .await
            .unwrap();
        feeder.await.unwrap();

        assert_eq!(summary.players[0].words(), ["CAT"]);
        assert!(summary.players[1].words().is_empty());
    }

    #[tokio::test]
    async fn test_menu_quit_and_invalid_input() {
        let (lexicon, inventory) = fixtures();
        let game = Game::new(&lexicon, &inventory, Duration::from_secs(15));
        let input: &[u8] = b"x\nq\n";
        let mut lines = input.lines();
        let mut out = Vec::new();

        game.run(&mut lines, &mut out).await.unwrap();
        let shown = String::from_utf8(out).unwrap();

        assert!(shown.starts_with("Welcome to Mini Scrabble."));
        assert_eq!(shown.matches("Invalid input.").count(), 1);
        assert!(!shown.contains("Player 1, when you are ready"));
        assert!(shown.ends_with("***PROGRAM EXITED***\n"));
    }

    #[tokio::test]
    async fn test_menu_ends_on_eof() {
        let (lexicon, inventory) = fixtures();
        let game = Game::new(&lexicon, &inventory, Duration::from_secs(15));
        let input: &[u8] = b"s\n";
        let mut lines = input.lines();
        let mut out = Vec::new();

        game.run(&mut lines, &mut out).await.unwrap();
        let shown = String::from_utf8(out).unwrap();

        assert!(shown.contains("Player 1, when you are ready"));
        assert!(shown.contains("***SCORES***"));
        assert!(shown.ends_with("***PROGRAM EXITED***\n"));
    }
}
