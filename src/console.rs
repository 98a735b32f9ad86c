//! Line-oriented console front end for a [`Game`].

use std::io::{self, BufRead, Write};

use crate::error::{DrawError, PredictError};
use crate::game::{Game, GameState};
use crate::options::ROUNDS;
use crate::result::{EndReason, RoundOutcome, SessionSummary};

const PROMPT: &str = "Next card? (h: higher, l: lower, s: same): ";

/// Plays a session by reading predictions from `input` and writing the table
/// to `output`.
///
/// # Example
///
/// ```
/// use std::io::Cursor;
///
/// use hilo::{Console, Game, GameOptions};
///
/// let mut game = Game::new(GameOptions::default(), 7);
/// let input = Cursor::new("h\n".repeat(10));
/// let mut console = Console::new(input, Vec::new());
/// let summary = console.play(&mut game).unwrap();
/// assert_eq!(summary.rounds_played, 10);
/// ```
#[derive(Debug)]
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Creates a console over the given reader and writer.
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Consumes the console, returning the reader and writer.
    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }

    /// Runs the session to completion.
    ///
    /// End of input ends the session early with the score so far.
    ///
    /// # Errors
    ///
    /// Returns an error if reading or writing fails, or if the game is
    /// driven into a state the console cannot continue from.
    pub fn play(&mut self, game: &mut Game) -> io::Result<SessionSummary> {
        writeln!(self.output, "=== High & Low ===")?;
        writeln!(
            self.output,
            "Guess whether the next card is higher or lower than the current one!"
        )?;
        writeln!(self.output)?;

        while game.state() == GameState::AwaitingDraw {
            let current = match game.draw() {
                Ok(card) => card,
                Err(DrawError::DeckExhausted) => break,
                Err(err) => return Err(io::Error::other(err)),
            };

            writeln!(self.output, "Round {}/{ROUNDS}", game.round())?;
            writeln!(self.output, "Current card: {current}")?;

            let Some(outcome) = self.read_prediction(game)? else {
                game.abandon();
                writeln!(self.output)?;
                break;
            };
            self.print_outcome(&outcome)?;

            game.advance().map_err(io::Error::other)?;
        }

        let summary = game
            .summary()
            .ok_or_else(|| io::Error::other("session has not ended"))?;
        self.print_summary(&summary)?;
        Ok(summary)
    }

    /// Prompts until the game accepts a prediction. Returns `None` at end of
    /// input.
    fn read_prediction(&mut self, game: &mut Game) -> io::Result<Option<RoundOutcome>> {
        loop {
            write!(self.output, "{PROMPT}")?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(None);
            }

            match game.predict(&line) {
                Ok(outcome) => return Ok(Some(outcome)),
                Err(PredictError::Unrecognized) => {
                    writeln!(self.output, "Please enter h, l, or s.")?;
                }
                Err(err) => return Err(io::Error::other(err)),
            }
        }
    }

    fn print_outcome(&mut self, outcome: &RoundOutcome) -> io::Result<()> {
        writeln!(self.output, "Next card: {}", outcome.next)?;
        if outcome.correct {
            writeln!(self.output, "Correct! +1 point")?;
        } else {
            writeln!(self.output, "Wrong...")?;
        }
        writeln!(self.output, "Score: {}", outcome.score)?;
        writeln!(self.output, "---")
    }

    fn print_summary(&mut self, summary: &SessionSummary) -> io::Result<()> {
        match summary.reason {
            EndReason::DeckExhausted => writeln!(self.output, "Not enough cards left!")?,
            EndReason::InputClosed => writeln!(self.output, "Input closed.")?,
            EndReason::RoundsComplete => {}
        }

        writeln!(self.output)?;
        writeln!(self.output, "=== Game Over ===")?;
        writeln!(
            self.output,
            "Final score: {}/{}",
            summary.score, summary.rounds_played
        )?;
        writeln!(self.output, "{}", summary.tier.message())
    }
}
