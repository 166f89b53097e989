//! Interactive command loop over any reader/writer pair

use crate::config::DisplayConfig;
use crate::render::render_board;
use anyhow::Result;
use puzzle::{Error, Game, PhaseKind, Score};
use rand::Rng;
use std::io::{BufRead, Write};
use std::time::Instant;

const HELP: &str = "Commands: 1-4 pick an option, r new puzzle, h help, q quit";

/// A line of player input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Pick an option (0-based)
    Select(usize),
    Restart,
    Help,
    Quit,
}

impl Command {
    /// Parse a trimmed input line; option numbers are 1-based
    pub fn parse(line: &str) -> Option<Command> {
        match line.trim().to_ascii_lowercase().as_str() {
            "r" | "restart" | "clear" => Some(Command::Restart),
            "h" | "help" | "?" => Some(Command::Help),
            "q" | "quit" | "exit" => Some(Command::Quit),
            other => match other.parse::<usize>() {
                Ok(n) if n >= 1 => Some(Command::Select(n - 1)),
                _ => None,
            },
        }
    }
}

/// Play until the player quits, input ends, or `round_limit` rounds have
/// been played
pub fn run<R, I, O>(
    game: &mut Game<R>,
    display: &DisplayConfig,
    round_limit: Option<u32>,
    input: I,
    output: &mut O,
) -> Result<Score>
where
    R: Rng,
    I: BufRead,
    O: Write,
{
    writeln!(output, "{HELP}\n")?;
    write!(output, "{}", render_board(game.round(), display))?;

    let mut lines = input.lines();
    loop {
        write!(output, "> ")?;
        output.flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        if game.tick(Instant::now()) {
            tracing::trace!("status message expired");
        }

        match Command::parse(&line) {
            None => writeln!(output, "Unknown command {:?}. {HELP}", line.trim())?,
            Some(Command::Help) => writeln!(output, "{HELP}")?,
            Some(Command::Quit) => break,
            Some(Command::Restart) => {
                game.restart()?;
                if limit_reached(game, round_limit) {
                    break;
                }
                write!(output, "\n{}", render_board(game.round(), display))?;
            }
            Some(Command::Select(index)) => match game.select(index, Instant::now()) {
                Ok(_) => {
                    if let Some(status) = game.status() {
                        writeln!(output, "{status}")?;
                    }
                    if game.acknowledge()? == PhaseKind::Transitioning {
                        game.commit_transition()?;
                        if limit_reached(game, round_limit) {
                            break;
                        }
                        write!(output, "\n{}", render_board(game.round(), display))?;
                    }
                }
                Err(Error::OptionOutOfRange { index, len }) => {
                    writeln!(output, "Option {} out of range, choose 1-{len}", index + 1)?
                }
                Err(err) => return Err(err.into()),
            },
        }
    }

    let score = game.score();
    writeln!(
        output,
        "\nCorrect: {}  Incorrect: {}  Rounds: {}",
        score.correct, score.incorrect, score.rounds_played
    )?;
    tracing::info!(?score, "session finished");
    Ok(score)
}

fn limit_reached<R: Rng>(game: &Game<R>, round_limit: Option<u32>) -> bool {
    round_limit.is_some_and(|limit| game.score().rounds_played >= limit)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_commands() {
        assert_eq!(Command::parse("1"), Some(Command::Select(0)));
        assert_eq!(Command::parse(" 4 \n"), Some(Command::Select(3)));
        assert_eq!(Command::parse("R"), Some(Command::Restart));
        assert_eq!(Command::parse("quit"), Some(Command::Quit));
        assert_eq!(Command::parse("0"), None);
        assert_eq!(Command::parse("left"), None);
    }
}
