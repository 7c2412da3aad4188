//! Play the demo map interactively on stdin/stdout.

use std::io::{self, BufRead, Write};

use grotto_cli::Session;
use grotto_cli::demo;

/// Play until the game ends, the player quits, or input runs out.
pub fn run(start: Option<&str>, strict: bool, goal: Option<u64>) -> Result<(), String> {
    let world = demo::build(super::world_config(strict)).map_err(|e| e.to_string())?;
    let start_name = start.unwrap_or(demo::START_ROOM);
    let start = world
        .find_room(start_name)
        .ok_or_else(|| format!("no room named \"{start_name}\""))?;
    let session = Session::new(world, start, goal.unwrap_or(demo::ENEMY_COUNT))
        .map_err(|e| e.to_string())?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    play(session, stdin.lock(), stdout.lock()).map_err(|e| e.to_string())
}

/// Drive `session` from `input`, writing the transcript to `output`.
fn play(mut session: Session, input: impl BufRead, mut output: impl Write) -> io::Result<()> {
    let opening = session.look().map_err(io::Error::other)?;
    writeln!(output, "{opening}")?;

    let mut lines = input.lines();
    while !session.is_over() {
        write!(output, "\n> ")?;
        output.flush()?;

        let Some(line) = lines.next().transpose()? else {
            writeln!(output)?;
            break;
        };
        let response = session.process(&line).map_err(io::Error::other)?;
        if !response.is_empty() {
            writeln!(output, "{response}")?;
        }
    }

    tracing::debug!(
        victories = session.world().tally().count(),
        "session finished"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use grotto_core::WorldConfig;

    fn transcript(script: &str) -> String {
        let world = demo::build(WorldConfig::default()).unwrap();
        let start = world.find_room(demo::START_ROOM).unwrap();
        let session = Session::new(world, start, demo::ENEMY_COUNT).unwrap();
        let mut out = Vec::new();
        play(session, script.as_bytes(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn opening_shows_start_room() {
        let out = transcript("");
        assert!(out.starts_with("Kitchen\n--------------------\n"));
    }

    #[test]
    fn stops_after_quit() {
        let out = transcript("quit\nsouth\n");
        assert!(out.contains("Goodbye!"));
        assert!(!out.contains("Dining Hall\n----"));
    }

    #[test]
    fn full_win() {
        let out = transcript("take\nsouth\nfight\ncheese\ntake\nwest\nfight book\n");
        assert!(out.contains("You fend Dave off with the cheese"));
        assert!(out.contains("You fend Tabitha off with the book"));
        assert!(out.trim_end().ends_with("Congratulations, you have vanquished the enemy horde!"));
    }
}
