//! Interactive piece rack runner (default binary).
//!
//! Renders the rack, prints the menu, reads a selection from stdin, applies
//! the chosen operation, and reports the outcome. Malformed selections are
//! reported and re-prompted, never fatal; selection 0 exits with code 0.

use std::io::{self, BufRead};
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Result;

use piece_rack::core::{RackError, StandardRack};
use piece_rack::term::Console;
use piece_rack::types::{RackCommand, SWAP_GROUP};

fn main() -> Result<()> {
    let mut rack = StandardRack::seeded(startup_seed());
    let mut console = Console::new();
    let stdin = io::stdin();

    run(&mut rack, &mut console, stdin.lock())
}

/// Seed drawn from the wall clock, as the reference implementation does.
fn startup_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.subsec_nanos())
        .unwrap_or(1)
}

fn run(rack: &mut StandardRack, console: &mut Console, input: impl BufRead) -> Result<()> {
    let mut lines = input.lines();

    loop {
        console.draw_state(&rack.snapshot())?;
        console.draw_menu()?;
        console.prompt()?;

        // EOF on stdin ends the session like an explicit exit.
        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;

        match RackCommand::from_str(&line) {
            None => console.report("Invalid option")?,
            Some(RackCommand::Quit) => {
                console.report("Closing the rack...")?;
                break;
            }
            Some(command) => match apply(rack, command) {
                Ok(outcome) => console.report(&outcome)?,
                Err(err) => console.report(&err.to_string())?,
            },
        }
    }

    Ok(())
}

/// Apply one menu command, producing the outcome message on success.
fn apply(rack: &mut StandardRack, command: RackCommand) -> Result<String, RackError> {
    match command {
        RackCommand::Play => rack.play().map(|piece| format!("Played piece: {piece}")),
        RackCommand::Reserve => rack
            .reserve()
            .map(|piece| format!("Reserved piece: {piece}")),
        RackCommand::UseReserved => rack
            .use_reserved()
            .map(|piece| format!("Used reserved piece: {piece}")),
        RackCommand::SwapFront => rack
            .swap_front()
            .map(|()| "Swapped the queue front with the reserve top".to_string()),
        RackCommand::SwapGroup => rack
            .swap_many(SWAP_GROUP)
            .map(|()| format!("Swapped the first {SWAP_GROUP} pieces with the reserve")),
        // Quit is handled by the run loop before operations are applied.
        RackCommand::Quit => Ok(String::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_reports_played_piece() {
        let mut rack = StandardRack::seeded(12345);

        let outcome = apply(&mut rack, RackCommand::Play).unwrap();
        assert!(outcome.starts_with("Played piece: ["));
        assert!(outcome.ends_with(" 0]"));
    }

    #[test]
    fn test_apply_surfaces_failure_reasons() {
        let mut rack = StandardRack::seeded(12345);

        assert_eq!(
            apply(&mut rack, RackCommand::UseReserved),
            Err(RackError::ReserveEmpty)
        );
        assert_eq!(
            apply(&mut rack, RackCommand::SwapFront),
            Err(RackError::InsufficientPieces)
        );
    }

    #[test]
    fn test_apply_swap_group_after_filling_reserve() {
        let mut rack = StandardRack::seeded(12345);
        for _ in 0..SWAP_GROUP {
            apply(&mut rack, RackCommand::Reserve).unwrap();
        }

        let outcome = apply(&mut rack, RackCommand::SwapGroup).unwrap();
        assert!(outcome.contains("Swapped the first 3 pieces"));
    }
}
