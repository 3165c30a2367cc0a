//! Game session: the driver loop connecting input, engine and screen.
//!
//! One turn is processed to completion before the next event is read:
//!
//! 1. Show the grid
//! 2. Block for an [`InputEvent`]
//! 3. `Quit` ends the session; a move goes to [`GameEngine::apply_move`]
//! 4. A full board shows the final grid and `GAME OVER`, ending the session
//!
//! Both endings are orderly; only I/O failures surface as errors.

use anyhow::Result;

use tui_2048_core::GameEngine;
use tui_2048_input::InputSource;
use tui_2048_term::Screen;
use tui_2048_types::{InputEvent, MoveOutcome, BANNER, GAME_OVER_MESSAGE};

/// Why a session stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    Quit,
    GameOver,
}

/// Run a session until the player quits or the board fills up.
pub fn run<I, S>(engine: &mut GameEngine, mut input: I, mut screen: S) -> Result<SessionEnd>
where
    I: InputSource,
    S: Screen,
{
    tracing::info!(
        rows = engine.grid().rows(),
        cols = engine.grid().cols(),
        "session started"
    );
    screen.show(&format!("{}\n", BANNER))?;

    let mut moves: u64 = 0;
    loop {
        screen.show(&engine.render())?;

        let event = input.next_event()?;
        let direction = match event {
            InputEvent::Quit => {
                screen.show(&format!("{}\n", event.as_str()))?;
                tracing::info!(moves, "player quit");
                return Ok(SessionEnd::Quit);
            }
            InputEvent::Move(direction) => direction,
        };

        moves += 1;
        let outcome = engine.apply_move(direction);
        tracing::debug!(
            direction = direction.as_str(),
            tiles = engine.grid().non_empty_count(),
            "move applied"
        );

        if outcome == MoveOutcome::GameOver {
            screen.show(&engine.render())?;
            screen.show(&format!("{}\n", GAME_OVER_MESSAGE))?;
            tracing::info!(moves, "game over");
            return Ok(SessionEnd::GameOver);
        }
    }
}
