//! Terminal 2048 runner (default binary).
//!
//! Reads arrow keys in raw mode, plays one move per key and prints the grid
//! after every turn. Ctrl-C quits; a full board ends the game. Both exit 0.

use anyhow::Result;

use tui_2048::config::Config;
use tui_2048::core::{GameConfig, GameEngine};
use tui_2048::input::TerminalInput;
use tui_2048::logging;
use tui_2048::session;
use tui_2048::term::TerminalRenderer;

fn main() -> Result<()> {
    let config = Config::from_env()?;
    let _log_guard = logging::init(&config)?;

    let seed = config.seed_or_random();
    tracing::info!(seed, "starting tui-2048");
    let mut engine = GameEngine::new(GameConfig::default(), seed);

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = session::run(&mut engine, TerminalInput::new(), &mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    let end = result?;
    tracing::info!(?end, "exiting");
    Ok(())
}
