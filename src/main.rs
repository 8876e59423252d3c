//! Terminal runner (default binary).
//!
//! Title screen, then the game. Key presses are queued on the session and
//! applied on the next fixed-length tick; rendering goes through the
//! framebuffer renderer in `blockfall-term`.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event};

use blockfall::config::AppConfig;
use blockfall::core::{GameSession, GameSnapshot, PieceGenerator};
use blockfall::input::{handle_key_event, is_press, should_quit};
use blockfall::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Screen {
    Title,
    Playing,
}

fn main() -> Result<()> {
    let config = AppConfig::from_env();
    let mut session = GameSession::with_generator(config.randomizer.build(config.seed));

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut session, &config);

    // Always try to restore terminal state.
    let _ = term.exit();

    eprintln!(
        "[blockfall] final score {} ({} lines, seed {}, {} randomizer)",
        session.score(),
        session.lines_cleared(),
        config.seed,
        config.randomizer.as_str()
    );
    result
}

fn run(
    term: &mut TerminalRenderer,
    session: &mut GameSession<Box<dyn PieceGenerator>>,
    config: &AppConfig,
) -> Result<()> {
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut snap = GameSnapshot::default();
    let mut screen = Screen::Title;

    let tick_duration = Duration::from_millis(config.tick_ms as u64);
    let mut last_tick = Instant::now();

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let viewport = Viewport::new(w, h);
        match screen {
            Screen::Title => view.render_title_into(viewport, &mut fb),
            Screen::Playing => {
                session.snapshot_into(&mut snap);
                view.render_into(&snap, viewport, &mut fb);
            }
        }
        term.present(&mut fb)?;

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if is_press(key) => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    match screen {
                        Screen::Title => {
                            screen = Screen::Playing;
                            last_tick = Instant::now();
                        }
                        Screen::Playing => {
                            if let Some(command) = handle_key_event(key) {
                                session.enqueue(command);
                            }
                        }
                    }
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        // Tick.
        let elapsed = last_tick.elapsed();
        if screen == Screen::Playing && elapsed >= tick_duration {
            last_tick = Instant::now();
            session.advance(elapsed.as_millis().min(u32::MAX as u128) as u32);
        }
    }
}
