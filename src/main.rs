//! Terminal block-drop runner (default binary).
//!
//! Interactive by default; `--headless STEPS` plays a gravity-only game and
//! prints the final snapshot as JSON instead.

use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event};

use blockdrop::input::{handle_key_event, should_quit};
use blockdrop::logging::{enable_logging, init_log_file};
use blockdrop::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use blockdrop::types::TICK_MS;
use blockdrop::{run_headless, vlog, Config, Session};

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = Config::from_env().parse_args(&args)?;

    if let Some(path) = &config.log_path {
        init_log_file(path).with_context(|| format!("opening log file {}", path.display()))?;
        enable_logging();
    }

    let seed = config.resolve_seed();
    vlog!("[Config] seed={} headless={:?}", seed, config.headless);

    if let Some(steps) = config.headless {
        let snap = run_headless(seed, steps);
        println!("{}", serde_json::to_string_pretty(&snap)?);
        return Ok(());
    }

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, seed);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, seed: u32) -> Result<()> {
    let mut session = Session::new(seed);
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);

    let tick = Duration::from_millis(TICK_MS as u64);
    let mut last_tick = Instant::now();
    let mut dirty = true;

    loop {
        if dirty {
            let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
            view.render_into(&session.snapshot(), Viewport::new(w, h), &mut fb);
            term.draw(&fb)?;
            dirty = false;
        }

        // Input with timeout until next tick.
        let timeout = tick.checked_sub(last_tick.elapsed()).unwrap_or(Duration::ZERO);
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => {
                    if should_quit(key) {
                        break;
                    }
                    if let Some(action) = handle_key_event(key) {
                        dirty |= session.apply(action);
                    }
                }
                Event::Resize(_, _) => {
                    term.invalidate();
                    dirty = true;
                }
                _ => {}
            }
        }

        let elapsed = last_tick.elapsed();
        if elapsed >= tick {
            last_tick = Instant::now();
            let ms = u32::try_from(elapsed.as_millis()).unwrap_or(u32::MAX);
            dirty |= session.tick(ms);
        }
    }

    vlog!(
        "[Game] quit with score {} ({} lines)",
        session.game().score(),
        session.game().lines()
    );
    Ok(())
}
