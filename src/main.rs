mod display;

use std::collections::HashMap;
use std::io::{stdout, BufWriter, Write};
use std::path::Path;
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::{
    cursor,
    event::{
        self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers,
        KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    terminal,
    ExecutableCommand,
};

use alien_invasion::compute::{fire_projectile, init_state, request_quit, set_ship_intent, tick};
use alien_invasion::entities::{Direction, GameState};
use alien_invasion::settings::Settings;
use alien_invasion::sprite::Sprite;

const FRAME: Duration = Duration::from_millis(16); // ≈60 FPS

const CAPTION: &str = "Alien Invasion";

/// The ship sprite ships next to the binary; a missing file is fatal.
const SHIP_SPRITE_PATH: &str = "assets/ship.txt";

// ── Held-key tracking ─────────────────────────────────────────────────────────

/// A key is considered "held" if its last press/repeat event arrived within
/// this many frames.  Covers terminals that don't emit key-release events:
/// the OS key-repeat rate is ≥ 15 Hz, so the window is always refreshed
/// before expiry while the key is down.
const HOLD_WINDOW: u64 = 4;

/// Returns true if `key` was seen within the last `HOLD_WINDOW` frames.
fn is_held(key_frame: &HashMap<KeyCode, u64>, key: &KeyCode, frame: u64) -> bool {
    key_frame
        .get(key)
        .map(|&last| frame.saturating_sub(last) <= HOLD_WINDOW)
        .unwrap_or(false)
}

// ── Game loop ─────────────────────────────────────────────────────────────────

/// One iteration = drain input → refresh the ship's intent flags → advance
/// the world one tick → redraw → sleep out the rest of the frame budget.
/// Runs until the quit action clears `state.running`.
///
/// Input model: a `key_frame` map records the frame number of the last
/// press/repeat event for every key.  Each frame the arrow keys' held state
/// is mapped onto the ship's four movement flags, so releasing one key
/// clears exactly that flag and several may be live at once.  Works on two
/// classes of terminal:
/// * **Keyboard-enhancement capable** (Ghostty, kitty, etc.): proper
///   `Press` / `Repeat` / `Release` events → keys are removed on release.
/// * **Classic terminals**: only `Press` events (OS key-repeat shows as
///   repeated `Press`).  Keys expire naturally after `HOLD_WINDOW` frames
///   of silence.
fn game_loop<W: Write>(
    out: &mut W,
    state: &mut GameState,
    ship_sprite: &Sprite,
    rx: &mpsc::Receiver<Event>,
) -> Result<()> {
    // Maps each held key → the frame it was last seen (press or repeat).
    let mut key_frame: HashMap<KeyCode, u64> = HashMap::new();
    let mut frame: u64 = 0;

    while state.running {
        let frame_start = Instant::now();
        frame += 1;

        // ── Drain all pending input events (non-blocking) ─────────────────────
        while let Ok(Event::Key(KeyEvent { code, kind, modifiers, .. })) = rx.try_recv() {
            match kind {
                // Press: record key + handle one-shot actions
                KeyEventKind::Press => {
                    key_frame.insert(code, frame);
                    match code {
                        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                            *state = request_quit(state);
                        }
                        KeyCode::Char('c')
                            if modifiers.contains(KeyModifiers::CONTROL) =>
                        {
                            *state = request_quit(state);
                        }
                        KeyCode::Char(' ') => {
                            *state = fire_projectile(state);
                        }
                        _ => {}
                    }
                }
                // Repeat: refresh timestamp so key stays "held"
                KeyEventKind::Repeat => {
                    key_frame.insert(code, frame);
                }
                // Release: remove key immediately (keyboard-enhancement path)
                KeyEventKind::Release => {
                    key_frame.remove(&code);
                }
            }
        }

        // ── Map held arrow keys onto the ship's intent flags ──────────────────
        for (key, direction) in [
            (KeyCode::Right, Direction::Right),
            (KeyCode::Left, Direction::Left),
            (KeyCode::Up, Direction::Up),
            (KeyCode::Down, Direction::Down),
        ] {
            let active = is_held(&key_frame, &key, frame);
            *state = set_ship_intent(state, direction, active);
        }

        *state = tick(state);

        display::render(out, state, ship_sprite)?;

        let elapsed = frame_start.elapsed();
        if elapsed < FRAME {
            thread::sleep(FRAME - elapsed);
        }
    }
    Ok(())
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    // Load the ship art before touching terminal state, so a missing asset
    // fails with a readable message instead of a garbled screen.
    let ship_sprite = Sprite::load(Path::new(SHIP_SPRITE_PATH))?;

    let raw_out = stdout();
    let mut out = BufWriter::new(raw_out);

    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(terminal::SetTitle(CAPTION))?;
    out.execute(cursor::Hide)?;

    // Request key-release (and key-repeat) events from the terminal.
    // Ghostty / kitty-protocol terminals support this; others fall back gracefully.
    let keyboard_enhanced = out
        .execute(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
        ))
        .is_ok();

    // Dedicate a thread exclusively to blocking event reads, sending them
    // through a channel so the game loop never has to block on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || {
        loop {
            match event::read() {
                Ok(ev) => {
                    if tx.send(ev).is_err() {
                        break; // receiver dropped → program exiting
                    }
                }
                Err(_) => break,
            }
        }
    });

    let (width, height) = terminal::size()?;
    let settings = Settings::new(width as i32, height as i32);
    // Fixed-size play area instead of the whole terminal:
    // let settings = Settings::new(80, 24);
    let mut state = init_state(settings, ship_sprite.size());

    let result = game_loop(&mut out, &mut state, &ship_sprite, &rx);

    // Always restore the terminal
    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    result
}
