/// Rendering layer — all terminal I/O lives here.
///
/// Each function receives a mutable writer and an immutable view of the
/// game state.  No game logic is performed; this module only translates
/// state into terminal commands.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal,
    QueueableCommand,
};

use alien_invasion::entities::{EnemyUnit, GameState, Projectile, Ship};
use alien_invasion::settings::Settings;
use alien_invasion::sprite::Sprite;

// ── Colour palette ────────────────────────────────────────────────────────────

const C_SHIP: Color = Color::White;
const C_ALIEN: Color = Color::Green;

/// Two-row alien glyph; matches the default 3×2 alien box.
const ALIEN_ART: [&str; 2] = ["<▼>", "[_]"];

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame: background, bullets, ship, fleet — then one
/// flush, so the terminal only ever sees finished frames.
pub fn render<W: Write>(out: &mut W, state: &GameState, ship_sprite: &Sprite) -> std::io::Result<()> {
    out.queue(style::SetBackgroundColor(state.settings.bg_color))?;
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    for projectile in &state.projectiles {
        draw_projectile(out, &state.settings, projectile)?;
    }
    draw_ship(out, &state.settings, &state.ship, ship_sprite)?;
    draw_fleet(out, &state.settings, &state.fleet)?;

    // Park cursor in a harmless spot and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, 0))?;
    out.flush()?;
    Ok(())
}

// ── Entities ──────────────────────────────────────────────────────────────────

fn draw_projectile<W: Write>(
    out: &mut W,
    settings: &Settings,
    projectile: &Projectile,
) -> std::io::Result<()> {
    out.queue(style::SetForegroundColor(settings.bullet_color))?;
    let row: String = "█".repeat(projectile.rect.width.max(0) as usize);
    for i in 0..projectile.rect.height {
        draw_row(
            out,
            settings,
            projectile.rect.x,
            projectile.rect.y + i,
            &row,
        )?;
    }
    Ok(())
}

fn draw_ship<W: Write>(
    out: &mut W,
    settings: &Settings,
    ship: &Ship,
    sprite: &Sprite,
) -> std::io::Result<()> {
    out.queue(style::SetForegroundColor(C_SHIP))?;
    for (i, row) in sprite.rows().iter().enumerate() {
        draw_row(out, settings, ship.rect.x, ship.rect.y + i as i32, row)?;
    }
    Ok(())
}

fn draw_fleet<W: Write>(
    out: &mut W,
    settings: &Settings,
    fleet: &[EnemyUnit],
) -> std::io::Result<()> {
    out.queue(style::SetForegroundColor(C_ALIEN))?;
    for unit in fleet {
        for (i, row) in ALIEN_ART.iter().enumerate() {
            draw_row(out, settings, unit.rect.x, unit.rect.y + i as i32, row)?;
        }
    }
    Ok(())
}

// ── Clipped cell output ───────────────────────────────────────────────────────

/// Print one art row at cell `(x, y)`, dropping whatever falls outside the
/// play area.  The ship is never clamped by the update rules, so clipping
/// here is what keeps stray coordinates from wrapping the cursor.
fn draw_row<W: Write>(
    out: &mut W,
    settings: &Settings,
    x: i32,
    y: i32,
    row: &str,
) -> std::io::Result<()> {
    if y < 0 || y >= settings.screen_height {
        return Ok(());
    }
    let skip = (-x).max(0) as usize;
    let col = x.max(0);
    if col >= settings.screen_width {
        return Ok(());
    }
    let visible: String = row
        .chars()
        .skip(skip)
        .take((settings.screen_width - col) as usize)
        .collect();
    if visible.is_empty() {
        return Ok(());
    }
    out.queue(cursor::MoveTo(col as u16, y as u16))?;
    out.queue(Print(visible))?;
    Ok(())
}
