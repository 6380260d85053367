/// All game entity types — pure data plus bounding-box placement helpers.

use crate::settings::Settings;

// ── Bounding box ──────────────────────────────────────────────────────────────

/// Axis-aligned rectangle in screen cells.  Tracks where an entity sits and
/// where it gets drawn; nothing in this game collides.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Rect {
        Rect { x, y, width, height }
    }

    /// One past the lowest occupied row.
    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }

    /// Center of the top edge.
    pub fn midtop(&self) -> (i32, i32) {
        (self.x + self.width / 2, self.y)
    }

    /// Place the rect so its top edge is centered on `(x, y)`.
    pub fn set_midtop(&mut self, (x, y): (i32, i32)) {
        self.x = x - self.width / 2;
        self.y = y;
    }

    /// Place the rect so its bottom edge is centered on `(x, y)`.
    pub fn set_midbottom(&mut self, (x, y): (i32, i32)) {
        self.x = x - self.width / 2;
        self.y = y - self.height;
    }
}

// ── Input intents ─────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Right,
    Left,
    Up,
    Down,
}

// ── Player ship ───────────────────────────────────────────────────────────────

/// The player's ship.  Positions are floats so sub-cell speeds accumulate;
/// `rect` is re-derived from them after every update.
#[derive(Clone, Debug)]
pub struct Ship {
    pub x: f32,
    pub y: f32,
    pub rect: Rect,
    /// Movement intents — independent flags, several may be true at once.
    /// Up/down are tracked even when vertical movement is switched off.
    pub moving_right: bool,
    pub moving_left: bool,
    pub moving_up: bool,
    pub moving_down: bool,
}

// ── Projectile ────────────────────────────────────────────────────────────────

/// One fired bullet.  The column is fixed at creation and lives only in the
/// rect; the row is a float so the upward speed accumulates.
#[derive(Clone, Debug)]
pub struct Projectile {
    pub y: f32,
    pub rect: Rect,
}

// ── Fleet member ──────────────────────────────────────────────────────────────

/// One alien in the fleet.  Placed once, never moved.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EnemyUnit {
    pub rect: Rect,
}

// ── Master game state ─────────────────────────────────────────────────────────

/// The entire game state.  Cloneable so pure update functions can
/// return a new copy without mutating the original.
#[derive(Clone, Debug)]
pub struct GameState {
    pub settings: Settings,
    pub ship: Ship,
    /// Bullets currently in flight; never longer than `bullets_allowed`.
    pub projectiles: Vec<Projectile>,
    /// The fixed alien grid laid out at startup.
    pub fleet: Vec<EnemyUnit>,
    /// Cleared by the quit action; the loop checks it every frame.
    pub running: bool,
    pub frame: u64,
}
