/// Static game configuration — tuning knobs only, no behavior.

use crossterm::style::Color;

/// All tunable values in one place.  Built once at startup and never
/// mutated afterwards; every update rule reads it through `GameState`.
#[derive(Clone, Debug)]
pub struct Settings {
    pub screen_width: i32,
    pub screen_height: i32,
    pub bg_color: Color,

    /// Cells of ship travel per frame on an active axis.
    pub ship_speed: f32,
    /// The up/down intent flags are always tracked, but only move the
    /// ship when this is on.
    pub vertical_movement: bool,

    pub bullet_speed: f32,
    pub bullet_width: i32,
    pub bullet_height: i32,
    pub bullet_color: Color,
    /// Max projectiles on screen at once; firing past the cap is a no-op.
    pub bullets_allowed: usize,

    pub alien_width: i32,
    pub alien_height: i32,
}

impl Settings {
    /// Default tuning for a play area of the given dimensions.
    pub fn new(screen_width: i32, screen_height: i32) -> Settings {
        Settings {
            screen_width,
            screen_height,
            bg_color: Color::Black,
            ship_speed: 0.5,
            vertical_movement: false,
            bullet_speed: 0.6,
            bullet_width: 1,
            bullet_height: 1,
            bullet_color: Color::Cyan,
            bullets_allowed: 3,
            alien_width: 3,
            alien_height: 2,
        }
    }
}
