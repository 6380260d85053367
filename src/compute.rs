/// Pure game-logic functions.
///
/// Every public function takes an immutable reference to the current
/// `GameState` and returns a brand-new `GameState`; callers keep the
/// original.  Nothing in here touches the terminal.

use crate::entities::{Direction, EnemyUnit, GameState, Projectile, Rect, Ship};
use crate::settings::Settings;

// ── Constructors ─────────────────────────────────────────────────────────────

/// Build the initial game state: ship centered on the bottom edge, fleet
/// laid out, no bullets in flight.  `ship_size` comes from the loaded
/// sprite, the way the original ship takes its box from its image.
pub fn init_state(settings: Settings, ship_size: (i32, i32)) -> GameState {
    let ship = new_ship(&settings, ship_size);
    let fleet = create_fleet(&settings);
    GameState {
        settings,
        ship,
        projectiles: Vec::new(),
        fleet,
        running: true,
        frame: 0,
    }
}

fn new_ship(settings: &Settings, (width, height): (i32, i32)) -> Ship {
    let mut rect = Rect::new(0, 0, width, height);
    rect.set_midbottom((settings.screen_width / 2, settings.screen_height));
    Ship {
        x: rect.x as f32,
        y: rect.y as f32,
        rect,
        moving_right: false,
        moving_left: false,
        moving_up: false,
        moving_down: false,
    }
}

fn new_alien(settings: &Settings, x: i32, y: i32) -> EnemyUnit {
    EnemyUnit {
        rect: Rect::new(x, y, settings.alien_width, settings.alien_height),
    }
}

/// Lay out the alien fleet.
///
/// One reference unit supplies the spacing measurements; the grid then
/// leaves one unit of gap between neighbours, one unit of margin at the
/// left and top, two units of margin at the right and three at the bottom.
/// Fully deterministic: same settings, same grid.
pub fn create_fleet(settings: &Settings) -> Vec<EnemyUnit> {
    let reference = new_alien(settings, 0, 0);
    let (alien_width, alien_height) = (reference.rect.width, reference.rect.height);

    let mut fleet = Vec::new();
    let mut current_y = alien_height;
    while current_y < settings.screen_height - 3 * alien_height {
        let mut current_x = alien_width;
        while current_x < settings.screen_width - 2 * alien_width {
            fleet.push(new_alien(settings, current_x, current_y));
            current_x += 2 * alien_width;
        }
        // Finished a row; back to the left margin, one row-stride down.
        current_y += 2 * alien_height;
    }
    fleet
}

// ── Input-driven state transitions (pure) ───────────────────────────────────

/// Set or clear one of the ship's movement-intent flags.  Flags are
/// independent: releasing one key never disturbs the others.
pub fn set_ship_intent(state: &GameState, direction: Direction, active: bool) -> GameState {
    let mut ship = state.ship.clone();
    match direction {
        Direction::Right => ship.moving_right = active,
        Direction::Left => ship.moving_left = active,
        Direction::Up => ship.moving_up = active,
        Direction::Down => ship.moving_down = active,
    }
    GameState {
        ship,
        ..state.clone()
    }
}

/// Fire one projectile from the ship's top center — silently refused while
/// the configured number of bullets is already in flight.
pub fn fire_projectile(state: &GameState) -> GameState {
    if state.projectiles.len() >= state.settings.bullets_allowed {
        return state.clone();
    }
    let mut rect = Rect::new(
        0,
        0,
        state.settings.bullet_width,
        state.settings.bullet_height,
    );
    rect.set_midtop(state.ship.rect.midtop());
    let mut projectiles = state.projectiles.clone();
    projectiles.push(Projectile {
        y: rect.y as f32,
        rect,
    });
    GameState {
        projectiles,
        ..state.clone()
    }
}

/// Request shutdown.  The loop notices at the top of its next iteration;
/// nothing else about the state changes.
pub fn request_quit(state: &GameState) -> GameState {
    GameState {
        running: false,
        ..state.clone()
    }
}

// ── Per-frame tick (pure) ───────────────────────────────────────────────────

/// Advance the world by one frame: move the ship by its intent flags, move
/// every bullet up the screen, then drop the bullets that have fully left
/// the top edge.  The fleet never moves.
pub fn tick(state: &GameState) -> GameState {
    let ship = update_ship(&state.settings, &state.ship);

    let mut projectiles: Vec<Projectile> = state
        .projectiles
        .iter()
        .map(|p| update_projectile(&state.settings, p))
        .collect();
    projectiles.retain(|p| p.rect.bottom() > 0);

    GameState {
        ship,
        projectiles,
        frame: state.frame + 1,
        ..state.clone()
    }
}

/// Net displacement per axis: opposing flags cancel exactly, and diagonal
/// motion needs no special case.  The vertical axis only contributes when
/// the settings enable it.  No boundary clamp — the ship may leave the
/// visible area and the renderer clips it.
fn update_ship(settings: &Settings, ship: &Ship) -> Ship {
    let mut dx = 0.0;
    if ship.moving_right {
        dx += settings.ship_speed;
    }
    if ship.moving_left {
        dx -= settings.ship_speed;
    }

    let mut dy = 0.0;
    if settings.vertical_movement {
        if ship.moving_down {
            dy += settings.ship_speed;
        }
        if ship.moving_up {
            dy -= settings.ship_speed;
        }
    }

    let x = ship.x + dx;
    let y = ship.y + dy;
    let rect = Rect {
        x: x as i32,
        y: y as i32,
        ..ship.rect
    };
    Ship {
        x,
        y,
        rect,
        ..ship.clone()
    }
}

fn update_projectile(settings: &Settings, projectile: &Projectile) -> Projectile {
    let y = projectile.y - settings.bullet_speed;
    Projectile {
        y,
        rect: Rect {
            y: y as i32,
            ..projectile.rect
        },
    }
}
