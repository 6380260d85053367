use alien_invasion::entities::*;
use alien_invasion::settings::Settings;

// ── Rect placement helpers ────────────────────────────────────────────────────

#[test]
fn rect_bottom_and_midtop() {
    let rect = Rect::new(10, 20, 4, 6);
    assert_eq!(rect.bottom(), 26);
    assert_eq!(rect.midtop(), (12, 20));
}

#[test]
fn rect_set_midtop_centers_top_edge() {
    let mut rect = Rect::new(0, 0, 3, 15);
    rect.set_midtop((400, 552));
    assert_eq!(rect.x, 399); // 400 - 3/2
    assert_eq!(rect.y, 552);
    assert_eq!(rect.midtop(), (400, 552));
}

#[test]
fn rect_set_midbottom_centers_bottom_edge() {
    let mut rect = Rect::new(0, 0, 60, 48);
    rect.set_midbottom((400, 600));
    assert_eq!(rect.x, 370);
    assert_eq!(rect.y, 552);
    assert_eq!(rect.bottom(), 600);
}

// ── Derives ───────────────────────────────────────────────────────────────────

#[test]
fn entity_clone_and_eq() {
    assert_eq!(Direction::Left, Direction::Left);
    assert_ne!(Direction::Left, Direction::Right);
    assert_eq!(Direction::Up.clone(), Direction::Up);

    let rect = Rect::new(1, 2, 3, 4);
    assert_eq!(rect, rect.clone());

    let unit = EnemyUnit { rect };
    assert_eq!(unit.clone(), unit);
}

#[test]
fn game_state_clone_is_independent() {
    let settings = Settings::new(800, 600);
    let rect = Rect::new(370, 552, 60, 48);
    let original = GameState {
        settings,
        ship: Ship {
            x: 370.0,
            y: 552.0,
            rect,
            moving_right: false,
            moving_left: false,
            moving_up: false,
            moving_down: false,
        },
        projectiles: Vec::new(),
        fleet: Vec::new(),
        running: true,
        frame: 0,
    };
    let mut cloned = original.clone();

    // Mutating the clone must not affect the original
    cloned.ship.x = 99.0;
    cloned.running = false;
    cloned.projectiles.push(Projectile {
        y: 5.0,
        rect: Rect::new(1, 5, 1, 1),
    });
    cloned.fleet.push(EnemyUnit {
        rect: Rect::new(50, 50, 3, 2),
    });

    assert_eq!(original.ship.x, 370.0);
    assert!(original.running);
    assert!(original.projectiles.is_empty());
    assert!(original.fleet.is_empty());
}
