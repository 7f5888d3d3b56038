// Integration tests (native) for the `duck-dash` simulation.
// These tests avoid wasm-specific functionality and exercise pure Rust logic
// so they can run under `cargo test` on the host. Sessions are seeded, so
// every scenario is reproducible.

use duck_dash::sim::{
    GameSession, Obstacle, TickOutcome, GRAVITY, JUMP_FORCE, OBSTACLE_SPEED_START,
    SPEED_INCREMENT,
};

const VIEW_W: f64 = 480.0;
const VIEW_H: f64 = 270.0;

fn session(seed: u64) -> GameSession {
    GameSession::new(VIEW_W, VIEW_H, seed)
}

#[test]
fn ground_clamp_holds_every_tick() {
    let mut s = session(42);
    for tick in 0..600u32 {
        if tick % 37 == 0 {
            s.jump();
        }
        let _ = s.tick();
        assert!(
            s.player.y + s.player.height <= s.ground_y() + 1e-9,
            "player sank below ground at tick {tick}: y={}",
            s.player.y
        );
    }
}

#[test]
fn landing_resets_velocity_and_jump_flag() {
    let mut s = session(3);
    s.jump();
    for _ in 0..200 {
        let _ = s.tick();
        if !s.player.jumping {
            break;
        }
    }
    assert!(!s.player.jumping, "duck never landed");
    assert_eq!(s.player.vy, 0.0);
    assert_eq!(s.player.y + s.player.height, s.ground_y());
}

#[test]
fn double_jump_applies_exactly_one_impulse() {
    let mut s = session(5);
    s.jump();
    assert_eq!(s.player.vy, JUMP_FORCE);
    assert!(s.player.jumping);

    // Second request before any tick: no additional impulse.
    s.jump();
    assert_eq!(s.player.vy, JUMP_FORCE);

    // Airborne after one tick of gravity; a jump request must change nothing.
    let _ = s.tick();
    let airborne_vy = s.player.vy;
    assert!((airborne_vy - (JUMP_FORCE + GRAVITY)).abs() < 1e-12);
    s.jump();
    assert_eq!(s.player.vy, airborne_vy);

    // After landing the impulse is accepted again.
    for _ in 0..200 {
        let _ = s.tick();
        if !s.player.jumping {
            break;
        }
    }
    s.jump();
    assert_eq!(s.player.vy, JUMP_FORCE);
}

#[test]
fn retired_obstacle_scores_once_and_raises_speed() {
    let mut s = session(9);
    // Behind the duck, so it can never collide, only retire. With the spawn
    // delay at least 120 ticks / 2.2 speed, no natural spawn interferes.
    s.obstacles.push(Obstacle {
        x: 20.0,
        y: s.ground_y() - 10.0,
        width: 10.0,
        height: 10.0,
    });

    // Right edge starts at 30 and must drop below -4: first tick with
    // 30 - 2.2 k < -4 is k = 16.
    for tick in 1..=15 {
        match s.tick() {
            TickOutcome::Running { cleared } => assert_eq!(cleared, 0, "tick {tick}"),
            TickOutcome::Collision => panic!("phantom collision at tick {tick}"),
        }
        assert_eq!(s.score, 0);
        assert_eq!(s.obstacles.len(), 1);
    }
    assert_eq!(s.tick(), TickOutcome::Running { cleared: 1 });
    assert_eq!(s.score, 1);
    assert!(s.obstacles.is_empty());
    assert!((s.scroll_speed - (OBSTACLE_SPEED_START + SPEED_INCREMENT)).abs() < 1e-12);

    // Nothing else scores until another obstacle actually exits.
    for _ in 0..30 {
        let _ = s.tick();
    }
    assert_eq!(s.score, 1);
}

#[test]
fn scroll_speed_is_monotone_within_a_run() {
    let mut s = session(1234);
    let mut previous = s.scroll_speed;
    for _ in 0..5_000 {
        let outcome = s.tick();
        assert!(
            s.scroll_speed >= previous,
            "speed decreased mid-run: {} -> {}",
            previous,
            s.scroll_speed
        );
        previous = s.scroll_speed;
        if outcome == TickOutcome::Collision {
            break;
        }
    }
    // A fresh session resets the ramp.
    let fresh = session(1234);
    assert_eq!(fresh.scroll_speed, OBSTACLE_SPEED_START);
}

#[test]
fn spawned_obstacles_sit_on_the_ground_within_bounds() {
    let mut s = session(77);
    // Worst-case first spawn is ceil(220 / 2.2) + 1 ticks out.
    for _ in 0..110 {
        let _ = s.tick();
        if !s.obstacles.is_empty() {
            break;
        }
    }
    let obstacle = s.obstacles.first().expect("no obstacle spawned in 110 ticks");
    assert!((12.0..20.0).contains(&obstacle.width));
    assert!((18.0..38.0).contains(&obstacle.height));
    assert_eq!(obstacle.width.fract(), 0.0);
    assert_eq!(obstacle.height.fract(), 0.0);
    assert_eq!(obstacle.y, s.ground_y() - obstacle.height);
    // Spawned at the right edge plus its own width, minus what it has
    // scrolled since.
    assert!(obstacle.x <= VIEW_W + obstacle.width);
    assert!(obstacle.x > VIEW_W - 20.0);
}

#[test]
fn a_stationary_duck_eventually_collides() {
    let mut s = session(2024);
    let mut collided = false;
    for _ in 0..5_000 {
        if s.tick() == TickOutcome::Collision {
            collided = true;
            break;
        }
    }
    assert!(collided, "never collided while refusing to jump");
}

#[test]
fn identical_seeds_replay_identically() {
    let mut a = session(31337);
    let mut b = session(31337);
    for _ in 0..300 {
        let oa = a.tick();
        let ob = b.tick();
        assert_eq!(oa, ob);
        if oa == TickOutcome::Collision {
            break;
        }
    }
    assert_eq!(a.score, b.score);
    assert_eq!(a.player.y, b.player.y);
    assert_eq!(a.obstacles.len(), b.obstacles.len());
    for (oa, ob) in a.obstacles.iter().zip(&b.obstacles) {
        assert_eq!(oa.x, ob.x);
        assert_eq!(oa.width, ob.width);
        assert_eq!(oa.height, ob.height);
    }
}
