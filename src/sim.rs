//! Pure runner simulation: physics integration, obstacle spawning and
//! scrolling, AABB collision and the per-run difficulty ramp.
//!
//! Nothing in here touches the browser. All randomness flows through the
//! seeded [`Pcg32`] owned by the session, so every scenario is reproducible
//! under native `cargo test`.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::sprite;

/// Downward acceleration applied every tick, px/tick^2.
pub const GRAVITY: f64 = 0.5;
/// Vertical impulse applied on jump, px/tick.
pub const JUMP_FORCE: f64 = -7.6;
/// Spawn delay is redrawn uniformly from this range after every spawn.
pub const OBSTACLE_MIN_GAP: f64 = 120.0;
pub const OBSTACLE_MAX_GAP: f64 = 220.0;
/// Scroll speed at the start of a run, px/tick.
pub const OBSTACLE_SPEED_START: f64 = 2.2;
/// Scroll speed gained per obstacle cleared.
pub const SPEED_INCREMENT: f64 = 0.0028;
/// Height of the ground strip at the bottom of the viewport.
pub const GROUND_HEIGHT: f64 = 32.0;
/// Horizontal position the duck runs at.
pub const PLAYER_START_X: f64 = 44.0;

/// An obstacle is retired once its right edge clears this margin.
const OFFSCREEN_MARGIN: f64 = -4.0;
const STAR_COUNT: usize = 42;

/// Axis-aligned rectangle in viewport pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    /// Strict AABB overlap test. Rectangles that merely touch edges do not
    /// count as colliding.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.x + other.width
            && self.x + self.width > other.x
            && self.y < other.y + other.height
            && self.y + self.height > other.y
    }
}

/// Uniform float over `[min, max)`.
pub fn random_range<R: Rng>(rng: &mut R, min: f64, max: f64) -> f64 {
    rng.gen_range(min..max)
}

/// The player sprite. Size is fixed by the duck bitmap.
#[derive(Clone, Debug)]
pub struct Player {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub vy: f64,
    pub jumping: bool,
    /// Monotonic tick counter driving the waddle animation.
    pub animation_time: u32,
}

impl Player {
    fn grounded(ground_y: f64) -> Self {
        let width = sprite::DUCK_WIDTH as f64;
        let height = sprite::DUCK_HEIGHT as f64;
        Self {
            x: PLAYER_START_X,
            y: ground_y - height,
            width,
            height,
            vy: 0.0,
            jumping: false,
            animation_time: 0,
        }
    }

    pub fn bounds(&self) -> Rect {
        Rect {
            x: self.x,
            y: self.y,
            width: self.width,
            height: self.height,
        }
    }
}

/// A scrolling obstacle resting on the ground line.
#[derive(Clone, Debug)]
pub struct Obstacle {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Obstacle {
    pub fn bounds(&self) -> Rect {
        Rect {
            x: self.x,
            y: self.y,
            width: self.width,
            height: self.height,
        }
    }
}

/// Decorative background star. Drifts left and wraps; no gameplay effect.
#[derive(Clone, Debug)]
pub struct Star {
    pub x: f64,
    pub y: f64,
    /// 1 or 2 px.
    pub size: f64,
    pub speed: f64,
}

impl Star {
    /// Cosmetic drift: slide left, wrap back in from the right edge.
    pub fn drift(&mut self, view_width: f64) {
        self.x -= self.speed;
        if self.x < -self.size {
            self.x += view_width + self.size;
        }
    }
}

/// Build the initial star field above the ground strip.
pub fn star_field<R: Rng>(rng: &mut R, view_width: f64, ground_y: f64) -> Vec<Star> {
    (0..STAR_COUNT)
        .map(|_| Star {
            x: random_range(rng, 0.0, view_width),
            y: random_range(rng, 0.0, ground_y - 40.0),
            size: if rng.gen_bool(0.2) { 2.0 } else { 1.0 },
            speed: random_range(rng, 0.05, 0.30),
        })
        .collect()
}

/// Which screen the game is on. Only `Running` advances the simulation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Intro,
    Running,
    GameOver,
}

/// What the shared start/jump input means in a given phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Jump,
    StartRun,
}

impl Phase {
    /// Map the primary input (space / tap / start button) to an action.
    /// While running the input jumps; a start mid-run never resets.
    pub fn on_primary(self) -> Action {
        match self {
            Phase::Running => Action::Jump,
            Phase::Intro | Phase::GameOver => Action::StartRun,
        }
    }
}

/// Result of advancing the simulation by one frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// Run continues; `cleared` obstacles were retired this tick.
    Running { cleared: u32 },
    /// The duck hit an obstacle.
    Collision,
}

/// All mutable state of a single run. Created on start, replaced wholesale
/// on reset, so nothing leaks between runs.
#[derive(Clone, Debug)]
pub struct GameSession {
    pub player: Player,
    pub obstacles: Vec<Obstacle>,
    pub score: u32,
    pub scroll_speed: f64,
    obstacle_timer: f64,
    obstacle_delay: f64,
    pub view_width: f64,
    pub view_height: f64,
    rng: Pcg32,
}

impl GameSession {
    pub fn new(view_width: f64, view_height: f64, seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let ground_y = view_height - GROUND_HEIGHT;
        let obstacle_delay = random_range(&mut rng, OBSTACLE_MIN_GAP, OBSTACLE_MAX_GAP);
        Self {
            player: Player::grounded(ground_y),
            obstacles: Vec::new(),
            score: 0,
            scroll_speed: OBSTACLE_SPEED_START,
            obstacle_timer: 0.0,
            obstacle_delay,
            view_width,
            view_height,
            rng,
        }
    }

    /// Y coordinate of the ground line the duck and obstacles rest on.
    pub fn ground_y(&self) -> f64 {
        self.view_height - GROUND_HEIGHT
    }

    /// Apply the jump impulse. Ignored while airborne, so two requests
    /// before landing produce exactly one velocity change.
    pub fn jump(&mut self) {
        if !self.player.jumping {
            self.player.vy = JUMP_FORCE;
            self.player.jumping = true;
        }
    }

    fn spawn_obstacle(&mut self) {
        let width = random_range(&mut self.rng, 12.0, 20.0).floor();
        let height = random_range(&mut self.rng, 18.0, 38.0).floor();
        self.obstacles.push(Obstacle {
            x: self.view_width + width,
            y: self.ground_y() - height,
            width,
            height,
        });
    }

    /// Advance the simulation by one frame.
    pub fn tick(&mut self) -> TickOutcome {
        let ground_y = self.ground_y();

        self.player.animation_time = self.player.animation_time.wrapping_add(1);
        self.player.vy += GRAVITY;
        self.player.y += self.player.vy;
        if self.player.y + self.player.height >= ground_y {
            self.player.y = ground_y - self.player.height;
            self.player.vy = 0.0;
            self.player.jumping = false;
        }

        // Spawn cadence scales with speed so gaps stay playable; the delay
        // is redrawn per spawn to keep the rhythm from turning periodic.
        self.obstacle_timer += 1.0;
        if self.obstacle_timer > self.obstacle_delay / self.scroll_speed {
            self.spawn_obstacle();
            self.obstacle_timer = 0.0;
            self.obstacle_delay = random_range(&mut self.rng, OBSTACLE_MIN_GAP, OBSTACLE_MAX_GAP);
        }

        // Reverse index order permits removal during the scan.
        let mut cleared = 0;
        let player_bounds = self.player.bounds();
        for i in (0..self.obstacles.len()).rev() {
            self.obstacles[i].x -= self.scroll_speed;
            let obstacle = &self.obstacles[i];
            if obstacle.x + obstacle.width < OFFSCREEN_MARGIN {
                self.obstacles.remove(i);
                self.score += 1;
                self.scroll_speed += SPEED_INCREMENT;
                cleared += 1;
                continue;
            }
            if obstacle.bounds().overlaps(&player_bounds) {
                return TickOutcome::Collision;
            }
        }
        TickOutcome::Running { cleared }
    }
}
