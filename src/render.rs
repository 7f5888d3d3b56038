//! Canvas painting for the runner scene and the intro / game-over panels.
//!
//! Drawing is a function of the current session; the only state the renderer
//! mutates is its own cosmetic layer (star drift and the parallax scroll
//! offset). Simulation state is never touched from here.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use web_sys::CanvasRenderingContext2d;

use crate::sim::{star_field, GameSession, Obstacle, Player, Star, GROUND_HEIGHT};
use crate::sprite;

const SKY_TOP: &str = "#050b24";
const SKY_BOTTOM: &str = "#172b56";
const HORIZON: &str = "#0d1834";
const RIDGE_FAR: &str = "#182947";
const RIDGE_NEAR: &str = "#243a63";
const GROUND: &str = "#111a33";
const GROUND_HIGHLIGHT: &str = "#1f2d4f";
const GROUND_SHADOW: &str = "#080f23";
const STARS: &str = "#f5f9d7";
const OBSTACLE: &str = "#ffb703";
const OBSTACLE_SHADOW: &str = "#a35713";
const OBSTACLE_HIGHLIGHT: &str = "#ffe59d";
const DUCK_SHADOW: &str = "#071122";
const TITLE_GLOW: &str = "#64ffda";
const TEXT_LIGHT: &str = "#f4f8ff";
const TEXT_DIM: &str = "#8ea9ff";

const TITLE_FONT: &str = "bold 30px 'Fira Code', monospace";
const BODY_FONT: &str = "13px 'Fira Code', monospace";

pub struct Renderer {
    ctx: CanvasRenderingContext2d,
    width: f64,
    height: f64,
    stars: Vec<Star>,
    /// Total scrolled distance, used for the parallax ridges and ground ticks.
    scroll_shift: f64,
}

impl Renderer {
    pub fn new(ctx: CanvasRenderingContext2d, width: f64, height: f64, seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let stars = star_field(&mut rng, width, height - GROUND_HEIGHT);
        Self {
            ctx,
            width,
            height,
            stars,
            scroll_shift: 0.0,
        }
    }

    /// Paint a running frame and advance the cosmetic scroll layers.
    pub fn draw_running(&mut self, session: &GameSession) {
        self.scroll_shift += session.scroll_speed;
        self.draw_world(session);
    }

    pub fn draw_intro(&mut self, session: &GameSession, high_score: u32) {
        self.draw_world(session);
        self.dim_scene(0.45);
        self.title_text("DUCK DASH", self.height * 0.38);
        self.body_text(
            "Space / tap to jump over the obstacles",
            self.height * 0.38 + 28.0,
        );
        self.body_text(
            &format!("Best: {high_score}"),
            self.height * 0.38 + 48.0,
        );
    }

    pub fn draw_game_over(&mut self, session: &GameSession, high_score: u32) {
        self.draw_world(session);
        self.dim_scene(0.6);
        self.title_text("GAME OVER", self.height * 0.4);
        self.body_text(
            &format!("Score: {}   Best: {}", session.score, high_score),
            self.height * 0.4 + 28.0,
        );
        self.body_text("Press Space to run again", self.height * 0.4 + 48.0);
    }

    fn draw_world(&mut self, session: &GameSession) {
        let ground_y = self.height - GROUND_HEIGHT;

        // Sky gradient down to the horizon.
        let gradient = self.ctx.create_linear_gradient(0.0, 0.0, 0.0, ground_y);
        gradient.add_color_stop(0.0, SKY_TOP).ok();
        gradient.add_color_stop(1.0, SKY_BOTTOM).ok();
        self.ctx.set_fill_style_canvas_gradient(&gradient);
        self.ctx.fill_rect(0.0, 0.0, self.width, ground_y);
        self.ctx.set_fill_style_str(HORIZON);
        self.ctx.fill_rect(0.0, ground_y - 16.0, self.width, 16.0);

        // Stars drift on every painted frame; purely cosmetic.
        self.ctx.set_fill_style_str(STARS);
        for star in &mut self.stars {
            star.drift(self.width);
        }
        for star in &self.stars {
            self.ctx.fill_rect(star.x, star.y, star.size, star.size);
        }

        self.draw_ridge(RIDGE_FAR, 96.0, 34.0, self.scroll_shift * 0.25);
        self.draw_ridge(RIDGE_NEAR, 64.0, 22.0, self.scroll_shift * 0.5);

        // Ground strip with a highlight lip and scrolling ticks.
        self.ctx.set_fill_style_str(GROUND);
        self.ctx.fill_rect(0.0, ground_y, self.width, GROUND_HEIGHT);
        self.ctx.set_fill_style_str(GROUND_HIGHLIGHT);
        self.ctx.fill_rect(0.0, ground_y, self.width, 2.0);
        self.ctx.set_fill_style_str(GROUND_SHADOW);
        let tick_spacing = 24.0;
        let mut tick_x = -self.scroll_shift.rem_euclid(tick_spacing);
        while tick_x < self.width {
            self.ctx.fill_rect(tick_x, ground_y + 10.0, 8.0, 2.0);
            tick_x += tick_spacing;
        }

        for obstacle in &session.obstacles {
            self.draw_obstacle(obstacle);
        }
        self.draw_duck(&session.player, ground_y);
    }

    /// One silhouette layer of triangular peaks. Peak heights are a stable
    /// function of the segment index so scrolling never pops.
    fn draw_ridge(&self, color: &str, spacing: f64, amplitude: f64, shift: f64) {
        let ground_y = self.height - GROUND_HEIGHT;
        self.ctx.set_fill_style_str(color);
        self.ctx.begin_path();
        self.ctx.move_to(-spacing * 2.0, ground_y);
        let first = (shift / spacing).floor() as i64 - 1;
        let segments = (self.width / spacing).ceil() as i64 + 3;
        for k in 0..segments {
            let i = first + k;
            let x = i as f64 * spacing - shift;
            let peak = amplitude * (0.55 + 0.45 * (i.rem_euclid(7) as f64 / 6.0));
            self.ctx.line_to(x + spacing * 0.5, ground_y - peak);
            self.ctx.line_to(x + spacing, ground_y);
        }
        self.ctx.line_to(self.width + spacing * 2.0, ground_y);
        self.ctx.close_path();
        self.ctx.fill();
    }

    fn draw_obstacle(&self, obstacle: &Obstacle) {
        self.ctx.set_fill_style_str(OBSTACLE);
        self.ctx
            .fill_rect(obstacle.x, obstacle.y, obstacle.width, obstacle.height);
        self.ctx.set_fill_style_str(OBSTACLE_HIGHLIGHT);
        self.ctx.fill_rect(obstacle.x, obstacle.y, obstacle.width, 2.0);
        self.ctx.fill_rect(obstacle.x, obstacle.y, 2.0, obstacle.height);
        self.ctx.set_fill_style_str(OBSTACLE_SHADOW);
        self.ctx.fill_rect(
            obstacle.x + obstacle.width - 3.0,
            obstacle.y + 2.0,
            3.0,
            obstacle.height - 2.0,
        );
    }

    fn draw_duck(&self, player: &Player, ground_y: f64) {
        // Contact shadow shrinks as the duck gains height.
        let lift = (ground_y - (player.y + player.height)).max(0.0);
        let squash = (1.0 - lift / 90.0).clamp(0.35, 1.0);
        self.ctx.set_fill_style_str(DUCK_SHADOW);
        self.ctx.begin_path();
        self.ctx
            .ellipse(
                player.x + player.width / 2.0,
                ground_y + 4.0,
                player.width * 0.45 * squash,
                2.5 * squash,
                0.0,
                0.0,
                std::f64::consts::TAU,
            )
            .ok();
        self.ctx.fill();

        let frame_idx = sprite::frame_index(player.animation_time, player.jumping);
        let frame = &sprite::DUCK_FRAMES[frame_idx];
        for (row_idx, row) in frame.iter().enumerate() {
            for (col_idx, &slot) in row.iter().enumerate() {
                if let Some(color) = sprite::DUCK_PALETTE[slot as usize] {
                    self.ctx.set_fill_style_str(color);
                    self.ctx.fill_rect(
                        player.x + col_idx as f64,
                        player.y + row_idx as f64,
                        1.0,
                        1.0,
                    );
                }
            }
        }
    }

    fn dim_scene(&self, alpha: f64) {
        self.ctx
            .set_fill_style_str(&format!("rgba(5,11,36,{alpha})"));
        self.ctx.fill_rect(0.0, 0.0, self.width, self.height);
    }

    fn title_text(&self, text: &str, y: f64) {
        self.ctx.set_font(TITLE_FONT);
        self.ctx.set_text_align("center");
        self.ctx.set_shadow_color(TITLE_GLOW);
        self.ctx.set_shadow_blur(18.0);
        self.ctx.set_fill_style_str(TEXT_LIGHT);
        self.ctx.fill_text(text, self.width / 2.0, y).ok();
        self.ctx.set_shadow_blur(0.0);
    }

    fn body_text(&self, text: &str, y: f64) {
        self.ctx.set_font(BODY_FONT);
        self.ctx.set_text_align("center");
        self.ctx.set_fill_style_str(TEXT_DIM);
        self.ctx.fill_text(text, self.width / 2.0, y).ok();
    }
}
