//! Drawing the match onto a 2D surface
//!
//! The host supplies the surface (a browser canvas in the client, a recorder
//! in tests). Rendering only reads the world.

use glam::Vec2;
use hecs::World;

use crate::{Ball, Config, Player, Role, Score};

pub const GOAL_COLOR: &str = "yellow";
pub const BALL_COLOR: &str = "white";
pub const SCORE_COLOR: &str = "white";
pub const SCORE_FONT: &str = "20px Arial";

/// Pixel-drawing primitives over a fixed-size 2D coordinate space
pub trait Surface {
    fn clear(&mut self, x: f32, y: f32, width: f32, height: f32);
    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: &str);
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: &str);
    fn fill_text(&mut self, text: &str, x: f32, y: f32, font: &str, color: &str);
}

/// Draw one frame: field, goal mouths, players, ball, score
pub fn render(world: &World, config: &Config, score: &Score, surface: &mut dyn Surface) {
    surface.clear(0.0, 0.0, config.field_width, config.field_height);
    draw_goals(config, surface);
    draw_players(world, surface);
    draw_ball(world, surface);
    draw_score(config, score, surface);
}

fn draw_goals(config: &Config, surface: &mut dyn Surface) {
    let width = config.goal_marker_width;
    let height = config.goal_height();
    surface.fill_rect(0.0, config.goal_top, width, height, GOAL_COLOR);
    surface.fill_rect(
        config.field_width - width,
        config.goal_top,
        width,
        height,
        GOAL_COLOR,
    );
}

fn draw_players(world: &World, surface: &mut dyn Surface) {
    // Outfield, then the user, then goalies (deterministic: sort by layer, entity ID)
    let mut players: Vec<(u8, u32, Player)> = world
        .query::<(&Player, &Role)>()
        .iter()
        .map(|(e, (p, role))| (role.draw_layer(), e.id(), *p))
        .collect();
    players.sort_by_key(|(layer, id, _p)| (*layer, *id));

    for (_layer, _id, p) in players {
        surface.fill_rect(p.pos.x, p.pos.y, p.size, p.size, p.team.color());
    }
}

fn draw_ball(world: &World, surface: &mut dyn Surface) {
    for (_entity, ball) in world.query::<&Ball>().iter() {
        surface.fill_circle(ball.pos, ball.radius, BALL_COLOR);
    }
}

fn draw_score(config: &Config, score: &Score, surface: &mut dyn Surface) {
    let blue = format!("Blue: {}", score.blue);
    let red = format!("Red: {}", score.red);
    surface.fill_text(&blue, 20.0, 30.0, SCORE_FONT, SCORE_COLOR);
    surface.fill_text(&red, config.field_width - 100.0, 30.0, SCORE_FONT, SCORE_COLOR);
}

/// A recorded surface call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Clear {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
    },
    Rect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        color: String,
    },
    Circle {
        center: Vec2,
        radius: f32,
        color: String,
    },
    Text {
        text: String,
        x: f32,
        y: f32,
        font: String,
        color: String,
    },
}

/// Surface that records every call instead of drawing
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    pub commands: Vec<DrawCmd>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Surface for RecordingSurface {
    fn clear(&mut self, x: f32, y: f32, width: f32, height: f32) {
        self.commands.push(DrawCmd::Clear {
            x,
            y,
            width,
            height,
        });
    }

    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: &str) {
        self.commands.push(DrawCmd::Rect {
            x,
            y,
            width,
            height,
            color: color.to_string(),
        });
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: &str) {
        self.commands.push(DrawCmd::Circle {
            center,
            radius,
            color: color.to_string(),
        });
    }

    fn fill_text(&mut self, text: &str, x: f32, y: f32, font: &str, color: &str) {
        self.commands.push(DrawCmd::Text {
            text: text.to_string(),
            x,
            y,
            font: font.to_string(),
            color: color.to_string(),
        });
    }
}
