use glam::Vec2;

use crate::params::Params;

/// Game configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub field_width: f32,
    pub field_height: f32,
    pub goal_top: f32,
    pub goal_bottom: f32,
    pub goal_line_depth: f32,
    pub goal_marker_width: f32,
    pub player_size: f32,
    pub player_speed: f32,
    pub chase_min_distance: f32,
    pub ball_radius: f32,
    pub ball_friction: f32,
    pub serve_dx: f32,
    pub serve_dy: f32,
    pub possession_radius: f32,
    pub pass_power: f32,
    pub shot_power: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            field_width: Params::FIELD_WIDTH,
            field_height: Params::FIELD_HEIGHT,
            goal_top: Params::GOAL_TOP,
            goal_bottom: Params::GOAL_BOTTOM,
            goal_line_depth: Params::GOAL_LINE_DEPTH,
            goal_marker_width: Params::GOAL_MARKER_WIDTH,
            player_size: Params::PLAYER_SIZE,
            player_speed: Params::PLAYER_SPEED,
            chase_min_distance: Params::CHASE_MIN_DISTANCE,
            ball_radius: Params::BALL_RADIUS,
            ball_friction: Params::BALL_FRICTION,
            serve_dx: Params::SERVE_DX,
            serve_dy: Params::SERVE_DY,
            possession_radius: Params::POSSESSION_RADIUS,
            pass_power: Params::PASS_POWER,
            shot_power: Params::SHOT_POWER,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Default rules on a field sized to the host surface
    pub fn with_field(width: f32, height: f32) -> Self {
        Self {
            field_width: width,
            field_height: height,
            ..Self::default()
        }
    }

    /// Centre spot, where the ball is served from
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.field_width / 2.0, self.field_height / 2.0)
    }

    /// Confine a goalie's y to the goal mouth
    pub fn clamp_goalie_y(&self, y: f32) -> f32 {
        y.clamp(self.goal_top, self.goal_bottom)
    }

    /// Strictly between the posts
    pub fn in_goal_mouth(&self, y: f32) -> bool {
        y > self.goal_top && y < self.goal_bottom
    }

    pub fn goal_height(&self) -> f32 {
        self.goal_bottom - self.goal_top
    }

    /// Shots aim at the middle of the right-hand touchline
    pub fn shot_target(&self) -> Vec2 {
        Vec2::new(self.field_width, self.field_height / 2.0)
    }
}
