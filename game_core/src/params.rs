/// Game tuning parameters for the football match
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Field (the host canvas usually overrides these)
    pub const FIELD_WIDTH: f32 = 800.0;
    pub const FIELD_HEIGHT: f32 = 500.0;

    // Goal mouth
    pub const GOAL_TOP: f32 = 150.0;
    pub const GOAL_BOTTOM: f32 = 350.0;
    pub const GOAL_LINE_DEPTH: f32 = 5.0; // Ball this close to an edge can score
    pub const GOAL_MARKER_WIDTH: f32 = 5.0;

    // Players
    pub const PLAYER_SIZE: f32 = 25.0;
    pub const PLAYER_SPEED: f32 = 2.0; // pixels per tick
    pub const CHASE_MIN_DISTANCE: f32 = 1.0; // No chasing inside this radius

    // Ball
    pub const BALL_RADIUS: f32 = 10.0;
    pub const BALL_FRICTION: f32 = 0.99;
    pub const SERVE_DX: f32 = 1.5; // Used when the ball was dead on a goal
    pub const SERVE_DY: f32 = 1.2;

    // Actions
    pub const POSSESSION_RADIUS: f32 = 30.0;
    pub const PASS_POWER: f32 = 2.5;
    pub const SHOT_POWER: f32 = 4.5;
}
