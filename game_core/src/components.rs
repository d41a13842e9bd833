use glam::Vec2;

/// Which side a player turns out for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Team {
    Blue,
    Red,
}

impl Team {
    /// Fill colour used by the renderer
    pub fn color(self) -> &'static str {
        match self {
            Team::Blue => "blue",
            Team::Red => "red",
        }
    }
}

/// How a player is moved each tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// Driven by the human's input, never by the chase rule
    Controlled,
    /// Runs straight at the ball
    Outfield,
    /// Fixed x, y snaps to the ball inside the goal mouth
    Goalie,
}

impl Role {
    /// Draw order: outfield first, goalies on top
    pub fn draw_layer(self) -> u8 {
        match self {
            Role::Outfield => 0,
            Role::Controlled => 1,
            Role::Goalie => 2,
        }
    }
}

/// Player component - a square on the pitch
#[derive(Debug, Clone, Copy)]
pub struct Player {
    pub pos: Vec2, // Top-left corner, also the reference point for distances
    pub size: f32,
    pub speed: f32, // pixels per tick
    pub team: Team,
}

impl Player {
    pub fn new(pos: Vec2, size: f32, speed: f32, team: Team) -> Self {
        Self {
            pos,
            size,
            speed,
            team,
        }
    }

    pub fn distance_to(&self, point: Vec2) -> f32 {
        self.pos.distance(point)
    }
}

/// Ball component
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2, // pixels per tick
    pub radius: f32,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2, radius: f32) -> Self {
        Self { pos, vel, radius }
    }

    pub fn speed(&self) -> f32 {
        self.vel.length()
    }

    /// Put the ball back on the centre spot after a goal.
    ///
    /// The serve goes back the way the ball came; a dead ball is served
    /// with `serve_dx`. `dy` is always `serve_dy`.
    pub fn serve(&mut self, center: Vec2, serve_dx: f32, serve_dy: f32) {
        self.pos = center;
        let dx = if self.vel.x == 0.0 {
            serve_dx
        } else {
            -self.vel.x
        };
        self.vel = Vec2::new(dx, serve_dy);
    }
}
