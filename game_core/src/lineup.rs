use glam::Vec2;

use crate::components::{Role, Team};

/// One starting position
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Slot {
    pub team: Team,
    pub role: Role,
    pub pos: Vec2,
}

impl Slot {
    pub const fn new(team: Team, role: Role, x: f32, y: f32) -> Self {
        Self {
            team,
            role,
            pos: Vec2::new(x, y),
        }
    }
}

/// Starting positions for every player
#[derive(Debug, Clone)]
pub struct Lineup {
    pub slots: Vec<Slot>,
}

impl Lineup {
    /// Four a side: the human and two runners plus a keeper in blue,
    /// three runners plus a keeper in red. Laid out for an 800x500 field.
    pub fn standard() -> Self {
        use Role::*;
        use Team::*;

        let slots = vec![
            Slot::new(Blue, Controlled, 100.0, 200.0),
            Slot::new(Blue, Outfield, 120.0, 100.0),
            Slot::new(Blue, Outfield, 120.0, 300.0),
            Slot::new(Blue, Goalie, 20.0, 250.0),
            Slot::new(Red, Outfield, 600.0, 200.0),
            Slot::new(Red, Outfield, 620.0, 100.0),
            Slot::new(Red, Outfield, 620.0, 300.0),
            Slot::new(Red, Goalie, 770.0, 250.0),
        ];

        Self { slots }
    }
}
