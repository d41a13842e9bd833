use crate::audio::Cue;
use crate::components::Team;

/// Goals per side
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub blue: u32,
    pub red: u32,
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment_blue(&mut self) {
        self.blue += 1;
    }

    pub fn increment_red(&mut self) {
        self.red += 1;
    }

    /// Credit one goal to `team`
    pub fn credit(&mut self, team: Team) {
        match team {
            Team::Blue => self.increment_blue(),
            Team::Red => self.increment_red(),
        }
    }
}

/// Events that occurred during this tick
#[derive(Debug, Clone, Default)]
pub struct Events {
    pub kicks: u8,
    pub ball_hit_wall: bool,
    pub blue_scored: bool,
    pub red_scored: bool,
    /// Sound cues in the order they happened, flushed by `step`
    pub cues: Vec<Cue>,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.kicks = 0;
        self.ball_hit_wall = false;
        self.blue_scored = false;
        self.red_scored = false;
        self.cues.clear();
    }

    pub fn record_kick(&mut self) {
        self.kicks += 1;
        self.cues.push(Cue::Kick);
    }

    pub fn record_goal(&mut self, team: Team) {
        match team {
            Team::Blue => self.blue_scored = true,
            Team::Red => self.red_scored = true,
        }
        self.cues.push(Cue::Goal);
    }

    pub fn goal_scored(&self) -> bool {
        self.blue_scored || self.red_scored
    }
}
