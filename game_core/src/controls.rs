//! Held-control tracking for the human player

use std::collections::HashSet;

use glam::Vec2;

/// Logical controls the host maps its keys onto
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Control {
    Up,
    Down,
    Left,
    Right,
    Pass,
    Shoot,
}

/// Input state, written by host events between ticks
#[derive(Debug, Clone, Default)]
pub struct InputState {
    held: HashSet<Control>,
    pointer: Option<Vec2>, // Latest touch/pointer-down not yet applied
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, control: Control) {
        self.held.insert(control);
    }

    pub fn release(&mut self, control: Control) {
        self.held.remove(&control);
    }

    pub fn is_held(&self, control: Control) -> bool {
        self.held.contains(&control)
    }

    /// Record a pointer/touch-down in surface coordinates. Only the latest
    /// one before the next tick counts.
    pub fn pointer_down(&mut self, pos: Vec2) {
        self.pointer = Some(pos);
    }

    /// Snapshot for one tick. Consumes the pending pointer-down.
    pub fn sample(&mut self) -> Controls {
        Controls {
            up: self.is_held(Control::Up),
            down: self.is_held(Control::Down),
            left: self.is_held(Control::Left),
            right: self.is_held(Control::Right),
            pass: self.is_held(Control::Pass),
            shoot: self.is_held(Control::Shoot),
            teleport: self.pointer.take(),
        }
    }
}

/// What the human asked for this tick
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Controls {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    pub pass: bool,
    pub shoot: bool,
    pub teleport: Option<Vec2>,
}

impl Controls {
    /// Per-axis step direction. Components are -1, 0 or 1 and are not
    /// normalised, so diagonals cover more ground.
    pub fn direction(&self) -> Vec2 {
        let axis = |neg: bool, pos: bool| (pos as i8 - neg as i8) as f32;
        Vec2::new(axis(self.left, self.right), axis(self.up, self.down))
    }
}
