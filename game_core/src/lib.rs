pub mod audio;
pub mod components;
pub mod config;
pub mod controls;
pub mod lineup;
pub mod params;
pub mod render;
pub mod resources;
pub mod simulation;
pub mod systems;

pub use audio::*;
pub use components::*;
pub use config::*;
pub use controls::*;
pub use lineup::*;
pub use params::*;
pub use render::{render, RecordingSurface, Surface};
pub use resources::*;
pub use simulation::*;

use glam::Vec2;
use hecs::World;
use systems::*;

/// Advance the match by one tick
pub fn step(
    world: &mut World,
    config: &Config,
    controls: &Controls,
    score: &mut Score,
    events: &mut Events,
    sound: &mut dyn SoundTrigger,
) {
    // Clear events at start of tick
    events.clear();

    // 1. Human input (teleport, walk, pass, shoot)
    apply_controls(world, config, controls, events);

    // 2. Everyone else runs at the ball
    move_players(world, config);

    // 3. Move ball and apply friction
    move_ball(world, config);

    // 4. Bounce off the field edges
    check_collisions(world, config, events);

    // 5. Goals
    check_scoring(world, config, score, events);

    for cue in &events.cues {
        sound.trigger(*cue);
    }
}

/// Helper to create a player entity
pub fn create_player(world: &mut World, config: &Config, slot: &Slot) -> hecs::Entity {
    let player = Player::new(slot.pos, config.player_size, config.player_speed, slot.team);
    world.spawn((player, slot.role))
}

/// Helper to create the ball entity
pub fn create_ball(world: &mut World, pos: Vec2, vel: Vec2, radius: f32) -> hecs::Entity {
    world.spawn((Ball::new(pos, vel, radius),))
}

/// Current ball position, if there is a ball
pub fn ball_position(world: &World) -> Option<Vec2> {
    let mut query = world.query::<&Ball>();
    let pos = query.iter().next().map(|(_e, ball)| ball.pos);
    pos
}
