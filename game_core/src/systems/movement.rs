use glam::Vec2;
use hecs::World;

use crate::{Ball, Config, Player, Role};

/// Move every non-controlled player toward the ball, one rule per role
pub fn move_players(world: &mut World, config: &Config) {
    let target = match crate::ball_position(world) {
        Some(pos) => pos,
        None => return, // Nothing to chase
    };

    for (_entity, (player, role)) in world.query_mut::<(&mut Player, &Role)>() {
        match role {
            Role::Controlled => {}
            Role::Outfield => chase(player, target, config.chase_min_distance),
            Role::Goalie => guard_goal(player, target, config),
        }
    }
}

/// Run `speed` pixels straight at `target`; stand still once within `min_distance`
pub fn chase(player: &mut Player, target: Vec2, min_distance: f32) {
    let offset = target - player.pos;
    let dist = offset.length();
    if dist > min_distance {
        player.pos += offset / dist * player.speed;
    }
}

/// Snap to the target's height inside the goal mouth; x never changes
pub fn guard_goal(player: &mut Player, target: Vec2, config: &Config) {
    player.pos.y = config.clamp_goalie_y(target.y);
}

/// Integrate ball velocity, then bleed it off with friction
pub fn move_ball(world: &mut World, config: &Config) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.pos += ball.vel;
        ball.vel *= config.ball_friction;
    }
}
