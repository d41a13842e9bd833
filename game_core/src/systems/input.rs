use glam::Vec2;
use hecs::World;

use crate::components::*;
use crate::config::Config;
use crate::controls::Controls;
use crate::resources::Events;

/// Apply this tick's controls to the controlled player: teleport, walk,
/// then pass and shoot.
pub fn apply_controls(world: &mut World, config: &Config, controls: &Controls, events: &mut Events) {
    let mut user = None;
    for (_entity, (player, role)) in world.query_mut::<(&mut Player, &Role)>() {
        if *role != Role::Controlled {
            continue;
        }

        // Touch puts the player straight under the finger
        if let Some(pos) = controls.teleport {
            player.pos = pos;
        }
        player.pos += controls.direction() * player.speed;

        user = Some((player.pos, player.team));
        break;
    }

    let (user_pos, team) = match user {
        Some(data) => data,
        None => return, // Nobody under human control
    };

    if !controls.pass && !controls.shoot {
        return;
    }

    // Collect before borrowing the ball mutably
    let pass_target = if controls.pass {
        nearest_teammate(world, team, user_pos)
    } else {
        None
    };

    let Some((_entity, ball)) = world.query_mut::<&mut Ball>().into_iter().next() else {
        return;
    };

    if controls.pass && has_possession(user_pos, ball.pos, config.possession_radius) {
        if let Some(target) = pass_target {
            if kick(ball, user_pos, target, config.pass_power) {
                log::trace!("pass from {user_pos} to {target}");
                events.record_kick();
            }
        }
    }

    if controls.shoot && has_possession(user_pos, ball.pos, config.possession_radius) {
        let target = config.shot_target();
        if kick(ball, user_pos, target, config.shot_power) {
            log::trace!("shot from {user_pos}");
            events.record_kick();
        }
    }
}

/// Ball is close enough to play. Strict: exactly on the radius is not enough.
pub fn has_possession(player_pos: Vec2, ball_pos: Vec2, radius: f32) -> bool {
    player_pos.distance(ball_pos) < radius
}

/// Position of the outfield teammate nearest to `from`. Goalies and the
/// controlled player are never pass targets. On equal distances the
/// later-spawned teammate wins.
pub fn nearest_teammate(world: &World, team: Team, from: Vec2) -> Option<Vec2> {
    let mut mates: Vec<(u32, Player)> = world
        .query::<(&Player, &Role)>()
        .iter()
        .filter(|(_e, (p, role))| **role == Role::Outfield && p.team == team)
        .map(|(e, (p, _role))| (e.id(), *p))
        .collect();
    mates.sort_by_key(|(id, _p)| *id);

    mates
        .into_iter()
        .fold(None, |best: Option<(Vec2, f32)>, (_id, mate)| {
            let dist = mate.distance_to(from);
            match best {
                Some((_, best_dist)) if dist > best_dist => best,
                _ => Some((mate.pos, dist)),
            }
        })
        .map(|(pos, _dist)| pos)
}

/// Send the ball from `from` toward `target` at `power` pixels per tick.
/// Returns false (ball untouched) when the two points coincide.
pub fn kick(ball: &mut Ball, from: Vec2, target: Vec2, power: f32) -> bool {
    match (target - from).try_normalize() {
        Some(dir) => {
            ball.vel = dir * power;
            true
        }
        None => false,
    }
}
