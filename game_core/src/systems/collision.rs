use hecs::World;

use crate::{Ball, Config, Events};

/// Bounce the ball off the field edges
pub fn check_collisions(world: &mut World, config: &Config, events: &mut Events) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if reflect_walls(ball, config.field_width, config.field_height) {
            log::trace!("ball bounced at {}", ball.pos);
            events.ball_hit_wall = true;
        }
    }
}

/// Flip the velocity component for each axis the ball has left.
///
/// Position is not pulled back inside; the flipped velocity carries the ball
/// back over the next ticks.
pub fn reflect_walls(ball: &mut Ball, width: f32, height: f32) -> bool {
    let mut hit = false;
    if ball.pos.x < 0.0 || ball.pos.x > width {
        ball.vel.x = -ball.vel.x;
        hit = true;
    }
    if ball.pos.y < 0.0 || ball.pos.y > height {
        ball.vel.y = -ball.vel.y;
        hit = true;
    }
    hit
}
