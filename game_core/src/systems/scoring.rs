use glam::Vec2;
use hecs::World;

use crate::{Ball, Config, Events, Score, Team};

/// Check if the ball crossed a goal line between the posts
pub fn check_scoring(world: &mut World, config: &Config, score: &mut Score, events: &mut Events) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if let Some(team) = goal_scored_by(ball.pos, config) {
            score.credit(team);
            events.record_goal(team);
            log::debug!(
                "goal for {:?} at {}, score blue {} red {}",
                team,
                ball.pos,
                score.blue,
                score.red
            );

            // Serve from the centre spot
            ball.serve(config.center(), config.serve_dx, config.serve_dy);
        }
    }
}

/// The side credited with a goal for a ball at `pos`, if any.
/// Left line counts for red, right line for blue.
pub fn goal_scored_by(pos: Vec2, config: &Config) -> Option<Team> {
    if !config.in_goal_mouth(pos.y) {
        return None;
    }
    if pos.x <= config.goal_line_depth {
        Some(Team::Red)
    } else if pos.x >= config.field_width - config.goal_line_depth {
        Some(Team::Blue)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_ball, Cue};

    fn setup_world() -> (World, Config, Score, Events) {
        (World::new(), Config::new(), Score::new(), Events::new())
    }

    fn only_ball(world: &World) -> Ball {
        let mut query = world.query::<&Ball>();
        let ball = query.iter().next().map(|(_e, b)| *b);
        ball.unwrap()
    }

    #[test]
    fn test_red_scores_on_left_line() {
        let (mut world, config, mut score, mut events) = setup_world();
        create_ball(&mut world, Vec2::new(4.0, 200.0), Vec2::new(-1.0, 0.5), config.ball_radius);

        check_scoring(&mut world, &config, &mut score, &mut events);

        assert_eq!(score.red, 1, "Red should score");
        assert_eq!(score.blue, 0, "Blue should not score");
        assert!(events.red_scored);
        assert_eq!(events.cues, vec![Cue::Goal]);
    }

    #[test]
    fn test_blue_scores_on_right_line() {
        let (mut world, config, mut score, mut events) = setup_world();
        create_ball(&mut world, Vec2::new(796.0, 300.0), Vec2::new(3.0, 0.0), config.ball_radius);

        check_scoring(&mut world, &config, &mut score, &mut events);

        assert_eq!(score.blue, 1);
        assert_eq!(score.red, 0);
        assert!(events.blue_scored);
    }

    #[test]
    fn test_ball_resets_after_scoring() {
        let (mut world, config, mut score, mut events) = setup_world();
        create_ball(&mut world, Vec2::new(4.0, 200.0), Vec2::new(-1.0, 0.5), config.ball_radius);

        check_scoring(&mut world, &config, &mut score, &mut events);

        let ball = only_ball(&world);
        assert_eq!(ball.pos, Vec2::new(400.0, 250.0));
        assert_eq!(ball.vel, Vec2::new(1.0, 1.2));
    }

    #[test]
    fn test_posts_do_not_count() {
        let (mut world, config, mut score, mut events) = setup_world();
        create_ball(&mut world, Vec2::new(2.0, 150.0), Vec2::new(-1.0, 0.0), config.ball_radius);

        check_scoring(&mut world, &config, &mut score, &mut events);

        assert_eq!(score, Score::new());
        assert!(!events.goal_scored());
    }

    #[test]
    fn test_no_scoring_when_ball_in_play() {
        let (mut world, config, mut score, mut events) = setup_world();
        create_ball(&mut world, Vec2::new(400.0, 250.0), Vec2::new(2.0, 1.0), config.ball_radius);

        check_scoring(&mut world, &config, &mut score, &mut events);

        assert_eq!(score, Score::new());
        assert!(events.cues.is_empty());
    }

    #[test]
    fn test_goal_scored_by_edges() {
        let config = Config::new();
        assert_eq!(goal_scored_by(Vec2::new(5.0, 200.0), &config), Some(Team::Red));
        assert_eq!(goal_scored_by(Vec2::new(5.1, 200.0), &config), None);
        assert_eq!(goal_scored_by(Vec2::new(-20.0, 349.0), &config), Some(Team::Red));
        assert_eq!(goal_scored_by(Vec2::new(795.0, 151.0), &config), Some(Team::Blue));
        assert_eq!(goal_scored_by(Vec2::new(810.0, 400.0), &config), None);
    }

    #[test]
    fn test_goal_line_follows_field_width() {
        let config = Config::with_field(1000.0, 500.0);
        assert_eq!(goal_scored_by(Vec2::new(796.0, 250.0), &config), None);
        assert_eq!(goal_scored_by(Vec2::new(996.0, 250.0), &config), Some(Team::Blue));
    }

    #[test]
    fn test_multiple_scores_accumulate() {
        let (mut world, config, mut score, mut events) = setup_world();
        create_ball(&mut world, Vec2::new(799.0, 250.0), Vec2::new(2.0, 0.0), config.ball_radius);
        check_scoring(&mut world, &config, &mut score, &mut events);
        events.clear();

        for (_entity, ball) in world.query_mut::<&mut Ball>() {
            ball.pos = Vec2::new(801.0, 200.0);
        }
        check_scoring(&mut world, &config, &mut score, &mut events);

        assert_eq!(score.blue, 2, "Scores should accumulate");
        assert_eq!(score.red, 0);
    }
}
