use game_core::*;
use glam::Vec2;
use hecs::World;

fn place_ball(game: &mut Game, pos: Vec2, vel: Vec2) {
    for (_entity, ball) in game.world.query_mut::<&mut Ball>() {
        ball.pos = pos;
        ball.vel = vel;
    }
}

#[test]
fn test_goalies_hold_their_line() {
    let mut game = Game::default();
    let mut input = InputState::new();
    let start: Vec<f32> = game
        .players_with(Role::Goalie)
        .iter()
        .map(|p| p.pos.x)
        .collect();

    // Drag the ball to the top edge and let the keepers follow
    place_ball(&mut game, Vec2::new(400.0, 10.0), Vec2::new(0.7, -0.1));
    for _ in 0..200 {
        game.step(&mut input, &mut Silent);
        for (goalie, x) in game.players_with(Role::Goalie).iter().zip(&start) {
            assert_eq!(goalie.pos.x, *x);
            assert!((150.0..=350.0).contains(&goalie.pos.y));
        }
    }
}

#[test]
fn test_wall_bounce_in_full_tick() {
    let mut game = Game::new(Config::new());
    let mut input = InputState::new();
    place_ball(&mut game, Vec2::new(400.0, 0.5), Vec2::new(0.0, -2.0));

    game.step(&mut input, &mut Silent);

    let ball = game.ball().unwrap();
    assert!(ball.pos.y < 0.0, "Position is not clamped back inside");
    assert!(ball.vel.y > 0.0, "Reflected velocity points back in");
    assert!(game.events.ball_hit_wall);
}

#[test]
fn test_red_goal_scored_once_and_ball_served() {
    let mut game = Game::new(Config::with_field(800.0, 500.0));
    let mut input = InputState::new();
    let mut sound = RecordingSound::new();
    place_ball(&mut game, Vec2::new(4.0, 200.0), Vec2::ZERO);

    game.step(&mut input, &mut sound);

    assert_eq!(game.score.red, 1);
    assert_eq!(game.score.blue, 0);
    assert_eq!(sound.count(Cue::Goal), 1);

    let ball = game.ball().unwrap();
    assert_eq!(ball.pos, Vec2::new(400.0, 250.0));
    assert_eq!(ball.vel, Vec2::new(1.5, 1.2), "Dead ball serves with the default");

    // Next tick is play, not another goal
    game.step(&mut input, &mut sound);
    assert_eq!(game.score.red, 1);
    assert_eq!(sound.count(Cue::Goal), 1);
}

#[test]
fn test_serve_alternates_direction() {
    let mut game = Game::default();
    let mut input = InputState::new();
    place_ball(&mut game, Vec2::new(790.0, 250.0), Vec2::new(8.0, 0.0));

    game.step(&mut input, &mut Silent);

    assert_eq!(game.score.blue, 1);
    let ball = game.ball().unwrap();
    assert!(ball.vel.x < 0.0, "Serve goes back toward the team that conceded");
    assert_eq!(ball.vel.y, 1.2);
}

#[test]
fn test_pass_reaches_nearest_teammate_direction() {
    let mut world = World::new();
    let config = Config::new();
    let mut score = Score::new();
    let mut events = Events::new();
    let mut sound = RecordingSound::new();

    let user = Slot::new(Team::Blue, Role::Controlled, 300.0, 300.0);
    let near = Slot::new(Team::Blue, Role::Outfield, 310.0, 300.0); // distance 10
    let far = Slot::new(Team::Blue, Role::Outfield, 300.0, 350.0); // distance 50
    for slot in [user, far, near] {
        create_player(&mut world, &config, &slot);
    }
    create_ball(&mut world, Vec2::new(300.0, 285.0), Vec2::ZERO, config.ball_radius);

    let controls = Controls {
        pass: true,
        ..Controls::default()
    };
    step(&mut world, &config, &controls, &mut score, &mut events, &mut sound);

    // Kick toward (310, 300) at 2.5, then one tick of friction
    let mut query = world.query::<&Ball>();
    let ball = query.iter().next().map(|(_e, b)| *b).unwrap();
    assert!(ball.vel.x > 0.0);
    assert!(ball.vel.y.abs() < 1e-5);
    assert!((ball.vel.length() - 2.5 * 0.99).abs() < 1e-4);
    assert_eq!(sound.played, vec![Cue::Kick]);
}

#[test]
fn test_teammates_converge_on_ball() {
    let mut game = Game::default();
    let mut input = InputState::new();
    let ball = game.ball().unwrap().pos;
    let before: Vec<f32> = game
        .players_with(Role::Outfield)
        .iter()
        .map(|p| p.pos.distance(ball))
        .collect();

    game.step(&mut input, &mut Silent);

    let after: Vec<f32> = game
        .players_with(Role::Outfield)
        .iter()
        .map(|p| p.pos.distance(ball))
        .collect();
    for (b, a) in before.iter().zip(&after) {
        assert!((b - a - 2.0).abs() < 1e-3, "Each runner closes by its speed");
    }
}

#[test]
fn test_render_does_not_mutate() {
    let mut game = Game::default();
    let mut input = InputState::new();
    input.press(Control::Down);
    for _ in 0..10 {
        game.step(&mut input, &mut Silent);
    }

    let mut first = RecordingSurface::new();
    let mut second = RecordingSurface::new();
    game.render(&mut first);
    let ball = game.ball().unwrap();
    game.render(&mut second);

    assert_eq!(first.commands, second.commands);
    assert_eq!(game.ball().unwrap().pos, ball.pos);
    assert_eq!(game.tick, 10);
}
