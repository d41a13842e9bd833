use hecs::World;

use crate::render::Surface;
use crate::{
    create_ball, create_player, render, step, Ball, Config, Controls, Events, InputState, Lineup,
    Player, Role, Score, SoundTrigger,
};

/// Everything one match needs, passed explicitly to step and render
pub struct Game {
    pub world: World,
    pub config: Config,
    pub score: Score,
    pub events: Events,
    pub tick: u64,
}

impl Game {
    /// Kick-off: standard lineup, dead ball on the centre spot
    pub fn new(config: Config) -> Self {
        Self::with_lineup(config, &Lineup::standard())
    }

    pub fn with_lineup(config: Config, lineup: &Lineup) -> Self {
        let mut world = World::new();

        for slot in &lineup.slots {
            create_player(&mut world, &config, slot);
        }
        create_ball(
            &mut world,
            config.center(),
            glam::Vec2::ZERO,
            config.ball_radius,
        );

        log::info!(
            "match ready: {} players on a {}x{} field",
            lineup.slots.len(),
            config.field_width,
            config.field_height
        );

        Self {
            world,
            config,
            score: Score::new(),
            events: Events::new(),
            tick: 0,
        }
    }

    /// Sample the input once and advance one tick
    pub fn step(&mut self, input: &mut InputState, sound: &mut dyn SoundTrigger) {
        let controls = input.sample();
        self.step_with(&controls, sound);
    }

    pub fn step_with(&mut self, controls: &Controls, sound: &mut dyn SoundTrigger) {
        step(
            &mut self.world,
            &self.config,
            controls,
            &mut self.score,
            &mut self.events,
            sound,
        );
        self.tick += 1;
    }

    pub fn render(&self, surface: &mut dyn Surface) {
        render(&self.world, &self.config, &self.score, surface);
    }

    pub fn ball(&self) -> Option<Ball> {
        let mut query = self.world.query::<&Ball>();
        let ball = query.iter().next().map(|(_e, ball)| *ball);
        ball
    }

    /// The human's player, if the lineup has one
    pub fn controlled(&self) -> Option<Player> {
        self.players_with(Role::Controlled).into_iter().next()
    }

    /// Players in a role, in spawn order
    pub fn players_with(&self, role: Role) -> Vec<Player> {
        let mut players: Vec<(u32, Player)> = self
            .world
            .query::<(&Player, &Role)>()
            .iter()
            .filter(|(_e, (_p, r))| **r == role)
            .map(|(e, (p, _r))| (e.id(), *p))
            .collect();
        players.sort_by_key(|(id, _p)| *id);
        players.into_iter().map(|(_id, p)| p).collect()
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(Config::default())
    }
}
