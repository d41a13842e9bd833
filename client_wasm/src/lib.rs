//! Browser client for the football game
//!
//! Canvas 2D rendering, HTML audio cues, keyboard and touch input. The host
//! page owns the frame loop: it calls `Client::frame` from
//! `requestAnimationFrame` and forwards DOM events to the other methods.

pub mod audio;
pub mod input;
pub mod surface;

use audio::HtmlSound;
use game_core::{Config, Game, InputState};
use glam::Vec2;
use surface::CanvasSurface;
use wasm_bindgen::prelude::*;
use web_sys::HtmlCanvasElement;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Info) {
        web_sys::console::warn_1(&JsValue::from_str(&format!("Logger already set: {e}")));
    }
}

/// Main client state
#[wasm_bindgen]
pub struct Client {
    game: Game,
    input: InputState,
    surface: CanvasSurface,
    sound: HtmlSound,
}

#[wasm_bindgen]
impl Client {
    /// Set up a match sized to `canvas`. Sound clips are loaded from `asset_base`.
    #[wasm_bindgen(constructor)]
    pub fn new(canvas: HtmlCanvasElement, asset_base: &str) -> Result<Client, JsValue> {
        let config = Config::with_field(canvas.width() as f32, canvas.height() as f32);
        let surface = CanvasSurface::new(&canvas)?;
        let sound = HtmlSound::new(asset_base)?;

        log::info!("client ready on {}x{} canvas", canvas.width(), canvas.height());

        Ok(Self {
            game: Game::new(config),
            input: InputState::new(),
            surface,
            sound,
        })
    }

    /// One animation frame: a simulation tick, then a redraw
    pub fn frame(&mut self) {
        self.game.step(&mut self.input, &mut self.sound);
        self.game.render(&mut self.surface);
    }

    pub fn key_down(&mut self, key: &str) {
        input::handle_key_down(&mut self.input, key);
    }

    pub fn key_up(&mut self, key: &str) {
        input::handle_key_up(&mut self.input, key);
    }

    /// Touch/pointer-down in canvas coordinates (origin top-left)
    pub fn pointer_down(&mut self, x: f32, y: f32) {
        self.input.pointer_down(Vec2::new(x, y));
    }

    #[wasm_bindgen(getter)]
    pub fn score_blue(&self) -> u32 {
        self.game.score.blue
    }

    #[wasm_bindgen(getter)]
    pub fn score_red(&self) -> u32 {
        self.game.score.red
    }

    #[wasm_bindgen(getter)]
    pub fn tick(&self) -> u64 {
        self.game.tick
    }
}
