//! Sound cues played through HTML audio elements

use game_core::{Cue, SoundTrigger};
use wasm_bindgen::JsValue;
use web_sys::HtmlAudioElement;

/// One preloaded clip per cue
pub struct HtmlSound {
    kick: HtmlAudioElement,
    goal: HtmlAudioElement,
}

impl HtmlSound {
    /// Clips are looked up as `<base>/kick.wav` and `<base>/goal.wav`
    pub fn new(base: &str) -> Result<Self, JsValue> {
        Ok(Self {
            kick: HtmlAudioElement::new_with_src(&format!("{base}/kick.wav"))?,
            goal: HtmlAudioElement::new_with_src(&format!("{base}/goal.wav"))?,
        })
    }

    fn clip(&self, cue: Cue) -> &HtmlAudioElement {
        match cue {
            Cue::Kick => &self.kick,
            Cue::Goal => &self.goal,
        }
    }
}

impl SoundTrigger for HtmlSound {
    fn trigger(&mut self, cue: Cue) {
        let clip = self.clip(cue);
        // Restart if still playing; a rejected play() (autoplay policy) is dropped
        clip.set_current_time(0.0);
        if let Err(e) = clip.play() {
            log::debug!("{} cue not played: {:?}", cue.name(), e);
        }
    }
}
