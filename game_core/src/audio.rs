//! Sound cues and the trigger the simulation hands them to

/// Named sound effects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cue {
    Kick,
    Goal,
}

impl Cue {
    pub fn name(self) -> &'static str {
        match self {
            Cue::Kick => "kick",
            Cue::Goal => "goal",
        }
    }
}

/// Fire-and-forget sound output.
///
/// Implementations swallow their own playback failures; the simulation
/// never looks at the outcome.
pub trait SoundTrigger {
    fn trigger(&mut self, cue: Cue);
}

/// Discards every cue (headless runs)
#[derive(Debug, Clone, Copy, Default)]
pub struct Silent;

impl SoundTrigger for Silent {
    fn trigger(&mut self, _cue: Cue) {}
}

/// Remembers every cue it was given
#[derive(Debug, Clone, Default)]
pub struct RecordingSound {
    pub played: Vec<Cue>,
}

impl RecordingSound {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self, cue: Cue) -> usize {
        self.played.iter().filter(|c| **c == cue).count()
    }
}

impl SoundTrigger for RecordingSound {
    fn trigger(&mut self, cue: Cue) {
        self.played.push(cue);
    }
}
