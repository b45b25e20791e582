//! Audio cue collaborator
//!
//! The simulation emits short fire-and-forget cues on gameplay events and
//! never waits on or inspects the result - a sink that fails to play must
//! swallow the error itself. Gameplay is identical under [`NullAudio`].

/// Gameplay audio cues
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioCue {
    /// A ring was collected
    RingCollect,
    /// All rings collected, session won
    Victory,
    /// A laser was fired
    Shoot,
    /// An obstacle was destroyed
    Explosion,
    /// A weapon pickup was equipped
    Pickup,
    /// Session lost
    GameOver,
}

/// Cue playback sink implemented by the host
pub trait AudioSink {
    /// Play a cue. Must not block; playback failures are the sink's to
    /// suppress (a dropped cue never alters gameplay).
    fn play(&mut self, cue: AudioCue);
}

/// Sink that discards every cue
#[derive(Debug, Clone, Copy, Default)]
pub struct NullAudio;

impl AudioSink for NullAudio {
    fn play(&mut self, _cue: AudioCue) {}
}

/// Sink that records cues in order; used by tests and debug overlays
#[derive(Debug, Clone, Default)]
pub struct CueRecorder {
    pub cues: Vec<AudioCue>,
}

impl CueRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self, cue: AudioCue) -> usize {
        self.cues.iter().filter(|&&c| c == cue).count()
    }
}

impl AudioSink for CueRecorder {
    fn play(&mut self, cue: AudioCue) {
        log::trace!("audio cue: {cue:?}");
        self.cues.push(cue);
    }
}
