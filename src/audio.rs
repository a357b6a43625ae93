//! Sound cues for game events.
//!
//! A terminal can only ring its bell, so [`TerminalBell`] ignores pitch and
//! length. The [`Tone`] table still describes each cue for sinks that can
//! synthesize audio.

use crate::game::GameEvent;
use std::io::{self, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioEvent {
    Eat,
    GameOver,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Waveform {
    Square,
    Triangle,
    Sawtooth,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tone {
    pub frequency_hz: f32,
    pub duration_ms: u32,
    pub waveform: Waveform,
    pub gain: f32,
}

impl AudioEvent {
    pub fn tone(&self) -> Tone {
        match self {
            Self::Eat => Tone {
                frequency_hz: 660.0,
                duration_ms: 60,
                waveform: Waveform::Triangle,
                gain: 0.05,
            },
            Self::GameOver => Tone {
                frequency_hz: 180.0,
                duration_ms: 230,
                waveform: Waveform::Sawtooth,
                gain: 0.05,
            },
        }
    }

    /// The cue for an engine event, if it has one.
    pub fn for_game_event(event: &GameEvent) -> Option<Self> {
        match event {
            GameEvent::AteFood { .. } => Some(Self::Eat),
            GameEvent::Collided { .. } => Some(Self::GameOver),
            _ => None,
        }
    }
}

/// Fire-and-forget audio output.
pub trait AudioSink {
    fn play(&mut self, event: AudioEvent);
}

/// Writes BEL to the wrapped writer (stdout in the binary).
pub struct TerminalBell<W: Write> {
    out: W,
}

impl<W: Write> TerminalBell<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl TerminalBell<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> AudioSink for TerminalBell<W> {
    fn play(&mut self, _event: AudioEvent) {
        // Nothing useful to do if the terminal went away
        let _ = self.out.write_all(b"\x07").and_then(|_| self.out.flush());
    }
}

/// Discards every cue.
#[derive(Debug, Default)]
pub struct SilentSink;

impl AudioSink for SilentSink {
    fn play(&mut self, _event: AudioEvent) {}
}

/// Play the cues for a batch of engine events, honouring the global switch.
pub fn play_events(sink: &mut dyn AudioSink, enabled: bool, events: &[GameEvent]) {
    if !enabled {
        return;
    }
    for cue in events.iter().filter_map(AudioEvent::for_game_event) {
        sink.play(cue);
    }
}
