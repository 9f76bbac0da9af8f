use std::time::Duration;

use crate::session::editor::EditorSession;

/// Tick-driven animation preview.
///
/// The host calls [`Playback::tick`] on every display refresh with a monotonic timestamp. A tick
/// advances the session by exactly one frame once more than the active state's delay has passed
/// since the last advance.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Playback {
    playing: bool,
    last_advance: Option<Duration>,
}

impl Playback {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn start(&mut self, now: Duration) {
        if !self.playing {
            self.playing = true;
            self.last_advance = Some(now);
        }
    }

    /// Idempotent.
    pub fn stop(&mut self) {
        self.playing = false;
        self.last_advance = None;
    }

    /// Start or stop; returns the new playing state.
    pub fn toggle(&mut self, now: Duration) -> bool {
        if self.playing {
            self.stop();
        } else {
            self.start(now);
        }
        self.playing
    }

    /// Returns whether the session moved to another frame.
    pub fn tick(&mut self, session: &mut EditorSession, now: Duration) -> bool {
        if !self.playing {
            return false;
        }
        let Some(delay) = session.frame_delay() else {
            return false;
        };
        let last = *self.last_advance.get_or_insert(now);
        if now.saturating_sub(last) <= delay {
            return false;
        }
        session.navigate(1);
        self.last_advance = Some(now);
        tracing::trace!(frame = session.frame_index(), "playback advanced");
        true
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/playback.rs"]
mod tests;
