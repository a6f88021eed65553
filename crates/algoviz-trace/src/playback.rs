//! Playback state machine for a precomputed trace.
//!
//! [`Playback`] owns a cursor into a trace of `len` steps and the lifecycle
//! `Idle -> Playing -> (Paused | Complete)`. It has no timer of its own: the
//! consumer schedules a callback `speed` after each [`TickToken`] it receives
//! and hands the token back to [`Playback::tick`].
//!
//! Every transition that must stop playback (pause, reset, seek, manual
//! stepping, completion) bumps an internal generation counter. Tokens carry
//! the generation they were issued for, so a callback scheduled before a
//! reset comes back as [`TickOutcome::Stale`] and never moves the cursor.
//!
//! # Usage
//!
//! ```ignore
//! let mut playback = Playback::new(steps.len(), PlaybackConfig::default());
//! let mut pending = playback.play();
//! while let Some(token) = pending.take() {
//!     std::thread::sleep(playback.speed());
//!     match playback.tick(token) {
//!         TickOutcome::Advanced { cursor, next } => { render(&steps[cursor]); pending = Some(next); }
//!         TickOutcome::Completed { cursor } => { render(&steps[cursor]); on_complete(); }
//!         TickOutcome::Stale => {}
//!     }
//! }
//! ```

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Lifecycle state of a [`Playback`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlaybackState {
    /// Not started, or reset. Cursor is at 0.
    Idle,
    /// A tick is pending.
    Playing,
    /// Stopped before the last step; `play` resumes.
    Paused,
    /// The cursor is on the last step.
    Complete,
}

/// Configuration for a playback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaybackConfig {
    /// Delay between two ticks. Default: 500 ms.
    pub speed: Duration,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        PlaybackConfig {
            speed: Duration::from_millis(500),
        }
    }
}

/// Handle for one scheduled advance. Consumed by [`Playback::tick`].
#[derive(Debug, PartialEq, Eq)]
#[must_use = "a tick token must be scheduled and handed back to `tick`"]
pub struct TickToken {
    generation: u64,
}

/// Result of handing a token back to [`Playback::tick`].
#[derive(Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// The cursor moved; schedule `next` after `speed`.
    Advanced { cursor: usize, next: TickToken },
    /// The cursor reached the last step. Reported once per run.
    Completed { cursor: usize },
    /// The token was cancelled; nothing changed.
    Stale,
}

/// A cursor over a trace of `len` steps with play/pause/scrub controls.
#[derive(Debug, Clone)]
pub struct Playback {
    len: usize,
    cursor: usize,
    state: PlaybackState,
    speed: Duration,
    generation: u64,
}

impl Playback {
    /// Creates an idle playback positioned on the first step.
    pub fn new(len: usize, config: PlaybackConfig) -> Self {
        Playback {
            len,
            cursor: 0,
            state: PlaybackState::Idle,
            speed: config.speed,
            generation: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn speed(&self) -> Duration {
        self.speed
    }

    pub fn is_complete(&self) -> bool {
        self.state == PlaybackState::Complete
    }

    /// Changes the delay between ticks. A pending token stays valid.
    pub fn set_speed(&mut self, speed: Duration) {
        self.speed = speed;
    }

    /// Starts or resumes playback and returns the token for the first tick.
    ///
    /// Returns `None` if playback is already running, or if the cursor is
    /// already on the last step, in which case the state becomes `Complete`.
    ///
    /// A trace of zero or one steps completes here and never yields a
    /// [`TickOutcome::Completed`]. Callers that react to completion should
    /// check [`Playback::is_complete`] when this returns `None`.
    pub fn play(&mut self) -> Option<TickToken> {
        match self.state {
            PlaybackState::Playing | PlaybackState::Complete => None,
            PlaybackState::Idle | PlaybackState::Paused => {
                if self.cursor >= self.last_index() {
                    self.finish();
                    return None;
                }
                self.state = PlaybackState::Playing;
                Some(self.issue())
            }
        }
    }

    /// Advances the cursor if `token` is still current.
    pub fn tick(&mut self, token: TickToken) -> TickOutcome {
        if token.generation != self.generation || self.state != PlaybackState::Playing {
            return TickOutcome::Stale;
        }

        self.cursor += 1;
        if self.cursor >= self.last_index() {
            self.finish();
            TickOutcome::Completed {
                cursor: self.cursor,
            }
        } else {
            TickOutcome::Advanced {
                cursor: self.cursor,
                next: self.issue(),
            }
        }
    }

    /// Stops playback, keeping the cursor. No-op unless playing.
    pub fn pause(&mut self) {
        if self.state == PlaybackState::Playing {
            self.cancel();
            self.state = PlaybackState::Paused;
        }
    }

    /// Cancels any pending tick and rewinds to the first step.
    pub fn reset(&mut self) {
        self.cancel();
        self.cursor = 0;
        self.state = PlaybackState::Idle;
    }

    /// Moves one step forward, pausing playback.
    pub fn step_forward(&mut self) {
        self.seek(self.cursor + 1);
    }

    /// Moves one step back, pausing playback.
    pub fn step_back(&mut self) {
        self.seek(self.cursor.saturating_sub(1));
    }

    /// Jumps to `index` (clamped to the last step), pausing playback.
    pub fn seek(&mut self, index: usize) {
        self.cancel();
        self.cursor = index.min(self.last_index());
        self.state = if self.cursor >= self.last_index() {
            PlaybackState::Complete
        } else {
            PlaybackState::Paused
        };
    }

    fn last_index(&self) -> usize {
        self.len.saturating_sub(1)
    }

    fn issue(&self) -> TickToken {
        TickToken {
            generation: self.generation,
        }
    }

    fn cancel(&mut self) {
        self.generation = self.generation.wrapping_add(1);
    }

    fn finish(&mut self) {
        self.cancel();
        self.state = PlaybackState::Complete;
    }
}
