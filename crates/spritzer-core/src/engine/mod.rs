//! Playback state machine: one word per timer tick.

use alloc::{boxed::Box, vec::Vec};

use log::{debug, warn};

use crate::{
    delay::{DefaultDelayStrategy, DelayStrategy},
    error::SpritzError,
    pivot::{PivotAlignment, TextMetrics},
    segment::{Word, segment},
    sink::{PlaybackSink, WordFrame},
    timer::{TimerHandle, TimerService},
};

pub const WPM_STEP: u16 = 10;
const MS_PER_MINUTE: u32 = 60_000;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SpritzerConfig {
    pub wpm: u16,
    /// Lower bound for [`Spritzer::adjust_wpm`].
    pub min_wpm: u16,
    /// Upper bound for [`Spritzer::adjust_wpm`].
    pub max_wpm: u16,
}

impl Default for SpritzerConfig {
    fn default() -> Self {
        Self {
            wpm: 250,
            min_wpm: 60,
            max_wpm: 1_000,
        }
    }
}

impl SpritzerConfig {
    fn normalized(mut self) -> Self {
        if self.max_wpm < self.min_wpm {
            core::mem::swap(&mut self.max_wpm, &mut self.min_wpm);
        }
        self.min_wpm = self.min_wpm.max(1);
        self.max_wpm = self.max_wpm.max(self.min_wpm);
        self.wpm = self.wpm.clamp(self.min_wpm, self.max_wpm);
        self
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PlaybackState {
    Idle,
    Playing,
    Paused,
    Completed,
}

/// Result of delivering a timer expiry.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TickOutcome {
    Rendered { index: usize },
    Completed,
    /// Cancelled or superseded handle; nothing happened.
    Stale,
}

/// RSVP pacing engine.
///
/// Owns the word queue and the playback position. Every mutation takes
/// `&mut self`, so control calls and timer deliveries are serialized by
/// whoever owns the engine.
pub struct Spritzer<T, M, S>
where
    T: TimerService,
    M: TextMetrics,
    S: PlaybackSink,
{
    timer: T,
    metrics: M,
    sink: S,
    config: SpritzerConfig,
    strategy: Box<dyn DelayStrategy>,
    words: Vec<Word>,
    index: usize,
    state: PlaybackState,
    pending: Option<TimerHandle>,
}

include!("control.rs");
include!("runtime.rs");
