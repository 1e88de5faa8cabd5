//! Platform-independent RSVP pacing core.
//!
//! Splits text into words, decides how long each word stays on screen and
//! where it must be placed so its recognition point stays fixed. Rendering,
//! font measurement and timers are supplied by the host through the traits
//! in [`pivot`], [`sink`] and [`timer`].

#![cfg_attr(not(test), no_std)]

extern crate alloc;

pub mod delay;
pub mod engine;
pub mod error;
pub mod pivot;
pub mod segment;
pub mod sink;
pub mod timer;

pub use delay::{DefaultDelayStrategy, DelayStrategy, SteppedDelayStrategy};
pub use engine::{PlaybackState, Spritzer, SpritzerConfig, TickOutcome};
pub use error::SpritzError;
pub use pivot::{Metrics, PivotAlignment, TextMetrics, WordPlacement};
pub use segment::{Word, segment};
pub use sink::{PlaybackSink, WordFrame};
pub use timer::{ManualTimer, TimerHandle, TimerService};
