//! Notification capability implemented by the host renderer.

use core::fmt::Debug;

use crate::pivot::{PivotAlignment, WordPlacement};

/// Everything a renderer needs to draw one word.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WordFrame<'a> {
    pub index: usize,
    pub total: usize,
    pub word: &'a str,
    pub alignment: PivotAlignment,
    pub placement: WordPlacement,
}

/// Receives playback notifications, synchronously and in index order.
///
/// Calls happen on the engine's timeline and must return promptly.
pub trait PlaybackSink {
    type Error: Debug;

    fn on_word(&mut self, frame: WordFrame<'_>) -> Result<(), Self::Error>;

    /// Called after each word with the number of words shown so far.
    fn on_progress(&mut self, _shown: usize, _total: usize) {}

    fn on_completion(&mut self) {}

    /// A failed [`PlaybackSink::on_word`]. Playback has already moved on.
    fn on_render_error(&mut self, index: usize, error: Self::Error);
}
