use std::io::{self, Write};

use log::warn;
use spritzer_core::{PivotAlignment, PlaybackSink, WordFrame};

const CLEAR_LINE: &str = "\r\x1b[2K";
const PIVOT_STYLE: &str = "\x1b[1;31m";
const RESET_STYLE: &str = "\x1b[0m";
const GUIDE_MARK: char = 'v';

/// Draws one word per line refresh with the pivot letter highlighted.
pub(super) struct TerminalSink<W: Write> {
    out: W,
    shown: usize,
    total: usize,
}

impl<W: Write> TerminalSink<W> {
    pub(super) fn new(out: W) -> Self {
        Self {
            out,
            shown: 0,
            total: 0,
        }
    }

    pub(super) fn shown(&self) -> usize {
        self.shown
    }

    pub(super) fn total(&self) -> usize {
        self.total
    }

    /// Marker above the pivot column.
    pub(super) fn draw_guide(&mut self, alignment: PivotAlignment) -> io::Result<()> {
        let column = alignment.chars_left_of_pivot as usize;
        writeln!(self.out, "{:column$}{}", "", GUIDE_MARK)
    }

    fn draw_word(&mut self, frame: &WordFrame<'_>) -> io::Result<()> {
        let (before, pivot, after) = split_at_pivot(frame.word, frame.placement.pivot_char_index);
        write!(
            self.out,
            "{CLEAR_LINE}{:leading$}{before}{PIVOT_STYLE}{pivot}{RESET_STYLE}{after}",
            "",
            leading = frame.placement.leading_chars,
        )?;
        self.out.flush()
    }
}

impl<W: Write> PlaybackSink for TerminalSink<W> {
    type Error = io::Error;

    fn on_word(&mut self, frame: WordFrame<'_>) -> Result<(), Self::Error> {
        self.draw_word(&frame)
    }

    fn on_progress(&mut self, shown: usize, total: usize) {
        self.shown = shown;
        self.total = total;
    }

    fn on_completion(&mut self) {
        let _ = writeln!(self.out);
    }

    fn on_render_error(&mut self, index: usize, error: Self::Error) {
        warn!("terminal: word {} not drawn: {}", index + 1, error);
    }
}

/// Split `word` around its `pivot`-th character.
fn split_at_pivot(word: &str, pivot: usize) -> (&str, &str, &str) {
    let mut indices = word.char_indices().skip(pivot);
    let Some((start, _)) = indices.next() else {
        return (word, "", "");
    };
    let end = indices.next().map_or(word.len(), |(idx, _)| idx);
    (&word[..start], &word[start..end], &word[end..])
}
