//! Pivot (optimal recognition point) alignment.
//!
//! Words are shifted horizontally so one character of each word, the pivot,
//! always lands in the same screen column. The column depends only on the
//! viewport width and the character width, so it is recomputed whenever
//! either metric changes and never cached across them.

use heapless::String as HeaplessString;

use crate::error::SpritzError;

/// Columns subtracted from half the viewport to place the pivot column.
/// Empirically tuned for a monospace font filling the viewport.
pub const PIVOT_LEFT_MARGIN_CHARS: u32 = 3;
/// Capacity of [`PivotAlignment::padded_word`] output.
pub const PADDED_WORD_BYTES: usize = 160;

/// Measurement capability provided by the host.
pub trait TextMetrics {
    /// Advance of one character of the (monospace) reading font, in pixels.
    fn character_width_px(&self) -> f32;
    /// Usable width of the reading area, in pixels.
    fn viewport_width_px(&self) -> f32;
}

/// Plain metric snapshot.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Metrics {
    pub char_width_px: f32,
    pub viewport_width_px: f32,
}

impl Metrics {
    pub const fn new(char_width_px: f32, viewport_width_px: f32) -> Self {
        Self {
            char_width_px,
            viewport_width_px,
        }
    }

    /// Character-cell display: one unit per column.
    pub const fn columns(columns: u16) -> Self {
        Self::new(1.0, columns as f32)
    }
}

impl TextMetrics for Metrics {
    fn character_width_px(&self) -> f32 {
        self.char_width_px
    }

    fn viewport_width_px(&self) -> f32 {
        self.viewport_width_px
    }
}

/// Where the pivot column sits for the current metrics.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PivotAlignment {
    /// Characters that fit in the viewport.
    pub max_word_length: u32,
    /// Characters drawn left of the pivot column.
    pub chars_left_of_pivot: u32,
    /// Horizontal center of the pivot column, from the left edge.
    pub pivot_offset_px: f32,
    pub char_width_px: f32,
}

/// Placement of one word against a [`PivotAlignment`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WordPlacement {
    /// Character index (not byte index) of the pivot inside the word.
    pub pivot_char_index: usize,
    /// Blank columns to emit before the word on a character grid.
    pub leading_chars: usize,
    /// Left edge of the word in pixels; negative when the word starts
    /// before the viewport.
    pub offset_px: f32,
}

impl PivotAlignment {
    pub fn compute<M>(metrics: &M) -> Result<Self, SpritzError>
    where
        M: TextMetrics + ?Sized,
    {
        let char_width_px = metrics.character_width_px();
        let viewport_width_px = metrics.viewport_width_px();
        if !(char_width_px.is_finite() && char_width_px > 0.0) || !viewport_width_px.is_finite() {
            return Err(SpritzError::InvalidMetrics);
        }

        // Float to int casts saturate, so a negative viewport yields zero.
        let max_word_length = (viewport_width_px / char_width_px) as u32;
        let chars_left_of_pivot = (max_word_length / 2).saturating_sub(PIVOT_LEFT_MARGIN_CHARS);
        let pivot_offset_px = char_width_px * (chars_left_of_pivot as f32 + 0.5);

        Ok(Self {
            max_word_length,
            chars_left_of_pivot,
            pivot_offset_px,
            char_width_px,
        })
    }

    pub fn place(&self, word: &str) -> WordPlacement {
        let pivot_char_index = pivot_char_index(word);
        let leading_chars = (self.chars_left_of_pivot as usize).saturating_sub(pivot_char_index);
        let offset_px = self.pivot_offset_px - self.char_width_px * (pivot_char_index as f32 + 0.5);

        WordPlacement {
            pivot_char_index,
            leading_chars,
            offset_px,
        }
    }

    /// `word` preceded by enough spaces to put its pivot in the pivot column.
    /// Truncated at [`PADDED_WORD_BYTES`] on a character boundary.
    pub fn padded_word(&self, word: &str) -> HeaplessString<PADDED_WORD_BYTES> {
        let mut out = HeaplessString::new();
        let leading = self.place(word).leading_chars;

        for ch in core::iter::repeat_n(' ', leading).chain(word.chars()) {
            if out.push(ch).is_err() {
                break;
            }
        }

        out
    }
}

/// Character index of the recognition point: the 1st, 2nd, 3rd, 4th or 5th
/// letter depending on how many letters the word has. Punctuation is skipped
/// when counting; a word without letters pivots on its middle character.
pub fn pivot_char_index(word: &str) -> usize {
    let mut total_chars = 0usize;
    let mut letter_chars = 0usize;

    for c in word.chars() {
        total_chars += 1;
        if is_pivot_letter(c) {
            letter_chars += 1;
        }
    }

    if total_chars == 0 {
        return 0;
    }

    if letter_chars == 0 {
        return total_chars.saturating_sub(1) / 2;
    }

    let target_letter = core::cmp::min(pivot_letter_index(letter_chars), letter_chars - 1);
    word.chars()
        .enumerate()
        .filter(|&(_, c)| is_pivot_letter(c))
        .nth(target_letter)
        .map_or(total_chars.saturating_sub(1) / 2, |(idx, _)| idx)
}

fn pivot_letter_index(letter_count: usize) -> usize {
    match letter_count {
        0 | 1 => 0,
        2..=5 => 1,
        6..=9 => 2,
        10..=13 => 3,
        _ => 4,
    }
}

fn is_pivot_letter(c: char) -> bool {
    c.is_alphanumeric()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pivot_column_follows_viewport() {
        let alignment = PivotAlignment::compute(&Metrics::new(10.0, 400.0)).unwrap();
        assert_eq!(alignment.max_word_length, 40);
        assert_eq!(alignment.chars_left_of_pivot, 17);
        assert_eq!(alignment.pivot_offset_px, 175.0);

        let narrower = PivotAlignment::compute(&Metrics::new(10.0, 209.0)).unwrap();
        assert_eq!(narrower.max_word_length, 20);
        assert_eq!(narrower.chars_left_of_pivot, 7);
        assert_eq!(narrower.pivot_offset_px, 75.0);
    }

    #[test]
    fn pivot_column_follows_font() {
        let small = PivotAlignment::compute(&Metrics::new(8.0, 320.0)).unwrap();
        let large = PivotAlignment::compute(&Metrics::new(16.0, 320.0)).unwrap();
        assert_eq!(small.chars_left_of_pivot, 17);
        assert_eq!(large.chars_left_of_pivot, 7);
        assert_eq!(large.pivot_offset_px, 120.0);
    }

    #[test]
    fn tiny_viewport_never_goes_negative() {
        for viewport in [0.0, 10.0, 35.0, 59.0, 79.0] {
            let alignment = PivotAlignment::compute(&Metrics::new(10.0, viewport)).unwrap();
            assert_eq!(alignment.chars_left_of_pivot, 0, "viewport {viewport}");
            assert_eq!(alignment.pivot_offset_px, 5.0);
        }
    }

    #[test]
    fn rejects_unusable_metrics() {
        for metrics in [
            Metrics::new(0.0, 400.0),
            Metrics::new(-3.0, 400.0),
            Metrics::new(f32::NAN, 400.0),
            Metrics::new(10.0, f32::INFINITY),
        ] {
            assert_eq!(
                PivotAlignment::compute(&metrics),
                Err(SpritzError::InvalidMetrics)
            );
        }
    }

    #[test]
    fn pivot_letter_by_length() {
        assert_eq!(pivot_char_index(""), 0);
        assert_eq!(pivot_char_index("a"), 0);
        assert_eq!(pivot_char_index("is"), 1);
        assert_eq!(pivot_char_index("Hello"), 1);
        assert_eq!(pivot_char_index("reading"), 2);
        assert_eq!(pivot_char_index("engineering"), 3);
        assert_eq!(pivot_char_index("incomprehensibilities"), 4);
    }

    #[test]
    fn pivot_skips_leading_punctuation() {
        assert_eq!(pivot_char_index("\"Hello,"), 2);
        assert_eq!(pivot_char_index("--"), 0);
        assert_eq!(pivot_char_index("..."), 1);
    }

    #[test]
    fn pivot_lands_in_the_same_column() {
        let alignment = PivotAlignment::compute(&Metrics::columns(40)).unwrap();
        for word in ["a", "world.", "reading", "incomprehensibilities"] {
            let padded = alignment.padded_word(word);
            let pivot = alignment.place(word).pivot_char_index;
            let column = padded.chars().count() - word.chars().count() + pivot;
            assert_eq!(column, alignment.chars_left_of_pivot as usize, "{word}");
        }
    }

    #[test]
    fn placement_offsets_center_the_pivot() {
        let alignment = PivotAlignment::compute(&Metrics::new(10.0, 400.0)).unwrap();
        let placement = alignment.place("Hello");
        assert_eq!(placement.pivot_char_index, 1);
        assert_eq!(placement.leading_chars, 16);
        assert_eq!(placement.offset_px, 160.0);
    }

    #[test]
    fn padded_word_truncates_on_char_boundary() {
        let alignment = PivotAlignment::compute(&Metrics::columns(40)).unwrap();
        let long: std::string::String = core::iter::repeat_n('ñ', 200).collect();
        let padded = alignment.padded_word(&long);
        assert!(padded.len() <= PADDED_WORD_BYTES);
        assert!(padded.ends_with('ñ'));
    }
}
