//! Per-word display delay policies.
//!
//! A strategy returns a multiplier applied to the base interval derived from
//! the words-per-minute rate. Strategies only see the word text, so swapping
//! one never changes a delay that was already scheduled.

/// Multiplier for a word ending a sentence.
pub const SENTENCE_PAUSE: f32 = 2.5;
/// Multiplier for a word carrying clause punctuation.
pub const CLAUSE_PAUSE: f32 = 1.3;
/// Multiplier for a word longer than [`LONG_WORD_CHARS`].
pub const LONG_WORD_PAUSE: f32 = 1.1;
pub const LONG_WORD_CHARS: usize = 6;

const SENTENCE_MARKS: [char; 3] = ['.', '?', '!'];
const CLAUSE_MARKS: [char; 4] = [',', ':', ';', '"'];

/// Pluggable pacing policy.
pub trait DelayStrategy {
    /// Factor applied to the base per-word interval. Expected to be positive.
    fn delay_multiplier(&self, word: &str) -> f32;
}

impl<F> DelayStrategy for F
where
    F: Fn(&str) -> f32,
{
    fn delay_multiplier(&self, word: &str) -> f32 {
        self(word)
    }
}

/// Suffix-matched sentence marks, substring-matched clause marks, mild pause
/// for long words.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct DefaultDelayStrategy;

impl DelayStrategy for DefaultDelayStrategy {
    fn delay_multiplier(&self, word: &str) -> f32 {
        if word.ends_with(SENTENCE_MARKS) {
            SENTENCE_PAUSE
        } else if word.contains(CLAUSE_MARKS) {
            CLAUSE_PAUSE
        } else if word.chars().count() > LONG_WORD_CHARS {
            LONG_WORD_PAUSE
        } else {
            1.0
        }
    }
}

/// Integer-step policy: any sentence mark anywhere in the word triples the
/// interval, clause marks or words of at least six characters double it.
///
/// Kept separate from [`DefaultDelayStrategy`]; the two disagree on tokens
/// such as `"Mr.Smith"` or `"co,uld"`.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct SteppedDelayStrategy;

impl DelayStrategy for SteppedDelayStrategy {
    fn delay_multiplier(&self, word: &str) -> f32 {
        if word.contains(SENTENCE_MARKS) {
            3.0
        } else if word.contains(CLAUSE_MARKS) || word.chars().count() >= LONG_WORD_CHARS {
            2.0
        } else {
            1.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_policy_tiers() {
        let strategy = DefaultDelayStrategy;
        assert_eq!(strategy.delay_multiplier("world."), SENTENCE_PAUSE);
        assert_eq!(strategy.delay_multiplier("why?"), SENTENCE_PAUSE);
        assert_eq!(strategy.delay_multiplier("test!"), SENTENCE_PAUSE);
        assert_eq!(strategy.delay_multiplier("Hello,"), CLAUSE_PAUSE);
        assert_eq!(strategy.delay_multiplier("co,uld"), CLAUSE_PAUSE);
        assert_eq!(strategy.delay_multiplier("\"quoted"), CLAUSE_PAUSE);
        assert_eq!(strategy.delay_multiplier("note:"), CLAUSE_PAUSE);
        assert_eq!(strategy.delay_multiplier("reading"), LONG_WORD_PAUSE);
        assert_eq!(strategy.delay_multiplier("simple"), 1.0);
        assert_eq!(strategy.delay_multiplier("a"), 1.0);
    }

    #[test]
    fn default_policy_only_matches_sentence_marks_as_suffix() {
        let strategy = DefaultDelayStrategy;
        assert_eq!(strategy.delay_multiplier("e.g"), 1.0);
        assert_eq!(strategy.delay_multiplier("Mr.Smith"), LONG_WORD_PAUSE);
    }

    #[test]
    fn default_policy_counts_characters_not_bytes() {
        assert_eq!(DefaultDelayStrategy.delay_multiplier("señora"), 1.0);
        assert_eq!(DefaultDelayStrategy.delay_multiplier("señoras"), LONG_WORD_PAUSE);
    }

    #[test]
    fn default_policy_never_shortens_and_orders_severity() {
        let strategy = DefaultDelayStrategy;
        let samples = ["", "a", "plain", "lengthy", "comma,", "semi;colon", "end.", "\"", "!"];
        for word in samples {
            assert!(strategy.delay_multiplier(word) >= 1.0, "{word:?}");
        }

        let terminal = strategy.delay_multiplier("end.");
        let clause = strategy.delay_multiplier("end,");
        let long = strategy.delay_multiplier("extended");
        let plain = strategy.delay_multiplier("end");
        assert!(terminal > clause && clause > long && long > plain);
    }

    #[test]
    fn stepped_policy_matches_anywhere() {
        let strategy = SteppedDelayStrategy;
        assert_eq!(strategy.delay_multiplier("Mr.Smith"), 3.0);
        assert_eq!(strategy.delay_multiplier("co,uld"), 2.0);
        assert_eq!(strategy.delay_multiplier("simple"), 2.0);
        assert_eq!(strategy.delay_multiplier("short"), 1.0);
    }

    #[test]
    fn closures_are_strategies() {
        let flat = |_: &str| 1.5f32;
        assert_eq!(flat.delay_multiplier("anything"), 1.5);
    }
}
