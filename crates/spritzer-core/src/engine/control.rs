impl<T, M, S> Spritzer<T, M, S>
where
    T: TimerService,
    M: TextMetrics,
    S: PlaybackSink,
{
    pub fn new(timer: T, metrics: M, sink: S, config: SpritzerConfig) -> Self {
        Self {
            timer,
            metrics,
            sink,
            config: config.normalized(),
            strategy: Box::new(DefaultDelayStrategy),
            words: Vec::new(),
            index: 0,
            state: PlaybackState::Idle,
            pending: None,
        }
    }

    /// Replace the queue and return to [`PlaybackState::Idle`] at word 0.
    /// Blank text leaves an empty queue.
    pub fn set_text(&mut self, text: &str) {
        self.cancel_pending();
        self.words = segment(text);
        self.index = 0;
        self.state = PlaybackState::Idle;
        debug!("spritzer: loaded {} words", self.words.len());
    }

    /// Show the current word now and keep going. No-op on an empty queue,
    /// while already playing, or once completed.
    pub fn start(&mut self) -> Result<(), SpritzError> {
        match self.state {
            PlaybackState::Idle | PlaybackState::Paused => {}
            PlaybackState::Playing | PlaybackState::Completed => return Ok(()),
        }
        if self.words.is_empty() {
            return Ok(());
        }

        PivotAlignment::compute(&self.metrics)?;
        debug!(
            "spritzer: playing from word {}/{} at {} wpm",
            self.index,
            self.words.len(),
            self.config.wpm
        );
        self.state = PlaybackState::Playing;
        self.step().map(|_| ())
    }

    /// Freeze at the current word. Only meaningful while playing.
    pub fn pause(&mut self) {
        if self.state != PlaybackState::Playing {
            return;
        }
        self.cancel_pending();
        self.state = PlaybackState::Paused;
        debug!("spritzer: paused at word {}", self.index);
    }

    /// Pause when playing, otherwise start. Returns the resulting state.
    pub fn toggle(&mut self) -> Result<PlaybackState, SpritzError> {
        if self.is_playing() {
            self.pause();
        } else {
            self.start()?;
        }
        Ok(self.state)
    }

    /// Back to the first word of the current text, idle.
    pub fn rewind(&mut self) {
        self.cancel_pending();
        self.index = 0;
        self.state = PlaybackState::Idle;
    }

    /// Takes effect from the next scheduled tick.
    pub fn set_wpm(&mut self, wpm: u16) -> Result<(), SpritzError> {
        if wpm == 0 {
            return Err(SpritzError::InvalidRate);
        }
        self.config.wpm = wpm;
        Ok(())
    }

    /// Step the rate by [`WPM_STEP`] within the configured bounds.
    /// Returns whether the rate changed.
    pub fn adjust_wpm(&mut self, increase: bool) -> bool {
        let next = if increase {
            self.config
                .wpm
                .saturating_add(WPM_STEP)
                .min(self.config.max_wpm)
        } else {
            self.config
                .wpm
                .saturating_sub(WPM_STEP)
                .max(self.config.min_wpm)
        };

        if next != self.config.wpm {
            self.config.wpm = next;
            true
        } else {
            false
        }
    }

    /// Takes effect from the next computed delay.
    pub fn set_delay_strategy<D>(&mut self, strategy: D)
    where
        D: DelayStrategy + 'static,
    {
        self.strategy = Box::new(strategy);
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn is_playing(&self) -> bool {
        self.state == PlaybackState::Playing
    }

    /// Index of the next word to show; equals [`Self::total_words`] once the
    /// queue is exhausted.
    pub fn current_word_index(&self) -> usize {
        self.index
    }

    pub fn total_words(&self) -> usize {
        self.words.len()
    }

    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Most recently shown word.
    pub fn displayed_word(&self) -> Option<&Word> {
        self.index.checked_sub(1).and_then(|idx| self.words.get(idx))
    }

    pub fn wpm(&self) -> u16 {
        self.config.wpm
    }

    pub fn config(&self) -> SpritzerConfig {
        self.config
    }

    pub fn base_interval_ms(&self) -> u32 {
        MS_PER_MINUTE / self.config.wpm.max(1) as u32
    }

    /// Display time for `word` under the current rate and strategy.
    pub fn delay_ms_for(&self, word: &str) -> u32 {
        let scaled = self.base_interval_ms() as f32 * self.strategy.delay_multiplier(word);
        // Saturating cast: negative or NaN multipliers collapse to zero.
        (scaled + 0.5) as u32
    }

    /// Projected time to show every word not yet shown, assuming the rate
    /// and strategy stay as they are.
    pub fn remaining_ms(&self) -> u64 {
        self.words[self.index..]
            .iter()
            .map(|word| self.delay_ms_for(word) as u64)
            .sum()
    }

    /// [`Self::remaining_ms`] in whole minutes, rounded down.
    pub fn minutes_remaining_in_queue(&self) -> u32 {
        (self.remaining_ms() / MS_PER_MINUTE as u64) as u32
    }

    /// Pivot column for the current metrics.
    pub fn pivot_alignment(&self) -> Result<PivotAlignment, SpritzError> {
        PivotAlignment::compute(&self.metrics)
    }

    pub fn timer(&self) -> &T {
        &self.timer
    }

    pub fn timer_mut(&mut self) -> &mut T {
        &mut self.timer
    }

    pub fn metrics(&self) -> &M {
        &self.metrics
    }

    /// Metrics changes apply from the next rendered word.
    pub fn metrics_mut(&mut self) -> &mut M {
        &mut self.metrics
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }
}
