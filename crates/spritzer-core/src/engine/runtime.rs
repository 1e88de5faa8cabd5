impl<T, M, S> Spritzer<T, M, S>
where
    T: TimerService,
    M: TextMetrics,
    S: PlaybackSink,
{
    /// Deliver an expired timer. Handles that were cancelled, or that arrive
    /// while not playing, are ignored.
    pub fn on_timer(&mut self, handle: TimerHandle) -> Result<TickOutcome, SpritzError> {
        if self.state != PlaybackState::Playing || self.pending != Some(handle) {
            debug!("spritzer: ignoring stale timer {}", handle.id());
            return Ok(TickOutcome::Stale);
        }

        self.pending = None;
        self.step()
    }

    /// Show the word at the cursor and schedule the next tick for when its
    /// display time runs out. The tick after the last word completes.
    fn step(&mut self) -> Result<TickOutcome, SpritzError> {
        let total = self.words.len();
        if self.index >= total {
            self.finish();
            return Ok(TickOutcome::Completed);
        }

        let alignment = match PivotAlignment::compute(&self.metrics) {
            Ok(alignment) => alignment,
            Err(err) => {
                warn!("spritzer: pausing at word {}: {}", self.index, err);
                self.state = PlaybackState::Paused;
                return Err(err);
            }
        };

        let index = self.index;
        let word = self.words[index].as_str();
        let frame = WordFrame {
            index,
            total,
            word,
            alignment,
            placement: alignment.place(word),
        };

        if let Err(err) = self.sink.on_word(frame) {
            warn!("spritzer: render failed at word {}: {:?}", index, err);
            self.sink.on_render_error(index, err);
        }

        self.index = index + 1;
        self.sink.on_progress(self.index, total);

        let delay_ms = self.delay_ms_for(word);
        self.schedule(delay_ms)?;
        Ok(TickOutcome::Rendered { index })
    }

    fn schedule(&mut self, delay_ms: u32) -> Result<(), SpritzError> {
        match self.timer.schedule_once(delay_ms) {
            Ok(handle) => {
                self.pending = Some(handle);
                Ok(())
            }
            Err(err) => {
                warn!("spritzer: timer schedule failed: {:?}", err);
                self.pending = None;
                self.state = PlaybackState::Paused;
                Err(SpritzError::TimerUnavailable)
            }
        }
    }

    fn finish(&mut self) {
        self.cancel_pending();
        self.state = PlaybackState::Completed;
        debug!("spritzer: completed {} words", self.words.len());
        self.sink.on_completion();
    }

    fn cancel_pending(&mut self) {
        if let Some(handle) = self.pending.take() {
            self.timer.cancel(handle);
        }
    }
}
