impl<IN> ChunkPacer<IN>
where
    IN: IntentSource,
{
    /// Replace the sequence with the chunks of `text` and queue `text` for
    /// persistence. Chunking never waits on, or is undone by, the save.
    pub fn load(&mut self, text: &str, now_ms: u64) -> &ChunkSequence {
        self.load_text(String::from(text), now_ms)
    }

    pub fn play(&mut self, now_ms: u64) {
        self.commit(self.state.played(), false, now_ms);
    }

    pub fn pause(&mut self, now_ms: u64) {
        self.commit(self.state.paused(), false, now_ms);
    }

    pub fn toggle_play_pause(&mut self, now_ms: u64) {
        self.commit(self.state.toggled(), false, now_ms);
    }

    pub fn step_forward(&mut self, now_ms: u64) {
        self.commit(self.state.stepped_forward(), false, now_ms);
    }

    pub fn step_back(&mut self, now_ms: u64) {
        self.commit(self.state.stepped_back(), false, now_ms);
    }

    /// Apply `wpm` if it is one of the offered speeds; other values are ignored.
    pub fn set_speed(&mut self, wpm: u16, now_ms: u64) {
        match ReadingSpeed::try_from(wpm) {
            Ok(speed) => self.commit(self.state.with_speed(speed), false, now_ms),
            Err(err) => debug!("pacer: ignoring speed change: {}", err),
        }
    }

    pub fn set_fullscreen(&mut self, fullscreen: bool, now_ms: u64) {
        self.commit(self.state.with_fullscreen(fullscreen), false, now_ms);
    }

    pub fn apply_intent(&mut self, intent: Intent, now_ms: u64) {
        match intent {
            Intent::Load(text) => {
                self.load_text(text, now_ms);
            }
            Intent::Play => self.play(now_ms),
            Intent::Pause => self.pause(now_ms),
            Intent::Toggle => self.toggle_play_pause(now_ms),
            Intent::StepForward => self.step_forward(now_ms),
            Intent::StepBack => self.step_back(now_ms),
            Intent::SetSpeed(wpm) => self.set_speed(wpm, now_ms),
            Intent::SetFullscreen(fullscreen) => self.set_fullscreen(fullscreen, now_ms),
        }
    }

    /// Record the outcome of an earlier save. Only the notice changes.
    pub fn apply_save_report(&mut self, report: SaveReport) {
        let SaveReport { id, result } = report;
        self.notice = match result {
            Ok(()) => Notice::Saved { id },
            Err(failure) => {
                debug!("pacer: save id={} reported failure: {}", id, failure);
                Notice::SaveFailed { id, failure }
            }
        };
        self.pending_redraw = true;
    }

    fn load_text(&mut self, text: String, now_ms: u64) -> &ChunkSequence {
        self.chunks = ChunkSequence::from_text(&text);
        self.last_save_id = self.last_save_id.wrapping_add(1);
        let id = self.last_save_id;
        debug!(
            "pacer: load chunks={} bytes={} save_id={}",
            self.chunks.len(),
            text.len(),
            id
        );

        self.save_outbox.push_back(SaveRequest { id, text });
        self.notice = Notice::Saving { id };
        self.commit(self.state.loaded(self.chunks.len()), true, now_ms);
        &self.chunks
    }
}
