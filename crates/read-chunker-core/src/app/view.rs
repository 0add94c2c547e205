impl<IN> ChunkPacer<IN>
where
    IN: IntentSource,
{
    pub fn new(input: IN, config: PacerConfig) -> Self {
        Self {
            input,
            chunks: ChunkSequence::empty(),
            state: PacerState::idle(config.speed),
            deadline_ms: None,
            pending_redraw: true,
            notice: Notice::None,
            save_outbox: VecDeque::new(),
            last_save_id: 0,
            revealed_words: 0,
        }
    }

    pub const fn state(&self) -> PacerState {
        self.state
    }

    pub const fn chunks(&self) -> &ChunkSequence {
        &self.chunks
    }

    pub const fn notice(&self) -> &Notice {
        &self.notice
    }

    /// When the pending automatic advance is due, if one is armed.
    pub const fn next_deadline_ms(&self) -> Option<u64> {
        self.deadline_ms
    }

    pub fn current_chunk(&self) -> &str {
        self.chunks
            .get(self.state.position())
            .map_or("", |chunk| chunk.as_str())
    }

    pub fn snapshot(&self) -> PacerSnapshot<'_> {
        PacerSnapshot {
            chunk: self.current_chunk(),
            position: self.state.position(),
            total_chunks: self.state.total(),
            playing: self.state.playing(),
            wpm: self.state.speed().wpm(),
            fullscreen: self.state.fullscreen(),
            phase: self.state.phase(),
            notice: &self.notice,
        }
    }

    pub fn with_snapshot<F>(&self, f: F)
    where
        F: FnOnce(PacerSnapshot<'_>),
    {
        f(self.snapshot());
    }

    /// Next queued persistence request, oldest first.
    pub fn take_save_request(&mut self) -> Option<SaveRequest> {
        self.save_outbox.pop_front()
    }

    /// Words revealed by automatic advance since the previous call.
    pub fn drain_revealed_words(&mut self) -> u32 {
        core::mem::take(&mut self.revealed_words)
    }
}
