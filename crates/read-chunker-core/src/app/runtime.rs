impl<IN> ChunkPacer<IN>
where
    IN: IntentSource,
{
    pub fn tick(&mut self, now_ms: u64) -> TickResult {
        self.process_intents(now_ms);
        self.fire_if_due(now_ms);

        if self.pending_redraw {
            self.pending_redraw = false;
            TickResult::RenderRequested
        } else {
            TickResult::NoRender
        }
    }

    fn process_intents(&mut self, now_ms: u64) {
        loop {
            match self.input.poll_intent() {
                Ok(Some(intent)) => self.apply_intent(intent, now_ms),
                Ok(None) => break,
                Err(_) => {
                    warn!("pacer: intent source failed; skipping until next tick");
                    break;
                }
            }
        }
    }

    fn fire_if_due(&mut self, now_ms: u64) {
        let Some(deadline_ms) = self.deadline_ms else {
            return;
        };
        if now_ms < deadline_ms {
            return;
        }

        let next = self.state.ticked();
        if next.position() != self.state.position() {
            let words = self
                .chunks
                .get(next.position())
                .map_or(0, |chunk| chunk.word_count() as u32);
            self.revealed_words = self.revealed_words.saturating_add(words);
        } else {
            debug!(
                "pacer: reached last chunk {}/{}; stopping",
                next.position().saturating_add(1),
                next.total()
            );
        }

        self.commit(next, false, now_ms);
    }

    /// Install `next` and keep the deadline consistent with it. This is the
    /// only place the deadline is written, so cancel-then-arm is a single step.
    fn commit(&mut self, next: PacerState, sequence_replaced: bool, now_ms: u64) {
        let previous = self.state;
        self.state = next;

        if sequence_replaced || previous.requires_rearm(next) {
            self.deadline_ms = if next.timer_armed() {
                Some(now_ms.saturating_add(next.speed().chunk_interval_ms()))
            } else {
                None
            };
        }

        if sequence_replaced || previous != next {
            self.pending_redraw = true;
        }
    }
}
