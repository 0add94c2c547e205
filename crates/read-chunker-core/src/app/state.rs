//! Pure pacer state transitions.

use crate::{render::PacerPhase, speed::ReadingSpeed};

/// Immutable pacer state. Every transition returns a new value; the owning
/// [`ChunkPacer`](super::ChunkPacer) decides what the change means for its
/// timer.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct PacerState {
    position: usize,
    total: usize,
    playing: bool,
    speed: ReadingSpeed,
    fullscreen: bool,
}

impl PacerState {
    pub const fn idle(speed: ReadingSpeed) -> Self {
        Self {
            position: 0,
            total: 0,
            playing: false,
            speed,
            fullscreen: false,
        }
    }

    pub const fn position(self) -> usize {
        self.position
    }

    pub const fn total(self) -> usize {
        self.total
    }

    pub const fn playing(self) -> bool {
        self.playing
    }

    pub const fn speed(self) -> ReadingSpeed {
        self.speed
    }

    pub const fn fullscreen(self) -> bool {
        self.fullscreen
    }

    pub const fn last_index(self) -> usize {
        self.total.saturating_sub(1)
    }

    pub const fn phase(self) -> PacerPhase {
        if self.total == 0 {
            PacerPhase::Idle
        } else if self.playing {
            PacerPhase::Playing
        } else {
            PacerPhase::Paused
        }
    }

    /// Whether an automatic-advance deadline should be pending in this state.
    pub const fn timer_armed(self) -> bool {
        self.playing && self.total > 0
    }

    /// Whether moving from `self` to `next` must cancel and re-arm the timer.
    /// Fullscreen is presentation-only and never counts.
    pub fn requires_rearm(self, next: Self) -> bool {
        self.playing != next.playing
            || self.position != next.position
            || self.total != next.total
            || self.speed != next.speed
    }

    pub const fn loaded(self, total: usize) -> Self {
        Self {
            position: 0,
            total,
            playing: false,
            ..self
        }
    }

    pub const fn played(self) -> Self {
        Self {
            playing: true,
            ..self
        }
    }

    pub const fn paused(self) -> Self {
        Self {
            playing: false,
            ..self
        }
    }

    pub const fn toggled(self) -> Self {
        Self {
            playing: !self.playing,
            ..self
        }
    }

    pub const fn stepped_forward(self) -> Self {
        let last = self.last_index();
        Self {
            playing: false,
            position: if self.position < last {
                self.position + 1
            } else {
                last
            },
            ..self
        }
    }

    pub const fn stepped_back(self) -> Self {
        Self {
            playing: false,
            position: self.position.saturating_sub(1),
            ..self
        }
    }

    pub const fn with_speed(self, speed: ReadingSpeed) -> Self {
        Self { speed, ..self }
    }

    pub const fn with_fullscreen(self, fullscreen: bool) -> Self {
        Self { fullscreen, ..self }
    }

    /// One automatic advance: move forward, or stop at the last chunk.
    pub const fn ticked(self) -> Self {
        if !self.timer_armed() {
            return self;
        }

        if self.position < self.last_index() {
            Self {
                position: self.position + 1,
                ..self
            }
        } else {
            Self {
                playing: false,
                ..self
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loaded(total: usize) -> PacerState {
        PacerState::idle(ReadingSpeed::default()).loaded(total)
    }

    #[test]
    fn load_resets_position_and_playback() {
        let state = loaded(5).played().stepped_forward().played().loaded(3);
        assert_eq!(state.position(), 0);
        assert_eq!(state.total(), 3);
        assert!(!state.playing());
        assert_eq!(state.phase(), PacerPhase::Paused);
    }

    #[test]
    fn steps_clamp_and_stop_playback() {
        let state = loaded(2).played().stepped_forward();
        assert_eq!(state.position(), 1);
        assert!(!state.playing());

        let state = state.stepped_forward();
        assert_eq!(state.position(), 1);

        let state = state.stepped_back().stepped_back().stepped_back();
        assert_eq!(state.position(), 0);
    }

    #[test]
    fn steps_while_idle_stay_at_zero() {
        let state = PacerState::idle(ReadingSpeed::Wpm300)
            .stepped_forward()
            .stepped_back();
        assert_eq!(state.position(), 0);
        assert_eq!(state.phase(), PacerPhase::Idle);
    }

    #[test]
    fn tick_at_last_chunk_stops_playback() {
        let state = loaded(2).played().ticked();
        assert_eq!(state.position(), 1);
        assert!(state.playing());

        let state = state.ticked();
        assert_eq!(state.position(), 1);
        assert!(!state.playing());
    }

    #[test]
    fn tick_without_playback_is_identity() {
        let state = loaded(4);
        assert_eq!(state.ticked(), state);
    }

    #[test]
    fn play_while_idle_does_not_arm_timer() {
        let state = PacerState::idle(ReadingSpeed::default()).played();
        assert!(state.playing());
        assert!(!state.timer_armed());
        assert_eq!(state.phase(), PacerPhase::Idle);
    }

    #[test]
    fn fullscreen_alone_does_not_require_rearm() {
        let state = loaded(3).played();
        assert!(!state.requires_rearm(state.with_fullscreen(true)));
        assert!(state.requires_rearm(state.with_speed(ReadingSpeed::Wpm700)));
        assert!(state.requires_rearm(state.ticked()));
        assert!(state.requires_rearm(state.paused()));
    }
}
