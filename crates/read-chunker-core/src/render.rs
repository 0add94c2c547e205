//! View model consumed by the presentation layer.

use crate::persistence::SaveFailure;

/// Coarse machine state.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PacerPhase {
    /// No text loaded yet.
    Idle,
    Paused,
    Playing,
}

/// Non-blocking persistence notice shown next to the reading view.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub enum Notice {
    #[default]
    None,
    Saving {
        id: u32,
    },
    Saved {
        id: u32,
    },
    SaveFailed {
        id: u32,
        failure: SaveFailure,
    },
}

impl Notice {
    pub const fn is_error(&self) -> bool {
        matches!(self, Self::SaveFailed { .. })
    }
}

/// Read-only snapshot of the pacer.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct PacerSnapshot<'a> {
    /// Text of the chunk at `position`; empty while idle.
    pub chunk: &'a str,
    pub position: usize,
    pub total_chunks: usize,
    pub playing: bool,
    pub wpm: u16,
    pub fullscreen: bool,
    pub phase: PacerPhase,
    pub notice: &'a Notice,
}

impl PacerSnapshot<'_> {
    /// 1-based position for display, `0` while idle.
    pub const fn display_position(&self) -> usize {
        if self.total_chunks == 0 {
            0
        } else {
            self.position + 1
        }
    }

    pub const fn at_last_chunk(&self) -> bool {
        self.total_chunks > 0 && self.position + 1 == self.total_chunks
    }
}
