//! Chunk pacing state machine.

use alloc::{collections::VecDeque, string::String};

use log::{debug, warn};

use crate::{
    chunking::ChunkSequence,
    intent::{Intent, IntentSource, mock::NoIntents},
    persistence::{SaveReport, SaveRequest},
    render::{Notice, PacerSnapshot},
    speed::ReadingSpeed,
};

mod state;

pub use state::PacerState;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TickResult {
    NoRender,
    RenderRequested,
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct PacerConfig {
    pub speed: ReadingSpeed,
}

/// Owner of the chunk sequence, the pacer state and the single
/// automatic-advance deadline.
pub struct ChunkPacer<IN = NoIntents>
where
    IN: IntentSource,
{
    input: IN,
    chunks: ChunkSequence,
    state: PacerState,
    deadline_ms: Option<u64>,
    pending_redraw: bool,
    notice: Notice,
    save_outbox: VecDeque<SaveRequest>,
    last_save_id: u32,
    revealed_words: u32,
}

include!("view.rs");
include!("intents.rs");
include!("runtime.rs");
