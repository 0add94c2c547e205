//! Persistence seam for loaded text.
//!
//! The pacer never awaits a store. Each load queues a [`SaveRequest`]; the host
//! runs it through [`run_save`] on its own task and hands the resulting
//! [`SaveReport`] back to the pacer as a separate event.

use alloc::string::String;
use core::fmt::{self, Write};

use heapless::String as HeaplessString;
use log::{info, warn};

pub const SAVE_FAILURE_DETAIL_BYTES: usize = 64;

/// Raw text handed to the store, tagged with the load that produced it.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SaveRequest {
    pub id: u32,
    pub text: String,
}

/// Store rejection, reduced to a bounded message for display.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SaveFailure {
    detail: HeaplessString<SAVE_FAILURE_DETAIL_BYTES>,
}

impl SaveFailure {
    /// Render `err` into the detail buffer, keeping whatever prefix fits.
    pub fn from_display(err: &dyn fmt::Display) -> Self {
        let mut detail = HeaplessString::new();
        let _ = write!(TruncatingWriter(&mut detail), "{err}");
        Self { detail }
    }

    pub fn detail(&self) -> &str {
        &self.detail
    }
}

impl fmt::Display for SaveFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "save failed: {}", self.detail)
    }
}

struct TruncatingWriter<'a, const N: usize>(&'a mut HeaplessString<N>);

impl<const N: usize> Write for TruncatingWriter<'_, N> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        for ch in s.chars() {
            if self.0.push(ch).is_err() {
                break;
            }
        }
        Ok(())
    }
}

/// Outcome of one save attempt.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SaveReport {
    pub id: u32,
    pub result: Result<(), SaveFailure>,
}

impl SaveReport {
    pub const fn saved(id: u32) -> Self {
        Self { id, result: Ok(()) }
    }

    pub fn failed(id: u32, err: &dyn fmt::Display) -> Self {
        Self {
            id,
            result: Err(SaveFailure::from_display(err)),
        }
    }
}

/// Abstract text persistence backend.
#[allow(async_fn_in_trait)]
pub trait TextStore {
    type Error: fmt::Display;

    async fn save(&mut self, text: &str) -> Result<(), Self::Error>;
}

/// Run a single save attempt. There is no retry; the report carries the
/// outcome either way.
pub async fn run_save<S: TextStore>(store: &mut S, request: SaveRequest) -> SaveReport {
    match store.save(&request.text).await {
        Ok(()) => {
            info!(
                "save: stored id={} bytes={}",
                request.id,
                request.text.len()
            );
            SaveReport::saved(request.id)
        }
        Err(err) => {
            warn!("save: failed id={} err={}", request.id, err);
            SaveReport::failed(request.id, &err)
        }
    }
}
