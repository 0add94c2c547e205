#![cfg_attr(not(test), no_std)]

//! Chunk pacing core: text partitioning, the reveal state machine and the
//! seams used by a host to feed intents and persist loaded text.

extern crate alloc;

pub mod app;
pub mod chunking;
pub mod intent;
pub mod persistence;
pub mod render;
pub mod speed;
