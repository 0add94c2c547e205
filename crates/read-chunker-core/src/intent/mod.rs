//! Intent abstraction layer.

use alloc::string::String;

pub mod mock;

/// User intents forwarded by the presentation layer.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Intent {
    Load(String),
    Play,
    Pause,
    Toggle,
    StepForward,
    StepBack,
    SetSpeed(u16),
    SetFullscreen(bool),
}

/// Polled intent provider.
pub trait IntentSource {
    type Error;

    fn poll_intent(&mut self) -> Result<Option<Intent>, Self::Error>;
}
