use super::{Intent, IntentSource};

/// Source that never yields, for hosts that call the pacer's intent methods
/// directly.
#[derive(Default, Debug, Clone, Copy)]
pub struct NoIntents;

impl NoIntents {
    pub const fn new() -> Self {
        Self
    }
}

impl IntentSource for NoIntents {
    type Error = core::convert::Infallible;

    fn poll_intent(&mut self) -> Result<Option<Intent>, Self::Error> {
        Ok(None)
    }
}
