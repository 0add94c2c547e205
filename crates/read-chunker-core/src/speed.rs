//! Selectable reading speeds.

use core::fmt;

use crate::chunking::CHUNK_WORDS;

/// One of the fixed words-per-minute rates offered to the reader.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum ReadingSpeed {
    #[default]
    Wpm200,
    Wpm300,
    Wpm400,
    Wpm500,
    Wpm600,
    Wpm700,
}

impl ReadingSpeed {
    pub const ALL: [Self; 6] = [
        Self::Wpm200,
        Self::Wpm300,
        Self::Wpm400,
        Self::Wpm500,
        Self::Wpm600,
        Self::Wpm700,
    ];

    pub const fn wpm(self) -> u16 {
        match self {
            Self::Wpm200 => 200,
            Self::Wpm300 => 300,
            Self::Wpm400 => 400,
            Self::Wpm500 => 500,
            Self::Wpm600 => 600,
            Self::Wpm700 => 700,
        }
    }

    /// Display time of one chunk: the time to read a full chunk at this rate,
    /// regardless of how many words the shown chunk actually holds.
    pub const fn chunk_interval_ms(self) -> u64 {
        (60_000 * CHUNK_WORDS as u64) / self.wpm() as u64
    }
}

impl TryFrom<u16> for ReadingSpeed {
    type Error = InvalidSpeed;

    fn try_from(wpm: u16) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|speed| speed.wpm() == wpm)
            .ok_or(InvalidSpeed(wpm))
    }
}

impl fmt::Display for ReadingSpeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} wpm", self.wpm())
    }
}

/// A words-per-minute value outside the offered set.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct InvalidSpeed(pub u16);

impl fmt::Display for InvalidSpeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unsupported reading speed: {} wpm", self.0)
    }
}
