//! Partitioning of raw text into fixed-size word groups.

use alloc::{string::String, vec::Vec};
use core::ops::Index;

/// Words per chunk. The last chunk of a sequence may hold fewer.
pub const CHUNK_WORDS: usize = 3;

const WORD_SEPARATOR: u8 = b' ';

/// One reveal unit: up to [`CHUNK_WORDS`] consecutive words joined by single spaces.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Chunk {
    text: String,
    word_count: u8,
}

impl Chunk {
    fn from_span(span: &str, word_count: u8) -> Self {
        Self {
            text: String::from(span),
            word_count,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Number of words in this chunk, counting empty words produced by
    /// repeated separators.
    pub const fn word_count(&self) -> u8 {
        self.word_count
    }

    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.text.split(' ')
    }
}

/// Ordered chunks derived from one load.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ChunkSequence {
    chunks: Vec<Chunk>,
}

impl ChunkSequence {
    pub const fn empty() -> Self {
        Self { chunks: Vec::new() }
    }

    /// Partition `text` on the literal space character.
    ///
    /// Separators are not collapsed: `"a  b"` holds the words `a`, `""`, `b`.
    /// Empty input yields a single empty chunk.
    pub fn from_text(text: &str) -> Self {
        let mut chunks = Vec::with_capacity(text.len() / 8 + 1);
        let mut start = 0usize;
        let mut separators = 0usize;

        for (idx, byte) in text.bytes().enumerate() {
            if byte != WORD_SEPARATOR {
                continue;
            }

            separators += 1;
            if separators == CHUNK_WORDS {
                chunks.push(Chunk::from_span(&text[start..idx], CHUNK_WORDS as u8));
                start = idx + 1;
                separators = 0;
            }
        }

        chunks.push(Chunk::from_span(&text[start..], (separators + 1) as u8));
        Self { chunks }
    }

    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Chunk> {
        self.chunks.get(index)
    }

    pub fn iter(&self) -> core::slice::Iter<'_, Chunk> {
        self.chunks.iter()
    }

    pub fn as_slice(&self) -> &[Chunk] {
        &self.chunks
    }
}

impl Index<usize> for ChunkSequence {
    type Output = Chunk;

    fn index(&self, index: usize) -> &Self::Output {
        &self.chunks[index]
    }
}

impl<'a> IntoIterator for &'a ChunkSequence {
    type Item = &'a Chunk;
    type IntoIter = core::slice::Iter<'a, Chunk>;

    fn into_iter(self) -> Self::IntoIter {
        self.chunks.iter()
    }
}
