//! Splitting input into disjoint chunks for parallel counting.
//!
//! Cut points are placed near equal byte offsets and then moved forward to
//! the next separator character, so no word ever straddles two chunks.
//! Concatenating the chunks in order reproduces the input exactly.

use super::tokenizer::Delimiters;

/// A contiguous slice of the input owned by one worker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chunk<'a> {
    /// Chunk identifier (position in input order)
    pub id: usize,
    /// Byte offset of the chunk within the input
    pub offset: usize,
    /// Chunk text
    pub text: &'a str,
}

impl Chunk<'_> {
    /// Size of the chunk in bytes.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Check if the chunk holds no bytes.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Split `text` into at most `parts` chunks aligned on separators.
///
/// Always returns at least one chunk. Fewer than `parts` chunks come back
/// when the input has too few separators to cut at.
pub fn partition<'a>(text: &'a str, parts: usize, delimiters: &Delimiters) -> Vec<Chunk<'a>> {
    let len = text.len();
    let parts = parts.max(1);
    let mut chunks = Vec::with_capacity(parts);
    let mut start = 0;

    for i in 1..parts {
        let mut cut = (len / parts * i).max(start);
        while cut < len && !text.is_char_boundary(cut) {
            cut += 1;
        }
        cut = match text[cut..].find(|c: char| delimiters.is_separator(c)) {
            Some(offset) => cut + offset,
            None => len,
        };
        if cut > start {
            chunks.push(Chunk {
                id: chunks.len(),
                offset: start,
                text: &text[start..cut],
            });
            start = cut;
        }
        if start == len {
            break;
        }
    }

    if start < len || chunks.is_empty() {
        chunks.push(Chunk {
            id: chunks.len(),
            offset: start,
            text: &text[start..],
        });
    }
    chunks
}
