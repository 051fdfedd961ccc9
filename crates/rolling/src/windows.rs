//! Word windows over one document.
//!
//! A [`WordSequence`] stores the document's words joined by single spaces
//! plus the byte span of each word, so every window's text is a borrowed
//! slice of one buffer. [`Windows`] slides a fixed number of words across
//! it, step 1, and hashes each window's joined text.
//!
//! With [`HashStrategy::Rolling`] the hash of window `i + 1` is derived from
//! window `i` by dropping the leading `"word "` block and appending the
//! trailing `" word"` block. Per-step cost depends on those two words only,
//! not on the window width. [`HashStrategy::Recompute`] hashes every window
//! from scratch; both strategies produce identical values.

use std::ops::Range;

use serde::Serialize;

use crate::config::{HashParams, HashStrategy};
use crate::hash::{append_trailing, code_len, drop_leading, extend_hash, polynomial_hash, pow_mod};

/// Words of one document joined by single spaces, with per-word byte spans.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordSequence {
    text: String,
    spans: Vec<Range<usize>>,
}

impl WordSequence {
    /// Join `words` with single spaces. Words are expected to be canonical
    /// (non-empty, no inner whitespace); this function does not check.
    pub fn from_words<S: AsRef<str>>(words: &[S]) -> Self {
        let capacity = words.iter().map(|w| w.as_ref().len() + 1).sum();
        let mut text = String::with_capacity(capacity);
        let mut spans = Vec::with_capacity(words.len());
        for word in words {
            if !text.is_empty() {
                text.push(' ');
            }
            let start = text.len();
            text.push_str(word.as_ref());
            spans.push(start..text.len());
        }
        Self { text, spans }
    }

    /// Number of words.
    pub fn len(&self) -> usize {
        self.spans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    /// The word at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`.
    pub fn word(&self, index: usize) -> &str {
        &self.text[self.spans[index].clone()]
    }

    /// Iterate words in document order.
    pub fn words(&self) -> impl Iterator<Item = &str> + '_ {
        self.spans.iter().map(move |span| &self.text[span.clone()])
    }

    /// Joined text of `width` words starting at `start`, or `None` when the
    /// window is empty or runs past the end.
    pub fn window_text(&self, start: usize, width: usize) -> Option<&str> {
        if width == 0 || start.checked_add(width)? > self.len() {
            return None;
        }
        let begin = self.spans[start].start;
        let end = self.spans[start + width - 1].end;
        Some(&self.text[begin..end])
    }

    /// Number of full windows of `width` words: `len - width + 1`, or 0.
    pub fn window_count(&self, width: usize) -> usize {
        if width == 0 || width > self.len() {
            0
        } else {
            self.len() - width + 1
        }
    }

    /// Slide windows of `width` words from start index 0 to
    /// `len - width` inclusive.
    pub fn windows(&self, width: usize, params: HashParams, strategy: HashStrategy) -> Windows<'_> {
        Windows {
            seq: self,
            width,
            params,
            strategy,
            next: 0,
            prev: None,
        }
    }
}

/// One window of a document: start word index, joined text and hash.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Window<'a> {
    pub start: usize,
    pub text: &'a str,
    pub hash: u64,
}

/// Iterator over the windows of a [`WordSequence`].
#[derive(Debug, Clone)]
pub struct Windows<'a> {
    seq: &'a WordSequence,
    width: usize,
    params: HashParams,
    strategy: HashStrategy,
    next: usize,
    // Hash and code-unit length of the previously emitted window.
    prev: Option<(u64, usize)>,
}

impl Windows<'_> {
    fn rolled_hash(&self, start: usize, prev_hash: u64, prev_len: usize) -> (u64, usize) {
        let params = &self.params;
        let leaving = self.seq.word(start - 1);
        let arriving = self.seq.word(start + self.width - 1);

        // Leading block "leaving " and trailing block " arriving".
        let lead_len = code_len(leaving) + 1;
        let lead_hash = extend_hash(polynomial_hash(leaving, params), " ", params);
        let weight = pow_mod(params.base(), (prev_len - lead_len) as u64, params.prime());
        let hash = drop_leading(prev_hash, lead_hash, weight, params);

        let tail_len = code_len(arriving) + 1;
        let tail_hash = extend_hash(polynomial_hash(" ", params), arriving, params);
        let shift = pow_mod(params.base(), tail_len as u64, params.prime());
        let hash = append_trailing(hash, tail_hash, shift, params);

        (hash, prev_len - lead_len + tail_len)
    }
}

impl<'a> Iterator for Windows<'a> {
    type Item = Window<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let start = self.next;
        let text = self.seq.window_text(start, self.width)?;

        // A one-word window has no separator to roll across; hash it directly.
        let (hash, len) = match self.prev {
            Some((prev_hash, prev_len))
                if self.strategy == HashStrategy::Rolling && self.width > 1 =>
            {
                self.rolled_hash(start, prev_hash, prev_len)
            }
            _ => (polynomial_hash(text, &self.params), code_len(text)),
        };

        self.prev = Some((hash, len));
        self.next += 1;
        Some(Window { start, text, hash })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.seq.window_count(self.width).saturating_sub(self.next);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Windows<'_> {}
