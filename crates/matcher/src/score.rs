//! Matched-word bookkeeping and the similarity percentage.

/// Fixed-size set of matched suspect word indices.
///
/// Marking is idempotent, so overlapping windows never count a word twice.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchedSet {
    flags: Vec<bool>,
    count: usize,
}

impl MatchedSet {
    /// Empty set over `len` suspect words.
    pub fn new(len: usize) -> Self {
        Self {
            flags: vec![false; len],
            count: 0,
        }
    }

    /// Mark `index`; returns `true` if it was not marked before. Indices past
    /// the end are ignored.
    pub fn mark(&mut self, index: usize) -> bool {
        match self.flags.get_mut(index) {
            Some(flag) if !*flag => {
                *flag = true;
                self.count += 1;
                true
            }
            _ => false,
        }
    }

    /// Mark every index in `range`.
    pub fn mark_range(&mut self, range: std::ops::Range<usize>) {
        for index in range {
            self.mark(index);
        }
    }

    pub fn contains(&self, index: usize) -> bool {
        self.flags.get(index).copied().unwrap_or(false)
    }

    /// Number of distinct marked indices.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Size of the index space.
    pub fn len(&self) -> usize {
        self.flags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }

    /// Similarity percentage over the whole index space.
    pub fn percentage(&self) -> u32 {
        similarity_percentage(self.count, self.flags.len())
    }
}

/// `round(matched / total * 100)` with halves rounded away from zero; `0`
/// when `total` is `0`.
pub fn similarity_percentage(matched: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    (matched as f64 / total as f64 * 100.0).round() as u32
}
