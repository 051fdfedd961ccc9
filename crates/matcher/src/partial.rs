//! Partial (bag-of-words overlap) matching.
//!
//! A suspect window that found no exact hit is compared against every
//! source window of the same width, lowest start first. Overlap is counted
//! by membership, not position: each suspect word that appears anywhere in
//! the source window counts, duplicates included. The first source window
//! whose overlap reaches the threshold without covering the whole window
//! wins.

/// Minimum overlap for a partial match: `ceil(width * ratio)`.
pub fn partial_threshold(width: usize, ratio: f64) -> usize {
    (width as f64 * ratio).ceil() as usize
}

/// A qualifying source window and the suspect window offsets found in it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartialHit {
    /// Start word of the source window.
    pub source_index: usize,
    /// Offsets within the suspect window whose word is in the source window.
    pub members: Vec<usize>,
}

/// Scan source windows of `suspect_window.len()` words for the first one
/// sharing at least `threshold` (and fewer than all) words with
/// `suspect_window`.
pub fn find_partial(source_words: &[&str], suspect_window: &[&str], threshold: usize) -> Option<PartialHit> {
    let width = suspect_window.len();
    if width == 0 || width > source_words.len() {
        return None;
    }

    for (source_index, source_window) in source_words.windows(width).enumerate() {
        let count = suspect_window
            .iter()
            .filter(|&&word| source_window.contains(&word))
            .count();
        if count >= threshold && count < width {
            let members = suspect_window
                .iter()
                .enumerate()
                .filter(|&(_, &word)| source_window.contains(&word))
                .map(|(offset, _)| offset)
                .collect();
            return Some(PartialHit {
                source_index,
                members,
            });
        }
    }
    None
}
