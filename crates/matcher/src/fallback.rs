//! Single-word comparison used when the effective window size is below 2.

use fxhash::FxHashSet;
use rolling::WordSequence;

use crate::types::{Segment, SegmentType};

/// Label each suspect word `exact` when its lowercase form occurs anywhere
/// in the source, `original` otherwise. Returns the segments and the number
/// of exact words.
pub fn single_word_segments(source: &WordSequence, suspect: &WordSequence) -> (Vec<Segment>, usize) {
    let vocabulary: FxHashSet<String> = source.words().map(str::to_lowercase).collect();

    let mut matched = 0;
    let segments = suspect
        .words()
        .map(|word| {
            if vocabulary.contains(&word.to_lowercase()) {
                matched += 1;
                Segment {
                    text: word.to_string(),
                    segment_type: SegmentType::Exact,
                    source_index: None,
                }
            } else {
                Segment::original(word)
            }
        })
        .collect();

    (segments, matched)
}
