//! Per-word annotation of the suspect document.

use rolling::WordSequence;

use crate::types::{Match, Segment};

/// Label every suspect word with the first match, in production order, whose
/// interval contains it. Words no match covers are `original`.
///
/// Every word inside a partial match's interval is labelled partial, even
/// the ones that did not count towards the score.
pub fn annotate_segments(suspect: &WordSequence, matches: &[Match]) -> Vec<Segment> {
    let len = suspect.len();
    let mut owner: Vec<Option<&Match>> = vec![None; len];
    for m in matches {
        for index in m.span() {
            match owner.get_mut(index) {
                Some(slot) if slot.is_none() => *slot = Some(m),
                Some(_) => {}
                None => break,
            }
        }
    }

    suspect
        .words()
        .zip(owner)
        .map(|(word, owner)| match owner {
            Some(m) => Segment {
                text: word.to_string(),
                segment_type: m.match_type.into(),
                source_index: Some(m.source_index),
            },
            None => Segment::original(word),
        })
        .collect()
}
