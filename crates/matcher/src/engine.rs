use std::time::Instant;

use rolling::{PatternIndex, WordSequence};
use tracing::{debug, trace};

use crate::annotate::annotate_segments;
use crate::fallback::single_word_segments;
use crate::partial::{find_partial, partial_threshold};
use crate::score::{similarity_percentage, MatchedSet};
use crate::trace::StepTracer;
use crate::types::{AnalysisMode, AnalysisResult, Match, MatchConfig, MatchType, Segment};


/// `min(requested, source_len, suspect_len)`.
pub fn effective_window_size(requested: usize, source_len: usize, suspect_len: usize) -> usize {
    requested.min(source_len).min(suspect_len)
}

/// Compare two token sequences.
///
/// Never fails: empty documents and windows larger than either document are
/// handled by clamping and the single-word fallback. `cfg` is trusted here;
/// run [`MatchConfig::validate`] on configs from outside the process.
pub fn analyze_tokens<S, T>(source: &[S], suspect: &[T], cfg: &MatchConfig) -> AnalysisResult
where
    S: AsRef<str>,
    T: AsRef<str>,
{
    analyze_sequences(
        &WordSequence::from_words(source),
        &WordSequence::from_words(suspect),
        cfg,
    )
}

/// [`analyze_tokens`] over prebuilt word sequences.
pub fn analyze_sequences(
    source: &WordSequence,
    suspect: &WordSequence,
    cfg: &MatchConfig,
) -> AnalysisResult {
    let started = Instant::now();
    let width = effective_window_size(cfg.window_size, source.len(), suspect.len());

    let result = if source.is_empty() || suspect.is_empty() {
        unmatched(suspect, width)
    } else if width < 2 {
        single_word(source, suspect, width)
    } else {
        windowed(source, suspect, width, cfg)
    };

    debug!(
        source_words = source.len(),
        suspect_words = suspect.len(),
        window_size = width,
        mode = ?result.mode,
        matches = result.matches.len(),
        matched_words = result.matched_words,
        percentage = result.percentage,
        elapsed_micros = started.elapsed().as_micros() as u64,
        "analysis complete"
    );
    result
}

/// Either document has no words: nothing can match.
fn unmatched(suspect: &WordSequence, width: usize) -> AnalysisResult {
    AnalysisResult {
        total_words: suspect.len(),
        segments: suspect.words().map(Segment::original).collect(),
        window_size: width,
        mode: AnalysisMode::Windowed,
        ..AnalysisResult::default()
    }
}

fn single_word(source: &WordSequence, suspect: &WordSequence, width: usize) -> AnalysisResult {
    let (segments, matched_words) = single_word_segments(source, suspect);
    AnalysisResult {
        percentage: similarity_percentage(matched_words, suspect.len()),
        total_words: suspect.len(),
        matched_words,
        matches: Vec::new(),
        trace: Vec::new(),
        segments,
        window_size: width,
        mode: AnalysisMode::SingleWord,
    }
}

fn windowed(
    source: &WordSequence,
    suspect: &WordSequence,
    width: usize,
    cfg: &MatchConfig,
) -> AnalysisResult {
    let index = PatternIndex::build(source, width, cfg.hash, cfg.hash_strategy);
    let source_words: Vec<&str> = source.words().collect();
    let suspect_words: Vec<&str> = suspect.words().collect();
    let threshold = partial_threshold(width, cfg.partial_ratio);

    let mut matches = Vec::new();
    let mut matched = MatchedSet::new(suspect.len());
    let mut tracer = StepTracer::new(cfg.trace_limit);

    for window in suspect.windows(width, cfg.hash, cfg.hash_strategy) {
        let start = window.start;

        let verdict = if let Some(entry) = index.find_exact(window.hash, window.text) {
            matched.mark_range(start..start + width);
            matches.push(Match {
                start_index: start,
                end_index: start + width - 1,
                matched_text: window.text.to_string(),
                source_index: entry.start_index,
                match_type: MatchType::Exact,
                hash_value: window.hash,
            });
            Some((MatchType::Exact, entry.window_text))
        } else if let Some(hit) =
            find_partial(&source_words, &suspect_words[start..start + width], threshold)
        {
            for offset in &hit.members {
                matched.mark(start + offset);
            }
            matches.push(Match {
                start_index: start,
                end_index: start + width - 1,
                matched_text: window.text.to_string(),
                source_index: hit.source_index,
                match_type: MatchType::Partial,
                hash_value: window.hash,
            });
            source
                .window_text(hit.source_index, width)
                .map(|text| (MatchType::Partial, text))
        } else {
            None
        };

        trace!(
            start,
            hash = window.hash,
            verdict = ?verdict.map(|(kind, _)| kind),
            "window"
        );
        tracer.record(window.text, window.hash, verdict);
    }

    debug!(
        indexed_windows = index.window_count(),
        buckets = index.occupied_buckets(),
        collisions = index.collision_count(),
        partial_threshold = threshold,
        "pattern index"
    );

    AnalysisResult {
        percentage: matched.percentage(),
        total_words: suspect.len(),
        matched_words: matched.count(),
        segments: annotate_segments(suspect, &matches),
        matches,
        trace: tracer.into_steps(),
        window_size: width,
        mode: AnalysisMode::Windowed,
    }
}
