//! # rkscan Matcher (`matcher`)
//!
//! ## Purpose
//!
//! `matcher` compares a suspect document against a source document, both
//! already reduced to canonical word tokens (see the `canonical` crate), and
//! reports which suspect words were copied.
//!
//! Every window of `W` consecutive suspect words is checked in two passes:
//!
//! 1. **Exact.** The window's hash selects a bucket of the source
//!    [`PatternIndex`](rolling::PatternIndex); the first candidate with equal
//!    text is the match. The modulus is small, so hash equality alone proves
//!    nothing.
//! 2. **Partial.** With no exact hit, source windows are scanned from the
//!    left for the first one containing at least `ceil(W * partial_ratio)` of
//!    the window's words, but not all of them.
//!
//! `W` is the requested size clamped to both documents' word counts. Below 2
//! the engine compares single words instead.
//!
//! ## Core Types
//!
//! - [`MatchConfig`]: window size, partial ratio, trace limit, hash
//!   parameters and strategy, optional token cap.
//! - [`AnalysisResult`]: percentage, counts, [`Match`] list, per-word
//!   [`Segment`]s and a [`TraceStep`] log of the first windows.
//! - [`MatchError`]: configuration and input-limit failures. The engine
//!   itself never fails.
//!
//! ## Example Usage
//!
//! ```
//! use matcher::{analyze_tokens, MatchConfig, SegmentType};
//!
//! let source = ["the", "cat", "sat", "on", "the", "mat"];
//! let suspect = ["a", "cat", "sat", "on", "the", "mat"];
//!
//! let result = analyze_tokens(&source, &suspect, &MatchConfig::new(3));
//! assert_eq!(result.total_words, 6);
//! // "a cat sat" shares two words with "the cat sat": a partial match, and
//! // the first match covering a word decides its label.
//! assert_eq!(result.segments[0].segment_type, SegmentType::Partial);
//! assert_eq!(result.segments[2].segment_type, SegmentType::Partial);
//! assert_eq!(result.segments[3].segment_type, SegmentType::Exact);
//! assert_eq!(result.matched_words, 5);
//! assert_eq!(result.percentage, 83);
//! ```
//!
//! ## Observability
//!
//! The engine emits `tracing` events: one `trace` event per window decision
//! and a `debug` summary per analysis.

pub mod annotate;
pub mod engine;
pub mod fallback;
pub mod partial;
pub mod score;
pub mod trace;
pub mod types;

pub use crate::annotate::annotate_segments;
pub use crate::engine::{analyze_sequences, analyze_tokens, effective_window_size};
pub use crate::fallback::single_word_segments;
pub use crate::partial::{find_partial, partial_threshold, PartialHit};
pub use crate::score::{similarity_percentage, MatchedSet};
pub use crate::trace::StepTracer;
pub use crate::types::{
    AnalysisMode, AnalysisResult, DocumentRole, Match, MatchConfig, MatchError, MatchType,
    Segment, SegmentType, TraceStep,
};
