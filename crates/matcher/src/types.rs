use rolling::{HashParams, HashParamsError, HashStrategy};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use std::fmt;

/// How a suspect window was matched against the source.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum MatchType {
    /// Hash hit verified by full text equality.
    Exact,
    /// Enough of the window's words appear in one source window.
    Partial,
}

impl fmt::Display for MatchType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchType::Exact => f.write_str("exact"),
            MatchType::Partial => f.write_str("partial"),
        }
    }
}

/// Classification of one suspect word in the annotated output.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum SegmentType {
    Exact,
    Partial,
    Original,
}

impl From<MatchType> for SegmentType {
    fn from(kind: MatchType) -> Self {
        match kind {
            MatchType::Exact => SegmentType::Exact,
            MatchType::Partial => SegmentType::Partial,
        }
    }
}

/// Which path produced an [`AnalysisResult`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisMode {
    /// Word windows of the effective size were hashed and compared.
    #[default]
    Windowed,
    /// Effective window size fell below 2; words were compared one by one.
    SingleWord,
}

/// A suspect window that matched the source.
///
/// `start_index..=end_index` are suspect word positions; `source_index` is
/// the start word of the source window it matched.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Match {
    pub start_index: usize,
    pub end_index: usize,
    pub matched_text: String,
    pub source_index: usize,
    pub match_type: MatchType,
    pub hash_value: u64,
}

impl Match {
    /// Suspect word positions covered by this match, inclusive on both ends.
    pub fn span(&self) -> std::ops::RangeInclusive<usize> {
        self.start_index..=self.end_index
    }
}

/// One suspect word with its classification.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Segment {
    pub text: String,
    pub segment_type: SegmentType,
    /// Source window start of the match that claimed this word; absent for
    /// original words and for single-word matches.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_index: Option<usize>,
}

impl Segment {
    pub fn original(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            segment_type: SegmentType::Original,
            source_index: None,
        }
    }
}

/// Human-readable record of one window decision.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TraceStep {
    /// 1-based window ordinal.
    pub step: usize,
    pub description: String,
    pub window_text: String,
    pub hash_value: u64,
    pub matched: bool,
    /// Text of the verified source window; absent when nothing matched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_match: Option<String>,
}

/// Full output of one analysis.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    /// `round(matched_words / total_words * 100)`, 0 when the suspect is empty.
    pub percentage: u32,
    pub total_words: usize,
    pub matched_words: usize,
    pub matches: Vec<Match>,
    pub trace: Vec<TraceStep>,
    pub segments: Vec<Segment>,
    /// Effective window size actually used.
    pub window_size: usize,
    pub mode: AnalysisMode,
}

impl AnalysisResult {
    /// Number of segments labelled `kind`.
    pub fn segment_count(&self, kind: SegmentType) -> usize {
        self.segments
            .iter()
            .filter(|segment| segment.segment_type == kind)
            .count()
    }

    /// Number of matches of `kind`.
    pub fn match_count(&self, kind: MatchType) -> usize {
        self.matches
            .iter()
            .filter(|m| m.match_type == kind)
            .count()
    }
}

/// Which of the two documents a limit or diagnostic refers to.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DocumentRole {
    Source,
    Suspect,
}

impl fmt::Display for DocumentRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentRole::Source => f.write_str("source"),
            DocumentRole::Suspect => f.write_str("suspect"),
        }
    }
}

/// Tuning knobs for one analysis.
///
/// `MatchConfig` is cheap to clone and serde-friendly so it can be embedded
/// in higher-level configs. The engine itself never fails; callers that
/// accept untrusted configs run [`MatchConfig::validate`] first.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MatchConfig {
    /// Configuration schema version.
    #[serde(default = "MatchConfig::default_version")]
    pub version: u32,
    /// Requested window size in words; the engine clamps it to both
    /// documents' word counts.
    #[serde(default = "MatchConfig::default_window_size")]
    pub window_size: usize,
    /// Fraction of a window's words that must appear in one source window
    /// for a partial match. In `(0, 1]`.
    #[serde(default = "MatchConfig::default_partial_ratio")]
    pub partial_ratio: f64,
    /// Number of leading windows recorded in the trace.
    #[serde(default = "MatchConfig::default_trace_limit")]
    pub trace_limit: usize,
    #[serde(default)]
    pub hash: HashParams,
    #[serde(default)]
    pub hash_strategy: HashStrategy,
    /// Optional cap on tokens per document, enforced by [`check_token_limit`].
    ///
    /// [`check_token_limit`]: MatchConfig::check_token_limit
    #[serde(default)]
    pub max_tokens: Option<usize>,
}

impl MatchConfig {
    pub(crate) fn default_version() -> u32 {
        1
    }

    pub(crate) fn default_window_size() -> usize {
        5
    }

    pub(crate) fn default_partial_ratio() -> f64 {
        0.6
    }

    pub(crate) fn default_trace_limit() -> usize {
        20
    }

    pub fn new(window_size: usize) -> Self {
        Self {
            window_size,
            ..Self::default()
        }
    }

    pub fn with_window_size(mut self, window_size: usize) -> Self {
        self.window_size = window_size;
        self
    }

    pub fn with_partial_ratio(mut self, partial_ratio: f64) -> Self {
        self.partial_ratio = partial_ratio;
        self
    }

    pub fn with_trace_limit(mut self, trace_limit: usize) -> Self {
        self.trace_limit = trace_limit;
        self
    }

    pub fn with_hash(mut self, hash: HashParams) -> Self {
        self.hash = hash;
        self
    }

    /// Validate and install a `(base, prime)` pair.
    pub fn with_hash_params(mut self, base: u64, prime: u64) -> Result<Self, MatchError> {
        self.hash = HashParams::new(base, prime)?;
        Ok(self)
    }

    pub fn with_hash_strategy(mut self, strategy: HashStrategy) -> Self {
        self.hash_strategy = strategy;
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: usize) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }

    /// Validate the configuration for a single request.
    pub fn validate(&self) -> Result<(), MatchError> {
        if self.version == 0 {
            return Err(MatchError::InvalidConfig(
                "version must be >= 1".into(),
            ));
        }
        if !self.partial_ratio.is_finite()
            || self.partial_ratio <= 0.0
            || self.partial_ratio > 1.0
        {
            return Err(MatchError::InvalidConfig(format!(
                "partial_ratio must be in (0.0, 1.0] (got {})",
                self.partial_ratio
            )));
        }
        if self.max_tokens == Some(0) {
            return Err(MatchError::InvalidConfig(
                "max_tokens must be greater than zero".into(),
            ));
        }
        Ok(())
    }

    /// Reject a document whose token count exceeds `max_tokens`.
    pub fn check_token_limit(&self, document: DocumentRole, tokens: usize) -> Result<(), MatchError> {
        match self.max_tokens {
            Some(limit) if tokens > limit => Err(MatchError::InputTooLarge {
                document,
                tokens,
                limit,
            }),
            _ => Ok(()),
        }
    }
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            version: Self::default_version(),
            window_size: Self::default_window_size(),
            partial_ratio: Self::default_partial_ratio(),
            trace_limit: Self::default_trace_limit(),
            hash: HashParams::default(),
            hash_strategy: HashStrategy::default(),
            max_tokens: None,
        }
    }
}

/// Errors produced by the matching layer.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum MatchError {
    /// Invalid configuration.
    #[error("invalid match config: {0}")]
    InvalidConfig(String),
    /// Hash parameters rejected.
    #[error(transparent)]
    Hash(#[from] HashParamsError),
    /// A document exceeds the configured token cap.
    #[error("{document} document has {tokens} tokens, limit is {limit}")]
    InputTooLarge {
        document: DocumentRole,
        tokens: usize,
        limit: usize,
    },
}
