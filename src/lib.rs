//! Workspace umbrella crate for rkscan, a windowed Rabin-Karp text similarity
//! engine.
//!
//! This crate stitches canonicalization and window matching together so
//! callers can compare two raw texts with a single API entry point:
//!
//! ```
//! let result = rkscan::analyze("The cat sat on the mat.", "the CAT sat on the mat", 5);
//! assert_eq!(result.percentage, 100);
//! assert_eq!(result.total_words, 6);
//! ```
//!
//! [`analyze`] accepts any input and never fails. [`analyze_with_config`]
//! takes a caller-supplied [`MatchConfig`], validates it and enforces its
//! token cap before matching.

pub mod config;

pub use canonical::{
    CanonicalizedDocument, Token, canonicalize, collapse_whitespace, is_separator, normalize_text,
    tokenize,
};
pub use config::{ConfigLoadError, RkscanConfig};
pub use matcher::{
    AnalysisMode, AnalysisResult, DocumentRole, Match, MatchConfig, MatchError, MatchType,
    Segment, SegmentType, TraceStep, analyze_tokens,
};
pub use rolling::{HashParams, HashParamsError, HashStrategy};

use rolling::WordSequence;
use std::sync::{Arc, OnceLock, RwLock};
use std::time::{Duration, Instant};
use thiserror::Error;
use tracing::{Span, info, info_span, warn};

/// Window size used when the caller does not choose one.
pub const DEFAULT_WINDOW_SIZE: usize = 5;

/// Errors that can occur while running an analysis through the pipeline.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum PipelineError {
    #[error("match failure: {0}")]
    Match(#[from] MatchError),
}

/// Metrics observer for pipeline stages.
pub trait AnalysisMetrics: Send + Sync {
    fn record_canonical(&self, latency: Duration, document: DocumentRole, tokens: usize);
    fn record_analysis(&self, latency: Duration, result: Result<u32, PipelineError>);
}

/// Install or clear the global analysis metrics recorder.
pub fn set_analysis_metrics(recorder: Option<Arc<dyn AnalysisMetrics>>) {
    let mut guard = metrics_lock()
        .write()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    *guard = recorder;
}

fn metrics_lock() -> &'static RwLock<Option<Arc<dyn AnalysisMetrics>>> {
    static METRICS: OnceLock<RwLock<Option<Arc<dyn AnalysisMetrics>>>> = OnceLock::new();
    METRICS.get_or_init(|| RwLock::new(None))
}

fn metrics_recorder() -> Option<Arc<dyn AnalysisMetrics>> {
    let guard = metrics_lock()
        .read()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    guard.clone()
}

struct MetricsSpan {
    recorder: Arc<dyn AnalysisMetrics>,
    start: Instant,
}

impl MetricsSpan {
    fn start() -> Option<Self> {
        metrics_recorder().map(|recorder| Self {
            recorder,
            start: Instant::now(),
        })
    }

    fn record_canonical(self, document: DocumentRole, tokens: usize) {
        self.recorder
            .record_canonical(self.start.elapsed(), document, tokens);
    }

    fn record_analysis(self, result: Result<u32, PipelineError>) {
        self.recorder.record_analysis(self.start.elapsed(), result);
    }
}

/// Compare `source_text` and `suspect_text` with windows of `window_size`
/// words and the default matcher settings.
///
/// Never fails: empty or punctuation-only texts, and texts shorter than the
/// window, all produce a well-formed result.
pub fn analyze(source_text: &str, suspect_text: &str, window_size: usize) -> AnalysisResult {
    let cfg = MatchConfig::new(window_size);
    let span = analyze_span(&cfg);
    let _guard = span.enter();

    let started = Instant::now();
    let analysis_metrics = MetricsSpan::start();
    let result = run(source_text, suspect_text, &cfg);
    log_success(&result, started);
    if let Some(span) = analysis_metrics {
        span.record_analysis(Ok(result.percentage));
    }
    result
}

/// Compare two texts under an explicit configuration.
///
/// The configuration is validated first and, when `max_tokens` is set, each
/// document's token count is checked after canonicalization.
pub fn analyze_with_config(
    source_text: &str,
    suspect_text: &str,
    cfg: &MatchConfig,
) -> Result<AnalysisResult, PipelineError> {
    let span = analyze_span(cfg);
    let _guard = span.enter();

    let started = Instant::now();
    let analysis_metrics = MetricsSpan::start();
    let outcome = checked_run(source_text, suspect_text, cfg);
    match &outcome {
        Ok(result) => log_success(result, started),
        Err(err) => warn!(
            error = %err,
            elapsed_micros = started.elapsed().as_micros() as u64,
            "analyze_failure"
        ),
    }
    if let Some(span) = analysis_metrics {
        span.record_analysis(
            outcome
                .as_ref()
                .map(|result| result.percentage)
                .map_err(|err| err.clone()),
        );
    }
    outcome
}

/// Compare two already canonicalized documents.
pub fn analyze_documents(
    source: &CanonicalizedDocument,
    suspect: &CanonicalizedDocument,
    cfg: &MatchConfig,
) -> AnalysisResult {
    matcher::analyze_sequences(
        &WordSequence::from_words(&source.words()),
        &WordSequence::from_words(&suspect.words()),
        cfg,
    )
}

fn checked_run(
    source_text: &str,
    suspect_text: &str,
    cfg: &MatchConfig,
) -> Result<AnalysisResult, PipelineError> {
    cfg.validate()?;
    let source = canonicalize_document(source_text, DocumentRole::Source);
    cfg.check_token_limit(DocumentRole::Source, source.len())?;
    let suspect = canonicalize_document(suspect_text, DocumentRole::Suspect);
    cfg.check_token_limit(DocumentRole::Suspect, suspect.len())?;
    Ok(analyze_documents(&source, &suspect, cfg))
}

fn run(source_text: &str, suspect_text: &str, cfg: &MatchConfig) -> AnalysisResult {
    let source = canonicalize_document(source_text, DocumentRole::Source);
    let suspect = canonicalize_document(suspect_text, DocumentRole::Suspect);
    analyze_documents(&source, &suspect, cfg)
}

fn canonicalize_document(text: &str, document: DocumentRole) -> CanonicalizedDocument {
    let canonical_metrics = MetricsSpan::start();
    let doc = canonicalize(text);
    if let Some(span) = canonical_metrics {
        span.record_canonical(document, doc.len());
    }
    doc
}

fn analyze_span(cfg: &MatchConfig) -> Span {
    info_span!(
        "rkscan.analyze",
        window_size = cfg.window_size,
        hash_strategy = ?cfg.hash_strategy
    )
}

fn log_success(result: &AnalysisResult, started: Instant) {
    info!(
        percentage = result.percentage,
        matched_words = result.matched_words,
        total_words = result.total_words,
        window_size = result.window_size,
        mode = ?result.mode,
        elapsed_micros = started.elapsed().as_micros() as u64,
        "analyze_success"
    );
}
