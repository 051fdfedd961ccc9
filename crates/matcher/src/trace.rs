//! Step trace of the first window decisions.

use crate::types::{MatchType, TraceStep};

/// Records a [`TraceStep`] for each of the first `limit` windows and
/// ignores the rest.
#[derive(Debug, Clone)]
pub struct StepTracer {
    limit: usize,
    steps: Vec<TraceStep>,
}

impl StepTracer {
    pub fn new(limit: usize) -> Self {
        Self {
            limit,
            steps: Vec::with_capacity(limit.min(64)),
        }
    }

    /// Whether the next window will still be recorded.
    pub fn is_recording(&self) -> bool {
        self.steps.len() < self.limit
    }

    /// Record one window. `verdict` is the match type and the source text it
    /// was verified against, or `None` when the window matched nothing.
    pub fn record(&mut self, window_text: &str, hash: u64, verdict: Option<(MatchType, &str)>) {
        if !self.is_recording() {
            return;
        }
        let step = self.steps.len() + 1;
        let (description, source_match) = match verdict {
            Some((kind, source)) => (
                format!("Hash {hash} matched! Verified: {kind} match"),
                Some(source.to_string()),
            ),
            None => (format!("Hash {hash} - No match found"), None),
        };
        self.steps.push(TraceStep {
            step,
            description,
            window_text: window_text.to_string(),
            hash_value: hash,
            matched: source_match.is_some(),
            source_match,
        });
    }

    pub fn into_steps(self) -> Vec<TraceStep> {
        self.steps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_up_to_limit() {
        let mut tracer = StepTracer::new(2);
        tracer.record("a b", 1, None);
        tracer.record("b c", 2, Some((MatchType::Exact, "b c")));
        tracer.record("c d", 3, None);
        let steps = tracer.into_steps();
        assert_eq!(steps.len(), 2);
        assert_eq!(steps[0].step, 1);
        assert_eq!(steps[1].step, 2);
    }

    #[test]
    fn descriptions() {
        let mut tracer = StepTracer::new(20);
        tracer.record("x y", 7, None);
        tracer.record("p q", 42, Some((MatchType::Partial, "p r")));
        let steps = tracer.into_steps();

        assert_eq!(steps[0].description, "Hash 7 - No match found");
        assert!(!steps[0].matched);
        assert_eq!(steps[0].source_match, None);

        assert_eq!(steps[1].description, "Hash 42 matched! Verified: partial match");
        assert!(steps[1].matched);
        assert_eq!(steps[1].source_match.as_deref(), Some("p r"));
        assert_eq!(steps[1].window_text, "p q");
        assert_eq!(steps[1].hash_value, 42);
    }

    #[test]
    fn zero_limit_records_nothing() {
        let mut tracer = StepTracer::new(0);
        assert!(!tracer.is_recording());
        tracer.record("a", 0, None);
        assert!(tracer.into_steps().is_empty());
    }
}
