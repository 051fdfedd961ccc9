//! Stress tests: large and numerous documents complete and stay well-formed.

use std::time::{Duration, Instant};

use rkscan::{analyze, analyze_with_config, MatchConfig};

fn generate_text(word_count: usize, salt: usize) -> String {
    let words = [
        "lorem", "ipsum", "dolor", "sit", "amet", "consectetur", "adipiscing", "elit", "sed",
        "do", "eiusmod", "tempor", "incididunt", "ut", "labore", "et", "dolore", "magna",
    ];
    (0..word_count)
        .map(|i| words[(i * 7 + salt) % words.len()])
        .collect::<Vec<_>>()
        .join(" ")
}

#[test]
fn stress_test_large_document() {
    let source = generate_text(3_000, 0);
    let suspect = generate_text(3_000, 3);

    let start = Instant::now();
    let result = analyze(&source, &suspect, 5);
    let elapsed = start.elapsed();

    assert_eq!(result.total_words, 3_000);
    assert_eq!(result.segments.len(), 3_000);
    assert!(result.trace.len() <= 20);
    assert!(
        elapsed < Duration::from_secs(30),
        "3k-word analysis took {elapsed:?}"
    );
}

#[test]
fn stress_test_many_small_documents() {
    for i in 0..200 {
        let source = generate_text(20 + i % 13, i);
        let suspect = generate_text(20 + i % 7, i + 1);
        let result = analyze(&source, &suspect, 5);
        assert!(result.percentage <= 100, "Document {i}");
        assert_eq!(result.segments.len(), result.total_words);
    }
}

#[test]
fn stress_test_repeated_processing() {
    let source = generate_text(500, 1);
    let suspect = generate_text(500, 1);
    let cfg = MatchConfig::default().with_max_tokens(1_000);
    for _ in 0..20 {
        let result = analyze_with_config(&source, &suspect, &cfg).unwrap();
        assert_eq!(result.percentage, 100);
    }
}

#[test]
fn stress_test_various_window_sizes() {
    let source = generate_text(400, 2);
    let suspect = generate_text(400, 5);
    for window in [1, 2, 3, 5, 8, 13, 50, 400, 1_000] {
        let result = analyze(&source, &suspect, window);
        assert_eq!(result.window_size, window.min(400));
        assert_eq!(result.segments.len(), 400);
    }
}
