use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use rkscan::{HashStrategy, MatchConfig, analyze, analyze_tokens, analyze_with_config, canonicalize};

const VOCABULARY: &[&str] = &[
    "the", "of", "and", "a", "to", "in", "is", "you", "that", "it", "he", "was", "for", "on",
    "are", "as", "with", "his", "they", "at", "be", "this", "have", "from", "or", "one", "had",
    "by", "word", "but", "not", "what", "all", "were", "we", "when", "your", "can", "said",
    "there", "use", "an", "each", "which", "she", "do", "how", "their", "if", "will", "up",
];

/// Deterministic pseudo-random prose of `words` words.
fn synthetic_text(words: usize, seed: u64) -> String {
    let mut state = seed;
    let mut out = String::with_capacity(words * 5);
    for i in 0..words {
        state = state
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);
        let pick = (state >> 33) as usize % VOCABULARY.len();
        if i > 0 {
            out.push(if i % 17 == 0 { '\n' } else { ' ' });
        }
        out.push_str(VOCABULARY[pick]);
        if i % 11 == 10 {
            out.push(',');
        }
    }
    out
}

/// `source` with every tenth word replaced, so most windows still match.
fn lightly_edited(source: &str) -> String {
    source
        .split_whitespace()
        .enumerate()
        .map(|(i, w)| if i % 10 == 9 { "edited" } else { w })
        .collect::<Vec<_>>()
        .join(" ")
}

fn canonical_bench(c: &mut Criterion) {
    let text = synthetic_text(20_000, 7);
    c.bench_function("canonicalize_20k_words", |b| {
        b.iter(|| {
            let doc = canonicalize(black_box(&text));
            black_box(doc);
        });
    });
}

fn matcher_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("analyze_tokens");
    for words in [200usize, 1_000, 2_000] {
        let source = canonicalize(&synthetic_text(words, 11));
        let suspect = canonicalize(&lightly_edited(&source.normalized_text));
        let source_words = source.words();
        let suspect_words = suspect.words();

        for strategy in [HashStrategy::Rolling, HashStrategy::Recompute] {
            let cfg = MatchConfig::default().with_hash_strategy(strategy);
            group.bench_with_input(
                BenchmarkId::new(format!("{strategy:?}"), words),
                &words,
                |b, _| {
                    b.iter(|| {
                        let result = analyze_tokens(
                            black_box(&source_words),
                            black_box(&suspect_words),
                            &cfg,
                        );
                        black_box(result);
                    });
                },
            );
        }
    }
    group.finish();
}

fn pipeline_bench(c: &mut Criterion) {
    let source = synthetic_text(1_000, 3);
    let suspect = lightly_edited(&source);
    let unrelated = synthetic_text(1_000, 99);
    let cfg = MatchConfig::default().with_max_tokens(10_000);

    c.bench_function("analyze_edited_copy_1k", |b| {
        b.iter(|| black_box(analyze(black_box(&source), black_box(&suspect), 5)));
    });

    // Unrelated text: most suspect windows fall through to the partial scan.
    c.bench_function("analyze_unrelated_1k", |b| {
        b.iter(|| {
            let result = analyze_with_config(black_box(&source), black_box(&unrelated), &cfg)
                .expect("valid config");
            black_box(result);
        });
    });
}

criterion_group!(pipeline_benches, canonical_bench, matcher_bench, pipeline_bench);
criterion_main!(pipeline_benches);
