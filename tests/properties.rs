use proptest::prelude::*;
use rkscan::{analyze, analyze_with_config, HashStrategy, MatchConfig, MatchType, SegmentType};

fn text_strategy() -> impl Strategy<Value = String> {
    // Small vocabulary so windows repeat and collide often.
    prop::collection::vec(
        prop::sample::select(vec!["a", "b", "c", "d", "e", "the", "cat", "Dog!", "x_1", "  "]),
        0..40,
    )
    .prop_map(|words| words.join(" "))
}

proptest! {
    #[test]
    fn result_is_well_formed(
        source in text_strategy(),
        suspect in text_strategy(),
        window in 0usize..8,
    ) {
        let result = analyze(&source, &suspect, window);

        prop_assert!(result.percentage <= 100);
        prop_assert!(result.matched_words <= result.total_words);
        prop_assert_eq!(result.segments.len(), result.total_words);
        prop_assert!(result.trace.len() <= 20);
        prop_assert!(result.window_size <= window);

        for m in &result.matches {
            prop_assert_eq!(m.end_index, m.start_index + result.window_size - 1);
            prop_assert!(m.end_index < result.total_words);
            if m.match_type == MatchType::Exact {
                let covered: Vec<&str> = result.segments[m.start_index..=m.end_index]
                    .iter()
                    .map(|s| s.text.as_str())
                    .collect();
                prop_assert_eq!(covered.join(" "), m.matched_text.clone());
            }
        }

        if result.total_words > 0 {
            let expected = (result.matched_words as f64 / result.total_words as f64 * 100.0).round() as u32;
            prop_assert_eq!(result.percentage, expected);
        } else {
            prop_assert_eq!(result.percentage, 0);
        }
    }

    #[test]
    fn self_comparison_is_total(text in text_strategy(), window in 2usize..8) {
        let result = analyze(&text, &text, window);
        if result.total_words > 0 {
            prop_assert_eq!(result.percentage, 100);
            prop_assert!(result.segments.iter().all(|s| s.segment_type == SegmentType::Exact));
        }
    }

    #[test]
    fn strategies_agree(
        source in text_strategy(),
        suspect in text_strategy(),
        window in 1usize..8,
        prime in 2u64..500,
    ) {
        let base = MatchConfig::new(window).with_hash_params(256, prime).unwrap();
        let rolling = base.clone().with_hash_strategy(HashStrategy::Rolling);
        let recompute = base.with_hash_strategy(HashStrategy::Recompute);
        prop_assert_eq!(
            analyze_with_config(&source, &suspect, &rolling).unwrap(),
            analyze_with_config(&source, &suspect, &recompute).unwrap()
        );
    }
}
