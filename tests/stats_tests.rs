mod common;

use common::language_map;
use langstats::stats::{aggregate, rank, top_languages, total_bytes, AggregateStats, RankedLanguage};
use proptest::prelude::*;

fn stats(entries: &[(&str, u64)]) -> AggregateStats {
    entries
        .iter()
        .map(|&(name, bytes)| (name.to_string(), bytes))
        .collect()
}

#[test]
fn test_aggregate_sums_across_repositories() {
    let a = language_map(&[("Go", 300)]);
    let b = language_map(&[("Go", 100), ("Rust", 600)]);

    let aggregated = aggregate([&a, &b]);

    assert_eq!(aggregated, stats(&[("Go", 400), ("Rust", 600)]));
    assert_eq!(total_bytes(&aggregated), 1000);
}

#[test]
fn test_aggregate_keeps_first_appearance_order() {
    let a = language_map(&[("Shell", 1), ("C", 2)]);
    let b = language_map(&[("Rust", 3), ("Shell", 4)]);

    let aggregated = aggregate([&a, &b]);

    let names: Vec<&str> = aggregated.keys().map(String::as_str).collect();
    assert_eq!(names, ["Shell", "C", "Rust"]);
}

#[test]
fn test_aggregate_of_nothing_is_empty() {
    let aggregated = aggregate(std::iter::empty());

    assert!(aggregated.is_empty());
    assert_eq!(total_bytes(&aggregated), 0);
}

#[test]
fn test_aggregate_does_not_mutate_inputs() {
    let a = language_map(&[("Go", 300)]);
    let b = language_map(&[("Go", 100)]);

    aggregate([&a, &b]);

    assert_eq!(a, language_map(&[("Go", 300)]));
    assert_eq!(b, language_map(&[("Go", 100)]));
}

#[test]
fn test_aggregate_saturates_instead_of_overflowing() {
    let a = language_map(&[("Huge", u64::MAX)]);
    let b = language_map(&[("Huge", 10)]);

    assert_eq!(aggregate([&a, &b])["Huge"], u64::MAX);
}

#[test]
fn test_rank_go_and_rust_scenario() {
    let ranked = rank(&stats(&[("Go", 400), ("Rust", 600)]));

    assert_eq!(
        ranked,
        vec![
            RankedLanguage::new("Rust", 60.0),
            RankedLanguage::new("Go", 40.0),
        ]
    );
}

#[test]
fn test_rank_zero_total_is_empty() {
    assert!(rank(&AggregateStats::new()).is_empty());
    assert!(rank(&stats(&[("Go", 0), ("Rust", 0)])).is_empty());
}

#[test]
fn test_rank_ties_keep_aggregation_order() {
    let ranked = rank(&stats(&[("Zig", 50), ("Ada", 100), ("C", 50), ("Nim", 50)]));

    let names: Vec<&str> = ranked.iter().map(|l| l.name.as_str()).collect();
    assert_eq!(names, ["Ada", "Zig", "C", "Nim"]);
}

#[test]
fn test_top_languages_default_limit() {
    let entries: Vec<(String, u64)> = (1..=9).map(|i| (format!("Lang{}", i), i * 10)).collect();
    let aggregated: AggregateStats = entries.into_iter().collect();

    let top = top_languages(&aggregated, 6);

    assert_eq!(top.len(), 6);
    assert_eq!(top[0].name, "Lang9");
    assert_eq!(top[5].name, "Lang4");
}

#[test]
fn test_top_languages_zero_limit() {
    assert!(top_languages(&stats(&[("Go", 1)]), 0).is_empty());
}

fn arb_stats() -> impl Strategy<Value = AggregateStats> {
    prop::collection::vec(("[A-Za-z]{1,8}", 0u64..1_000_000), 1..20)
        .prop_map(|entries| entries.into_iter().collect())
}

proptest! {
    #[test]
    fn full_ranking_sums_to_one_hundred(aggregated in arb_stats()) {
        prop_assume!(total_bytes(&aggregated) > 0);

        let sum: f64 = rank(&aggregated).iter().map(|l| l.percentage).sum();

        prop_assert!((sum - 100.0).abs() < 1e-9, "sum was {}", sum);
    }

    #[test]
    fn truncated_ranking_is_prefix(aggregated in arb_stats(), limit in 0usize..25) {
        let full = rank(&aggregated);
        let top = top_languages(&aggregated, limit);

        prop_assert!(top.len() <= limit);
        prop_assert_eq!(&full[..top.len()], &top[..]);
        let sum: f64 = top.iter().map(|l| l.percentage).sum();
        prop_assert!(sum <= 100.0 + 1e-9);
    }

    #[test]
    fn ranking_is_sorted_descending(aggregated in arb_stats()) {
        let ranked = rank(&aggregated);

        for pair in ranked.windows(2) {
            prop_assert!(pair[0].percentage >= pair[1].percentage);
        }
    }

    #[test]
    fn ranking_is_stable_for_equal_counts(names in prop::collection::hash_set("[a-z]{1,6}", 2..10), bytes in 1u64..1000) {
        let order: Vec<String> = names.into_iter().collect();
        let aggregated: AggregateStats = order.iter().map(|name| (name.clone(), bytes)).collect();

        let ranked: Vec<String> = rank(&aggregated).into_iter().map(|l| l.name).collect();

        prop_assert_eq!(ranked, order);
    }
}
