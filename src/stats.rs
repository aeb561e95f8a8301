//! Aggregation and ranking of language byte counts.

use crate::github::LanguageByteMap;
use indexmap::IndexMap;

/// Summed bytes per language across repositories, in first-appearance order.
pub type AggregateStats = IndexMap<String, u64>;

/// A language and its share of all aggregated bytes.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedLanguage {
    pub name: String,
    /// 0.0 to 100.0
    pub percentage: f64,
}

impl RankedLanguage {
    pub fn new(name: impl Into<String>, percentage: f64) -> Self {
        Self {
            name: name.into(),
            percentage,
        }
    }
}

/// Sums byte counts per language over `maps`.
///
/// Keys keep the order in which they first appear, which is what ties in
/// [`rank`] fall back to.
pub fn aggregate<'a, I>(maps: I) -> AggregateStats
where
    I: IntoIterator<Item = &'a LanguageByteMap>,
{
    maps.into_iter()
        .flatten()
        .fold(AggregateStats::new(), |mut acc, (lang, &bytes)| {
            let total = acc.entry(lang.clone()).or_insert(0);
            *total = total.saturating_add(bytes);
            acc
        })
}

/// Total bytes across all languages.
pub fn total_bytes(stats: &AggregateStats) -> u64 {
    stats.values().fold(0u64, |acc, &bytes| acc.saturating_add(bytes))
}

/// Converts byte counts into percentage shares, largest first.
///
/// Returns an empty list when there are no bytes at all. The sort is stable,
/// so languages with equal counts keep their aggregation order.
pub fn rank(stats: &AggregateStats) -> Vec<RankedLanguage> {
    let total = total_bytes(stats);
    if total == 0 {
        return Vec::new();
    }

    let mut ranked: Vec<RankedLanguage> = stats
        .iter()
        .map(|(lang, &bytes)| {
            RankedLanguage::new(lang.as_str(), bytes as f64 * 100.0 / total as f64)
        })
        .collect();

    ranked.sort_by(|a, b| b.percentage.total_cmp(&a.percentage));
    ranked
}

/// The first `limit` entries of [`rank`].
pub fn top_languages(stats: &AggregateStats, limit: usize) -> Vec<RankedLanguage> {
    let mut ranked = rank(stats);
    ranked.truncate(limit);
    ranked
}
