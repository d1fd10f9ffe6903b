//! Frequency tables over a flat list of records.
//!
//! ```text
//! records ──field──▶ occurrences ──count──▶ [{key, count}] ──sort──▶ top-K ──▶ shares
//! ```
//!
//! Scalar fields contribute exactly one occurrence per record; a missing or
//! empty value lands in a caller-chosen sentinel bucket. List fields
//! contribute one occurrence per element, verbatim, and a missing list
//! contributes none. Grouping is exact string equality. Buckets are ordered by
//! count descending and equal counts keep the order in which their keys were
//! first seen.

use std::collections::HashMap;

use dcc_core::responses::{Bucket, DistributionCard, EmptyState, ShareBucket};

/// Sentinel used by company-level distributions.
pub const UNSPECIFIED: &str = "Unspecified";

/// Sentinel used by culture distributions.
pub const NOT_SPECIFIED: &str = "Not specified";

/// Empty-state title of a distribution card with no rows.
pub const NO_DATA: &str = "No data available";

/// Insertion-ordered counter.
#[derive(Default)]
struct Tally {
    index: HashMap<String, usize>,
    buckets: Vec<Bucket>,
}

impl Tally {
    fn add(&mut self, key: &str) {
        if let Some(&i) = self.index.get(key) {
            self.buckets[i].count += 1;
        } else {
            self.index.insert(key.to_string(), self.buckets.len());
            self.buckets.push(Bucket {
                key: key.to_string(),
                count: 1,
            });
        }
    }

    fn into_sorted(self) -> Vec<Bucket> {
        let mut buckets = self.buckets;
        // `sort_by` is stable, which keeps first-seen order among ties.
        buckets.sort_by(|a, b| b.count.cmp(&a.count));
        buckets
    }
}

/// Count a scalar field, folding missing and empty values into `sentinel`.
pub fn aggregate<T>(
    records: &[T],
    field: impl Fn(&T) -> Option<&str>,
    sentinel: &str,
) -> Vec<Bucket> {
    let mut tally = Tally::default();
    for record in records {
        match field(record) {
            Some(value) if !value.is_empty() => tally.add(value),
            _ => tally.add(sentinel),
        }
    }
    tally.into_sorted()
}

/// Count every element of a list field. Elements are taken as given.
pub fn aggregate_list<T>(
    records: &[T],
    field: impl Fn(&T) -> Option<&[String]>,
) -> Vec<Bucket> {
    let mut tally = Tally::default();
    for record in records {
        for value in field(record).unwrap_or_default() {
            tally.add(value);
        }
    }
    tally.into_sorted()
}

/// Keep the first `k` buckets of an already sorted table.
#[must_use]
pub fn top_k(mut buckets: Vec<Bucket>, k: usize) -> Vec<Bucket> {
    buckets.truncate(k);
    buckets
}

/// Sum of all counts in a table.
#[must_use]
pub fn total(buckets: &[Bucket]) -> u64 {
    buckets.iter().map(|b| b.count).sum()
}

/// `count / total * 100`, or `0.0` for an empty table.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn percentage(count: u64, total: u64) -> f64 {
    if total == 0 {
        0.0
    } else {
        count as f64 / total as f64 * 100.0
    }
}

/// Attach each bucket's share of `total`.
#[must_use]
pub fn with_shares(buckets: Vec<Bucket>, total: u64) -> Vec<ShareBucket> {
    buckets
        .into_iter()
        .map(|b| ShareBucket {
            percentage: percentage(b.count, total),
            key: b.key,
            count: b.count,
        })
        .collect()
}

/// Build a titled card from a full table.
///
/// `total` and the percentages are computed over the whole table, before the
/// optional top-K cut.
#[must_use]
pub fn distribution_card(
    title: &str,
    buckets: Vec<Bucket>,
    top: Option<usize>,
) -> DistributionCard {
    let total = total(&buckets);
    let buckets = match top {
        Some(k) => top_k(buckets, k),
        None => buckets,
    };
    let empty_state = buckets.is_empty().then(|| EmptyState::titled(NO_DATA));
    DistributionCard {
        title: title.to_string(),
        total,
        buckets: with_shares(buckets, total),
        empty_state,
    }
}
