//! Stable sorting over record collections
//!
//! Each domain declares a fixed sort-key enumeration and a comparator per
//! key. Sorting is always stable: equal-key records retain their relative
//! order from the filtered input, keeping results deterministic.

use chrono::{DateTime, Utc};
use std::cmp::Ordering;

/// Trait for records that can be ordered by a domain sort key
pub trait Sortable: Sized {
    /// The per-domain sort-key enumeration
    type Key: Copy;

    /// Compare two records under the given key
    fn compare(&self, other: &Self, key: Self::Key) -> Ordering;

    /// Return a new sequence ordered by the comparator for `key`.
    ///
    /// Uses a stable sort, so ties preserve the input's relative order.
    fn sorted(mut records: Vec<Self>, key: Self::Key) -> Vec<Self> {
        records.sort_by(|a, b| a.compare(b, key));
        records
    }
}

/// Most-recent-first ordering for timestamp keys
pub fn newest_first(a: DateTime<Utc>, b: DateTime<Utc>) -> Ordering {
    b.cmp(&a)
}

/// Soonest-first ordering for timestamp keys (e.g., invoices due next)
pub fn oldest_first(a: DateTime<Utc>, b: DateTime<Utc>) -> Ordering {
    a.cmp(&b)
}

/// Largest-first ordering for numeric keys
pub fn largest_first(a: f64, b: f64) -> Ordering {
    b.total_cmp(&a)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ts(s: &str) -> DateTime<Utc> {
        s.parse().expect("valid RFC 3339 timestamp")
    }

    #[test]
    fn test_newest_first() {
        let older = ts("2024-10-15T00:00:00Z");
        let newer = ts("2024-12-15T00:00:00Z");
        assert_eq!(newest_first(newer, older), Ordering::Less);
        assert_eq!(newest_first(older, newer), Ordering::Greater);
        assert_eq!(newest_first(older, older), Ordering::Equal);
    }

    #[test]
    fn test_oldest_first() {
        let older = ts("2024-10-15T00:00:00Z");
        let newer = ts("2024-12-15T00:00:00Z");
        assert_eq!(oldest_first(older, newer), Ordering::Less);
        assert_eq!(oldest_first(newer, older), Ordering::Greater);
    }

    #[test]
    fn test_largest_first() {
        assert_eq!(largest_first(100.0, 1.0), Ordering::Less);
        assert_eq!(largest_first(1.0, 100.0), Ordering::Greater);
        assert_eq!(largest_first(40.73, 40.73), Ordering::Equal);
    }

    // Stability is exercised end-to-end in the domain sorting tests; here we
    // only pin the sort_by contract on a minimal Sortable.

    #[derive(Debug, Clone, PartialEq)]
    struct Item {
        rank: u8,
        tag: &'static str,
    }

    #[derive(Clone, Copy)]
    struct ByRank;

    impl Sortable for Item {
        type Key = ByRank;

        fn compare(&self, other: &Self, _key: ByRank) -> Ordering {
            other.rank.cmp(&self.rank)
        }
    }

    #[test]
    fn test_sorted_is_stable_for_equal_keys() {
        let items = vec![
            Item { rank: 1, tag: "a" },
            Item { rank: 2, tag: "b" },
            Item { rank: 1, tag: "c" },
            Item { rank: 2, tag: "d" },
        ];

        let sorted = Item::sorted(items, ByRank);
        let tags: Vec<&str> = sorted.iter().map(|i| i.tag).collect();
        assert_eq!(tags, vec!["b", "d", "a", "c"]);
    }
}
