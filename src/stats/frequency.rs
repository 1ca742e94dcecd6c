use std::collections::HashMap;
use serde::{Serialize, Deserialize};

/// Occurrence counts with deterministic ordering.
///
/// Insertion order is remembered so top-N views break count ties by
/// first-seen key, never by hash iteration order.
#[derive(Debug, Clone, Default)]
pub struct FrequencyTable {
    counts: HashMap<String, u64>,
    order: Vec<String>,
}

/// One entry of a ranked frequency view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TermCount {
    pub term: String,
    pub count: u64,
}

impl FrequencyTable {
    pub fn new() -> Self {
        FrequencyTable::default()
    }

    pub fn observe(&mut self, key: &str) {
        if let Some(count) = self.counts.get_mut(key) {
            *count += 1;
        } else {
            self.counts.insert(key.to_string(), 1);
            self.order.push(key.to_string());
        }
    }

    pub fn count(&self, key: &str) -> u64 {
        self.counts.get(key).copied().unwrap_or(0)
    }

    /// Number of distinct keys observed.
    pub fn distinct(&self) -> usize {
        self.order.len()
    }

    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    /// Top `n` entries by count descending, ties by first-seen order.
    pub fn top(&self, n: usize) -> Vec<TermCount> {
        let mut entries: Vec<(String, u64, usize)> = self
            .order
            .iter()
            .enumerate()
            .map(|(seen, key)| (key.clone(), self.counts[key], seen))
            .collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1).then(a.2.cmp(&b.2)));

        entries
            .into_iter()
            .take(n)
            .map(|(term, count, _)| TermCount { term, count })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accumulates_counts() {
        let mut table = FrequencyTable::new();
        table.observe("seven");
        table.observe("seven");
        table.observe("day");
        assert_eq!(table.count("seven"), 2);
        assert_eq!(table.count("day"), 1);
        assert_eq!(table.count("absent"), 0);
        assert_eq!(table.distinct(), 2);
        assert_eq!(table.total(), 3);
    }

    #[test]
    fn top_ranks_by_count_then_first_seen() {
        let mut table = FrequencyTable::new();
        for key in ["light", "dark", "light", "void", "dark", "deep"] {
            table.observe(key);
        }

        let top = table.top(3);
        assert_eq!(top[0].term, "light");
        assert_eq!(top[1].term, "dark");
        // "void" and "deep" both count 1; "void" was seen first.
        assert_eq!(top[2].term, "void");
    }

    #[test]
    fn top_truncates_to_n() {
        let mut table = FrequencyTable::new();
        table.observe("a");
        table.observe("b");
        assert_eq!(table.top(1).len(), 1);
        assert_eq!(table.top(10).len(), 2);
    }
}
