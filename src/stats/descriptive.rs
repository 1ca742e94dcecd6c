use serde::{Serialize, Deserialize};

/// Descriptive summary of one integer series (lengths, word counts).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SeriesSummary {
    pub min: usize,
    pub max: usize,
    pub mean: f64,
    pub median: f64,
    pub percentiles: Vec<Percentile>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Percentile {
    pub rank: u8,
    pub value: f64,
}

/// Summarize a series against a percentile ladder.
///
/// An empty series reports zeros for every field, including each requested
/// ladder entry, so the summary shape does not depend on the data.
pub fn summarize(values: &[usize], ladder: &[u8]) -> SeriesSummary {
    if values.is_empty() {
        return SeriesSummary {
            percentiles: ladder.iter().map(|&rank| Percentile { rank, value: 0.0 }).collect(),
            ..SeriesSummary::default()
        };
    }

    let mut sorted = values.to_vec();
    sorted.sort_unstable();

    let sum: usize = sorted.iter().sum();
    SeriesSummary {
        min: sorted[0],
        max: sorted[sorted.len() - 1],
        mean: sum as f64 / sorted.len() as f64,
        median: percentile_of(&sorted, 50),
        percentiles: ladder
            .iter()
            .map(|&rank| Percentile {
                rank,
                value: percentile_of(&sorted, rank),
            })
            .collect(),
    }
}

/// Linear-interpolated percentile over an already-sorted series.
pub fn percentile_of(sorted: &[usize], rank: u8) -> f64 {
    if sorted.is_empty() {
        return 0.0;
    }

    let k = (sorted.len() - 1) as f64 * rank as f64 / 100.0;
    let floor = k.floor() as usize;
    let fraction = k - floor as f64;

    if floor + 1 < sorted.len() {
        sorted[floor] as f64 * (1.0 - fraction) + sorted[floor + 1] as f64 * fraction
    } else {
        sorted[floor] as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summarizes_simple_series() {
        let summary = summarize(&[10, 20, 30, 40], &[25, 50, 75]);
        assert_eq!(summary.min, 10);
        assert_eq!(summary.max, 40);
        assert_eq!(summary.mean, 25.0);
        assert_eq!(summary.median, 25.0);
        assert_eq!(summary.percentiles[0].value, 17.5);
        assert_eq!(summary.percentiles[2].value, 32.5);
    }

    #[test]
    fn single_value_series() {
        let summary = summarize(&[7], &[25, 50, 75, 90]);
        assert_eq!(summary.min, 7);
        assert_eq!(summary.max, 7);
        assert!(summary.percentiles.iter().all(|p| p.value == 7.0));
    }

    #[test]
    fn empty_series_reports_zeros() {
        let summary = summarize(&[], &[25, 50, 75, 90]);
        assert_eq!(summary.min, 0);
        assert_eq!(summary.max, 0);
        assert_eq!(summary.mean, 0.0);
        assert_eq!(summary.median, 0.0);
        assert_eq!(summary.percentiles.len(), 4);
        assert!(summary.percentiles.iter().all(|p| p.value == 0.0));
    }

    #[test]
    fn percentile_interpolates_between_order_statistics() {
        let sorted = vec![0, 10];
        assert_eq!(percentile_of(&sorted, 0), 0.0);
        assert_eq!(percentile_of(&sorted, 50), 5.0);
        assert_eq!(percentile_of(&sorted, 100), 10.0);
    }
}
