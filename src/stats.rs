//! Summary statistics over a batch of shot counts.

use alloc::vec::Vec;

/// Read-only summary of one strategy over N games.
///
/// `variance` and `std_dev` are population figures. The median of an even
/// number of games is the mean of the two middle values.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct AggregateStatistics {
    pub games: usize,
    pub avg: f64,
    pub median: f64,
    pub variance: f64,
    pub std_dev: f64,
    pub min: u32,
    pub max: u32,
    pub duration_seconds: f64,
}

impl AggregateStatistics {
    /// Summarise `shots`. Returns `None` for an empty slice.
    pub fn from_shots(shots: &[u32], duration_seconds: f64) -> Option<Self> {
        let games = shots.len();
        let min = *shots.iter().min()?;
        let max = *shots.iter().max()?;

        let n = games as f64;
        let avg = shots.iter().map(|&s| s as f64).sum::<f64>() / n;
        let variance = shots
            .iter()
            .map(|&s| {
                let d = s as f64 - avg;
                d * d
            })
            .sum::<f64>()
            / n;

        let mut sorted = shots.to_vec();
        sorted.sort_unstable();
        let mid = games / 2;
        let median = if games % 2 == 0 {
            (sorted[mid - 1] as f64 + sorted[mid] as f64) / 2.0
        } else {
            sorted[mid] as f64
        };

        Some(Self {
            games,
            avg,
            median,
            variance,
            std_dev: libm::sqrt(variance),
            min,
            max,
            duration_seconds,
        })
    }

    /// True when both summaries describe the same distribution, ignoring
    /// wall-clock duration.
    pub fn same_results(&self, other: &Self) -> bool {
        self.games == other.games
            && self.avg.to_bits() == other.avg.to_bits()
            && self.median.to_bits() == other.median.to_bits()
            && self.variance.to_bits() == other.variance.to_bits()
            && self.std_dev.to_bits() == other.std_dev.to_bits()
            && self.min == other.min
            && self.max == other.max
    }
}

/// `(shots, games)` pairs in ascending shot order, omitting empty bins.
pub fn histogram(shots: &[u32]) -> Vec<(u32, usize)> {
    let mut sorted = shots.to_vec();
    sorted.sort_unstable();
    let mut bins: Vec<(u32, usize)> = Vec::new();
    for s in sorted {
        match bins.last_mut() {
            Some((value, count)) if *value == s => *count += 1,
            _ => bins.push((s, 1)),
        }
    }
    bins
}
