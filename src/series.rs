// SPDX-License-Identifier: MPL-2.0
//! Synthetic monthly adoption numbers for the chart card.
//!
//! Generated once per session and never mutated afterwards.

use chrono::Month;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Lowest generated monthly value.
const MIN_ADOPTIONS: u32 = 20;
/// Highest generated monthly value.
const MAX_ADOPTIONS: u32 = 120;

/// One bar of the chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthlyPoint {
    pub month: Month,
    pub value: u32,
}

impl MonthlyPoint {
    /// Three-letter month label ("Jan", "Feb", ...).
    #[must_use]
    pub fn label(&self) -> &'static str {
        let name = self.month.name();
        &name[..3]
    }
}

/// Exactly twelve points, January first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdoptionSeries([MonthlyPoint; 12]);

impl AdoptionSeries {
    /// Builds a series from twelve values, January first.
    #[must_use]
    pub fn from_values(values: [u32; 12]) -> Self {
        let mut month = Month::January;
        Self(values.map(|value| {
            let point = MonthlyPoint { month, value };
            month = month.succ();
            point
        }))
    }

    pub fn points(&self) -> impl Iterator<Item = &MonthlyPoint> {
        self.0.iter()
    }

    /// Largest value, used to scale the bars.
    #[must_use]
    pub fn max_value(&self) -> u32 {
        self.0.iter().map(|p| p.value).max().unwrap_or(0)
    }

    #[must_use]
    pub fn total(&self) -> u64 {
        self.0.iter().map(|p| u64::from(p.value)).sum()
    }
}

/// Source of the monthly series.
pub trait SeriesProvider {
    fn generate_monthly_series(&mut self) -> AdoptionSeries;
}

/// Uniform random values in a plausible range.
#[derive(Debug, Clone)]
pub struct SyntheticSeries {
    rng: StdRng,
}

impl SyntheticSeries {
    /// Reproducible provider, used by tests and `--seed`.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Provider seeded from OS entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }
}

impl SeriesProvider for SyntheticSeries {
    fn generate_monthly_series(&mut self) -> AdoptionSeries {
        let mut values = [0u32; 12];
        for value in &mut values {
            *value = self.rng.gen_range(MIN_ADOPTIONS..=MAX_ADOPTIONS);
        }
        AdoptionSeries::from_values(values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn series_has_twelve_ordered_months() {
        let series = SyntheticSeries::seeded(7).generate_monthly_series();
        let labels: Vec<_> = series.points().map(MonthlyPoint::label).collect();
        assert_eq!(
            labels,
            vec![
                "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov",
                "Dec"
            ]
        );
    }

    #[test]
    fn values_stay_in_range() {
        let series = SyntheticSeries::seeded(42).generate_monthly_series();
        assert!(series
            .points()
            .all(|p| (MIN_ADOPTIONS..=MAX_ADOPTIONS).contains(&p.value)));
        assert!(series.max_value() >= MIN_ADOPTIONS);
    }

    #[test]
    fn same_seed_same_series() {
        let a = SyntheticSeries::seeded(3).generate_monthly_series();
        let b = SyntheticSeries::seeded(3).generate_monthly_series();
        assert_eq!(a, b);
    }

    #[test]
    fn total_sums_all_months() {
        let series = AdoptionSeries::from_values([1; 12]);
        assert_eq!(series.total(), 12);
        assert_eq!(series.max_value(), 1);
    }
}
