//! Daily series anchored to a reference date.
//!
//! Each value is `baseline + volatility * z + drift(i)` clamped into a band,
//! where `z` is a standard normal draw and `i` counts days from the oldest.

use chrono::{Duration, NaiveDate};
use risk_core::types::DailyPoint;

use super::rng::SyntheticRng;

/// Shape of a noisy daily series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesSpec {
    /// Level before noise and drift
    pub baseline: f64,
    /// Standard deviation of the daily noise
    pub volatility: f64,
    /// Lower clamp
    pub floor: f64,
    /// Upper clamp
    pub ceiling: f64,
}

impl SeriesSpec {
    /// Unbounded series around `baseline`.
    pub fn new(baseline: f64, volatility: f64) -> Self {
        Self {
            baseline,
            volatility,
            floor: f64::NEG_INFINITY,
            ceiling: f64::INFINITY,
        }
    }

    /// Clamp into `[floor, ceiling]`.
    pub fn clamped(mut self, floor: f64, ceiling: f64) -> Self {
        self.floor = floor;
        self.ceiling = ceiling;
        self
    }

    /// Clamp from below only.
    pub fn floored(mut self, floor: f64) -> Self {
        self.floor = floor;
        self
    }

    /// Clamp `value` into the band.
    pub fn clamp(&self, value: f64) -> f64 {
        value.min(self.ceiling).max(self.floor)
    }

    /// Value for day `i` given a normal draw `z`.
    pub fn value_at(&self, z: f64, drift: f64) -> f64 {
        self.clamp(self.baseline + z * self.volatility + drift)
    }
}

/// The `days` calendar days ending at `reference_date`, oldest first.
pub fn date_window(reference_date: NaiveDate, days: usize) -> impl Iterator<Item = NaiveDate> {
    (0..days).map(move |i| reference_date - Duration::days((days - 1 - i) as i64))
}

/// No drift.
pub fn flat(_day: usize) -> f64 {
    0.0
}

/// Linear drift of `slope` per day once the index passes `start`.
pub fn ramp_after(start: usize, slope: f64) -> impl Fn(usize) -> f64 {
    move |i| {
        if i > start {
            (i - start) as f64 * slope
        } else {
            0.0
        }
    }
}

/// Linear drift of `slope` per day from the first day.
pub fn linear(slope: f64) -> impl Fn(usize) -> f64 {
    move |i| i as f64 * slope
}

/// Generate `days` points ending at `reference_date`.
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use demo_inputs::generator::{generate_daily_series, flat, SeriesSpec, SyntheticRng};
///
/// let reference = NaiveDate::from_ymd_opt(2026, 2, 12).unwrap();
/// let mut rng = SyntheticRng::seeded(1);
/// let spec = SeriesSpec::new(30.0, 3.0).clamped(10.0, 50.0);
/// let series = generate_daily_series(&mut rng, reference, 30, &spec, flat);
///
/// assert_eq!(series.len(), 30);
/// assert_eq!(series.last().unwrap().date, reference);
/// assert!(series.iter().all(|p| (10.0..=50.0).contains(&p.value)));
/// ```
pub fn generate_daily_series<F>(
    rng: &mut SyntheticRng,
    reference_date: NaiveDate,
    days: usize,
    spec: &SeriesSpec,
    drift: F,
) -> Vec<DailyPoint>
where
    F: Fn(usize) -> f64,
{
    date_window(reference_date, days)
        .enumerate()
        .map(|(i, date)| DailyPoint {
            date,
            value: spec.value_at(rng.gaussian(), drift(i)),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn reference() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 2, 12).unwrap()
    }

    #[test]
    fn test_date_window_contiguous() {
        let dates: Vec<_> = date_window(reference(), 30).collect();
        assert_eq!(dates.len(), 30);
        assert_eq!(dates[0], NaiveDate::from_ymd_opt(2026, 1, 14).unwrap());
        assert_eq!(dates[29], reference());
        for pair in dates.windows(2) {
            assert_eq!(pair[1] - pair[0], Duration::days(1));
        }
    }

    #[test]
    fn test_date_window_crosses_month_end() {
        let reference = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let dates: Vec<_> = date_window(reference, 3).collect();
        assert_eq!(dates[0], NaiveDate::from_ymd_opt(2024, 2, 28).unwrap());
        assert_eq!(dates[1], NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
    }

    #[test]
    fn test_empty_series() {
        let mut rng = SyntheticRng::seeded(1);
        let series = generate_daily_series(&mut rng, reference(), 0, &SeriesSpec::new(1.0, 1.0), flat);
        assert!(series.is_empty());
    }

    #[test]
    fn test_zero_volatility_follows_drift() {
        let mut rng = SyntheticRng::seeded(1);
        let spec = SeriesSpec::new(125.0, 0.0).floored(100.0);
        let series = generate_daily_series(&mut rng, reference(), 30, &spec, linear(-0.3));
        assert_relative_eq!(series[0].value, 125.0);
        assert_relative_eq!(series[29].value, 125.0 - 29.0 * 0.3, epsilon = 1e-9);
    }

    #[test]
    fn test_ramp_after() {
        let drift = ramp_after(20, 0.3);
        assert_eq!(drift(20), 0.0);
        assert_relative_eq!(drift(21), 0.3);
        assert_relative_eq!(drift(29), 2.7, epsilon = 1e-12);
    }

    #[test]
    fn test_clamp_band() {
        let spec = SeriesSpec::new(0.0, 1.0).clamped(15.0, 60.0);
        assert_eq!(spec.value_at(-100.0, 0.0), 15.0);
        assert_eq!(spec.value_at(100.0, 0.0), 60.0);
    }
}
