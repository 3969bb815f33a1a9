// ABOUTME: Oldest-first wrapper around progress samples used as the analytics input type
// ABOUTME: Normalizes caller ordering once so every computation can assume index 0 is oldest
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitGoal AI

use super::progress::ProgressSample;
use crate::constants::profile_limits::ENERGY_LEVEL_RANGE;
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::slice::Iter;

/// Progress samples ordered oldest-first
///
/// This is the only sample container the analytics accept. Callers that hold
/// newest-first data (the usual database ordering) go through
/// [`ChronologicalSeries::from_newest_first`]; callers with arbitrary ordering
/// use [`ChronologicalSeries::from_unordered`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(try_from = "Vec<ProgressSample>", into = "Vec<ProgressSample>")]
pub struct ChronologicalSeries {
    samples: Vec<ProgressSample>,
}

impl ChronologicalSeries {
    /// Sort arbitrary samples by date, oldest first
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if a sample has a non-positive or non-finite
    /// weight, or an energy level outside 1-10
    pub fn from_unordered(mut samples: Vec<ProgressSample>) -> AppResult<Self> {
        samples.sort_by_key(|sample| sample.date);
        Self::validated(samples)
    }

    /// Accept samples the caller holds most-recent-first
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the samples are not newest-first or contain
    /// invalid values
    pub fn from_newest_first(mut samples: Vec<ProgressSample>) -> AppResult<Self> {
        samples.reverse();
        Self::from_oldest_first(samples)
    }

    /// Accept samples that are already oldest-first
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if any sample is dated before its predecessor or
    /// contains invalid values
    pub fn from_oldest_first(samples: Vec<ProgressSample>) -> AppResult<Self> {
        if let Some(position) = samples
            .windows(2)
            .position(|pair| pair[1].date < pair[0].date)
        {
            return Err(AppError::invalid_input(format!(
                "Samples are not in chronological order at index {}",
                position + 1
            )));
        }
        Self::validated(samples)
    }

    fn validated(samples: Vec<ProgressSample>) -> AppResult<Self> {
        let (min_energy, max_energy) = ENERGY_LEVEL_RANGE;
        for sample in &samples {
            if !sample.weight.is_finite() || sample.weight <= 0.0 {
                return Err(AppError::invalid_input(format!(
                    "Weight must be a positive number, got {} on {}",
                    sample.weight,
                    sample.date.date_naive()
                )));
            }
            if let Some(level) = sample.energy_level {
                if !(min_energy..=max_energy).contains(&level) {
                    return Err(AppError::invalid_input(format!(
                        "Energy level must be between {min_energy} and {max_energy}, got {level}"
                    )));
                }
            }
        }
        Ok(Self { samples })
    }

    /// Number of samples
    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// True when no samples were logged
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// All samples, oldest first
    #[must_use]
    pub fn samples(&self) -> &[ProgressSample] {
        &self.samples
    }

    /// Iterate oldest first
    pub fn iter(&self) -> Iter<'_, ProgressSample> {
        self.samples.iter()
    }

    /// Oldest sample
    #[must_use]
    pub fn first(&self) -> Option<&ProgressSample> {
        self.samples.first()
    }

    /// Most recent sample
    #[must_use]
    pub fn last(&self) -> Option<&ProgressSample> {
        self.samples.last()
    }

    /// Weights in chronological order
    #[must_use]
    pub fn weights(&self) -> Vec<f64> {
        self.samples.iter().map(|sample| sample.weight).collect()
    }

    /// The `count` most recent samples, still oldest first
    #[must_use]
    pub fn most_recent(&self, count: usize) -> &[ProgressSample] {
        let start = self.samples.len().saturating_sub(count);
        &self.samples[start..]
    }
}

impl TryFrom<Vec<ProgressSample>> for ChronologicalSeries {
    type Error = AppError;

    fn try_from(samples: Vec<ProgressSample>) -> Result<Self, Self::Error> {
        Self::from_unordered(samples)
    }
}

impl From<ChronologicalSeries> for Vec<ProgressSample> {
    fn from(series: ChronologicalSeries) -> Self {
        series.samples
    }
}

impl<'a> IntoIterator for &'a ChronologicalSeries {
    type Item = &'a ProgressSample;
    type IntoIter = Iter<'a, ProgressSample>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.iter()
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::errors::ErrorCode;
    use chrono::{Duration, TimeZone, Utc};

    fn day(offset: i64, weight: f64) -> ProgressSample {
        let start = Utc.with_ymd_and_hms(2025, 1, 1, 8, 0, 0).unwrap();
        ProgressSample::new(start + Duration::days(offset), weight)
    }

    #[test]
    fn test_unordered_samples_are_sorted_oldest_first() {
        let series =
            ChronologicalSeries::from_unordered(vec![day(2, 68.0), day(0, 70.0), day(1, 69.0)])
                .unwrap();

        assert_eq!(series.weights(), vec![70.0, 69.0, 68.0]);
    }

    #[test]
    fn test_newest_first_is_reversed() {
        let series =
            ChronologicalSeries::from_newest_first(vec![day(2, 68.0), day(1, 69.0), day(0, 70.0)])
                .unwrap();

        assert_eq!(series.first().unwrap().weight, 70.0);
        assert_eq!(series.last().unwrap().weight, 68.0);
    }

    #[test]
    fn test_out_of_order_input_is_rejected() {
        let result = ChronologicalSeries::from_oldest_first(vec![day(1, 69.0), day(0, 70.0)]);

        assert_eq!(result.unwrap_err().code, ErrorCode::InvalidInput);
    }

    #[test]
    fn test_invalid_energy_level_is_rejected() {
        let result = ChronologicalSeries::from_unordered(vec![day(0, 70.0).with_energy_level(11)]);

        assert!(result.is_err());
    }

    #[test]
    fn test_most_recent_window() {
        let samples = (0..20).map(|i| day(i, 80.0 - i as f64 * 0.1)).collect();
        let series = ChronologicalSeries::from_oldest_first(samples).unwrap();

        let recent = series.most_recent(14);
        assert_eq!(recent.len(), 14);
        assert_eq!(recent.last(), series.last());
        assert_eq!(series.most_recent(100).len(), 20);
    }

    #[test]
    fn test_deserialize_normalizes_order() {
        let json = r#"[
            {"date": "2025-01-03T08:00:00Z", "weight": 68.0},
            {"date": "2025-01-01T08:00:00Z", "weight": 70.0, "mood": "good"}
        ]"#;
        let series: ChronologicalSeries = serde_json::from_str(json).unwrap();

        assert_eq!(series.weights(), vec![70.0, 68.0]);
    }
}
