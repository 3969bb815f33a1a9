// ABOUTME: Linear weight trend from the first and last sample of a chronological series
// ABOUTME: Reports total and weekly change with direction and pace classification
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitGoal AI

#![allow(clippy::cast_precision_loss)] // Safe: sample counts are small

use crate::config::TrendConfig;
use fitgoal_core::constants::{sample_requirements::MIN_TREND_SAMPLES, time::DAYS_PER_WEEK};
use fitgoal_core::errors::{AppError, AppResult};
use fitgoal_core::models::ChronologicalSeries;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Direction of weight change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    /// Weight went down
    Losing,
    /// Weight went up
    Gaining,
    /// No net change
    Maintaining,
}

/// Speed of weight change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendPace {
    /// Weekly change above the configured threshold
    Fast,
    /// Anything else
    Moderate,
}

/// Qualitative weight trend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendSummary {
    /// Last weight minus first weight (kg)
    pub total_change: f64,
    /// `total_change / samples * 7` (kg)
    pub weekly_change: f64,
    /// Sign of the total change
    pub direction: TrendDirection,
    /// Fast when |weekly change| exceeds the threshold
    pub pace: TrendPace,
}

/// Weight trend calculator
pub struct TrendCalculator;

impl TrendCalculator {
    /// Calculate the trend over a chronological series
    ///
    /// The weekly rate divides by the number of samples, not the number of
    /// days spanned, so it assumes roughly one sample per day.
    ///
    /// # Errors
    ///
    /// Returns `InsufficientData` with fewer than two samples
    pub fn calculate_trend(
        series: &ChronologicalSeries,
        config: &TrendConfig,
    ) -> AppResult<TrendSummary> {
        let (Some(first), Some(last)) = (series.first(), series.last()) else {
            return Err(AppError::insufficient_data(MIN_TREND_SAMPLES, 0));
        };
        if series.len() < MIN_TREND_SAMPLES {
            return Err(AppError::insufficient_data(MIN_TREND_SAMPLES, series.len()));
        }

        let total_change = last.weight - first.weight;
        let weekly_change = total_change / series.len() as f64 * DAYS_PER_WEEK;

        let direction = if total_change < 0.0 {
            TrendDirection::Losing
        } else if total_change > 0.0 {
            TrendDirection::Gaining
        } else {
            TrendDirection::Maintaining
        };
        let pace = if weekly_change.abs() > config.fast_pace_kg_per_week {
            TrendPace::Fast
        } else {
            TrendPace::Moderate
        };

        debug!(
            samples = series.len(),
            total_change, weekly_change, ?direction, ?pace, "Calculated weight trend"
        );

        Ok(TrendSummary {
            total_change,
            weekly_change,
            direction,
            pace,
        })
    }
}
