// ABOUTME: Polynomial weight forecasting over sample index with fit quality reporting
// ABOUTME: Flags low-confidence fits and nests the linear trend summary in each result
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitGoal AI

#![allow(clippy::cast_precision_loss)] // Safe: sample indices and horizons are small

use crate::algorithms::PolynomialFit;
use crate::config::AnalyticsConfig;
use crate::trend::{TrendCalculator, TrendSummary};
use chrono::{DateTime, Duration, Utc};
use fitgoal_core::constants::sample_requirements::MIN_TREND_SAMPLES;
use fitgoal_core::errors::{AppError, AppResult};
use fitgoal_core::models::ChronologicalSeries;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// One projected day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictedWeight {
    /// Days after `as_of`, starting at 1
    pub day: u32,
    /// Calendar instant of the projection
    pub date: DateTime<Utc>,
    /// Projected weight (kg), one decimal place
    pub weight: f64,
}

/// Weight forecast with fit diagnostics
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionResult {
    /// Projections for days `1..=days_ahead`
    pub predictions: Vec<PredictedWeight>,
    /// Fitted polynomial, e.g. `y = 0.0100x² - 1.2000x + 80.0000`
    pub equation: String,
    /// Coefficient of determination over the logged samples
    pub r2: f64,
    /// Set when r² falls below the configured threshold
    pub low_confidence: bool,
    /// Linear trend over the same samples
    pub trend: TrendSummary,
}

impl PredictionResult {
    /// Last projected point, if any
    #[must_use]
    pub fn final_prediction(&self) -> Option<&PredictedWeight> {
        self.predictions.last()
    }
}

/// Polynomial weight predictor
pub struct WeightPredictor;

impl WeightPredictor {
    /// Project weight `days_ahead` days past the most recent sample
    ///
    /// Sample `i` (oldest first) is fitted at `x = i`, and day `d` is evaluated
    /// at `x = last_index + d`. Projections are not clamped; a poor fit can
    /// diverge quickly, which `low_confidence` signals.
    ///
    /// # Errors
    ///
    /// Returns `InsufficientData` with fewer than two samples and
    /// `InvalidParameter` when `days_ahead` is not in `1..=max_days_ahead`
    pub fn predict_weight(
        series: &ChronologicalSeries,
        days_ahead: i64,
        as_of: DateTime<Utc>,
        config: &AnalyticsConfig,
    ) -> AppResult<PredictionResult> {
        if series.len() < MIN_TREND_SAMPLES {
            return Err(AppError::insufficient_data(MIN_TREND_SAMPLES, series.len()));
        }
        let max_days = config.prediction.max_days_ahead;
        let days = u32::try_from(days_ahead)
            .ok()
            .filter(|days| (1..=max_days).contains(days))
            .ok_or_else(|| {
                AppError::invalid_parameter(format!(
                    "days_ahead must be between 1 and {max_days}, got {days_ahead}"
                ))
            })?;

        let y = series.weights();
        let x: Vec<f64> = (0..y.len()).map(|i| i as f64).collect();
        let fit = PolynomialFit::fit(&x, &y, config.prediction.polynomial_degree)?;
        let last_index = (y.len() - 1) as f64;

        let predictions = (1..=days)
            .map(|day| PredictedWeight {
                day,
                date: as_of + Duration::days(i64::from(day)),
                weight: round_to_tenth(fit.evaluate(last_index + f64::from(day))),
            })
            .collect();

        let r2 = fit.r_squared();
        let low_confidence = r2 < config.prediction.low_confidence_r2;
        if low_confidence {
            warn!(
                r2,
                threshold = config.prediction.low_confidence_r2,
                samples = series.len(),
                "Weight prediction fit is weak; long-range projections are unreliable"
            );
        }
        debug!(
            degree = fit.degree(),
            r2,
            days_ahead = days,
            "Fitted weight prediction"
        );

        Ok(PredictionResult {
            predictions,
            equation: fit.equation(),
            r2,
            low_confidence,
            trend: TrendCalculator::calculate_trend(series, &config.trend)?,
        })
    }
}

fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
