// ABOUTME: Weight plateau detection from the variance of the most recent samples
// ABOUTME: Short histories return an informational result instead of an error
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitGoal AI

#![allow(clippy::cast_precision_loss)] // Safe: window sizes are small

use crate::config::PlateauConfig;
use fitgoal_core::models::ChronologicalSeries;
use serde::{Deserialize, Serialize};
use tracing::debug;

const PLATEAU_SUGGESTION: &str = "Your weight has been stable for two weeks. Try adjusting \
     your calorie intake by 100-200 kcal or changing your workout routine to restart progress.";

const PROGRESSING_SUGGESTION: &str =
    "Your weight is still changing. Keep following your current plan.";

/// Plateau check outcome
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlateauAnalysis {
    /// Weight variance over the window fell under the threshold
    pub plateau_detected: bool,
    /// Population variance of the window (kg²); absent for short histories
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variance: Option<f64>,
    /// Days examined; absent for short histories
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
    /// Guidance for the user
    pub message: String,
}

/// Weight plateau detector
pub struct PlateauDetector;

impl PlateauDetector {
    /// Detect a plateau over the configured window of most recent samples
    #[must_use]
    pub fn detect_plateau(series: &ChronologicalSeries, config: &PlateauConfig) -> PlateauAnalysis {
        let window = config.window_size;
        if series.len() < window {
            debug!(
                samples = series.len(),
                required = window,
                "Not enough samples for plateau detection"
            );
            return PlateauAnalysis {
                plateau_detected: false,
                variance: None,
                duration: None,
                message: format!(
                    "Log at least {window} entries to check for a plateau ({} so far).",
                    series.len()
                ),
            };
        }

        let weights: Vec<f64> = series.most_recent(window).iter().map(|s| s.weight).collect();
        let variance = population_variance(&weights);
        let plateau_detected = variance < config.variance_threshold;
        debug!(variance, plateau_detected, "Checked weight plateau");

        PlateauAnalysis {
            plateau_detected,
            variance: Some(variance),
            duration: u32::try_from(window).ok(),
            message: if plateau_detected {
                PLATEAU_SUGGESTION
            } else {
                PROGRESSING_SUGGESTION
            }
            .to_owned(),
        }
    }
}

/// Population variance (divides by n)
pub(crate) fn population_variance(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_population_variance() {
        assert!((population_variance(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]) - 4.0).abs() < 1e-12);
        assert!(population_variance(&[70.0; 14]).abs() < 1e-12);
    }
}
