// ABOUTME: Integration tests for polynomial weight prediction
// ABOUTME: Covers projection values, horizon validation, degree fallback and confidence flagging
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitGoal AI

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use chrono::Duration;
use fitgoal_ai::config::AnalyticsConfig;
use fitgoal_ai::errors::ErrorCode;
use fitgoal_ai::intelligence::{TrendDirection, WeightPredictor};

#[test]
fn test_linear_loss_projects_forward() {
    common::init_test_logging();
    let series = common::series(&[70.0, 69.0, 68.0, 67.0, 66.0]);
    let as_of = common::base_date() + Duration::days(4);

    let result =
        WeightPredictor::predict_weight(&series, 7, as_of, &AnalyticsConfig::default()).unwrap();

    assert_eq!(result.predictions.len(), 7);
    let weights: Vec<f64> = result.predictions.iter().map(|p| p.weight).collect();
    assert_eq!(weights, vec![65.0, 64.0, 63.0, 62.0, 61.0, 60.0, 59.0]);
    for (index, prediction) in result.predictions.iter().enumerate() {
        let day = u32::try_from(index).unwrap() + 1;
        assert_eq!(prediction.day, day);
        assert_eq!(prediction.date, as_of + Duration::days(i64::from(day)));
    }
    assert!((result.r2 - 1.0).abs() < 1e-9);
    assert!(!result.low_confidence);
    assert!(result.equation.starts_with("y = "));
    assert_eq!(result.trend.direction, TrendDirection::Losing);
}

#[test]
fn test_weights_are_rounded_to_one_decimal() {
    let series = common::series(&[80.0, 79.73, 79.41, 79.22, 78.9, 78.77]);
    let result = WeightPredictor::predict_weight(
        &series,
        10,
        common::base_date(),
        &AnalyticsConfig::default(),
    )
    .unwrap();

    for prediction in &result.predictions {
        let scaled = prediction.weight * 10.0;
        assert!((scaled - scaled.round()).abs() < 1e-9);
    }
}

#[test]
fn test_two_samples_fall_back_to_linear_fit() {
    let series = common::series(&[80.0, 79.0]);
    let result =
        WeightPredictor::predict_weight(&series, 3, common::base_date(), &AnalyticsConfig::default())
            .unwrap();

    let weights: Vec<f64> = result.predictions.iter().map(|p| p.weight).collect();
    assert_eq!(weights, vec![78.0, 77.0, 76.0]);
}

#[test]
fn test_invalid_horizons_are_rejected() {
    let series = common::series(&[70.0, 69.5, 69.0]);
    let config = AnalyticsConfig::default();

    for days in [0, -3, 366] {
        let err =
            WeightPredictor::predict_weight(&series, days, common::base_date(), &config).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidParameter, "days_ahead = {days}");
    }

    let result =
        WeightPredictor::predict_weight(&series, 365, common::base_date(), &config).unwrap();
    assert_eq!(result.predictions.len(), 365);
}

#[test]
fn test_single_sample_is_insufficient() {
    let series = common::series(&[70.0]);
    let err =
        WeightPredictor::predict_weight(&series, 7, common::base_date(), &AnalyticsConfig::default())
            .unwrap_err();

    assert_eq!(err.code, ErrorCode::InsufficientData);
}

#[test]
fn test_noisy_series_is_flagged_low_confidence() {
    let series = common::series(&[70.0, 72.0, 69.0, 71.0, 70.0, 72.0, 69.0, 71.0]);
    let result =
        WeightPredictor::predict_weight(&series, 14, common::base_date(), &AnalyticsConfig::default())
            .unwrap();

    assert!(result.r2 < 0.3);
    assert!(result.low_confidence);
}

#[test]
fn test_projections_are_not_clamped() {
    // Accelerating gain: the quadratic term dominates a year out
    let series = common::series(&[70.0, 70.0, 71.0, 73.0, 76.0]);
    let result = WeightPredictor::predict_weight(
        &series,
        365,
        common::base_date(),
        &AnalyticsConfig::default(),
    )
    .unwrap();

    let last = result.final_prediction().unwrap();
    assert_eq!(last.day, 365);
    assert!(last.weight > 1000.0, "projection was {}", last.weight);
    assert!(!result.low_confidence);
}
