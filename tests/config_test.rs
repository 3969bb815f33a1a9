// ABOUTME: Unit tests for analytics configuration defaults, overrides and validation
// ABOUTME: Environment-touching tests run serially and clean up after themselves
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitGoal AI

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use fitgoal_ai::config::{AnalyticsConfig, ConfigError};
use fitgoal_ai::intelligence::algorithms::BmrFormula;
use serial_test::serial;

#[test]
fn test_default_config_validation() {
    common::init_test_logging();
    let config = AnalyticsConfig::default();
    assert!(config.validate().is_ok());
    assert_eq!(config.plateau.window_size, 14);
    assert_eq!(config.prediction.polynomial_degree, 2);
    assert_eq!(config.nutrition.bmr.formula, BmrFormula::MifflinStJeor);
}

#[test]
fn test_invalid_score_weights() {
    let mut config = AnalyticsConfig::default();
    config.clustering.score_weights.calories = 0.8;

    assert!(matches!(
        config.validate(),
        Err(ConfigError::InvalidWeights(_))
    ));
}

#[test]
fn test_inverted_calorie_bounds() {
    let mut config = AnalyticsConfig::default();
    config.nutrition.calorie_targets.min_daily_calories = 4500.0;

    assert!(matches!(config.validate(), Err(ConfigError::InvalidRange(_))));
}

#[test]
fn test_zero_degree_is_rejected() {
    let mut config = AnalyticsConfig::default();
    config.prediction.polynomial_degree = 0;

    assert!(matches!(
        config.validate(),
        Err(ConfigError::ValueOutOfRange(_))
    ));
}

#[test]
#[serial]
fn test_environment_variable_override() {
    std::env::set_var("FITGOAL_PLATEAU_WINDOW", "10");
    std::env::set_var("FITGOAL_BMR_FORMULA", "hb");
    std::env::set_var("FITGOAL_TREND_FAST_PACE_KG", "1.5");

    let config = AnalyticsConfig::load();

    std::env::remove_var("FITGOAL_PLATEAU_WINDOW");
    std::env::remove_var("FITGOAL_BMR_FORMULA");
    std::env::remove_var("FITGOAL_TREND_FAST_PACE_KG");

    let config = config.unwrap();
    assert_eq!(config.plateau.window_size, 10);
    assert_eq!(config.nutrition.bmr.formula, BmrFormula::HarrisBenedict);
    assert!((config.trend.fast_pace_kg_per_week - 1.5).abs() < 0.001);
}

#[test]
#[serial]
fn test_unparseable_override_is_an_error() {
    std::env::set_var("FITGOAL_PLATEAU_WINDOW", "abc");
    let result = AnalyticsConfig::load();
    std::env::remove_var("FITGOAL_PLATEAU_WINDOW");

    let err = result.unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
    assert!(err.to_string().contains("FITGOAL_PLATEAU_WINDOW"));
}

#[test]
#[serial]
fn test_override_failing_validation_is_an_error() {
    std::env::set_var("FITGOAL_MIN_DAILY_CALORIES", "5000");
    let result = AnalyticsConfig::load();
    std::env::remove_var("FITGOAL_MIN_DAILY_CALORIES");

    assert!(result.is_err());
}

#[test]
#[serial]
fn test_load_without_overrides_matches_defaults() {
    let config = AnalyticsConfig::load().unwrap();
    let defaults = AnalyticsConfig::default();

    assert_eq!(config.plateau.window_size, defaults.plateau.window_size);
    assert_eq!(
        config.clustering.kmeans.default_k,
        defaults.clustering.kmeans.default_k
    );
}
