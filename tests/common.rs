// ABOUTME: Shared test utilities and fixture builders for integration tests
// ABOUTME: Provides quiet logging plus sample series, profile and recipe fixtures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitGoal AI
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `fitgoal_ai`
//!
//! This module provides common fixtures to reduce duplication across
//! integration tests.

use chrono::{DateTime, Duration, TimeZone, Utc};
use fitgoal_ai::models::{
    ActivityLevel, ChronologicalSeries, Gender, Goal, NutritionFacts, ProgressSample,
    RecipeCandidate, UserProfile,
};
use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // Check for TEST_LOG environment variable to control test logging level
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN, // Default to WARN for quiet tests
        };

        let _ = tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init();
    });
}

/// Fixed reference instant so date arithmetic is reproducible
pub fn base_date() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, 6, 8, 0, 0).unwrap()
}

/// One sample per day starting at `base_date()`, oldest first
pub fn daily_samples(weights: &[f64]) -> Vec<ProgressSample> {
    weights
        .iter()
        .enumerate()
        .map(|(day, &weight)| {
            ProgressSample::new(base_date() + Duration::days(day as i64), weight)
        })
        .collect()
}

/// Chronological series of daily weights
pub fn series(weights: &[f64]) -> ChronologicalSeries {
    ChronologicalSeries::from_oldest_first(daily_samples(weights)).unwrap()
}

/// 80 kg, 180 cm, 30 year old moderately active male aiming to lose weight
pub fn sample_profile() -> UserProfile {
    UserProfile {
        weight: 80.0,
        height: 180.0,
        age: 30,
        gender: Gender::Male,
        activity_level: ActivityLevel::Moderate,
        goal: Goal::Lose,
        target_weight: None,
        target_date: None,
    }
}

/// Recipe with the given macros
pub fn recipe(id: &str, calories: f64, protein: f64, carbs: f64, fat: f64) -> RecipeCandidate {
    RecipeCandidate::new(
        id,
        format!("Recipe {id}"),
        NutritionFacts::new(calories, protein, carbs, fat),
    )
}

/// Nine recipes in three clearly separated macro groups
pub fn nine_recipes() -> Vec<RecipeCandidate> {
    vec![
        recipe("salad-1", 250.0, 10.0, 20.0, 12.0),
        recipe("salad-2", 270.0, 12.0, 22.0, 13.0),
        recipe("salad-3", 240.0, 9.0, 18.0, 14.0),
        recipe("bowl-1", 750.0, 48.0, 95.0, 21.0),
        recipe("bowl-2", 760.0, 47.0, 92.0, 20.0),
        recipe("bowl-3", 740.0, 46.0, 94.0, 22.0),
        recipe("feast-1", 1500.0, 70.0, 160.0, 65.0),
        recipe("feast-2", 1550.0, 72.0, 150.0, 70.0),
        recipe("feast-3", 1480.0, 68.0, 158.0, 66.0),
    ]
}
