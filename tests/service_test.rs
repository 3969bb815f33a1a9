// ABOUTME: Integration tests for the analytics service façade
// ABOUTME: Covers full reports, degraded sections, request files and recipe recommendations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitGoal AI

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use chrono::Duration;
use fitgoal_ai::config::AnalyticsConfig;
use fitgoal_ai::errors::ErrorCode;
use fitgoal_ai::models::Goal;
use fitgoal_ai::service::{
    AnalysisRequest, AnalyticsService, DEFAULT_DAYS_AHEAD, TARGET_DATE_PASSED_ADVICE,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io::Write;
use tempfile::NamedTempFile;

fn service() -> AnalyticsService {
    AnalyticsService::new(AnalyticsConfig::default())
}

#[test]
fn test_full_progress_report() {
    common::init_test_logging();
    let weights: Vec<f64> = (0..14).map(|day| 0.1f64.mul_add(-f64::from(day), 80.0)).collect();
    let mut samples = common::daily_samples(&weights);
    samples.reverse();
    let as_of = common::base_date() + Duration::days(13);

    let mut profile = common::sample_profile();
    profile.target_weight = Some(75.0);
    profile.target_date = Some(as_of + Duration::days(60));

    let report = service()
        .progress_report(
            &profile,
            samples,
            DEFAULT_DAYS_AHEAD,
            as_of,
            &mut StdRng::seed_from_u64(7),
        )
        .unwrap();

    assert_eq!(report.entries, 14);
    assert_eq!(report.generated_at, as_of);
    assert_eq!(report.macros.calories, 2259);
    assert!(report.trend.is_some());
    assert!(report.trend_recommendation.is_some());

    let prediction = report.prediction.unwrap();
    assert_eq!(prediction.predictions.len(), 30);
    assert!(report.prediction_reasoning.is_some());

    let deficit = report.deficit.unwrap();
    assert!(deficit.feasible);
    assert!(report.deficit_advice.is_some());
    assert!(report.goal_adjustment.is_none());

    // 1.3 kg over two weeks stays under the variance threshold
    assert!(report.plateau.plateau_detected);
    assert_eq!(report.macro_optimization.calorie_adjustment, -150);
    assert_eq!(report.consistency.logged_days, 14);
    assert!(report.weekly_success.is_some());
    assert!(!report.motivational_message.is_empty());
}

#[test]
fn test_single_entry_degrades_optional_sections() {
    let report = service()
        .progress_report(
            &common::sample_profile(),
            common::daily_samples(&[80.0]),
            DEFAULT_DAYS_AHEAD,
            common::base_date(),
            &mut StdRng::seed_from_u64(7),
        )
        .unwrap();

    assert_eq!(report.entries, 1);
    assert!(report.trend.is_none());
    assert!(report.trend_recommendation.is_none());
    assert!(report.prediction.is_none());
    assert!(report.deficit.is_none());
    assert!(!report.plateau.plateau_detected);
    assert_eq!(report.macro_optimization.calorie_adjustment, 0);
}

#[test]
fn test_infeasible_target_suggests_adjustment() {
    let as_of = common::base_date() + Duration::days(2);
    let mut profile = common::sample_profile();
    profile.target_weight = Some(70.0);
    profile.target_date = Some(as_of + Duration::days(14));

    let report = service()
        .progress_report(
            &profile,
            common::daily_samples(&[80.0, 79.9, 79.8]),
            7,
            as_of,
            &mut StdRng::seed_from_u64(7),
        )
        .unwrap();

    assert!(!report.deficit.unwrap().feasible);
    let adjustment = report.goal_adjustment.unwrap();
    assert!(adjustment.suggested_days > 14);
    assert!(adjustment.reason.contains("70.0 kg"));
}

#[test]
fn test_passed_target_date_keeps_the_rest_of_the_report() {
    let weights: Vec<f64> = (0..20).map(|day| 0.1f64.mul_add(-f64::from(day), 80.0)).collect();
    let as_of = common::base_date() + Duration::days(19);
    let mut profile = common::sample_profile();
    profile.target_weight = Some(75.0);
    profile.target_date = Some(as_of - Duration::days(1));

    let report = service()
        .progress_report(
            &profile,
            common::daily_samples(&weights),
            DEFAULT_DAYS_AHEAD,
            as_of,
            &mut StdRng::seed_from_u64(7),
        )
        .unwrap();

    assert!(report.deficit.is_none());
    assert!(report.goal_adjustment.is_none());
    assert_eq!(
        report.deficit_advice.as_deref(),
        Some(TARGET_DATE_PASSED_ADVICE)
    );
    assert!(report.trend.is_some());
    assert!(report.prediction.is_some());
    assert_eq!(report.macros.calories, 2259);
    assert_eq!(report.consistency.logged_days, 20);
}

#[test]
fn test_target_date_equal_to_now_is_treated_as_passed() {
    let as_of = common::base_date() + Duration::days(2);
    let mut profile = common::sample_profile();
    profile.target_weight = Some(75.0);
    profile.target_date = Some(as_of);

    let report = service()
        .progress_report(
            &profile,
            common::daily_samples(&[80.0, 79.8, 79.6]),
            DEFAULT_DAYS_AHEAD,
            as_of,
            &mut StdRng::seed_from_u64(7),
        )
        .unwrap();

    assert!(report.deficit.is_none());
    assert!(report.deficit_advice.unwrap().contains("new target date"));
}

#[test]
fn test_invalid_target_weight_is_rejected() {
    let as_of = common::base_date() + Duration::days(2);
    let mut profile = common::sample_profile();
    profile.target_weight = Some(-5.0);
    profile.target_date = Some(as_of + Duration::days(30));

    let err = service()
        .progress_report(
            &profile,
            common::daily_samples(&[80.0, 79.8, 79.6]),
            DEFAULT_DAYS_AHEAD,
            as_of,
            &mut StdRng::seed_from_u64(7),
        )
        .unwrap_err();

    assert_eq!(err.code, ErrorCode::InvalidInput);
}

#[test]
fn test_out_of_range_horizon_is_an_error() {
    let err = service()
        .progress_report(
            &common::sample_profile(),
            common::daily_samples(&[80.0, 79.8, 79.6]),
            0,
            common::base_date(),
            &mut StdRng::seed_from_u64(7),
        )
        .unwrap_err();

    assert_eq!(err.code, ErrorCode::InvalidParameter);
}

#[test]
fn test_report_is_reproducible_with_seed() {
    let run = || {
        service()
            .progress_report(
                &common::sample_profile(),
                common::daily_samples(&[80.0, 79.8, 79.6]),
                DEFAULT_DAYS_AHEAD,
                common::base_date(),
                &mut StdRng::seed_from_u64(42),
            )
            .unwrap()
    };

    assert_eq!(run().motivational_message, run().motivational_message);
}

#[test]
fn test_request_from_json_file() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{
            "profile": {{
                "weight": 80.0,
                "height": 180.0,
                "age": 30,
                "gender": "male",
                "activityLevel": "moderate",
                "goal": "lose"
            }},
            "samples": [
                {{ "date": "2025-01-07T08:00:00Z", "weight": 79.6 }},
                {{ "date": "2025-01-06T08:00:00Z", "weight": 80.0, "mood": "good" }}
            ],
            "recipes": [
                {{ "id": "r1", "title": "Oats", "nutrition": {{ "calories": 350.0, "protein": 12.0 }} }}
            ],
            "daysAhead": 14
        }}"#
    )
    .unwrap();

    let request = AnalysisRequest::from_json_file(file.path()).unwrap();
    assert_eq!(request.profile.goal, Goal::Lose);
    assert_eq!(request.samples.len(), 2);
    assert_eq!(request.recipes.len(), 1);
    assert_eq!(request.days_ahead, Some(14));
    assert!(request.k.is_none());
    assert!(request.as_of.is_none());
}

#[test]
fn test_missing_request_file_is_invalid_input() {
    let dir = tempfile::tempdir().unwrap();
    let err = AnalysisRequest::from_json_file(dir.path().join("missing.json")).unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);
}

#[test]
fn test_recipe_recommendations() {
    let clusters = service()
        .recipe_recommendations(
            &common::sample_profile(),
            &common::nine_recipes(),
            Some(3),
            &mut StdRng::seed_from_u64(1),
        )
        .unwrap();

    assert_eq!(clusters.len(), 3);
    assert_eq!(
        clusters.iter().map(|c| c.recipes.len()).sum::<usize>(),
        9
    );
    assert!(clusters
        .windows(2)
        .all(|pair| pair[0].score >= pair[1].score));
}

#[test]
fn test_recipe_recommendations_reject_large_k() {
    let err = service()
        .recipe_recommendations(
            &common::sample_profile(),
            &common::nine_recipes()[..2],
            Some(3),
            &mut StdRng::seed_from_u64(1),
        )
        .unwrap_err();

    assert_eq!(err.code, ErrorCode::InvalidParameter);
}
