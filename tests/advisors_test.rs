// ABOUTME: Integration tests for the rule-based advisors and progress summary
// ABOUTME: Covers consistency labels, goal alignment, mood weighting and seeded message selection
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitGoal AI

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use chrono::Duration;
use fitgoal_ai::config::{AdvisorConfig, AnalyticsConfig, DeficitConfig, TrendConfig};
use fitgoal_ai::intelligence::advisors::{
    consistency_score, deficit_advice, is_goal_direction_aligned, mood_score,
    motivational_message, motivational_messages, prediction_reasoning, trend_recommendation,
    weekly_success_rate, weighted_mood_average, ConsistencyLabel,
};
use fitgoal_ai::intelligence::{
    summarize_progress, CalorieDeficitCalculator, TrendCalculator, WeightPredictor,
};
use fitgoal_ai::models::{ChronologicalSeries, Goal, Mood, ProgressSample};
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn test_motivational_message_is_reproducible_with_seed() {
    common::init_test_logging();
    let first = motivational_message(&mut StdRng::seed_from_u64(99));
    let second = motivational_message(&mut StdRng::seed_from_u64(99));

    assert_eq!(first, second);
    assert!(motivational_messages().contains(&first));
}

#[test]
fn test_motivational_messages_vary_across_seeds() {
    let picks: std::collections::HashSet<&str> = (0..50)
        .map(|seed| motivational_message(&mut StdRng::seed_from_u64(seed)))
        .collect();

    assert!(picks.len() > 1);
}

#[test]
fn test_mood_scale() {
    assert_eq!(mood_score(Mood::Exhausted), 1);
    assert_eq!(mood_score(Mood::Tired), 2);
    assert_eq!(mood_score(Mood::Neutral), 3);
    assert_eq!(mood_score(Mood::Good), 4);
    assert_eq!(mood_score(Mood::Excellent), 5);
}

#[test]
fn test_weighted_mood_average_favors_recent_entries() {
    let mut samples = common::daily_samples(&[70.0, 70.0, 70.0]);
    samples[0] = samples[0].clone().with_mood(Mood::Exhausted);
    samples[2] = samples[2].clone().with_mood(Mood::Excellent);
    let series = ChronologicalSeries::from_oldest_first(samples).unwrap();

    // (1·1 + 2·5) / 3
    let average = weighted_mood_average(&series).unwrap();
    assert!((average - 11.0 / 3.0).abs() < 1e-9);

    assert!(weighted_mood_average(&common::series(&[70.0, 71.0])).is_none());
}

#[test]
fn test_goal_direction_alignment() {
    assert!(is_goal_direction_aligned(Goal::Lose, -0.5, 1.0));
    assert!(!is_goal_direction_aligned(Goal::Lose, 0.0, 1.0));
    assert!(is_goal_direction_aligned(Goal::Gain, 0.3, 1.0));
    assert!(!is_goal_direction_aligned(Goal::Gain, -0.3, 1.0));
    assert!(is_goal_direction_aligned(Goal::Maintain, -0.8, 1.0));
    assert!(!is_goal_direction_aligned(Goal::Maintain, 1.5, 1.0));
}

#[test]
fn test_daily_logging_is_excellent() {
    let samples: Vec<ProgressSample> = common::daily_samples(&[70.0; 10])
        .into_iter()
        .enumerate()
        .map(|(day, s)| s.with_workout_completed(day % 2 == 0))
        .collect();
    let series = ChronologicalSeries::from_oldest_first(samples).unwrap();

    let score = consistency_score(&series, &AdvisorConfig::default());
    assert_eq!(score.logged_days, 10);
    assert_eq!(score.span_days, 10);
    assert!((score.logging_percent - 100.0).abs() < 1e-9);
    assert!((score.workout_percent - 50.0).abs() < 1e-9);
    assert_eq!(score.label, ConsistencyLabel::Excellent);
}

#[test]
fn test_every_other_day_logging_is_fair() {
    let samples: Vec<ProgressSample> = (0..5)
        .map(|i| ProgressSample::new(common::base_date() + Duration::days(i * 2), 70.0))
        .collect();
    let series = ChronologicalSeries::from_oldest_first(samples).unwrap();

    let score = consistency_score(&series, &AdvisorConfig::default());
    assert_eq!(score.span_days, 9);
    assert_eq!(score.label, ConsistencyLabel::Fair);
}

#[test]
fn test_empty_series_consistency_is_poor() {
    let score = consistency_score(&ChronologicalSeries::default(), &AdvisorConfig::default());
    assert_eq!(score.logged_days, 0);
    assert_eq!(score.label, ConsistencyLabel::Poor);
}

#[test]
fn test_weekly_success_rate() {
    let weights: Vec<f64> = (0..14).map(|day| 0.1f64.mul_add(-f64::from(day), 80.0)).collect();
    let series = common::series(&weights);

    let lose = weekly_success_rate(&series, Goal::Lose, 1.0).unwrap();
    assert_eq!(lose.weeks_evaluated, 2);
    assert_eq!(lose.successful_weeks, 2);
    assert!((lose.success_percent - 100.0).abs() < 1e-9);

    let gain = weekly_success_rate(&series, Goal::Gain, 1.0).unwrap();
    assert_eq!(gain.successful_weeks, 0);

    assert!(weekly_success_rate(&common::series(&[80.0]), Goal::Lose, 1.0).is_none());
}

#[test]
fn test_trend_recommendation_reflects_goal() {
    let losing = TrendCalculator::calculate_trend(
        &common::series(&[80.0, 79.9, 79.8, 79.7]),
        &TrendConfig::default(),
    )
    .unwrap();

    assert!(trend_recommendation(&losing, Goal::Lose).contains("Great job"));
    assert!(trend_recommendation(&losing, Goal::Gain).contains("trending down"));
}

#[test]
fn test_prediction_reasoning_mentions_low_confidence() {
    let series = common::series(&[70.0, 72.0, 69.0, 71.0, 70.0, 72.0, 69.0, 71.0]);
    let prediction =
        WeightPredictor::predict_weight(&series, 7, common::base_date(), &AnalyticsConfig::default())
            .unwrap();

    let reasoning = prediction_reasoning(&prediction, 71.0, Goal::Lose, &AdvisorConfig::default());
    assert!(reasoning.contains("7 days"));
    assert!(reasoning.contains("rough estimate"));
}

#[test]
fn test_deficit_advice_flags_unsafe_targets() {
    let now = common::base_date();
    let config = DeficitConfig::default();
    let infeasible = CalorieDeficitCalculator::calculate_calorie_deficit(
        100.0,
        80.0,
        now + Duration::days(30),
        now,
        &config,
    )
    .unwrap();
    let feasible = CalorieDeficitCalculator::calculate_calorie_deficit(
        80.0,
        75.0,
        now + Duration::days(70),
        now,
        &config,
    )
    .unwrap();

    assert!(deficit_advice(&infeasible, &config).contains("safe limit"));
    assert!(deficit_advice(&feasible, &config).contains("deficit of about 114 kcal"));
}

#[test]
fn test_progress_summary_averages_logged_fields_only() {
    let mut samples = common::daily_samples(&[80.0, 79.8, 79.5]);
    samples[0] = samples[0]
        .clone()
        .with_lifestyle(8000, 2000, 7.0)
        .with_body_composition(25.0, 35.0)
        .with_workout_completed(true);
    samples[2] = samples[2]
        .clone()
        .with_lifestyle(10000, 2500, 8.0)
        .with_body_composition(24.0, 35.5)
        .with_energy_level(8);
    let series = ChronologicalSeries::from_oldest_first(samples).unwrap();

    let summary = summarize_progress(&series);
    assert_eq!(summary.entries, 3);
    assert_eq!(summary.workouts_completed, 1);
    assert!((summary.average_steps.unwrap() - 9000.0).abs() < 1e-9);
    assert!((summary.average_water_intake.unwrap() - 2250.0).abs() < 1e-9);
    assert!((summary.average_sleep_hours.unwrap() - 7.5).abs() < 1e-9);
    assert!((summary.average_energy_level.unwrap() - 8.0).abs() < 1e-9);
    assert!((summary.body_fat_change.unwrap() + 1.0).abs() < 1e-9);
    assert!((summary.muscle_mass_change.unwrap() - 0.5).abs() < 1e-9);
}
