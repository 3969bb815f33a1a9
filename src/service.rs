// ABOUTME: Stateless analytics façade combining every component into one progress report
// ABOUTME: Normalizes sample ordering once and degrades optional sections on insufficient data
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitGoal AI

use crate::errors::{AppError, AppResult, ErrorCode};
use crate::intelligence::advisors::{self, ConsistencyScore, WeeklySuccessRate};
use crate::intelligence::{
    optimize_macros, summarize_progress, suggest_goal_adjustment, AnalyticsConfig, CalorieDeficit,
    CalorieDeficitCalculator, EnergyBudget, GoalAdjustment, MacroCalculator, MacroOptimization,
    PlateauAnalysis, PlateauDetector, PredictionResult, ProgressSummary, RecipeCluster,
    RecipeClusterer, TrendCalculator, TrendSummary, WeightPredictor,
};
use crate::logging::AppLogger;
use crate::models::{
    ChronologicalSeries, MacroTargets, ProgressSample, RecipeCandidate, UserProfile,
};
use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Instant;

/// Forecast horizon when a request does not name one
pub const DEFAULT_DAYS_AHEAD: i64 = 30;

/// Deficit guidance when the profile's target date is not in the future
pub const TARGET_DATE_PASSED_ADVICE: &str =
    "Your target date has passed. Set a new target date to get a calorie plan.";

/// Everything the analytics layer can say about one user's progress
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressReport {
    /// Reference instant for every date in the report
    pub generated_at: DateTime<Utc>,
    /// Entries analysed
    pub entries: usize,
    /// BMR, TDEE and calorie target
    pub energy: EnergyBudget,
    /// Daily targets from the profile
    pub macros: MacroTargets,
    /// Targets adjusted for observed progress
    pub macro_optimization: MacroOptimization,
    /// Linear trend, when at least two entries exist
    pub trend: Option<TrendSummary>,
    /// Guidance for the trend
    pub trend_recommendation: Option<String>,
    /// Weight forecast, when at least two entries exist
    pub prediction: Option<PredictionResult>,
    /// Explanation of the forecast
    pub prediction_reasoning: Option<String>,
    /// Deficit toward the profile's target, when one is set
    pub deficit: Option<CalorieDeficit>,
    /// Feasibility guidance for the deficit
    pub deficit_advice: Option<String>,
    /// Later target date, when the deficit is infeasible
    pub goal_adjustment: Option<GoalAdjustment>,
    /// Plateau check
    pub plateau: PlateauAnalysis,
    /// Logging and workout consistency
    pub consistency: ConsistencyScore,
    /// Weeks moving toward the goal
    pub weekly_success: Option<WeeklySuccessRate>,
    /// Recency-weighted mood (1-5)
    pub mood_average: Option<f64>,
    /// Lifestyle and body composition aggregates
    pub summary: ProgressSummary,
    /// Randomly selected encouragement
    pub motivational_message: String,
}

/// Input document accepted by the CLI and by callers loading requests from disk
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisRequest {
    /// User profile
    pub profile: UserProfile,
    /// Progress entries in any order
    #[serde(default)]
    pub samples: Vec<ProgressSample>,
    /// Recipe candidates for clustering
    #[serde(default)]
    pub recipes: Vec<RecipeCandidate>,
    /// Forecast horizon in days
    #[serde(default)]
    pub days_ahead: Option<i64>,
    /// Recipe cluster count
    #[serde(default)]
    pub k: Option<usize>,
    /// Reference instant; now when absent
    #[serde(default)]
    pub as_of: Option<DateTime<Utc>>,
}

impl AnalysisRequest {
    /// Parse a request from a JSON file
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the file cannot be read, or a serialization
    /// error if it is not a valid request document
    pub fn from_json_file(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| {
            AppError::invalid_input(format!("Cannot read {}: {e}", path.display()))
        })?;
        Ok(serde_json::from_str(&contents)?)
    }
}

/// Stateless analytics service
#[derive(Debug, Clone, Default)]
pub struct AnalyticsService {
    config: AnalyticsConfig,
}

impl AnalyticsService {
    /// Create a service with explicit configuration
    #[must_use]
    pub const fn new(config: AnalyticsConfig) -> Self {
        Self { config }
    }

    /// Create a service from the global configuration
    #[must_use]
    pub fn from_global() -> Self {
        Self::new(AnalyticsConfig::global().clone())
    }

    /// Configuration in use
    #[must_use]
    pub const fn config(&self) -> &AnalyticsConfig {
        &self.config
    }

    /// Daily macro targets for a profile
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the profile fails validation
    pub fn macros(&self, profile: &UserProfile) -> AppResult<MacroTargets> {
        MacroCalculator::calculate_macros(profile, &self.config.nutrition)
    }

    /// Build the full progress report
    ///
    /// Samples may arrive in any order. Trend and prediction are omitted with
    /// fewer than two entries; the deficit is omitted unless the profile has
    /// both a target weight and a target date still in the future. A passed
    /// target date yields advice to set a new one.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for an invalid profile or sample, and
    /// `InvalidParameter` for an out-of-range horizon
    pub fn progress_report<R: Rng + ?Sized>(
        &self,
        profile: &UserProfile,
        samples: Vec<ProgressSample>,
        days_ahead: i64,
        as_of: DateTime<Utc>,
        rng: &mut R,
    ) -> AppResult<ProgressReport> {
        let started = Instant::now();
        let config = &self.config;
        let series = ChronologicalSeries::from_unordered(samples)?;

        let energy = MacroCalculator::calculate_energy_budget(profile, &config.nutrition)?;
        let macros = MacroCalculator::calculate_macros(profile, &config.nutrition)?;

        let trend = optional_section(
            "trend",
            TrendCalculator::calculate_trend(&series, &config.trend),
        )?;
        let prediction = optional_section(
            "prediction",
            WeightPredictor::predict_weight(&series, days_ahead, as_of, config),
        )?;
        let current_weight = series.last().map_or(profile.weight, |s| s.weight);

        let deficit = match (profile.target_weight, profile.target_date) {
            (Some(_), Some(target_date)) if (target_date - as_of).num_seconds() <= 0 => {
                AppLogger::log_section_skipped("deficit", "target date has passed");
                None
            }
            (Some(target_weight), Some(target_date)) => {
                Some(CalorieDeficitCalculator::calculate_calorie_deficit(
                    current_weight,
                    target_weight,
                    target_date,
                    as_of,
                    &config.deficit,
                )?)
            }
            _ => {
                AppLogger::log_section_skipped("deficit", "no target weight and date");
                None
            }
        };
        let deficit_advice = match (&deficit, profile.target_weight, profile.target_date) {
            (Some(d), _, _) => Some(advisors::deficit_advice(d, &config.deficit)),
            (None, Some(_), Some(_)) => Some(TARGET_DATE_PASSED_ADVICE.to_owned()),
            _ => None,
        };
        let goal_adjustment = deficit
            .as_ref()
            .and_then(|d| suggest_goal_adjustment(profile, d, as_of, &config.deficit));

        let plateau = PlateauDetector::detect_plateau(&series, &config.plateau);
        let macro_optimization = optimize_macros(
            &macros,
            profile.weight,
            profile.goal,
            trend.as_ref(),
            Some(&plateau),
            config,
        );

        let report = ProgressReport {
            generated_at: as_of,
            entries: series.len(),
            energy,
            macros,
            macro_optimization,
            trend_recommendation: trend
                .as_ref()
                .map(|t| advisors::trend_recommendation(t, profile.goal)),
            trend,
            prediction_reasoning: prediction.as_ref().map(|p| {
                advisors::prediction_reasoning(p, current_weight, profile.goal, &config.advisor)
            }),
            prediction,
            deficit_advice,
            deficit,
            goal_adjustment,
            plateau,
            consistency: advisors::consistency_score(&series, &config.advisor),
            weekly_success: advisors::weekly_success_rate(
                &series,
                profile.goal,
                config.advisor.maintain_tolerance_kg,
            ),
            mood_average: advisors::weighted_mood_average(&series),
            summary: summarize_progress(&series),
            motivational_message: advisors::motivational_message(rng).to_owned(),
        };

        AppLogger::log_analysis(
            "progress_report",
            series.len(),
            true,
            u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX),
        );
        Ok(report)
    }

    /// Cluster and rank recipes for a profile
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` when `k` is outside `1..=recipes.len()`, and
    /// `InvalidInput` if the profile fails validation
    pub fn recipe_recommendations<R: Rng + ?Sized>(
        &self,
        profile: &UserProfile,
        recipes: &[RecipeCandidate],
        k: Option<usize>,
        rng: &mut R,
    ) -> AppResult<Vec<RecipeCluster>> {
        let started = Instant::now();
        let clusters = RecipeClusterer::cluster_recipes(recipes, profile, k, rng, &self.config)?;
        AppLogger::log_analysis(
            "recipe_recommendations",
            recipes.len(),
            true,
            u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX),
        );
        Ok(clusters)
    }
}

/// Turn `InsufficientData` into an absent section; other errors propagate
fn optional_section<T>(section: &str, result: AppResult<T>) -> AppResult<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(e) if e.code == ErrorCode::InsufficientData => {
            AppLogger::log_section_skipped(section, &e.message);
            Ok(None)
        }
        Err(e) => Err(e),
    }
}
