// ABOUTME: Analytics configuration container with environment overrides and validation
// ABOUTME: Orchestrates domain-specific configs and provides a validated global instance
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitGoal AI

//! Analytics Configuration Module
//!
//! Configuration is organized into domain-specific modules:
//! - `progress` - trend, prediction, deficit, plateau and advisor thresholds
//! - `clustering` - k-means and recipe scoring
//! - `nutrition` - BMR formula, activity factors, calorie bounds, macro split
//!
//! Defaults reproduce the production behavior. Any value can be overridden with
//! a `FITGOAL_*` environment variable; overrides are validated before use.

pub mod clustering;
pub mod error;
pub mod nutrition;
pub mod progress;

pub use clustering::{ClusteringConfig, KMeansConfig, RecommendationBands, ScoreWeights};
pub use error::ConfigError;
pub use nutrition::{
    ActivityFactorsConfig, BmrConfig, CalorieTargetConfig, HarrisBenedictCoefficients,
    MacronutrientConfig, NutritionConfig,
};
pub use progress::{AdvisorConfig, DeficitConfig, PlateauConfig, PredictionConfig, TrendConfig};

use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::warn;

/// Global configuration singleton
static ANALYTICS_CONFIG: OnceLock<AnalyticsConfig> = OnceLock::new();

/// Main analytics configuration container
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalyticsConfig {
    /// Weight trend classification
    pub trend: TrendConfig,
    /// Polynomial weight prediction
    pub prediction: PredictionConfig,
    /// Calorie deficit conversion
    pub deficit: DeficitConfig,
    /// Plateau detection
    pub plateau: PlateauConfig,
    /// Recipe clustering and scoring
    pub clustering: ClusteringConfig,
    /// BMR, TDEE and macro targets
    pub nutrition: NutritionConfig,
    /// Heuristic advisor thresholds
    pub advisor: AdvisorConfig,
}

impl AnalyticsConfig {
    /// Get the global configuration instance
    pub fn global() -> &'static Self {
        ANALYTICS_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load analytics config: {}, using defaults", e);
                Self::default()
            })
        })
    }

    /// Load configuration from defaults and environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns the first violated constraint
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.prediction.polynomial_degree == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "polynomial_degree must be at least 1",
            ));
        }
        if self.prediction.max_days_ahead == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "max_days_ahead must be at least 1",
            ));
        }
        if !(0.0..=1.0).contains(&self.prediction.low_confidence_r2) {
            return Err(ConfigError::ValueOutOfRange(
                "low_confidence_r2 must be between 0 and 1",
            ));
        }
        if self.trend.fast_pace_kg_per_week <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "fast_pace_kg_per_week must be positive",
            ));
        }
        if self.deficit.kcal_per_lb <= 0.0
            || self.deficit.lb_per_kg <= 0.0
            || self.deficit.max_daily_deficit_kcal <= 0.0
        {
            return Err(ConfigError::ValueOutOfRange(
                "deficit constants must be positive",
            ));
        }
        if self.plateau.window_size < 2 {
            return Err(ConfigError::ValueOutOfRange(
                "plateau window_size must be at least 2",
            ));
        }
        if self.plateau.variance_threshold <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "plateau variance_threshold must be positive",
            ));
        }

        self.validate_clustering()?;
        self.validate_nutrition()?;

        let advisor = &self.advisor;
        if advisor.consistency_fair_percent >= advisor.consistency_good_percent
            || advisor.consistency_good_percent >= advisor.consistency_excellent_percent
        {
            return Err(ConfigError::InvalidRange(
                "consistency thresholds must be ascending: fair < good < excellent",
            ));
        }

        Ok(())
    }

    fn validate_clustering(&self) -> Result<(), ConfigError> {
        let clustering = &self.clustering;
        if clustering.kmeans.default_k == 0 {
            return Err(ConfigError::ValueOutOfRange("default_k must be at least 1"));
        }
        if clustering.kmeans.max_iterations == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "max_iterations must be at least 1",
            ));
        }
        if clustering.meals_per_day == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "meals_per_day must be at least 1",
            ));
        }
        if (clustering.score_weights.total() - 1.0).abs() > 0.01 {
            return Err(ConfigError::InvalidWeights(
                "Recipe score weights must sum to 1.0",
            ));
        }
        let bands = &clustering.bands;
        if bands.moderate >= bands.good || bands.good >= bands.excellent {
            return Err(ConfigError::InvalidRange(
                "recommendation bands must be ascending: moderate < good < excellent",
            ));
        }
        Ok(())
    }

    fn validate_nutrition(&self) -> Result<(), ConfigError> {
        let targets = &self.nutrition.calorie_targets;
        if targets.min_daily_calories <= 0.0
            || targets.min_daily_calories >= targets.max_daily_calories
        {
            return Err(ConfigError::InvalidRange(
                "min_daily_calories must be positive and < max_daily_calories",
            ));
        }
        let factors = &self.nutrition.activity_factors;
        if !(factors.sedentary < factors.light
            && factors.light < factors.moderate
            && factors.moderate < factors.active
            && factors.active < factors.very_active)
        {
            return Err(ConfigError::InvalidRange(
                "activity factors must be in ascending order",
            ));
        }
        let fat_percent = self.nutrition.macronutrients.fat_percent_of_calories;
        if !(0.0..100.0).contains(&fat_percent) {
            return Err(ConfigError::ValueOutOfRange(
                "fat_percent_of_calories must be between 0 and 100",
            ));
        }
        Ok(())
    }

    /// Helper function to parse and apply an environment variable override
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
        }
        Ok(())
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        Self::apply_env_var(
            "FITGOAL_TREND_FAST_PACE_KG",
            &mut self.trend.fast_pace_kg_per_week,
        )?;

        Self::apply_env_var(
            "FITGOAL_PREDICTION_DEGREE",
            &mut self.prediction.polynomial_degree,
        )?;
        Self::apply_env_var(
            "FITGOAL_PREDICTION_MAX_DAYS",
            &mut self.prediction.max_days_ahead,
        )?;
        Self::apply_env_var(
            "FITGOAL_PREDICTION_LOW_CONFIDENCE_R2",
            &mut self.prediction.low_confidence_r2,
        )?;

        Self::apply_env_var(
            "FITGOAL_DEFICIT_MAX_DAILY_KCAL",
            &mut self.deficit.max_daily_deficit_kcal,
        )?;

        Self::apply_env_var("FITGOAL_PLATEAU_WINDOW", &mut self.plateau.window_size)?;
        Self::apply_env_var(
            "FITGOAL_PLATEAU_VARIANCE_THRESHOLD",
            &mut self.plateau.variance_threshold,
        )?;

        Self::apply_env_var(
            "FITGOAL_CLUSTERING_DEFAULT_K",
            &mut self.clustering.kmeans.default_k,
        )?;
        Self::apply_env_var(
            "FITGOAL_CLUSTERING_MAX_ITERATIONS",
            &mut self.clustering.kmeans.max_iterations,
        )?;
        Self::apply_env_var(
            "FITGOAL_CLUSTERING_MEALS_PER_DAY",
            &mut self.clustering.meals_per_day,
        )?;

        Self::apply_env_var("FITGOAL_BMR_FORMULA", &mut self.nutrition.bmr.formula)?;
        Self::apply_env_var(
            "FITGOAL_MIN_DAILY_CALORIES",
            &mut self.nutrition.calorie_targets.min_daily_calories,
        )?;
        Self::apply_env_var(
            "FITGOAL_MAX_DAILY_CALORIES",
            &mut self.nutrition.calorie_targets.max_daily_calories,
        )?;

        Self::apply_env_var(
            "FITGOAL_MAINTAIN_TOLERANCE_KG",
            &mut self.advisor.maintain_tolerance_kg,
        )?;

        Ok(self)
    }
}
