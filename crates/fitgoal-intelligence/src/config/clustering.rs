// ABOUTME: Recipe clustering configuration for k-means and cluster fitness scoring
// ABOUTME: Configures iteration cap, meal split, score weights and recommendation bands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitGoal AI

use serde::{Deserialize, Serialize};

/// Recipe clustering configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClusteringConfig {
    /// k-means settings
    pub kmeans: KMeansConfig,
    /// Meals the daily targets are split across
    pub meals_per_day: u8,
    /// Weights of the per-macro sub-scores
    pub score_weights: ScoreWeights,
    /// Score thresholds for recommendation text
    pub bands: RecommendationBands,
}

impl Default for ClusteringConfig {
    fn default() -> Self {
        Self {
            kmeans: KMeansConfig::default(),
            meals_per_day: 3,
            score_weights: ScoreWeights::default(),
            bands: RecommendationBands::default(),
        }
    }
}

/// k-means settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KMeansConfig {
    /// Cluster count when the caller does not choose one
    pub default_k: usize,
    /// Hard cap on Lloyd iterations
    pub max_iterations: usize,
    /// Stop once no centroid moves further than this
    pub tolerance: f64,
}

impl Default for KMeansConfig {
    fn default() -> Self {
        Self {
            default_k: 3,
            max_iterations: 100,
            tolerance: 1e-6,
        }
    }
}

/// Weights combining the four macro sub-scores
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreWeights {
    /// Calorie fit weight (0.4)
    pub calories: f64,
    /// Protein fit weight (0.3)
    pub protein: f64,
    /// Carbohydrate fit weight (0.2)
    pub carbs: f64,
    /// Fat fit weight (0.1)
    pub fat: f64,
}

impl ScoreWeights {
    /// Sum of all weights
    #[must_use]
    pub fn total(&self) -> f64 {
        self.calories + self.protein + self.carbs + self.fat
    }
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            calories: 0.4,
            protein: 0.3,
            carbs: 0.2,
            fat: 0.1,
        }
    }
}

/// Lower score bounds of each recommendation band
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationBands {
    /// Excellent match (90)
    pub excellent: f64,
    /// Good match (75)
    pub good: f64,
    /// Moderate match (60)
    pub moderate: f64,
}

impl Default for RecommendationBands {
    fn default() -> Self {
        Self {
            excellent: 90.0,
            good: 75.0,
            moderate: 60.0,
        }
    }
}
