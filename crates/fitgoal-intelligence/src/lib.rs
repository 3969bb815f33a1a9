// ABOUTME: Analytics engine for weight progress, nutrition targets and recipe ranking
// ABOUTME: Pure synchronous functions over caller-supplied data with validated configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitGoal AI

#![deny(unsafe_code)]

//! # FitGoal Intelligence
//!
//! Stateless analytics over a user's profile and progress log. Every function
//! takes its inputs and configuration explicitly and keeps nothing between calls.
//!
//! ## Modules
//!
//! - **trend**: first-to-last weight change, direction and pace
//! - **`weight_prediction`**: polynomial forecast with a low-confidence flag
//! - **`calorie_deficit`**: daily deficit needed to hit a target date
//! - **`recipe_clustering`**: k-means over macros, ranked against per-meal targets
//! - **plateau**: low-variance detection over the most recent entries
//! - **`nutrition_calculator`**: BMR, TDEE and macro targets
//! - **advisors**: rule-based labels and guidance text
//! - **`goal_adjustment`**: macro optimization and feasible target dates
//! - **`progress_summary`**: lifestyle and body composition aggregates

/// Numeric kernels: BMR equations, polynomial regression, k-means
pub mod algorithms;

/// Analytics configuration with environment overrides
pub mod config;

/// Rule-based advisors
pub mod advisors;

/// Calorie deficit calculation
pub mod calorie_deficit;

/// Macro optimization and target date adjustment
pub mod goal_adjustment;

/// BMR, TDEE and macro targets
pub mod nutrition_calculator;

/// Plateau detection
pub mod plateau;

/// Lifestyle and body composition summary
pub mod progress_summary;

/// Recipe clustering and ranking
pub mod recipe_clustering;

/// Weight trend
pub mod trend;

/// Polynomial weight prediction
pub mod weight_prediction;

pub use calorie_deficit::{CalorieDeficit, CalorieDeficitCalculator};
pub use config::AnalyticsConfig;
pub use goal_adjustment::{
    optimize_macros, suggest_goal_adjustment, GoalAdjustment, MacroOptimization,
};
pub use nutrition_calculator::{EnergyBudget, MacroCalculator};
pub use plateau::{PlateauAnalysis, PlateauDetector};
pub use progress_summary::{summarize_progress, ProgressSummary};
pub use recipe_clustering::{MealTargets, RecipeCluster, RecipeClusterer};
pub use trend::{TrendCalculator, TrendDirection, TrendPace, TrendSummary};
pub use weight_prediction::{PredictedWeight, PredictionResult, WeightPredictor};
