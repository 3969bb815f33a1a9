// ABOUTME: Thresholds for weight trend, prediction, deficit and plateau analysis
// ABOUTME: Defaults mirror the behavior users already see in the web client
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitGoal AI

use fitgoal_core::constants::{energy, sample_requirements};
use serde::{Deserialize, Serialize};

/// Trend classification thresholds
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrendConfig {
    /// Weekly change (kg) above which pace is reported as fast
    pub fast_pace_kg_per_week: f64,
}

impl Default for TrendConfig {
    fn default() -> Self {
        Self {
            fast_pace_kg_per_week: 1.0,
        }
    }
}

/// Polynomial weight prediction settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionConfig {
    /// Degree of the fitted polynomial
    pub polynomial_degree: usize,
    /// Longest horizon accepted
    pub max_days_ahead: u32,
    /// Fits with r² below this carry the low-confidence flag
    pub low_confidence_r2: f64,
}

impl Default for PredictionConfig {
    fn default() -> Self {
        Self {
            polynomial_degree: 2,
            max_days_ahead: 365,
            low_confidence_r2: 0.3,
        }
    }
}

/// Calorie deficit conversion constants
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeficitConfig {
    /// kcal per pound of body weight (3500)
    pub kcal_per_lb: f64,
    /// Conversion divisor applied to the weekly change (2.2)
    pub lb_per_kg: f64,
    /// Largest daily deficit or surplus considered feasible
    pub max_daily_deficit_kcal: f64,
}

impl Default for DeficitConfig {
    fn default() -> Self {
        Self {
            kcal_per_lb: energy::KCAL_PER_LB,
            lb_per_kg: energy::LB_PER_KG,
            max_daily_deficit_kcal: 1000.0,
        }
    }
}

/// Plateau detection settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlateauConfig {
    /// Number of most recent samples examined
    pub window_size: usize,
    /// Population variance (kg²) under which weight is considered flat
    pub variance_threshold: f64,
}

impl Default for PlateauConfig {
    fn default() -> Self {
        Self {
            window_size: sample_requirements::PLATEAU_WINDOW,
            variance_threshold: 0.5,
        }
    }
}

/// Rule thresholds for the heuristic advisors
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdvisorConfig {
    /// |change| (kg) still counted as success for a maintain goal
    pub maintain_tolerance_kg: f64,
    /// Logging consistency (%) labelled excellent
    pub consistency_excellent_percent: f64,
    /// Logging consistency (%) labelled good
    pub consistency_good_percent: f64,
    /// Logging consistency (%) labelled fair
    pub consistency_fair_percent: f64,
    /// kcal shifted when progress runs against the goal
    pub macro_shift_kcal: f64,
    /// kcal shifted when a plateau is detected
    pub plateau_shift_kcal: f64,
}

impl Default for AdvisorConfig {
    fn default() -> Self {
        Self {
            maintain_tolerance_kg: 1.0,
            consistency_excellent_percent: 90.0,
            consistency_good_percent: 70.0,
            consistency_fair_percent: 40.0,
            macro_shift_kcal: 200.0,
            plateau_shift_kcal: 150.0,
        }
    }
}
