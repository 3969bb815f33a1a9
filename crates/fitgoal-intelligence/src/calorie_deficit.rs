// ABOUTME: Daily calorie deficit or surplus needed to reach a target weight by a date
// ABOUTME: Converts weekly weight change with the 3500 kcal per pound rule and checks feasibility
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitGoal AI

#![allow(clippy::cast_precision_loss)] // Safe: day counts are far below 2^52

use crate::config::DeficitConfig;
use chrono::{DateTime, Utc};
use fitgoal_core::constants::time::{DAYS_PER_WEEK, SECONDS_PER_DAY};
use fitgoal_core::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Energy plan for reaching a target weight
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalorieDeficit {
    /// Whole days until the target date, rounded up
    pub days_to_target: i64,
    /// `current - target`; negative for a gain goal
    pub weight_to_lose: f64,
    /// Required change per week (kg), positive for loss
    pub weekly_loss: f64,
    /// Required daily deficit (kcal); negative means a surplus
    pub daily_deficit: f64,
    /// Whether |daily deficit| stays within the configured cap
    pub feasible: bool,
}

/// Calorie deficit calculator
pub struct CalorieDeficitCalculator;

impl CalorieDeficitCalculator {
    /// Calculate the daily deficit between `as_of` and `target_date`
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` when the target date is not after `as_of`, or
    /// a weight is not a positive finite number
    pub fn calculate_calorie_deficit(
        current_weight: f64,
        target_weight: f64,
        target_date: DateTime<Utc>,
        as_of: DateTime<Utc>,
        config: &DeficitConfig,
    ) -> AppResult<CalorieDeficit> {
        for (name, value) in [("current", current_weight), ("target", target_weight)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(AppError::invalid_parameter(format!(
                    "{name} weight must be a positive number, got {value}"
                )));
            }
        }

        let days_to_target = days_until(as_of, target_date);
        if days_to_target <= 0 {
            return Err(AppError::invalid_parameter(
                "target date must be in the future",
            ));
        }

        let weight_to_lose = current_weight - target_weight;
        let weekly_loss = weight_to_lose / days_to_target as f64 * DAYS_PER_WEEK;
        let daily_deficit =
            weekly_loss * config.kcal_per_lb / DAYS_PER_WEEK / config.lb_per_kg;
        let feasible = daily_deficit.abs() <= config.max_daily_deficit_kcal;

        if feasible {
            debug!(days_to_target, weekly_loss, daily_deficit, "Calculated calorie deficit");
        } else {
            warn!(
                days_to_target,
                daily_deficit,
                cap = config.max_daily_deficit_kcal,
                "Target requires an infeasible daily calorie change"
            );
        }

        Ok(CalorieDeficit {
            days_to_target,
            weight_to_lose,
            weekly_loss,
            daily_deficit,
            feasible,
        })
    }
}

/// Days from `from` to `to`, any partial day counting as a whole one
pub(crate) fn days_until(from: DateTime<Utc>, to: DateTime<Utc>) -> i64 {
    let seconds = (to - from).num_seconds();
    // Ceiling division that also holds for negative spans
    let days = seconds.div_euclid(SECONDS_PER_DAY);
    if seconds.rem_euclid(SECONDS_PER_DAY) == 0 {
        days
    } else {
        days + 1
    }
}
