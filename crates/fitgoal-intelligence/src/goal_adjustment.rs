// ABOUTME: Progress-driven macro optimization and target date adjustment
// ABOUTME: Shifts calories when progress stalls or opposes the goal and proposes feasible dates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitGoal AI

#![allow(clippy::cast_possible_truncation)] // Safe: calorie shifts are a few hundred kcal
#![allow(clippy::cast_precision_loss)] // Safe: day counts are small

use crate::calorie_deficit::CalorieDeficit;
use crate::config::{AnalyticsConfig, DeficitConfig};
use crate::nutrition_calculator::split_macros;
use crate::plateau::PlateauAnalysis;
use crate::trend::{TrendDirection, TrendPace, TrendSummary};
use chrono::{DateTime, Duration, Utc};
use fitgoal_core::models::{Goal, MacroTargets, UserProfile};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Adjusted macro targets with the reasons behind them
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MacroOptimization {
    /// Targets after adjustment (unchanged when no rule fired)
    pub targets: MacroTargets,
    /// Signed calorie change applied before clamping
    pub calorie_adjustment: i32,
    /// One sentence per rule that fired
    pub reasoning: Vec<String>,
}

/// Proposed replacement for an infeasible target date
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalAdjustment {
    /// Earliest date keeping the daily change within the cap
    pub suggested_target_date: DateTime<Utc>,
    /// Days from `as_of` to the suggested date
    pub suggested_days: i64,
    /// Daily deficit (negative: surplus) at the suggested date
    pub daily_deficit: f64,
    /// Explanation for the user
    pub reason: String,
}

/// Adjust daily targets from the observed trend and plateau state
///
/// Progress against the goal shifts calories by `macro_shift_kcal`; a plateau
/// with no other adjustment shifts by `plateau_shift_kcal`. Macros are re-split
/// from the clamped calorie total.
#[must_use]
pub fn optimize_macros(
    current: &MacroTargets,
    weight_kg: f64,
    goal: Goal,
    trend: Option<&TrendSummary>,
    plateau: Option<&PlateauAnalysis>,
    config: &AnalyticsConfig,
) -> MacroOptimization {
    let advisor = &config.advisor;
    let mut shift = 0.0;
    let mut reasoning = Vec::new();

    if let Some(trend) = trend {
        match (goal, trend.direction, trend.pace) {
            (Goal::Lose, TrendDirection::Gaining, _) => {
                shift -= advisor.macro_shift_kcal;
                reasoning.push(format!(
                    "Weight is rising while your goal is to lose; calories lowered by {:.0} kcal.",
                    advisor.macro_shift_kcal
                ));
            }
            (Goal::Lose, TrendDirection::Losing, TrendPace::Fast) => {
                shift += advisor.macro_shift_kcal;
                reasoning.push(format!(
                    "You are losing faster than is sustainable; calories raised by {:.0} kcal.",
                    advisor.macro_shift_kcal
                ));
            }
            (Goal::Gain, TrendDirection::Losing, _) => {
                shift += advisor.macro_shift_kcal;
                reasoning.push(format!(
                    "Weight is falling while your goal is to gain; calories raised by {:.0} kcal.",
                    advisor.macro_shift_kcal
                ));
            }
            (Goal::Maintain, direction, _)
                if trend.total_change.abs() > advisor.maintain_tolerance_kg =>
            {
                let toward = if direction == TrendDirection::Gaining {
                    -advisor.macro_shift_kcal
                } else {
                    advisor.macro_shift_kcal
                };
                shift += toward;
                reasoning.push(format!(
                    "Weight moved {:.1} kg from where you started; calories changed by {toward:+.0} kcal.",
                    trend.total_change
                ));
            }
            _ => {}
        }
    }

    if shift.abs() < f64::EPSILON && plateau.is_some_and(|p| p.plateau_detected) {
        match goal {
            Goal::Lose => {
                shift -= advisor.plateau_shift_kcal;
                reasoning.push(format!(
                    "Your weight has plateaued; calories lowered by {:.0} kcal to restart progress.",
                    advisor.plateau_shift_kcal
                ));
            }
            Goal::Gain => {
                shift += advisor.plateau_shift_kcal;
                reasoning.push(format!(
                    "Your weight has plateaued; calories raised by {:.0} kcal to restart progress.",
                    advisor.plateau_shift_kcal
                ));
            }
            Goal::Maintain => {}
        }
    }

    if shift.abs() < f64::EPSILON {
        reasoning.push("Your current targets fit your progress; no change needed.".to_owned());
        return MacroOptimization {
            targets: *current,
            calorie_adjustment: 0,
            reasoning,
        };
    }

    let bounds = &config.nutrition.calorie_targets;
    let calories = (f64::from(current.calories) + shift)
        .clamp(bounds.min_daily_calories, bounds.max_daily_calories)
        .round();
    let targets = split_macros(calories, weight_kg, &config.nutrition);
    debug!(shift, calories, "Optimized macro targets");

    MacroOptimization {
        targets,
        calorie_adjustment: shift.round() as i32,
        reasoning,
    }
}

/// Propose the earliest target date whose daily change stays within the cap
///
/// Returns `None` when the current plan is already feasible.
#[must_use]
pub fn suggest_goal_adjustment(
    profile: &UserProfile,
    deficit: &CalorieDeficit,
    as_of: DateTime<Utc>,
    config: &DeficitConfig,
) -> Option<GoalAdjustment> {
    if deficit.feasible {
        return None;
    }

    // daily = weight_to_lose * kcal_per_lb / (lb_per_kg * days)
    let energy = deficit.weight_to_lose.abs() * config.kcal_per_lb / config.lb_per_kg;
    let suggested_days = (energy / config.max_daily_deficit_kcal).ceil().max(1.0) as i64;
    let daily_deficit =
        deficit.weight_to_lose * config.kcal_per_lb / (config.lb_per_kg * suggested_days as f64);
    let suggested_target_date = as_of + Duration::days(suggested_days);

    let target = profile
        .target_weight
        .map_or_else(|| "your target".to_owned(), |w| format!("{w:.1} kg"));
    let reason = format!(
        "Reaching {target} in {} days is not safely achievable. Allow {suggested_days} days \
         (until {}) to keep the daily change near {:.0} kcal.",
        deficit.days_to_target,
        suggested_target_date.date_naive(),
        daily_deficit.abs()
    );
    info!(
        current_days = deficit.days_to_target,
        suggested_days, "Suggested a later target date"
    );

    Some(GoalAdjustment {
        suggested_target_date,
        suggested_days,
        daily_deficit,
        reason,
    })
}
