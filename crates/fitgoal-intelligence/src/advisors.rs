// ABOUTME: Stateless rule-based advisors turning analytics output into labels and guidance text
// ABOUTME: Consistency, goal alignment, mood weighting and injectable-random motivational messages
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitGoal AI

#![allow(clippy::cast_precision_loss)] // Safe: day and sample counts are small

use crate::calorie_deficit::CalorieDeficit;
use crate::config::{AdvisorConfig, DeficitConfig};
use crate::trend::{TrendDirection, TrendPace, TrendSummary};
use crate::weight_prediction::PredictionResult;
use fitgoal_core::models::{ChronologicalSeries, Goal, Mood};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

const MOTIVATIONAL_MESSAGES: [&str; 8] = [
    "Every healthy choice you make today is an investment in tomorrow.",
    "Progress, not perfection. Keep showing up!",
    "Small steps every day add up to big results.",
    "Your body achieves what your mind believes.",
    "Consistency beats intensity. You're building habits that last.",
    "Don't compare your chapter one to someone else's chapter twenty.",
    "The hardest part is starting, and you've already done that.",
    "Fuel your body well and it will carry you far.",
];

/// Qualitative logging consistency
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConsistencyLabel {
    /// At or above the excellent threshold
    Excellent,
    /// At or above the good threshold
    Good,
    /// At or above the fair threshold
    Fair,
    /// Below every threshold
    Poor,
}

/// How regularly the user logs and trains
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsistencyScore {
    /// Distinct calendar days with an entry
    pub logged_days: u32,
    /// Calendar days from the first to the last entry, inclusive
    pub span_days: u32,
    /// `logged_days / span_days` as a percentage
    pub logging_percent: f64,
    /// Share of entries with a completed workout, as a percentage
    pub workout_percent: f64,
    /// Band for `logging_percent`
    pub label: ConsistencyLabel,
}

/// Share of weeks whose weight moved in the goal's direction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklySuccessRate {
    /// Weeks with at least two entries
    pub weeks_evaluated: u32,
    /// Of those, weeks aligned with the goal
    pub successful_weeks: u32,
    /// `successful_weeks / weeks_evaluated` as a percentage
    pub success_percent: f64,
}

/// Guidance for the current trend relative to the goal
#[must_use]
pub fn trend_recommendation(trend: &TrendSummary, goal: Goal) -> String {
    let fast = trend.pace == TrendPace::Fast;
    match (goal, trend.direction) {
        (Goal::Lose, TrendDirection::Losing) if fast => {
            "You're losing weight quickly. Make sure you're eating enough to preserve muscle \
             and energy; aim for 0.5-1 kg per week."
                .to_owned()
        }
        (Goal::Lose, TrendDirection::Losing) => {
            "Great job! You're losing weight at a healthy, sustainable pace. Keep it up.".to_owned()
        }
        (Goal::Gain, TrendDirection::Gaining) if fast => {
            "You're gaining quickly. Slow down slightly to keep the gain mostly lean.".to_owned()
        }
        (Goal::Gain, TrendDirection::Gaining) => {
            "Nice work! You're gaining weight steadily, in line with your goal.".to_owned()
        }
        (Goal::Lose, TrendDirection::Gaining) => {
            "Your weight is trending up. Review your portions and consider a small calorie \
             reduction."
                .to_owned()
        }
        (Goal::Gain, TrendDirection::Losing) => {
            "Your weight is trending down. Add a nutrient-dense snack or increase portion sizes."
                .to_owned()
        }
        (Goal::Lose | Goal::Gain, TrendDirection::Maintaining) => {
            "Your weight is holding steady. A small change to calories or activity may help \
             restart progress."
                .to_owned()
        }
        (Goal::Maintain, TrendDirection::Maintaining) => {
            "Perfect! You're maintaining your weight consistently.".to_owned()
        }
        (Goal::Maintain, _) if fast => {
            "Your weight is changing faster than expected for maintenance. Revisit your daily \
             intake."
                .to_owned()
        }
        (Goal::Maintain, _) => {
            "Your weight is drifting slightly. Small adjustments will keep you on track.".to_owned()
        }
    }
}

/// Explain where the forecast ends up and how much to trust it
#[must_use]
pub fn prediction_reasoning(
    prediction: &PredictionResult,
    current_weight: f64,
    goal: Goal,
    config: &AdvisorConfig,
) -> String {
    let Some(last) = prediction.final_prediction() else {
        return "No projection available yet.".to_owned();
    };
    let change = last.weight - current_weight;
    let direction = if change < 0.0 { "down" } else { "up" };
    let mut reasoning = format!(
        "Based on your recent entries you are projected to reach {:.1} kg in {} days ({direction} {:.1} kg).",
        last.weight,
        last.day,
        change.abs()
    );

    reasoning.push_str(if is_goal_direction_aligned(goal, change, config.maintain_tolerance_kg) {
        " This is in line with your goal."
    } else {
        " This runs against your goal, so consider adjusting your plan."
    });

    if prediction.low_confidence {
        reasoning.push_str(&format!(
            " Your entries vary a lot (r² = {:.2}), so treat this projection as a rough estimate.",
            prediction.r2
        ));
    }
    reasoning
}

/// Feasibility guidance for a calorie deficit
#[must_use]
pub fn deficit_advice(deficit: &CalorieDeficit, config: &DeficitConfig) -> String {
    let magnitude = deficit.daily_deficit.abs().round();
    let kind = if deficit.daily_deficit >= 0.0 {
        "deficit"
    } else {
        "surplus"
    };
    if deficit.feasible {
        format!(
            "A daily {kind} of about {magnitude} kcal over {} days will get you to your target.",
            deficit.days_to_target
        )
    } else {
        format!(
            "Reaching your target by this date needs a daily {kind} of about {magnitude} kcal, \
             above the safe limit of {} kcal. Consider moving your target date.",
            config.max_daily_deficit_kcal
        )
    }
}

/// Logging and workout consistency over the series
#[must_use]
pub fn consistency_score(series: &ChronologicalSeries, config: &AdvisorConfig) -> ConsistencyScore {
    let (Some(first), Some(last)) = (series.first(), series.last()) else {
        return ConsistencyScore {
            logged_days: 0,
            span_days: 0,
            logging_percent: 0.0,
            workout_percent: 0.0,
            label: ConsistencyLabel::Poor,
        };
    };

    let logged: BTreeSet<_> = series.iter().map(|s| s.date.date_naive()).collect();
    let span = (last.date.date_naive() - first.date.date_naive()).num_days() + 1;
    let logged_days = u32::try_from(logged.len()).unwrap_or(u32::MAX);
    let span_days = u32::try_from(span).unwrap_or(u32::MAX).max(1);
    let logging_percent = f64::from(logged_days) / f64::from(span_days) * 100.0;
    let workouts = series.iter().filter(|s| s.workout_completed).count();
    let workout_percent = workouts as f64 / series.len() as f64 * 100.0;

    let label = if logging_percent >= config.consistency_excellent_percent {
        ConsistencyLabel::Excellent
    } else if logging_percent >= config.consistency_good_percent {
        ConsistencyLabel::Good
    } else if logging_percent >= config.consistency_fair_percent {
        ConsistencyLabel::Fair
    } else {
        ConsistencyLabel::Poor
    };

    ConsistencyScore {
        logged_days,
        span_days,
        logging_percent,
        workout_percent,
        label,
    }
}

/// Whether a weight change moves toward the goal
///
/// A maintain goal counts any change within `tolerance_kg` as aligned.
#[must_use]
pub fn is_goal_direction_aligned(goal: Goal, change_kg: f64, tolerance_kg: f64) -> bool {
    match goal {
        Goal::Lose => change_kg < 0.0,
        Goal::Gain => change_kg > 0.0,
        Goal::Maintain => change_kg.abs() <= tolerance_kg,
    }
}

/// Share of seven-day blocks, counted from the first entry, that moved toward the goal
///
/// Blocks with fewer than two entries are skipped. Returns `None` when no
/// block qualifies.
#[must_use]
pub fn weekly_success_rate(
    series: &ChronologicalSeries,
    goal: Goal,
    tolerance_kg: f64,
) -> Option<WeeklySuccessRate> {
    let start = series.first()?.date;
    let mut weeks: BTreeMap<i64, (f64, f64, usize)> = BTreeMap::new();
    for sample in series {
        let week = (sample.date - start).num_days() / 7;
        weeks
            .entry(week)
            .and_modify(|(_, last, count)| {
                *last = sample.weight;
                *count += 1;
            })
            .or_insert((sample.weight, sample.weight, 1));
    }

    let changes: Vec<f64> = weeks
        .values()
        .filter(|(_, _, count)| *count >= 2)
        .map(|(first, last, _)| last - first)
        .collect();
    if changes.is_empty() {
        return None;
    }

    let successful = changes
        .iter()
        .filter(|&&change| is_goal_direction_aligned(goal, change, tolerance_kg))
        .count();
    Some(WeeklySuccessRate {
        weeks_evaluated: u32::try_from(changes.len()).unwrap_or(u32::MAX),
        successful_weeks: u32::try_from(successful).unwrap_or(u32::MAX),
        success_percent: successful as f64 / changes.len() as f64 * 100.0,
    })
}

/// Five-point ordinal score of a mood
#[must_use]
pub const fn mood_score(mood: Mood) -> u8 {
    mood.score()
}

/// Mood average where later entries weigh more (weight = position among mood entries)
#[must_use]
pub fn weighted_mood_average(series: &ChronologicalSeries) -> Option<f64> {
    let (weighted_sum, weight_total) = series
        .iter()
        .filter_map(|sample| sample.mood)
        .enumerate()
        .fold((0.0, 0.0), |(sum, total), (index, mood)| {
            let weight = (index + 1) as f64;
            (weight.mul_add(f64::from(mood_score(mood)), sum), total + weight)
        });
    (weight_total > 0.0).then_some(weighted_sum / weight_total)
}

/// Pick a motivational message from a fixed pool
pub fn motivational_message<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    MOTIVATIONAL_MESSAGES
        .choose(rng)
        .copied()
        .unwrap_or(MOTIVATIONAL_MESSAGES[0])
}

/// Every message `motivational_message` can return
#[must_use]
pub const fn motivational_messages() -> &'static [&'static str] {
    &MOTIVATIONAL_MESSAGES
}
