// ABOUTME: Aggregate lifestyle and body composition statistics over a progress series
// ABOUTME: Averages only over entries that logged each optional field

#![allow(clippy::cast_precision_loss)] // Safe: sample counts are small

use fitgoal_core::models::{ChronologicalSeries, ProgressSample};
use serde::{Deserialize, Serialize};

/// Summary of everything logged besides weight
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressSummary {
    /// Entries in the series
    pub entries: usize,
    /// Entries with a completed workout
    pub workouts_completed: usize,
    /// Mean daily steps
    pub average_steps: Option<f64>,
    /// Mean water intake (ml)
    pub average_water_intake: Option<f64>,
    /// Mean sleep (hours)
    pub average_sleep_hours: Option<f64>,
    /// Mean energy level (1-10)
    pub average_energy_level: Option<f64>,
    /// Last minus first logged body fat (%)
    pub body_fat_change: Option<f64>,
    /// Last minus first logged muscle mass (kg)
    pub muscle_mass_change: Option<f64>,
}

/// Summarize the optional fields of every entry
#[must_use]
pub fn summarize_progress(series: &ChronologicalSeries) -> ProgressSummary {
    let samples = series.samples();
    ProgressSummary {
        entries: samples.len(),
        workouts_completed: samples.iter().filter(|s| s.workout_completed).count(),
        average_steps: mean(samples.iter().filter_map(|s| s.daily_steps.map(f64::from))),
        average_water_intake: mean(samples.iter().filter_map(|s| s.water_intake.map(f64::from))),
        average_sleep_hours: mean(samples.iter().filter_map(|s| s.sleep_hours)),
        average_energy_level: mean(samples.iter().filter_map(|s| s.energy_level.map(f64::from))),
        body_fat_change: change(samples, |s| s.body_fat),
        muscle_mass_change: change(samples, |s| s.muscle_mass),
    }
}

fn mean(values: impl Iterator<Item = f64>) -> Option<f64> {
    let (sum, count) = values.fold((0.0, 0_usize), |(sum, count), v| (sum + v, count + 1));
    (count > 0).then_some(sum / count as f64)
}

/// Change between the first and last entries that logged the field
fn change(samples: &[ProgressSample], field: impl Fn(&ProgressSample) -> Option<f64>) -> Option<f64> {
    let first = samples.iter().find_map(&field)?;
    let last = samples.iter().rev().find_map(&field)?;
    Some(last - first)
}
