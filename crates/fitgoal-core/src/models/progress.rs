// ABOUTME: Daily progress log entry with weight, body composition and wellbeing fields
// ABOUTME: Defines ProgressSample and the five-point Mood scale
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitGoal AI

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Self-reported mood on a five-point ordinal scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Mood {
    /// Lowest point of the scale
    Exhausted,
    /// Below average
    Tired,
    /// Neither good nor bad
    Neutral,
    /// Above average
    Good,
    /// Highest point of the scale
    Excellent,
}

impl Mood {
    /// Ordinal score, 1 (exhausted) through 5 (excellent)
    #[must_use]
    pub const fn score(self) -> u8 {
        match self {
            Self::Exhausted => 1,
            Self::Tired => 2,
            Self::Neutral => 3,
            Self::Good => 4,
            Self::Excellent => 5,
        }
    }
}

/// One logged day of progress
///
/// Uniqueness of one entry per user per calendar day is enforced by the
/// persistence collaborator, not here.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressSample {
    /// When the entry was logged
    pub date: DateTime<Utc>,
    /// Body weight in kilograms
    pub weight: f64,
    /// Body fat percentage
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body_fat: Option<f64>,
    /// Muscle mass in kilograms
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub muscle_mass: Option<f64>,
    /// Self-reported mood
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mood: Option<Mood>,
    /// Self-reported energy, 1-10
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub energy_level: Option<u8>,
    /// Whether the planned workout was done
    #[serde(default)]
    pub workout_completed: bool,
    /// Step count
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub daily_steps: Option<u32>,
    /// Water intake in millilitres
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub water_intake: Option<u32>,
    /// Hours slept
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sleep_hours: Option<f64>,
}

impl ProgressSample {
    /// Create a sample carrying only a date and a weight
    #[must_use]
    pub fn new(date: DateTime<Utc>, weight: f64) -> Self {
        Self {
            date,
            weight,
            ..Self::default()
        }
    }

    /// Set the mood
    #[must_use]
    pub fn with_mood(mut self, mood: Mood) -> Self {
        self.mood = Some(mood);
        self
    }

    /// Set the energy level
    #[must_use]
    pub fn with_energy_level(mut self, level: u8) -> Self {
        self.energy_level = Some(level);
        self
    }

    /// Mark the workout as completed
    #[must_use]
    pub fn with_workout_completed(mut self, completed: bool) -> Self {
        self.workout_completed = completed;
        self
    }

    /// Set body composition measurements
    #[must_use]
    pub fn with_body_composition(mut self, body_fat: f64, muscle_mass: f64) -> Self {
        self.body_fat = Some(body_fat);
        self.muscle_mass = Some(muscle_mass);
        self
    }

    /// Set steps, water and sleep
    #[must_use]
    pub fn with_lifestyle(mut self, steps: u32, water_ml: u32, sleep_hours: f64) -> Self {
        self.daily_steps = Some(steps);
        self.water_intake = Some(water_ml);
        self.sleep_hours = Some(sleep_hours);
        self
    }
}
