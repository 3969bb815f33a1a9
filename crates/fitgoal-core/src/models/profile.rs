// ABOUTME: User profile fields that drive energy and macro calculations
// ABOUTME: Defines UserProfile, Gender, ActivityLevel, Goal and MacroTargets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitGoal AI

use crate::constants::profile_limits::{MAX_AGE, MAX_HEIGHT_CM, MAX_WEIGHT_KG, MIN_AGE};
use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Gender used to pick the BMR constant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Gender {
    /// Male constant
    Male,
    /// Female constant
    Female,
    /// Midpoint of the male and female constants
    Other,
}

/// Habitual activity level, mapped to a TDEE multiplier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ActivityLevel {
    /// Little or no exercise
    Sedentary,
    /// Exercise 1-3 days/week
    Light,
    /// Exercise 3-5 days/week
    Moderate,
    /// Exercise 6-7 days/week
    Active,
    /// Hard training or a physical job
    VeryActive,
}

/// Body weight goal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Goal {
    /// Lose weight
    Lose,
    /// Hold weight steady
    Maintain,
    /// Gain weight
    Gain,
}

/// Profile fields read by the analytics layer
///
/// `target_weight` and `target_date` are only loosely consistent with `goal`;
/// nothing here enforces that a `lose` goal has a lower target weight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    /// Body weight in kilograms
    pub weight: f64,
    /// Height in centimetres
    pub height: f64,
    /// Age in years
    pub age: u32,
    /// Gender for the BMR constant
    pub gender: Gender,
    /// Activity level for the TDEE multiplier
    pub activity_level: ActivityLevel,
    /// Weight goal
    pub goal: Goal,
    /// Desired weight in kilograms
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_weight: Option<f64>,
    /// Date by which the target weight should be reached
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_date: Option<DateTime<Utc>>,
}

impl UserProfile {
    /// Check the biometric fields are inside the ranges the formulas support
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` when weight, height, age or target weight are out of range
    pub fn validate(&self) -> AppResult<()> {
        if !self.weight.is_finite() || self.weight <= 0.0 || self.weight > MAX_WEIGHT_KG {
            return Err(AppError::invalid_input(format!(
                "Weight must be between 0 and {MAX_WEIGHT_KG} kg"
            )));
        }
        if !self.height.is_finite() || self.height <= 0.0 || self.height > MAX_HEIGHT_CM {
            return Err(AppError::invalid_input(format!(
                "Height must be between 0 and {MAX_HEIGHT_CM} cm"
            )));
        }
        if !(MIN_AGE..=MAX_AGE).contains(&self.age) {
            return Err(AppError::invalid_input(format!(
                "Age must be between {MIN_AGE} and {MAX_AGE} years"
            )));
        }
        if let Some(target) = self.target_weight {
            if !target.is_finite() || target <= 0.0 || target > MAX_WEIGHT_KG {
                return Err(AppError::invalid_input(format!(
                    "Target weight must be between 0 and {MAX_WEIGHT_KG} kg"
                )));
            }
        }
        Ok(())
    }
}

/// Daily calorie and macronutrient targets
///
/// Derived from the profile and recomputed whenever weight, height, age,
/// gender, activity level or goal change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MacroTargets {
    /// kcal/day
    pub calories: u32,
    /// grams/day
    pub protein: u32,
    /// grams/day
    pub carbs: u32,
    /// grams/day
    pub fat: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> UserProfile {
        UserProfile {
            weight: 80.0,
            height: 180.0,
            age: 30,
            gender: Gender::Male,
            activity_level: ActivityLevel::Moderate,
            goal: Goal::Lose,
            target_weight: Some(75.0),
            target_date: None,
        }
    }

    #[test]
    fn test_valid_profile() {
        assert!(profile().validate().is_ok());
    }

    #[test]
    fn test_age_out_of_range() {
        let young = UserProfile { age: 8, ..profile() };
        assert!(young.validate().is_err());
    }

    #[test]
    fn test_activity_level_serializes_camel_case() {
        let json = serde_json::to_string(&ActivityLevel::VeryActive).unwrap_or_default();
        assert_eq!(json, "\"veryActive\"");
    }
}
