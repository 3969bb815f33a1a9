// ABOUTME: BMR, TDEE and daily macronutrient targets from a user profile
// ABOUTME: One configured BMR formula feeds every call site; calories are always clamped
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitGoal AI

//! # Macro Calculator
//!
//! ```text
//! BMR      = configured formula (Mifflin-St Jeor by default)
//! TDEE     = BMR × activity factor
//! calories = clamp(TDEE ± goal adjustment, min, max)
//! protein  = weight_kg × 2.2 × 0.8 g
//! fat      = 25% of calories / 9
//! carbs    = remaining calories / 4
//! ```

#![allow(clippy::cast_possible_truncation)] // Safe: values are clamped and non-negative
#![allow(clippy::cast_sign_loss)] // Safe: values are clamped and non-negative

use crate::algorithms::BmrFormula;
use crate::config::{ActivityFactorsConfig, NutritionConfig};
use fitgoal_core::constants::energy::{
    KCAL_PER_G_CARBS, KCAL_PER_G_FAT, KCAL_PER_G_PROTEIN, LB_PER_KG,
};
use fitgoal_core::errors::AppResult;
use fitgoal_core::models::{ActivityLevel, Goal, MacroTargets, UserProfile};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Intermediate energy figures behind a set of macro targets
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnergyBudget {
    /// Formula used for the BMR
    pub formula: BmrFormula,
    /// Basal metabolic rate (kcal/day)
    pub bmr: f64,
    /// Total daily energy expenditure (kcal/day)
    pub tdee: f64,
    /// Goal-adjusted, clamped calorie target (kcal/day, unrounded)
    pub target_calories: f64,
}

/// Profile-driven calorie and macro calculator
pub struct MacroCalculator;

impl MacroCalculator {
    /// BMR with the configured formula
    #[must_use]
    pub fn calculate_bmr(profile: &UserProfile, config: &NutritionConfig) -> f64 {
        config.bmr.formula.calculate(
            profile.weight,
            profile.height,
            profile.age,
            profile.gender,
            &config.bmr,
        )
    }

    /// TDEE = BMR × activity factor
    #[must_use]
    pub fn calculate_tdee(profile: &UserProfile, config: &NutritionConfig) -> f64 {
        Self::calculate_bmr(profile, config)
            * activity_factor(profile.activity_level, &config.activity_factors)
    }

    /// BMR, TDEE and the goal-adjusted calorie target
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the profile fails validation
    pub fn calculate_energy_budget(
        profile: &UserProfile,
        config: &NutritionConfig,
    ) -> AppResult<EnergyBudget> {
        profile.validate()?;

        let bmr = Self::calculate_bmr(profile, config);
        let tdee = bmr * activity_factor(profile.activity_level, &config.activity_factors);
        let targets = &config.calorie_targets;
        let adjusted = match profile.goal {
            Goal::Lose => tdee - targets.goal_adjustment_kcal,
            Goal::Maintain => tdee,
            Goal::Gain => tdee + targets.goal_adjustment_kcal,
        };
        let target_calories =
            adjusted.clamp(targets.min_daily_calories, targets.max_daily_calories);

        debug!(
            formula = config.bmr.formula.name(),
            bmr, tdee, target_calories, "Calculated energy budget"
        );

        Ok(EnergyBudget {
            formula: config.bmr.formula,
            bmr,
            tdee,
            target_calories,
        })
    }

    /// Daily calorie and macro targets, every value rounded to the nearest integer
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the profile fails validation
    pub fn calculate_macros(
        profile: &UserProfile,
        config: &NutritionConfig,
    ) -> AppResult<MacroTargets> {
        let budget = Self::calculate_energy_budget(profile, config)?;
        let calories = budget.target_calories.round();
        Ok(split_macros(calories, profile.weight, config))
    }
}

/// Split a calorie total into protein, fat and carbohydrate grams
pub(crate) fn split_macros(calories: f64, weight_kg: f64, config: &NutritionConfig) -> MacroTargets {
    let macros = &config.macronutrients;
    let protein = weight_kg * LB_PER_KG * macros.protein_g_per_lb;
    let fat = calories * macros.fat_percent_of_calories / 100.0 / KCAL_PER_G_FAT;
    let remaining = fat.mul_add(
        -KCAL_PER_G_FAT,
        protein.mul_add(-KCAL_PER_G_PROTEIN, calories),
    );
    let carbs = (remaining / KCAL_PER_G_CARBS).max(0.0);

    MacroTargets {
        calories: to_grams(calories),
        protein: to_grams(protein),
        carbs: to_grams(carbs),
        fat: to_grams(fat),
    }
}

fn to_grams(value: f64) -> u32 {
    value.round().clamp(0.0, f64::from(u32::MAX)) as u32
}

const fn activity_factor(level: ActivityLevel, factors: &ActivityFactorsConfig) -> f64 {
    match level {
        ActivityLevel::Sedentary => factors.sedentary,
        ActivityLevel::Light => factors.light,
        ActivityLevel::Moderate => factors.moderate,
        ActivityLevel::Active => factors.active,
        ActivityLevel::VeryActive => factors.very_active,
    }
}
