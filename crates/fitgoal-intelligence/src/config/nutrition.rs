// ABOUTME: Nutrition configuration for BMR, TDEE and macro target calculation
// ABOUTME: Holds formula coefficients, activity multipliers, goal offsets and calorie bounds
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitGoal AI

//! Nutrition Configuration
//!
//! # Scientific References
//!
//! - BMR: Mifflin et al. (1990) DOI: 10.1093/ajcn/51.2.241
//! - BMR (alternative): Roza & Shizgal (1984) revision of Harris-Benedict,
//!   DOI: 10.1093/ajcn/40.1.168

use crate::algorithms::BmrFormula;
use serde::{Deserialize, Serialize};

/// Nutrition configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NutritionConfig {
    /// BMR formula and coefficients
    pub bmr: BmrConfig,
    /// Activity multipliers for TDEE
    pub activity_factors: ActivityFactorsConfig,
    /// Goal offsets and safety bounds on the calorie target
    pub calorie_targets: CalorieTargetConfig,
    /// Protein and fat rules
    pub macronutrients: MacronutrientConfig,
}

/// Coefficients of a Harris-Benedict style equation
///
/// `BMR = constant + weight_coef * kg + height_coef * cm + age_coef * years`
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct HarrisBenedictCoefficients {
    /// Intercept
    pub constant: f64,
    /// Per kilogram
    pub weight_coef: f64,
    /// Per centimetre
    pub height_coef: f64,
    /// Per year (negative)
    pub age_coef: f64,
}

/// BMR calculation configuration
///
/// A single formula is selected here and every call site reads it, so two
/// code paths can never disagree about a user's calorie target.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BmrConfig {
    /// Canonical formula
    pub formula: BmrFormula,
    /// Mifflin-St Jeor weight coefficient (10.0)
    pub msj_weight_coef: f64,
    /// Mifflin-St Jeor height coefficient (6.25)
    pub msj_height_coef: f64,
    /// Mifflin-St Jeor age coefficient (-5.0)
    pub msj_age_coef: f64,
    /// Mifflin-St Jeor male constant (+5)
    pub msj_male_constant: f64,
    /// Mifflin-St Jeor female constant (-161)
    pub msj_female_constant: f64,
    /// Harris-Benedict (revised) male coefficients
    pub hb_male: HarrisBenedictCoefficients,
    /// Harris-Benedict (revised) female coefficients
    pub hb_female: HarrisBenedictCoefficients,
}

impl Default for BmrConfig {
    fn default() -> Self {
        Self {
            formula: BmrFormula::MifflinStJeor,
            msj_weight_coef: 10.0,
            msj_height_coef: 6.25,
            msj_age_coef: -5.0,
            msj_male_constant: 5.0,
            msj_female_constant: -161.0,
            hb_male: HarrisBenedictCoefficients {
                constant: 88.362,
                weight_coef: 13.397,
                height_coef: 4.799,
                age_coef: -5.677,
            },
            hb_female: HarrisBenedictCoefficients {
                constant: 447.593,
                weight_coef: 9.247,
                height_coef: 3.098,
                age_coef: -4.330,
            },
        }
    }
}

/// Activity factor multipliers for TDEE calculation
///
/// Reference: `McArdle`, W.D., Katch, F.I., & Katch, V.L. (2010). Exercise Physiology
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityFactorsConfig {
    /// Sedentary: 1.2
    pub sedentary: f64,
    /// Light: 1.375
    pub light: f64,
    /// Moderate: 1.55
    pub moderate: f64,
    /// Active: 1.725
    pub active: f64,
    /// Very active: 1.9
    pub very_active: f64,
}

impl Default for ActivityFactorsConfig {
    fn default() -> Self {
        Self {
            sedentary: 1.2,
            light: 1.375,
            moderate: 1.55,
            active: 1.725,
            very_active: 1.9,
        }
    }
}

/// Goal offset and safety bounds applied to TDEE
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalorieTargetConfig {
    /// kcal/day subtracted for `lose`, added for `gain`
    pub goal_adjustment_kcal: f64,
    /// Floor on the daily target
    pub min_daily_calories: f64,
    /// Ceiling on the daily target
    pub max_daily_calories: f64,
}

impl Default for CalorieTargetConfig {
    fn default() -> Self {
        Self {
            goal_adjustment_kcal: 500.0,
            min_daily_calories: 1200.0,
            max_daily_calories: 4000.0,
        }
    }
}

/// Macronutrient split rules
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MacronutrientConfig {
    /// Protein grams per pound of body weight (0.8)
    pub protein_g_per_lb: f64,
    /// Share of calories from fat, in percent (25)
    pub fat_percent_of_calories: f64,
}

impl Default for MacronutrientConfig {
    fn default() -> Self {
        Self {
            protein_g_per_lb: 0.8,
            fat_percent_of_calories: 25.0,
        }
    }
}
