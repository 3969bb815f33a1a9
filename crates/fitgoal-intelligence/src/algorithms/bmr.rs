// ABOUTME: Basal metabolic rate equations with enum dispatch between formulas
// ABOUTME: Mifflin-St Jeor (canonical) and revised Harris-Benedict with configurable coefficients

use crate::config::{BmrConfig, HarrisBenedictCoefficients};
use fitgoal_core::errors::AppError;
use fitgoal_core::models::Gender;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// BMR equation selection
///
/// The two equations are NOT interchangeable: for the same profile they differ
/// by tens of kcal. Exactly one is configured and every calculation reads it.
///
/// # Scientific References
///
/// - Mifflin, M.D., et al. (1990). A new predictive equation for resting energy
///   expenditure. *Am J Clin Nutr*, 51(2), 241-247.
/// - Roza, A.M. & Shizgal, H.M. (1984). The Harris Benedict equation reevaluated.
///   *Am J Clin Nutr*, 40(1), 168-182.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum BmrFormula {
    /// `10w + 6.25h - 5a + s`, s = +5 (male) / -161 (female)
    #[default]
    MifflinStJeor,

    /// Revised Harris-Benedict with separate male and female coefficient sets
    HarrisBenedict,
}

impl BmrFormula {
    /// Calculate BMR in kcal/day
    ///
    /// `Gender::Other` uses the midpoint of the male and female results.
    #[must_use]
    pub fn calculate(
        self,
        weight_kg: f64,
        height_cm: f64,
        age: u32,
        gender: Gender,
        config: &BmrConfig,
    ) -> f64 {
        match self {
            Self::MifflinStJeor => {
                let base = config.msj_age_coef.mul_add(
                    f64::from(age),
                    config
                        .msj_weight_coef
                        .mul_add(weight_kg, config.msj_height_coef * height_cm),
                );
                let constant = match gender {
                    Gender::Male => config.msj_male_constant,
                    Gender::Female => config.msj_female_constant,
                    Gender::Other => (config.msj_male_constant + config.msj_female_constant) / 2.0,
                };
                base + constant
            }
            Self::HarrisBenedict => {
                let male = harris_benedict(&config.hb_male, weight_kg, height_cm, age);
                let female = harris_benedict(&config.hb_female, weight_kg, height_cm, age);
                match gender {
                    Gender::Male => male,
                    Gender::Female => female,
                    Gender::Other => (male + female) / 2.0,
                }
            }
        }
    }

    /// Get algorithm name for logging and debugging
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::MifflinStJeor => "mifflin_st_jeor",
            Self::HarrisBenedict => "harris_benedict",
        }
    }

    /// Get algorithm description
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::MifflinStJeor => "Mifflin-St Jeor (1990)",
            Self::HarrisBenedict => "Harris-Benedict, Roza & Shizgal revision (1984)",
        }
    }
}

fn harris_benedict(
    coefficients: &HarrisBenedictCoefficients,
    weight_kg: f64,
    height_cm: f64,
    age: u32,
) -> f64 {
    coefficients.age_coef.mul_add(
        f64::from(age),
        coefficients.height_coef.mul_add(
            height_cm,
            coefficients
                .weight_coef
                .mul_add(weight_kg, coefficients.constant),
        ),
    )
}

impl FromStr for BmrFormula {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mifflin_st_jeor" | "mifflin" | "msj" => Ok(Self::MifflinStJeor),
            "harris_benedict" | "hb" => Ok(Self::HarrisBenedict),
            other => Err(AppError::invalid_input(format!(
                "Unknown BMR formula: '{other}'. Valid options: mifflin_st_jeor, harris_benedict"
            ))),
        }
    }
}
