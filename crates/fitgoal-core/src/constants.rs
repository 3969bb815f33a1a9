// ABOUTME: Nutrition, energy and analytics constants used across the workspace
// ABOUTME: Grouped by domain so call sites read as energy::KCAL_PER_LB etc.
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitGoal AI

//! Shared constants organized by domain.

/// Energy density and unit conversion constants
///
/// References:
/// - Wishnofsky, M. (1958). Caloric equivalents of gained or lost weight.
///   *American Journal of Clinical Nutrition*, 6(5), 542-546.
pub mod energy {
    /// Approximate kcal stored in one pound of body weight
    pub const KCAL_PER_LB: f64 = 3500.0;

    /// Pounds per kilogram, as used by the deficit and protein formulas
    pub const LB_PER_KG: f64 = 2.2;

    /// Atwater factor for protein (kcal/g)
    pub const KCAL_PER_G_PROTEIN: f64 = 4.0;

    /// Atwater factor for carbohydrate (kcal/g)
    pub const KCAL_PER_G_CARBS: f64 = 4.0;

    /// Atwater factor for fat (kcal/g)
    pub const KCAL_PER_G_FAT: f64 = 9.0;
}

/// Calendar constants
pub mod time {
    /// Days per week
    pub const DAYS_PER_WEEK: f64 = 7.0;

    /// Seconds per day
    pub const SECONDS_PER_DAY: i64 = 86_400;
}

/// Minimum sample counts per analysis
pub mod sample_requirements {
    /// Trend and prediction need a first and a last point
    pub const MIN_TREND_SAMPLES: usize = 2;

    /// Plateau detection looks at two full weeks of daily logs
    pub const PLATEAU_WINDOW: usize = 14;
}

/// Profile validation bounds
pub mod profile_limits {
    /// Maximum plausible body weight (kg)
    pub const MAX_WEIGHT_KG: f64 = 300.0;

    /// Maximum plausible height (cm)
    pub const MAX_HEIGHT_CM: f64 = 300.0;

    /// Youngest age the BMR equations are validated for
    pub const MIN_AGE: u32 = 10;

    /// Oldest supported age
    pub const MAX_AGE: u32 = 120;

    /// Energy level scale bounds (inclusive)
    pub const ENERGY_LEVEL_RANGE: (u8, u8) = (1, 10);
}

/// Service identity used in structured logs
pub mod service_names {
    /// Name reported by the logging subsystem
    pub const FITGOAL_ANALYTICS: &str = "fitgoal-analytics";
}
