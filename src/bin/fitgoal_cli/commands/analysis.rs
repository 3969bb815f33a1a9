// ABOUTME: Analytics commands for fitgoal-cli
// ABOUTME: Loads a request document, runs the service and prints the result
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitGoal AI

use chrono::Utc;
use fitgoal_ai::errors::AppResult;
use fitgoal_ai::service::{AnalysisRequest, AnalyticsService, DEFAULT_DAYS_AHEAD};
use rand::Rng;
use std::path::Path;
use tracing::info;

use crate::helpers::display::print_json;

/// Print the full progress report
pub fn report<R: Rng>(
    service: &AnalyticsService,
    path: &Path,
    days_ahead: Option<i64>,
    rng: &mut R,
) -> AppResult<()> {
    let request = AnalysisRequest::from_json_file(path)?;
    let days_ahead = days_ahead
        .or(request.days_ahead)
        .unwrap_or(DEFAULT_DAYS_AHEAD);
    info!(
        samples = request.samples.len(),
        days_ahead, "Building progress report"
    );

    let report = service.progress_report(
        &request.profile,
        request.samples,
        days_ahead,
        request.as_of.unwrap_or_else(Utc::now),
        rng,
    )?;
    print_json(&report)
}

/// Print daily macro targets
pub fn macros(service: &AnalyticsService, path: &Path) -> AppResult<()> {
    let request = AnalysisRequest::from_json_file(path)?;
    print_json(&service.macros(&request.profile)?)
}

/// Print ranked recipe clusters
pub fn recipes<R: Rng>(
    service: &AnalyticsService,
    path: &Path,
    k: Option<usize>,
    rng: &mut R,
) -> AppResult<()> {
    let request = AnalysisRequest::from_json_file(path)?;
    info!(recipes = request.recipes.len(), "Clustering recipes");

    let clusters =
        service.recipe_recommendations(&request.profile, &request.recipes, k.or(request.k), rng)?;
    print_json(&clusters)
}
