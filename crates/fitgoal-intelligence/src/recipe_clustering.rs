// ABOUTME: Groups recipe candidates by macro profile and ranks groups against per-meal targets
// ABOUTME: k-means over calories, protein, carbs and fat with weighted fitness scoring
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitGoal AI

#![allow(clippy::cast_precision_loss)] // Safe: recipe counts are small

use crate::algorithms::kmeans;
use crate::config::{AnalyticsConfig, RecommendationBands, ScoreWeights};
use crate::nutrition_calculator::MacroCalculator;
use fitgoal_core::errors::{AppError, AppResult};
use fitgoal_core::models::{MacroTargets, NutritionFacts, RecipeCandidate, UserProfile};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Macro targets for a single meal
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MealTargets {
    /// kcal
    pub calories: f64,
    /// grams
    pub protein: f64,
    /// grams
    pub carbs: f64,
    /// grams
    pub fat: f64,
}

impl MealTargets {
    /// Divide daily targets evenly across meals
    #[must_use]
    pub fn per_meal(daily: &MacroTargets, meals_per_day: u8) -> Self {
        let meals = f64::from(meals_per_day.max(1));
        Self {
            calories: f64::from(daily.calories) / meals,
            protein: f64::from(daily.protein) / meals,
            carbs: f64::from(daily.carbs) / meals,
            fat: f64::from(daily.fat) / meals,
        }
    }
}

/// A group of recipes with similar macros
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeCluster {
    /// k-means cluster index (stable within one call only)
    pub cluster_id: usize,
    /// Member recipes in input order
    pub recipes: Vec<RecipeCandidate>,
    /// Mean macros of the members
    pub average_nutrition: NutritionFacts,
    /// Weighted fitness against the per-meal targets; may be negative
    pub score: f64,
    /// Text band for the score
    pub recommendation: String,
}

/// Recipe clusterer
pub struct RecipeClusterer;

impl RecipeClusterer {
    /// Cluster recipes and rank the clusters for this profile
    ///
    /// An empty recipe list yields no clusters whatever `k` is. `None` uses the
    /// configured default `k`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` when `k` is outside `1..=recipes.len()`, and
    /// `InvalidInput` if the profile fails validation
    pub fn cluster_recipes<R: Rng + ?Sized>(
        recipes: &[RecipeCandidate],
        profile: &UserProfile,
        k: Option<usize>,
        rng: &mut R,
        config: &AnalyticsConfig,
    ) -> AppResult<Vec<RecipeCluster>> {
        if recipes.is_empty() {
            return Ok(Vec::new());
        }
        let clustering = &config.clustering;
        let k = k.unwrap_or(clustering.kmeans.default_k);
        if k == 0 || k > recipes.len() {
            return Err(AppError::invalid_parameter(format!(
                "k must be between 1 and {} (number of recipes), got {k}",
                recipes.len()
            )));
        }

        let daily = MacroCalculator::calculate_macros(profile, &config.nutrition)?;
        let targets = MealTargets::per_meal(&daily, clustering.meals_per_day);

        let points: Vec<[f64; 4]> = recipes.iter().map(|r| r.nutrition.feature_vector()).collect();
        let result = kmeans(
            &points,
            k,
            clustering.kmeans.max_iterations,
            clustering.kmeans.tolerance,
            rng,
        )?;
        debug!(
            recipes = recipes.len(),
            k,
            iterations = result.iterations,
            converged = result.converged,
            "Clustered recipes"
        );

        let mut members: Vec<Vec<RecipeCandidate>> = vec![Vec::new(); k];
        for (recipe, &cluster) in recipes.iter().zip(&result.assignments) {
            members[cluster].push(recipe.clone());
        }

        let mut clusters: Vec<RecipeCluster> = members
            .into_iter()
            .enumerate()
            .filter(|(_, recipes)| !recipes.is_empty())
            .map(|(cluster_id, recipes)| {
                let average_nutrition = average_nutrition(&recipes);
                let score = cluster_score(&average_nutrition, &targets, &clustering.score_weights);
                RecipeCluster {
                    cluster_id,
                    recipes,
                    average_nutrition,
                    score,
                    recommendation: recommendation_for(score, &clustering.bands).to_owned(),
                }
            })
            .collect();

        clusters.sort_by(|a, b| b.score.total_cmp(&a.score));
        Ok(clusters)
    }
}

/// Mean of each macro, missing values counted as zero
fn average_nutrition(recipes: &[RecipeCandidate]) -> NutritionFacts {
    let n = recipes.len().max(1) as f64;
    let mut sums = [0.0; 4];
    for recipe in recipes {
        for (sum, value) in sums.iter_mut().zip(recipe.nutrition.feature_vector()) {
            *sum += value;
        }
    }
    NutritionFacts::new(sums[0] / n, sums[1] / n, sums[2] / n, sums[3] / n)
}

/// `100 - |actual - target| / target * 100`, unclamped; zero for a non-positive target
fn sub_score(actual: f64, target: f64) -> f64 {
    if target <= 0.0 {
        return 0.0;
    }
    100.0 - (actual - target).abs() / target * 100.0
}

/// Weighted fitness of a cluster's average macros against per-meal targets
#[must_use]
pub fn cluster_score(average: &NutritionFacts, targets: &MealTargets, weights: &ScoreWeights) -> f64 {
    let [calories, protein, carbs, fat] = average.feature_vector();
    weights.fat.mul_add(
        sub_score(fat, targets.fat),
        weights.carbs.mul_add(
            sub_score(carbs, targets.carbs),
            weights.calories.mul_add(
                sub_score(calories, targets.calories),
                weights.protein * sub_score(protein, targets.protein),
            ),
        ),
    )
}

/// Recommendation text for a score
#[must_use]
pub fn recommendation_for(score: f64, bands: &RecommendationBands) -> &'static str {
    if score >= bands.excellent {
        "excellent"
    } else if score >= bands.good {
        "good"
    } else if score >= bands.moderate {
        "moderate"
    } else {
        "consider other options"
    }
}
