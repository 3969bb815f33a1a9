// ABOUTME: Recipe search result shape consumed by the clustering component
// ABOUTME: Defines RecipeCandidate and per-serving NutritionFacts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitGoal AI

use serde::{Deserialize, Serialize};

/// Per-serving nutrition; missing values count as zero
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NutritionFacts {
    /// kcal
    #[serde(default)]
    pub calories: Option<f64>,
    /// grams
    #[serde(default)]
    pub protein: Option<f64>,
    /// grams
    #[serde(default)]
    pub carbs: Option<f64>,
    /// grams
    #[serde(default)]
    pub fat: Option<f64>,
}

impl NutritionFacts {
    /// Build from all four macros
    #[must_use]
    pub const fn new(calories: f64, protein: f64, carbs: f64, fat: f64) -> Self {
        Self {
            calories: Some(calories),
            protein: Some(protein),
            carbs: Some(carbs),
            fat: Some(fat),
        }
    }

    /// `[calories, protein, carbs, fat]` with missing values as 0
    #[must_use]
    pub fn feature_vector(&self) -> [f64; 4] {
        [
            self.calories.unwrap_or(0.0),
            self.protein.unwrap_or(0.0),
            self.carbs.unwrap_or(0.0),
            self.fat.unwrap_or(0.0),
        ]
    }
}

/// A recipe returned by the search collaborator
///
/// The analytics treat it as an opaque nutrition vector; display metadata is
/// carried through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeCandidate {
    /// Identifier assigned by the recipe provider
    pub id: String,
    /// Display title
    pub title: String,
    /// Per-serving nutrition
    #[serde(default)]
    pub nutrition: NutritionFacts,
    /// Image URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Preparation time
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ready_in_minutes: Option<u32>,
    /// Servings per recipe
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub servings: Option<u32>,
}

impl RecipeCandidate {
    /// Create a candidate without display metadata
    pub fn new(id: impl Into<String>, title: impl Into<String>, nutrition: NutritionFacts) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            nutrition,
            image: None,
            ready_in_minutes: None,
            servings: None,
        }
    }
}
