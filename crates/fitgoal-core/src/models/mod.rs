// ABOUTME: Domain models consumed and produced by the analytics layer
// ABOUTME: Progress samples, user profiles, recipes and the chronological series wrapper
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitGoal AI

//! Core data models.
//!
//! All models are transient: they are built per request from data fetched by
//! the persistence collaborator and discarded after the response is sent.

mod profile;
mod progress;
mod recipe;
mod series;

pub use profile::{ActivityLevel, Gender, Goal, MacroTargets, UserProfile};
pub use progress::{Mood, ProgressSample};
pub use recipe::{NutritionFacts, RecipeCandidate};
pub use series::ChronologicalSeries;
