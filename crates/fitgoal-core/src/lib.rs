// ABOUTME: Core types and constants for the FitGoal AI analytics layer
// ABOUTME: Foundation crate with error handling, domain models, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitGoal AI

#![deny(unsafe_code)]

//! # `FitGoal` Core
//!
//! Foundation crate providing shared types and constants for the `FitGoal` AI
//! analytics layer. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Nutrition and analytics constants organized by domain
//! - **models**: Progress samples, user profiles, recipes and the chronological series wrapper

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Analytics constants organized by domain
pub mod constants;

/// Core data models (`ProgressSample`, `UserProfile`, `RecipeCandidate`, ...)
pub mod models;
