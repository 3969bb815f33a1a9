// ABOUTME: Main library entry point for the FitGoal AI analytics layer
// ABOUTME: Re-exports workspace crates and provides logging and the analytics service façade
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitGoal AI

#![deny(unsafe_code)]

//! # `FitGoal` AI
//!
//! Weight trend, forecasting, calorie planning, plateau detection, macro
//! targets and recipe ranking for a fitness tracking application.
//!
//! All computation is synchronous and stateless: callers pass a profile and
//! progress entries, and get serializable results back.
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use chrono::Utc;
//! use fitgoal_ai::models::{ActivityLevel, Gender, Goal, UserProfile};
//! use fitgoal_ai::service::{AnalyticsService, DEFAULT_DAYS_AHEAD};
//! use rand::thread_rng;
//!
//! let profile = UserProfile {
//!     weight: 80.0,
//!     height: 180.0,
//!     age: 30,
//!     gender: Gender::Male,
//!     activity_level: ActivityLevel::Moderate,
//!     goal: Goal::Lose,
//!     target_weight: None,
//!     target_date: None,
//! };
//! let service = AnalyticsService::from_global();
//! let report = service
//!     .progress_report(&profile, Vec::new(), DEFAULT_DAYS_AHEAD, Utc::now(), &mut thread_rng())
//!     .ok();
//! println!("{report:?}");
//! ```

/// Unified error handling system with standard error codes and HTTP responses
pub use fitgoal_core::errors;

/// Analytics constants organized by domain
pub use fitgoal_core::constants;

/// Domain models shared by every component
pub use fitgoal_core::models;

/// Analytics engine
pub use fitgoal_intelligence as intelligence;

/// Analytics configuration with environment overrides
pub use fitgoal_intelligence::config;

/// Production logging and structured output
pub mod logging;

/// Report-level façade over the analytics components
pub mod service;
