// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitGoal AI
// ABOUTME: Re-exports command modules for fitgoal-cli
// ABOUTME: Provides access to the analytics commands

pub mod analysis;
