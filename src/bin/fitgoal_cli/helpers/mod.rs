// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitGoal AI
// ABOUTME: Helper modules for fitgoal-cli
// ABOUTME: Output formatting shared by the commands

pub mod display;
