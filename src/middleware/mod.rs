// ABOUTME: HTTP middleware for the plan service
// ABOUTME: Provides the CORS layer applied to every route
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Cross-origin request configuration
pub mod cors;

pub use cors::setup_cors;
