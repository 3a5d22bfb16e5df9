// ABOUTME: Error types for the plan service, re-exported from fitai-core
// ABOUTME: Keeps crate::errors paths stable for routes, services, and binaries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling
//!
//! [`AppError`] renders as `{"error": {"code", "message"}}` with the status
//! code its [`ErrorCode`] maps to.

pub use fitai_core::errors::{AppError, AppResult, ErrorCode, ErrorResponse, ErrorResponseDetails};
