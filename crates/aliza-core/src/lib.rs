// ABOUTME: Core types and constants for the Aliza journal operator tooling
// ABOUTME: Foundation crate with journal entry models, error handling, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Aliza Wellness

#![deny(unsafe_code)]

//! # Aliza Core
//!
//! Foundation crate shared by the operator binaries of the Aliza wellness
//! journal. It changes rarely, so the tooling crate can rebuild incrementally.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `AppResult`
//! - **constants**: Environment variable names, endpoints, and demo defaults
//! - **models**: The `JournalEntry` row shape with its scales and symptom flags

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Journal data models (`JournalEntry`, scales, symptom flags)
pub mod models;
