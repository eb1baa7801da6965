// ABOUTME: Configuration management for the operator binaries
// ABOUTME: Re-exports typed environment configuration and dotenv loading helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Aliza Wellness

//! Configuration module
//!
//! All configuration comes from the environment. `.env.local` and `.env` are
//! loaded first when present, then values are validated once into typed structs:
//!
//! - **`StoreConfig`**: Supabase URL and service role key (required by the seeder)
//! - **`BrevoConfig`**: Brevo API key and optional list id
//! - **`EnvironmentReport`**: presence report printed by the diagnostics

/// Environment variable configuration
pub mod environment;

pub use environment::{
    load_dotenv, mask_secret, BrevoConfig, EnvVarStatus, EnvironmentReport, StoreConfig,
};
