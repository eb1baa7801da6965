// ABOUTME: Environment configuration for store credentials, Brevo keys, and diagnostics
// ABOUTME: Loads dotenv files, validates required variables once, and masks secrets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Aliza Wellness

//! Environment-based configuration
//!
//! Every loader has a `from_env` form and a `from_lookup` form taking a
//! `Fn(&str) -> Option<String>`, so validation can be exercised without
//! touching the process environment. Empty values count as unset.

use std::env;
use std::path::{Path, PathBuf};

use aliza_core::constants::{env_files, env_vars, masking};
use aliza_core::errors::{AppError, AppResult};
use reqwest::Url;

/// Load `.env.local` then `.env` from the working directory
///
/// Variables already set in the process win over file values, and the first
/// file wins over the second. Returns the files that were loaded.
///
/// Runs before the tracing subscriber exists, so nothing is logged here.
/// Callers report the returned paths once logging is initialized.
#[must_use]
pub fn load_dotenv() -> Vec<PathBuf> {
    [env_files::ENV_LOCAL, env_files::ENV]
        .into_iter()
        .filter_map(|file| dotenvy::from_filename(file).ok())
        .collect()
}

fn process_lookup(name: &str) -> Option<String> {
    env::var(name).ok()
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Credentials for the Supabase project the seeder writes to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Project base URL without trailing slash
    pub url: String,
    /// Service role key, sent as both `apikey` and bearer token
    pub service_role_key: String,
}

impl StoreConfig {
    /// Load from the process environment
    ///
    /// # Errors
    ///
    /// Returns `ConfigMissing` naming the first absent variable, or
    /// `ConfigInvalid` if the URL does not parse.
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(process_lookup)
    }

    /// Load through an arbitrary variable lookup
    ///
    /// # Errors
    ///
    /// Returns `ConfigMissing` naming the first absent variable, or
    /// `ConfigInvalid` if the URL does not parse.
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let url = non_empty(lookup(env_vars::SUPABASE_URL))
            .ok_or_else(|| AppError::config_missing(env_vars::SUPABASE_URL))?;
        let service_role_key = non_empty(lookup(env_vars::SUPABASE_SERVICE_ROLE_KEY))
            .ok_or_else(|| AppError::config_missing(env_vars::SUPABASE_SERVICE_ROLE_KEY))?;

        let parsed = Url::parse(url.trim()).map_err(|e| {
            AppError::config_invalid(format!("{} is not a valid URL: {e}", env_vars::SUPABASE_URL))
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(AppError::config_invalid(format!(
                "{} must use http or https",
                env_vars::SUPABASE_URL
            )));
        }

        Ok(Self {
            url: url.trim().trim_end_matches('/').to_owned(),
            service_role_key: service_role_key.trim().to_owned(),
        })
    }
}

/// Brevo credentials; both values optional so the diagnostic can report them
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BrevoConfig {
    /// API key, if set
    pub api_key: Option<String>,
    /// Contact list id, if set
    pub list_id: Option<String>,
}

impl BrevoConfig {
    /// Load from the process environment
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(process_lookup)
    }

    /// Load through an arbitrary variable lookup
    #[must_use]
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            api_key: non_empty(lookup(env_vars::BREVO_API_KEY)),
            list_id: non_empty(lookup(env_vars::BREVO_LIST_ID)),
        }
    }
}

/// Presence of one configuration variable
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvVarStatus {
    /// Variable name
    pub name: &'static str,
    /// Masked value when set
    pub masked: Option<String>,
}

impl EnvVarStatus {
    /// Whether the variable has a non-empty value
    #[must_use]
    pub const fn is_set(&self) -> bool {
        self.masked.is_some()
    }
}

/// Which configuration variables are present, plus the `.env.local` check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvironmentReport {
    /// One status per checked name, in the order given
    pub variables: Vec<EnvVarStatus>,
    /// Whether `.env.local` exists in the working directory
    pub env_local_present: bool,
}

impl EnvironmentReport {
    /// Check names against the process environment and the working directory
    #[must_use]
    pub fn from_env(names: &[&'static str]) -> Self {
        Self::collect(names, process_lookup, Path::new(env_files::ENV_LOCAL))
    }

    /// Check names through a lookup; `env_local` is the file probed for existence
    #[must_use]
    pub fn collect<F>(names: &[&'static str], lookup: F, env_local: &Path) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let variables = names
            .iter()
            .map(|&name| EnvVarStatus {
                name,
                masked: non_empty(lookup(name)).map(|value| mask_secret(&value)),
            })
            .collect();

        Self {
            variables,
            env_local_present: env_local.is_file(),
        }
    }

    /// Names that are not set
    #[must_use]
    pub fn missing(&self) -> Vec<&'static str> {
        self.variables
            .iter()
            .filter(|status| !status.is_set())
            .map(|status| status.name)
            .collect()
    }
}

/// One asterisk per character, capped, followed by an ellipsis
///
/// Only the length leaks, and only up to the cap.
#[must_use]
pub fn mask_secret(value: &str) -> String {
    let stars = value.chars().count().min(masking::MAX_MASK_CHARS);
    format!("{}...", "*".repeat(stars))
}
