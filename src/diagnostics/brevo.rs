// ABOUTME: Brevo contacts API probe for the lead capture forms
// ABOUTME: Validates the API key shape, counts contacts, and inspects the optional target list
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Aliza Wellness

use std::io::{self, Write};
use std::time::Duration;

use aliza_core::constants::{brevo, env_vars};
use aliza_core::errors::AppResult;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use super::rule;

/// Shape check of the configured key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyCheck {
    /// First characters of the key, safe to print
    pub preview: String,
    /// Whether the key carries the `xkeysib-` prefix
    pub has_expected_prefix: bool,
}

impl KeyCheck {
    /// Inspect `api_key` without contacting Brevo
    #[must_use]
    pub fn inspect(api_key: &str) -> Self {
        Self {
            preview: api_key.chars().take(brevo::VISIBLE_KEY_CHARS).collect(),
            has_expected_prefix: api_key.starts_with(brevo::API_KEY_PREFIX),
        }
    }
}

/// Why a Brevo call failed
#[derive(Debug, Clone, PartialEq)]
pub enum BrevoFailure {
    /// Brevo rejected the key (401)
    InvalidKey,
    /// Any other non-success status
    Http {
        /// Status code
        status: u16,
        /// Parsed body, when it was JSON
        body: Option<Value>,
    },
    /// No response arrived
    Transport {
        /// Transport error text
        detail: String,
    },
}

/// Subset of `GET /v3/contacts/lists/{id}`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListInfo {
    /// List name
    #[serde(default)]
    pub name: String,
    /// Subscriber count
    #[serde(default)]
    pub total_subscribers: u64,
}

#[derive(Deserialize)]
struct ContactsPage {
    #[serde(default)]
    count: u64,
}

/// Result of the optional list lookup
#[derive(Debug, Clone, PartialEq)]
pub struct ListProbe {
    /// Configured list id
    pub list_id: String,
    /// Lookup result
    pub result: Result<ListInfo, BrevoFailure>,
}

/// Everything observed during one Brevo probe
#[derive(Debug, Clone, PartialEq)]
pub struct BrevoReport {
    /// Shape check of the key
    pub key: KeyCheck,
    /// Total contacts, or why counting failed
    pub contacts: Result<u64, BrevoFailure>,
    /// List lookup, when a list id is configured and counting succeeded
    pub list: Option<ListProbe>,
}

/// One-shot client for the Brevo contacts API
pub struct BrevoProbe {
    client: Client,
    base_url: String,
    api_key: String,
}

impl BrevoProbe {
    /// Probe the public Brevo API with `api_key`
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built
    pub fn new(api_key: impl Into<String>) -> AppResult<Self> {
        Self::with_base_url(api_key, brevo::API_BASE_URL)
    }

    /// Probe a Brevo-compatible API rooted at `base_url`
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built
    pub fn with_base_url(
        api_key: impl Into<String>,
        base_url: impl Into<String>,
    ) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(brevo::REQUEST_TIMEOUT_SECS))
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_owned(),
            api_key: api_key.into(),
        })
    }

    async fn get_json(&self, path: &str) -> Result<Value, BrevoFailure> {
        let url = format!("{}{path}", self.base_url);
        debug!("Brevo GET {url}");

        let response = self
            .client
            .get(&url)
            .header("api-key", &self.api_key)
            .header("accept", "application/json")
            .send()
            .await
            .map_err(|e| BrevoFailure::Transport {
                detail: e.to_string(),
            })?;

        let status = response.status();
        let text = response.text().await.map_err(|e| BrevoFailure::Transport {
            detail: e.to_string(),
        })?;

        if status == StatusCode::UNAUTHORIZED {
            return Err(BrevoFailure::InvalidKey);
        }
        if !status.is_success() {
            return Err(BrevoFailure::Http {
                status: status.as_u16(),
                body: serde_json::from_str(&text).ok(),
            });
        }

        Ok(serde_json::from_str(&text).unwrap_or(Value::Null))
    }

    /// Total number of contacts in the account
    ///
    /// # Errors
    ///
    /// Returns the classified failure if the call does not succeed
    pub async fn contact_count(&self) -> Result<u64, BrevoFailure> {
        let body = self.get_json("/contacts?limit=1").await?;
        Ok(serde_json::from_value::<ContactsPage>(body).map_or(0, |page| page.count))
    }

    /// Name and subscriber count of one list
    ///
    /// # Errors
    ///
    /// Returns the classified failure if the call does not succeed
    pub async fn list_info(&self, list_id: &str) -> Result<ListInfo, BrevoFailure> {
        let body = self.get_json(&format!("/contacts/lists/{list_id}")).await?;
        serde_json::from_value(body).map_err(|e| BrevoFailure::Transport {
            detail: format!("Unexpected list payload: {e}"),
        })
    }

    /// Count contacts, then inspect `list_id` when given
    pub async fn run(&self, list_id: Option<&str>) -> BrevoReport {
        let key = KeyCheck::inspect(&self.api_key);
        let contacts = self.contact_count().await;

        let list = match (&contacts, list_id) {
            (Ok(_), Some(id)) => Some(ListProbe {
                list_id: id.to_owned(),
                result: self.list_info(id).await,
            }),
            _ => None,
        };

        BrevoReport {
            key,
            contacts,
            list,
        }
    }
}

/// Banner printed before anything else
///
/// # Errors
///
/// Returns an error if writing fails
pub fn write_banner(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "Search Checking Brevo connection...")?;
    writeln!(out, "{}", rule())
}

/// Setup instructions for a missing key
///
/// # Errors
///
/// Returns an error if writing fails
pub fn write_missing_key(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "Error {} is not set!", env_vars::BREVO_API_KEY)?;
    writeln!(out)?;
    writeln!(out, "Docs Instructions:")?;
    writeln!(out, "1. Create a .env.local file")?;
    writeln!(
        out,
        "2. Add: {}={}...",
        env_vars::BREVO_API_KEY,
        brevo::API_KEY_PREFIX
    )?;
    writeln!(out, "3. Run this check again")
}

fn write_key_check(out: &mut impl Write, key: &KeyCheck) -> io::Result<()> {
    writeln!(out, "Success {} found", env_vars::BREVO_API_KEY)?;
    writeln!(out, "   Key starts with: {}...", key.preview)?;
    if !key.has_expected_prefix {
        writeln!(
            out,
            "Warning The API key does not start with {}",
            brevo::API_KEY_PREFIX
        )?;
        writeln!(out, "   Did you copy the whole key?")?;
    }
    Ok(())
}

fn write_failure(out: &mut impl Write, failure: &BrevoFailure) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Error Brevo connection failed:")?;
    match failure {
        BrevoFailure::InvalidKey => {
            writeln!(out, "   The API key is invalid!")?;
            writeln!(out)?;
            writeln!(out, "Docs Check:")?;
            writeln!(
                out,
                "   1. The whole key was copied (including {})",
                brevo::API_KEY_PREFIX
            )?;
            writeln!(out, "   2. The key is active in Brevo")?;
            writeln!(out, "   3. There are no spaces before or after the key")
        }
        BrevoFailure::Http { status, body } => {
            writeln!(out, "   HTTP {status}")?;
            if let Some(body) = body {
                let pretty =
                    serde_json::to_string_pretty(body).unwrap_or_else(|_| body.to_string());
                writeln!(out)?;
                writeln!(out, "Details:")?;
                writeln!(out, "{pretty}")?;
            }
            Ok(())
        }
        BrevoFailure::Transport { detail } => writeln!(out, "   {detail}"),
    }
}

/// Print the probe report
///
/// # Errors
///
/// Returns an error if writing fails
pub fn write_report(out: &mut impl Write, report: &BrevoReport) -> io::Result<()> {
    write_key_check(out, &report.key)?;
    writeln!(out)?;
    writeln!(out, "Multi Connecting to Brevo...")?;

    let count = match &report.contacts {
        Ok(count) => *count,
        Err(failure) => return write_failure(out, failure),
    };

    writeln!(out, "Success Connected to Brevo!")?;
    writeln!(out)?;
    writeln!(out, "Data Statistics:")?;
    writeln!(out, "   {count} contacts in Brevo")?;

    match &report.list {
        Some(probe) => {
            writeln!(out)?;
            writeln!(out, "Docs List ID configured: {}", probe.list_id)?;
            match &probe.result {
                Ok(info) => {
                    writeln!(out, "   List name: \"{}\"", info.name)?;
                    writeln!(out, "   Contacts in list: {}", info.total_subscribers)?;
                }
                Err(_) => {
                    writeln!(
                        out,
                        "   Warning Could not find a list with ID: {}",
                        probe.list_id
                    )?;
                }
            }
        }
        None => {
            writeln!(out)?;
            writeln!(out, "Docs List ID not configured (that's fine!)")?;
            writeln!(out, "   Contacts will be added to the general contact list")?;
        }
    }

    writeln!(out)?;
    writeln!(out, "{}", rule())?;
    writeln!(out, "Success All set! The forms can send to Brevo")?;
    writeln!(out, "{}", rule())
}
