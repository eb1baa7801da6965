// ABOUTME: Chat API probe that sends one fixed message and classifies the response
// ABOUTME: Distinguishes unreachable servers, non-JSON bodies, API errors, and success
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Aliza Wellness

use std::io::{self, Write};
use std::time::Duration;

use aliza_core::constants::chat;
use aliza_core::errors::AppResult;
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use super::rule;

/// Body posted to `/api/chat`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatProbeRequest {
    /// Message text
    pub message: String,
    /// Sender id
    pub user_id: String,
    /// Conversation to continue; `null` starts a new one
    pub conversation_id: Option<String>,
}

impl Default for ChatProbeRequest {
    fn default() -> Self {
        Self {
            message: chat::TEST_MESSAGE.to_owned(),
            user_id: chat::TEST_USER_ID.to_owned(),
            conversation_id: None,
        }
    }
}

/// How the single probe attempt ended
#[derive(Debug, Clone, PartialEq)]
pub enum ChatProbeOutcome {
    /// No connection could be made (refused, unreachable host)
    ServerUnreachable {
        /// Transport error text
        detail: String,
    },
    /// Connected, but the exchange failed (timeout, reset, unreadable body)
    RequestFailed {
        /// Transport error text
        detail: String,
    },
    /// The body is not JSON
    NotJson {
        /// Decoder message
        parse_error: String,
        /// Leading part of the raw body
        raw_preview: String,
        /// Body starts with an HTML doctype
        is_html: bool,
    },
    /// JSON body carrying an `error` key, whatever its value (`null` included)
    ApiError {
        /// The field, verbatim for strings
        message: String,
        /// Full parsed body
        body: Value,
    },
    /// JSON body without an error
    Success {
        /// Full parsed body
        body: Value,
    },
}

impl ChatProbeOutcome {
    /// Whether the probe counts as a pass
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }
}

/// Everything observed during one probe
#[derive(Debug, Clone, PartialEq)]
pub struct ChatProbeResult {
    /// Endpoint that was called
    pub url: String,
    /// HTTP status, when a response arrived
    pub status: Option<u16>,
    /// Response headers, when a response arrived
    pub headers: Vec<(String, String)>,
    /// Classification
    pub outcome: ChatProbeOutcome,
}

/// Classify a response body
#[must_use]
pub fn classify_body(body: &str) -> ChatProbeOutcome {
    match serde_json::from_str::<Value>(body) {
        Ok(parsed) => match parsed.get("error") {
            None => ChatProbeOutcome::Success { body: parsed },
            Some(Value::String(message)) => ChatProbeOutcome::ApiError {
                message: message.clone(),
                body: parsed,
            },
            Some(other) => ChatProbeOutcome::ApiError {
                message: other.to_string(),
                body: parsed,
            },
        },
        Err(e) => ChatProbeOutcome::NotJson {
            parse_error: e.to_string(),
            raw_preview: body.chars().take(chat::RAW_BODY_PREVIEW_CHARS).collect(),
            is_html: body.trim_start().starts_with(chat::HTML_DOCTYPE_PREFIX),
        },
    }
}

/// Classify a failure that happened before a body was read
#[must_use]
pub fn classify_transport_error(error: &reqwest::Error) -> ChatProbeOutcome {
    if error.is_connect() {
        ChatProbeOutcome::ServerUnreachable {
            detail: error.to_string(),
        }
    } else {
        ChatProbeOutcome::RequestFailed {
            detail: error.to_string(),
        }
    }
}

/// One-shot client for the chat endpoint
pub struct ChatProbe {
    client: Client,
    url: String,
}

impl ChatProbe {
    /// Probe `url`, giving up after `timeout`
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built
    pub fn new(url: impl Into<String>, timeout: Duration) -> AppResult<Self> {
        Ok(Self {
            client: Client::builder().timeout(timeout).build()?,
            url: url.into(),
        })
    }

    /// Probe the local dev server with the default timeout
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built
    pub fn local() -> AppResult<Self> {
        Self::new(
            chat::DEFAULT_API_URL,
            Duration::from_secs(chat::REQUEST_TIMEOUT_SECS),
        )
    }

    /// Endpoint being probed
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Send the request once and classify what came back
    pub async fn run(&self, request: &ChatProbeRequest) -> ChatProbeResult {
        let response = match self.client.post(&self.url).json(request).send().await {
            Ok(response) => response,
            Err(e) => {
                debug!("Chat probe transport failure: {e:?}");
                return ChatProbeResult {
                    url: self.url.clone(),
                    status: None,
                    headers: Vec::new(),
                    outcome: classify_transport_error(&e),
                };
            }
        };

        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .map(|(name, value)| {
                (
                    name.as_str().to_owned(),
                    value.to_str().unwrap_or("<binary>").to_owned(),
                )
            })
            .collect();

        let outcome = match response.text().await {
            Ok(body) => classify_body(&body),
            Err(e) => ChatProbeOutcome::RequestFailed {
                detail: format!("Error reading response: {e}"),
            },
        };

        ChatProbeResult {
            url: self.url.clone(),
            status: Some(status),
            headers,
            outcome,
        }
    }
}

/// General checklist printed after every probe
pub const TROUBLESHOOTING_STEPS: [&str; 5] = [
    "Check if server is running: npm run dev",
    "Check .env.local file exists",
    "Check OpenAI API key is set",
    "Check Supabase configuration",
    "Check console logs for errors",
];

/// Closing checklist
pub const NEXT_STEPS: [&str; 4] = [
    "Fix any missing environment variables",
    "Restart the server: npm run dev",
    "Test the chat functionality",
    "Check console logs for errors",
];

fn write_not_json_hints(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "Tip This usually means:")?;
    writeln!(out, "   - Server is not running")?;
    writeln!(out, "   - API route is not found")?;
    writeln!(out, "   - Environment variables are missing")?;
    writeln!(out, "   - There's a server error")
}

/// Print the request banner
///
/// # Errors
///
/// Returns an error if writing fails
pub fn write_probe_banner(
    out: &mut impl Write,
    url: &str,
    request: &ChatProbeRequest,
) -> io::Result<()> {
    writeln!(out, "Test Testing Chat API...")?;
    writeln!(out, "{}", rule())?;
    writeln!(out, "Multi Testing API: {url}")?;
    writeln!(out, "Test message: {}", request.message)?;
    writeln!(out)
}

/// Print status, headers, and the classified outcome
///
/// # Errors
///
/// Returns an error if writing fails
pub fn write_probe_result(out: &mut impl Write, result: &ChatProbeResult) -> io::Result<()> {
    if let Some(status) = result.status {
        writeln!(out, "Data Response Status: {status}")?;
        writeln!(out, "Data Response Headers:")?;
        for (name, value) in &result.headers {
            writeln!(out, "   {name}: {value}")?;
        }
        writeln!(out)?;
    }

    match &result.outcome {
        ChatProbeOutcome::ServerUnreachable { detail } => {
            writeln!(out, "Error Connection Error: Cannot connect to server")?;
            writeln!(out, "   {detail}")?;
            writeln!(
                out,
                "Tip Make sure the server is running on {}",
                result.url
            )?;
            writeln!(out, "   Run: npm run dev")?;
        }
        ChatProbeOutcome::RequestFailed { detail } => {
            writeln!(out, "Error Request Error: {detail}")?;
        }
        ChatProbeOutcome::NotJson {
            parse_error,
            raw_preview,
            is_html,
        } => {
            writeln!(out, "Error Response is not JSON: {parse_error}")?;
            writeln!(out, "Data Raw response: {raw_preview}...")?;
            if *is_html {
                writeln!(out, "Search Response is HTML (likely an error page)")?;
            }
            write_not_json_hints(out)?;
        }
        ChatProbeOutcome::ApiError { message, body } => {
            write_json_body(out, body)?;
            writeln!(out, "Error API Error: {message}")?;
        }
        ChatProbeOutcome::Success { body } => {
            write_json_body(out, body)?;
            writeln!(out, "Success API call successful")?;
        }
    }
    Ok(())
}

fn write_json_body(out: &mut impl Write, body: &Value) -> io::Result<()> {
    writeln!(out, "Success Response is valid JSON")?;
    let pretty = serde_json::to_string_pretty(body).unwrap_or_else(|_| body.to_string());
    writeln!(out, "Data Response content: {pretty}")
}

/// Print a numbered checklist under a heading
///
/// # Errors
///
/// Returns an error if writing fails
pub fn write_checklist(out: &mut impl Write, heading: &str, steps: &[&str]) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{heading}")?;
    for (index, step) in steps.iter().enumerate() {
        writeln!(out, "{}. {step}", index + 1)?;
    }
    Ok(())
}
