// ABOUTME: Supabase implementation of the journal store over GoTrue admin and PostgREST
// ABOUTME: Lists users page by page and inserts daily_entries rows with the service role key
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Aliza Wellness

use std::time::Duration;

use aliza_core::constants::store;
use aliza_core::errors::{AppError, AppResult};
use aliza_core::models::JournalEntry;
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::Deserialize;
use tracing::debug;

use super::{JournalStore, StoreUser};
use crate::config::StoreConfig;

const SERVICE_NAME: &str = "Supabase";

/// Hard stop for the user listing, far above any demo project
const MAX_USER_PAGES: u32 = 200;

#[derive(Deserialize)]
struct UsersPage {
    #[serde(default)]
    users: Vec<StoreUser>,
}

#[derive(Deserialize)]
struct PostgrestError {
    message: Option<String>,
    msg: Option<String>,
    hint: Option<String>,
}

/// Supabase client authenticated with the service role key
pub struct SupabaseClient {
    http: Client,
    config: StoreConfig,
    table: String,
    per_page: u32,
}

impl SupabaseClient {
    /// Create a client writing to `daily_entries`
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built
    pub fn new(config: StoreConfig) -> AppResult<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(store::REQUEST_TIMEOUT_SECS))
            .build()?;
        Ok(Self {
            http,
            config,
            table: store::DAILY_ENTRIES_TABLE.to_owned(),
            per_page: store::USERS_PER_PAGE,
        })
    }

    /// Override the target table
    #[must_use]
    pub fn with_table(mut self, table: impl Into<String>) -> Self {
        self.table = table.into();
        self
    }

    /// Override the listing page size
    #[must_use]
    pub fn with_page_size(mut self, per_page: u32) -> Self {
        self.per_page = per_page.max(1);
        self
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        request
            .header("apikey", &self.config.service_role_key)
            .bearer_auth(&self.config.service_role_key)
    }

    fn admin_users_url(&self) -> String {
        format!("{}{}", self.config.url, store::ADMIN_USERS_PATH)
    }

    fn table_url(&self) -> String {
        format!("{}{}/{}", self.config.url, store::REST_PATH, self.table)
    }

    async fn list_users_page(&self, page: u32) -> AppResult<Vec<StoreUser>> {
        let response = self
            .authorized(self.http.get(self.admin_users_url()))
            .query(&[("page", page), ("per_page", self.per_page)])
            .send()
            .await?;
        let response = check_status(response).await?;
        let page: UsersPage = response.json().await?;
        Ok(page.users)
    }
}

#[async_trait]
impl JournalStore for SupabaseClient {
    fn name(&self) -> &'static str {
        "supabase"
    }

    async fn list_users(&self) -> AppResult<Vec<StoreUser>> {
        let mut users = Vec::new();
        for page in 1..=MAX_USER_PAGES {
            let batch = self.list_users_page(page).await?;
            let batch_len = batch.len();
            debug!("Listed {batch_len} users from page {page}");
            users.extend(batch);
            if batch_len < self.per_page as usize {
                break;
            }
        }
        Ok(users)
    }

    async fn insert_entry(&self, entry: &JournalEntry) -> AppResult<()> {
        let response = self
            .authorized(self.http.post(self.table_url()))
            .header("Prefer", "return=minimal")
            .json(entry)
            .send()
            .await?;
        check_status(response).await?;
        Ok(())
    }
}

/// Pass successful responses through; turn failures into `AppError`
async fn check_status(response: Response) -> AppResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let detail = error_detail(&body);
    let message = format!("HTTP {status}: {detail}");
    Err(match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
            AppError::external_auth_failed(SERVICE_NAME, message)
        }
        StatusCode::SERVICE_UNAVAILABLE | StatusCode::BAD_GATEWAY | StatusCode::GATEWAY_TIMEOUT => {
            AppError::external_unavailable(SERVICE_NAME, message)
        }
        _ => AppError::external_service(SERVICE_NAME, message),
    })
}

/// Best human-readable part of a `PostgREST`/`GoTrue` error body
fn error_detail(body: &str) -> String {
    match serde_json::from_str::<PostgrestError>(body) {
        Ok(parsed) => {
            let message = parsed.message.or(parsed.msg);
            match (message, parsed.hint) {
                (Some(message), Some(hint)) => format!("{message} (hint: {hint})"),
                (Some(message), None) => message,
                (None, _) => body.trim().to_owned(),
            }
        }
        Err(_) => body.trim().to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::error_detail;

    #[test]
    fn test_error_detail_prefers_message_and_hint() {
        let body = r#"{"code":"42501","message":"permission denied","hint":"check RLS"}"#;
        assert_eq!(error_detail(body), "permission denied (hint: check RLS)");
    }

    #[test]
    fn test_error_detail_reads_gotrue_msg() {
        assert_eq!(error_detail(r#"{"msg":"Invalid JWT"}"#), "Invalid JWT");
    }

    #[test]
    fn test_error_detail_falls_back_to_raw_body() {
        assert_eq!(error_detail("  upstream timeout \n"), "upstream timeout");
        assert_eq!(error_detail(r#"{"code":"PGRST"}"#), r#"{"code":"PGRST"}"#);
    }
}
