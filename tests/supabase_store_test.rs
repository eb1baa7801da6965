// ABOUTME: Tests for the Supabase journal store against a local mock of GoTrue and PostgREST
// ABOUTME: Covers auth headers, paginated user listing, inserts, and status mapping
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Aliza Wellness

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use aliza_core::errors::ErrorCode;
use aliza_ops::config::StoreConfig;
use aliza_ops::seeding::demo_entries;
use aliza_ops::store::{JournalStore, SupabaseClient};
use axum::extract::{Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};

const SERVICE_KEY: &str = "service-role-key";

#[derive(Default)]
struct Recorded {
    pages: Vec<u32>,
    rows: Vec<Value>,
    prefer: Vec<String>,
}

type Shared = Arc<Mutex<Recorded>>;

fn authorized(headers: &HeaderMap) -> bool {
    let apikey = headers.get("apikey").and_then(|v| v.to_str().ok());
    let bearer = headers.get("authorization").and_then(|v| v.to_str().ok());
    apikey == Some(SERVICE_KEY) && bearer.is_some_and(|b| b == format!("Bearer {SERVICE_KEY}"))
}

async fn list_users(
    State(state): State<Shared>,
    headers: HeaderMap,
    Query(params): Query<HashMap<String, String>>,
) -> (StatusCode, Json<Value>) {
    if !authorized(&headers) {
        return (StatusCode::UNAUTHORIZED, Json(json!({"msg": "Invalid JWT"})));
    }
    let page: u32 = params["page"].parse().unwrap();
    let per_page: u32 = params["per_page"].parse().unwrap();
    state.lock().unwrap().pages.push(page);

    // three users in total, split across pages
    let all = [
        json!({"id": "u-1", "email": "first@example.com"}),
        json!({"id": "u-2", "phone": "+972500000000"}),
        json!({"id": "u-3", "email": "inbald@sapir.ac.il"}),
    ];
    let start = ((page - 1) * per_page) as usize;
    let users: Vec<Value> = all.iter().skip(start).take(per_page as usize).cloned().collect();
    (StatusCode::OK, Json(json!({"users": users, "aud": "authenticated"})))
}

async fn insert_row(
    State(state): State<Shared>,
    headers: HeaderMap,
    Json(row): Json<Value>,
) -> StatusCode {
    if !authorized(&headers) {
        return StatusCode::UNAUTHORIZED;
    }
    let mut recorded = state.lock().unwrap();
    if let Some(prefer) = headers.get("prefer").and_then(|v| v.to_str().ok()) {
        recorded.prefer.push(prefer.to_owned());
    }
    recorded.rows.push(row);
    StatusCode::CREATED
}

async fn mock_supabase() -> (String, Shared) {
    let state: Shared = Arc::default();
    let app = Router::new()
        .route("/auth/v1/admin/users", get(list_users))
        .route("/rest/v1/daily_entries", post(insert_row))
        .route(
            "/rest/v1/broken_entries",
            post(|| async {
                (
                    StatusCode::BAD_REQUEST,
                    Json(json!({"code": "23502", "message": "null value in column", "hint": null})),
                )
            }),
        )
        .with_state(Arc::clone(&state));
    (common::spawn_server(app).await, state)
}

fn client(url: &str, key: &str) -> SupabaseClient {
    SupabaseClient::new(StoreConfig {
        url: url.to_owned(),
        service_role_key: key.to_owned(),
    })
    .unwrap()
}

#[tokio::test]
async fn test_list_users_walks_pages_until_short_page() {
    let (url, state) = mock_supabase().await;
    let store = client(&url, SERVICE_KEY).with_page_size(2);

    let users = store.list_users().await.unwrap();

    assert_eq!(users.len(), 3);
    assert_eq!(users[1].email, None);
    assert_eq!(users[2].email.as_deref(), Some("inbald@sapir.ac.il"));
    assert_eq!(state.lock().unwrap().pages, vec![1, 2]);
}

#[tokio::test]
async fn test_list_users_rejected_key_is_auth_failure() {
    let (url, _state) = mock_supabase().await;
    let store = client(&url, "wrong-key");

    let error = store.list_users().await.unwrap_err();
    assert_eq!(error.code, ErrorCode::ExternalAuthFailed);
    assert!(error.message.contains("Invalid JWT"));
}

#[tokio::test]
async fn test_insert_entry_posts_row_with_minimal_return() {
    let (url, state) = mock_supabase().await;
    let store = client(&url, SERVICE_KEY);
    let entry = demo_entries("u-3").unwrap().remove(0);

    store.insert_entry(&entry).await.unwrap();

    let recorded = state.lock().unwrap();
    assert_eq!(recorded.prefer, vec!["return=minimal".to_owned()]);
    let row = &recorded.rows[0];
    assert_eq!(row["user_id"], "u-3");
    assert_eq!(row["date"], "2025-01-15");
    assert_eq!(row["time_of_day"], "morning");
    assert_eq!(row["sleep_quality"], "excellent");
    assert_eq!(row["hot_flashes"], false);
    assert_eq!(row["sexual_desire"], true);
    assert_eq!(row["created_at"], "2025-01-15T08:00:00Z");
}

#[tokio::test]
async fn test_insert_entry_surfaces_postgrest_message() {
    let (url, _state) = mock_supabase().await;
    let store = client(&url, SERVICE_KEY).with_table("broken_entries");
    let entry = demo_entries("u-3").unwrap().remove(0);

    let error = store.insert_entry(&entry).await.unwrap_err();
    assert_eq!(error.code, ErrorCode::ExternalServiceError);
    assert!(error.message.contains("HTTP 400"));
    assert!(error.message.contains("null value in column"));
}

#[tokio::test]
async fn test_unreachable_store_is_unavailable() {
    let url = common::unused_local_url("");
    let store = client(&url, SERVICE_KEY);

    let error = store.list_users().await.unwrap_err();
    assert_eq!(error.code, ErrorCode::ExternalServiceUnavailable);
}
