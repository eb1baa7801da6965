// ABOUTME: Target user resolution for the seeder with a placeholder fallback
// ABOUTME: Scans the store's users by email and synthesizes a mock id when none matches
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Aliza Wellness

use aliza_core::constants::store::PLACEHOLDER_USER_PREFIX;
use chrono::{DateTime, Utc};
use tracing::{info, warn};
use uuid::Uuid;

use crate::store::{JournalStore, StoreUser};

/// Why a placeholder id was used
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlaceholderReason {
    /// The listing succeeded but no user has the email
    NotFound,
    /// The listing itself failed
    LookupFailed(String),
}

/// Outcome of resolving the seeder's target user
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserResolution {
    /// A registered account matched the email
    Found(String),
    /// No account matched; rows written with this id belong to nobody
    Placeholder {
        /// Synthesized id
        id: String,
        /// What went wrong with the lookup
        reason: PlaceholderReason,
    },
}

impl UserResolution {
    /// Id to stamp on the entries
    #[must_use]
    pub fn user_id(&self) -> &str {
        match self {
            Self::Found(id) | Self::Placeholder { id, .. } => id,
        }
    }

    /// Whether the id is synthetic
    #[must_use]
    pub const fn is_placeholder(&self) -> bool {
        matches!(self, Self::Placeholder { .. })
    }
}

/// `mock-user-<unix-seconds>`, suffixed if it collides with a listed id
#[must_use]
pub fn placeholder_user_id(now: DateTime<Utc>, existing: &[StoreUser]) -> String {
    let candidate = format!("{PLACEHOLDER_USER_PREFIX}{}", now.timestamp());
    if existing.iter().any(|user| user.id == candidate) {
        format!("{candidate}-{}", Uuid::new_v4().simple())
    } else {
        candidate
    }
}

/// Find the account registered with `email`, falling back to a placeholder
///
/// Listing failures are not fatal: the run continues with a placeholder id so
/// the rows can still be written, though they will not be attributable.
pub async fn resolve_user_id(
    store: &dyn JournalStore,
    email: &str,
    now: DateTime<Utc>,
) -> UserResolution {
    let users = match store.list_users().await {
        Ok(users) => users,
        Err(e) => {
            warn!("Error getting user ID from {}: {e}", store.name());
            return UserResolution::Placeholder {
                id: placeholder_user_id(now, &[]),
                reason: PlaceholderReason::LookupFailed(e.to_string()),
            };
        }
    };

    let matched = users.iter().find(|user| {
        user.email
            .as_deref()
            .is_some_and(|candidate| candidate.eq_ignore_ascii_case(email))
    });

    if let Some(user) = matched {
        info!("Found user {email} among {} accounts", users.len());
        UserResolution::Found(user.id.clone())
    } else {
        warn!("User {email} not found, using mock user ID");
        UserResolution::Placeholder {
            id: placeholder_user_id(now, &users),
            reason: PlaceholderReason::NotFound,
        }
    }
}
