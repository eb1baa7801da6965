// ABOUTME: Fixed names, endpoints, and demo defaults used by the operator binaries
// ABOUTME: Groups environment variable names, store paths, and diagnostic payload literals
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Aliza Wellness

//! Constants grouped by domain. Nothing here reads the environment; lookups live
//! in the tooling crate's `config` module.

/// Environment variable names
pub mod env_vars {
    /// Supabase project URL
    pub const SUPABASE_URL: &str = "NEXT_PUBLIC_SUPABASE_URL";
    /// Supabase anonymous (public) key
    pub const SUPABASE_ANON_KEY: &str = "NEXT_PUBLIC_SUPABASE_ANON_KEY";
    /// Supabase service role key (bypasses row-level security)
    pub const SUPABASE_SERVICE_ROLE_KEY: &str = "SUPABASE_SERVICE_ROLE_KEY";
    /// `OpenAI` key used by the chat backend
    pub const OPENAI_API_KEY: &str = "OPENAI_API_KEY";
    /// Brevo (newsletter) API key
    pub const BREVO_API_KEY: &str = "BREVO_API_KEY";
    /// Optional Brevo contact list id
    pub const BREVO_LIST_ID: &str = "BREVO_LIST_ID";

    /// Variables the chat backend needs; reported by the chat diagnostic
    pub const CHAT_REQUIRED: [&str; 4] = [
        SUPABASE_URL,
        SUPABASE_ANON_KEY,
        SUPABASE_SERVICE_ROLE_KEY,
        OPENAI_API_KEY,
    ];
}

/// Dotenv files, in load order
pub mod env_files {
    /// Next.js local overrides, checked first
    pub const ENV_LOCAL: &str = ".env.local";
    /// Shared defaults
    pub const ENV: &str = ".env";
}

/// Supabase REST surface
pub mod store {
    /// Table receiving journal rows
    pub const DAILY_ENTRIES_TABLE: &str = "daily_entries";
    /// `GoTrue` admin listing endpoint
    pub const ADMIN_USERS_PATH: &str = "/auth/v1/admin/users";
    /// `PostgREST` base path
    pub const REST_PATH: &str = "/rest/v1";
    /// Users requested per admin listing page
    pub const USERS_PER_PAGE: u32 = 50;
    /// Prefix of synthesized user ids
    pub const PLACEHOLDER_USER_PREFIX: &str = "mock-user-";
    /// Request timeout for store calls
    pub const REQUEST_TIMEOUT_SECS: u64 = 30;
}

/// Demo account the seeders target
pub mod demo {
    /// Email of the demo journal owner
    pub const USER_EMAIL: &str = "inbald@sapir.ac.il";
    /// Display name of the demo journal owner
    pub const USER_NAME: &str = "ענבל";
}

/// Mock document defaults
pub mod mock_data {
    /// Document read by the previewer
    pub const DEFAULT_DOCUMENT_PATH: &str = "mock_journal_data.json";
    /// Sample entries printed by default
    pub const DEFAULT_SAMPLE_COUNT: usize = 3;
}

/// Chat API probe literals
pub mod chat {
    /// Local dev server chat route
    pub const DEFAULT_API_URL: &str = "http://localhost:3000/api/chat";
    /// Greeting sent by the probe
    pub const TEST_MESSAGE: &str = "שלום עליזה";
    /// User id sent by the probe
    pub const TEST_USER_ID: &str = "test-user-123";
    /// Probe timeout
    pub const REQUEST_TIMEOUT_SECS: u64 = 30;
    /// Raw body characters shown when the response is not JSON
    pub const RAW_BODY_PREVIEW_CHARS: usize = 500;
    /// Marker of an HTML error page
    pub const HTML_DOCTYPE_PREFIX: &str = "<!DOCTYPE";
}

/// Brevo API
pub mod brevo {
    /// Production API base
    pub const API_BASE_URL: &str = "https://api.brevo.com/v3";
    /// Prefix of v3 API keys
    pub const API_KEY_PREFIX: &str = "xkeysib-";
    /// Key characters shown in diagnostics
    pub const VISIBLE_KEY_CHARS: usize = 15;
    /// Per-request timeout for probe calls
    pub const REQUEST_TIMEOUT_SECS: u64 = 30;
}

/// Secret masking
pub mod masking {
    /// Upper bound on asterisks printed for a secret
    pub const MAX_MASK_CHARS: usize = 10;
}
