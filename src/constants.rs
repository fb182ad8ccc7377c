//! Application-wide constants
//!
//! This module contains all constant values used throughout the application.
//! Constants are grouped by their purpose for better organization.

// =============================================================================
// SERVER DEFAULTS
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 8080;

// =============================================================================
// REMOTE JUDGE
// =============================================================================

/// Public judge endpoint used when no authenticated host is configured
pub const DEFAULT_PUBLIC_JUDGE_URL: &str = "https://ce.judge0.com";

/// Maximum number of poll iterations for an asynchronous submission
pub const JUDGE_POLL_MAX_ATTEMPTS: u32 = 15;

/// Delay between poll iterations in milliseconds
pub const JUDGE_POLL_INTERVAL_MS: u64 = 1000;

/// Highest status id the judge reports while a submission is still running.
/// Anything above this is a terminal verdict.
pub const JUDGE_STATUS_PROCESSING_MAX: i64 = 2;

/// First status id the judge uses for compile errors and worse
pub const JUDGE_STATUS_FIRST_FAILURE: i64 = 6;

/// Timeout for a single outbound judge request in seconds
pub const JUDGE_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Error message when required execution fields are missing
pub const MSG_EXECUTION_FIELDS_REQUIRED: &str = "Language ID and source code are required.";

/// Error message when the poll loop exhausts without a terminal status
pub const MSG_EXECUTION_TIMED_OUT: &str = "Execution timed out after 15 seconds.";

/// Shown in place of stdout when a successful run produced nothing
pub const MSG_NO_OUTPUT: &str = "Program finished without producing any output.";

// =============================================================================
// ASSISTANT
// =============================================================================

/// Default model for the primary generative provider
pub const DEFAULT_OPENAI_MODEL: &str = "gpt-4o-mini";

/// Default model for the secondary generative provider
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-1.5-flash";

/// Timeout for a single generative-provider request in seconds
pub const PROVIDER_REQUEST_TIMEOUT_SECS: u64 = 20;

/// Error message for a missing or non-string assistant message
pub const MSG_ASSISTANT_MESSAGE_REQUIRED: &str = "Message is required and must be a string";

/// Notice appended to every locally generated reply so callers can tell it
/// apart from genuine model output
pub const FALLBACK_NOTICE: &str =
    "\n\n(Offline assistant: remote AI providers are currently unavailable, so this answer \
     comes from the built-in study guide.)";

/// Reply used when no trained intent matches the question
pub const MSG_NO_TRAINED_ANSWER: &str =
    "I don't have a trained answer for that yet. Try asking about a specific data structure, \
     algorithm, or complexity topic.";

/// Minimum similarity score for the local classifier to accept a match
pub const INTENT_MATCH_THRESHOLD: f32 = 0.30;

// =============================================================================
// ACCOUNTS
// =============================================================================

/// Username minimum length
pub const MIN_USERNAME_LENGTH: u64 = 3;

/// Username maximum length
pub const MAX_USERNAME_LENGTH: u64 = 20;

/// Allowed username shape: letters, digits, and underscores
pub const USERNAME_PATTERN: &str = r"^[A-Za-z0-9_]{3,20}$";

/// Minimum password length accepted by the identity provider
pub const MIN_PASSWORD_LENGTH: u64 = 6;

/// Maximum password length
pub const MAX_PASSWORD_LENGTH: u64 = 128;

// =============================================================================
// DOCUMENT STORE COLLECTIONS
// =============================================================================

/// Collection names in the document store
pub mod collections {
    /// Per-user profile documents keyed by uid
    pub const USERS: &str = "users";
    /// Username reservation documents keyed by lowercased username
    pub const USERNAMES: &str = "usernames";
    /// Email reservation documents keyed by lowercased email
    pub const EMAILS: &str = "emails";
    /// Per-user notes subcollection
    pub const NOTES: &str = "notes";
}

/// Timeout for a single document-store request in seconds
pub const STORE_REQUEST_TIMEOUT_SECS: u64 = 15;

/// Timeout for a single identity-provider request in seconds
pub const IDENTITY_REQUEST_TIMEOUT_SECS: u64 = 15;

// =============================================================================
// PROBLEM CATALOG
// =============================================================================

/// Problem difficulty labels
pub mod difficulties {
    pub const EASY: &str = "easy";
    pub const MEDIUM: &str = "medium";
    pub const HARD: &str = "hard";

    /// All difficulty labels
    pub const ALL: &[&str] = &[EASY, MEDIUM, HARD];
}

// =============================================================================
// VALIDATION
// =============================================================================

/// Maximum source code size in bytes (256 KB)
pub const MAX_SOURCE_CODE_SIZE: usize = 256 * 1024;

/// Maximum stdin size in bytes (64 KB)
pub const MAX_STDIN_SIZE: usize = 64 * 1024;

/// Maximum assistant message length in characters
pub const MAX_ASSISTANT_MESSAGE_LENGTH: usize = 4096;

/// Maximum note title length
pub const MAX_NOTE_TITLE_LENGTH: u64 = 256;

/// Maximum note content length
pub const MAX_NOTE_CONTENT_LENGTH: u64 = 65535;

// =============================================================================
// PAGINATION
// =============================================================================

/// Default page size for paginated results
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Maximum page size for paginated results
pub const MAX_PAGE_SIZE: u32 = 100;

// =============================================================================
// API VERSIONING
// =============================================================================

/// Current API version
pub const API_VERSION: &str = "v1";

/// API base path
pub const API_BASE_PATH: &str = "/api/v1";
