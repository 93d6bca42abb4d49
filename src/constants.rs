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
pub const DEFAULT_SERVER_PORT: u16 = 3000;

/// Default tracing filter
pub const DEFAULT_RUST_LOG: &str = "prochallenger=debug,tower_http=info";

/// Frontend origins allowed by CORS when none are configured
pub const DEFAULT_CLIENT_ORIGINS: &[&str] = &["http://localhost:5173", "http://localhost:5174"];

/// Body returned by the liveness route
pub const LIVENESS_MESSAGE: &str = "ProChallenger Server is running...";

// =============================================================================
// DATABASE DEFAULTS
// =============================================================================

/// Default maximum database connections in the pool
pub const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 10;

/// Default database host when connecting from credential parts
pub const DEFAULT_DATABASE_HOST: &str = "localhost";

/// Default database port when `DB_HOST` carries none
pub const DEFAULT_DATABASE_PORT: u16 = 5432;

/// Default database name when connecting from credential parts
pub const DEFAULT_DATABASE_NAME: &str = "prochallenger";

// =============================================================================
// EXTERNAL PROVIDERS
// =============================================================================

/// Stripe REST API base URL
pub const DEFAULT_STRIPE_API_BASE: &str = "https://api.stripe.com";

/// Currency used for checkout line items
pub const DEFAULT_PAYMENT_CURRENCY: &str = "usd";

/// Timeout for outbound provider calls, in seconds
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 10;

/// Public signing keys for Firebase ID tokens
pub const FIREBASE_JWKS_URL: &str =
    "https://www.googleapis.com/service_accounts/v1/jwk/securetoken@system.gserviceaccount.com";

/// Issuer prefix of Firebase ID tokens; the project id is appended
pub const FIREBASE_ISSUER_PREFIX: &str = "https://securetoken.google.com/";

/// How long fetched signing keys are trusted before a refresh, in seconds
pub const JWKS_CACHE_TTL_SECS: u64 = 3600;

// =============================================================================
// USER ROLES
// =============================================================================

/// User role identifiers
pub mod roles {
    /// Role assigned on first login
    pub const CUSTOMER: &str = "customer";
}

// =============================================================================
// REGISTRATION STATUSES
// =============================================================================

/// Registration lifecycle statuses
pub mod registration_status {
    /// Status of a freshly recorded paid entry
    pub const PENDING: &str = "pending";
}

// =============================================================================
// CHECKOUT
// =============================================================================

/// Checkout session status reported once payment is done
pub const CHECKOUT_STATUS_COMPLETE: &str = "complete";

/// Payment statuses under which a completed session may be recorded
pub mod payment_status {
    pub const PAID: &str = "paid";
    pub const NO_PAYMENT_REQUIRED: &str = "no_payment_required";
}

/// Metadata keys attached to checkout sessions
pub mod checkout_metadata {
    pub const CONTEST_ID: &str = "contestId";
    pub const CUSTOMER: &str = "customer";
}

/// Entries claimed by a single successful checkout
pub const ENTRIES_PER_REGISTRATION: i32 = 1;

// =============================================================================
// VALIDATION
// =============================================================================

/// Maximum contest name length
pub const MAX_CONTEST_NAME_LENGTH: u64 = 256;

/// Maximum contest category length
pub const MAX_CONTEST_CATEGORY_LENGTH: u64 = 64;

/// Maximum contest description length
pub const MAX_CONTEST_DESCRIPTION_LENGTH: u64 = 65535;
