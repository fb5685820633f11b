//! Client constants
//!
//! Wire-level values shared by the domain and infra crates.

// Host derivation: https://{subdomain}.harvestapp.com
pub const HOST_SCHEME: &str = "https://";
pub const HOST_SUFFIX: &str = ".harvestapp.com";

pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

// OAuth2 endpoints, relative to the host
pub const AUTHORIZE_PATH: &str = "/oauth2/authorize";
pub const TOKEN_PATH: &str = "/oauth2/token";
pub const GRANT_TYPE_AUTHORIZATION_CODE: &str = "authorization_code";

/// Body the API returns instead of a 401 when credentials are rejected.
pub const AUTH_FAILED_BODY: &str = "Authentication failed for API request.";

// Receipt uploads
pub const RECEIPT_FORM_FIELD: &str = "expense[receipt]";
pub const ACCESS_TOKEN_PARAM: &str = "access_token";
