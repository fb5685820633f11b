//! Response normalization
//!
//! Every request ends in exactly one [`Outcome`], and [`normalize`] turns that
//! into exactly one `Result`. Rules, in precedence order:
//!
//! 1. A DELETE that received a status code succeeds whatever the status.
//! 2. No response, a body equal to `Authentication failed for API request.`,
//!    or a status of 400 or above fails.
//! 3. Anything else succeeds with the decoded body.
//!
//! Within rule 2 the authentication body is checked before the status, so it
//! is reported as `Authentication` even on a 2xx.

use harvest_domain::constants::AUTH_FAILED_BODY;
use harvest_domain::{HarvestError, HttpVerb, Result};
use reqwest::StatusCode;
use serde_json::Value;
use tracing::{debug, warn};

/// Raw result of one HTTP exchange.
#[derive(Debug)]
pub enum Outcome {
    /// A response was received.
    Completed { verb: HttpVerb, status: StatusCode, body: String },
    /// No response was received, or the request could not be built.
    Failed(HarvestError),
}

/// Classify an outcome into the caller-facing result.
///
/// # Errors
/// - the transport error carried by [`Outcome::Failed`]
/// - `HarvestError::Authentication` when the body is the API's auth failure
///   message
/// - `HarvestError::Http` for statuses of 400 and above
pub fn normalize(outcome: Outcome) -> Result<Value> {
    match outcome {
        Outcome::Failed(err) => {
            warn!(error = %err, kind = err.label(), "request produced no response");
            Err(err)
        }
        Outcome::Completed { verb: HttpVerb::Delete, status, body } => {
            debug!(%status, "delete completed");
            Ok(decode_body(&body))
        }
        Outcome::Completed { verb, status, body } => {
            if body.trim() == AUTH_FAILED_BODY {
                warn!(%verb, %status, "API rejected credentials");
                return Err(HarvestError::Authentication(AUTH_FAILED_BODY.to_string()));
            }

            if status.as_u16() >= 400 {
                warn!(%verb, %status, "API returned error status");
                return Err(HarvestError::Http { status: status.as_u16(), body });
            }

            Ok(decode_body(&body))
        }
    }
}

/// Decode a response body: empty → `null`, JSON → value, otherwise the raw
/// text as a string.
pub fn decode_body(body: &str) -> Value {
    if body.trim().is_empty() {
        return Value::Null;
    }
    serde_json::from_str(body).unwrap_or_else(|_| Value::String(body.to_string()))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn completed(verb: HttpVerb, status: u16, body: &str) -> Outcome {
        Outcome::Completed {
            verb,
            status: StatusCode::from_u16(status).unwrap(),
            body: body.to_string(),
        }
    }

    #[test]
    fn delete_204_without_body_is_empty_success() {
        let result = normalize(completed(HttpVerb::Delete, 204, ""));
        assert_eq!(result.unwrap(), Value::Null);
    }

    #[test]
    fn delete_succeeds_regardless_of_status() {
        let result = normalize(completed(HttpVerb::Delete, 500, "boom"));
        assert_eq!(result.unwrap(), json!("boom"));
    }

    #[test]
    fn get_404_is_http_error_with_status() {
        let err = normalize(completed(HttpVerb::Get, 404, "Not found")).unwrap_err();
        assert_eq!(err, HarvestError::Http { status: 404, body: "Not found".into() });
    }

    #[test]
    fn auth_failure_body_wins_regardless_of_status() {
        for status in [200, 401, 500] {
            let err = normalize(completed(HttpVerb::Get, status, AUTH_FAILED_BODY)).unwrap_err();
            assert!(matches!(err, HarvestError::Authentication(_)), "status {status}");
        }
        let err = normalize(completed(HttpVerb::Post, 200, AUTH_FAILED_BODY)).unwrap_err();
        assert!(matches!(err, HarvestError::Authentication(_)));
    }

    #[test]
    fn success_decodes_json() {
        let result = normalize(completed(HttpVerb::Get, 200, r#"{"expense":{"id":1}}"#));
        assert_eq!(result.unwrap(), json!({"expense": {"id": 1}}));
    }

    #[test]
    fn success_keeps_non_json_text() {
        let result = normalize(completed(HttpVerb::Post, 201, "created"));
        assert_eq!(result.unwrap(), json!("created"));
    }

    #[test]
    fn redirects_and_informational_statuses_are_success() {
        assert!(normalize(completed(HttpVerb::Put, 302, "")).is_ok());
        assert!(normalize(completed(HttpVerb::Get, 399, "")).is_ok());
        assert!(normalize(completed(HttpVerb::Get, 400, "")).is_err());
    }

    #[test]
    fn failed_outcome_passes_error_through() {
        let err = normalize(Outcome::Failed(HarvestError::Network("refused".into()))).unwrap_err();
        assert_eq!(err, HarvestError::Network("refused".into()));
    }
}
