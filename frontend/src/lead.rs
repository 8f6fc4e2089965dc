use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const SUBMIT_PATH: &str = "/api/submit-strategy-call";
/// Element id of the strategy call form; page CTAs link here.
pub const FORM_ANCHOR: &str = "strategy-call";

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct StrategyCallRequest {
    pub email: String,
}

#[derive(Debug, Deserialize)]
pub struct StrategyCallResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Error, PartialEq)]
pub enum SubmitError {
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("{0}")]
    Rejected(String),
    #[error("Something went wrong. Please try again.")]
    Unexpected(u16),
    #[error("Network error. Please try again.")]
    Network(String),
}

/// Trims surrounding whitespace, then requires a non-empty address with an
/// `@`. The endpoint checks the `@` on what it receives.
pub fn validate_email(raw: &str) -> Result<StrategyCallRequest, SubmitError> {
    let email = raw.trim();
    if email.is_empty() || !email.contains('@') {
        return Err(SubmitError::InvalidEmail);
    }
    Ok(StrategyCallRequest {
        email: email.to_string(),
    })
}

/// Turn a non-2xx body into the message shown under the form.
pub fn rejection(status: u16, body: &str) -> SubmitError {
    match serde_json::from_str::<ErrorResponse>(body) {
        Ok(err) if !err.error.is_empty() => SubmitError::Rejected(err.error),
        _ => SubmitError::Unexpected(status),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_trimmed_address() {
        let req = validate_email("  lead@agency.com ").unwrap();
        assert_eq!(req.email, "lead@agency.com");
        assert_eq!(
            serde_json::to_string(&req).unwrap(),
            r#"{"email":"lead@agency.com"}"#
        );
    }

    #[test]
    fn rejects_missing_at_sign() {
        assert_eq!(validate_email("agency.com"), Err(SubmitError::InvalidEmail));
        assert_eq!(validate_email("   "), Err(SubmitError::InvalidEmail));
    }

    #[test]
    fn server_error_text_is_surfaced() {
        let err = rejection(400, r#"{"error":"Invalid email address"}"#);
        assert_eq!(err.to_string(), "Invalid email address");
    }

    #[test]
    fn unreadable_error_body_falls_back() {
        let err = rejection(500, "<html>");
        assert_eq!(err, SubmitError::Unexpected(500));
        assert_eq!(err.to_string(), "Something went wrong. Please try again.");
    }

    #[test]
    fn success_body_parses() {
        let ok: StrategyCallResponse =
            serde_json::from_str(r#"{"success":true,"message":"Email submitted successfully"}"#)
                .unwrap();
        assert!(ok.success);
        assert_eq!(ok.message.as_deref(), Some("Email submitted successfully"));
    }

    #[test]
    fn form_anchor_is_a_plain_fragment() {
        assert!(!FORM_ANCHOR.is_empty());
        assert!(FORM_ANCHOR
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-'));
    }

    #[test]
    fn line_breaks_and_tabs_are_trimmed() {
        let req = validate_email("\tlead@agency.com\n").unwrap();
        assert_eq!(req.email, "lead@agency.com");
        assert_eq!(validate_email("\t\n"), Err(SubmitError::InvalidEmail));
    }
}
