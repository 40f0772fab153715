//! Shared Error Types
//!
//! Wire format of every error response the server produces. Clients can
//! deserialize these types directly.
//!
//! # Format
//!
//! Bodies follow RFC 7807 ("problem details"), with an extra `error` member
//! carrying the same text as `detail`:
//!
//! ```json
//! {
//!   "type": "https://example.com/errors/unauthorized",
//!   "title": "Unauthorized",
//!   "status": 401,
//!   "detail": "Token has expired",
//!   "error": "Token has expired",
//!   "errors": []
//! }
//! ```
use serde::{Deserialize, Serialize};

/// Base URI for the `type` member of problem documents
pub const PROBLEM_TYPE_BASE: &str = "https://example.com/errors/";

/// A single invalid field in a request body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    /// Name of the offending field as it appears in the JSON body
    pub field: String,
    /// Human-readable reason
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Problem document returned for every non-2xx response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProblemDetails {
    #[serde(rename = "type")]
    pub kind: String,
    pub title: String,
    pub status: u16,
    pub detail: String,
    /// Same text as `detail`, for clients that only read `{"error": ...}`
    pub error: String,
    #[serde(default)]
    pub errors: Vec<FieldError>,
}

impl ProblemDetails {
    /// Build a problem whose `type` is derived from the title
    /// ("Not found" becomes `.../errors/not-found`).
    pub fn new(status: u16, title: impl Into<String>, detail: impl Into<String>) -> Self {
        let title = title.into();
        let detail = detail.into();
        Self {
            kind: format!("{}{}", PROBLEM_TYPE_BASE, title.to_lowercase().replace(' ', "-")),
            title,
            status,
            error: detail.clone(),
            detail,
            errors: Vec::new(),
        }
    }

    /// Override the `type` slug
    pub fn with_type(mut self, slug: &str) -> Self {
        self.kind = format!("{}{}", PROBLEM_TYPE_BASE, slug);
        self
    }

    /// Attach per-field errors
    pub fn with_errors(mut self, errors: Vec<FieldError>) -> Self {
        self.errors = errors;
        self
    }
}
