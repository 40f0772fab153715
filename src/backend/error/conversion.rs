/**
 * Error Conversion
 *
 * This module provides conversion implementations for backend errors,
 * allowing them to be returned directly from handlers and middleware.
 *
 * # Response Format
 *
 * Every error becomes a JSON problem document (see `shared::error`):
 * ```json
 * {
 *   "type": "https://example.com/errors/not-found",
 *   "title": "Not found",
 *   "status": 404,
 *   "detail": "Product not found",
 *   "error": "Product not found",
 *   "errors": []
 * }
 * ```
 *
 * Server-side failures are logged here with their full cause; the client
 * only ever sees the generic internal-error text.
 */

use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    response::{IntoResponse, Response},
    Json,
};
use validator::{ValidationErrors, ValidationErrorsKind};

use crate::backend::error::types::BackendError;
use crate::shared::FieldError;

impl IntoResponse for BackendError {
    fn into_response(self) -> Response {
        if self.is_internal() {
            tracing::error!(error = %self, "Request failed with internal error");
        }

        let status = self.status_code();
        (status, Json(self.to_problem())).into_response()
    }
}

impl From<JsonRejection> for BackendError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            JsonRejection::JsonSyntaxError(err) => {
                tracing::debug!("Malformed JSON body: {}", err.body_text());
                BackendError::bad_request("Syntax error", "Malformed JSON")
            }
            JsonRejection::JsonDataError(err) => {
                let text = err.body_text();
                tracing::debug!("JSON body did not match the expected shape: {}", text);
                BackendError::BadRequest {
                    title: "Wrong field type".to_string(),
                    detail: "Invalid request body".to_string(),
                    errors: offending_field(&text)
                        .map(|field| vec![FieldError::new(field, "invalid type")])
                        .unwrap_or_default(),
                }
            }
            other => {
                tracing::debug!("Unreadable request body: {}", other.body_text());
                BackendError::bad_request("Bad request", "Invalid request body")
            }
        }
    }
}

impl From<PathRejection> for BackendError {
    fn from(rejection: PathRejection) -> Self {
        tracing::debug!("Invalid path parameter: {}", rejection.body_text());
        BackendError::bad_request("Bad request", "Invalid path parameter")
    }
}

impl From<ValidationErrors> for BackendError {
    fn from(errors: ValidationErrors) -> Self {
        BackendError::Validation {
            errors: field_errors(&errors),
        }
    }
}

/// Flatten validator output into sorted `FieldError`s
pub fn field_errors(errors: &ValidationErrors) -> Vec<FieldError> {
    let mut out: Vec<FieldError> = errors
        .errors()
        .iter()
        .flat_map(|(field, kind)| match kind {
            ValidationErrorsKind::Field(list) => list
                .iter()
                .map(|e| FieldError::new(field.to_string(), describe(e)))
                .collect::<Vec<_>>(),
            _ => vec![FieldError::new(field.to_string(), "invalid value")],
        })
        .collect();
    out.sort_by(|a, b| a.field.cmp(&b.field));
    out
}

/// Human-readable text for one validator failure, keyed by its code
fn describe(error: &validator::ValidationError) -> String {
    if let Some(message) = &error.message {
        return message.to_string();
    }
    match &*error.code {
        "required" => "field is required".to_string(),
        "email" => "invalid email address".to_string(),
        "gt" => "must be greater than 0".to_string(),
        "required_without_all" => "at least one field is required".to_string(),
        "max_bytes" => match error.params.get("max") {
            Some(max) => format!("must be at most {} bytes long", max),
            None => "too long".to_string(),
        },
        "length" => match (error.params.get("min"), error.params.get("max")) {
            (Some(min), _) => format!("must be at least {} characters long", min),
            (None, Some(max)) => format!("must be at most {} characters long", max),
            _ => "invalid length".to_string(),
        },
        other => other.to_string(),
    }
}

/// serde_json reports type errors as "<field>: invalid type: ..."; pull out the path
fn offending_field(body_text: &str) -> Option<String> {
    let (_, detail) = body_text.split_once("target type: ")?;
    let (path, rest) = detail.split_once(": ")?;
    if rest.starts_with("invalid type") && !path.contains(' ') {
        Some(path.to_string())
    } else {
        None
    }
}
