//! Custom assertion macros and utilities
//!
//! Provides assertion macros for the JSON problem documents every error
//! response carries.

/// Assert a response's status and the `detail`/`error` text of its problem body
///
/// Evaluates to the parsed `ProblemDetails`.
#[macro_export]
macro_rules! assert_problem {
    ($response:expr, $status:expr, $detail:expr) => {{
        let response = &$response;
        assert_eq!(response.status_code(), $status, "body: {}", response.text());
        let problem: shopfront::shared::ProblemDetails = response.json();
        assert_eq!(problem.status, $status.as_u16());
        assert_eq!(problem.detail, $detail);
        assert_eq!(problem.error, $detail);
        problem
    }};
}
