use axum::http::StatusCode;
use std::fmt;
use thiserror::Error;

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    pub fn internal(err: impl std::error::Error) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        Self::internal(err)
    }
}

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        (self.status, self.message).into_response()
    }
}

/// The four calls the gateway makes against the feedback API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Feedback,
    Summary,
    FilteredFeedback,
    SummaryReport,
}

impl Operation {
    /// What the user sees when this call fails in transport.
    pub fn failure_message(self) -> &'static str {
        match self {
            Self::Feedback => "Failed to load feedback data",
            Self::Summary => "Failed to load dashboard data",
            Self::FilteredFeedback => "Failed to load filtered data",
            Self::SummaryReport => "Failed to generate summary. Please try again.",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Feedback => "GET /feedback",
            Self::Summary => "GET /feedback-summary",
            Self::FilteredFeedback => "GET /filtered-feedback",
            Self::SummaryReport => "POST /generate-summary",
        };
        f.write_str(name)
    }
}

/// Display is always the user-facing message; transport detail only goes to
/// the logs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GatewayError {
    #[error("{}", .operation.failure_message())]
    Network { operation: Operation, detail: String },
    #[error("{0}")]
    Application(String),
}

impl GatewayError {
    pub fn network(operation: Operation, detail: impl fmt::Display) -> Self {
        Self::Network {
            operation,
            detail: detail.to_string(),
        }
    }

    pub fn user_message(&self) -> String {
        self.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn network_failures_show_fixed_message() {
        let err = GatewayError::network(Operation::FilteredFeedback, "connection refused");
        assert_eq!(err.user_message(), "Failed to load filtered data");
    }

    #[test]
    fn application_errors_show_embedded_message() {
        let err = GatewayError::Application("rate limited".into());
        assert_eq!(err.user_message(), "rate limited");
    }
}
