//! Error bodies of the API (RFC 7807 problem details).

use serde::{Deserialize, Serialize};

/// The classes of failure the feed API reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Problem {
    /// Blank or malformed input.
    InvalidInput,
    /// The post, comment or like does not exist.
    NotFound,
    /// A write raced with another and lost on a uniqueness constraint.
    Conflict,
    Internal,
}

impl Problem {
    pub fn status(self) -> u16 {
        match self {
            Problem::InvalidInput => 400,
            Problem::NotFound => 404,
            Problem::Conflict => 409,
            Problem::Internal => 500,
        }
    }

    fn title(self) -> &'static str {
        match self {
            Problem::InvalidInput => "Invalid input",
            Problem::NotFound => "Resource not found",
            Problem::Conflict => "Conflicting write",
            Problem::Internal => "Internal Server Error",
        }
    }

    fn type_uri(self) -> &'static str {
        match self {
            Problem::InvalidInput => "/problems/invalid-input",
            Problem::NotFound => "/problems/not-found",
            Problem::Conflict => "/problems/conflict",
            Problem::Internal => "about:blank",
        }
    }
}

/// RFC 7807 Problem Details for HTTP APIs.
///
/// See: https://datatracker.ietf.org/doc/html/rfc7807
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    #[serde(rename = "type")]
    pub error_type: String,
    pub title: String,
    pub status: u16,
    /// Explanation specific to this occurrence. Never set for internal errors.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl ErrorResponse {
    pub fn new(problem: Problem, detail: Option<String>) -> Self {
        Self {
            error_type: problem.type_uri().to_string(),
            title: problem.title().to_string(),
            status: problem.status(),
            detail: match problem {
                Problem::Internal => None,
                _ => detail,
            },
        }
    }
}
