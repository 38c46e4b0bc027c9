//! Access-control error types.
//!
//! A denied decision is not an error inside this crate; [`AccessError`]
//! exists for callers that turn verdicts and guard failures into responses.

use crate::types::{Action, ResourceType};
use quill_common_core::UserId;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type for call-site checks.
pub type AccessResult<T> = Result<T, AccessError>;

/// A role string outside the canonical set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Role {role} not found.")]
pub struct UnknownRoleError {
    /// The rejected input, normalized.
    pub role: String,
}

impl UnknownRoleError {
    /// Create the error for a rejected role.
    pub fn new(role: impl Into<String>) -> Self {
        Self { role: role.into() }
    }
}

/// A user that still owns articles cannot be deleted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Cannot delete user with articles ({user} owns {articles}).")]
pub struct ConflictError {
    /// The user whose deletion was refused.
    pub user: UserId,
    /// Number of articles still authored by the user.
    pub articles: usize,
}

/// A string that does not name an action or resource type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid {kind}: '{value}'")]
pub struct InvalidValueError {
    /// What was being parsed.
    pub kind: &'static str,
    /// The rejected input.
    pub value: String,
}

impl InvalidValueError {
    /// Create the error.
    pub fn new(kind: &'static str, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }
}

/// Failures surfaced to the boundary layer.
#[derive(Debug, Error)]
pub enum AccessError {
    // 403 Forbidden
    /// The gate refused the request.
    #[error("Access denied: cannot {action} {resource}.")]
    Forbidden {
        /// Refused action.
        action: Action,
        /// Targeted resource type.
        resource: ResourceType,
    },

    // 400 Bad Request
    /// Role string outside the catalog.
    #[error(transparent)]
    UnknownRole(#[from] UnknownRoleError),

    /// Unparseable action or resource type.
    #[error(transparent)]
    InvalidValue(#[from] InvalidValueError),

    // 404 Not Found
    /// The resource does not exist.
    #[error("{} not found.", resource.title())]
    NotFound {
        /// Resource type that was looked up.
        resource: ResourceType,
        /// Id that was looked up.
        id: u64,
    },

    // 409 Conflict
    /// The user still authors articles.
    #[error(transparent)]
    Conflict(#[from] ConflictError),
}

impl AccessError {
    /// HTTP status code for this error.
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Forbidden { .. } => 403,
            Self::UnknownRole(_) | Self::InvalidValue(_) => 400,
            Self::NotFound { .. } => 404,
            Self::Conflict(_) => 409,
        }
    }

    /// Error code for client handling.
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Forbidden { .. } => "forbidden",
            Self::UnknownRole(_) => "unknown_role",
            Self::InvalidValue(_) => "invalid_value",
            Self::NotFound { .. } => "not_found",
            Self::Conflict(_) => "conflict",
        }
    }

    /// None of these depend on timing or I/O.
    pub fn is_retryable(&self) -> bool {
        false
    }

    /// Response body in the `{"error":{"code":..,"message":..}}` shape.
    pub fn to_body(&self) -> ErrorBody {
        ErrorBody {
            error: ErrorDetail {
                code: self.status_code(),
                message: self.to_string(),
            },
        }
    }
}

/// Error response envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Error details.
    pub error: ErrorDetail,
}

/// Error details inside [`ErrorBody`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorDetail {
    /// HTTP status code.
    pub code: u16,
    /// Human-readable message.
    pub message: String,
}

impl ErrorBody {
    /// Serialize to a JSON string.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
