//! Authorization types.

use crate::error::InvalidValueError;
use crate::role::RoleToken;
use quill_common_core::{ArticleId, UserId};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Actions that can be performed on a resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    /// Read a single resource or a listing.
    View,
    /// Create a new resource of a type.
    Create,
    /// Modify an existing resource.
    Edit,
    /// Remove an existing resource.
    Delete,
}

impl Action {
    /// Every action.
    pub const ALL: [Action; 4] = [Action::View, Action::Create, Action::Edit, Action::Delete];

    /// Lowercase name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::View => "view",
            Self::Create => "create",
            Self::Edit => "edit",
            Self::Delete => "delete",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Action {
    type Err = InvalidValueError;

    /// Accepts action names and the HTTP verbs that map onto them.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "view" | "read" | "get" => Ok(Self::View),
            "create" | "post" => Ok(Self::Create),
            "edit" | "update" | "put" | "patch" => Ok(Self::Edit),
            "delete" => Ok(Self::Delete),
            _ => Err(InvalidValueError::new("action", s)),
        }
    }
}

/// Resource types under access control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceType {
    /// A published article, owned by its author.
    Article,
    /// A user account.
    User,
}

impl ResourceType {
    /// Lowercase name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Article => "article",
            Self::User => "user",
        }
    }

    /// Capitalized name for user-facing messages.
    pub fn title(self) -> &'static str {
        match self {
            Self::Article => "Article",
            Self::User => "User",
        }
    }
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResourceType {
    type Err = InvalidValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "article" | "articles" => Ok(Self::Article),
            "user" | "users" => Ok(Self::User),
            _ => Err(InvalidValueError::new("resource type", s)),
        }
    }
}

/// The authenticated actor a decision is made for.
///
/// Resolved and validated upstream; never persisted here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Principal {
    /// Identity of the actor.
    pub id: UserId,
    /// Role assigned to the actor.
    pub role: RoleToken,
}

impl Principal {
    /// Create a principal from a raw identity.
    pub fn new(id: u64, role: RoleToken) -> Self {
        Self {
            id: UserId::new(id),
            role,
        }
    }

    /// Check if principal has the admin role.
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }

    /// Ownership is identity equality, nothing transitive.
    pub fn owns(&self, resource: &ResourceSnapshot) -> bool {
        self.id == resource.owner_id
    }
}

/// Minimal view of a fetched resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResourceSnapshot {
    /// Identity of the resource.
    pub id: u64,
    /// Identity of the owning principal.
    pub owner_id: UserId,
}

impl ResourceSnapshot {
    /// Snapshot of an article; its owner is the author.
    pub fn article(id: ArticleId, author: UserId) -> Self {
        Self {
            id: id.get(),
            owner_id: author,
        }
    }

    /// Snapshot of a user record, which owns itself.
    pub fn user(id: UserId) -> Self {
        Self {
            id: id.get(),
            owner_id: id,
        }
    }
}
