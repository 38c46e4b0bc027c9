//! Quill access control.
//!
//! Decides whether an authenticated principal may perform an action on an
//! article or a user record. Callers resolve the principal and fetch the
//! resource snapshot; this crate only returns a verdict.
//!
//! # Layout
//!
//! - [`role`]: the closed role set and its two-way name table
//! - [`types`]: principals, resource snapshots, actions and resource types
//! - [`policy`]: the per-resource authorizers
//! - [`gate`]: the call-site entry point, with default-deny and the
//!   user-deletion guard
//! - [`audit`]: structured decision logging
//! - [`error`]: the error taxonomy and its HTTP boundary mapping

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod audit;
pub mod error;
pub mod gate;
pub mod policy;
pub mod role;
pub mod types;

pub use audit::AuthzAuditEvent;
pub use error::{AccessError, AccessResult, ConflictError, ErrorBody, InvalidValueError, UnknownRoleError};
pub use gate::{ensure_user_deletable, AccessGate, ArticleOwnership};
pub use policy::{ArticleAuthorizer, Authorizer, UserAuthorizer, Vote};
pub use quill_common_config::ArticleViewPolicy;
pub use quill_common_core::{ArticleId, UserId};
pub use role::{RoleCatalog, RoleToken};
pub use types::{Action, Principal, ResourceSnapshot, ResourceType};
