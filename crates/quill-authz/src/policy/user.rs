//! User account access: admin only.

use super::{Authorizer, Vote};
use crate::types::{Action, Principal, ResourceSnapshot, ResourceType};

/// Decides access to user accounts.
///
/// Every action requires the admin role. Ownership is ignored, so there is
/// no self-service path for a principal's own record.
#[derive(Debug, Clone, Copy, Default)]
pub struct UserAuthorizer;

impl UserAuthorizer {
    /// Create the authorizer.
    pub fn new() -> Self {
        Self
    }
}

impl Authorizer for UserAuthorizer {
    fn resource_type(&self) -> ResourceType {
        ResourceType::User
    }

    fn vote(&self, principal: &Principal, _action: Action, _user: Option<&ResourceSnapshot>) -> Vote {
        principal.is_admin().into()
    }
}
