//! Per-resource authorizers.
//!
//! Each resource type has exactly one authorizer. An authorizer votes on a
//! (principal, action, snapshot) triple; callers must treat anything other
//! than [`Vote::Grant`] as a deny.

pub mod article;
pub mod user;

pub use article::ArticleAuthorizer;
pub use user::UserAuthorizer;

use crate::types::{Action, Principal, ResourceSnapshot, ResourceType};

/// Outcome of a single authorizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Vote {
    /// The action is allowed.
    Grant,
    /// The action is refused.
    Deny,
    /// The authorizer has no opinion on this request.
    Abstain,
}

impl Vote {
    /// Only an explicit grant allows the action.
    pub fn is_granted(self) -> bool {
        self == Self::Grant
    }
}

impl From<bool> for Vote {
    fn from(granted: bool) -> Self {
        if granted {
            Self::Grant
        } else {
            Self::Deny
        }
    }
}

/// Access decisions for one resource type.
///
/// Implementations are pure: the vote depends only on the arguments.
pub trait Authorizer: Send + Sync {
    /// The resource type this authorizer is responsible for.
    fn resource_type(&self) -> ResourceType;

    /// Vote on whether `principal` may perform `action`.
    ///
    /// `resource` is `None` when the subject is the type itself (creation,
    /// listings).
    fn vote(&self, principal: &Principal, action: Action, resource: Option<&ResourceSnapshot>) -> Vote;

    /// Boolean verdict; abstention counts as deny.
    fn decide(&self, principal: &Principal, action: Action, resource: Option<&ResourceSnapshot>) -> bool {
        self.vote(principal, action, resource).is_granted()
    }
}
