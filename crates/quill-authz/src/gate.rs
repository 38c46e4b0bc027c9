//! Call-site entry point for access decisions.
//!
//! The boundary layer resolves the principal, fetches the resource (turning
//! a missing one into a 404 itself) and then asks the gate before applying
//! any change. A refusal is terminal.

use crate::audit::AuthzAuditEvent;
use crate::error::{AccessError, AccessResult, ConflictError};
use crate::policy::{ArticleAuthorizer, Authorizer, UserAuthorizer, Vote};
use crate::types::{Action, Principal, ResourceSnapshot, ResourceType};
use quill_common_config::{AuditConfig, QuillConfig};
use quill_common_core::UserId;
use tracing::warn;

/// Source of article authorship counts, provided by the persistence layer.
pub trait ArticleOwnership {
    /// Number of articles authored by `user`.
    fn articles_owned_by(&self, user: UserId) -> usize;
}

impl ArticleOwnership for [ResourceSnapshot] {
    fn articles_owned_by(&self, user: UserId) -> usize {
        self.iter().filter(|article| article.owner_id == user).count()
    }
}

impl ArticleOwnership for Vec<ResourceSnapshot> {
    fn articles_owned_by(&self, user: UserId) -> usize {
        self.as_slice().articles_owned_by(user)
    }
}

/// Referential guard for deleting a user.
///
/// Independent of authorization: it applies to admins too.
pub fn ensure_user_deletable(user: UserId, owned_articles: usize) -> Result<(), ConflictError> {
    if owned_articles == 0 {
        Ok(())
    } else {
        Err(ConflictError {
            user,
            articles: owned_articles,
        })
    }
}

/// Routes each request to the one authorizer for its resource type.
#[derive(Debug, Clone, Default)]
pub struct AccessGate {
    article: ArticleAuthorizer,
    user: UserAuthorizer,
    audit: AuditConfig,
}

impl AccessGate {
    /// Create a gate with default policies.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a gate from loaded configuration.
    pub fn from_config(config: &QuillConfig) -> Self {
        Self {
            article: ArticleAuthorizer::new(config.access.article_view),
            user: UserAuthorizer::new(),
            audit: config.audit.clone(),
        }
    }

    /// The authorizer responsible for `resource`.
    pub fn authorizer(&self, resource: ResourceType) -> &dyn Authorizer {
        match resource {
            ResourceType::Article => &self.article,
            ResourceType::User => &self.user,
        }
    }

    /// Raw vote, without audit logging.
    pub fn vote(
        &self,
        principal: &Principal,
        resource: ResourceType,
        action: Action,
        snapshot: Option<&ResourceSnapshot>,
    ) -> Vote {
        self.authorizer(resource).vote(principal, action, snapshot)
    }

    /// Boolean verdict. Abstention is a deny.
    pub fn decide(
        &self,
        principal: &Principal,
        resource: ResourceType,
        action: Action,
        snapshot: Option<&ResourceSnapshot>,
    ) -> bool {
        let vote = self.vote(principal, resource, action, snapshot);
        AuthzAuditEvent::new(principal, action, resource, snapshot, vote).log(&self.audit);
        vote.is_granted()
    }

    /// Like [`AccessGate::decide`], but a deny becomes [`AccessError::Forbidden`].
    pub fn enforce(
        &self,
        principal: &Principal,
        resource: ResourceType,
        action: Action,
        snapshot: Option<&ResourceSnapshot>,
    ) -> AccessResult<()> {
        if self.decide(principal, resource, action, snapshot) {
            Ok(())
        } else {
            Err(AccessError::Forbidden { action, resource })
        }
    }

    /// Full check for deleting a user: authorization, then the ownership guard.
    pub fn authorize_user_deletion<O>(
        &self,
        principal: &Principal,
        target: &ResourceSnapshot,
        articles: &O,
    ) -> AccessResult<()>
    where
        O: ArticleOwnership + ?Sized,
    {
        self.enforce(principal, ResourceType::User, Action::Delete, Some(target))?;

        let user = target.owner_id;
        let owned = articles.articles_owned_by(user);
        ensure_user_deletable(user, owned).map_err(|conflict| {
            warn!(
                principal_id = %principal.id,
                user_id = %user,
                articles = owned,
                "User deletion blocked by authored articles"
            );
            AccessError::from(conflict)
        })
    }
}
