//! Article access: role checks combined with authorship.

use super::{Authorizer, Vote};
use crate::types::{Action, Principal, ResourceSnapshot, ResourceType};
use quill_common_config::ArticleViewPolicy;

/// Decides access to articles.
///
/// - view: any authenticated principal (or admin/author under
///   [`ArticleViewPolicy::CreateCapable`])
/// - create: admin or author; the subject is the type
/// - edit, delete: admin, or the article's author
#[derive(Debug, Clone, Copy, Default)]
pub struct ArticleAuthorizer {
    view_policy: ArticleViewPolicy,
}

impl ArticleAuthorizer {
    /// Create an authorizer with the given view policy.
    pub fn new(view_policy: ArticleViewPolicy) -> Self {
        Self { view_policy }
    }

    fn can_view(&self, principal: &Principal) -> bool {
        match self.view_policy {
            ArticleViewPolicy::Authenticated => true,
            ArticleViewPolicy::CreateCapable => principal.role.can_author(),
        }
    }
}

impl Authorizer for ArticleAuthorizer {
    fn resource_type(&self) -> ResourceType {
        ResourceType::Article
    }

    fn vote(&self, principal: &Principal, action: Action, article: Option<&ResourceSnapshot>) -> Vote {
        match action {
            Action::View => self.can_view(principal).into(),
            Action::Create => principal.role.can_author().into(),
            Action::Edit | Action::Delete => match article {
                Some(article) => (principal.is_admin() || principal.owns(article)).into(),
                // Edit and delete need an instance to check authorship against.
                None => Vote::Abstain,
            },
        }
    }
}
