//! Authorization audit logging.

use crate::policy::Vote;
use crate::role::RoleToken;
use crate::types::{Action, Principal, ResourceSnapshot, ResourceType};
use chrono::{DateTime, Utc};
use quill_common_config::AuditConfig;
use quill_common_core::UserId;
use serde::Serialize;
use tracing::{debug, info};

/// Authorization audit event.
#[derive(Debug, Clone, Serialize)]
pub struct AuthzAuditEvent {
    /// When the decision was made.
    pub timestamp: DateTime<Utc>,
    /// Acting principal.
    pub principal_id: UserId,
    /// Role of the acting principal.
    pub role: RoleToken,
    /// Requested action.
    pub action: Action,
    /// Resource type the request targets.
    pub resource: ResourceType,
    /// Instance id, absent for type-level requests.
    pub resource_id: Option<u64>,
    /// Owner of the instance, if any.
    pub owner_id: Option<UserId>,
    /// Final verdict.
    pub granted: bool,
    /// Why the request was refused.
    pub reason: Option<&'static str>,
}

impl AuthzAuditEvent {
    /// Record the outcome of one decision.
    pub fn new(
        principal: &Principal,
        action: Action,
        resource: ResourceType,
        snapshot: Option<&ResourceSnapshot>,
        vote: Vote,
    ) -> Self {
        let reason = match vote {
            Vote::Grant => None,
            Vote::Deny => Some("denied by policy"),
            Vote::Abstain => Some("no applicable vote"),
        };

        Self {
            timestamp: Utc::now(),
            principal_id: principal.id,
            role: principal.role,
            action,
            resource,
            resource_id: snapshot.map(|s| s.id),
            owner_id: snapshot.map(|s| s.owner_id),
            granted: vote.is_granted(),
            reason,
        }
    }

    /// Emit the event; `audit` decides which outcomes reach info level.
    pub fn log(&self, audit: &AuditConfig) {
        let event = self;
        macro_rules! emit {
            ($level:ident, $event:literal, $message:literal) => {
                $level!(
                    event = $event,
                    principal_id = %event.principal_id,
                    role = %event.role,
                    action = %event.action,
                    resource = %event.resource,
                    resource_id = ?event.resource_id,
                    owner_id = ?event.owner_id,
                    reason = ?event.reason,
                    $message
                )
            };
        }

        match (self.granted, audit.log_granted, audit.log_denied) {
            (true, true, _) => emit!(info, "authz_granted", "Authorization granted"),
            (true, false, _) => emit!(debug, "authz_granted", "Authorization granted"),
            (false, _, true) => emit!(info, "authz_denied", "Authorization denied"),
            (false, _, false) => emit!(debug, "authz_denied", "Authorization denied"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quill_common_core::ArticleId;

    #[test]
    fn test_event_captures_decision() {
        let principal = Principal::new(6, RoleToken::Author);
        let article = ResourceSnapshot::article(ArticleId::new(11), UserId::new(5));
        let event = AuthzAuditEvent::new(
            &principal,
            Action::Edit,
            ResourceType::Article,
            Some(&article),
            Vote::Deny,
        );

        assert!(!event.granted);
        assert_eq!(event.principal_id, UserId::new(6));
        assert_eq!(event.resource_id, Some(11));
        assert_eq!(event.owner_id, Some(UserId::new(5)));
        assert_eq!(event.reason, Some("denied by policy"));
    }

    #[test]
    fn test_abstention_is_recorded_as_denied() {
        let principal = Principal::new(1, RoleToken::Admin);
        let event = AuthzAuditEvent::new(&principal, Action::Delete, ResourceType::Article, None, Vote::Abstain);

        assert!(!event.granted);
        assert_eq!(event.reason, Some("no applicable vote"));
        assert_eq!(event.resource_id, None);
    }

    #[test]
    fn test_event_serializes() {
        let principal = Principal::new(1, RoleToken::Admin);
        let event = AuthzAuditEvent::new(&principal, Action::View, ResourceType::User, None, Vote::Grant);
        let json = serde_json::to_value(&event).unwrap();

        assert_eq!(json["principal_id"], 1);
        assert_eq!(json["role"], "admin");
        assert_eq!(json["action"], "view");
        assert_eq!(json["resource"], "user");
        assert_eq!(json["granted"], true);
        assert!(json["reason"].is_null());
    }

    #[test]
    fn test_log_without_subscriber_is_harmless() {
        let principal = Principal::new(1, RoleToken::Reader);
        let event = AuthzAuditEvent::new(&principal, Action::Create, ResourceType::Article, None, Vote::Deny);
        event.log(&AuditConfig::default());
    }
}
