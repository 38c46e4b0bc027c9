//! End-to-end call-site scenarios.

use quill_authz::{AccessError, AccessGate, Action, ResourceType, RoleToken, UserId};
use quill_common_config::{ArticleViewPolicy, ConfigLoader};
use quill_test_utils::{article, assert_err, assert_ok, principal, temp_project, user};

#[test]
fn test_ownership_follows_the_creator() {
    let gate = AccessGate::new();
    let creator = principal(5, RoleToken::Author);

    assert_ok!(gate.enforce(&creator, ResourceType::Article, Action::Create, None));
    // The persistence layer records the creator as owner.
    let created = article(1, creator.id.get());
    assert_eq!(created.owner_id, UserId::new(5));

    for action in [Action::Edit, Action::Delete] {
        assert!(gate.decide(&creator, ResourceType::Article, action, Some(&created)));
        assert!(!gate.decide(&principal(6, RoleToken::Author), ResourceType::Article, action, Some(&created)));
        assert!(gate.decide(&principal(7, RoleToken::Admin), ResourceType::Article, action, Some(&created)));
    }
}

#[test]
fn test_reader_cannot_create_edit_or_delete() {
    let gate = AccessGate::new();
    let reader = principal(2, RoleToken::Reader);
    let someone_elses = article(1, 5);

    let err = assert_err!(gate.enforce(&reader, ResourceType::Article, Action::Create, None));
    assert_eq!(err.status_code(), 403);
    assert!(!gate.decide(&reader, ResourceType::Article, Action::Edit, Some(&someone_elses)));
    assert!(!gate.decide(&reader, ResourceType::Article, Action::Delete, Some(&someone_elses)));
}

#[test]
fn test_only_admin_manages_users() {
    let gate = AccessGate::new();
    let target = user(9);

    for role in [RoleToken::Reader, RoleToken::Author] {
        for action in Action::ALL {
            assert!(!gate.decide(&principal(9, role), ResourceType::User, action, Some(&target)));
        }
    }
    assert_ok!(gate.enforce(&principal(1, RoleToken::Admin), ResourceType::User, Action::Create, None));
}

#[test]
fn test_admin_cannot_delete_user_who_owns_articles() {
    let gate = AccessGate::new();
    let admin = principal(1, RoleToken::Admin);
    let articles = vec![article(10, 5), article(11, 5)];

    let err = assert_err!(gate.authorize_user_deletion(&admin, &user(5), &articles));
    match &err {
        AccessError::Conflict(conflict) => {
            assert_eq!(conflict.user, UserId::new(5));
            assert_eq!(conflict.articles, 2);
        }
        other => panic!("Expected Conflict, got {other:?}"),
    }
    assert_eq!(err.to_body().error.code, 409);

    assert_ok!(gate.authorize_user_deletion(&admin, &user(6), &articles));
}

#[test]
fn test_denial_renders_boundary_body() {
    let gate = AccessGate::new();
    let err = assert_err!(gate.enforce(
        &principal(6, RoleToken::Author),
        ResourceType::Article,
        Action::Edit,
        Some(&article(1, 5)),
    ));
    let json: serde_json::Value = serde_json::from_str(&err.to_body().to_json().unwrap()).unwrap();
    assert_eq!(json["error"]["code"], 403);
    assert!(json["error"]["message"].as_str().unwrap().contains("denied"));
}

#[test]
fn test_unknown_role_on_input_is_surfaced() {
    let err: AccessError = assert_err!("wizard".parse::<RoleToken>()).into();
    assert_eq!(err.status_code(), 400);
    assert_eq!(err.to_string(), "Role wizard not found.");
}

#[test]
fn test_gate_from_loaded_config() {
    let (dir, _path) = temp_project("access:\n  article_view: create_capable\naudit:\n  log_granted: true\n");
    let config = assert_ok!(ConfigLoader::new(dir.path()).load());
    assert_eq!(config.access.article_view, ArticleViewPolicy::CreateCapable);

    let gate = AccessGate::from_config(&config);
    let reader = principal(2, RoleToken::Reader);
    assert!(!gate.decide(&reader, ResourceType::Article, Action::View, None));
    assert!(gate.decide(&principal(3, RoleToken::Author), ResourceType::Article, Action::View, None));
}
