//! `quill check`

use anyhow::Context;
use clap::Args;
use quill_authz::{
    AccessError, AccessGate, Action, ArticleOwnership, Principal, ResourceSnapshot, ResourceType,
    RoleCatalog, UserId, Vote,
};
use quill_common_config::QuillConfig;
use serde::Serialize;

use crate::cli::OutputFormat;
use crate::error::CliError;
use crate::Exit;

/// Decide whether a principal may perform an action
#[derive(Debug, Args)]
pub struct CheckCommand {
    /// Id of the acting principal
    #[arg(long)]
    pub principal: u64,

    /// Role of the acting principal (admin, author, reader)
    #[arg(long)]
    pub role: String,

    /// Resource type (article, user)
    #[arg(long)]
    pub resource: String,

    /// Action (view, create, edit, delete)
    #[arg(long)]
    pub action: String,

    /// Id of the resource instance
    #[arg(long)]
    pub resource_id: Option<u64>,

    /// Owner of the resource instance
    #[arg(long)]
    pub owner: Option<u64>,

    /// Articles still authored by the target user (user deletion only)
    #[arg(long)]
    pub owned_articles: Option<usize>,
}

const GRANTED: &str = "granted";
const DENIED: &str = "denied";
const CONFLICT: &str = "conflict";

/// A refused deletion of a user who still authors articles exits with its own code.
fn exit_for(granted: bool, outcome: &str) -> Exit {
    match (granted, outcome) {
        (true, _) => Exit::Success,
        (false, CONFLICT) => Exit::Conflict,
        (false, _) => Exit::Denied,
    }
}

/// Article count supplied on the command line.
struct OwnedCount(usize);

impl ArticleOwnership for OwnedCount {
    fn articles_owned_by(&self, _user: UserId) -> usize {
        self.0
    }
}

#[derive(Debug, Serialize)]
struct Verdict {
    principal: Principal,
    resource: ResourceType,
    action: Action,
    snapshot: Option<ResourceSnapshot>,
    granted: bool,
    outcome: &'static str,
}

impl CheckCommand {
    pub fn execute(&self, config: &QuillConfig, format: OutputFormat) -> Result<Exit, CliError> {
        let principal = Principal::new(self.principal, RoleCatalog::to_system_role(&self.role)?);
        let resource: ResourceType = self.resource.parse()?;
        let action: Action = self.action.parse()?;
        let snapshot = self.snapshot(resource)?;

        let gate = AccessGate::from_config(config);

        let (granted, outcome) = match (resource, action, snapshot, self.owned_articles) {
            (ResourceType::User, Action::Delete, Some(target), Some(count)) => {
                match gate.authorize_user_deletion(&principal, &target, &OwnedCount(count)) {
                    Ok(()) => (true, GRANTED),
                    Err(AccessError::Conflict(_)) => (false, CONFLICT),
                    Err(AccessError::Forbidden { .. }) => (false, DENIED),
                    Err(other) => return Err(other.into()),
                }
            }
            (_, _, _, Some(_)) => {
                return Err(CliError::validation(
                    "--owned-articles only applies to deleting a user instance",
                ))
            }
            _ => {
                let granted = gate.decide(&principal, resource, action, snapshot.as_ref());
                let outcome = match gate.vote(&principal, resource, action, snapshot.as_ref()) {
                    Vote::Grant => GRANTED,
                    Vote::Deny => DENIED,
                    Vote::Abstain => "abstained",
                };
                (granted, outcome)
            }
        };

        let verdict = Verdict {
            principal,
            resource,
            action,
            snapshot,
            granted,
            outcome,
        };

        match format {
            OutputFormat::Text => println!("{outcome}"),
            OutputFormat::Json => {
                let json = serde_json::to_string_pretty(&verdict).context("failed to serialize verdict")?;
                println!("{json}");
            }
        }

        Ok(exit_for(granted, outcome))
    }

    fn snapshot(&self, resource: ResourceType) -> Result<Option<ResourceSnapshot>, CliError> {
        match (resource, self.resource_id, self.owner) {
            (_, id, Some(owner)) => Ok(Some(ResourceSnapshot {
                id: id.unwrap_or_default(),
                owner_id: UserId::new(owner),
            })),
            (ResourceType::User, Some(id), None) => Ok(Some(ResourceSnapshot::user(UserId::new(id)))),
            (ResourceType::Article, Some(_), None) => Err(CliError::validation(
                "an article instance needs --owner",
            )),
            (_, None, None) => Ok(None),
        }
    }
}
