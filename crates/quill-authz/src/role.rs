//! Role catalog.
//!
//! Three canonical roles, each with a display name used by API payloads
//! (`admin`) and a system name used by the identity layer (`ROLE_ADMIN`).
//! Both spellings come from the single table below, so they cannot drift.

use crate::error::UnknownRoleError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Canonical role assigned to a principal.
///
/// There is no hierarchy between [`RoleToken::Author`] and
/// [`RoleToken::Reader`]; only [`RoleToken::Admin`] overrides other checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum RoleToken {
    /// Full control over articles and users.
    Admin,
    /// May create articles and manage their own.
    Author,
    /// May read articles.
    Reader,
}

/// (token, display name, system name)
const CATALOG: [(RoleToken, &str, &str); 3] = [
    (RoleToken::Admin, "admin", "ROLE_ADMIN"),
    (RoleToken::Author, "author", "ROLE_AUTHOR"),
    (RoleToken::Reader, "reader", "ROLE_READER"),
];

impl RoleToken {
    /// Every role, in catalog order.
    pub const ALL: [RoleToken; 3] = [RoleToken::Admin, RoleToken::Author, RoleToken::Reader];

    /// Display name, e.g. `author`.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Admin => CATALOG[0].1,
            Self::Author => CATALOG[1].1,
            Self::Reader => CATALOG[2].1,
        }
    }

    /// System name, e.g. `ROLE_AUTHOR`.
    pub fn system_name(self) -> &'static str {
        match self {
            Self::Admin => CATALOG[0].2,
            Self::Author => CATALOG[1].2,
            Self::Reader => CATALOG[2].2,
        }
    }

    /// Whether this role carries the blanket override.
    pub fn is_admin(self) -> bool {
        self == Self::Admin
    }

    /// Whether this role may create articles.
    pub fn can_author(self) -> bool {
        matches!(self, Self::Admin | Self::Author)
    }
}

impl fmt::Display for RoleToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for RoleToken {
    type Err = UnknownRoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RoleCatalog::to_system_role(s)
    }
}

impl TryFrom<String> for RoleToken {
    type Error = UnknownRoleError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        RoleCatalog::to_system_role(&value)
    }
}

impl From<RoleToken> for &'static str {
    fn from(role: RoleToken) -> Self {
        role.display_name()
    }
}

/// Conversions between role tokens and their string spellings.
pub struct RoleCatalog;

impl RoleCatalog {
    /// Resolve a display name (`admin`, `Author`, `READER`) to its token.
    ///
    /// Matching is case-insensitive. Anything outside the three canonical
    /// names fails; there is no default role.
    pub fn to_system_role(input: &str) -> Result<RoleToken, UnknownRoleError> {
        let normalized = input.to_lowercase();
        CATALOG
            .iter()
            .find(|(_, display, _)| *display == normalized)
            .map(|(token, _, _)| *token)
            .ok_or_else(|| UnknownRoleError::new(normalized))
    }

    /// Inverse of [`RoleCatalog::to_system_role`].
    pub fn to_display_role(token: RoleToken) -> Result<&'static str, UnknownRoleError> {
        CATALOG
            .iter()
            .find(|(candidate, _, _)| *candidate == token)
            .map(|(_, display, _)| *display)
            .ok_or_else(|| UnknownRoleError::new(format!("{token:?}")))
    }

    /// Resolve a system name (`ROLE_ADMIN`, case-insensitive) to its token.
    pub fn from_system_name(input: &str) -> Result<RoleToken, UnknownRoleError> {
        let normalized = input.to_uppercase();
        CATALOG
            .iter()
            .find(|(_, _, system)| *system == normalized)
            .map(|(token, _, _)| *token)
            .ok_or_else(|| UnknownRoleError::new(normalized))
    }

    /// Every catalog entry as (token, display name, system name).
    pub fn entries() -> impl Iterator<Item = (RoleToken, &'static str, &'static str)> {
        CATALOG.into_iter()
    }
}
