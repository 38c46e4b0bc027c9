//! Configuration types.

use serde::{Deserialize, Serialize};

/// Root configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct QuillConfig {
    /// Access-control policy knobs.
    pub access: AccessConfig,
    /// Decision audit logging.
    pub audit: AuditConfig,
    /// Log output.
    pub log: LoggingConfig,
}

/// Access-control configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AccessConfig {
    /// Who may view articles.
    pub article_view: ArticleViewPolicy,
}

/// Policy for viewing articles.
///
/// Earlier revisions of the product disagreed on this: some only required
/// an authenticated caller, others reused the create check for reads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArticleViewPolicy {
    /// Any authenticated principal may view.
    #[default]
    Authenticated,
    /// Only principals that may also create articles (admin, author).
    CreateCapable,
}

/// Audit logging of authorization decisions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AuditConfig {
    /// Emit granted decisions at info level instead of debug.
    pub log_granted: bool,
    /// Emit denied decisions at info level.
    pub log_denied: bool,
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            log_granted: false,
            log_denied: true,
        }
    }
}

/// Log output configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Minimum level (trace, debug, info, warn, error).
    pub level: String,
    /// Output format (pretty, compact, json).
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}
