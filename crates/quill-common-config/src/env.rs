//! Environment variable handling.

use std::env;

/// Environment variable names.
pub mod vars {
    /// Explicit config file, used when `--config` is absent.
    pub const QUILL_CONFIG_PATH: &str = "QUILL_CONFIG_PATH";
    /// Selects an extra `.env.<name>` file.
    pub const QUILL_ENV: &str = "QUILL_ENV";
}

/// Process environment, optionally seeded from `.env` files.
pub struct Environment;

impl Environment {
    /// Load `.env`, `.env.local` and `.env.<QUILL_ENV>` when present.
    ///
    /// Variables already set in the process are never overwritten.
    pub fn init() {
        Self::load_from(".");
    }

    /// Same as [`Environment::init`], reading the files from `dir`.
    pub fn load_from(dir: impl AsRef<std::path::Path>) {
        let dir = dir.as_ref();
        let _ = dotenvy::from_path(dir.join(".env"));
        let _ = dotenvy::from_path(dir.join(".env.local"));

        if let Ok(name) = env::var(vars::QUILL_ENV) {
            let _ = dotenvy::from_path(dir.join(format!(".env.{name}")));
        }
    }

    /// Get an optional string variable.
    pub fn get(var: &str) -> Option<String> {
        env::var(var).ok()
    }
}
