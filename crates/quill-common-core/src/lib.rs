//! Quill common core types.

pub mod id;

pub use id::{ArticleId, IdParseError, UserId};
