//! Command implementations.

mod check;
mod roles;

pub use check::CheckCommand;
pub use roles::RolesCommand;
