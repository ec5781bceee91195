//! Command implementations for stignore-cli

pub mod add;

pub use add::run_add;
