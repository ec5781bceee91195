//! Shared test utilities for the stignore workspace.
//!
//! This crate provides a standard Syncthing folder fixture so crate test
//! suites do not each rebuild one. It is a dev-dependency only, never
//! published.
//!
//! # Modules
//!
//! - [`folder`]: [`TestFolder`] builder for a temporary synced folder

pub mod folder;

pub use folder::TestFolder;
