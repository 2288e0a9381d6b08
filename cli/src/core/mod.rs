//! # extkit Core Infrastructure
//!
//! File: cli/src/core/mod.rs
//!
//! ## Overview
//!
//! Foundational pieces shared by every command:
//! - `config`: configuration loading, merging, and validation
//! - `error`: the `ExtkitError` taxonomy and the `Result` alias
//! - `paths`: the installation root registry and the paths derived from it
//!
//! ```rust
//! use crate::core::config; // For loading configuration
//! use crate::core::error::{ExtkitError, Result}; // For error handling
//! use crate::core::paths::RootRegistry; // For root, bin dir, and lock paths
//! ```
//!
pub mod config;
pub mod error;
pub mod paths;
