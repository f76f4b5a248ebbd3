//! # ManyWorker Testing Utils
//!
//! Shared testing utilities for the task marketplace backend.
//! This crate provides in-memory mock repositories and test data builders
//! that can be used across all other crates in the workspace.
//!
//! ## Usage
//!
//! Add this crate as a dev-dependency:
//!
//! ```toml
//! [dev-dependencies]
//! manyworker-testing-utils = { path = "../testing-utils" }
//! ```
//!
//! Then use the mocks in your tests:
//!
//! ```rust
//! use manyworker_testing_utils::mocks::*;
//! use manyworker_testing_utils::builders::*;
//! ```

pub mod builders;
pub mod mocks;

// Re-export commonly used items
pub use builders::*;
pub use mocks::*;
