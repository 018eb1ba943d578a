//! Shared test utilities for the agent-skills workspace.
//!
//! Dev-dependency only, never published.
//!
//! # Modules
//!
//! - [`git`]: repository marker fixtures
//! - [`repo`]: [`repo::TestRepo`] builder for sync/inject scenarios

pub mod git;
pub mod repo;
