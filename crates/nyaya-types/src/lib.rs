//! Shared domain types for Nyaya.
//!
//! This crate contains the domain types used across the Nyaya legal
//! assistant: conversation turns, credentials, repository projections,
//! the prompt template store, and their associated error types.
//!
//! Zero infrastructure dependencies -- only serde, chrono, thiserror.

pub mod conversation;
pub mod credential;
pub mod llm;
pub mod repo;
pub mod template;
