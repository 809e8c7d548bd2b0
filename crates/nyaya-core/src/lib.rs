//! Business logic and trait seams for Nyaya.
//!
//! This crate defines the "ports" ([`llm::LlmProvider`],
//! [`repohost::RepoHost`]) that the infrastructure layer implements,
//! plus the session state, the canned-response matcher, the credential
//! validation policy, and the repository-analysis composer. It depends
//! only on `nyaya-types` -- never on `nyaya-infra` or any HTTP/OS crate.

pub mod analysis;
pub mod chat;
pub mod credential;
pub mod llm;
pub mod repohost;
