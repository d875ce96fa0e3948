//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! - **persistence**: PostgreSQL-backed repositories using Diesel
//! - **auth**: bcrypt hashing and the credentials sign-in provider
//! - **cache**: in-process stale-view registry
//!
//! Adapters are thin translators between domain types and infrastructure
//! representations; they contain no business logic.

pub mod auth;
pub mod cache;
pub mod persistence;
