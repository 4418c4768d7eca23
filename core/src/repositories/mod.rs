//! Repository interfaces for data owned outside the core.

pub mod account;

pub use account::{AccountDirectory, CachedAccountDirectory, InMemoryAccountDirectory};
