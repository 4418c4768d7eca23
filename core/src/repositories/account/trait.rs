//! Account directory trait defining the lookup boundary used by login and the
//! session gate.
//!
//! The directory is owned by an external system (Supabase in production).
//! The core only reads accounts, except for the find-or-create performed on a
//! first successful login.

use async_trait::async_trait;

use crate::domain::entities::account::Account;
use crate::errors::DomainError;

/// Lookup and creation of accounts
///
/// Implementations report transport or storage failures as
/// `DependencyError::AccountDirectory`; an absent account is `Ok(None)`.
#[async_trait]
pub trait AccountDirectory: Send + Sync {
    /// Find an account by its id (the session token subject)
    async fn find_by_id(&self, id: &str) -> Result<Option<Account>, DomainError>;

    /// Find an account by phone number (E.164)
    async fn find_by_phone(&self, phone_number: &str) -> Result<Option<Account>, DomainError>;

    /// Create a new active account for a verified phone number
    async fn create(&self, phone_number: &str) -> Result<Account, DomainError>;
}
