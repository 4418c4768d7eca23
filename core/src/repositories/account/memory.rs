//! Process-local account directory for development and tests

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::account::Account;
use crate::errors::{DependencyError, DomainError};

use super::trait_::AccountDirectory;

/// In-memory account directory
#[derive(Clone, Default)]
pub struct InMemoryAccountDirectory {
    accounts: Arc<RwLock<HashMap<String, Account>>>,
}

impl InMemoryAccountDirectory {
    /// Create an empty directory
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace an account as-is
    pub async fn insert(&self, account: Account) {
        self.accounts.write().await.insert(account.id.clone(), account);
    }

    /// Mark an account inactive; returns false when the id is unknown
    pub async fn deactivate(&self, id: &str) -> bool {
        match self.accounts.write().await.get_mut(id) {
            Some(account) => {
                account.deactivate();
                true
            }
            None => false,
        }
    }

    /// Remove an account entirely; returns false when the id is unknown
    pub async fn remove(&self, id: &str) -> bool {
        self.accounts.write().await.remove(id).is_some()
    }

    /// Number of stored accounts
    pub async fn len(&self) -> usize {
        self.accounts.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.accounts.read().await.is_empty()
    }
}

#[async_trait]
impl AccountDirectory for InMemoryAccountDirectory {
    async fn find_by_id(&self, id: &str) -> Result<Option<Account>, DomainError> {
        Ok(self.accounts.read().await.get(id).cloned())
    }

    async fn find_by_phone(&self, phone_number: &str) -> Result<Option<Account>, DomainError> {
        Ok(self
            .accounts
            .read()
            .await
            .values()
            .find(|a| a.phone_number == phone_number)
            .cloned())
    }

    async fn create(&self, phone_number: &str) -> Result<Account, DomainError> {
        let mut accounts = self.accounts.write().await;

        if accounts.values().any(|a| a.phone_number == phone_number) {
            return Err(DependencyError::AccountDirectory {
                message: "phone number already registered".to_string(),
            }
            .into());
        }

        let account = Account::new(phone_number);
        accounts.insert(account.id.clone(), account.clone());
        Ok(account)
    }
}
