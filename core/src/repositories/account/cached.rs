//! Short-lived cache in front of an account directory
//!
//! Only positive lookups of active accounts are kept, and only for the
//! configured TTL. With a zero TTL every call goes to the inner directory.
//!
//! A cached account stays visible as active for up to the TTL after it is
//! deactivated upstream.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use crate::domain::entities::account::Account;
use crate::errors::DomainError;

use super::trait_::AccountDirectory;

/// Caching decorator for [`AccountDirectory::find_by_id`]
pub struct CachedAccountDirectory {
    inner: Arc<dyn AccountDirectory>,
    ttl: Duration,
    entries: Mutex<HashMap<String, (Account, Instant)>>,
}

impl CachedAccountDirectory {
    pub fn new(inner: Arc<dyn AccountDirectory>, ttl: Duration) -> Self {
        Self {
            inner,
            ttl,
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// Whether lookups are cached at all
    pub fn is_enabled(&self) -> bool {
        !self.ttl.is_zero()
    }

    /// Drop any cached entry for `id`
    pub fn invalidate(&self, id: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.remove(id);
        }
    }

    fn cached(&self, id: &str) -> Option<Account> {
        let mut entries = self.entries.lock().ok()?;
        match entries.get(id) {
            Some((account, stored_at)) if stored_at.elapsed() < self.ttl => Some(account.clone()),
            Some(_) => {
                entries.remove(id);
                None
            }
            None => None,
        }
    }

    fn remember(&self, account: &Account) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.insert(account.id.clone(), (account.clone(), Instant::now()));
        }
    }
}

#[async_trait]
impl AccountDirectory for CachedAccountDirectory {
    async fn find_by_id(&self, id: &str) -> Result<Option<Account>, DomainError> {
        if !self.is_enabled() {
            return self.inner.find_by_id(id).await;
        }

        if let Some(account) = self.cached(id) {
            tracing::trace!(event = "account_cache_hit", "Account lookup served from cache");
            return Ok(Some(account));
        }

        let found = self.inner.find_by_id(id).await?;
        match &found {
            Some(account) if account.is_active => self.remember(account),
            _ => self.invalidate(id),
        }
        Ok(found)
    }

    async fn find_by_phone(&self, phone_number: &str) -> Result<Option<Account>, DomainError> {
        self.inner.find_by_phone(phone_number).await
    }

    async fn create(&self, phone_number: &str) -> Result<Account, DomainError> {
        self.inner.create(phone_number).await
    }
}
