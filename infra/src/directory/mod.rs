//! Account Directory Module
//!
//! - **Supabase**: PostgREST client over the users table
//! - **Memory**: the process-local directory from `fe_core`, for development
//!
//! Either backend may be wrapped in a short-lived lookup cache.

use std::sync::Arc;
use std::time::Duration;

use fe_core::errors::ConfigurationError;
use fe_core::repositories::{AccountDirectory, CachedAccountDirectory, InMemoryAccountDirectory};
use fe_shared::{DirectoryBackend, DirectoryConfig};

pub mod supabase;

pub use supabase::{SupabaseAccountDirectory, SupabaseConfig};

#[cfg(test)]
mod tests;

/// Create the account directory selected by configuration
pub fn create_account_directory(
    config: &DirectoryConfig,
) -> Result<Arc<dyn AccountDirectory>, ConfigurationError> {
    let directory: Arc<dyn AccountDirectory> = match config.backend {
        DirectoryBackend::Memory => {
            tracing::warn!("Using in-memory account directory; accounts are lost on restart");
            Arc::new(InMemoryAccountDirectory::new())
        }
        DirectoryBackend::Supabase => {
            let supabase_config = SupabaseConfig::from_settings(config)?;
            let directory = SupabaseAccountDirectory::new(supabase_config).map_err(|e| {
                ConfigurationError::InvalidSetting {
                    name: "SUPABASE_REQUEST_TIMEOUT_SECS".to_string(),
                    reason: e.to_string(),
                }
            })?;
            Arc::new(directory)
        }
    };

    if config.cache_ttl_seconds == 0 {
        return Ok(directory);
    }

    tracing::info!(
        ttl_secs = config.cache_ttl_seconds,
        "Account lookup cache enabled"
    );
    Ok(Arc::new(CachedAccountDirectory::new(
        directory,
        Duration::from_secs(config.cache_ttl_seconds),
    )))
}
