//! Account directory configuration

use serde::{Deserialize, Serialize};

use super::{read, read_parsed, ConfigError, EnvLookup};

/// Where account records live
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DirectoryBackend {
    /// Supabase (PostgREST) users table
    Supabase,
    /// Process-local map, for development and tests
    Memory,
}

impl std::str::FromStr for DirectoryBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "supabase" => Ok(DirectoryBackend::Supabase),
            "memory" | "in-memory" => Ok(DirectoryBackend::Memory),
            other => Err(format!("unknown account directory '{}'", other)),
        }
    }
}

/// Account directory configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DirectoryConfig {
    /// Selected backend
    pub backend: DirectoryBackend,
    /// Supabase project URL, e.g. `https://project.supabase.co`
    pub supabase_url: Option<String>,
    /// Service role key (bypasses row level security)
    pub service_role_key: Option<String>,
    /// Table holding account rows
    pub users_table: String,
    /// Seconds a positive account lookup may be reused by the session gate (0 = never)
    ///
    /// While an entry is cached, a deactivated or deleted account keeps passing
    /// the gate for up to this many seconds. Leave at 0 where deactivation must
    /// take effect on the next request.
    pub cache_ttl_seconds: u64,
    /// Timeout for directory requests in seconds
    pub request_timeout_secs: u64,
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self {
            backend: DirectoryBackend::Memory,
            supabase_url: None,
            service_role_key: None,
            users_table: String::from("users"),
            cache_ttl_seconds: 0,
            request_timeout_secs: 10,
        }
    }
}

impl DirectoryConfig {
    pub(crate) fn from_lookup(lookup: EnvLookup<'_>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let backend = match read(lookup, "ACCOUNT_DIRECTORY") {
            Some(raw) => raw.parse().map_err(|reason| ConfigError::Invalid {
                name: "ACCOUNT_DIRECTORY".to_string(),
                reason,
            })?,
            None => defaults.backend,
        };

        let supabase_url = read(lookup, "SUPABASE_URL");
        if let Some(url) = &supabase_url {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(ConfigError::Invalid {
                    name: "SUPABASE_URL".to_string(),
                    reason: "must start with http:// or https://".to_string(),
                });
            }
        }

        Ok(Self {
            backend,
            supabase_url,
            service_role_key: read(lookup, "SUPABASE_SERVICE_ROLE_KEY"),
            users_table: read(lookup, "SUPABASE_USERS_TABLE").unwrap_or(defaults.users_table),
            cache_ttl_seconds: read_parsed(
                lookup,
                "ACCOUNT_CACHE_TTL_SECONDS",
                defaults.cache_ttl_seconds,
            )?,
            request_timeout_secs: read_parsed(
                lookup,
                "SUPABASE_REQUEST_TIMEOUT_SECS",
                defaults.request_timeout_secs,
            )?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_support::lookup_from;

    #[test]
    fn test_supabase_url_scheme_checked() {
        let lookup = lookup_from(&[("SUPABASE_URL", "project.supabase.co")]);
        assert!(DirectoryConfig::from_lookup(&lookup).is_err());

        let lookup = lookup_from(&[
            ("ACCOUNT_DIRECTORY", "supabase"),
            ("SUPABASE_URL", "https://project.supabase.co"),
        ]);
        let config = DirectoryConfig::from_lookup(&lookup).unwrap();
        assert_eq!(config.backend, DirectoryBackend::Supabase);
        assert_eq!(config.users_table, "users");
    }
}
