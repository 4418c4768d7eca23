//! Supabase Account Directory
//!
//! Reads and creates account rows through the PostgREST interface exposed at
//! `{SUPABASE_URL}/rest/v1/{table}`. Requests authenticate with the service
//! role key, sent both as `apikey` and as a bearer token.

use async_trait::async_trait;
use fe_core::domain::entities::account::Account;
use fe_core::errors::{ConfigurationError, DomainError};
use fe_core::repositories::AccountDirectory;
use fe_shared::phone::mask_phone_number;
use fe_shared::DirectoryConfig;
use serde::Serialize;
use tracing::{debug, error, info};

use crate::{http_client, InfrastructureError};

/// Connection settings for the Supabase directory
#[derive(Debug, Clone)]
pub struct SupabaseConfig {
    /// Project URL, without trailing slash
    pub url: String,
    /// Service role key
    pub service_role_key: String,
    /// Table holding account rows
    pub users_table: String,
    /// Timeout for requests in seconds
    pub request_timeout_secs: u64,
}

impl SupabaseConfig {
    pub fn from_settings(settings: &DirectoryConfig) -> Result<Self, ConfigurationError> {
        let url = settings
            .supabase_url
            .as_deref()
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .ok_or_else(|| ConfigurationError::MissingCredentials {
                name: "SUPABASE_URL".to_string(),
            })?;
        let service_role_key = settings
            .service_role_key
            .as_deref()
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .ok_or_else(|| ConfigurationError::MissingCredentials {
                name: "SUPABASE_SERVICE_ROLE_KEY".to_string(),
            })?;

        Ok(Self {
            url: url.trim_end_matches('/').to_string(),
            service_role_key: service_role_key.to_string(),
            users_table: settings.users_table.clone(),
            request_timeout_secs: settings.request_timeout_secs,
        })
    }

    /// REST endpoint of the users table
    pub fn table_url(&self) -> String {
        format!("{}/rest/v1/{}", self.url, self.users_table)
    }
}

/// Row written when a verified phone number logs in for the first time
#[derive(Debug, Serialize)]
struct NewAccountRow<'a> {
    id: &'a str,
    phone_number: &'a str,
    is_active: bool,
}

/// Account directory backed by a Supabase table
pub struct SupabaseAccountDirectory {
    client: reqwest::Client,
    config: SupabaseConfig,
}

impl SupabaseAccountDirectory {
    pub fn new(config: SupabaseConfig) -> Result<Self, InfrastructureError> {
        let client = http_client(config.request_timeout_secs)?;

        info!(
            url = %config.url,
            table = %config.users_table,
            "Supabase account directory initialized"
        );

        Ok(Self { client, config })
    }

    pub fn config(&self) -> &SupabaseConfig {
        &self.config
    }

    /// PostgREST filter for an exact column match
    pub fn eq_filter(column: &str, value: &str) -> [(String, String); 2] {
        [
            (column.to_string(), format!("eq.{}", value)),
            ("select".to_string(), "*".to_string()),
        ]
    }

    fn request(&self, method: reqwest::Method) -> reqwest::RequestBuilder {
        self.client
            .request(method, self.config.table_url())
            .header("apikey", &self.config.service_role_key)
            .bearer_auth(&self.config.service_role_key)
    }

    async fn read_rows(
        response: reqwest::Response,
    ) -> Result<Vec<Account>, InfrastructureError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(InfrastructureError::Status {
                status: status.as_u16(),
                body,
            });
        }

        response
            .json::<Vec<Account>>()
            .await
            .map_err(|e| InfrastructureError::Decode(e.to_string()))
    }

    async fn fetch(&self, column: &str, value: &str) -> Result<Vec<Account>, InfrastructureError> {
        let response = self
            .request(reqwest::Method::GET)
            .query(&Self::eq_filter(column, value))
            .send()
            .await?;
        Self::read_rows(response).await
    }

    async fn insert(&self, row: &NewAccountRow<'_>) -> Result<Vec<Account>, InfrastructureError> {
        let response = self
            .request(reqwest::Method::POST)
            .header("Prefer", "return=representation")
            .json(row)
            .send()
            .await?;
        Self::read_rows(response).await
    }

    async fn find_one(&self, column: &str, value: &str) -> Result<Option<Account>, DomainError> {
        match self.fetch(column, value).await {
            Ok(rows) => Ok(rows.into_iter().next()),
            Err(e) => {
                error!(column, error = %e, "Account directory lookup failed");
                Err(e.into_directory_error())
            }
        }
    }
}

#[async_trait]
impl AccountDirectory for SupabaseAccountDirectory {
    async fn find_by_id(&self, id: &str) -> Result<Option<Account>, DomainError> {
        debug!(account_id = %id, "Looking up account by id");
        self.find_one("id", id).await
    }

    async fn find_by_phone(&self, phone_number: &str) -> Result<Option<Account>, DomainError> {
        debug!(phone = %mask_phone_number(phone_number), "Looking up account by phone");
        self.find_one("phone_number", phone_number).await
    }

    async fn create(&self, phone_number: &str) -> Result<Account, DomainError> {
        let account = Account::new(phone_number);
        let row = NewAccountRow {
            id: &account.id,
            phone_number: &account.phone_number,
            is_active: account.is_active,
        };

        match self.insert(&row).await {
            Ok(rows) => {
                let created = rows.into_iter().next().unwrap_or(account);
                info!(
                    account_id = %created.id,
                    phone = %mask_phone_number(phone_number),
                    event = "account_created",
                    "Account created"
                );
                Ok(created)
            }
            Err(e) => {
                error!(
                    phone = %mask_phone_number(phone_number),
                    error = %e,
                    "Account creation failed"
                );
                Err(e.into_directory_error())
            }
        }
    }
}
