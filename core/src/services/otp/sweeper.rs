//! Periodic removal of expired codes
//!
//! Expiry is enforced on every access; the sweeper only bounds memory held by
//! codes nobody comes back for.

use chrono::Utc;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use super::store::CredentialStore;

/// Background sweeper for the credential store
pub struct OtpSweeper {
    store: Arc<CredentialStore>,
    interval: Duration,
}

impl OtpSweeper {
    /// A zero interval disables the background task
    pub fn new(store: Arc<CredentialStore>, interval: Duration) -> Self {
        Self { store, interval }
    }

    /// Run a single sweep, returning how many records were removed
    pub fn run_once(&self) -> usize {
        let removed = self.store.purge_expired(Utc::now());
        if removed > 0 {
            debug!(removed, event = "otp_sweep", "Swept expired verification codes");
        }
        removed
    }

    /// Start the sweeper as a background task
    ///
    /// Returns `None` when sweeping is disabled.
    pub fn start_background_task(self: Arc<Self>) -> Option<JoinHandle<()>> {
        if self.interval.is_zero() {
            warn!("OTP sweeper is disabled");
            return None;
        }

        Some(tokio::spawn(async move {
            info!(
                interval_secs = self.interval.as_secs(),
                "OTP sweeper started"
            );

            let mut interval_timer = tokio::time::interval(self.interval);
            loop {
                interval_timer.tick().await;
                self.run_once();
            }
        }))
    }
}
