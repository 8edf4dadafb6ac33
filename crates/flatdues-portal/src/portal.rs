use std::time::Duration;

use flatdues_common::models::auth::{Principal, RegisterRequest};
use flatdues_common::models::bill::AdminStats;

use crate::admin::{BillDirectory, ResidentDirectory};
use crate::client::PortalClient;
use crate::config::PortalConfig;
use crate::error::PortalError;
use crate::resident::DuesBoard;
use crate::routes::{self, Navigation};
use crate::session::SessionStore;

/// The portal context: one persisted session plus the API client bound to
/// the configured backend.
///
/// This object owns the session lifecycle - populated at login/register,
/// torn down at logout - and hands out the per-screen views. There is no
/// global session state; everything flows through an explicit `Portal`.
pub struct Portal {
    client: PortalClient,
    session: SessionStore,
}

impl Portal {
    pub fn new(config: &PortalConfig) -> Result<Self, PortalError> {
        let client = PortalClient::new(
            &config.api_url,
            Duration::from_secs(config.request_timeout_secs),
        )?;
        Ok(Self {
            client,
            session: SessionStore::open(&config.session_file),
        })
    }

    /// The authenticated principal, if a session is live.
    pub fn principal(&self) -> Option<&Principal> {
        self.session.principal()
    }

    /// Route-guard decision for `path` against the current session.
    pub fn navigate(&self, path: &str) -> Navigation {
        routes::navigate(self.principal(), path)
    }

    /// Exchange credentials for a principal and persist it.
    #[tracing::instrument(skip(self, password))]
    pub async fn login(&mut self, email: &str, password: &str) -> Result<Principal, PortalError> {
        let principal = self.client.login(email, password).await?;
        self.session
            .set(principal.clone())
            .map_err(|e| PortalError::Storage(format!("{:#}", e)))?;
        tracing::info!("Signed in as {} ({:?})", principal.name, principal.role);
        Ok(principal)
    }

    /// Create an account and sign straight into it.
    #[tracing::instrument(skip(self, request))]
    pub async fn register(&mut self, request: RegisterRequest) -> Result<Principal, PortalError> {
        let principal = self.client.register(&request).await?;
        self.session
            .set(principal.clone())
            .map_err(|e| PortalError::Storage(format!("{:#}", e)))?;
        tracing::info!("Registered and signed in as {}", principal.name);
        Ok(principal)
    }

    /// Drop the session. The persisted copy is removed so a restart comes
    /// back signed out; a failed removal is logged, not surfaced, because
    /// the in-memory session is already gone.
    pub fn logout(&mut self) {
        if let Err(e) = self.session.clear() {
            tracing::warn!("Failed to remove session file: {:#}", e);
        }
        tracing::info!("Signed out");
    }

    /// Admin screen: all bills plus the resident roster.
    pub fn bill_directory(&self) -> Result<BillDirectory, PortalError> {
        Ok(BillDirectory::new(self.client.clone(), self.token()?.to_string()))
    }

    /// Admin screen: the resident roster.
    pub fn resident_directory(&self) -> Result<ResidentDirectory, PortalError> {
        Ok(ResidentDirectory::new(
            self.client.clone(),
            self.token()?.to_string(),
        ))
    }

    /// Resident screen: the caller's own bills.
    pub fn dues_board(&self) -> Result<DuesBoard, PortalError> {
        Ok(DuesBoard::new(self.client.clone(), self.token()?.to_string()))
    }

    /// Aggregates for the admin overview.
    pub async fn admin_stats(&self) -> Result<AdminStats, PortalError> {
        self.client.admin_stats(self.token()?).await
    }

    fn token(&self) -> Result<&str, PortalError> {
        self.session
            .principal()
            .filter(|p| p.is_authenticated())
            .map(|p| p.token.as_str())
            .ok_or(PortalError::NoSession)
    }
}
