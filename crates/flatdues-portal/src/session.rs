use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use flatdues_common::models::auth::Principal;

/// Persistent store for the authenticated principal.
///
/// One file holding one serialized principal, mirroring the single client
/// storage key of the original portal. Every mutation writes through to disk
/// immediately so a process restart reconstructs the same session; the store
/// is never shared between clients.
pub struct SessionStore {
    path: PathBuf,
    principal: Option<Principal>,
}

impl SessionStore {
    /// Open the store, loading a previously persisted principal if one
    /// exists. Unreadable contents and token-less principals are discarded
    /// rather than surfaced as errors: a broken session means "signed out".
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let principal = match std::fs::read_to_string(&path) {
            Ok(raw) => match serde_json::from_str::<Principal>(&raw) {
                Ok(p) if p.is_authenticated() => Some(p),
                Ok(_) => {
                    tracing::warn!("Discarding persisted session without a token");
                    None
                }
                Err(e) => {
                    tracing::warn!("Discarding unreadable session file: {}", e);
                    None
                }
            },
            Err(_) => None,
        };
        Self { path, principal }
    }

    pub fn principal(&self) -> Option<&Principal> {
        self.principal.as_ref()
    }

    /// Store and persist a principal. Refuses a principal without a token:
    /// it must never be treated as authenticated, so it is never stored.
    pub fn set(&mut self, principal: Principal) -> Result<()> {
        if !principal.is_authenticated() {
            bail!("Refusing to store a principal without a token");
        }
        if let Some(dir) = self.path.parent() {
            if !dir.as_os_str().is_empty() {
                std::fs::create_dir_all(dir)
                    .with_context(|| format!("Failed to create session dir: {}", dir.display()))?;
            }
        }
        let raw =
            serde_json::to_string_pretty(&principal).context("Failed to serialize principal")?;
        std::fs::write(&self.path, raw)
            .with_context(|| format!("Failed to write session file: {}", self.path.display()))?;
        self.principal = Some(principal);
        Ok(())
    }

    /// Drop the principal and remove the persisted copy.
    pub fn clear(&mut self) -> Result<()> {
        self.principal = None;
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e).with_context(|| {
                format!("Failed to remove session file: {}", self.path.display())
            }),
        }
    }
}
