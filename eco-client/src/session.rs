//! Session store and role gates
//!
//! Holds the authenticated principal for the process, persisted as a JSON
//! file so a restarted client resumes its session. Consumers read through
//! [`SessionStore::snapshot`] or observe changes via
//! [`SessionStore::subscribe`]; only login and logout ever write.

use std::fs;
use std::path::{Path, PathBuf};

use shared::models::{Principal, Role};
use tokio::sync::watch;

use crate::{ClientError, ClientResult};

const SESSION_FILE: &str = "principal.json";

/// Persisted session store for the current principal
#[derive(Debug)]
pub struct SessionStore {
    path: PathBuf,
    tx: watch::Sender<Option<Principal>>,
}

impl SessionStore {
    /// Open the session store in `dir`, restoring any persisted principal.
    ///
    /// A corrupt or missing session file restores to logged-out rather than
    /// failing.
    pub fn open(dir: impl AsRef<Path>) -> Self {
        let path = dir.as_ref().join(SESSION_FILE);
        let initial = Self::read_principal(&path);
        let (tx, _rx) = watch::channel(initial);
        Self { path, tx }
    }

    fn read_principal(path: &Path) -> Option<Principal> {
        let bytes = fs::read(path).ok()?;
        serde_json::from_slice(&bytes).ok()
    }

    /// Path of the persisted session file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Persist and publish a freshly authenticated principal.
    pub fn login(&self, principal: Principal) -> ClientResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let data = serde_json::to_vec_pretty(&principal)?;
        fs::write(&self.path, data)?;
        self.tx.send_replace(Some(principal));
        Ok(())
    }

    /// Clear the session. Idempotent; logging out twice is a no-op.
    pub fn logout(&self) -> ClientResult<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => {}
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {}
            Err(err) => return Err(err.into()),
        }
        self.tx.send_replace(None);
        Ok(())
    }

    /// The current principal, if logged in.
    pub fn snapshot(&self) -> Option<Principal> {
        self.tx.borrow().clone()
    }

    /// Observe principal changes (login/logout).
    pub fn subscribe(&self) -> watch::Receiver<Option<Principal>> {
        self.tx.subscribe()
    }

    /// Route guard: require a logged-in principal with the given role.
    ///
    /// Signals `Unauthorized` when nobody is logged in and `Forbidden` on a
    /// role mismatch. Never mutates the session.
    pub fn require_role(&self, role: Role) -> ClientResult<Principal> {
        match self.snapshot() {
            Some(principal) if principal.role == role => Ok(principal),
            Some(_) => Err(ClientError::Forbidden(format!("{role} role required"))),
            None => Err(ClientError::Unauthorized),
        }
    }

    /// Route guard: require a verified principal, independent of role.
    pub fn require_verified(&self) -> ClientResult<Principal> {
        let principal = self.snapshot().ok_or(ClientError::Unauthorized)?;
        if principal.is_verified() {
            Ok(principal)
        } else {
            Err(ClientError::Unverified)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn principal(role: Role, verified: bool) -> Principal {
        Principal {
            id: 1,
            role,
            name: Some("Asha".to_string()),
            email: "asha@example.com".to_string(),
            verified,
            pickup_address: None,
            profile_image_url: None,
        }
    }

    #[test]
    fn test_login_then_snapshot_then_logout() {
        let dir = TempDir::new().unwrap();
        let store = SessionStore::open(dir.path());
        assert!(store.snapshot().is_none());

        store.login(principal(Role::User, true)).unwrap();
        assert_eq!(store.snapshot().unwrap().email, "asha@example.com");

        store.logout().unwrap();
        assert!(store.snapshot().is_none());
    }

    #[test]
    fn test_logout_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let store = SessionStore::open(dir.path());

        store.logout().unwrap();
        store.login(principal(Role::User, true)).unwrap();
        store.logout().unwrap();
        store.logout().unwrap();
        assert!(store.snapshot().is_none());
    }

    #[test]
    fn test_session_survives_reopen() {
        let dir = TempDir::new().unwrap();
        {
            let store = SessionStore::open(dir.path());
            store.login(principal(Role::Admin, true)).unwrap();
        }
        let store = SessionStore::open(dir.path());
        let restored = store.snapshot().unwrap();
        assert_eq!(restored.role, Role::Admin);
        assert_eq!(restored.id, 1);
    }

    #[test]
    fn test_corrupt_session_file_restores_logged_out() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join(SESSION_FILE), b"not json").unwrap();
        let store = SessionStore::open(dir.path());
        assert!(store.snapshot().is_none());
    }

    #[test]
    fn test_require_role() {
        let dir = TempDir::new().unwrap();
        let store = SessionStore::open(dir.path());

        assert!(matches!(
            store.require_role(Role::Admin),
            Err(ClientError::Unauthorized)
        ));

        store.login(principal(Role::User, true)).unwrap();
        assert!(matches!(
            store.require_role(Role::Admin),
            Err(ClientError::Forbidden(_))
        ));
        assert!(store.require_role(Role::User).is_ok());

        // Gates only read; the principal must be untouched after denials.
        assert_eq!(store.snapshot().unwrap().role, Role::User);
    }

    #[test]
    fn test_require_verified_is_role_independent() {
        let dir = TempDir::new().unwrap();
        let store = SessionStore::open(dir.path());

        assert!(matches!(
            store.require_verified(),
            Err(ClientError::Unauthorized)
        ));

        store.login(principal(Role::User, false)).unwrap();
        assert!(matches!(
            store.require_verified(),
            Err(ClientError::Unverified)
        ));

        store.login(principal(Role::PickupPerson, true)).unwrap();
        assert!(store.require_verified().is_ok());
    }

    #[test]
    fn test_subscribe_observes_login_and_logout() {
        let dir = TempDir::new().unwrap();
        let store = SessionStore::open(dir.path());
        let rx = store.subscribe();
        assert!(rx.borrow().is_none());

        store.login(principal(Role::User, true)).unwrap();
        assert!(rx.borrow().is_some());

        store.logout().unwrap();
        assert!(rx.borrow().is_none());
    }
}
