//! Session state and the authentication capability.
//!
//! [`Session`] is the read side the table engine depends on: whether a user
//! is present and which token to attach. [`Authenticator`] is the write
//! side, with a simulated and a remote implementation picked at composition
//! time. Persistent credential storage stays outside this crate; callers
//! hand a previously persisted [`StoredSession`] back via
//! [`SessionStore::restore`].

pub mod remote;
pub mod simulated;

use std::fmt;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tabulex_model::user::{AuthToken, User};

use crate::error::AuthResult;

pub use remote::RemoteAuthenticator;
pub use simulated::SimulatedAuthenticator;

/// Read-only session capability consumed by record sources.
pub trait Session: Send + Sync + fmt::Debug {
    fn is_authenticated(&self) -> bool;

    fn current_user(&self) -> Option<User>;

    fn token(&self) -> Option<AuthToken>;

    /// Drop the session, e.g. after the server signalled token expiry.
    fn invalidate(&self);
}

/// Authentication operations offered to the presentation layer.
#[async_trait]
pub trait Authenticator: Send + Sync {
    async fn login(&self, email: &str, password: &str) -> AuthResult<(User, AuthToken)>;

    async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> AuthResult<(User, AuthToken)>;

    async fn logout(&self) -> AuthResult<()>;
}

/// Session snapshot as persisted by an external credential store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredSession {
    pub user: User,
    pub token: AuthToken,
}

#[derive(Debug, Clone)]
struct SessionState {
    user: User,
    token: AuthToken,
}

/// Shared, interior-mutable session holder.
///
/// Clones share one underlying state, so the table store, the API-backed
/// record source and the authenticator can all observe the same session.
#[derive(Debug, Clone, Default)]
pub struct SessionStore {
    inner: Arc<RwLock<Option<SessionState>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install a freshly authenticated identity.
    pub fn establish(&self, user: User, token: AuthToken) {
        *self.inner.write().expect("session lock poisoned") =
            Some(SessionState { user, token });
    }

    /// Bootstrap from a session persisted during an earlier run.
    pub fn restore(&self, stored: StoredSession) {
        self.establish(stored.user, stored.token);
    }

    /// Snapshot for handing to a credential store, if a session exists.
    pub fn to_stored(&self) -> Option<StoredSession> {
        self.inner
            .read()
            .expect("session lock poisoned")
            .as_ref()
            .map(|state| StoredSession {
                user: state.user.clone(),
                token: state.token.clone(),
            })
    }
}

impl Session for SessionStore {
    fn is_authenticated(&self) -> bool {
        self.inner.read().expect("session lock poisoned").is_some()
    }

    fn current_user(&self) -> Option<User> {
        self.inner
            .read()
            .expect("session lock poisoned")
            .as_ref()
            .map(|state| state.user.clone())
    }

    fn token(&self) -> Option<AuthToken> {
        self.inner
            .read()
            .expect("session lock poisoned")
            .as_ref()
            .map(|state| state.token.clone())
    }

    fn invalidate(&self) {
        *self.inner.write().expect("session lock poisoned") = None;
    }
}
