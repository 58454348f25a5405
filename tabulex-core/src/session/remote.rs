//! Authenticator backed by the remote auth endpoints.

use async_trait::async_trait;
use tabulex_model::user::{AuthToken, User};
use tracing::warn;

use crate::api_client::ApiClient;
use crate::api_types::{AuthPayload, LoginRequest, RegisterRequest};
use crate::error::AuthResult;
use crate::session::{Authenticator, Session, SessionStore};

#[derive(Debug, Clone)]
pub struct RemoteAuthenticator {
    client: ApiClient,
    session: SessionStore,
}

impl RemoteAuthenticator {
    pub fn new(client: ApiClient, session: SessionStore) -> Self {
        Self { client, session }
    }

    async fn install(&self, payload: AuthPayload) -> (User, AuthToken) {
        self.session
            .establish(payload.user.clone(), payload.token.clone());
        self.client.set_token(Some(payload.token.clone())).await;
        (payload.user, payload.token)
    }
}

#[async_trait]
impl Authenticator for RemoteAuthenticator {
    async fn login(&self, email: &str, password: &str) -> AuthResult<(User, AuthToken)> {
        let request = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let payload: AuthPayload = self.client.post("auth/login", &request).await?;
        Ok(self.install(payload).await)
    }

    async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> AuthResult<(User, AuthToken)> {
        let request = RegisterRequest {
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        };
        let payload: AuthPayload = self.client.post("auth/register", &request).await?;
        Ok(self.install(payload).await)
    }

    /// Logout always succeeds locally; a failed server round-trip only loses
    /// the server-side revocation, not the local sign-out.
    async fn logout(&self) -> AuthResult<()> {
        if let Err(err) = self.client.post_empty("auth/logout", &()).await {
            warn!(error = %err, "server logout failed, clearing local session anyway");
        }
        self.session.invalidate();
        self.client.set_token(None).await;
        Ok(())
    }
}
