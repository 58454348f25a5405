//! Demo authenticator with no backend.
//!
//! Mirrors the demo rules of the original client: any email containing `@`
//! together with a password longer than five characters is accepted, and the
//! display name is derived from the email's local part. Tokens are
//! deterministic so restarted demos keep working against recorded fixtures.

use async_trait::async_trait;
use tabulex_model::user::{AuthToken, User};
use tracing::debug;

use crate::error::{AuthError, AuthResult};
use crate::session::{Authenticator, Session, SessionStore};

#[derive(Debug, Clone)]
pub struct SimulatedAuthenticator {
    session: SessionStore,
}

impl SimulatedAuthenticator {
    pub fn new(session: SessionStore) -> Self {
        Self { session }
    }

    fn credentials_acceptable(email: &str, password: &str) -> bool {
        email.contains('@') && password.len() > 5
    }

    fn user_from_email(email: &str, name: Option<&str>) -> User {
        let derived = email.split('@').next().unwrap_or(email);
        User {
            id: 1,
            name: name.unwrap_or(derived).to_string(),
            email: email.to_string(),
        }
    }

    fn token_for(email: &str) -> AuthToken {
        let local = email.split('@').next().unwrap_or(email);
        AuthToken::new(format!("demo-token-{local}"))
            .expect("demo token is never empty")
    }
}

#[async_trait]
impl Authenticator for SimulatedAuthenticator {
    async fn login(&self, email: &str, password: &str) -> AuthResult<(User, AuthToken)> {
        if !Self::credentials_acceptable(email, password) {
            return Err(AuthError::InvalidCredentials);
        }

        let user = Self::user_from_email(email, None);
        let token = Self::token_for(email);
        self.session.establish(user.clone(), token.clone());
        debug!(email, "simulated login accepted");
        Ok((user, token))
    }

    async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> AuthResult<(User, AuthToken)> {
        if !Self::credentials_acceptable(email, password) {
            return Err(AuthError::InvalidRegistration);
        }

        let user = Self::user_from_email(email, Some(name));
        let token = Self::token_for(email);
        self.session.establish(user.clone(), token.clone());
        debug!(email, "simulated registration accepted");
        Ok((user, token))
    }

    async fn logout(&self) -> AuthResult<()> {
        self.session.invalidate();
        Ok(())
    }
}
