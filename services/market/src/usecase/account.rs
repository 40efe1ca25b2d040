use siidona_domain::access::Capability;
use siidona_domain::user::{MIN_PASSWORD_LEN, UserRole};
use siidona_session::token::SessionToken;

use crate::domain::repository::{PasswordPort, SessionStore, UserRepository};
use crate::domain::types::{NewUser, User};
use crate::error::MarketServiceError;
use crate::usecase::gate::AuthorizationGate;
use crate::usecase::required;

/// A user with a freshly issued session token.
#[derive(Debug)]
pub struct SignedIn {
    pub user: User,
    pub token: SessionToken,
}

async fn open_session<S: SessionStore>(
    sessions: &S,
    user: User,
) -> Result<SignedIn, MarketServiceError> {
    let token = SessionToken::generate();
    sessions.create(&token, user.id).await?;
    Ok(SignedIn { user, token })
}

// ── Register ─────────────────────────────────────────────────────────────────

pub struct RegisterInput {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Self-service signup. Always creates a plain `user` account and signs it in.
pub struct RegisterUseCase<U: UserRepository, S: SessionStore, P: PasswordPort> {
    pub users: U,
    pub sessions: S,
    pub passwords: P,
}

impl<U: UserRepository, S: SessionStore, P: PasswordPort> RegisterUseCase<U, S, P> {
    pub async fn execute(&self, input: RegisterInput) -> Result<SignedIn, MarketServiceError> {
        let name = required(&input.name, "name")?;
        let email = required(&input.email, "email")?;
        if input.password.is_empty() {
            return Err(MarketServiceError::MissingField("password"));
        }
        if input.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(MarketServiceError::PasswordTooShort);
        }
        if self.users.find_by_email(&email).await?.is_some() {
            return Err(MarketServiceError::EmailAlreadyExists);
        }

        let password_hash = self.passwords.hash(&input.password).await?;
        let user = self
            .users
            .create(&NewUser {
                name,
                email,
                password_hash,
                role: UserRole::User,
            })
            .await?;
        tracing::info!(user_id = %user.id, "user registered");
        open_session(&self.sessions, user).await
    }
}

// ── Login ────────────────────────────────────────────────────────────────────

pub struct LoginInput {
    pub email: String,
    pub password: String,
}

pub struct LoginUseCase<U: UserRepository, S: SessionStore, P: PasswordPort> {
    pub users: U,
    pub sessions: S,
    pub passwords: P,
}

impl<U: UserRepository, S: SessionStore, P: PasswordPort> LoginUseCase<U, S, P> {
    pub async fn execute(&self, input: LoginInput) -> Result<SignedIn, MarketServiceError> {
        let email = required(&input.email, "email")?;
        if input.password.is_empty() {
            return Err(MarketServiceError::MissingField("password"));
        }
        // Unknown email and wrong password are reported identically.
        let user = self
            .users
            .find_by_email(&email)
            .await?
            .ok_or(MarketServiceError::InvalidCredentials)?;
        if !self
            .passwords
            .verify(&input.password, &user.password_hash)
            .await?
        {
            return Err(MarketServiceError::InvalidCredentials);
        }
        tracing::info!(user_id = %user.id, "user signed in");
        open_session(&self.sessions, user).await
    }
}

// ── Logout ───────────────────────────────────────────────────────────────────

pub struct LogoutUseCase<S: SessionStore> {
    pub sessions: S,
}

impl<S: SessionStore> LogoutUseCase<S> {
    /// Forget the token. Signing out without a session is not an error.
    pub async fn execute(&self, token: Option<&SessionToken>) -> Result<(), MarketServiceError> {
        if let Some(token) = token {
            self.sessions.remove(token).await?;
        }
        Ok(())
    }
}

// ── CurrentUser ──────────────────────────────────────────────────────────────

pub struct CurrentUserUseCase<S: SessionStore, U: UserRepository> {
    pub gate: AuthorizationGate<S, U>,
}

impl<S: SessionStore, U: UserRepository> CurrentUserUseCase<S, U> {
    pub async fn execute(&self, token: Option<&SessionToken>) -> Result<User, MarketServiceError> {
        self.gate.authorize(token, Capability::Authenticated).await
    }
}
