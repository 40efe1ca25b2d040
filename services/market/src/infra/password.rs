use anyhow::{Context as _, anyhow};
use argon2::Argon2;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use rand::RngExt;

use crate::domain::repository::PasswordPort;
use crate::error::MarketServiceError;

/// Argon2id with default parameters, stored as a PHC string.
///
/// Hashing is CPU-bound, so it runs on the blocking pool.
#[derive(Clone, Copy, Default)]
pub struct Argon2Passwords;

fn hash_blocking(password: &str) -> anyhow::Result<String> {
    let salt_bytes: [u8; 16] = rand::rng().random();
    let salt = SaltString::encode_b64(&salt_bytes).map_err(|e| anyhow!("encode salt: {e}"))?;
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| anyhow!("hash password: {e}"))?;
    Ok(hash.to_string())
}

fn verify_blocking(password: &str, hash: &str) -> anyhow::Result<bool> {
    let parsed = PasswordHash::new(hash).map_err(|e| anyhow!("parse password hash: {e}"))?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}

impl PasswordPort for Argon2Passwords {
    async fn hash(&self, password: &str) -> Result<String, MarketServiceError> {
        let password = password.to_owned();
        let hash = tokio::task::spawn_blocking(move || hash_blocking(&password))
            .await
            .context("password hashing task")??;
        Ok(hash)
    }

    async fn verify(&self, password: &str, hash: &str) -> Result<bool, MarketServiceError> {
        let password = password.to_owned();
        let hash = hash.to_owned();
        let ok = tokio::task::spawn_blocking(move || verify_blocking(&password, &hash))
            .await
            .context("password verification task")??;
        Ok(ok)
    }
}
