use std::collections::HashMap;
use std::env;

use jsonwebtoken::{decode, DecodingKey, Validation};
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TokenError {
    #[error("token verifier misconfigured: {0}")]
    Config(String),
    #[error("token rejected: {0}")]
    Rejected(String),
}

/// Identity-provider token check. A token either verifies to a stable
/// subject or is rejected; callers never retry.
pub trait TokenVerifier: Send + Sync {
    fn verify(&self, token: &str) -> Result<String, TokenError>;
}

#[derive(Debug, Deserialize)]
struct ProviderClaims {
    sub: String,
    #[allow(dead_code)]
    exp: usize,
}

/// Verifies provider-issued identity tokens with an audience-bound
/// signature check.
pub struct JwtTokenVerifier {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl JwtTokenVerifier {
    pub fn new(secret: &str, audience: &str) -> Self {
        let mut validation = Validation::default();
        validation.set_audience(&[audience]);

        Self {
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
        }
    }

    pub fn from_env() -> Result<Self, TokenError> {
        let secret = env::var("ID_TOKEN_SECRET")
            .map_err(|_| TokenError::Config("ID_TOKEN_SECRET must be set".to_string()))?;
        let audience = env::var("ID_TOKEN_AUDIENCE")
            .map_err(|_| TokenError::Config("ID_TOKEN_AUDIENCE must be set".to_string()))?;

        Ok(Self::new(&secret, &audience))
    }
}

impl TokenVerifier for JwtTokenVerifier {
    fn verify(&self, token: &str) -> Result<String, TokenError> {
        decode::<ProviderClaims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims.sub)
            .map_err(|e| TokenError::Rejected(e.to_string()))
    }
}

/// Verifier backed by a fixed token → subject table, for tests and local
/// development without a real identity provider.
#[derive(Debug, Default)]
pub struct StaticTokenVerifier {
    subjects: HashMap<String, String>,
}

impl StaticTokenVerifier {
    pub fn with_tokens(tokens: Vec<(String, String)>) -> Self {
        Self {
            subjects: tokens.into_iter().collect(),
        }
    }
}

impl TokenVerifier for StaticTokenVerifier {
    fn verify(&self, token: &str) -> Result<String, TokenError> {
        self.subjects
            .get(token)
            .cloned()
            .ok_or_else(|| TokenError::Rejected("unknown token".to_string()))
    }
}
