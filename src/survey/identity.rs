use crate::utils::error::AppError;
use crate::utils::token::TokenVerifier;

/// Namespace for identities derived from verified provider tokens, so they
/// can never collide with client-supplied voter ids.
pub const PROVIDER_PREFIX: &str = "google";

/// Turns a raw submission's identification into one canonical voter
/// identity. A provider token, when supplied, always takes precedence over
/// the client-asserted id.
pub fn resolve(
    raw_voter_id: Option<&str>,
    id_token: Option<&str>,
    verifier: &dyn TokenVerifier,
) -> Result<String, AppError> {
    if let Some(token) = id_token.map(str::trim).filter(|t| !t.is_empty()) {
        let subject = verifier
            .verify(token)
            .map_err(|e| AppError::InvalidCredential(e.to_string()))?;
        return Ok(format!("{PROVIDER_PREFIX}-{subject}"));
    }

    match raw_voter_id.map(str::trim) {
        Some(id) if !id.is_empty() => Ok(id.to_string()),
        _ => Err(AppError::MissingIdentity),
    }
}
