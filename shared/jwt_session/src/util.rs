use crate::{dto::Claims, error::InvalidTokenError};
use jsonwebtoken::{DecodingKey, Validation};

///
/// Reads claims of the token without verifying its signature.
///
/// Client side never owns the signing key, so the result is only
/// a hint (for example to refresh the token before it gets rejected).
/// Backend stays the only authority on the token validity.
///
/// ### Errors
/// - [InvalidTokenError] when token is malformed or claims are missing
///
pub fn decode_claims(token: &str) -> Result<Claims, InvalidTokenError> {
    let mut validation = Validation::default();
    validation.insecure_disable_signature_validation();
    validation.validate_exp = false;
    validation.validate_aud = false;
    validation.required_spec_claims.clear();

    let key = DecodingKey::from_secret(&[]);
    let token_data = jsonwebtoken::decode::<Claims>(token, &key, &validation)?;

    Ok(token_data.claims)
}
