use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::usermodel::UserRole;

/// Claims minted by the external identity provider: the subject UUID plus
/// the caller's role. The core only verifies and reads them.
#[derive(Debug, Serialize, Deserialize)]
pub struct TokenClaims {
    pub sub: String,
    pub role: UserRole,
    pub iat: usize,
    pub exp: usize,
}

pub fn create_token(
    user_id: &Uuid,
    role: UserRole,
    secret: &[u8],
    expires_in_seconds: i64,
) -> Result<String, jsonwebtoken::errors::Error> {
    let now = Utc::now();
    let claims = TokenClaims {
        sub: user_id.to_string(),
        role,
        iat: now.timestamp() as usize,
        exp: (now + Duration::seconds(expires_in_seconds)).timestamp() as usize,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret),
    )
}

pub fn decode_token<T: Into<String>>(
    token: T,
    secret: &[u8],
) -> Result<TokenClaims, jsonwebtoken::errors::Error> {
    let decoded = decode::<TokenClaims>(
        &token.into(),
        &DecodingKey::from_secret(secret),
        &Validation::new(jsonwebtoken::Algorithm::HS256),
    )?;
    Ok(decoded.claims)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_round_trip_preserves_subject_and_role() {
        let user_id = Uuid::new_v4();
        let secret = b"test-secret";
        let token = create_token(&user_id, UserRole::Provider, secret, 60).unwrap();

        let claims = decode_token(token, secret).unwrap();
        assert_eq!(claims.sub, user_id.to_string());
        assert_eq!(claims.role, UserRole::Provider);
    }

    #[test]
    fn decode_fails_with_wrong_secret() {
        let user_id = Uuid::new_v4();
        let token = create_token(&user_id, UserRole::Requester, b"secret-a", 60).unwrap();
        assert!(decode_token(token, b"secret-b").is_err());
    }

    #[test]
    fn decode_fails_when_expired() {
        let user_id = Uuid::new_v4();
        // Default validation allows 60s leeway, so expire well past it.
        let token = create_token(&user_id, UserRole::Requester, b"secret", -600).unwrap();
        assert!(decode_token(token, b"secret").is_err());
    }
}
