//! JWT issue and validation.

use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::db::UserRow;
use crate::error::{AppError, AppResult};

/// Claims embedded in an issued token: a snapshot of the user at
/// issuance time. There is no `exp` claim; a token stays valid until
/// the signing secret changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub role: String,
}

#[derive(Clone)]
pub struct JwtSecret {
    secret: String,
}

impl JwtSecret {
    pub fn new(secret: String) -> Self {
        Self { secret }
    }

    pub fn issue(&self, user: &UserRow) -> AppResult<String> {
        let claims = Claims {
            id: user.id,
            name: user.name.clone(),
            email: user.email.clone(),
            role: user.role.clone(),
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )
        .map_err(|e| AppError::Jwt(e.to_string()))?;
        Ok(token)
    }

    pub fn validate(&self, token: &str) -> AppResult<Claims> {
        // Tokens carry no exp claim, so the validator must not require one.
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;
        validation.required_spec_claims.clear();
        let data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.secret.as_bytes()),
            &validation,
        )
        .map_err(|e| AppError::Jwt(e.to_string()))?;
        Ok(data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys() -> JwtSecret {
        JwtSecret::new("test-jwt-secret-min-32-chars!!".to_string())
    }

    fn sample_user() -> UserRow {
        UserRow {
            id: 1,
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            password_hash: "irrelevant".to_string(),
            role: "admin".to_string(),
        }
    }

    #[test]
    fn issue_and_validate_roundtrip() {
        let token = keys().issue(&sample_user()).unwrap();
        let claims = keys().validate(&token).unwrap();
        assert_eq!(
            claims,
            Claims {
                id: 1,
                name: "Ada".to_string(),
                email: "ada@example.com".to_string(),
                role: "admin".to_string(),
            }
        );
    }

    #[test]
    fn tampered_signature_is_rejected() {
        let token = keys().issue(&sample_user()).unwrap();
        let sig_start = token.rfind('.').unwrap() + 1;
        let sig = &token[sig_start..];
        // Flip the leading signature character so the decoded bytes differ.
        let flipped = if sig.as_bytes()[0] == b'A' { 'B' } else { 'A' };
        let mut tampered = token[..sig_start].to_string();
        tampered.push(flipped);
        tampered.push_str(&sig[1..]);
        assert!(keys().validate(&tampered).is_err());
    }

    #[test]
    fn wrong_secret_is_rejected() {
        let token = keys().issue(&sample_user()).unwrap();
        let other = JwtSecret::new("another-secret-entirely-32-chars".to_string());
        assert!(other.validate(&token).is_err());
    }

    #[test]
    fn garbage_token_is_rejected() {
        assert!(keys().validate("not-a-token").is_err());
        assert!(keys().validate("").is_err());
    }
}
