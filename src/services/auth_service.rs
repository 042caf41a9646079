use argon2::{
    Argon2, PasswordHasher,
    password_hash::{PasswordHash, PasswordVerifier, SaltString},
};
use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use password_hash::rand_core::OsRng;

use crate::{
    dto::auth::{Claims, LoginRequest, LoginResponse},
    entity::users,
    error::{AppError, AppResult},
    services::user_service,
    state::AppState,
};

const TOKEN_TTL_HOURS: i64 = 24;

pub fn hash_password(password: &str) -> AppResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| AppError::Internal(anyhow::anyhow!(e.to_string())))?
        .to_string();
    Ok(hash)
}

pub fn verify_password(password: &str, password_hash: &str) -> AppResult<bool> {
    let parsed_hash = PasswordHash::new(password_hash)
        .map_err(|_| AppError::Internal(anyhow::anyhow!("Invalid password hash")))?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok())
}

pub fn issue_token(user: &users::Model, secret: &str) -> AppResult<String> {
    let expiration = Utc::now()
        .checked_add_signed(Duration::hours(TOKEN_TTL_HOURS))
        .ok_or_else(|| AppError::Internal(anyhow::anyhow!("Failed to set expiration")))?;

    let claims = Claims {
        sub: user.id.to_string(),
        role: user.role,
        exp: expiration.timestamp() as usize,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| AppError::Internal(anyhow::anyhow!(e.to_string())))
}

pub fn decode_token(token: &str, secret: &str) -> AppResult<Claims> {
    let decoded = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map_err(|_| AppError::Unauthorized("Invalid or expired token".into()))?;
    Ok(decoded.claims)
}

pub async fn login(state: &AppState, payload: LoginRequest) -> AppResult<LoginResponse> {
    let LoginRequest { email, password } = payload;
    let invalid = || AppError::Unauthorized("Invalid email or password".into());

    let user = user_service::find_model_by_email(state, email.trim())
        .await?
        .ok_or_else(invalid)?;
    if !verify_password(&password, &user.password_hash)? {
        tracing::warn!(user_id = user.id, "login rejected");
        return Err(invalid());
    }

    let token = issue_token(&user, &state.config.jwt_secret)?;
    tracing::info!(user_id = user.id, role = user.role.as_str(), "user logged in");

    Ok(LoginResponse {
        token,
        user: user.into(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::users::Role;

    fn user(role: Role) -> users::Model {
        users::Model {
            id: 7,
            name: "Vendedor".into(),
            email: "vendas@emunah.com".into(),
            password_hash: String::new(),
            role,
            phone: None,
            created_at: Utc::now().fixed_offset(),
        }
    }

    #[test]
    fn password_hash_verifies_only_the_original() {
        let hash = hash_password("s3nha-forte").unwrap();
        assert_ne!(hash, "s3nha-forte");
        assert!(verify_password("s3nha-forte", &hash).unwrap());
        assert!(!verify_password("outra", &hash).unwrap());
    }

    #[test]
    fn token_carries_subject_and_role() {
        let token = issue_token(&user(Role::Seller), "test-secret").unwrap();
        let claims = decode_token(&token, "test-secret").unwrap();
        assert_eq!(claims.sub, "7");
        assert_eq!(claims.role, Role::Seller);
    }

    #[test]
    fn token_with_wrong_secret_is_unauthorized() {
        let token = issue_token(&user(Role::Admin), "test-secret").unwrap();
        assert!(matches!(
            decode_token(&token, "other-secret"),
            Err(AppError::Unauthorized(_))
        ));
    }
}
