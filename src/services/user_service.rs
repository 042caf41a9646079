use sea_orm::ActiveValue::NotSet;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

use crate::{
    dto::users::{CreateUserRequest, UpdateUserRequest},
    entity::users::{self, ActiveModel, Column, Entity as Users, Role},
    error::{AppError, AppResult},
    models::User,
    services::auth_service,
    state::AppState,
    validation,
};

fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

fn validate_password(password: &str) -> AppResult<()> {
    if password.is_empty() {
        return Err(AppError::BadRequest("password must not be empty".into()));
    }
    Ok(())
}

/// Full row including the password hash, for login.
pub(crate) async fn find_model_by_email(
    state: &AppState,
    email: &str,
) -> AppResult<Option<users::Model>> {
    let user = Users::find()
        .filter(Column::Email.eq(normalize_email(email)))
        .one(&state.orm)
        .await?;
    Ok(user)
}

pub async fn list_users(state: &AppState) -> AppResult<Vec<User>> {
    let items = Users::find()
        .order_by_desc(Column::CreatedAt)
        .order_by_desc(Column::Id)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(User::from)
        .collect();
    Ok(items)
}

pub async fn get_user(state: &AppState, id: i32) -> AppResult<Option<User>> {
    let user = Users::find_by_id(id).one(&state.orm).await?;
    Ok(user.map(User::from))
}

pub async fn get_user_by_email(state: &AppState, email: &str) -> AppResult<Option<User>> {
    Ok(find_model_by_email(state, email).await?.map(User::from))
}

pub async fn create_user(state: &AppState, payload: CreateUserRequest) -> AppResult<User> {
    validation::require_text("name", &payload.name)?;
    validation::email("email", &payload.email)?;
    validate_password(&payload.password)?;
    let password_hash = auth_service::hash_password(&payload.password)?;

    let active = ActiveModel {
        id: NotSet,
        name: Set(payload.name),
        email: Set(normalize_email(&payload.email)),
        password_hash: Set(password_hash),
        role: Set(payload.role.unwrap_or(Role::Seller)),
        phone: Set(payload.phone),
        created_at: NotSet,
    };
    let user = active.insert(&state.orm).await?;
    tracing::info!(user_id = user.id, role = user.role.as_str(), "user created");

    Ok(user.into())
}

pub async fn update_user(
    state: &AppState,
    id: i32,
    payload: UpdateUserRequest,
) -> AppResult<Option<User>> {
    let existing = match Users::find_by_id(id).one(&state.orm).await? {
        Some(u) => u,
        None => return Ok(None),
    };

    let mut active: ActiveModel = existing.clone().into();
    if let Some(name) = payload.name {
        validation::require_text("name", &name)?;
        active.name = Set(name);
    }
    if let Some(email) = payload.email {
        validation::email("email", &email)?;
        active.email = Set(normalize_email(&email));
    }
    if let Some(password) = payload.password {
        validate_password(&password)?;
        active.password_hash = Set(auth_service::hash_password(&password)?);
    }
    if let Some(role) = payload.role {
        active.role = Set(role);
    }
    if let Some(phone) = payload.phone {
        active.phone = Set(Some(phone));
    }

    if !active.is_changed() {
        return Ok(Some(existing.into()));
    }
    let user = active.update(&state.orm).await?;
    tracing::info!(user_id = user.id, "user updated");

    Ok(Some(user.into()))
}

pub async fn delete_user(state: &AppState, id: i32) -> AppResult<()> {
    let result = Users::delete_by_id(id).exec(&state.orm).await?;
    tracing::info!(user_id = id, rows = result.rows_affected, "user deleted");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emails_are_compared_lowercase() {
        assert_eq!(normalize_email("  Admin@Emunah.COM "), "admin@emunah.com");
    }

    #[test]
    fn empty_password_is_rejected() {
        assert!(matches!(validate_password(""), Err(AppError::BadRequest(_))));
        assert!(validate_password("x").is_ok());
    }
}
