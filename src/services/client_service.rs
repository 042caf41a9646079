use sea_orm::ActiveValue::NotSet;
use sea_orm::{ActiveModelTrait, EntityTrait, QueryOrder, Set};

use crate::{
    dto::clients::{CreateClientRequest, UpdateClientRequest},
    entity::clients::{ActiveModel, Column, Entity as Clients},
    error::AppResult,
    models::Client,
    state::AppState,
    validation,
};

pub async fn list_clients(state: &AppState) -> AppResult<Vec<Client>> {
    let items = Clients::find()
        .order_by_desc(Column::CreatedAt)
        .order_by_desc(Column::Id)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(Client::from)
        .collect();
    Ok(items)
}

pub async fn get_client(state: &AppState, id: i32) -> AppResult<Option<Client>> {
    let client = Clients::find_by_id(id).one(&state.orm).await?;
    Ok(client.map(Client::from))
}

pub async fn create_client(state: &AppState, payload: CreateClientRequest) -> AppResult<Client> {
    validation::require_text("name", &payload.name)?;
    validation::optional_email("email", payload.email.as_deref())?;

    let active = ActiveModel {
        id: NotSet,
        name: Set(payload.name),
        cpf_cnpj: Set(payload.cpf_cnpj),
        email: Set(payload.email),
        phone: Set(payload.phone),
        address: Set(payload.address),
        city: Set(payload.city),
        state: Set(payload.state),
        zip_code: Set(payload.zip_code),
        created_at: NotSet,
    };
    let client = active.insert(&state.orm).await?;
    tracing::info!(client_id = client.id, "client created");

    Ok(client.into())
}

pub async fn update_client(
    state: &AppState,
    id: i32,
    payload: UpdateClientRequest,
) -> AppResult<Option<Client>> {
    let existing = match Clients::find_by_id(id).one(&state.orm).await? {
        Some(c) => c,
        None => return Ok(None),
    };

    let mut active: ActiveModel = existing.clone().into();
    if let Some(name) = payload.name {
        validation::require_text("name", &name)?;
        active.name = Set(name);
    }
    if let Some(cpf_cnpj) = payload.cpf_cnpj {
        active.cpf_cnpj = Set(Some(cpf_cnpj));
    }
    if let Some(email) = payload.email {
        validation::optional_email("email", Some(&email))?;
        active.email = Set(Some(email));
    }
    if let Some(phone) = payload.phone {
        active.phone = Set(Some(phone));
    }
    if let Some(address) = payload.address {
        active.address = Set(Some(address));
    }
    if let Some(city) = payload.city {
        active.city = Set(Some(city));
    }
    if let Some(st) = payload.state {
        active.state = Set(Some(st));
    }
    if let Some(zip_code) = payload.zip_code {
        active.zip_code = Set(Some(zip_code));
    }

    if !active.is_changed() {
        return Ok(Some(existing.into()));
    }
    let client = active.update(&state.orm).await?;
    tracing::info!(client_id = client.id, "client updated");

    Ok(Some(client.into()))
}

/// Deletes without checking that the row existed.
pub async fn delete_client(state: &AppState, id: i32) -> AppResult<()> {
    let result = Clients::delete_by_id(id).exec(&state.orm).await?;
    tracing::info!(client_id = id, rows = result.rows_affected, "client deleted");
    Ok(())
}
