use sea_orm::ActiveValue::NotSet;
use sea_orm::{ActiveModelTrait, EntityTrait, QueryOrder, Set};

use crate::{
    dto::prints::{CreatePrintRequest, UpdatePrintRequest},
    entity::prints::{ActiveModel, Column, Entity as Prints, Technique},
    error::AppResult,
    models::Print,
    state::AppState,
    validation,
};

pub async fn list_prints(state: &AppState) -> AppResult<Vec<Print>> {
    let items = Prints::find()
        .order_by_desc(Column::CreatedAt)
        .order_by_desc(Column::Id)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(Print::from)
        .collect();
    Ok(items)
}

pub async fn get_print(state: &AppState, id: i32) -> AppResult<Option<Print>> {
    let print = Prints::find_by_id(id).one(&state.orm).await?;
    Ok(print.map(Print::from))
}

pub async fn create_print(state: &AppState, payload: CreatePrintRequest) -> AppResult<Print> {
    validation::require_text("name", &payload.name)?;
    validation::code_set("colors", &payload.colors, true)?;
    validation::code_set("positions", &payload.positions, true)?;

    let active = ActiveModel {
        id: NotSet,
        name: Set(payload.name),
        description: Set(payload.description),
        file_url: Set(payload.file_url),
        colors: Set(payload.colors.into()),
        positions: Set(payload.positions.into()),
        technique: Set(payload.technique.unwrap_or(Technique::Silk)),
        dimensions: Set(payload.dimensions),
        active: Set(payload.active.unwrap_or(true)),
        created_at: NotSet,
    };
    let print = active.insert(&state.orm).await?;
    tracing::info!(print_id = print.id, technique = ?print.technique, "print created");

    Ok(print.into())
}

pub async fn update_print(
    state: &AppState,
    id: i32,
    payload: UpdatePrintRequest,
) -> AppResult<Option<Print>> {
    let existing = match Prints::find_by_id(id).one(&state.orm).await? {
        Some(p) => p,
        None => return Ok(None),
    };

    let mut active: ActiveModel = existing.clone().into();
    if let Some(name) = payload.name {
        validation::require_text("name", &name)?;
        active.name = Set(name);
    }
    if let Some(description) = payload.description {
        active.description = Set(Some(description));
    }
    if let Some(file_url) = payload.file_url {
        active.file_url = Set(Some(file_url));
    }
    if let Some(colors) = payload.colors {
        validation::code_set("colors", &colors, true)?;
        active.colors = Set(colors.into());
    }
    if let Some(positions) = payload.positions {
        validation::code_set("positions", &positions, true)?;
        active.positions = Set(positions.into());
    }
    if let Some(technique) = payload.technique {
        active.technique = Set(technique);
    }
    if let Some(dimensions) = payload.dimensions {
        active.dimensions = Set(Some(dimensions));
    }
    if let Some(flag) = payload.active {
        active.active = Set(flag);
    }

    if !active.is_changed() {
        return Ok(Some(existing.into()));
    }
    let print = active.update(&state.orm).await?;
    tracing::info!(print_id = print.id, "print updated");

    Ok(Some(print.into()))
}

pub async fn delete_print(state: &AppState, id: i32) -> AppResult<()> {
    let result = Prints::delete_by_id(id).exec(&state.orm).await?;
    tracing::info!(print_id = id, rows = result.rows_affected, "print deleted");
    Ok(())
}
