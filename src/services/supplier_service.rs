use rust_decimal::Decimal;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{ActiveModelTrait, EntityTrait, QueryOrder, Set};

use crate::{
    dto::suppliers::{CreateSupplierRequest, UpdateSupplierRequest},
    entity::suppliers::{ActiveModel, Column, Entity as Suppliers},
    error::AppResult,
    models::Supplier,
    state::AppState,
    validation,
};

const DEFAULT_PRODUCTION_TIME_DAYS: i32 = 7;

fn validate_rating(rating: Decimal) -> AppResult<()> {
    validation::amount_in_range("rating", rating, Decimal::ZERO, Decimal::new(5, 0))
}

pub async fn list_suppliers(state: &AppState) -> AppResult<Vec<Supplier>> {
    let items = Suppliers::find()
        .order_by_desc(Column::CreatedAt)
        .order_by_desc(Column::Id)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(Supplier::from)
        .collect();
    Ok(items)
}

pub async fn get_supplier(state: &AppState, id: i32) -> AppResult<Option<Supplier>> {
    let supplier = Suppliers::find_by_id(id).one(&state.orm).await?;
    Ok(supplier.map(Supplier::from))
}

pub async fn create_supplier(
    state: &AppState,
    payload: CreateSupplierRequest,
) -> AppResult<Supplier> {
    validation::require_text("name", &payload.name)?;
    validation::optional_email("email", payload.email.as_deref())?;
    let production_time_days = payload
        .production_time_days
        .unwrap_or(DEFAULT_PRODUCTION_TIME_DAYS);
    validation::non_negative("productionTimeDays", production_time_days)?;
    let rating = payload.rating.unwrap_or(Decimal::ZERO);
    validate_rating(rating)?;

    let active = ActiveModel {
        id: NotSet,
        name: Set(payload.name),
        contact_name: Set(payload.contact_name),
        cnpj: Set(payload.cnpj),
        email: Set(payload.email),
        phone: Set(payload.phone),
        address: Set(payload.address),
        production_time_days: Set(production_time_days),
        rating: Set(rating.round_dp(1)),
        payment_method: Set(payload.payment_method),
        notes: Set(payload.notes),
        created_at: NotSet,
    };
    let supplier = active.insert(&state.orm).await?;
    tracing::info!(supplier_id = supplier.id, "supplier created");

    Ok(supplier.into())
}

pub async fn update_supplier(
    state: &AppState,
    id: i32,
    payload: UpdateSupplierRequest,
) -> AppResult<Option<Supplier>> {
    let existing = match Suppliers::find_by_id(id).one(&state.orm).await? {
        Some(s) => s,
        None => return Ok(None),
    };

    let mut active: ActiveModel = existing.clone().into();
    if let Some(name) = payload.name {
        validation::require_text("name", &name)?;
        active.name = Set(name);
    }
    if let Some(contact_name) = payload.contact_name {
        active.contact_name = Set(Some(contact_name));
    }
    if let Some(cnpj) = payload.cnpj {
        active.cnpj = Set(Some(cnpj));
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
    if let Some(days) = payload.production_time_days {
        validation::non_negative("productionTimeDays", days)?;
        active.production_time_days = Set(days);
    }
    if let Some(rating) = payload.rating {
        validate_rating(rating)?;
        active.rating = Set(rating.round_dp(1));
    }
    if let Some(payment_method) = payload.payment_method {
        active.payment_method = Set(Some(payment_method));
    }
    if let Some(notes) = payload.notes {
        active.notes = Set(Some(notes));
    }

    if !active.is_changed() {
        return Ok(Some(existing.into()));
    }
    let supplier = active.update(&state.orm).await?;
    tracing::info!(supplier_id = supplier.id, "supplier updated");

    Ok(Some(supplier.into()))
}

pub async fn delete_supplier(state: &AppState, id: i32) -> AppResult<()> {
    let result = Suppliers::delete_by_id(id).exec(&state.orm).await?;
    tracing::info!(supplier_id = id, rows = result.rows_affected, "supplier deleted");
    Ok(())
}
