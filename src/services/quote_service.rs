use chrono::Utc;
use rust_decimal::Decimal;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

use crate::{
    dto::quotes::{CreateQuoteRequest, UpdateQuoteRequest},
    entity::{
        json::{QuoteItem, QuoteItems},
        quotes::{ActiveModel, Column, Entity as Quotes, QuoteStatus},
    },
    error::{AppError, AppResult},
    models::Quote,
    state::AppState,
    validation,
};

/// Validates the item list and returns it with its summed quantity.
fn checked_items(items: Vec<QuoteItem>) -> AppResult<(QuoteItems, i32)> {
    if items.is_empty() {
        return Err(AppError::BadRequest("items must not be empty".into()));
    }
    for item in &items {
        if item.size_grid.is_empty() {
            return Err(AppError::BadRequest(
                "items.sizeGrid must not be empty".into(),
            ));
        }
        for (size, qty) in &item.size_grid {
            validation::require_text("items.sizeGrid", size)?;
            validation::non_negative("items.sizeGrid quantity", *qty)?;
        }
    }

    let items = QuoteItems(items);
    let total = i32::try_from(items.total_quantity())
        .map_err(|_| AppError::BadRequest("total quantity is too large".into()))?;
    Ok((items, total))
}

/// Unit price times quantity, rounded to cents and bounded like any other price.
fn price_for(unit_price: Decimal, quantity: i32) -> AppResult<Decimal> {
    let total = unit_price
        .checked_mul(Decimal::from(quantity))
        .map(|t| t.round_dp(2))
        .ok_or_else(|| AppError::BadRequest("totalPrice is too large".into()))?;
    validation::money("totalPrice", total)?;
    Ok(total)
}

fn validate_prices(unit_price: Option<Decimal>, total_price: Option<Decimal>) -> AppResult<()> {
    if let Some(p) = unit_price {
        validation::money("unitPrice", p)?;
    }
    if let Some(p) = total_price {
        validation::money("totalPrice", p)?;
    }
    Ok(())
}

pub async fn list_quotes(state: &AppState, status: Option<QuoteStatus>) -> AppResult<Vec<Quote>> {
    let mut query = Quotes::find();
    if let Some(status) = status {
        query = query.filter(Column::Status.eq(status));
    }
    let items = query
        .order_by_desc(Column::CreatedAt)
        .order_by_desc(Column::Id)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(Quote::from)
        .collect();
    Ok(items)
}

pub async fn get_quote(state: &AppState, id: i32) -> AppResult<Option<Quote>> {
    let quote = Quotes::find_by_id(id).one(&state.orm).await?;
    Ok(quote.map(Quote::from))
}

pub async fn create_quote(state: &AppState, payload: CreateQuoteRequest) -> AppResult<Quote> {
    let (items, total_quantity) = checked_items(payload.items)?;
    validate_prices(payload.unit_price, payload.total_price)?;
    if let Some(days) = payload.delivery_days {
        validation::non_negative("deliveryDays", days)?;
    }

    let total_price = match (payload.total_price, payload.unit_price) {
        (Some(total), _) => Some(total),
        (None, Some(unit)) => Some(price_for(unit, total_quantity)?),
        (None, None) => None,
    };
    let status = payload.status.unwrap_or(QuoteStatus::Pending);
    let responded_at = (status == QuoteStatus::Responded).then(|| Utc::now().fixed_offset());

    let active = ActiveModel {
        id: NotSet,
        client_id: Set(payload.client_id),
        seller_id: Set(payload.seller_id),
        supplier_id: Set(payload.supplier_id),
        product_id: Set(payload.product_id),
        print_id: Set(payload.print_id),
        items: Set(items),
        status: Set(status),
        total_quantity: Set(total_quantity),
        unit_price: Set(payload.unit_price),
        total_price: Set(total_price),
        delivery_days: Set(payload.delivery_days),
        supplier_response: Set(payload.supplier_response),
        notes: Set(payload.notes),
        created_at: NotSet,
        responded_at: Set(responded_at),
    };
    let quote = active.insert(&state.orm).await?;
    tracing::info!(
        quote_id = quote.id,
        client_id = quote.client_id,
        total_quantity = quote.total_quantity,
        "quote created"
    );

    Ok(quote.into())
}

pub async fn update_quote(
    state: &AppState,
    id: i32,
    payload: UpdateQuoteRequest,
) -> AppResult<Option<Quote>> {
    let existing = match Quotes::find_by_id(id).one(&state.orm).await? {
        Some(q) => q,
        None => return Ok(None),
    };
    validate_prices(payload.unit_price, payload.total_price)?;

    let mut active: ActiveModel = existing.clone().into();
    if let Some(client_id) = payload.client_id {
        active.client_id = Set(client_id);
    }
    if let Some(seller_id) = payload.seller_id {
        active.seller_id = Set(seller_id);
    }
    if let Some(supplier_id) = payload.supplier_id {
        active.supplier_id = Set(Some(supplier_id));
    }
    if let Some(product_id) = payload.product_id {
        active.product_id = Set(Some(product_id));
    }
    if let Some(print_id) = payload.print_id {
        active.print_id = Set(Some(print_id));
    }

    let mut total_quantity = existing.total_quantity;
    let items_replaced = payload.items.is_some();
    if let Some(items) = payload.items {
        let (items, quantity) = checked_items(items)?;
        total_quantity = quantity;
        active.items = Set(items);
        active.total_quantity = Set(quantity);
    }

    let unit_price = payload.unit_price.or(existing.unit_price);
    if payload.unit_price.is_some() {
        active.unit_price = Set(payload.unit_price);
    }
    match payload.total_price {
        Some(total) => active.total_price = Set(Some(total)),
        None if items_replaced || payload.unit_price.is_some() => {
            if let Some(p) = unit_price {
                active.total_price = Set(Some(price_for(p, total_quantity)?));
            }
        }
        None => {}
    }

    if let Some(status) = payload.status {
        if status == QuoteStatus::Responded && existing.responded_at.is_none() {
            active.responded_at = Set(Some(Utc::now().fixed_offset()));
        }
        active.status = Set(status);
    }
    if let Some(days) = payload.delivery_days {
        validation::non_negative("deliveryDays", days)?;
        active.delivery_days = Set(Some(days));
    }
    if let Some(response) = payload.supplier_response {
        active.supplier_response = Set(Some(response));
    }
    if let Some(notes) = payload.notes {
        active.notes = Set(Some(notes));
    }

    if !active.is_changed() {
        return Ok(Some(existing.into()));
    }
    let quote = active.update(&state.orm).await?;
    tracing::info!(quote_id = quote.id, status = ?quote.status, "quote updated");

    Ok(Some(quote.into()))
}

pub async fn delete_quote(state: &AppState, id: i32) -> AppResult<()> {
    let result = Quotes::delete_by_id(id).exec(&state.orm).await?;
    tracing::info!(quote_id = id, rows = result.rows_affected, "quote deleted");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(grid: &[(&str, i32)]) -> QuoteItem {
        QuoteItem {
            product_id: 1,
            print_id: None,
            size_grid: grid.iter().map(|(k, v)| (k.to_string(), *v)).collect(),
            position: Some("frente".into()),
            technique: None,
        }
    }

    #[test]
    fn items_are_summed() {
        let (items, total) =
            checked_items(vec![item(&[("P", 10), ("M", 20)]), item(&[("G", 15)])]).unwrap();
        assert_eq!(items.0.len(), 2);
        assert_eq!(total, 45);
    }

    #[test]
    fn empty_or_malformed_items_are_rejected() {
        assert!(matches!(checked_items(vec![]), Err(AppError::BadRequest(_))));
        assert!(checked_items(vec![item(&[])]).is_err());
        assert!(checked_items(vec![item(&[("P", -1)])]).is_err());
        assert!(checked_items(vec![item(&[(" ", 3)])]).is_err());
    }

    #[test]
    fn oversized_total_is_rejected() {
        let big = vec![item(&[("P", i32::MAX)]), item(&[("M", 1)])];
        assert!(checked_items(big).is_err());
    }

    #[test]
    fn total_price_follows_quantity() {
        assert_eq!(
            price_for(Decimal::new(2550, 2), 40).unwrap(),
            Decimal::new(102000, 2)
        );
        assert!(validate_prices(Some(Decimal::new(-1, 0)), None).is_err());
    }

    #[test]
    fn oversized_prices_are_rejected() {
        assert!(matches!(
            price_for(Decimal::MAX, 1_000_000_000),
            Err(AppError::BadRequest(_))
        ));
        // Fits a Decimal but not the column.
        assert!(matches!(
            price_for(Decimal::new(1_000_000, 0), 1_000),
            Err(AppError::BadRequest(_))
        ));
        assert!(validate_prices(None, Some(Decimal::new(100_000_000, 0))).is_err());
        assert!(validate_prices(Some(Decimal::MAX), None).is_err());
    }
}
