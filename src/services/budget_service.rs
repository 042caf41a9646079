use chrono::{Duration, Utc};
use rust_decimal::Decimal;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

use crate::{
    dto::budgets::{CreateBudgetRequest, UpdateBudgetRequest},
    entity::budgets::{ActiveModel, BudgetStatus, Column, Entity as Budgets},
    error::{AppError, AppResult},
    models::Budget,
    state::AppState,
    validation,
};

pub const DEFAULT_DOWN_PAYMENT_PERCENT: i32 = 50;

pub fn format_budget_number(n: i32) -> String {
    format!("ORC-{n:04}")
}

/// Share of `total` due up front, rounded to cents.
pub fn down_payment(total: Decimal, percent: i32) -> AppResult<Decimal> {
    validate_terms(total, percent)?;
    total
        .checked_mul(Decimal::from(percent))
        .and_then(|v| v.checked_div(Decimal::ONE_HUNDRED))
        .map(|v| v.round_dp(2))
        .ok_or_else(|| AppError::BadRequest("downPaymentValue is too large".into()))
}

fn validate_terms(total: Decimal, percent: i32) -> AppResult<()> {
    validation::money("totalValue", total)?;
    validation::in_range("downPaymentPercent", percent, 0..=100)
}

fn validate_amounts(total: Decimal, percent: i32, value: Decimal) -> AppResult<()> {
    validate_terms(total, percent)?;
    validation::amount_in_range("downPaymentValue", value, Decimal::ZERO, total)
}

async fn next_budget_number(state: &AppState) -> AppResult<String> {
    let last = Budgets::find()
        .order_by_desc(Column::Id)
        .one(&state.orm)
        .await?;
    let next = last.map(|b| b.id).unwrap_or(0) + 1;
    Ok(format_budget_number(next))
}

pub async fn list_budgets(
    state: &AppState,
    status: Option<BudgetStatus>,
) -> AppResult<Vec<Budget>> {
    let mut query = Budgets::find();
    if let Some(status) = status {
        query = query.filter(Column::Status.eq(status));
    }
    let items = query
        .order_by_desc(Column::CreatedAt)
        .order_by_desc(Column::Id)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(Budget::from)
        .collect();
    Ok(items)
}

pub async fn get_budget(state: &AppState, id: i32) -> AppResult<Option<Budget>> {
    let budget = Budgets::find_by_id(id).one(&state.orm).await?;
    Ok(budget.map(Budget::from))
}

pub async fn create_budget(state: &AppState, payload: CreateBudgetRequest) -> AppResult<Budget> {
    let percent = payload
        .down_payment_percent
        .unwrap_or(DEFAULT_DOWN_PAYMENT_PERCENT);
    let total = payload.total_value.round_dp(2);
    let value = match payload.down_payment_value {
        Some(v) => v,
        None => down_payment(total, percent)?,
    };
    validate_amounts(total, percent, value)?;

    let budget_number = match payload.budget_number {
        Some(number) => {
            validation::require_text("budgetNumber", &number)?;
            number
        }
        None => next_budget_number(state).await?,
    };
    let pix_key = match payload.pix_key {
        Some(key) => {
            validation::require_text("pixKey", &key)?;
            key
        }
        None => state.config.shop_pix_key.clone(),
    };

    let now = Utc::now();
    let valid_until = payload
        .valid_until
        .unwrap_or_else(|| now + Duration::days(state.config.budget_validity_days));
    let status = payload.status.unwrap_or(BudgetStatus::Draft);
    let stamp = |s: BudgetStatus| (status == s).then(|| now.fixed_offset());

    let active = ActiveModel {
        id: NotSet,
        quote_id: Set(payload.quote_id),
        client_id: Set(payload.client_id),
        budget_number: Set(budget_number),
        total_value: Set(total),
        down_payment_percent: Set(percent),
        down_payment_value: Set(value),
        pix_key: Set(pix_key),
        status: Set(status),
        valid_until: Set(valid_until.fixed_offset()),
        pdf_url: Set(payload.pdf_url),
        notes: Set(payload.notes),
        created_at: NotSet,
        sent_at: Set(stamp(BudgetStatus::Sent)),
        approved_at: Set(stamp(BudgetStatus::Approved)),
    };
    let budget = active.insert(&state.orm).await?;
    tracing::info!(
        budget_id = budget.id,
        budget_number = %budget.budget_number,
        "budget created"
    );

    Ok(budget.into())
}

pub async fn update_budget(
    state: &AppState,
    id: i32,
    payload: UpdateBudgetRequest,
) -> AppResult<Option<Budget>> {
    let existing = match Budgets::find_by_id(id).one(&state.orm).await? {
        Some(b) => b,
        None => return Ok(None),
    };

    let mut active: ActiveModel = existing.clone().into();
    if let Some(quote_id) = payload.quote_id {
        active.quote_id = Set(quote_id);
    }
    if let Some(client_id) = payload.client_id {
        active.client_id = Set(client_id);
    }

    let total = payload
        .total_value
        .map(|t| t.round_dp(2))
        .unwrap_or(existing.total_value);
    let percent = payload
        .down_payment_percent
        .unwrap_or(existing.down_payment_percent);
    let value = match payload.down_payment_value {
        Some(v) => v,
        None if payload.total_value.is_some() || payload.down_payment_percent.is_some() => {
            down_payment(total, percent)?
        }
        None => existing.down_payment_value,
    };
    validate_amounts(total, percent, value)?;
    if total != existing.total_value {
        active.total_value = Set(total);
    }
    if percent != existing.down_payment_percent {
        active.down_payment_percent = Set(percent);
    }
    if value != existing.down_payment_value {
        active.down_payment_value = Set(value);
    }

    if let Some(pix_key) = payload.pix_key {
        validation::require_text("pixKey", &pix_key)?;
        active.pix_key = Set(pix_key);
    }
    if let Some(status) = payload.status {
        let now = Utc::now().fixed_offset();
        if status == BudgetStatus::Sent && existing.sent_at.is_none() {
            active.sent_at = Set(Some(now));
        }
        if status == BudgetStatus::Approved && existing.approved_at.is_none() {
            active.approved_at = Set(Some(now));
        }
        active.status = Set(status);
    }
    if let Some(valid_until) = payload.valid_until {
        active.valid_until = Set(valid_until.fixed_offset());
    }
    if let Some(pdf_url) = payload.pdf_url {
        active.pdf_url = Set(Some(pdf_url));
    }
    if let Some(notes) = payload.notes {
        active.notes = Set(Some(notes));
    }

    if !active.is_changed() {
        return Ok(Some(existing.into()));
    }
    let budget = active.update(&state.orm).await?;
    tracing::info!(budget_id = budget.id, status = ?budget.status, "budget updated");

    Ok(Some(budget.into()))
}

pub async fn delete_budget(state: &AppState, id: i32) -> AppResult<()> {
    let result = Budgets::delete_by_id(id).exec(&state.orm).await?;
    tracing::info!(budget_id = id, rows = result.rows_affected, "budget deleted");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn budget_numbers_are_zero_padded() {
        assert_eq!(format_budget_number(1), "ORC-0001");
        assert_eq!(format_budget_number(42), "ORC-0042");
        assert_eq!(format_budget_number(12345), "ORC-12345");
    }

    #[test]
    fn down_payment_defaults_to_half() {
        let total = Decimal::new(150000, 2);
        assert_eq!(
            down_payment(total, DEFAULT_DOWN_PAYMENT_PERCENT).unwrap(),
            Decimal::new(75000, 2)
        );
        assert_eq!(
            down_payment(Decimal::new(3333, 2), 30).unwrap(),
            Decimal::new(1000, 2)
        );
        assert_eq!(down_payment(total, 0).unwrap(), Decimal::ZERO);
        assert_eq!(
            down_payment(validation::MAX_MONEY, 100).unwrap(),
            validation::MAX_MONEY
        );
    }

    #[test]
    fn oversized_totals_are_rejected() {
        assert!(matches!(
            down_payment(Decimal::MAX, DEFAULT_DOWN_PAYMENT_PERCENT),
            Err(AppError::BadRequest(_))
        ));
        assert!(down_payment(Decimal::new(100_000_000, 0), 50).is_err());
        assert!(down_payment(Decimal::new(100, 0), 101).is_err());
        assert!(validate_amounts(Decimal::MAX, 50, Decimal::ZERO).is_err());
    }

    #[test]
    fn down_payment_must_fit_in_total() {
        let total = Decimal::new(100, 0);
        assert!(validate_amounts(total, 50, Decimal::new(50, 0)).is_ok());
        assert!(validate_amounts(total, 50, Decimal::new(101, 0)).is_err());
        assert!(validate_amounts(total, 50, Decimal::new(-1, 0)).is_err());
        assert!(validate_amounts(total, 101, Decimal::ZERO).is_err());
        assert!(validate_amounts(Decimal::new(-1, 0), 50, Decimal::ZERO).is_err());
    }
}
