use rust_decimal::Decimal;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{ActiveModelTrait, EntityTrait, QueryOrder, Set};

use crate::{
    dto::products::{CreateProductRequest, UpdateProductRequest},
    entity::{
        json::StringList,
        products::{ActiveModel, Column, Entity as Products},
    },
    error::AppResult,
    models::Product,
    state::AppState,
    validation,
};

/// Size codes are stored trimmed and uppercase, so duplicates are checked after folding.
fn normalize_sizes(sizes: Vec<String>) -> AppResult<StringList> {
    let sizes: Vec<String> = sizes.iter().map(|s| s.trim().to_uppercase()).collect();
    validation::code_set("sizes", &sizes, false)?;
    Ok(sizes.into())
}

pub async fn list_products(state: &AppState) -> AppResult<Vec<Product>> {
    let items = Products::find()
        .order_by_desc(Column::CreatedAt)
        .order_by_desc(Column::Id)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(Product::from)
        .collect();
    Ok(items)
}

pub async fn get_product(state: &AppState, id: i32) -> AppResult<Option<Product>> {
    let product = Products::find_by_id(id).one(&state.orm).await?;
    Ok(product.map(Product::from))
}

pub async fn create_product(state: &AppState, payload: CreateProductRequest) -> AppResult<Product> {
    validation::require_text("name", &payload.name)?;
    validation::require_text("model", &payload.model)?;
    validation::require_text("fabric", &payload.fabric)?;
    validation::require_text("color", &payload.color)?;
    let sizes = normalize_sizes(payload.sizes)?;
    let base_price = payload.base_price.unwrap_or(Decimal::ZERO);
    validation::money("basePrice", base_price)?;
    let stock = payload.stock.unwrap_or(0);
    validation::non_negative("stock", stock)?;

    let active = ActiveModel {
        id: NotSet,
        name: Set(payload.name),
        model: Set(payload.model),
        fabric: Set(payload.fabric),
        color: Set(payload.color),
        sizes: Set(sizes),
        base_price: Set(base_price.round_dp(2)),
        stock: Set(stock),
        image_url: Set(payload.image_url),
        active: Set(payload.active.unwrap_or(true)),
        created_at: NotSet,
    };
    let product = active.insert(&state.orm).await?;
    tracing::info!(product_id = product.id, "product created");

    Ok(product.into())
}

pub async fn update_product(
    state: &AppState,
    id: i32,
    payload: UpdateProductRequest,
) -> AppResult<Option<Product>> {
    let existing = match Products::find_by_id(id).one(&state.orm).await? {
        Some(p) => p,
        None => return Ok(None),
    };

    let mut active: ActiveModel = existing.clone().into();
    if let Some(name) = payload.name {
        validation::require_text("name", &name)?;
        active.name = Set(name);
    }
    if let Some(model) = payload.model {
        validation::require_text("model", &model)?;
        active.model = Set(model);
    }
    if let Some(fabric) = payload.fabric {
        validation::require_text("fabric", &fabric)?;
        active.fabric = Set(fabric);
    }
    if let Some(color) = payload.color {
        validation::require_text("color", &color)?;
        active.color = Set(color);
    }
    if let Some(sizes) = payload.sizes {
        active.sizes = Set(normalize_sizes(sizes)?);
    }
    if let Some(base_price) = payload.base_price {
        validation::money("basePrice", base_price)?;
        active.base_price = Set(base_price.round_dp(2));
    }
    if let Some(stock) = payload.stock {
        validation::non_negative("stock", stock)?;
        active.stock = Set(stock);
    }
    if let Some(image_url) = payload.image_url {
        active.image_url = Set(Some(image_url));
    }
    if let Some(flag) = payload.active {
        active.active = Set(flag);
    }

    if !active.is_changed() {
        return Ok(Some(existing.into()));
    }
    let product = active.update(&state.orm).await?;
    tracing::info!(product_id = product.id, "product updated");

    Ok(Some(product.into()))
}

pub async fn delete_product(state: &AppState, id: i32) -> AppResult<()> {
    let result = Products::delete_by_id(id).exec(&state.orm).await?;
    tracing::info!(product_id = id, rows = result.rows_affected, "product deleted");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;

    fn sizes(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn sizes_are_trimmed_and_uppercased() {
        let normalized = normalize_sizes(sizes(&[" m ", "g", "GG"])).unwrap();
        assert_eq!(normalized.0, sizes(&["M", "G", "GG"]));
    }

    #[test]
    fn sizes_differing_only_in_case_or_padding_are_duplicates() {
        assert!(matches!(
            normalize_sizes(sizes(&["p", "P"])),
            Err(AppError::BadRequest(_))
        ));
        assert!(normalize_sizes(sizes(&["M", " m "])).is_err());
        assert!(normalize_sizes(sizes(&[])).is_err());
        assert!(normalize_sizes(sizes(&["P", "  "])).is_err());
    }
}
