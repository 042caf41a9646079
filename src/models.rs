use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sea_orm::prelude::DateTimeWithTimeZone;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::entity::{
    budgets::{self, BudgetStatus},
    clients,
    json::QuoteItem,
    orders::{self, OrderStatus, ProductionStep},
    prints::{self, Technique},
    products,
    quotes::{self, QuoteStatus},
    suppliers,
    transactions::{self, PaymentMethod, TransactionStatus},
    users::{self, Role},
};

fn utc(value: DateTimeWithTimeZone) -> DateTime<Utc> {
    value.with_timezone(&Utc)
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub phone: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<users::Model> for User {
    fn from(model: users::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            email: model.email,
            role: model.role,
            phone: model.phone,
            created_at: utc(model.created_at),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub id: i32,
    pub name: String,
    pub cpf_cnpj: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<clients::Model> for Client {
    fn from(model: clients::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            cpf_cnpj: model.cpf_cnpj,
            email: model.email,
            phone: model.phone,
            address: model.address,
            city: model.city,
            state: model.state,
            zip_code: model.zip_code,
            created_at: utc(model.created_at),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Supplier {
    pub id: i32,
    pub name: String,
    pub contact_name: Option<String>,
    pub cnpj: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub production_time_days: i32,
    pub rating: Decimal,
    pub payment_method: Option<String>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<suppliers::Model> for Supplier {
    fn from(model: suppliers::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            contact_name: model.contact_name,
            cnpj: model.cnpj,
            email: model.email,
            phone: model.phone,
            address: model.address,
            production_time_days: model.production_time_days,
            rating: model.rating,
            payment_method: model.payment_method,
            notes: model.notes,
            created_at: utc(model.created_at),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub model: String,
    pub fabric: String,
    pub color: String,
    pub sizes: Vec<String>,
    pub base_price: Decimal,
    pub stock: i32,
    pub image_url: Option<String>,
    pub active: bool,
    pub created_at: DateTime<Utc>,
}

impl From<products::Model> for Product {
    fn from(model: products::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            model: model.model,
            fabric: model.fabric,
            color: model.color,
            sizes: model.sizes.into(),
            base_price: model.base_price,
            stock: model.stock,
            image_url: model.image_url,
            active: model.active,
            created_at: utc(model.created_at),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Print {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub file_url: Option<String>,
    pub colors: Vec<String>,
    pub positions: Vec<String>,
    pub technique: Technique,
    pub dimensions: Option<String>,
    pub active: bool,
    pub created_at: DateTime<Utc>,
}

impl From<prints::Model> for Print {
    fn from(model: prints::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            description: model.description,
            file_url: model.file_url,
            colors: model.colors.into(),
            positions: model.positions.into(),
            technique: model.technique,
            dimensions: model.dimensions,
            active: model.active,
            created_at: utc(model.created_at),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    pub id: i32,
    pub client_id: i32,
    pub seller_id: i32,
    pub supplier_id: Option<i32>,
    pub product_id: Option<i32>,
    pub print_id: Option<i32>,
    pub items: Vec<QuoteItem>,
    pub status: QuoteStatus,
    pub total_quantity: i32,
    pub unit_price: Option<Decimal>,
    pub total_price: Option<Decimal>,
    pub delivery_days: Option<i32>,
    pub supplier_response: Option<String>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub responded_at: Option<DateTime<Utc>>,
}

impl From<quotes::Model> for Quote {
    fn from(model: quotes::Model) -> Self {
        Self {
            id: model.id,
            client_id: model.client_id,
            seller_id: model.seller_id,
            supplier_id: model.supplier_id,
            product_id: model.product_id,
            print_id: model.print_id,
            items: model.items.0,
            status: model.status,
            total_quantity: model.total_quantity,
            unit_price: model.unit_price,
            total_price: model.total_price,
            delivery_days: model.delivery_days,
            supplier_response: model.supplier_response,
            notes: model.notes,
            created_at: utc(model.created_at),
            responded_at: model.responded_at.map(utc),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Budget {
    pub id: i32,
    pub quote_id: i32,
    pub client_id: i32,
    pub budget_number: String,
    pub total_value: Decimal,
    pub down_payment_percent: i32,
    pub down_payment_value: Decimal,
    pub pix_key: String,
    pub status: BudgetStatus,
    pub valid_until: DateTime<Utc>,
    pub pdf_url: Option<String>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub sent_at: Option<DateTime<Utc>>,
    pub approved_at: Option<DateTime<Utc>>,
}

impl From<budgets::Model> for Budget {
    fn from(model: budgets::Model) -> Self {
        Self {
            id: model.id,
            quote_id: model.quote_id,
            client_id: model.client_id,
            budget_number: model.budget_number,
            total_value: model.total_value,
            down_payment_percent: model.down_payment_percent,
            down_payment_value: model.down_payment_value,
            pix_key: model.pix_key,
            status: model.status,
            valid_until: utc(model.valid_until),
            pdf_url: model.pdf_url,
            notes: model.notes,
            created_at: utc(model.created_at),
            sent_at: model.sent_at.map(utc),
            approved_at: model.approved_at.map(utc),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: i32,
    pub budget_id: i32,
    pub client_id: i32,
    pub supplier_id: i32,
    pub order_number: String,
    pub status: OrderStatus,
    pub production_step: ProductionStep,
    pub progress: i32,
    pub total_value: Decimal,
    pub delivery_date: Option<DateTime<Utc>>,
    pub tracking_code: Option<String>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub delivered_at: Option<DateTime<Utc>>,
}

impl From<orders::Model> for Order {
    fn from(model: orders::Model) -> Self {
        Self {
            id: model.id,
            budget_id: model.budget_id,
            client_id: model.client_id,
            supplier_id: model.supplier_id,
            order_number: model.order_number,
            status: model.status,
            production_step: model.production_step,
            progress: model.progress,
            total_value: model.total_value,
            delivery_date: model.delivery_date.map(utc),
            tracking_code: model.tracking_code,
            notes: model.notes,
            created_at: utc(model.created_at),
            delivered_at: model.delivered_at.map(utc),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: i32,
    pub order_id: i32,
    pub payment_method: PaymentMethod,
    pub amount: Decimal,
    pub status: TransactionStatus,
    pub transaction_date: DateTime<Utc>,
    pub notes: Option<String>,
}

impl From<transactions::Model> for Transaction {
    fn from(model: transactions::Model) -> Self {
        Self {
            id: model.id,
            order_id: model.order_id,
            payment_method: model.payment_method,
            amount: model.amount,
            status: model.status,
            transaction_date: utc(model.transaction_date),
            notes: model.notes,
        }
    }
}

/// Headline numbers shown on the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardMetrics {
    pub total_revenue: Decimal,
    pub completed_orders: i64,
    pub pending_budgets: i64,
    pub average_ticket: Decimal,
}

impl Default for DashboardMetrics {
    fn default() -> Self {
        Self {
            total_revenue: Decimal::ZERO,
            completed_orders: 0,
            pending_budgets: 0,
            average_ticket: Decimal::ZERO,
        }
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardOverview {
    pub metrics: DashboardMetrics,
    pub recent_orders: Vec<Order>,
    pub recent_budgets: Vec<Budget>,
}
