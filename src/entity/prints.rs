use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::json::StringList;

/// Printing technique applied to a garment.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize, ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
#[serde(rename_all = "lowercase")]
pub enum Technique {
    #[sea_orm(string_value = "silk")]
    Silk,
    #[sea_orm(string_value = "dtf")]
    Dtf,
    #[sea_orm(string_value = "embroidery")]
    Embroidery,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "prints")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub file_url: Option<String>,
    #[sea_orm(column_type = "JsonBinary")]
    pub colors: StringList,
    #[sea_orm(column_type = "JsonBinary")]
    pub positions: StringList,
    pub technique: Technique,
    /// Free-form, e.g. "10x10cm".
    pub dimensions: Option<String>,
    pub active: bool,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::quotes::Entity")]
    Quotes,
}

impl Related<super::quotes::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Quotes.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
