//! Typed payloads stored in `JSONB` columns.

use std::collections::BTreeMap;

use sea_orm::FromJsonQueryResult;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::prints::Technique;

/// Ordered list of short codes (sizes, colors, positions).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult)]
#[serde(transparent)]
pub struct StringList(pub Vec<String>);

impl From<Vec<String>> for StringList {
    fn from(values: Vec<String>) -> Self {
        Self(values)
    }
}

impl From<StringList> for Vec<String> {
    fn from(list: StringList) -> Self {
        list.0
    }
}

/// One line of a quote: a product, an optional print and the quantity per size.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct QuoteItem {
    pub product_id: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub print_id: Option<i32>,
    /// Size code to quantity, e.g. `{"P": 10, "M": 20}`.
    pub size_grid: BTreeMap<String, i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub technique: Option<Technique>,
}

impl QuoteItem {
    pub fn quantity(&self) -> i64 {
        self.size_grid.values().map(|q| i64::from(*q)).sum()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult)]
#[serde(transparent)]
pub struct QuoteItems(pub Vec<QuoteItem>);

impl QuoteItems {
    /// Sum of every quantity across every item's size grid.
    pub fn total_quantity(&self) -> i64 {
        self.0.iter().map(QuoteItem::quantity).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(grid: &[(&str, i32)]) -> QuoteItem {
        QuoteItem {
            product_id: 1,
            print_id: None,
            size_grid: grid.iter().map(|(k, v)| (k.to_string(), *v)).collect(),
            position: None,
            technique: None,
        }
    }

    #[test]
    fn total_quantity_sums_all_grids() {
        let items = QuoteItems(vec![item(&[("P", 10), ("M", 20)]), item(&[("GG", 5)])]);
        assert_eq!(items.total_quantity(), 35);
    }

    #[test]
    fn total_quantity_of_empty_items_is_zero() {
        assert_eq!(QuoteItems::default().total_quantity(), 0);
    }

    #[test]
    fn quote_item_uses_camel_case_keys() {
        let json = serde_json::json!({
            "productId": 3,
            "sizeGrid": { "M": 4 },
            "technique": "dtf"
        });
        let parsed: QuoteItem = serde_json::from_value(json).expect("valid item");
        assert_eq!(parsed.product_id, 3);
        assert_eq!(parsed.print_id, None);
        assert_eq!(parsed.technique, Some(Technique::Dtf));
        assert_eq!(parsed.quantity(), 4);
    }
}
