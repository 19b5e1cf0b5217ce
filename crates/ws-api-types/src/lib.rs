//! Data contracts shared between the storefront backend and the product UI.
//!
//! Everything here is read-only input computed by the backend. Fields are
//! decoded leniently: the backend sends `null` for unset values and `0`/`1`
//! for check fields, so every field falls back to an empty/false default.

use serde::{Deserialize, Deserializer, Serialize};

pub const GRID_VIEW: &str = "Grid View";
pub const LIST_VIEW: &str = "List View";

/// A single catalog entry as supplied by the product listing query.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ItemRecord {
    /// Document id of the website item.
    #[serde(deserialize_with = "text")]
    pub name: String,
    #[serde(deserialize_with = "text")]
    pub item_code: String,
    #[serde(deserialize_with = "text")]
    pub web_item_name: String,
    #[serde(deserialize_with = "text")]
    pub item_name: String,
    #[serde(deserialize_with = "text")]
    pub route: String,
    #[serde(deserialize_with = "text")]
    pub website_image: String,
    #[serde(deserialize_with = "text")]
    pub item_group: String,
    #[serde(deserialize_with = "text")]
    pub custom_short_description: String,
    #[serde(deserialize_with = "text")]
    pub short_description: String,
    #[serde(deserialize_with = "text")]
    pub formatted_price: String,
    #[serde(deserialize_with = "text")]
    pub formatted_mrp: String,
    #[serde(deserialize_with = "text")]
    pub discount: String,
    #[serde(deserialize_with = "flag")]
    pub has_variants: bool,
    #[serde(deserialize_with = "flag")]
    pub in_stock: bool,
    #[serde(deserialize_with = "flag")]
    pub on_backorder: bool,
    #[serde(deserialize_with = "flag")]
    pub is_stock: bool,
    #[serde(deserialize_with = "flag")]
    pub in_cart: bool,
    #[serde(deserialize_with = "flag")]
    pub wished: bool,
    #[serde(deserialize_with = "quantity")]
    pub qty: Option<f64>,
}

impl ItemRecord {
    /// Display name: web name, then item name, then item code.
    pub fn display_name(&self) -> &str {
        [&self.web_item_name, &self.item_name, &self.item_code]
            .into_iter()
            .find(|s| !s.is_empty())
            .map(String::as_str)
            .unwrap_or("")
    }

    /// Route link target; `#` when the item has no route.
    pub fn href(&self) -> String {
        if self.route.is_empty() {
            "/#".to_owned()
        } else {
            format!("/{}", self.route)
        }
    }
}

/// Webshop settings relevant to the catalog views.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ViewSettings {
    /// Shopping cart feature is on.
    #[serde(deserialize_with = "flag")]
    pub enabled: bool,
    #[serde(deserialize_with = "flag")]
    pub enable_checkout: bool,
    #[serde(deserialize_with = "flag")]
    pub enable_wishlist: bool,
    #[serde(deserialize_with = "flag")]
    pub show_stock_availability: bool,
    #[serde(deserialize_with = "flag")]
    pub allow_items_not_in_stock: bool,
}

/// Which catalog view the shopper last picked. With no recorded choice
/// neither view is shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewPreference {
    Grid,
    List,
    Other(String),
}

impl Default for ViewPreference {
    fn default() -> Self {
        Self::Other(String::new())
    }
}

impl ViewPreference {
    pub fn from_label(label: &str) -> Self {
        match label {
            GRID_VIEW => Self::Grid,
            LIST_VIEW => Self::List,
            other => Self::Other(other.to_owned()),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Self::Grid => GRID_VIEW,
            Self::List => LIST_VIEW,
            Self::Other(s) => s,
        }
    }
}

impl Serialize for ViewPreference {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for ViewPreference {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(Self::from_label(&text(deserializer)?))
    }
}

// ── Search ──

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SearchRequest {
    pub query: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ProductResult {
    #[serde(deserialize_with = "text")]
    pub name: String,
    #[serde(deserialize_with = "text")]
    pub web_item_name: String,
    #[serde(deserialize_with = "text")]
    pub route: String,
    #[serde(deserialize_with = "text")]
    pub thumbnail: String,
    #[serde(deserialize_with = "text")]
    pub website_image: String,
    #[serde(deserialize_with = "text")]
    pub brand: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct CategoryResult {
    #[serde(deserialize_with = "text")]
    pub name: String,
    #[serde(deserialize_with = "text")]
    pub route: String,
}

/// Payload of the product search endpoint. Either list may be null or absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SearchResponse {
    pub product_results: Option<Vec<ProductResult>>,
    pub category_results: Option<Vec<CategoryResult>>,
}

impl SearchResponse {
    pub fn products(&self) -> &[ProductResult] {
        self.product_results.as_deref().unwrap_or_default()
    }

    pub fn categories(&self) -> &[CategoryResult] {
        self.category_results.as_deref().unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.products().is_empty() && self.categories().is_empty()
    }
}

/// Whitelisted method responses arrive wrapped as `{"message": ...}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MethodResponse<T> {
    #[serde(default)]
    pub message: Option<T>,
}

// ── Lenient field decoding ──

#[derive(Deserialize)]
#[serde(untagged)]
enum Loose {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

fn flag<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    Ok(match Option::<Loose>::deserialize(deserializer)? {
        None => false,
        Some(Loose::Bool(b)) => b,
        Some(Loose::Int(i)) => i != 0,
        Some(Loose::Float(f)) => f != 0.0,
        Some(Loose::Text(s)) => matches!(s.trim(), "1" | "true" | "True"),
    })
}

fn text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(match Option::<Loose>::deserialize(deserializer)? {
        None => String::new(),
        Some(Loose::Bool(b)) => b.to_string(),
        Some(Loose::Int(i)) => i.to_string(),
        Some(Loose::Float(f)) => f.to_string(),
        Some(Loose::Text(s)) => s,
    })
}

fn quantity<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<f64>, D::Error> {
    Ok(match Option::<Loose>::deserialize(deserializer)? {
        None | Some(Loose::Bool(_)) => None,
        Some(Loose::Int(i)) => Some(i as f64),
        Some(Loose::Float(f)) => Some(f),
        Some(Loose::Text(s)) => s.trim().parse().ok(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn item_record_tolerates_nulls_and_integer_flags() -> anyhow::Result<()> {
        let item: ItemRecord = serde_json::from_value(json!({
            "name": "WEB-ITM-0001",
            "item_code": "CHAIR-01",
            "web_item_name": null,
            "item_name": "Oak Chair",
            "has_variants": 0,
            "in_stock": 1,
            "in_cart": true,
            "formatted_mrp": null,
            "qty": 3
        }))?;

        assert_eq!(item.display_name(), "Oak Chair");
        assert!(!item.has_variants);
        assert!(item.in_stock);
        assert!(item.in_cart);
        assert!(item.formatted_mrp.is_empty());
        assert_eq!(item.qty, Some(3.0));
        Ok(())
    }

    #[test]
    fn display_name_falls_back_to_code_then_empty() {
        let mut item = ItemRecord {
            item_code: "SKU-9".into(),
            ..Default::default()
        };
        assert_eq!(item.display_name(), "SKU-9");
        item.item_code.clear();
        assert_eq!(item.display_name(), "");
    }

    #[test]
    fn href_defaults_to_hash() {
        let item = ItemRecord::default();
        assert_eq!(item.href(), "/#");
        let item = ItemRecord {
            route: "chairs/oak".into(),
            ..Default::default()
        };
        assert_eq!(item.href(), "/chairs/oak");
    }

    #[test]
    fn view_preference_labels() -> anyhow::Result<()> {
        let pref: ViewPreference = serde_json::from_value(json!("List View"))?;
        assert_eq!(pref, ViewPreference::List);
        let pref: ViewPreference = serde_json::from_value(json!("Tiles"))?;
        assert_eq!(pref, ViewPreference::Other("Tiles".into()));
        assert_eq!(serde_json::to_value(ViewPreference::Grid)?, json!("Grid View"));
        assert_eq!(ViewPreference::default(), ViewPreference::Other(String::new()));
        Ok(())
    }

    #[test]
    fn search_response_unwraps_method_envelope() -> anyhow::Result<()> {
        let raw = json!({
            "message": {
                "product_results": [{ "web_item_name": "Desk", "route": "desk", "brand": null }],
                "category_results": null
            }
        });
        let envelope: MethodResponse<SearchResponse> = serde_json::from_value(raw)?;
        let response = envelope.message.unwrap_or_default();
        assert_eq!(response.products().len(), 1);
        assert!(response.categories().is_empty());
        assert!(!response.is_empty());

        let empty: MethodResponse<SearchResponse> = serde_json::from_value(json!({}))?;
        assert!(empty.message.unwrap_or_default().is_empty());
        Ok(())
    }
}
