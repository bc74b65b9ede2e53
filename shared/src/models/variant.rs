//! Catalog Variant Model

use serde::{Deserialize, Serialize};

/// SKU category enum
///
/// The upstream API sends this as a free string; anything outside the four
/// known values lands in the explicit `Unknown` variant rather than failing
/// deserialization or silently mapping to a real category.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SkuType {
    /// Physical asset (cylinder shell, regulator, ...)
    Asset,
    /// Gas fill
    Consumable,
    /// Refundable cylinder deposit
    Deposit,
    /// Fixed gas+deposit combination sold as one line
    Bundle,
    /// Unrecognized wire value
    #[serde(other)]
    Unknown,
}

impl SkuType {
    /// Parse a raw SKU-type code. Total: unrecognized codes map to `Unknown`.
    pub fn from_code(code: &str) -> Self {
        match code {
            "ASSET" => Self::Asset,
            "CONSUMABLE" => Self::Consumable,
            "DEPOSIT" => Self::Deposit,
            "BUNDLE" => Self::Bundle,
            _ => Self::Unknown,
        }
    }
}

/// Catalog variant entity
///
/// SKU convention: `GAS<size>` for gas fills, `DEP<size>` for deposits,
/// `KIT<size>...` for bundles. The prefix and `sku_type` agree by convention
/// only; nothing here enforces it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Variant {
    pub id: String,
    pub sku: String,
    pub sku_type: SkuType,
    /// Component SKUs, present only for bundles. Expected to resolve to the
    /// GAS+DEP pair of the bundle's own size (checked by the catalog audit).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bundle_components: Option<Vec<String>>,
}
