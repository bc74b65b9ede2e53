//! Price List Models

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One row of a price list
///
/// Exactly one of `variant_id`/`gas_type` is set per line — an assumed
/// precondition of the upstream data, not enforced here.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PriceListLine {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variant_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gas_type: Option<String>,
    /// Base (pre-tax) minimum unit price
    #[serde(default)]
    pub min_unit_price: Decimal,
    /// Tax percentage; 0 for zero-rated lines
    #[serde(default)]
    pub tax_rate: Decimal,
}

/// Named set of minimum unit prices, as served by the price-list endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceList {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub lines: Vec<PriceListLine>,
}
