//! Order Line Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One row of an order
///
/// References either a catalog variant (`variant_id`) or a bulk gas product
/// (`gas_type`). The two are mutually exclusive in practice but the upstream
/// API does not enforce it; `pricing_engine::validation` offers an opt-in
/// check. Missing numeric fields are treated as zero by the calculators.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrderLine {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variant_id: Option<String>,
    /// Bulk (non-catalog) gas product name, e.g. "PROPANE"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gas_type: Option<String>,
    /// Quantity ordered; fractional for bulk gas sold by volume
    #[serde(default)]
    pub qty_ordered: Option<Decimal>,
    /// Catalog list price per unit
    #[serde(default)]
    pub list_price: Option<Decimal>,
    /// Price after list-level adjustments
    #[serde(default)]
    pub final_price: Option<Decimal>,
    /// Operator override, takes precedence over everything
    #[serde(default)]
    pub manual_unit_price: Option<Decimal>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sparse_line_deserializes() {
        // The API routinely omits fields; every one must default cleanly
        let line: OrderLine = serde_json::from_str(r#"{"variant_id": "v1"}"#).unwrap();
        assert_eq!(line.variant_id.as_deref(), Some("v1"));
        assert!(line.gas_type.is_none());
        assert!(line.qty_ordered.is_none());
        assert!(line.manual_unit_price.is_none());
    }

    #[test]
    fn test_bulk_gas_line() {
        let line: OrderLine = serde_json::from_str(
            r#"{"gas_type": "PROPANE", "qty_ordered": 120.5, "final_price": 1.75}"#,
        )
        .unwrap();
        assert_eq!(line.gas_type.as_deref(), Some("PROPANE"));
        assert_eq!(line.qty_ordered, Some("120.5".parse().unwrap()));
        assert_eq!(line.final_price, Some("1.75".parse().unwrap()));
    }
}
