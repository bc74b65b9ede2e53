//! Boundary validation for incoming line data
//!
//! Opt-in checks for callers that want to reject suspicious payloads before
//! aggregation. The calculators themselves never call these: upstream data
//! is permissive by policy (negative quantities may encode returns/credits),
//! so rejecting is a caller decision, not an engine one.

use rust_decimal::Decimal;
use shared::models::{OrderLine, PriceListLine};
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("line carries both variant_id ({variant_id}) and gas_type ({gas_type})")]
    AmbiguousReference { variant_id: String, gas_type: String },
    #[error("{field} must be non-negative, got {value}")]
    NegativeValue { field: &'static str, value: Decimal },
}

fn require_non_negative(
    value: Option<Decimal>,
    field: &'static str,
) -> Result<(), ValidationError> {
    match value {
        Some(v) if v < Decimal::ZERO => Err(ValidationError::NegativeValue { field, value: v }),
        _ => Ok(()),
    }
}

fn check_exclusive_reference(
    variant_id: &Option<String>,
    gas_type: &Option<String>,
) -> Result<(), ValidationError> {
    if let (Some(variant_id), Some(gas_type)) = (variant_id, gas_type) {
        return Err(ValidationError::AmbiguousReference {
            variant_id: variant_id.clone(),
            gas_type: gas_type.clone(),
        });
    }
    Ok(())
}

/// Validate an order line before aggregation
pub fn validate_order_line(line: &OrderLine) -> Result<(), ValidationError> {
    check_exclusive_reference(&line.variant_id, &line.gas_type)?;
    require_non_negative(line.qty_ordered, "qty_ordered")?;
    require_non_negative(line.list_price, "list_price")?;
    require_non_negative(line.final_price, "final_price")?;
    require_non_negative(line.manual_unit_price, "manual_unit_price")?;
    Ok(())
}

/// Validate a price-list line before consolidation
pub fn validate_price_line(line: &PriceListLine) -> Result<(), ValidationError> {
    check_exclusive_reference(&line.variant_id, &line.gas_type)?;
    require_non_negative(Some(line.min_unit_price), "min_unit_price")?;
    require_non_negative(Some(line.tax_rate), "tax_rate")?;
    Ok(())
}
