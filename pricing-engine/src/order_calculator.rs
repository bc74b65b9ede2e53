//! Order Pricing Aggregator
//!
//! Computes per-line subtotals and the whole-order breakdown by bucket
//! (asset / gas / deposit / bundle / bulk gas). Pure single pass over the
//! fetched lines; malformed lines degrade to zero, never to an error, and
//! every line lands in exactly one bucket.

use rust_decimal::Decimal;
use serde::Serialize;
use shared::models::OrderLine;

use crate::catalog::VariantCatalog;
use crate::classifier::{Bucket, classify};

/// Whole-order pricing breakdown, one total per bucket
///
/// Invariant: `grand_total` equals the sum of the five bucket totals, which
/// equals the sum of all individual line subtotals. Totals are exact
/// (unrounded) decimals; the UI rounds for display.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct OrderPricingBreakdown {
    pub asset_total: Decimal,
    pub gas_total: Decimal,
    pub deposit_total: Decimal,
    pub bundle_total: Decimal,
    pub bulk_gas_total: Decimal,
    pub grand_total: Decimal,
    /// Lines that hit the ASSET fallback because no classification was
    /// possible (dangling variant id, absent reference, unknown sku_type).
    /// Their money is in `asset_total`; this counter keeps them observable.
    pub unclassified_lines: u32,
}

/// Effective per-unit price: `manual_unit_price → final_price → list_price → 0`
pub fn effective_unit_price(line: &OrderLine) -> Decimal {
    line.manual_unit_price
        .or(line.final_price)
        .or(line.list_price)
        .unwrap_or(Decimal::ZERO)
}

/// Line subtotal: effective unit price × quantity (0 when absent)
///
/// Negative quantities and prices are deliberately not clamped — the
/// surrounding system may encode returns/credits that way.
pub fn line_subtotal(line: &OrderLine) -> Decimal {
    effective_unit_price(line) * line.qty_ordered.unwrap_or(Decimal::ZERO)
}

/// Aggregate an order's lines into the per-bucket breakdown.
///
/// Routing per line:
/// - `gas_type` set → bulk gas total, bypassing classification entirely;
/// - variant resolved in `catalog` → its bucket (`CONSUMABLE` → gas total);
/// - otherwise → asset fallback, counted in `unclassified_lines`.
pub fn aggregate_order_pricing(
    lines: &[OrderLine],
    catalog: &VariantCatalog,
) -> OrderPricingBreakdown {
    let mut breakdown = OrderPricingBreakdown::default();

    for line in lines {
        let subtotal = line_subtotal(line);

        if line.gas_type.is_some() {
            breakdown.bulk_gas_total += subtotal;
            breakdown.grand_total += subtotal;
            continue;
        }

        let variant = line
            .variant_id
            .as_deref()
            .and_then(|id| catalog.resolve(id));
        let bucket = classify(variant);
        if bucket == Bucket::Unknown {
            breakdown.unclassified_lines += 1;
            tracing::warn!(
                variant_id = ?line.variant_id,
                "order line not classifiable, routed to asset bucket"
            );
        }

        match bucket.billing_bucket() {
            Bucket::Consumable => breakdown.gas_total += subtotal,
            Bucket::Deposit => breakdown.deposit_total += subtotal,
            Bucket::Bundle => breakdown.bundle_total += subtotal,
            // Asset proper plus the Unknown → Asset fallback
            _ => breakdown.asset_total += subtotal,
        }
        breakdown.grand_total += subtotal;
    }

    breakdown
}
