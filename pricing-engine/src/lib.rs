//! LPG back-office pricing engine
//!
//! Pure computation layer behind the order and price-list pages: variant
//! classification, order-line pricing aggregation, and price-list KIT
//! consolidation. All inputs arrive pre-fetched from the REST layer; every
//! function here is synchronous, side-effect-free and total over its
//! documented domain — malformed lines degrade to zero/fallback buckets
//! instead of erroring.
//!
//! Module structure:
//!
//! - `money`: decimal rounding/tolerance helpers and tax-inclusive pricing
//! - `catalog`: variant lookup and bundle-composition audit
//! - `classifier`: SKU bucket classification and size-token extraction
//! - `order_calculator`: per-line subtotals and whole-order bucket breakdown
//! - `kit_consolidator`: GAS/DEP/KIT grouping with KIT-suppresses-DEP rule
//! - `validation`: opt-in boundary checks; never invoked by the calculators

pub mod catalog;
pub mod classifier;
pub mod kit_consolidator;
pub mod money;
pub mod order_calculator;
pub mod validation;

// Re-export 公共类型
pub use catalog::{BundleIssue, VariantCatalog};
pub use classifier::{Bucket, classify, extract_size_token};
pub use kit_consolidator::{ConsolidatedLine, consolidate_price_lines};
pub use money::{money_eq, round_display, tax_inclusive_price};
pub use order_calculator::{
    OrderPricingBreakdown, aggregate_order_pricing, effective_unit_price, line_subtotal,
};
pub use validation::{ValidationError, validate_order_line, validate_price_line};
