//! Variant Classifier
//!
//! Maps catalog variants into pricing buckets and extracts the size token
//! shared by GAS/DEP/KIT SKUs (the grouping key for KIT consolidation).

use serde::{Deserialize, Serialize};
use shared::models::{SkuType, Variant};

/// Pricing bucket for an order line or price-list line
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Bucket {
    Asset,
    Consumable,
    Deposit,
    Bundle,
    /// No classification possible: variant absent, unresolved, or carrying
    /// an unrecognized sku_type
    Unknown,
}

impl Bucket {
    /// Bucket used for financial aggregation.
    ///
    /// The source system routes every unclassifiable line into the asset
    /// bucket; that behavior is preserved for reporting compatibility, with
    /// `Unknown` kept visible to callers that want to count such lines.
    pub fn billing_bucket(self) -> Bucket {
        match self {
            Bucket::Unknown => Bucket::Asset,
            other => other,
        }
    }
}

impl From<SkuType> for Bucket {
    fn from(sku_type: SkuType) -> Self {
        match sku_type {
            SkuType::Asset => Bucket::Asset,
            SkuType::Consumable => Bucket::Consumable,
            SkuType::Deposit => Bucket::Deposit,
            SkuType::Bundle => Bucket::Bundle,
            SkuType::Unknown => Bucket::Unknown,
        }
    }
}

/// Classify a (possibly absent) variant into its pricing bucket.
///
/// Total function: absent variants and unrecognized sku_types yield
/// [`Bucket::Unknown`]; apply [`Bucket::billing_bucket`] for the
/// aggregation-compatible ASSET fallback.
pub fn classify(variant: Option<&Variant>) -> Bucket {
    match variant {
        Some(v) => Bucket::from(v.sku_type),
        None => Bucket::Unknown,
    }
}

/// Extract the size token from a SKU: `GAS18` → `18`, `KIT6-OUTRIGHT` → `6`.
///
/// Case-sensitive on the three literal prefixes; anything after the digit
/// run is ignored. Returns `None` when no prefix matches or the prefix is
/// not followed by at least one digit.
pub fn extract_size_token(sku: &str) -> Option<&str> {
    let rest = sku
        .strip_prefix("GAS")
        .or_else(|| sku.strip_prefix("DEP"))
        .or_else(|| sku.strip_prefix("KIT"))?;

    let digits = rest.len() - rest.trim_start_matches(|c: char| c.is_ascii_digit()).len();
    if digits == 0 {
        return None;
    }
    Some(&rest[..digits])
}
