//! Shared types for the LPG back-office
//!
//! Data models exchanged between the back-office API and its consumers
//! (catalog variants, order lines, price lists). These are plain serde
//! shapes with no behavior; all computation lives in `pricing-engine`.

pub mod models;

// Re-exports
pub use models::{OrderLine, PriceList, PriceListLine, SkuType, Variant};
pub use serde::{Deserialize, Serialize};
