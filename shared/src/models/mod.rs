//! Data models
//!
//! Shared between the back-office API and the pricing engine.
//! All IDs are opaque strings assigned by the upstream service.

pub mod order;
pub mod price_list;
pub mod variant;

// Re-exports
pub use order::*;
pub use price_list::*;
pub use variant::*;
