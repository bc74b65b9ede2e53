//! Variant Catalog
//!
//! Resolved id → variant lookup handed to the calculators, built once from
//! the already-fetched variant array. Also hosts the bundle-composition
//! audit: findings are data-quality signals surfaced to the caller, never
//! failures.

use std::collections::{HashMap, HashSet};

use shared::models::{SkuType, Variant};
use thiserror::Error;

use crate::classifier::extract_size_token;

/// Data-quality finding from the bundle audit
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BundleIssue {
    #[error("bundle {sku} has no components listed")]
    MissingComponents { sku: String },
    #[error("bundle {sku} carries no size token in its SKU")]
    UnsizedSku { sku: String },
    #[error("bundle {sku} component {component} not found in catalog")]
    UnknownComponent { sku: String, component: String },
    #[error("bundle {sku} components {components:?} are not the GAS+DEP pair for size {size}")]
    NotGasDepositPair {
        sku: String,
        components: Vec<String>,
        size: String,
    },
}

/// Id-keyed variant lookup
#[derive(Debug, Clone, Default)]
pub struct VariantCatalog {
    by_id: HashMap<String, Variant>,
}

impl VariantCatalog {
    /// Build a catalog from fetched variants. On duplicate ids the first
    /// occurrence wins; duplicates are logged, not rejected.
    pub fn from_variants(variants: impl IntoIterator<Item = Variant>) -> Self {
        let mut by_id: HashMap<String, Variant> = HashMap::new();
        for variant in variants {
            if let Some(existing) = by_id.get(&variant.id) {
                tracing::warn!(
                    id = %variant.id,
                    kept = %existing.sku,
                    ignored = %variant.sku,
                    "duplicate variant id in catalog payload"
                );
                continue;
            }
            by_id.insert(variant.id.clone(), variant);
        }
        Self { by_id }
    }

    /// Resolve a variant id; `None` for dangling references.
    pub fn resolve(&self, variant_id: &str) -> Option<&Variant> {
        self.by_id.get(variant_id)
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }

    /// Check every BUNDLE variant's composition: components must exist in
    /// the catalog and form exactly the GAS+DEP pair of the bundle's own
    /// size. Convention only — order entry keeps working regardless, so the
    /// result is a report, not an error.
    pub fn audit_bundles(&self) -> Vec<BundleIssue> {
        let known_skus: HashSet<&str> = self.by_id.values().map(|v| v.sku.as_str()).collect();
        let mut issues = Vec::new();

        for variant in self.by_id.values() {
            if variant.sku_type != SkuType::Bundle {
                continue;
            }

            let Some(size) = extract_size_token(&variant.sku) else {
                issues.push(BundleIssue::UnsizedSku {
                    sku: variant.sku.clone(),
                });
                continue;
            };

            let components = match variant.bundle_components.as_deref() {
                Some(c) if !c.is_empty() => c,
                _ => {
                    issues.push(BundleIssue::MissingComponents {
                        sku: variant.sku.clone(),
                    });
                    continue;
                }
            };

            for component in components {
                if !known_skus.contains(component.as_str()) {
                    issues.push(BundleIssue::UnknownComponent {
                        sku: variant.sku.clone(),
                        component: component.clone(),
                    });
                }
            }

            let gas_match = components
                .iter()
                .filter(|c| c.starts_with("GAS") && extract_size_token(c) == Some(size))
                .count();
            let dep_match = components
                .iter()
                .filter(|c| c.starts_with("DEP") && extract_size_token(c) == Some(size))
                .count();
            if components.len() != 2 || gas_match != 1 || dep_match != 1 {
                issues.push(BundleIssue::NotGasDepositPair {
                    sku: variant.sku.clone(),
                    components: components.to_vec(),
                    size: size.to_string(),
                });
            }
        }

        issues
    }
}
