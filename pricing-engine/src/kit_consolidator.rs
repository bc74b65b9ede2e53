//! Price-List KIT Consolidation
//!
//! The price-list pages show one row per sellable size, not the raw price
//! lines: when a KIT (bundle) price exists for a cylinder size, the separate
//! deposit row is suppressed and the customer sees KIT + gas refill; sizes
//! without a KIT price keep their gas and deposit rows. Bulk-gas lines are
//! not size-coded and pass through unfiltered.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::Serialize;
use shared::models::PriceListLine;

use crate::catalog::VariantCatalog;
use crate::classifier::extract_size_token;
use crate::money::tax_inclusive_price;

/// A price line after consolidation, ready for table rendering
#[derive(Debug, Clone, Serialize)]
pub struct ConsolidatedLine {
    /// Resolved SKU for variant lines; `None` for bulk-gas lines
    pub sku: Option<String>,
    pub line: PriceListLine,
    /// Tax-inclusive unit price, unrounded; round via `money::round_display`
    pub display_price: Decimal,
}

/// Per-size candidate slots. At most one line per slot; the first occurrence
/// wins and later duplicates are logged.
#[derive(Default)]
struct SizeGroup<'a> {
    consumable: Option<(&'a str, &'a PriceListLine)>,
    deposit: Option<(&'a str, &'a PriceListLine)>,
    bundle: Option<(&'a str, &'a PriceListLine)>,
}

impl<'a> SizeGroup<'a> {
    fn place(&mut self, sku: &'a str, line: &'a PriceListLine) {
        let slot = if sku.starts_with("KIT") {
            &mut self.bundle
        } else if sku.starts_with("DEP") {
            &mut self.deposit
        } else {
            &mut self.consumable
        };
        if slot.is_some() {
            tracing::warn!(sku, "duplicate price line for slot, keeping first");
            return;
        }
        *slot = Some((sku, line));
    }

    /// Emit rule: a KIT price supersedes the separate deposit (the deposit
    /// is baked into the KIT), never the gas refill. At most 2 lines per
    /// size; a group holding a single line of any kind is always emitted.
    fn emit(&self) -> impl Iterator<Item = (&'a str, &'a PriceListLine)> {
        let (first, second) = if self.bundle.is_some() {
            (self.bundle, self.consumable)
        } else {
            (self.consumable, self.deposit)
        };
        first.into_iter().chain(second)
    }
}

fn consolidated(sku: Option<&str>, line: &PriceListLine) -> ConsolidatedLine {
    ConsolidatedLine {
        sku: sku.map(|s| s.to_string()),
        line: line.clone(),
        display_price: tax_inclusive_price(line.min_unit_price, line.tax_rate),
    }
}

/// Collapse a price list's raw lines into the displayed set.
///
/// Variant lines resolve through `catalog` and group by the size token of
/// their SKU; unresolved ids and SKUs outside the GAS/DEP/KIT convention are
/// dropped from grouping with a data-quality warning. Groups are emitted in
/// ascending size order, then bulk-gas / no-variant lines in input order.
pub fn consolidate_price_lines(
    lines: &[PriceListLine],
    catalog: &VariantCatalog,
) -> Vec<ConsolidatedLine> {
    // Key (token length, token) sorts digit strings numerically
    let mut groups: BTreeMap<(usize, &str), SizeGroup<'_>> = BTreeMap::new();
    let mut passthrough: Vec<&PriceListLine> = Vec::new();

    for line in lines {
        let Some(variant_id) = line.variant_id.as_deref() else {
            passthrough.push(line);
            continue;
        };

        let Some(variant) = catalog.resolve(variant_id) else {
            tracing::warn!(variant_id, "price line references unknown variant, dropped");
            continue;
        };
        let Some(size) = extract_size_token(&variant.sku) else {
            tracing::warn!(
                sku = %variant.sku,
                "price line SKU outside GAS/DEP/KIT convention, dropped"
            );
            continue;
        };

        groups
            .entry((size.len(), size))
            .or_default()
            .place(&variant.sku, line);
    }

    let mut out: Vec<ConsolidatedLine> = Vec::new();
    for group in groups.values() {
        out.extend(group.emit().map(|(sku, line)| consolidated(Some(sku), line)));
    }
    out.extend(passthrough.into_iter().map(|line| consolidated(None, line)));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::{SkuType, Variant};

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    fn variant(id: &str, sku: &str, sku_type: SkuType) -> Variant {
        Variant {
            id: id.to_string(),
            sku: sku.to_string(),
            sku_type,
            bundle_components: None,
        }
    }

    fn catalog() -> VariantCatalog {
        VariantCatalog::from_variants([
            variant("gas18", "GAS18", SkuType::Consumable),
            variant("dep18", "DEP18", SkuType::Deposit),
            variant("kit18", "KIT18-OUTRIGHT", SkuType::Bundle),
            variant("gas22", "GAS22", SkuType::Consumable),
            variant("dep22", "DEP22", SkuType::Deposit),
            variant("gas6", "GAS6", SkuType::Consumable),
            variant("widget", "WIDGET-A", SkuType::Unknown),
        ])
    }

    fn vline(variant_id: &str, price: &str, tax: &str) -> PriceListLine {
        PriceListLine {
            variant_id: Some(variant_id.to_string()),
            gas_type: None,
            min_unit_price: dec(price),
            tax_rate: dec(tax),
        }
    }

    fn skus(lines: &[ConsolidatedLine]) -> Vec<Option<&str>> {
        lines.iter().map(|l| l.sku.as_deref()).collect()
    }

    // ==================== Emit Rule ====================

    #[test]
    fn test_kit_suppresses_deposit_never_gas() {
        let lines = vec![
            vline("kit18", "75", "16"),
            vline("gas18", "25.5", "16"),
            vline("dep18", "30", "0"),
        ];
        let out = consolidate_price_lines(&lines, &catalog());
        assert_eq!(skus(&out), vec![Some("KIT18-OUTRIGHT"), Some("GAS18")]);
    }

    #[test]
    fn test_no_kit_passthrough() {
        let lines = vec![vline("gas22", "28", "16"), vline("dep22", "35", "0")];
        let out = consolidate_price_lines(&lines, &catalog());
        assert_eq!(skus(&out), vec![Some("GAS22"), Some("DEP22")]);
    }

    #[test]
    fn test_lonely_line_always_emitted() {
        // A size with only a deposit line must not vanish
        let out = consolidate_price_lines(&[vline("dep22", "35", "0")], &catalog());
        assert_eq!(skus(&out), vec![Some("DEP22")]);

        // ... and a size with only a KIT line keeps it
        let out = consolidate_price_lines(&[vline("kit18", "75", "16")], &catalog());
        assert_eq!(skus(&out), vec![Some("KIT18-OUTRIGHT")]);
    }

    #[test]
    fn test_at_most_two_lines_per_size() {
        let lines = vec![
            vline("kit18", "75", "16"),
            vline("gas18", "25.5", "16"),
            vline("dep18", "30", "0"),
        ];
        let out = consolidate_price_lines(&lines, &catalog());
        assert_eq!(out.len(), 2);
    }

    // ==================== Grouping and Ordering ====================

    #[test]
    fn test_sizes_emitted_in_numeric_order() {
        let lines = vec![
            vline("gas22", "28", "16"),
            vline("gas6", "12", "16"),
            vline("gas18", "25.5", "16"),
        ];
        let out = consolidate_price_lines(&lines, &catalog());
        assert_eq!(skus(&out), vec![Some("GAS6"), Some("GAS18"), Some("GAS22")]);
    }

    #[test]
    fn test_bulk_gas_passes_through_after_groups() {
        let bulk = PriceListLine {
            gas_type: Some("PROPANE".to_string()),
            min_unit_price: dec("1.8"),
            tax_rate: dec("16"),
            ..PriceListLine::default()
        };
        let lines = vec![bulk, vline("gas18", "25.5", "16")];
        let out = consolidate_price_lines(&lines, &catalog());
        assert_eq!(skus(&out), vec![Some("GAS18"), None]);
        assert_eq!(out[1].line.gas_type.as_deref(), Some("PROPANE"));
    }

    #[test]
    fn test_duplicate_slot_first_wins() {
        let lines = vec![vline("gas18", "25.5", "16"), vline("gas18", "99", "16")];
        let out = consolidate_price_lines(&lines, &catalog());
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].line.min_unit_price, dec("25.5"));
    }

    // ==================== Dropped Lines ====================

    #[test]
    fn test_unresolved_variant_dropped() {
        let lines = vec![vline("ghost", "10", "16"), vline("gas18", "25.5", "16")];
        let out = consolidate_price_lines(&lines, &catalog());
        assert_eq!(skus(&out), vec![Some("GAS18")]);
    }

    #[test]
    fn test_unconventional_sku_dropped_from_grouping() {
        let out = consolidate_price_lines(&[vline("widget", "10", "16")], &catalog());
        assert!(out.is_empty());
    }

    // ==================== Display Price ====================

    #[test]
    fn test_kit_display_price_is_tax_inclusive() {
        let out = consolidate_price_lines(&[vline("kit18", "75", "16")], &catalog());
        assert_eq!(out[0].display_price, dec("87"));
    }

    #[test]
    fn test_display_price_unrounded() {
        let out = consolidate_price_lines(&[vline("gas18", "33.33", "7.5")], &catalog());
        assert_eq!(out[0].display_price, dec("35.82975"));
        assert_eq!(crate::money::round_display(out[0].display_price), dec("35.83"));
    }

    #[test]
    fn test_empty_input() {
        assert!(consolidate_price_lines(&[], &catalog()).is_empty());
    }
}
