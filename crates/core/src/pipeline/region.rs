//! Business unit short code -> region resolution.

use std::collections::HashMap;

use salesdigest_domain::{BusinessUnitRecord, DecoratedBusinessUnit, RegionCode};
use tracing::{debug, info};

/// Immutable short-code lookup, built once from configuration.
#[derive(Debug, Clone, Default)]
pub struct RegionResolver {
    table: HashMap<String, RegionCode>,
}

impl RegionResolver {
    /// Build a resolver from `(short_code, region)` pairs.
    pub fn new<I, K, V>(table: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let table = table
            .into_iter()
            .map(|(short_code, region)| (short_code.into(), RegionCode::new(region)))
            .collect();
        Self { table }
    }

    /// Region for a short code; unmapped codes yield [`RegionCode::unknown`].
    pub fn resolve(&self, short_code: &str) -> RegionCode {
        self.table.get(short_code).cloned().unwrap_or_else(RegionCode::unknown)
    }

    /// Wrap each business unit with its resolved region.
    pub fn decorate(&self, units: Vec<BusinessUnitRecord>) -> Vec<DecoratedBusinessUnit> {
        let decorated: Vec<DecoratedBusinessUnit> = units
            .into_iter()
            .map(|unit| {
                let region = self.resolve(unit.short_code.as_deref().unwrap_or_default());
                DecoratedBusinessUnit::new(unit, region)
            })
            .collect();

        let unmapped = decorated.iter().filter(|unit| unit.region.is_unknown()).count();
        info!(units = decorated.len(), "Region assigned to business units");
        if unmapped > 0 {
            debug!(unmapped, "Business units without a region mapping");
        }

        decorated
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolver() -> RegionResolver {
        RegionResolver::new([("LSO", "CE"), ("LFO", "CE"), ("LTE", "PI")])
    }

    #[test]
    fn resolves_mapped_short_codes() {
        let resolver = resolver();
        assert_eq!(resolver.resolve("LSO"), RegionCode::from("CE"));
        assert_eq!(resolver.resolve("LTE"), RegionCode::from("PI"));
    }

    #[test]
    fn unmapped_and_empty_codes_are_unknown() {
        let resolver = resolver();
        assert!(resolver.resolve("XYZ").is_unknown());
        assert!(resolver.resolve("").is_unknown());
        assert!(resolver.resolve("lso").is_unknown());
    }

    #[test]
    fn decorate_keeps_units_untouched_and_in_order() {
        let units = vec![
            BusinessUnitRecord {
                business_unit_code: Some("1".into()),
                short_code: Some("LFO".into()),
                ..Default::default()
            },
            BusinessUnitRecord { business_unit_code: Some("2".into()), ..Default::default() },
        ];

        let decorated = resolver().decorate(units.clone());

        assert_eq!(decorated.len(), 2);
        assert_eq!(decorated[0].unit, units[0]);
        assert_eq!(decorated[0].region, RegionCode::from("CE"));
        assert!(decorated[1].region.is_unknown());
    }
}
