//! Inner join of sales against agents and business units.

use std::collections::HashMap;

use salesdigest_domain::{AgentRecord, DecoratedBusinessUnit, JoinedSale, SalesRecord};
use tracing::info;

/// Join each sale with its agent and business unit.
///
/// Sales whose agent or business unit code has no match are dropped; only
/// the kept/total counts are logged. Output order follows `sales`. When a
/// lookup key appears more than once the last record wins.
pub fn join_records(
    sales: &[SalesRecord],
    agents: &[AgentRecord],
    units: &[DecoratedBusinessUnit],
) -> Vec<JoinedSale> {
    let agents_by_code: HashMap<&str, &AgentRecord> = agents
        .iter()
        .filter_map(|agent| agent.agent_code.as_deref().map(|code| (code, agent)))
        .collect();
    let units_by_code: HashMap<&str, &DecoratedBusinessUnit> = units
        .iter()
        .filter_map(|unit| unit.business_unit_code().map(|code| (code, unit)))
        .collect();

    let joined: Vec<JoinedSale> = sales
        .iter()
        .filter_map(|sale| {
            let agent_code = sale.agent_code.as_deref()?;
            let agent = agents_by_code.get(agent_code)?;
            let unit_code = sale.business_unit_code.as_deref()?;
            let unit = units_by_code.get(unit_code)?;

            Some(JoinedSale {
                business_unit_short_code: unit.short_code().to_string(),
                agent_display_name: agent.agent_name.clone().unwrap_or_default(),
                value: sale.total_value.clone(),
                volume: sale.total_volume.clone(),
                issue_date: sale.issue_date.clone().unwrap_or_default(),
                region: unit.region.clone(),
                business_unit_code: unit_code.to_string(),
                agent_code: agent_code.to_string(),
            })
        })
        .collect();

    info!(
        joined = joined.len(),
        total = sales.len(),
        dropped = sales.len() - joined.len(),
        "Joined sales with agents and business units"
    );

    joined
}

#[cfg(test)]
mod tests {
    use salesdigest_domain::{BusinessUnitRecord, RawAmount, RegionCode};

    use super::*;

    fn sale(unit: Option<&str>, agent: Option<&str>, value: f64) -> SalesRecord {
        SalesRecord {
            business_unit_code: unit.map(str::to_string),
            agent_code: agent.map(str::to_string),
            issue_date: Some("17/10/2026".into()),
            total_value: Some(RawAmount::Number(value)),
            total_volume: Some(RawAmount::Number(10.0)),
            ..Default::default()
        }
    }

    fn agent(code: &str, name: &str) -> AgentRecord {
        AgentRecord {
            agent_code: Some(code.into()),
            agent_name: Some(name.into()),
            active_flag: Some("S".into()),
            ..Default::default()
        }
    }

    fn unit(code: &str, short_code: &str, region: &str) -> DecoratedBusinessUnit {
        DecoratedBusinessUnit::new(
            BusinessUnitRecord {
                business_unit_code: Some(code.into()),
                short_code: Some(short_code.into()),
                ..Default::default()
            },
            RegionCode::from(region),
        )
    }

    #[test]
    fn matched_sales_carry_agent_unit_and_region() {
        let joined = join_records(
            &[sale(Some("1"), Some("10"), 250.0)],
            &[agent("10", "Maria Silva")],
            &[unit("1", "LSO", "CE")],
        );

        assert_eq!(joined.len(), 1);
        let sale = &joined[0];
        assert_eq!(sale.agent_display_name, "Maria Silva");
        assert_eq!(sale.business_unit_short_code, "LSO");
        assert_eq!(sale.region, RegionCode::from("CE"));
        assert_eq!(sale.value, Some(RawAmount::Number(250.0)));
        assert_eq!(sale.issue_date, "17/10/2026");
        assert_eq!(sale.agent_code, "10");
        assert_eq!(sale.business_unit_code, "1");
    }

    #[test]
    fn sales_without_agent_or_unit_match_are_dropped() {
        let sales = vec![
            sale(Some("1"), Some("10"), 1.0),
            sale(Some("1"), Some("99"), 2.0),
            sale(Some("7"), Some("10"), 3.0),
            sale(None, Some("10"), 4.0),
            sale(Some("1"), None, 5.0),
            sale(Some("1"), Some("10"), 6.0),
        ];

        let joined = join_records(&sales, &[agent("10", "Ana")], &[unit("1", "LSO", "CE")]);

        let values: Vec<_> = joined.iter().map(|s| s.value.clone()).collect();
        assert_eq!(values, vec![Some(RawAmount::Number(1.0)), Some(RawAmount::Number(6.0))]);
        assert!(joined.len() <= sales.len());
    }

    #[test]
    fn output_follows_sales_order_across_regions() {
        let sales = vec![
            sale(Some("2"), Some("10"), 1.0),
            sale(Some("1"), Some("11"), 2.0),
            sale(Some("2"), Some("11"), 3.0),
        ];
        let joined = join_records(
            &sales,
            &[agent("10", "Ana"), agent("11", "Bruno")],
            &[unit("1", "LSO", "CE"), unit("2", "LTE", "PI")],
        );

        let regions: Vec<_> = joined.iter().map(|s| s.region.as_str()).collect();
        assert_eq!(regions, vec!["PI", "CE", "PI"]);
    }

    #[test]
    fn unknown_region_units_still_join() {
        let joined = join_records(
            &[sale(Some("5"), Some("10"), 1.0)],
            &[agent("10", "Ana")],
            &[unit("5", "XYZ", "UNKNOWN")],
        );

        assert_eq!(joined.len(), 1);
        assert!(joined[0].region.is_unknown());
    }

    #[test]
    fn agent_without_name_joins_with_empty_display_name() {
        let nameless = AgentRecord { agent_code: Some("10".into()), ..Default::default() };
        let joined =
            join_records(&[sale(Some("1"), Some("10"), 1.0)], &[nameless], &[unit("1", "LSO", "CE")]);

        assert_eq!(joined[0].agent_display_name, "");
    }

    #[test]
    fn duplicate_codes_resolve_to_the_last_record() {
        let joined = join_records(
            &[sale(Some("1"), Some("10"), 1.0)],
            &[agent("10", "Maria Silva"), agent("10", "Maria S. Oliveira")],
            &[unit("1", "LSO", "CE"), unit("1", "LTE", "PI")],
        );

        assert_eq!(joined[0].agent_display_name, "Maria S. Oliveira");
        assert_eq!(joined[0].region, RegionCode::from("PI"));
    }
}
