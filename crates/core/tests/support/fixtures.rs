//! Record builders shaped like the ERP fetch payloads.

use salesdigest_domain::{AgentRecord, BusinessUnitRecord, RawAmount, ReportDate, SalesRecord};

pub fn report_date() -> ReportDate {
    "17/10/2026".parse().unwrap()
}

pub fn sale(unit: &str, agent: &str, value: f64, volume: f64) -> SalesRecord {
    SalesRecord {
        business_unit_code: Some(unit.into()),
        agent_code: Some(agent.into()),
        issue_date: Some("17/10/2026".into()),
        total_value: Some(RawAmount::Number(value)),
        total_volume: Some(RawAmount::Number(volume)),
        ..SalesRecord::default()
    }
}

pub fn agent(code: &str, name: &str) -> AgentRecord {
    AgentRecord {
        company_code: Some("1".into()),
        agent_code: Some(code.into()),
        agent_name: Some(name.into()),
        active_flag: Some("S".into()),
    }
}

pub fn unit(code: &str, short_code: &str) -> BusinessUnitRecord {
    BusinessUnitRecord {
        business_unit_code: Some(code.into()),
        full_name: Some(format!("Unidade {short_code}")),
        short_code: Some(short_code.into()),
        active_flag: Some("S".into()),
    }
}
