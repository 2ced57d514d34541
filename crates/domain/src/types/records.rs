//! ERP record types as returned by the integration fetch endpoints.
//!
//! Field names on the wire are the ERP's upper-case column names. Identifier
//! columns are not consistently typed (the same code can come back as `101`
//! or `"101"`), so every text-like column goes through [`lenient_text`],
//! which normalises numbers to their decimal text form.

use serde::{Deserialize, Deserializer, Serialize};

use super::amount::RawAmount;

/// One order line from `fetch/pedido`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SalesRecord {
    #[serde(rename = "CDEMPRESA", default, deserialize_with = "lenient_text")]
    pub business_unit_code: Option<String>,
    #[serde(rename = "CDREPRESENTANTE", default, deserialize_with = "lenient_text")]
    pub agent_code: Option<String>,
    #[serde(rename = "CDUSUARIOEMISSAO", default, deserialize_with = "lenient_text")]
    pub issuing_user_code: Option<String>,
    #[serde(rename = "FLORIGEMPEDIDO", default, deserialize_with = "lenient_text")]
    pub order_origin_flag: Option<String>,
    #[serde(rename = "CDTIPOPAGAMENTO", default, deserialize_with = "lenient_text")]
    pub payment_type: Option<String>,
    /// Issue date as sent by the ERP (`DD/MM/YYYY`).
    #[serde(rename = "DTEMISSAO", default, deserialize_with = "lenient_text")]
    pub issue_date: Option<String>,
    #[serde(rename = "VLTOTALPEDIDO", default)]
    pub total_value: Option<RawAmount>,
    #[serde(rename = "VLVOLUMEPEDIDO", default)]
    pub total_volume: Option<RawAmount>,
    #[serde(rename = "FLCONTROLEERP", default, deserialize_with = "lenient_text")]
    pub erp_control_flag: Option<String>,
}

/// A sales representative from `fetch/representante`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentRecord {
    #[serde(rename = "CDEMPRESA", default, deserialize_with = "lenient_text")]
    pub company_code: Option<String>,
    #[serde(rename = "CDREPRESENTANTE", default, deserialize_with = "lenient_text")]
    pub agent_code: Option<String>,
    #[serde(rename = "NMREPRESENTANTE", default, deserialize_with = "lenient_text")]
    pub agent_name: Option<String>,
    #[serde(rename = "FLATIVO", default, deserialize_with = "lenient_text")]
    pub active_flag: Option<String>,
}

/// A business unit ("empresa") from `fetch/empresa`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusinessUnitRecord {
    #[serde(rename = "CDEMPRESA", default, deserialize_with = "lenient_text")]
    pub business_unit_code: Option<String>,
    #[serde(rename = "NMEMPRESA", default, deserialize_with = "lenient_text")]
    pub full_name: Option<String>,
    #[serde(rename = "NMEMPRESACURTO", default, deserialize_with = "lenient_text")]
    pub short_code: Option<String>,
    #[serde(rename = "FLATIVO", default, deserialize_with = "lenient_text")]
    pub active_flag: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum WireText {
    Text(String),
    Integer(i64),
    Float(f64),
    Flag(bool),
}

/// Accept text, numbers or booleans for a text column; `null` maps to `None`.
///
/// Whole floats are rendered without a fractional part so that `101.0` and
/// `101` produce the same key.
fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let wire = Option::<WireText>::deserialize(deserializer)?;
    Ok(wire.map(|value| match value {
        WireText::Text(text) => text,
        WireText::Integer(number) => number.to_string(),
        WireText::Float(number) if number.is_finite() && number.fract() == 0.0 => {
            format!("{number:.0}")
        }
        WireText::Float(number) => number.to_string(),
        WireText::Flag(flag) => flag.to_string(),
    }))
}
