//! Per-agent aggregation and numeric coercion.
//!
//! Coercion is deliberately permissive: a field that cannot be read as a
//! number contributes `0.0` and the order is still counted. Text values only
//! lose their `R$` marker and spaces before parsing with `.` as the decimal
//! separator; thousands separators are not normalised, so `"R$ 1.500,00"`
//! does not parse and counts as zero. Underscore digit separators and
//! non-finite values (`inf`, `nan`) count as zero too.

use std::cmp::Ordering;
use std::collections::HashMap;

use salesdigest_domain::{AgentAggregate, JoinedSale, RawAmount};
use tracing::debug;

const CURRENCY_MARKER: &str = "R$";

/// Coerce a monetary value (currency marker allowed).
pub fn coerce_value(raw: Option<&RawAmount>) -> f64 {
    coerce(raw, true)
}

/// Coerce a volume (no currency marker handling).
pub fn coerce_volume(raw: Option<&RawAmount>) -> f64 {
    coerce(raw, false)
}

fn coerce(raw: Option<&RawAmount>, strip_currency: bool) -> f64 {
    match raw {
        Some(RawAmount::Number(number)) if number.is_finite() => *number,
        Some(RawAmount::Flag(flag)) => f64::from(u8::from(*flag)),
        Some(RawAmount::Text(text)) => parse_text(text, strip_currency).unwrap_or_else(|| {
            debug!(raw = %text, "Unparseable amount counted as zero");
            0.0
        }),
        _ => 0.0,
    }
}

fn parse_text(text: &str, strip_currency: bool) -> Option<f64> {
    let without_marker =
        if strip_currency { text.replace(CURRENCY_MARKER, "") } else { text.to_string() };
    let cleaned = without_marker.replace(' ', "");

    cleaned.trim().parse::<f64>().ok().filter(|number| number.is_finite())
}

/// Aggregate one region's sales per agent display name.
///
/// The result is sorted by total value, highest first; agents with equal
/// totals keep the order in which they were first seen.
pub fn aggregate(bucket: &[JoinedSale]) -> Vec<(String, AgentAggregate)> {
    let mut positions: HashMap<&str, usize> = HashMap::new();
    let mut totals: Vec<(String, AgentAggregate)> = Vec::new();

    for sale in bucket {
        let value = coerce_value(sale.value.as_ref());
        let volume = coerce_volume(sale.volume.as_ref());

        let index = *positions.entry(sale.agent_display_name.as_str()).or_insert_with(|| {
            totals.push((sale.agent_display_name.clone(), AgentAggregate::default()));
            totals.len() - 1
        });
        totals[index].1.record(value, volume);
    }

    totals.sort_by(|(_, a), (_, b)| {
        b.total_value.partial_cmp(&a.total_value).unwrap_or(Ordering::Equal)
    });
    totals
}
