//! Text rendering of regional sales reports.
//!
//! Output is pt-BR and fixed regardless of host locale: `.` groups thousands,
//! `,` separates decimals, values carry two decimals. Bold markers use the
//! messaging platform's `*text*` convention.

use std::cmp::Ordering;

use salesdigest_domain::{AgentAggregate, ReportDate};

pub const REPORT_TITLE: &str = "📊 *RELATÓRIO DE VENDAS*";
pub const NO_SALES_MESSAGE: &str = "Nenhuma venda encontrada hoje.";

const SEPARATOR_WIDTH: usize = 30;

/// Render one region's aggregated sales.
///
/// Agents are listed by total value, highest first; equal totals keep their
/// input order, so output of [`aggregate`](super::aggregation::aggregate) renders
/// unchanged. Empty input renders [`NO_SALES_MESSAGE`].
pub fn format_region_report(aggregated: &[(String, AgentAggregate)]) -> String {
    if aggregated.is_empty() {
        return NO_SALES_MESSAGE.to_string();
    }

    let mut ranked: Vec<&(String, AgentAggregate)> = aggregated.iter().collect();
    ranked.sort_by(|(_, a), (_, b)| {
        b.total_value.partial_cmp(&a.total_value).unwrap_or(Ordering::Equal)
    });

    let mut report = format!("{REPORT_TITLE}\n\n");
    let mut grand_total = AgentAggregate::default();

    for (name, totals) in ranked {
        report.push_str(&format!("👤 *{}*\n", abbreviate_name(name)));
        report.push_str(&format!("   📦 Pedidos: {}\n", totals.order_count));
        report.push_str(&format!("   💰 Total: {}\n", format_currency(totals.total_value)));
        report.push_str(&format!("   🛢️ Volume: {} L\n\n", format_decimal(totals.total_volume)));

        grand_total.total_value += totals.total_value;
        grand_total.total_volume += totals.total_volume;
        grand_total.order_count += totals.order_count;
    }

    report.push_str(&"=".repeat(SEPARATOR_WIDTH));
    report.push('\n');
    report.push_str("🎯 *TOTAL GERAL*\n");
    report.push_str(&format!("📦 Total de Pedidos: {}\n", grand_total.order_count));
    report.push_str(&format!("💰 Valor Total: {}\n", format_currency(grand_total.total_value)));
    report.push_str(&format!("🛢️ Volume Total: {} L\n", format_decimal(grand_total.total_volume)));

    report
}

/// Message broadcast to every destination when a run joined no sales at all.
pub fn no_sales_notice() -> String {
    format!("{REPORT_TITLE}\n\n❌ {NO_SALES_MESSAGE}")
}

/// Prefix a report with the destination banner and the report date.
pub fn with_header(destination_name: &str, date: &ReportDate, report: &str) -> String {
    format!("🏢 *{}*\n📅 {}\n\n{}", destination_name.to_uppercase(), date, report)
}

/// `Maria Clara Silva` -> `Maria S.`; single names are returned unchanged.
pub fn abbreviate_name(full_name: &str) -> String {
    let parts: Vec<&str> = full_name.trim().split(' ').collect();
    if parts.len() > 1 {
        let initial = parts.last().and_then(|last| last.chars().next());
        if let Some(initial) = initial {
            return format!("{} {}.", parts[0], initial);
        }
    }
    full_name.to_string()
}

/// `1500.0` -> `R$ 1.500,00`
pub fn format_currency(value: f64) -> String {
    format!("R$ {}", format_decimal(value))
}

/// `1234567.891` -> `1.234.567,89`
pub fn format_decimal(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let fixed = format!("{value:.2}");
    let (sign, digits) = match fixed.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", fixed.as_str()),
    };
    let (integer, fraction) = digits.split_once('.').unwrap_or((digits, "00"));

    let mut grouped = String::with_capacity(integer.len() + integer.len() / 3);
    for (index, digit) in integer.chars().enumerate() {
        if index > 0 && (integer.len() - index) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(digit);
    }

    format!("{sign}{grouped},{fraction}")
}
