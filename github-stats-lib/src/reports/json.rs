use crate::Result;
use crate::client::RateLimitStatus;
use crate::collection::AggregateReport;
use crate::metrics::MetricValue;
use core::fmt::Write;
use serde_json::json;

pub fn generate<W: Write>(report: &AggregateReport, rate_limit: Option<&RateLimitStatus>, writer: &mut W) -> Result<()> {
    let mut metrics = Vec::with_capacity(report.entries().len());

    for entry in report.entries() {
        let mut breakdown = serde_json::Map::new();
        for detail in entry.details() {
            let _ = breakdown.insert(detail.name.to_string(), metric_value_to_json(&detail.value));
        }

        metrics.push(json!({
            "metric": entry.kind.to_string(),
            "value": entry.result.value,
            "details": entry.result.details,
            "recovered_from": entry.recovered.as_ref().map(ToString::to_string),
            "breakdown": breakdown,
        }));
    }

    let failures: Vec<_> = report
        .failures()
        .iter()
        .map(|f| {
            json!({
                "metric": f.kind.to_string(),
                "error": format!("{:#}", f.error),
            })
        })
        .collect();

    let output = json!({
        "account": report.account().as_str(),
        "collected_at": report.collected_at().to_rfc3339(),
        "metrics": metrics,
        "failures": failures,
        "rate_limit": rate_limit.map(|status| json!({
            "remaining": status.remaining,
            "limit": status.limit,
            "reset_at": status.reset_at.to_rfc3339(),
        })),
    });

    write!(writer, "{}", serde_json::to_string_pretty(&output)?)?;
    Ok(())
}

fn metric_value_to_json(value: &MetricValue) -> serde_json::Value {
    match value {
        MetricValue::UInt(u) => json!(u),
        // non-finite ratios have no JSON number form
        MetricValue::Float(f) if f.is_finite() => json!(f),
        MetricValue::Float(_) => serde_json::Value::Null,
        MetricValue::Boolean(b) => json!(b),
        MetricValue::String(s) => json!(s.as_str()),
        MetricValue::Ranking(entries) => json!(
            entries
                .iter()
                .map(|e| json!({ "name": e.name.as_str(), "count": e.count }))
                .collect::<Vec<_>>()
        ),
    }
}
