use super::common::{format_headline, format_metric_value};
use crate::Result;
use crate::client::RateLimitStatus;
use crate::collection::AggregateReport;
use crate::metrics::format_count;
use core::fmt::Write;
use owo_colors::OwoColorize;

const METRIC_HEADER: &str = "Metric";
const VALUE_HEADER: &str = "Value";
const DETAILS_HEADER: &str = "Details";

/// What the console report shows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConsoleOptions {
    pub use_colors: bool,

    /// Append the per-metric breakdown after the summary table.
    pub detailed: bool,
}

struct Row {
    metric: String,
    value: String,
    details: String,
}

pub fn generate<W: Write>(report: &AggregateReport, rate_limit: Option<&RateLimitStatus>, options: ConsoleOptions, writer: &mut W) -> Result<()> {
    let use_colors = options.use_colors;

    let title = format!("GitHub Stats for: {}", report.account());
    if use_colors {
        writeln!(writer, "{}", title.bold().cyan())?;
    } else {
        writeln!(writer, "{title}")?;
    }
    writeln!(writer)?;

    let rows: Vec<Row> = report
        .entries()
        .iter()
        .map(|entry| Row {
            metric: entry.kind.to_string(),
            value: format_headline(&entry.result.value),
            details: if entry.recovered.is_some() {
                format!("{} [data unavailable]", entry.result.details)
            } else {
                entry.result.details.clone()
            },
        })
        .collect();

    let metric_width = column_width(METRIC_HEADER, rows.iter().map(|r| r.metric.as_str()));
    let value_width = column_width(VALUE_HEADER, rows.iter().map(|r| r.value.as_str()));

    let header = format!("{METRIC_HEADER:<metric_width$}  {VALUE_HEADER:>value_width$}  {DETAILS_HEADER}");
    let rule = format!("{}  {}  {}", "─".repeat(metric_width), "─".repeat(value_width), "─".repeat(DETAILS_HEADER.len()));
    if use_colors {
        writeln!(writer, "{}", header.bold().cyan())?;
        writeln!(writer, "{}", rule.cyan())?;
    } else {
        writeln!(writer, "{header}")?;
        writeln!(writer, "{rule}")?;
    }

    for row in &rows {
        // pad before styling so escape codes do not count toward the width
        let metric = format!("{:<metric_width$}", row.metric);
        let value = format!("{:>value_width$}", row.value);
        if use_colors {
            writeln!(writer, "{}  {}  {}", metric.bold(), value.bold().green(), row.details.dimmed())?;
        } else {
            writeln!(writer, "{metric}  {value}  {}", row.details)?;
        }
    }

    if options.detailed {
        write_breakdown(report, use_colors, writer)?;
    }

    if let Some(status) = rate_limit {
        writeln!(writer)?;
        write_rate_limit(status, use_colors, writer)?;
    }

    Ok(())
}

fn write_breakdown<W: Write>(report: &AggregateReport, use_colors: bool, writer: &mut W) -> Result<()> {
    for entry in report.entries() {
        let details = entry.details();
        let max_name_len = details.iter().map(|d| d.name.len()).max().unwrap_or(0);

        writeln!(writer)?;
        if use_colors {
            writeln!(writer, "{}", entry.kind.to_string().bold())?;
        } else {
            writeln!(writer, "{}", entry.kind)?;
        }

        for detail in &details {
            writeln!(writer, "  {:<width$} : {}", detail.name, format_metric_value(&detail.value), width = max_name_len)?;
        }
    }

    Ok(())
}

/// Write the `Rate Limit: <remaining>/<limit> remaining` line, colored by how much is left.
pub fn write_rate_limit<W: Write>(status: &RateLimitStatus, use_colors: bool, writer: &mut W) -> Result<()> {
    let remaining = format_count(status.remaining);
    let limit = format_count(status.limit);

    if use_colors {
        let percentage = status.percentage();
        let remaining = if percentage > 50.0 {
            remaining.green().to_string()
        } else if percentage > 20.0 {
            remaining.yellow().to_string()
        } else {
            remaining.red().to_string()
        };
        writeln!(writer, "{} {remaining}{}", "Rate Limit:".dimmed(), format!("/{limit} remaining").dimmed())?;
    } else {
        writeln!(writer, "Rate Limit: {remaining}/{limit} remaining")?;
    }

    Ok(())
}

fn column_width<'a>(header: &str, values: impl Iterator<Item = &'a str>) -> usize {
    values.map(|v| v.chars().count()).chain([header.len()]).max().unwrap_or(0)
}
