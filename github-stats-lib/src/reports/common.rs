//! Formatting shared by the report generators.

use crate::metrics::{MetricValue, format_count, format_ratio};

/// Pretty-print a breakdown value.
pub fn format_metric_value(value: &MetricValue) -> String {
    match value {
        MetricValue::UInt(u) => format_count(*u),
        MetricValue::Float(f) => format_ratio(*f),
        MetricValue::Boolean(b) => if *b { "yes" } else { "no" }.to_string(),
        MetricValue::String(s) => s.to_string(),
        MetricValue::Ranking(entries) => {
            if entries.is_empty() {
                return "none".to_string();
            }

            let mut result = String::new();
            for (i, entry) in entries.iter().enumerate() {
                if i > 0 {
                    result.push_str(", ");
                }
                result.push_str(&format!("{} ({})", entry.name, format_count(entry.count)));
            }
            result
        }
    }
}

/// Group the digits of a headline value when it is a plain count.
pub fn format_headline(value: &str) -> String {
    value.parse::<u64>().map_or_else(|_| value.to_string(), format_count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::RepoCount;

    #[test]
    fn test_format_scalars() {
        assert_eq!(format_metric_value(&MetricValue::UInt(1234)), "1,234");
        assert_eq!(format_metric_value(&MetricValue::Float(2.0)), "2.00");
        assert_eq!(format_metric_value(&MetricValue::Float(f64::INFINITY)), "∞");
        assert_eq!(format_metric_value(&MetricValue::Boolean(true)), "yes");
        assert_eq!(format_metric_value(&MetricValue::String("abc".into())), "abc");
    }

    #[test]
    fn test_format_ranking() {
        let ranking = MetricValue::Ranking(vec![RepoCount::new("tools", 1200), RepoCount::new("a", 5)]);
        assert_eq!(format_metric_value(&ranking), "tools (1,200), a (5)");
        assert_eq!(format_metric_value(&MetricValue::Ranking(Vec::new())), "none");
    }

    #[test]
    fn test_format_headline() {
        assert_eq!(format_headline("1234567"), "1,234,567");
        assert_eq!(format_headline("17"), "17");
        assert_eq!(format_headline("n/a"), "n/a");
    }
}
