/// Display-ready output of one collector: a headline value plus optional detail text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricResult {
    pub value: String,
    pub details: String,
}

impl MetricResult {
    /// Split a one-line summary at its first comma.
    ///
    /// Everything before the comma is the value, everything after it is the details.
    /// Both halves are trimmed; a summary without a comma has empty details.
    #[must_use]
    pub fn from_summary(summary: &str) -> Self {
        match summary.split_once(',') {
            Some((value, details)) => Self {
                value: value.trim().to_string(),
                details: details.trim().to_string(),
            },
            None => Self {
                value: summary.trim().to_string(),
                details: String::new(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_at_first_comma() {
        let result = MetricResult::from_summary("17, Most: tools (12)");
        assert_eq!(result.value, "17");
        assert_eq!(result.details, "Most: tools (12)");
    }

    #[test]
    fn test_only_first_comma_splits() {
        let result = MetricResult::from_summary("3, Top: a (1,234)");
        assert_eq!(result.value, "3");
        assert_eq!(result.details, "Top: a (1,234)");
    }

    #[test]
    fn test_no_comma() {
        let result = MetricResult::from_summary("42");
        assert_eq!(result.value, "42");
        assert!(result.details.is_empty());
    }

    #[test]
    fn test_trailing_comma_gives_empty_details() {
        let result = MetricResult::from_summary("5, ");
        assert_eq!(result.value, "5");
        assert!(result.details.is_empty());
    }
}
