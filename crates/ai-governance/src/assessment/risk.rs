use std::collections::BTreeMap;

/// Threshold applied when no recognized risk category is supplied.
pub const DEFAULT_GAP_THRESHOLD: f64 = 3.0;

/// Gap thresholds keyed by EU AI Act risk classification (Art. 6).
#[derive(Debug, Clone, PartialEq)]
pub struct RiskThresholds {
    thresholds: BTreeMap<String, f64>,
}

impl RiskThresholds {
    pub fn standard() -> Self {
        Self::from_entries([
            ("high-risk", 3.0),
            ("limited-risk", 2.5),
            ("minimal-risk", 2.0),
        ])
    }

    pub fn from_entries<I, K>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, f64)>,
        K: Into<String>,
    {
        Self {
            thresholds: entries
                .into_iter()
                .map(|(category, threshold)| (category.into(), threshold))
                .collect(),
        }
    }

    pub fn get(&self, risk_category: &str) -> Option<f64> {
        self.thresholds.get(risk_category).copied()
    }

    /// Threshold for `risk_category`, or `default_threshold` when the category is absent
    /// or unknown.
    pub fn resolve(&self, risk_category: Option<&str>, default_threshold: f64) -> f64 {
        risk_category
            .and_then(|category| self.get(category))
            .unwrap_or(default_threshold)
    }

    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.thresholds.keys().map(String::as_str)
    }
}

impl Default for RiskThresholds {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_categories_override_default() {
        let table = RiskThresholds::standard();
        assert_eq!(table.resolve(Some("high-risk"), 4.0), 3.0);
        assert_eq!(table.resolve(Some("limited-risk"), 4.0), 2.5);
        assert_eq!(table.resolve(Some("minimal-risk"), 4.0), 2.0);
    }

    #[test]
    fn unknown_or_missing_categories_fall_back() {
        let table = RiskThresholds::standard();
        assert_eq!(table.resolve(Some("unacceptable-risk"), 3.0), 3.0);
        assert_eq!(table.resolve(Some("HIGH-RISK"), 2.2), 2.2);
        assert_eq!(table.resolve(None, 2.2), 2.2);
    }

    #[test]
    fn table_extends_without_code_changes() {
        let table = RiskThresholds::from_entries([("gpai-systemic", 3.5)]);
        assert_eq!(table.resolve(Some("gpai-systemic"), 3.0), 3.5);
        assert_eq!(table.categories().collect::<Vec<_>>(), vec!["gpai-systemic"]);
    }
}
