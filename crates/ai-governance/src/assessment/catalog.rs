use std::collections::BTreeMap;

use super::domain::GapSeverity;

/// Severity-graded remediation advice per governance dimension.
///
/// Lookups never fail: a missing severity falls back to the dimension's `moderate` entry and
/// an unknown dimension yields an empty advisory.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecommendationCatalog {
    entries: BTreeMap<String, BTreeMap<GapSeverity, String>>,
}

impl RecommendationCatalog {
    pub fn standard() -> Self {
        let mut catalog = Self::default();
        for (dimension_id, [critical, significant, moderate]) in STANDARD_RECOMMENDATIONS {
            catalog.insert(dimension_id, GapSeverity::Critical, critical);
            catalog.insert(dimension_id, GapSeverity::Significant, significant);
            catalog.insert(dimension_id, GapSeverity::Moderate, moderate);
        }
        catalog
    }

    pub fn insert(
        &mut self,
        dimension_id: impl Into<String>,
        severity: GapSeverity,
        advice: impl Into<String>,
    ) {
        self.entries
            .entry(normalize_id(&dimension_id.into()))
            .or_default()
            .insert(severity, advice.into());
    }

    pub fn with_entry(
        mut self,
        dimension_id: impl Into<String>,
        severity: GapSeverity,
        advice: impl Into<String>,
    ) -> Self {
        self.insert(dimension_id, severity, advice);
        self
    }

    pub fn lookup(&self, dimension_id: &str, severity: GapSeverity) -> &str {
        let Some(by_severity) = self.entries.get(&normalize_id(dimension_id)) else {
            return "";
        };
        by_severity
            .get(&severity)
            .or_else(|| by_severity.get(&GapSeverity::Moderate))
            .map(String::as_str)
            .unwrap_or("")
    }

    pub fn dimension_ids(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

const STANDARD_RECOMMENDATIONS: [(&str, [&str; 3]); 6] = [
    (
        "D1",
        [
            "Immediate action: establish at least a basic AI risk register and appoint an accountable risk owner. Without any risk management there is acute non-compliance with Art. 9 EU AI Act, exposing the organization to fines of up to 3% of worldwide turnover.",
            "Formalize the existing risk management: define risk classes, assessment criteria and review cycles. Introduce lifecycle monitoring with clear escalation paths. Quick win: adapt a risk register template from ISO 31000.",
            "Integrate AI risk management with enterprise risk management. Introduce quantitative risk metrics and automated threshold monitoring. Benchmark against industry standards.",
        ],
    ),
    (
        "D2",
        [
            "Immediate action: document every training data source and run an initial bias review. Without data governance, conformity with Art. 10 cannot be demonstrated. Quick win: build a data inventory.",
            "Introduce systematic data quality processes: define metrics for completeness, timeliness and representativeness. Establish bias detection pipelines and data lineage documentation.",
            "Extend data governance with continuous data quality monitoring and automated drift detection. Define fairness KPIs and audit training data regularly.",
        ],
    ),
    (
        "D3",
        [
            "Immediate action: produce the technical documentation required by Art. 11 and Annex IV EU AI Act. Without it no declaration of conformity is possible. Quick win: start from an Annex IV documentation template.",
            "Complete the technical documentation and introduce automated logging. Define a versioning strategy for models, data and configuration.",
            "Automate documentation upkeep through CI/CD integration. Emit machine-readable logs and keep audit trails for every model decision.",
        ],
    ),
    (
        "D4",
        [
            "Immediate action: meet the minimum information duties of Art. 13. Users must know they are interacting with an AI system. Quick win: publish an AI disclosure and basic usage information.",
            "Strengthen explainability with XAI methods such as SHAP or LIME and set up clear channels for transparency requests. Document system limits and areas of uncertainty.",
            "Offer audience-specific explanations: technical detail for auditors and plain language for end users. Publish proactive transparency reports for stakeholders.",
        ],
    ),
    (
        "D5",
        [
            "Immediate action: designate at least one trained overseer with authority to intervene (Art. 14). Operating a high-risk AI system without human oversight is not permitted. Quick win: implement an emergency stop mechanism.",
            "Establish a structured human oversight framework: define oversight roles, training programmes and intervention protocols. Add measures against automation bias.",
            "Tune human-AI interaction: scale oversight intensity with the risk of the situation. Hold regular calibration sessions and maintain feedback loops.",
        ],
    ),
    (
        "D6",
        [
            "Immediate action: define minimum performance thresholds and a fallback mechanism for system failures (Art. 15). Quick win: set up a monitoring dashboard for the key performance indicators.",
            "Raise technical robustness: add cybersecurity controls, adversarial testing and continuous performance monitoring. Define graceful degradation strategies.",
            "Build a resilience programme: chaos engineering for AI systems, automated regression tests, and data or concept drift monitoring with automatic alerts.",
        ],
    ),
];

fn normalize_id(dimension_id: &str) -> String {
    dimension_id.trim().to_ascii_uppercase()
}
