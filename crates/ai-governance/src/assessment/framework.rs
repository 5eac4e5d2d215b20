use serde::{Deserialize, Serialize};

use super::domain::{CriterionScore, DimensionResult};

/// Canonical governance dimension and the criteria it is rated on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DimensionDefinition {
    pub id: &'static str,
    pub name: &'static str,
    pub article: &'static str,
    pub description: &'static str,
    pub criteria: Vec<String>,
}

impl DimensionDefinition {
    fn new(
        id: &'static str,
        name: &'static str,
        article: &'static str,
        description: &'static str,
        criteria_count: usize,
    ) -> Self {
        Self {
            id,
            name,
            article,
            description,
            criteria: (1..=criteria_count)
                .map(|index| format!("{id}.{index}"))
                .collect(),
        }
    }
}

/// The six-dimension rubric modeled on the EU AI Act requirements for high-risk systems.
#[derive(Debug, Clone)]
pub struct GovernanceFramework {
    dimensions: Vec<DimensionDefinition>,
}

impl GovernanceFramework {
    pub fn standard() -> Self {
        Self {
            dimensions: vec![
                DimensionDefinition::new(
                    "D1",
                    "Risk Management",
                    "Art. 9",
                    "Continuous identification, analysis and mitigation of risks across the AI lifecycle.",
                    6,
                ),
                DimensionDefinition::new(
                    "D2",
                    "Data Governance",
                    "Art. 10",
                    "Quality, provenance, representativeness and bias control of training, validation and test data.",
                    5,
                ),
                DimensionDefinition::new(
                    "D3",
                    "Technical Documentation & Record-Keeping",
                    "Art. 11-12",
                    "Annex IV documentation, automatic event logging and traceability of system behavior.",
                    5,
                ),
                DimensionDefinition::new(
                    "D4",
                    "Transparency",
                    "Art. 13",
                    "Information for deployers and affected persons, explainability and disclosure of AI interaction.",
                    5,
                ),
                DimensionDefinition::new(
                    "D5",
                    "Human Oversight",
                    "Art. 14",
                    "Trained overseers with authority to monitor, interpret, override and stop the system.",
                    5,
                ),
                DimensionDefinition::new(
                    "D6",
                    "Accuracy, Robustness & Cybersecurity",
                    "Art. 15",
                    "Declared performance levels, resilience to errors and attacks, and fallback behavior.",
                    5,
                ),
            ],
        }
    }

    pub fn dimensions(&self) -> &[DimensionDefinition] {
        &self.dimensions
    }

    /// Case-insensitive lookup by dimension id.
    pub fn dimension(&self, dimension_id: &str) -> Option<&DimensionDefinition> {
        self.dimensions
            .iter()
            .find(|definition| definition.id.eq_ignore_ascii_case(dimension_id.trim()))
    }

    pub fn expected_criteria(&self) -> usize {
        self.dimensions
            .iter()
            .map(|definition| definition.criteria.len())
            .sum()
    }

    /// Report how much of the rubric a set of scored dimensions covers.
    ///
    /// Each canonical criterion is matched by id within its own dimension and counts as
    /// rated, N/A, or unanswered. Submitted criteria outside the rubric are listed in
    /// `unrecognized_criteria` and never offset a missing one. A dimension is missing when
    /// it was not submitted or any of its canonical criteria is unanswered. The overall
    /// score is unaffected.
    pub fn completeness(&self, scored: &[DimensionResult]) -> AssessmentCompleteness {
        let mut rated_criteria = 0;
        let mut not_applicable_criteria = 0;
        let mut unanswered_criteria = 0;
        let mut missing_dimensions = Vec::new();
        let mut unrecognized_criteria = Vec::new();

        for definition in &self.dimensions {
            let submitted: Vec<&CriterionScore> = scored
                .iter()
                .filter(|dimension| {
                    dimension
                        .dimension_id
                        .trim()
                        .eq_ignore_ascii_case(definition.id)
                })
                .flat_map(|dimension| dimension.criteria_scores.iter())
                .collect();

            let mut unanswered_here = 0;
            for criterion_id in &definition.criteria {
                let answer = submitted.iter().find(|criterion| {
                    criterion
                        .criterion_id
                        .trim()
                        .eq_ignore_ascii_case(criterion_id)
                });
                match answer {
                    Some(criterion) if criterion.is_na => not_applicable_criteria += 1,
                    Some(criterion) if criterion.score.is_some() => rated_criteria += 1,
                    _ => unanswered_here += 1,
                }
            }

            unrecognized_criteria.extend(
                submitted
                    .iter()
                    .filter(|criterion| {
                        !definition
                            .criteria
                            .iter()
                            .any(|id| criterion.criterion_id.trim().eq_ignore_ascii_case(id))
                    })
                    .map(|criterion| criterion.criterion_id.clone()),
            );

            if unanswered_here > 0 {
                missing_dimensions.push(definition.id.to_string());
            }
            unanswered_criteria += unanswered_here;
        }

        AssessmentCompleteness {
            expected_criteria: self.expected_criteria(),
            rated_criteria,
            not_applicable_criteria,
            unanswered_criteria,
            is_complete: unanswered_criteria == 0,
            missing_dimensions,
            unrecognized_criteria,
        }
    }

    /// Case-insensitive lookup of one criterion within a dimension.
    pub fn criterion(
        &self,
        dimension_id: &str,
        criterion_id: &str,
    ) -> Option<(&DimensionDefinition, &str)> {
        let definition = self.dimension(dimension_id)?;
        definition
            .criteria
            .iter()
            .find(|id| id.eq_ignore_ascii_case(criterion_id.trim()))
            .map(|id| (definition, id.as_str()))
    }
}

impl Default for GovernanceFramework {
    fn default() -> Self {
        Self::standard()
    }
}

/// Coverage of a submission against the canonical rubric.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentCompleteness {
    pub expected_criteria: usize,
    pub rated_criteria: usize,
    pub not_applicable_criteria: usize,
    pub unanswered_criteria: usize,
    pub missing_dimensions: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub unrecognized_criteria: Vec<String>,
    pub is_complete: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_framework_lists_thirty_one_criteria() {
        let framework = GovernanceFramework::standard();
        assert_eq!(framework.dimensions().len(), 6);
        assert_eq!(framework.expected_criteria(), 31);

        let risk = framework.dimension("d1").expect("D1 present");
        assert_eq!(risk.name, "Risk Management");
        assert_eq!(risk.criteria.first().map(String::as_str), Some("D1.1"));
        assert_eq!(risk.criteria.last().map(String::as_str), Some("D1.6"));
        assert!(framework.dimension("D7").is_none());
    }

    #[test]
    fn criterion_lookup_is_scoped_to_its_dimension() {
        let framework = GovernanceFramework::standard();

        let (definition, criterion) = framework.criterion("d5", "d5.3").expect("D5.3 present");
        assert_eq!(definition.name, "Human Oversight");
        assert_eq!(criterion, "D5.3");

        assert!(framework.criterion("D2", "D2.6").is_none());
        assert!(framework.criterion("D2", "D5.1").is_none());
        assert!(framework.criterion("D9", "D9.1").is_none());
    }
}
