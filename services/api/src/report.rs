use ai_governance::assessment::{
    benchmark_for, AssessmentRequest, AssessmentResponse, AssessmentService, BenchmarkLookup,
};
use ai_governance::config::AppConfig;
use ai_governance::error::AppError;
use clap::Args;
use std::path::{Path, PathBuf};

#[derive(Args, Debug)]
pub(crate) struct AssessArgs {
    /// JSON file holding the scoping data and rated dimensions
    #[arg(long)]
    pub(crate) input: PathBuf,
    /// Print the full response as JSON instead of a text report
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct BenchmarkArgs {
    /// Industry key (financial, healthcare, technology, manufacturing, public_sector)
    #[arg(long)]
    pub(crate) industry: Option<String>,
    /// Print the benchmark as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run_assess(args: AssessArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let service = AssessmentService::from_config(&config.assessment);

    let request = load_request(&args.input)?;
    let response = service.assess(request)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&response)?);
    } else {
        print!("{}", render_assessment(&response));
    }
    Ok(())
}

pub(crate) fn run_benchmarks(args: BenchmarkArgs) -> Result<(), AppError> {
    let lookup = benchmark_for(args.industry.as_deref());

    if args.json {
        println!("{}", serde_json::to_string_pretty(&lookup)?);
    } else {
        print!("{}", render_benchmarks(&lookup));
    }
    Ok(())
}

pub(crate) fn load_request(path: &Path) -> Result<AssessmentRequest, AppError> {
    let raw = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}

pub(crate) fn render_assessment(response: &AssessmentResponse) -> String {
    let mut out = String::new();
    let scoping = &response.scoping;

    out.push_str(&format!("Governance assessment: {}\n", scoping.system_name));
    out.push_str(&format!(
        "Risk category: {} | Deployment: {}\n",
        scoping.risk_category, scoping.deployment_status
    ));
    out.push_str(&format!(
        "Overall score: {:.2} (level {} {})\n",
        response.overall_score, response.maturity_level, response.maturity_label
    ));

    out.push_str("\nDimension scores\n");
    for dimension in &response.dimensions {
        let score = match dimension.dim_score {
            Some(score) => format!("{score:.2}"),
            None => "not scored".to_string(),
        };
        out.push_str(&format!(
            "- {} {}: {} ({} rated, {} n/a)\n",
            dimension.dimension_id,
            dimension.dimension_name,
            score,
            dimension.num_rated,
            dimension.num_na
        ));
    }

    if response.gaps.is_empty() {
        out.push_str("\nGaps: none\n");
    } else {
        out.push_str("\nPrioritized gaps\n");
        for gap in &response.gaps {
            out.push_str(&format!(
                "{}. [{}] {} {} ({:.2})\n   {}\n",
                gap.priority_rank,
                gap.gap_severity.label(),
                gap.dimension_id,
                gap.dimension_name,
                gap.dim_score,
                gap.recommendation
            ));
        }
    }

    let completeness = &response.completeness;
    if completeness.is_complete {
        out.push_str("\nCompleteness: all criteria answered\n");
    } else {
        out.push_str(&format!(
            "\nCompleteness: {} of {} criteria rated, {} n/a, {} unanswered\n",
            completeness.rated_criteria,
            completeness.expected_criteria,
            completeness.not_applicable_criteria,
            completeness.unanswered_criteria
        ));
        if !completeness.missing_dimensions.is_empty() {
            out.push_str(&format!(
                "Missing dimensions: {}\n",
                completeness.missing_dimensions.join(", ")
            ));
        }
    }

    if !completeness.unrecognized_criteria.is_empty() {
        out.push_str(&format!(
            "Criteria outside the rubric: {}\n",
            completeness.unrecognized_criteria.join(", ")
        ));
    }

    if !response.input_warnings.is_empty() {
        out.push_str("\nInput warnings\n");
        for warning in &response.input_warnings {
            out.push_str(&format!("- {}: {:?}\n", warning.field, warning.warning));
        }
    }

    out
}

pub(crate) fn render_benchmarks(lookup: &BenchmarkLookup) -> String {
    let benchmark = &lookup.benchmark;
    let mut out = format!(
        "Industry benchmark: {} ({} assessments)\n",
        benchmark.industry, benchmark.n_assessments
    );
    for (dimension_id, score) in &benchmark.dimensions {
        out.push_str(&format!("- {dimension_id}: {score:.2}\n"));
    }
    out.push_str(&format!(
        "Overall: {:.2} ({})\n",
        benchmark.overall, benchmark.label
    ));
    out.push_str(&format!(
        "Available industries: {}\n",
        lookup.available_industries.join(", ")
    ));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use ai_governance::assessment::{CriterionScore, DimensionResult, ScopingData};

    fn response() -> AssessmentResponse {
        let request = AssessmentRequest {
            scoping: ScopingData::new("Credit Scoring"),
            dimensions: vec![
                DimensionResult::new(
                    "D1",
                    "Risk Management",
                    vec![CriterionScore::rated("D1.1", 4), CriterionScore::rated("D1.2", 4)],
                ),
                DimensionResult::new(
                    "D5",
                    "Human Oversight",
                    vec![CriterionScore::rated("D5.1", 1), CriterionScore::not_applicable("D5.2")],
                ),
            ],
            weights: None,
        };
        AssessmentService::default()
            .assess(request)
            .expect("valid request")
    }

    #[test]
    fn text_report_lists_scores_and_gaps() {
        let report = render_assessment(&response());

        assert!(report.contains("Governance assessment: Credit Scoring"));
        assert!(report.contains("Overall score: 2.50 (level 3 Defined)"));
        assert!(report.contains("- D5 Human Oversight: 1.00 (1 rated, 1 n/a)"));
        assert!(report.contains("1. [critical] D5 Human Oversight (1.00)"));
        assert!(report.contains("Missing dimensions: D1, D2, D3, D4, D5, D6"));
    }

    #[test]
    fn benchmark_table_lists_every_dimension() {
        let report = render_benchmarks(&benchmark_for(Some("technology")));

        assert!(report.starts_with("Industry benchmark: technology (15 assessments)"));
        assert!(report.contains("- D5: 1.80"));
        assert!(report.contains("Overall: 2.47 (Managed)"));
    }

    #[test]
    fn missing_input_file_is_an_io_error() {
        let result = load_request(Path::new("/nonexistent/assessment.json"));
        assert!(matches!(result, Err(AppError::Io(_))));
    }
}
