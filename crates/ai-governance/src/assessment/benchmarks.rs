use std::collections::BTreeMap;

use serde::Serialize;

use super::scoring::maturity_label;

pub const DEFAULT_INDUSTRY: &str = "default";

/// Synthetic industry averages used for comparison on results pages.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IndustryBenchmark {
    pub industry: &'static str,
    pub dimensions: BTreeMap<&'static str, f64>,
    pub overall: f64,
    pub label: &'static str,
    pub n_assessments: u32,
}

impl IndustryBenchmark {
    fn new(
        industry: &'static str,
        scores: [f64; 6],
        overall: f64,
        n_assessments: u32,
    ) -> Self {
        let dimensions = ["D1", "D2", "D3", "D4", "D5", "D6"]
            .into_iter()
            .zip(scores)
            .collect();
        Self {
            industry,
            dimensions,
            overall,
            label: maturity_label(overall).label(),
            n_assessments,
        }
    }
}

/// Selected benchmark plus the keys a caller may ask for.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BenchmarkLookup {
    pub benchmark: IndustryBenchmark,
    pub available_industries: Vec<&'static str>,
}

fn standard_benchmarks() -> Vec<IndustryBenchmark> {
    vec![
        IndustryBenchmark::new(DEFAULT_INDUSTRY, [2.8, 2.5, 2.3, 2.1, 2.0, 2.6], 2.38, 47),
        IndustryBenchmark::new("financial", [3.2, 3.0, 2.8, 2.5, 2.3, 3.0], 2.80, 12),
        IndustryBenchmark::new("healthcare", [3.0, 2.8, 3.1, 2.7, 2.8, 2.5], 2.82, 8),
        IndustryBenchmark::new("technology", [2.6, 2.9, 2.0, 2.3, 1.8, 3.2], 2.47, 15),
        IndustryBenchmark::new("manufacturing", [2.5, 2.2, 2.4, 1.9, 2.1, 2.8], 2.32, 6),
        IndustryBenchmark::new("public_sector", [2.7, 2.4, 2.9, 2.6, 2.5, 2.1], 2.53, 6),
    ]
}

/// Benchmark for `industry` (case-insensitive), falling back to the cross-industry default.
pub fn benchmark_for(industry: Option<&str>) -> BenchmarkLookup {
    let benchmarks = standard_benchmarks();
    let available_industries = benchmarks.iter().map(|entry| entry.industry).collect();
    let requested = industry.map(|value| value.trim().to_ascii_lowercase());

    let mut selected = None;
    let mut fallback = None;
    for entry in benchmarks {
        if requested.as_deref() == Some(entry.industry) {
            selected = Some(entry);
        } else if entry.industry == DEFAULT_INDUSTRY {
            fallback = Some(entry);
        }
    }

    // The default row is always present in the standard table.
    let benchmark = selected
        .or(fallback)
        .unwrap_or_else(|| IndustryBenchmark::new(DEFAULT_INDUSTRY, [0.0; 6], 0.0, 0));

    BenchmarkLookup {
        benchmark,
        available_industries,
    }
}
