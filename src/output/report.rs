//! Report structures for optimization results

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Result of one optimization run: the ATS score plus the recommendation
/// lines and where they came from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptimizationReport {
    /// ATS keyword score (0-100)
    pub ats_score: u8,

    /// Enumerated recommendation lines, blanks removed
    pub recommendations: Vec<String>,

    /// Whether recommendations were AI-generated, a fallback sentinel, or
    /// skipped on request
    pub recommendation_source: RecommendationSource,

    /// Error surfaced during recommendation generation, if any
    pub warning: Option<String>,

    /// Resume file that was analyzed
    pub resume_path: String,

    /// Report generation timestamp
    pub generated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecommendationSource {
    Generated { model: String },
    Fallback,
    Skipped,
}

impl OptimizationReport {
    /// Split free-form recommendation text into display lines, dropping
    /// blank lines and trimming the rest.
    pub fn split_recommendation_lines(text: &str) -> Vec<String> {
        text.lines()
            .map(|line| line.trim().to_string())
            .filter(|line| !line.is_empty())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_recommendation_lines() {
        let text = "1. Add Rust experience.\n\n  2. Quantify achievements.  \n\n3. Mirror job keywords.\n";
        let lines = OptimizationReport::split_recommendation_lines(text);

        assert_eq!(
            lines,
            vec![
                "1. Add Rust experience.",
                "2. Quantify achievements.",
                "3. Mirror job keywords.",
            ]
        );
    }

    #[test]
    fn test_split_empty_text() {
        assert!(OptimizationReport::split_recommendation_lines("").is_empty());
        assert!(OptimizationReport::split_recommendation_lines("\n  \n").is_empty());
    }

    #[test]
    fn test_report_serialization() {
        let report = OptimizationReport {
            ats_score: 54,
            recommendations: vec!["Add keywords".to_string()],
            recommendation_source: RecommendationSource::Generated {
                model: "gpt-3.5-turbo-0125".to_string(),
            },
            warning: None,
            resume_path: "resume.pdf".to_string(),
            generated_at: Utc::now(),
        };

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["ats_score"], 54);
        assert_eq!(json["recommendations"][0], "Add keywords");
    }
}
