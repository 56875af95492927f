//! Output formatters for optimization reports

use crate::config::OutputFormat;
use crate::error::Result;
use crate::output::report::{OptimizationReport, RecommendationSource};
use colored::Colorize;
use std::path::Path;

/// Trait for rendering optimization reports
pub trait OutputFormatter {
    fn format_report(&self, report: &OptimizationReport) -> Result<String>;
    fn supports_format(&self) -> OutputFormat;
}

/// Console formatter with colored score bands
pub struct ConsoleFormatter {
    use_colors: bool,
}

/// JSON formatter for structured output
pub struct JsonFormatter {
    pretty: bool,
}

/// Markdown formatter for saved reports
pub struct MarkdownFormatter;

impl ConsoleFormatter {
    pub fn new(use_colors: bool) -> Self {
        Self { use_colors }
    }

    fn score_line(&self, score: u8) -> String {
        let metric = format!("{}%", score);
        if !self.use_colors {
            return metric;
        }
        match score {
            80..=100 => metric.green().bold().to_string(),
            60..=79 => metric.cyan().bold().to_string(),
            40..=59 => metric.yellow().bold().to_string(),
            _ => metric.red().bold().to_string(),
        }
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(&self, report: &OptimizationReport) -> Result<String> {
        let mut out = String::new();

        out.push_str(&format!("\nATS Score: {}\n", self.score_line(report.ats_score)));

        if let Some(warning) = &report.warning {
            let banner = format!("⚠️  {}", warning);
            if self.use_colors {
                out.push_str(&format!("\n{}\n", banner.yellow()));
            } else {
                out.push_str(&format!("\n{}\n", banner));
            }
        }

        match &report.recommendation_source {
            RecommendationSource::Skipped => {
                out.push_str("\nAI recommendations skipped.\n");
            }
            _ => {
                let heading = "🔍 Resume Improvement Recommendations";
                if self.use_colors {
                    out.push_str(&format!("\n{}\n", heading.bold()));
                } else {
                    out.push_str(&format!("\n{}\n", heading));
                }
                for (i, line) in report.recommendations.iter().enumerate() {
                    out.push_str(&format!("  {}. {}\n", i + 1, line));
                }
            }
        }

        Ok(out)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Console
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, report: &OptimizationReport) -> Result<String> {
        let json = if self.pretty {
            serde_json::to_string_pretty(report)?
        } else {
            serde_json::to_string(report)?
        };
        Ok(json)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Json
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_report(&self, report: &OptimizationReport) -> Result<String> {
        let mut out = String::new();

        out.push_str("# Resume Optimization Report\n\n");
        out.push_str(&format!("- **Resume**: {}\n", report.resume_path));
        out.push_str(&format!(
            "- **Generated**: {}\n",
            report.generated_at.format("%Y-%m-%d %H:%M UTC")
        ));
        out.push_str(&format!("- **ATS Score**: {}%\n\n", report.ats_score));

        if let Some(warning) = &report.warning {
            out.push_str(&format!("> ⚠️ {}\n\n", warning));
        }

        match &report.recommendation_source {
            RecommendationSource::Skipped => {
                out.push_str("_AI recommendations skipped._\n");
            }
            _ => {
                out.push_str("## Improvement Recommendations\n\n");
                for (i, line) in report.recommendations.iter().enumerate() {
                    out.push_str(&format!("{}. {}\n", i + 1, line));
                }
            }
        }

        Ok(out)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Markdown
    }
}

/// Coordinates formatters and optional save-to-file
pub struct ReportGenerator {
    console_formatter: ConsoleFormatter,
    json_formatter: JsonFormatter,
    markdown_formatter: MarkdownFormatter,
}

impl ReportGenerator {
    pub fn new(use_colors: bool) -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(use_colors),
            json_formatter: JsonFormatter::new(true),
            markdown_formatter: MarkdownFormatter,
        }
    }

    pub fn render(&self, report: &OptimizationReport, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Console => self.console_formatter.format_report(report),
            OutputFormat::Json => self.json_formatter.format_report(report),
            OutputFormat::Markdown => self.markdown_formatter.format_report(report),
        }
    }

    pub fn save(
        &self,
        report: &OptimizationReport,
        format: OutputFormat,
        path: &Path,
    ) -> Result<()> {
        // Saved console output drops ANSI colors
        let rendered = match format {
            OutputFormat::Console => ConsoleFormatter::new(false).format_report(report)?,
            other => self.render(report, other)?,
        };
        std::fs::write(path, rendered)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn sample_report() -> OptimizationReport {
        OptimizationReport {
            ats_score: 54,
            recommendations: vec![
                "Add Rust to the skills section.".to_string(),
                "Quantify the pipeline migration work.".to_string(),
                "Mirror the posting's keywords.".to_string(),
            ],
            recommendation_source: RecommendationSource::Generated {
                model: "gpt-3.5-turbo-0125".to_string(),
            },
            warning: None,
            resume_path: "resume.pdf".to_string(),
            generated_at: Utc::now(),
        }
    }

    #[test]
    fn test_console_format_enumerates_recommendations() {
        let formatter = ConsoleFormatter::new(false);
        let output = formatter.format_report(&sample_report()).unwrap();

        assert!(output.contains("ATS Score: 54%"));
        assert!(output.contains("1. Add Rust to the skills section."));
        assert!(output.contains("3. Mirror the posting's keywords."));
    }

    #[test]
    fn test_console_format_shows_warning_banner() {
        let mut report = sample_report();
        report.warning = Some("Recommendation request timed out after 30s".to_string());
        report.recommendation_source = RecommendationSource::Fallback;
        report.recommendations = vec!["Unable to generate improvements".to_string()];

        let output = ConsoleFormatter::new(false).format_report(&report).unwrap();

        assert!(output.contains("timed out"));
        assert!(output.contains("Unable to generate improvements"));
    }

    #[test]
    fn test_json_format_roundtrips() {
        let formatter = JsonFormatter::new(false);
        let output = formatter.format_report(&sample_report()).unwrap();

        let parsed: OptimizationReport = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed.ats_score, 54);
        assert_eq!(parsed.recommendations.len(), 3);
    }

    #[test]
    fn test_markdown_format() {
        let output = MarkdownFormatter.format_report(&sample_report()).unwrap();

        assert!(output.starts_with("# Resume Optimization Report"));
        assert!(output.contains("**ATS Score**: 54%"));
        assert!(output.contains("1. Add Rust to the skills section."));
    }

    #[test]
    fn test_skipped_recommendations() {
        let mut report = sample_report();
        report.recommendation_source = RecommendationSource::Skipped;
        report.recommendations.clear();

        let output = ConsoleFormatter::new(false).format_report(&report).unwrap();
        assert!(output.contains("skipped"));
    }
}
