//! Optimization pipeline: extraction, scoring, and recommendation
//!
//! One linear pass per invocation. Extraction failure aborts the run;
//! recommendation failure degrades to a sentinel and the run completes.

use crate::config::Config;
use crate::error::{Result, ResumeOptimizerError};
use crate::input::manager::InputManager;
use crate::llm::client::{
    RecommendationClient, GENERATION_FAILED_SENTINEL, NOT_INITIALIZED_SENTINEL,
};
use crate::output::report::{OptimizationReport, RecommendationSource};
use crate::processing::ats::AtsScorer;
use chrono::Utc;
use log::{error, info, warn};
use std::path::{Path, PathBuf};

/// Job description input: a file on disk or inline text.
#[derive(Debug, Clone)]
pub enum JobInput {
    File(PathBuf),
    Inline(String),
}

pub struct Optimizer {
    config: Config,
    input_manager: InputManager,
    scorer: AtsScorer,
    client: RecommendationClient,
    credential_warning: Option<String>,
}

impl Optimizer {
    /// Resolve the credential once and build the pipeline. A missing key is
    /// not fatal here: scoring still runs, recommendations fall back to the
    /// uninitialized sentinel.
    pub fn new(config: Config) -> Result<Self> {
        let (api_key, credential_warning) = match config.resolve_api_key() {
            Ok(key) => (Some(key), None),
            Err(e) => {
                warn!("Recommendations disabled: {}", e);
                (None, Some(e.to_string()))
            }
        };
        Self::with_api_key(config, api_key, credential_warning)
    }

    /// Build the pipeline with an explicitly supplied credential, bypassing
    /// environment and key-file resolution.
    pub fn with_api_key(
        config: Config,
        api_key: Option<String>,
        credential_warning: Option<String>,
    ) -> Result<Self> {
        let client = RecommendationClient::new(api_key, config.api.clone())?;

        Ok(Self {
            config,
            input_manager: InputManager::new(),
            scorer: AtsScorer::new(),
            client,
            credential_warning,
        })
    }

    pub fn has_credential(&self) -> bool {
        self.client.is_initialized()
    }

    /// Run one optimization pass: extract, score, recommend, report.
    pub async fn optimize(
        &mut self,
        resume_path: &Path,
        job: JobInput,
        skip_llm: bool,
    ) -> Result<OptimizationReport> {
        let job_text = self.resolve_job_text(job).await?;
        if job_text.trim().is_empty() {
            return Err(ResumeOptimizerError::InvalidInput(
                "Job description is empty".to_string(),
            ));
        }

        info!("Extracting resume text: {}", resume_path.display());
        let resume_text = self.input_manager.extract_text(resume_path).await?;
        if resume_text.trim().is_empty() {
            // Hard stop: no scoring or network call for an unreadable resume.
            return Err(ResumeOptimizerError::Extraction(format!(
                "No text could be extracted from '{}'",
                resume_path.display()
            )));
        }

        info!("Scoring resume against job description");
        let ats_score = self.scorer.score(&resume_text, &job_text);

        let (recommendations, recommendation_source, warning) = if skip_llm {
            (Vec::new(), RecommendationSource::Skipped, None)
        } else {
            self.generate_recommendations(&resume_text, &job_text).await
        };

        Ok(OptimizationReport {
            ats_score,
            recommendations,
            recommendation_source,
            warning,
            resume_path: resume_path.to_string_lossy().to_string(),
            generated_at: Utc::now(),
        })
    }

    async fn resolve_job_text(&mut self, job: JobInput) -> Result<String> {
        match job {
            JobInput::File(path) => self.input_manager.extract_text(&path).await,
            JobInput::Inline(text) => Ok(text),
        }
    }

    async fn generate_recommendations(
        &self,
        resume_text: &str,
        job_text: &str,
    ) -> (Vec<String>, RecommendationSource, Option<String>) {
        if !self.client.is_initialized() {
            return (
                vec![NOT_INITIALIZED_SENTINEL.to_string()],
                RecommendationSource::Fallback,
                self.credential_warning.clone(),
            );
        }

        match self.client.recommend(resume_text, job_text).await {
            Ok(text) => {
                let lines = OptimizationReport::split_recommendation_lines(&text);
                if lines.is_empty() {
                    warn!("Recommendation response was empty");
                    (
                        vec![GENERATION_FAILED_SENTINEL.to_string()],
                        RecommendationSource::Fallback,
                        Some("Recommendation response was empty".to_string()),
                    )
                } else {
                    (
                        lines,
                        RecommendationSource::Generated {
                            model: self.config.api.model.clone(),
                        },
                        None,
                    )
                }
            }
            Err(e) => {
                error!("Improvement generation failed: {}", e);
                (
                    vec![GENERATION_FAILED_SENTINEL.to_string()],
                    RecommendationSource::Fallback,
                    Some(e.to_string()),
                )
            }
        }
    }
}

/// Validate that both required inputs were supplied before the pipeline
/// starts. Missing inputs are an explicit error, not a silent no-op.
pub fn require_inputs(resume: &Path, job: Option<JobInput>) -> Result<JobInput> {
    match job {
        Some(job) if !resume.as_os_str().is_empty() => Ok(job),
        _ => Err(ResumeOptimizerError::InvalidInput(
            "Both a resume file and a job description are required (use --job or --job-text)"
                .to_string(),
        )),
    }
}
