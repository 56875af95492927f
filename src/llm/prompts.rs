//! Prompt templates for resume improvement recommendations

/// System persona for the recommendation request.
pub const SYSTEM_PROMPT: &str =
    "You are an expert career coach specializing in resume optimization.";

const IMPROVEMENT_TEMPLATE: &str = r#"Analyze this resume and job description:
Resume: {resume}
Job Description: {job}
Provide 3 strategic, data-driven improvement recommendations."#;

/// Parameters for prompt template substitution
#[derive(Debug, Clone)]
pub struct PromptParams {
    pub resume_content: String,
    pub job_content: String,
}

#[derive(Debug, Clone)]
pub struct PromptTemplates {
    pub improvement: String,
}

impl Default for PromptTemplates {
    fn default() -> Self {
        Self {
            improvement: IMPROVEMENT_TEMPLATE.to_string(),
        }
    }
}

impl PromptTemplates {
    /// Render the user message for the improvement request
    pub fn render_improvement(&self, params: &PromptParams) -> String {
        self.improvement
            .replace("{resume}", &params.resume_content)
            .replace("{job}", &params.job_content)
    }
}
