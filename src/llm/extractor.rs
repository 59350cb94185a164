//! Job requirement extraction: raw job description text to structured fields

use crate::error::Result;
use crate::llm::client::GenerationClient;
use crate::llm::prompts;
use crate::model::JobRequirements;
use log::info;

pub struct RequirementsExtractor<'a> {
    client: &'a GenerationClient,
}

impl<'a> RequirementsExtractor<'a> {
    pub fn new(client: &'a GenerationClient) -> Self {
        Self { client }
    }

    /// Single-shot extraction call. The response must be JSON with at
    /// least `required_skills`; anything else fails the run.
    pub async fn extract(&self, job_description: &str) -> Result<JobRequirements> {
        let prompt = prompts::render_extraction(job_description);
        let requirements: JobRequirements = self
            .client
            .complete_json(prompts::SYSTEM_PROMPT, &prompt)
            .await?;

        info!(
            "extracted {} required and {} preferred skills",
            requirements.required_skills.len(),
            requirements.preferred_skills.len()
        );
        Ok(requirements)
    }
}
