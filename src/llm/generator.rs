//! Bullet generation: rewrite the retrieved bullet pool for a target job

use crate::error::Result;
use crate::llm::client::GenerationClient;
use crate::llm::prompts;
use crate::model::{GeneratedDraft, JobRequirements};
use log::info;

pub struct BulletGenerator<'a> {
    client: &'a GenerationClient,
}

impl<'a> BulletGenerator<'a> {
    pub fn new(client: &'a GenerationClient) -> Self {
        Self { client }
    }

    /// Single-shot generation call. The returned bullet count need not
    /// match the pool size; whatever comes back is authoritative.
    pub async fn generate(
        &self,
        requirements: &JobRequirements,
        pool: &[String],
    ) -> Result<GeneratedDraft> {
        let requirements_json = serde_json::to_string_pretty(requirements)?;
        let prompt = prompts::render_generation(&requirements_json, pool);
        let draft: GeneratedDraft = self
            .client
            .complete_json(prompts::SYSTEM_PROMPT, &prompt)
            .await?;

        info!(
            "generation returned {} bullets, {} targeted skills",
            draft.rewritten_bullets.len(),
            draft.targeted_skills.len()
        );
        Ok(draft)
    }
}
