//! Run-to-completion tailoring pipeline
//!
//! One invocation: load static data, check the draft cache, and either
//! reuse the cached alignment output or run index -> extract -> retrieve
//! -> generate -> align. Backfill and assembly always run. The services
//! (generation client, embedding model) are constructed here and passed
//! explicitly to the components that need them.

use crate::cache::{draft_fingerprint, CachedDraft, DraftCache};
use crate::config::Config;
use crate::corpus::{index_candidate, RoleIndex, StaticEmbedder, VectorStore};
use crate::engine::{align, backfill};
use crate::error::Result;
use crate::input::DocumentLoader;
use crate::llm::{BulletGenerator, GenerationClient, RequirementsExtractor};
use crate::model::{CandidateData, Experience, GeneratedDraft, TailoredResume};
use log::info;
use std::path::Path;

pub struct TailorPipeline {
    config: Config,
}

/// What a run produced, plus enough context for the console summary.
pub struct TailorReport {
    pub resume: TailoredResume,
    pub from_cache: bool,
    pub corpus_size: usize,
    pub pool_size: usize,
}

impl TailorPipeline {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub async fn run(
        &self,
        candidate_path: &Path,
        job_path: &Path,
        refresh: bool,
    ) -> Result<TailorReport> {
        let candidate_bytes = std::fs::read(candidate_path)?;
        let data = CandidateData::from_slice(&candidate_bytes)?;

        let mut loader = DocumentLoader::new();
        let job_text = loader.extract_text(job_path).await?;

        let fingerprint = draft_fingerprint(&job_text, &candidate_bytes);
        let cache = DraftCache::new(&self.config.cache);

        let cached = if self.config.cache.enabled && !refresh {
            cache.load(&fingerprint)
        } else {
            None
        };

        let (mut experience, summary, skills, from_cache, corpus_size, pool_size) = match cached {
            Some(draft) => {
                info!("reusing cached draft for this job/candidate pair");
                (
                    draft.experience,
                    draft.professional_summary,
                    draft.targeted_skills,
                    true,
                    0,
                    0,
                )
            }
            None => {
                let (experience, draft, corpus_size, pool_size) =
                    self.compute_draft(&data, &job_text).await?;

                if self.config.cache.enabled {
                    cache.store(&CachedDraft {
                        fingerprint,
                        professional_summary: draft.professional_summary.clone(),
                        targeted_skills: draft.targeted_skills.clone(),
                        experience: experience.clone(),
                    })?;
                }

                (
                    experience,
                    draft.professional_summary,
                    draft.targeted_skills,
                    false,
                    corpus_size,
                    pool_size,
                )
            }
        };

        // Static-data phases always re-run, cache or not
        let role_index = RoleIndex::build(&data);
        backfill(
            &mut experience,
            &data.candidate.roles,
            &role_index,
            &self.config.backfill,
        );

        let resume = TailoredResume::assemble(&data.candidate, experience, skills, summary);

        Ok(TailorReport {
            resume,
            from_cache,
            corpus_size,
            pool_size,
        })
    }

    /// The expensive path: index the corpus, extract requirements, retrieve
    /// the bullet pool, generate, and align.
    async fn compute_draft(
        &self,
        data: &CandidateData,
        job_text: &str,
    ) -> Result<(Experience, GeneratedDraft, usize, usize)> {
        let client = GenerationClient::from_config(&self.config.generation)?;

        info!("loading embedding model '{}'", self.config.embedding.model);
        let embedder = StaticEmbedder::load(&self.config.embedding)?;
        let store = VectorStore::new(Box::new(embedder));

        let corpus = index_candidate(data, store);
        let corpus_size = corpus.len();
        info!("indexed {} bullets", corpus_size);

        let requirements = RequirementsExtractor::new(&client).extract(job_text).await?;

        let pool = corpus.retrieve(&requirements.query_terms(), self.config.retrieval.pool_size)?;
        let pool_size = pool.len();
        info!("retrieved a pool of {} bullets", pool_size);

        let draft = BulletGenerator::new(&client)
            .generate(&requirements, &pool)
            .await?;

        let experience = align(&corpus, &draft.rewritten_bullets)?;

        Ok((experience, draft, corpus_size, pool_size))
    }
}
