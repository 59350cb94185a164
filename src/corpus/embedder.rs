//! Text embedding behind a trait seam so engine logic stays testable
//! without model files

use crate::config::EmbeddingConfig;
use crate::error::{Result, ResumeTailorError};
use model2vec_rs::model::StaticModel;

/// Anything that can turn text into fixed-width vectors.
pub trait Embedder: Send + Sync {
    fn embed(&self, texts: &[String]) -> Result<Vec<Vec<f32>>>;

    fn embed_single(&self, text: &str) -> Result<Vec<f32>> {
        let mut vectors = self.embed(std::slice::from_ref(&text.to_string()))?;
        vectors
            .pop()
            .ok_or_else(|| ResumeTailorError::Embedding("embedder returned no vector".to_string()))
    }
}

/// Model2Vec static embeddings. `model` may be a HuggingFace repo id
/// (downloaded on first use) or a local model directory.
pub struct StaticEmbedder {
    model: StaticModel,
    model_name: String,
}

impl StaticEmbedder {
    pub fn load(config: &EmbeddingConfig) -> Result<Self> {
        let model = StaticModel::from_pretrained(&config.model, None, None, None)
            .map_err(|e| {
                ResumeTailorError::Embedding(format!(
                    "Failed to load embedding model '{}': {}",
                    config.model, e
                ))
            })?;

        Ok(Self {
            model,
            model_name: config.model.clone(),
        })
    }

    pub fn model_name(&self) -> &str {
        &self.model_name
    }
}

impl Embedder for StaticEmbedder {
    fn embed(&self, texts: &[String]) -> Result<Vec<Vec<f32>>> {
        Ok(self.model.encode(texts))
    }

    fn embed_single(&self, text: &str) -> Result<Vec<f32>> {
        Ok(self.model.encode_single(text))
    }
}
