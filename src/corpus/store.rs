//! In-process vector collection over bullet texts
//!
//! Implements the store contract the engine depends on: `add` with
//! caller-supplied ids (re-adding an id overwrites), `query` returning
//! matches ordered by increasing cosine distance.

use crate::corpus::embedder::Embedder;
use crate::error::{Result, ResumeTailorError};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Role provenance carried with every indexed bullet.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BulletMetadata {
    pub candidate_name: String,
    pub resume_id: String,
    pub company: String,
    pub title: String,
    pub dates: String,
    pub skills: Vec<String>,
    pub confidence: String,
    pub focus: String,
}

/// One search hit. Matches come back closest first.
#[derive(Debug, Clone)]
pub struct QueryMatch {
    pub id: String,
    pub document: String,
    pub metadata: BulletMetadata,
    pub distance: f32,
}

struct Entry {
    id: String,
    document: String,
    metadata: BulletMetadata,
    embedding: Vec<f32>,
}

pub struct VectorStore {
    embedder: Box<dyn Embedder>,
    entries: Vec<Entry>,
    by_id: HashMap<String, usize>,
}

impl VectorStore {
    pub fn new(embedder: Box<dyn Embedder>) -> Self {
        Self {
            embedder,
            entries: Vec::new(),
            by_id: HashMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Insert documents under caller-supplied ids. Re-adding an existing id
    /// replaces the previous entry, so re-indexing the same data is a no-op.
    pub fn add(
        &mut self,
        ids: Vec<String>,
        documents: Vec<String>,
        metadatas: Vec<BulletMetadata>,
    ) -> Result<()> {
        if ids.len() != documents.len() || ids.len() != metadatas.len() {
            return Err(ResumeTailorError::VectorStore(format!(
                "mismatched add lengths: {} ids, {} documents, {} metadatas",
                ids.len(),
                documents.len(),
                metadatas.len()
            )));
        }

        let embeddings = self.embedder.embed(&documents)?;
        if embeddings.len() != documents.len() {
            return Err(ResumeTailorError::VectorStore(format!(
                "embedder returned {} vectors for {} documents",
                embeddings.len(),
                documents.len()
            )));
        }

        for ((id, document), (metadata, embedding)) in ids
            .into_iter()
            .zip(documents)
            .zip(metadatas.into_iter().zip(embeddings))
        {
            match self.by_id.get(&id).copied() {
                Some(slot) => {
                    self.entries[slot] = Entry {
                        id,
                        document,
                        metadata,
                        embedding,
                    };
                }
                None => {
                    self.by_id.insert(id.clone(), self.entries.len());
                    self.entries.push(Entry {
                        id,
                        document,
                        metadata,
                        embedding,
                    });
                }
            }
        }

        Ok(())
    }

    /// Similarity search: up to `n_results` entries, closest first. Shrinks
    /// to the collection size; no minimum-similarity cutoff.
    pub fn query(&self, text: &str, n_results: usize) -> Result<Vec<QueryMatch>> {
        if self.entries.is_empty() || n_results == 0 {
            return Ok(Vec::new());
        }

        let query_embedding = self.embedder.embed_single(text)?;

        let mut scored: Vec<(f32, &Entry)> = Vec::with_capacity(self.entries.len());
        for entry in &self.entries {
            let distance = cosine_distance(&query_embedding, &entry.embedding)?;
            scored.push((distance, entry));
        }

        scored.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(std::cmp::Ordering::Equal));
        scored.truncate(n_results);

        Ok(scored
            .into_iter()
            .map(|(distance, entry)| QueryMatch {
                id: entry.id.clone(),
                document: entry.document.clone(),
                metadata: entry.metadata.clone(),
                distance,
            })
            .collect())
    }
}

/// Cosine distance (1 - cosine similarity). Degenerate vectors score as
/// maximally distant rather than erroring.
fn cosine_distance(a: &[f32], b: &[f32]) -> Result<f32> {
    if a.len() != b.len() {
        return Err(ResumeTailorError::VectorStore(format!(
            "embedding dimensions don't match: {} vs {}",
            a.len(),
            b.len()
        )));
    }

    let dot: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        return Ok(1.0);
    }

    Ok(1.0 - dot / (norm_a * norm_b))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Deterministic embedder: maps each text to a 3-dim vector from simple
    /// character statistics so nearest-neighbor relationships are stable.
    struct StubEmbedder;

    impl Embedder for StubEmbedder {
        fn embed(&self, texts: &[String]) -> Result<Vec<Vec<f32>>> {
            Ok(texts.iter().map(|t| stub_vector(t)).collect())
        }
    }

    fn stub_vector(text: &str) -> Vec<f32> {
        let len = text.len() as f32;
        let vowels = text.chars().filter(|c| "aeiou".contains(*c)).count() as f32;
        let first = text.bytes().next().unwrap_or(0) as f32;
        vec![len, vowels * 10.0, first]
    }

    fn meta(title: &str) -> BulletMetadata {
        BulletMetadata {
            candidate_name: "Jane Doe".to_string(),
            resume_id: "r1".to_string(),
            company: "Acme".to_string(),
            title: title.to_string(),
            dates: "2020-01 - 2021-01".to_string(),
            skills: vec![],
            confidence: "neutral".to_string(),
            focus: String::new(),
        }
    }

    fn store_with(texts: &[&str]) -> VectorStore {
        let mut store = VectorStore::new(Box::new(StubEmbedder));
        let ids = (0..texts.len()).map(|i| format!("b{}", i)).collect();
        let docs = texts.iter().map(|t| t.to_string()).collect();
        let metas = texts.iter().map(|_| meta("Engineer")).collect();
        store.add(ids, docs, metas).unwrap();
        store
    }

    #[test]
    fn test_query_orders_by_distance() {
        let store = store_with(&["short", "a much longer bullet text", "shorty"]);
        let matches = store.query("short", 3).unwrap();
        assert_eq!(matches.len(), 3);
        assert_eq!(matches[0].document, "short");
        assert!(matches[0].distance <= matches[1].distance);
        assert!(matches[1].distance <= matches[2].distance);
    }

    #[test]
    fn test_query_shrinks_to_corpus_size() {
        let store = store_with(&["one", "two", "three"]);
        let matches = store.query("anything", 10).unwrap();
        assert_eq!(matches.len(), 3);
    }

    #[test]
    fn test_query_empty_store() {
        let store = VectorStore::new(Box::new(StubEmbedder));
        assert!(store.query("anything", 5).unwrap().is_empty());
    }

    #[test]
    fn test_re_add_overwrites_by_id() {
        let mut store = store_with(&["original text"]);
        store
            .add(
                vec!["b0".to_string()],
                vec!["replacement text".to_string()],
                vec![meta("Analyst")],
            )
            .unwrap();

        assert_eq!(store.len(), 1);
        let matches = store.query("replacement text", 1).unwrap();
        assert_eq!(matches[0].document, "replacement text");
        assert_eq!(matches[0].metadata.title, "Analyst");
    }

    #[test]
    fn test_mismatched_add_lengths() {
        let mut store = VectorStore::new(Box::new(StubEmbedder));
        let result = store.add(vec!["b0".to_string()], vec![], vec![]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cosine_distance_identical_and_orthogonal() {
        let d = cosine_distance(&[1.0, 0.0], &[1.0, 0.0]).unwrap();
        assert!(d.abs() < 1e-6);
        let d = cosine_distance(&[1.0, 0.0], &[0.0, 1.0]).unwrap();
        assert!((d - 1.0).abs() < 1e-6);
        assert!(cosine_distance(&[1.0], &[1.0, 2.0]).is_err());
    }
}
