//! Corpus indexing: load every historical bullet into the vector store
//! with its role provenance

use crate::corpus::store::{BulletMetadata, VectorStore};
use crate::model::CandidateData;
use log::{debug, warn};
use std::collections::HashMap;

/// A vector store that has been populated from candidate data. Retrieval
/// and alignment only accept this type, so "index before query" is a
/// compile-time precondition instead of a runtime assumption.
pub struct IndexedCorpus {
    pub(crate) store: VectorStore,
}

impl IndexedCorpus {
    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }
}

/// Index all bullets from every resume variant. Bullets with empty text are
/// skipped; bullets whose (company, title) has no matching role get empty
/// date metadata. Insertion is best-effort: a failed bullet is logged and
/// dropped, leaving a partial corpus.
pub fn index_candidate(data: &CandidateData, mut store: VectorStore) -> IndexedCorpus {
    let role_lookup: HashMap<(&str, &str), &str> = data
        .candidate
        .roles
        .iter()
        .map(|r| ((r.company.as_str(), r.title.as_str()), r.dates.as_str()))
        .collect();

    let mut indexed = 0usize;
    for resume in &data.resumes {
        for bullet in &resume.bullets {
            if bullet.text.is_empty() {
                continue;
            }

            let dates = role_lookup
                .get(&(bullet.company.as_str(), bullet.title.as_str()))
                .copied()
                .unwrap_or("");

            let metadata = BulletMetadata {
                candidate_name: data.candidate.name.clone(),
                resume_id: resume.resume_id.clone(),
                company: bullet.company.clone(),
                title: bullet.title.clone(),
                dates: dates.to_string(),
                skills: bullet.skills.clone(),
                confidence: bullet.confidence.clone(),
                focus: resume.focus.clone(),
            };

            if let Err(e) = store.add(
                vec![bullet.id.clone()],
                vec![bullet.text.clone()],
                vec![metadata],
            ) {
                warn!("skipping bullet '{}': {}", bullet.id, e);
                continue;
            }
            indexed += 1;
        }
    }

    debug!("indexed {} bullets into the corpus", indexed);
    IndexedCorpus { store }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::embedder::Embedder;
    use crate::error::Result;

    struct StubEmbedder;

    impl Embedder for StubEmbedder {
        fn embed(&self, texts: &[String]) -> Result<Vec<Vec<f32>>> {
            Ok(texts
                .iter()
                .map(|t| vec![t.len() as f32, t.bytes().next().unwrap_or(0) as f32])
                .collect())
        }
    }

    fn sample_data() -> CandidateData {
        CandidateData::from_slice(
            br#"{
            "candidate": {
                "name": "Jane Doe",
                "roles": [
                    {"company": "Acme", "title": "Engineer", "dates": "2021-06 - 2023-01"}
                ]
            },
            "resumes": [
                {"resume_id": "r1", "focus": "data", "bullets": [
                    {"id": "b1", "text": "Built pipelines", "company": "Acme", "title": "Engineer"},
                    {"id": "b2", "text": "", "company": "Acme", "title": "Engineer"},
                    {"id": "b3", "text": "Ran support rota", "company": "Globex", "title": "Analyst"}
                ]}
            ]
        }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_empty_text_skipped_and_dates_resolved() {
        let corpus = index_candidate(&sample_data(), VectorStore::new(Box::new(StubEmbedder)));
        assert_eq!(corpus.len(), 2);

        let matches = corpus.store.query("Built pipelines", 1).unwrap();
        assert_eq!(matches[0].metadata.dates, "2021-06 - 2023-01");

        // Role absent from the role list: empty dates, not a failure
        let matches = corpus.store.query("Ran support rota", 1).unwrap();
        assert_eq!(matches[0].metadata.title, "Analyst");
        assert_eq!(matches[0].metadata.dates, "");
    }

    #[test]
    fn test_reindexing_same_data_is_idempotent() {
        let data = sample_data();
        let corpus = index_candidate(&data, VectorStore::new(Box::new(StubEmbedder)));
        let store = corpus.store;
        let corpus = index_candidate(&data, store);
        assert_eq!(corpus.len(), 2);
    }
}
