//! Similarity retrieval over the indexed bullet corpus

use crate::corpus::indexer::IndexedCorpus;
use crate::error::{Result, ResumeTailorError};

/// Provenance of the historical bullet closest to a piece of text.
#[derive(Debug, Clone)]
pub struct NearestBullet {
    pub id: String,
    pub company: String,
    pub title: String,
    pub dates: String,
}

impl IndexedCorpus {
    /// Fetch the top-k bullet texts most similar to the joined query terms.
    /// Returns all available texts when the corpus holds fewer than `k`;
    /// no minimum-similarity threshold is applied.
    pub fn retrieve(&self, query_terms: &[String], k: usize) -> Result<Vec<String>> {
        let query = query_terms.join(" ");
        let matches = self.store.query(&query, k)?;
        Ok(matches.into_iter().map(|m| m.document).collect())
    }

    /// 1-nearest-neighbor provenance lookup for a single text. The closest
    /// bullet is accepted unconditionally, however dissimilar.
    pub fn nearest(&self, text: &str) -> Result<NearestBullet> {
        let hit = self
            .store
            .query(text, 1)?
            .into_iter()
            .next()
            .ok_or(ResumeTailorError::EmptyCorpus)?;

        Ok(NearestBullet {
            id: hit.id,
            company: hit.metadata.company,
            title: hit.metadata.title,
            dates: hit.metadata.dates,
        })
    }
}
