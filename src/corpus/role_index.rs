//! Per-role backfill catalogue built from all historical bullets

use crate::model::CandidateData;
use std::collections::{HashMap, HashSet};

/// One backfill entry: bullet text plus its skill tags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackfillCandidate {
    pub text: String,
    pub skills: HashSet<String>,
}

/// Mapping from role title to the deduplicated, ordered list of historical
/// bullets usable as backfill material for that role. Independent of any
/// job description; a pure function of the candidate data.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RoleIndex {
    buckets: HashMap<String, Vec<BackfillCandidate>>,
}

impl RoleIndex {
    pub fn build(data: &CandidateData) -> Self {
        let mut buckets: HashMap<String, Vec<BackfillCandidate>> = HashMap::new();
        let mut seen: HashMap<String, HashSet<String>> = HashMap::new();

        for resume in &data.resumes {
            for bullet in &resume.bullets {
                if bullet.text.is_empty() {
                    continue;
                }

                // Dedup by exact text, scoped per title: the same text under
                // two different roles stays in both buckets.
                let seen_texts = seen.entry(bullet.title.clone()).or_default();
                if !seen_texts.insert(bullet.text.clone()) {
                    continue;
                }

                buckets
                    .entry(bullet.title.clone())
                    .or_default()
                    .push(BackfillCandidate {
                        text: bullet.text.clone(),
                        skills: bullet.skills.iter().cloned().collect(),
                    });
            }
        }

        Self { buckets }
    }

    /// Backfill entries for a role title, in indexed order. Unknown titles
    /// yield an empty slice.
    pub fn candidates(&self, title: &str) -> &[BackfillCandidate] {
        self.buckets.get(title).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn role_count(&self) -> usize {
        self.buckets.len()
    }
}
