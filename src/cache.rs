//! Draft cache: persisted alignment output keyed by an input fingerprint
//!
//! The expensive phases (indexing, extraction, generation, alignment) are
//! skipped when a cached draft exists for the same inputs. The fingerprint
//! covers the job description text and the raw candidate data, so editing
//! either invalidates the draft instead of silently reusing it.

use crate::config::CacheConfig;
use crate::error::Result;
use crate::model::Experience;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::path::PathBuf;

/// The reusable intermediate product of a tailoring run: everything up to
/// and including alignment. Backfill always re-runs on top of this.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CachedDraft {
    pub fingerprint: String,
    pub professional_summary: String,
    pub targeted_skills: Vec<String>,
    pub experience: Experience,
}

pub struct DraftCache {
    path: PathBuf,
}

impl DraftCache {
    pub fn new(config: &CacheConfig) -> Self {
        Self {
            path: config.dir.join("draft.json"),
        }
    }

    /// Load the cached draft if one exists and its fingerprint matches.
    /// A stale or unreadable draft is treated as a miss.
    pub fn load(&self, fingerprint: &str) -> Option<CachedDraft> {
        let content = std::fs::read_to_string(&self.path).ok()?;
        let draft: CachedDraft = match serde_json::from_str(&content) {
            Ok(draft) => draft,
            Err(e) => {
                debug!("ignoring unreadable draft cache: {}", e);
                return None;
            }
        };

        if draft.fingerprint != fingerprint {
            info!("draft cache is stale; recomputing");
            return None;
        }

        Some(draft)
    }

    pub fn store(&self, draft: &CachedDraft) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(draft)?;
        std::fs::write(&self.path, content)?;
        Ok(())
    }
}

/// Fingerprint of one tailoring run's inputs.
pub fn draft_fingerprint(job_text: &str, candidate_bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(job_text.as_bytes());
    hasher.update([0u8]);
    hasher.update(candidate_bytes);
    format!("{:x}", hasher.finalize())
}
