//! Candidate data: profile, employment roles, and historical resume variants

use crate::error::{Result, ResumeTailorError};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Top-level candidate record: static profile plus every historical resume
/// variant the candidate has produced.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateData {
    pub candidate: CandidateProfile,
    #[serde(default)]
    pub resumes: Vec<ResumeVariant>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateProfile {
    pub name: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub education: Vec<Education>,
    #[serde(default)]
    pub certifications: Vec<String>,
    #[serde(default)]
    pub portfolio: Vec<String>,
    #[serde(default)]
    pub roles: Vec<Role>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Education {
    pub institution: String,
    pub credential: String,
    #[serde(default)]
    pub dates: String,
}

/// One employment period. Titles are assumed unique across the candidate's
/// history; role blocks and the backfill index are keyed by title alone.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Role {
    pub company: String,
    pub title: String,
    #[serde(default)]
    pub dates: String,
}

impl Role {
    /// Parse the start of the employment period from the leading token of
    /// the dates string. Accepts `YYYY-MM-DD`, `YYYY-MM`, and `YYYY`.
    pub fn start_date(&self) -> Option<NaiveDate> {
        let token = self.dates.split_whitespace().next()?;
        let token = token.trim_matches(|c: char| !c.is_ascii_digit() && c != '-');
        if token.is_empty() {
            return None;
        }
        if let Ok(date) = NaiveDate::parse_from_str(token, "%Y-%m-%d") {
            return Some(date);
        }
        if let Ok(date) = NaiveDate::parse_from_str(&format!("{}-01", token), "%Y-%m-%d") {
            return Some(date);
        }
        NaiveDate::parse_from_str(&format!("{}-01-01", token), "%Y-%m-%d").ok()
    }
}

/// One historical resume and its bullets.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResumeVariant {
    pub resume_id: String,
    #[serde(default)]
    pub focus: String,
    #[serde(default)]
    pub bullets: Vec<Bullet>,
}

/// A single resume accomplishment line tied to one employment role.
/// Immutable once loaded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bullet {
    pub id: String,
    #[serde(default)]
    pub text: String,
    pub company: String,
    pub title: String,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default = "default_confidence")]
    pub confidence: String,
}

fn default_confidence() -> String {
    "neutral".to_string()
}

impl CandidateData {
    /// Parse candidate data from raw JSON bytes. Missing required keys are
    /// a hard failure; there is no safe default for them.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        serde_json::from_slice(bytes)
            .map_err(|e| ResumeTailorError::CandidateData(format!("invalid candidate data: {}", e)))
    }

    pub fn load(path: &Path) -> Result<Self> {
        let bytes = std::fs::read(path)?;
        Self::from_slice(&bytes)
    }
}
