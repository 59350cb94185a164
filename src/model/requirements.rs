//! Structured job requirements extracted from a job description

use serde::{Deserialize, Serialize};

/// Output of the requirement extraction call. Only `required_skills` is
/// validated; everything else is optional input to generation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobRequirements {
    pub required_skills: Vec<String>,
    #[serde(default)]
    pub preferred_skills: Vec<String>,
    #[serde(default)]
    pub responsibilities: Vec<String>,
    #[serde(default)]
    pub ats_keywords: Vec<String>,
    #[serde(default)]
    pub seniority: Option<String>,
}

impl JobRequirements {
    /// Terms used to query the bullet corpus: required skills first,
    /// preferred skills after. ATS keywords are generation-side vocabulary
    /// and do not drive retrieval.
    pub fn query_terms(&self) -> Vec<String> {
        self.required_skills
            .iter()
            .chain(self.preferred_skills.iter())
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_skills_is_mandatory() {
        let result: Result<JobRequirements, _> =
            serde_json::from_str(r#"{"preferred_skills": ["SQL"]}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_query_terms_order() {
        let reqs: JobRequirements = serde_json::from_str(
            r#"{"required_skills": ["Rust", "SQL"], "preferred_skills": ["Kafka"]}"#,
        )
        .unwrap();
        assert_eq!(reqs.query_terms(), vec!["Rust", "SQL", "Kafka"]);
    }
}
