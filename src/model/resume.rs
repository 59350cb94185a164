//! Assembled resume output: experience blocks and the final record

use crate::model::candidate::{CandidateProfile, Education};
use serde::{Deserialize, Serialize};

/// One role's block in the experience section: static role metadata plus
/// the ordered bullet texts attached to it so far.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoleBlock {
    pub company: String,
    pub title: String,
    #[serde(default)]
    pub dates: String,
    #[serde(default)]
    pub bullets: Vec<String>,
}

/// The experience section under construction. Blocks are keyed by role
/// title and kept in first-encounter order; that order is meaningful and
/// survives serialization.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Experience {
    blocks: Vec<RoleBlock>,
}

impl Experience {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn contains_title(&self, title: &str) -> bool {
        self.blocks.iter().any(|b| b.title == title)
    }

    pub fn block_mut(&mut self, title: &str) -> Option<&mut RoleBlock> {
        self.blocks.iter_mut().find(|b| b.title == title)
    }

    pub fn push_block(&mut self, block: RoleBlock) {
        self.blocks.push(block);
    }

    pub fn blocks(&self) -> &[RoleBlock] {
        &self.blocks
    }

    pub fn blocks_mut(&mut self) -> &mut [RoleBlock] {
        &mut self.blocks
    }
}

/// What the generation service returns: rewritten bullets ordered by
/// relevance, plus optional targeted skills and a professional summary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedDraft {
    #[serde(default)]
    pub rewritten_bullets: Vec<String>,
    #[serde(default)]
    pub targeted_skills: Vec<String>,
    #[serde(default)]
    pub professional_summary: String,
}

/// The final assembled resume record handed to rendering.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TailoredResume {
    pub name: String,
    pub location: String,
    pub education: Vec<Education>,
    pub portfolio: Vec<String>,
    pub certifications: Vec<String>,
    pub experience: Experience,
    pub skills: Vec<String>,
    pub professional_summary: String,
}

impl TailoredResume {
    pub fn assemble(
        profile: &CandidateProfile,
        experience: Experience,
        skills: Vec<String>,
        professional_summary: String,
    ) -> Self {
        Self {
            name: profile.name.clone(),
            location: profile.location.clone(),
            education: profile.education.clone(),
            portfolio: profile.portfolio.clone(),
            certifications: profile.certifications.clone(),
            experience,
            skills,
            professional_summary,
        }
    }
}
