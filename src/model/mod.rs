//! Data model for candidate history, job requirements, and assembled resumes

pub mod candidate;
pub mod requirements;
pub mod resume;

pub use candidate::{Bullet, CandidateData, CandidateProfile, Education, ResumeVariant, Role};
pub use requirements::JobRequirements;
pub use resume::{Experience, GeneratedDraft, RoleBlock, TailoredResume};
