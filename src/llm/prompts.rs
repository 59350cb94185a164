//! Prompt templates for requirement extraction and bullet generation

/// System role shared by both calls.
pub const SYSTEM_PROMPT: &str = "You are a precise resume editor. \
You always respond with valid JSON and nothing else.";

const EXTRACTION_TEMPLATE: &str = r#"Extract the following from the job description.

Return valid JSON with:
- required_skills
- preferred_skills
- responsibilities
- ats_keywords
- seniority

Job Description:
{job_description}
"#;

const GENERATION_TEMPLATE: &str = r#"Rules:
- You may ONLY rephrase or combine the provided bullet points
- Do NOT introduce new technologies or accomplishments
- Preserve metrics exactly
- Optimize wording to match the job description language
- Keep bullets concise and ATS-friendly
- Order bullets by relevance to the job requirements
- Return them in JSON format under the object name "rewritten_bullets"
- Generate 5-15 skills that match job requirements under the same restraints as above
- These skills will target ATS keywords that were not covered under the rewritten bullets
- Do NOT mention specific frameworks or regulations unless explicitly contained in the original bullets
- Return the skills in JSON format under the object name "targeted_skills"
- Generate a short professional summary aligned to the job requirements and rewritten bullets
- Return the summary as one entry in JSON format under the object name "professional_summary"

Job Requirements:
{job_requirements}

Source Bullets:
{bullets}

Generate tailored resume bullets, skills, and professional summary.
"#;

pub fn render_extraction(job_description: &str) -> String {
    EXTRACTION_TEMPLATE.replace("{job_description}", job_description)
}

pub fn render_generation(job_requirements: &str, bullets: &[String]) -> String {
    let bullet_list = bullets
        .iter()
        .map(|b| format!("- {}", b))
        .collect::<Vec<_>>()
        .join("\n");

    GENERATION_TEMPLATE
        .replace("{job_requirements}", job_requirements)
        .replace("{bullets}", &bullet_list)
}
