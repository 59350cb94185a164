//! Integration tests for the resume tailor engine
//!
//! These run the offline core end to end (index -> retrieve -> align ->
//! backfill -> render) against the fixture candidate data, with a
//! deterministic embedder standing in for the Model2Vec model.

use resume_tailor::config::BackfillConfig;
use resume_tailor::corpus::{index_candidate, Embedder, RoleIndex, VectorStore};
use resume_tailor::engine::{align, backfill};
use resume_tailor::error::Result;
use resume_tailor::model::{CandidateData, TailoredResume};
use resume_tailor::output::ResumeRenderer;
use std::collections::HashSet;
use std::path::Path;

/// Token-overlap embedder: texts sharing words land close together, which
/// is all the engine logic needs from an embedding model.
struct BagOfWordsEmbedder;

const DIMS: usize = 64;

impl Embedder for BagOfWordsEmbedder {
    fn embed(&self, texts: &[String]) -> Result<Vec<Vec<f32>>> {
        Ok(texts
            .iter()
            .map(|text| {
                let mut v = vec![0.0f32; DIMS];
                for word in text.to_lowercase().split_whitespace() {
                    let slot = word
                        .bytes()
                        .fold(0usize, |acc, b| acc.wrapping_mul(131).wrapping_add(b as usize));
                    v[slot % DIMS] += 1.0;
                }
                v
            })
            .collect())
    }
}

fn load_fixture() -> CandidateData {
    CandidateData::load(Path::new("tests/fixtures/candidate_data.json")).unwrap()
}

fn limits(min_roles: usize, min_bullets: usize) -> BackfillConfig {
    BackfillConfig {
        min_roles,
        min_bullets,
    }
}

#[test]
fn test_fixture_loads() {
    let data = load_fixture();
    assert_eq!(data.candidate.name, "Jordan Rivera");
    assert_eq!(data.candidate.roles.len(), 3);
    assert_eq!(data.resumes.len(), 2);
}

#[test]
fn test_corpus_skips_empty_and_dedups_nothing() {
    let data = load_fixture();
    let corpus = index_candidate(&data, VectorStore::new(Box::new(BagOfWordsEmbedder)));
    // 9 bullets in the fixture, one with empty text
    assert_eq!(corpus.len(), 8);
}

#[test]
fn test_retrieval_caps_at_corpus_size() {
    let data = load_fixture();
    let corpus = index_candidate(&data, VectorStore::new(Box::new(BagOfWordsEmbedder)));
    let pool = corpus
        .retrieve(&["SQL".to_string(), "Python".to_string()], 50)
        .unwrap();
    assert_eq!(pool.len(), 8);
}

#[test]
fn test_role_index_dedups_across_variants() {
    let data = load_fixture();
    let index = RoleIndex::build(&data);

    // "Built weekly revenue dashboards..." appears in both variants but
    // only once in the Data Analyst bucket
    let analyst: Vec<_> = index
        .candidates("Data Analyst")
        .iter()
        .map(|c| c.text.as_str())
        .collect();
    assert_eq!(analyst.len(), 3);
    assert_eq!(
        analyst
            .iter()
            .filter(|t| t.starts_with("Built weekly revenue"))
            .count(),
        1
    );

    // Rebuilding yields the identical mapping
    assert_eq!(index, RoleIndex::build(&data));
}

#[test]
fn test_end_to_end_alignment_and_backfill() {
    let data = load_fixture();
    let corpus = index_candidate(&data, VectorStore::new(Box::new(BagOfWordsEmbedder)));

    // Stand-in for the generation step: rewrites that share vocabulary
    // with their source bullets
    let generated = vec![
        "Designed a streaming ingestion platform processing millions of events per day".to_string(),
        "Cut warehouse query costs 35% through smarter partitioning".to_string(),
        "Built weekly revenue dashboards used by three product lines".to_string(),
    ];

    let mut experience = align(&corpus, &generated).unwrap();
    assert_eq!(experience.len(), 2);
    assert!(experience.contains_title("Senior Data Engineer"));
    assert!(experience.contains_title("Data Analyst"));

    let index = RoleIndex::build(&data);
    backfill(
        &mut experience,
        &data.candidate.roles,
        &index,
        &limits(3, 2),
    );

    // The third role arrives via backfill
    assert_eq!(experience.len(), 3);
    assert!(experience.contains_title("Operations Associate"));

    for block in experience.blocks() {
        // No duplicate text within any role
        let unique: HashSet<_> = block.bullets.iter().collect();
        assert_eq!(unique.len(), block.bullets.len(), "dupes in {}", block.title);

        // Padded to the minimum wherever material existed
        let available = index.candidates(&block.title).len();
        assert!(
            block.bullets.len() >= 2.min(available),
            "{} has {} bullets with {} available",
            block.title,
            block.bullets.len(),
            available
        );
    }

    // Backfilled roles carry their static dates
    let ops = experience
        .blocks()
        .iter()
        .find(|b| b.title == "Operations Associate")
        .unwrap();
    assert_eq!(ops.dates, "2016-07 - 2018-05");
    assert_eq!(ops.company, "Metro Retail Group");
}

#[test]
fn test_assembled_resume_renders() {
    let data = load_fixture();
    let corpus = index_candidate(&data, VectorStore::new(Box::new(BagOfWordsEmbedder)));

    let generated =
        vec!["Designed a streaming ingestion platform for event data".to_string()];
    let mut experience = align(&corpus, &generated).unwrap();

    let index = RoleIndex::build(&data);
    backfill(
        &mut experience,
        &data.candidate.roles,
        &index,
        &limits(3, 4),
    );

    let resume = TailoredResume::assemble(
        &data.candidate,
        experience,
        vec!["Kafka".to_string(), "SQL".to_string()],
        "Data engineer focused on streaming platforms.".to_string(),
    );

    let html = ResumeRenderer::render_html(&resume).unwrap();
    assert!(html.contains("Jordan Rivera"));
    assert!(html.contains("Senior Data Engineer"));
    assert!(html.contains("AWS Solutions Architect Associate"));

    let json = serde_json::to_string(&resume).unwrap();
    let back: TailoredResume = serde_json::from_str(&json).unwrap();
    assert_eq!(back.experience.len(), resume.experience.len());
}
