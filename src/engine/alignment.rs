//! Alignment: re-attach generated bullet text to the role it came from

use crate::corpus::indexer::IndexedCorpus;
use crate::error::Result;
use crate::model::{Experience, RoleBlock};
use log::debug;

/// Group generated bullets into role blocks by nearest-neighbor provenance.
///
/// Bullets are processed in generation order and appended in that order;
/// a role's block is created on first encounter with metadata from the
/// nearest historical bullet. Roles no generated bullet maps to are simply
/// absent (backfill handles them). A text already present verbatim in its
/// target block is dropped rather than duplicated.
pub fn align(corpus: &IndexedCorpus, generated: &[String]) -> Result<Experience> {
    let mut experience = Experience::new();

    for text in generated {
        let origin = corpus.nearest(text)?;
        debug!("aligned generated bullet to '{}' ({})", origin.title, origin.id);

        if !experience.contains_title(&origin.title) {
            experience.push_block(RoleBlock {
                company: origin.company.clone(),
                title: origin.title.clone(),
                dates: origin.dates.clone(),
                bullets: Vec::new(),
            });
        }

        if let Some(block) = experience.block_mut(&origin.title) {
            if !block.bullets.iter().any(|b| b == text) {
                block.bullets.push(text.clone());
            }
        }
    }

    Ok(experience)
}
