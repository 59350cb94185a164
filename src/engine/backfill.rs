//! Backfill: pad the experience section up to minimum role and bullet counts

use crate::config::BackfillConfig;
use crate::corpus::role_index::{BackfillCandidate, RoleIndex};
use crate::model::{Experience, Role, RoleBlock};
use log::debug;
use std::cmp::Ordering;
use std::collections::HashSet;

/// Ensure the experience section has at least `min_roles` roles and each
/// role at least `min_bullets` bullets, drawing on the role index. A role
/// whose backfill material runs out stays short; that shortfall is
/// accepted, not escalated.
pub fn backfill(
    experience: &mut Experience,
    roles: &[Role],
    index: &RoleIndex,
    limits: &BackfillConfig,
) {
    backfill_roles(experience, roles, limits.min_roles);

    for block in experience.blocks_mut() {
        let candidates = index.candidates(&block.title);
        backfill_bullets(block, candidates, limits.min_bullets);
    }
}

/// Insert empty blocks for the candidate's most recent roles that are not
/// already present, stopping once `min_roles` is reached. Recency comes
/// from parsed start dates; unparseable dates sort after parseable ones,
/// lexicographically descending among themselves.
fn backfill_roles(experience: &mut Experience, roles: &[Role], min_roles: usize) {
    if experience.len() >= min_roles {
        return;
    }

    let mut by_recency: Vec<&Role> = roles.iter().collect();
    by_recency.sort_by(|a, b| compare_recency(a, b));

    for role in by_recency {
        if experience.len() >= min_roles {
            break;
        }
        if experience.contains_title(&role.title) {
            continue;
        }
        debug!("backfilling role '{}' at {}", role.title, role.company);
        experience.push_block(RoleBlock {
            company: role.company.clone(),
            title: role.title.clone(),
            dates: role.dates.clone(),
            bullets: Vec::new(),
        });
    }
}

fn compare_recency(a: &Role, b: &Role) -> Ordering {
    match (a.start_date(), b.start_date()) {
        (Some(x), Some(y)) => y.cmp(&x),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => b.dates.cmp(&a.dates),
    }
}

/// Top a single block up to `min_bullets` from its backfill candidates, in
/// indexed order. Two passes: the first avoids candidates whose skill tags
/// overlap skills already used in the block, the second readmits them once
/// the conflict-free pool is exhausted below the minimum. Duplicate text
/// never enters the block. Generated bullets carry no skill tags, so
/// `used_skills` starts empty and only backfilled candidates feed it.
fn backfill_bullets(block: &mut RoleBlock, candidates: &[BackfillCandidate], min_bullets: usize) {
    let mut used_text: HashSet<&str> = block.bullets.iter().map(String::as_str).collect();
    let mut used_skills: HashSet<&str> = HashSet::new();
    let mut chosen: Vec<&BackfillCandidate> = Vec::new();

    for candidate in candidates {
        if block.bullets.len() + chosen.len() >= min_bullets {
            break;
        }
        if used_text.contains(candidate.text.as_str()) {
            continue;
        }
        if candidate.skills.iter().any(|s| used_skills.contains(s.as_str())) {
            continue;
        }
        used_text.insert(&candidate.text);
        used_skills.extend(candidate.skills.iter().map(String::as_str));
        chosen.push(candidate);
    }

    // Conflict-free material exhausted below the minimum: skill overlap no
    // longer disqualifies, duplicates still do.
    for candidate in candidates {
        if block.bullets.len() + chosen.len() >= min_bullets {
            break;
        }
        if used_text.contains(candidate.text.as_str()) {
            continue;
        }
        used_text.insert(&candidate.text);
        chosen.push(candidate);
    }

    let picked: Vec<String> = chosen.into_iter().map(|c| c.text.clone()).collect();
    block.bullets.extend(picked);
}
