//! Eligibility filtering of nearby-search candidates.

use std::collections::HashSet;

use lunchroll_core::{Blacklist, Candidate};

use crate::enrich::title_case;

/// Keeps open, non-blacklisted candidates, first occurrence per name.
///
/// The blacklist is matched exactly, both against the provider's name and
/// against its title-cased form, which is what the final records carry. So
/// `"PELIKAN"` is excluded by a blacklist entry `"Pelikan"`. Duplicates are
/// detected on the title-cased name too.
#[must_use]
pub fn filter_candidates(candidates: Vec<Candidate>, blacklist: &Blacklist) -> Vec<Candidate> {
    let mut seen = HashSet::new();
    candidates
        .into_iter()
        .filter(|c| c.open_now)
        .filter(|c| {
            let display_name = title_case(&c.name);
            !blacklist.contains(&c.name)
                && !blacklist.contains(&display_name)
                && seen.insert(display_name)
        })
        .collect()
}
