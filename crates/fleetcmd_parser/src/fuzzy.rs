//! String-similarity scoring for free-text filtering.
//!
//! Scores fall into tiers so that any prefix match outranks any substring
//! match, whatever the lengths involved.

/// Score for an exact (case-insensitive) match.
pub const EXACT: u32 = 1000;
/// Base score for a prefix match.
pub const PREFIX: u32 = 500;
/// Score for a substring match.
pub const SUBSTRING: u32 = 100;

/// Scores how well `query` matches `candidate`, ignoring case.
///
/// Prefix matches earn a bonus proportional to how much of the candidate the
/// query covers, always below 100 so the tiers never overlap.
#[must_use]
pub fn score(query: &str, candidate: &str) -> u32 {
    let query = query.to_lowercase();
    let candidate = candidate.to_lowercase();

    if query == candidate {
        EXACT
    } else if candidate.starts_with(&query) {
        PREFIX + length_bonus(query.chars().count(), candidate.chars().count())
    } else if !query.is_empty() && candidate.contains(&query) {
        SUBSTRING
    } else {
        0
    }
}

fn length_bonus(matched: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    let bonus = matched * 99 / total;
    u32::try_from(bonus).unwrap_or(99)
}

/// Ranks `candidates` against `query`, dropping non-matches.
///
/// Ties keep their input order.
pub fn rank<'a, T, F>(query: &str, candidates: &'a [T], key: F) -> Vec<(u32, &'a T)>
where
    F: Fn(&T) -> &str,
{
    let mut ranked: Vec<(u32, &T)> = candidates
        .iter()
        .map(|c| (score(query, key(c)), c))
        .filter(|(s, _)| *s > 0)
        .collect();
    ranked.sort_by(|a, b| b.0.cmp(&a.0));
    ranked
}
