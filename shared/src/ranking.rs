use crate::models::RankingEntry;
use crate::roster::Roster;
use crate::store::VoteStore;

/// Top `top_n` candidates by count. Equal counts keep roster order.
pub fn project(roster: &Roster, store: &VoteStore, top_n: usize) -> Vec<RankingEntry> {
    let mut joined: Vec<_> = roster.iter()
        .enumerate()
        .map(|(idx, candidate)| (idx, candidate, store.count_or_zero(candidate.id)))
        .collect();

    joined.sort_unstable_by(|a, b| b.2.cmp(&a.2).then_with(|| a.0.cmp(&b.0)));

    joined.into_iter()
        .take(top_n)
        .enumerate()
        .map(|(i, (_, candidate, count))| RankingEntry {
            candidate: candidate.clone(),
            count,
            rank: i + 1,
        })
        .collect()
}
