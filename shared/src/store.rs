use std::collections::HashMap;
use crate::models::{CandidateId, VoteRecord};

/// Current vote count per candidate.
///
/// Readable by anyone holding a reference; only the reconciler can write.
/// A candidate without a record reads as zero through [`VoteStore::count_or_zero`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VoteStore {
    counts: HashMap<CandidateId, u64>,
}

impl VoteStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: CandidateId) -> Option<u64> {
        self.counts.get(&id).copied()
    }

    pub fn count_or_zero(&self, id: CandidateId) -> u64 {
        self.get(id).unwrap_or(0)
    }

    pub fn len(&self) -> usize { self.counts.len() }

    pub fn is_empty(&self) -> bool { self.counts.is_empty() }

    pub fn records(&self) -> Vec<VoteRecord> {
        let mut records: Vec<_> = self.counts.iter()
            .map(|(&id, &count)| VoteRecord { id, count })
            .collect();
        records.sort_by_key(|r| r.id);
        records
    }

    pub(crate) fn set_all(&mut self, records: impl IntoIterator<Item = VoteRecord>) {
        self.counts = records.into_iter().map(|r| (r.id, r.count)).collect();
    }

    /// Adds `delta`, saturating at zero. Returns the new count.
    pub(crate) fn increment(&mut self, id: CandidateId, delta: i64) -> u64 {
        let count = self.counts.entry(id).or_insert(0);
        *count = if delta >= 0 {
            count.saturating_add(delta.unsigned_abs())
        } else {
            count.saturating_sub(delta.unsigned_abs())
        };
        *count
    }

    pub(crate) fn set_exact(&mut self, id: CandidateId, count: u64) {
        self.counts.insert(id, count);
    }
}
