//! Optimistic vote application and reconciliation against server responses.
//!
//! Every vote is tracked as its own [`VoteAttempt`]. For each candidate the
//! reconciler remembers the last count the server confirmed, and keeps the
//! store at `confirmed + sum of pending deltas`. A success overwrites the
//! confirmed count and drops its attempt; a failure drops its attempt and
//! undoes that attempt's delta. Overlapping attempts for one candidate can
//! therefore resolve in any order without undoing each other's votes.

use std::collections::{BTreeMap, HashMap};
use time::{Duration, OffsetDateTime};
use tracing::{debug, info, warn};

use crate::error::{Error, ErrorCode, GatewayError, Result};
use crate::models::{CandidateId, CountResponse, MentorsResponse, RankingEntry, VoteRecord};
use crate::ranking;
use crate::roster::Roster;
use crate::store::VoteStore;
use crate::validation::validate_mentor_count;

pub type AttemptId = u64;

const OPTIMISTIC_DELTA: i64 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VoteAttempt {
    pub id: AttemptId,
    pub candidate: CandidateId,
    pub delta: i64,
    pub started_at: OffsetDateTime,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VoteOutcome {
    Confirmed { attempt: AttemptId, candidate: CandidateId, count: u64 },
    RolledBack { attempt: AttemptId, candidate: CandidateId, count: u64, error: Error },
    /// The attempt had already been resolved, usually by a timeout.
    Stale { attempt: AttemptId },
}

impl VoteOutcome {
    pub fn attempt(&self) -> AttemptId {
        match self {
            Self::Confirmed { attempt, .. }
            | Self::RolledBack { attempt, .. }
            | Self::Stale { attempt } => *attempt,
        }
    }

    pub fn error(&self) -> Option<&Error> {
        match self {
            Self::RolledBack { error, .. } => Some(error),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    pub loaded: usize,
    /// Ids the server reported that are not on the roster.
    pub unknown: Vec<CandidateId>,
    /// Roster ids whose server count could not be used.
    pub malformed: Vec<CandidateId>,
    /// Roster ids the server did not report at all.
    pub missing: Vec<CandidateId>,
}

impl LoadReport {
    pub fn is_partial(&self) -> bool {
        !(self.unknown.is_empty() && self.malformed.is_empty() && self.missing.is_empty())
    }

    pub fn mismatch(&self) -> Option<Error> {
        self.is_partial().then(|| Error::with_details(
            ErrorCode::PartialLoadMismatch,
            "Server roster differs from the local roster",
            format!("unknown: {:?}, malformed: {:?}, missing: {:?}", self.unknown, self.malformed, self.missing),
        ))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LoadState {
    #[default]
    Pending,
    Ready(LoadReport),
    Failed(Error),
}

#[derive(Debug)]
pub struct Reconciler {
    roster: Roster,
    store: VoteStore,
    confirmed: HashMap<CandidateId, u64>,
    pending: BTreeMap<AttemptId, VoteAttempt>,
    next_attempt: AttemptId,
    load_state: LoadState,
}

impl Reconciler {
    pub fn new(roster: Roster) -> Self {
        Self {
            roster,
            store: VoteStore::new(),
            confirmed: HashMap::new(),
            pending: BTreeMap::new(),
            next_attempt: 1,
            load_state: LoadState::Pending,
        }
    }

    pub fn roster(&self) -> &Roster { &self.roster }

    pub fn store(&self) -> &VoteStore { &self.store }

    pub fn load_state(&self) -> &LoadState { &self.load_state }

    pub fn pending_count(&self) -> usize { self.pending.len() }

    pub fn is_pending(&self, attempt: AttemptId) -> bool {
        self.pending.contains_key(&attempt)
    }

    pub fn ranking(&self, top_n: usize) -> Vec<RankingEntry> {
        ranking::project(&self.roster, &self.store, top_n)
    }

    pub fn apply_load(&mut self, response: MentorsResponse) -> LoadReport {
        let mut report = LoadReport::default();
        let mut confirmed = HashMap::new();

        for mentor in response.mentors {
            if !self.roster.contains(mentor.id) {
                warn!(id = mentor.id, name = %mentor.name, "discarding count for candidate not on the roster");
                report.unknown.push(mentor.id);
                continue;
            }
            match validate_mentor_count(&mentor) {
                Ok(count) => { confirmed.insert(mentor.id, count); }
                Err(e) => {
                    warn!(id = mentor.id, "discarding malformed count: {}", e);
                    report.malformed.push(mentor.id);
                }
            }
        }

        report.missing = self.roster.ids().filter(|id| !confirmed.contains_key(id)).collect();
        report.loaded = confirmed.len();
        if !report.missing.is_empty() {
            warn!(missing = ?report.missing, "server omitted roster candidates, treating them as zero");
        }

        self.confirmed = confirmed;
        let records: Vec<_> = self.roster.ids()
            .filter_map(|id| {
                let in_flight = self.in_flight(id);
                match self.confirmed.get(&id) {
                    None if in_flight == 0 => None,
                    base => Some(VoteRecord {
                        id,
                        count: base.copied().unwrap_or(0).saturating_add_signed(in_flight),
                    }),
                }
            })
            .collect();
        self.store.set_all(records);

        info!(loaded = report.loaded, partial = report.is_partial(), "vote counts loaded");
        self.load_state = LoadState::Ready(report.clone());
        report
    }

    pub fn fail_load(&mut self, cause: &GatewayError) -> Error {
        let error = Error::load_failure(cause);
        warn!("initial load failed: {}", cause);
        self.load_state = LoadState::Failed(error.clone());
        error
    }

    /// Applies a vote locally. The caller must follow up with [`Self::confirm`]
    /// or [`Self::fail`] once the server answers.
    pub fn cast_vote(&mut self, id: CandidateId, now: OffsetDateTime) -> Result<VoteAttempt> {
        if !self.roster.contains(id) {
            warn!(id, "rejecting vote for unknown candidate");
            return Err(Error::invalid_candidate(id));
        }

        let attempt = VoteAttempt {
            id: self.next_attempt,
            candidate: id,
            delta: OPTIMISTIC_DELTA,
            started_at: now,
        };
        self.next_attempt += 1;

        let count = self.store.increment(id, attempt.delta);
        self.pending.insert(attempt.id, attempt);
        debug!(attempt = attempt.id, candidate = id, count, "vote applied optimistically");
        Ok(attempt)
    }

    pub fn confirm(&mut self, attempt: AttemptId, response: CountResponse) -> VoteOutcome {
        let Some(pending) = self.pending.remove(&attempt) else {
            self.merge_late_confirmation(response);
            return VoteOutcome::Stale { attempt };
        };

        if response.id != pending.candidate {
            let cause = GatewayError::Decode(format!(
                "expected count for candidate {}, got {}", pending.candidate, response.id
            ));
            return self.roll_back(pending, &cause);
        }

        let server_count = match u64::try_from(response.voting) {
            Ok(count) => count,
            Err(_) => {
                let cause = GatewayError::Decode(format!("negative count {}", response.voting));
                return self.roll_back(pending, &cause);
            }
        };

        let count = self.merge_confirmed(pending.candidate, server_count);
        info!(attempt, candidate = pending.candidate, count, "vote confirmed");
        VoteOutcome::Confirmed { attempt, candidate: pending.candidate, count }
    }

    pub fn fail(&mut self, attempt: AttemptId, cause: &GatewayError) -> VoteOutcome {
        match self.pending.remove(&attempt) {
            Some(pending) => self.roll_back(pending, cause),
            None => {
                debug!(attempt, "ignoring failure for an attempt that is no longer pending");
                VoteOutcome::Stale { attempt }
            }
        }
    }

    /// Rolls back every attempt that has waited at least `timeout`.
    pub fn expire_overdue(&mut self, now: OffsetDateTime, timeout: Duration) -> Vec<VoteOutcome> {
        let overdue: Vec<_> = self.pending.values()
            .filter(|a| now - a.started_at >= timeout)
            .map(|a| a.id)
            .collect();

        let mut expired = Vec::with_capacity(overdue.len());
        for id in overdue {
            if let Some(attempt) = self.pending.remove(&id) {
                expired.push(self.roll_back(attempt, &GatewayError::TimedOut));
            }
        }
        expired
    }

    fn in_flight(&self, id: CandidateId) -> i64 {
        self.pending.values()
            .filter(|a| a.candidate == id)
            .map(|a| a.delta)
            .sum()
    }

    fn merge_confirmed(&mut self, id: CandidateId, server_count: u64) -> u64 {
        self.confirmed.insert(id, server_count);
        let count = server_count.saturating_add_signed(self.in_flight(id));
        self.store.set_exact(id, count);
        count
    }

    fn merge_late_confirmation(&mut self, response: CountResponse) {
        match u64::try_from(response.voting) {
            Ok(count) if self.roster.contains(response.id) => {
                let count = self.merge_confirmed(response.id, count);
                debug!(candidate = response.id, count, "merged late confirmation");
            }
            _ => warn!(candidate = response.id, voting = response.voting, "dropping unusable late confirmation"),
        }
    }

    fn roll_back(&mut self, attempt: VoteAttempt, cause: &GatewayError) -> VoteOutcome {
        let count = self.store.increment(attempt.candidate, -attempt.delta);
        warn!(attempt = attempt.id, candidate = attempt.candidate, count, "vote rolled back: {}", cause);
        VoteOutcome::RolledBack {
            attempt: attempt.id,
            candidate: attempt.candidate,
            count,
            error: Error::submission_failure(attempt.candidate, cause),
        }
    }
}
