use std::cell::{Ref, RefCell};
use std::future::Future;
use time::{Duration, OffsetDateTime};

use crate::error::Result;
use crate::gateway::VoteGateway;
use crate::models::CandidateId;
use crate::reconciler::{LoadReport, Reconciler, VoteAttempt, VoteOutcome};
use crate::roster::Roster;

/// A reconciler bound to a gateway for the lifetime of one page session.
///
/// The reconciler is never borrowed across an `.await`, so outcomes from
/// concurrent submissions can be applied in whatever order they arrive.
pub struct Session<G> {
    reconciler: RefCell<Reconciler>,
    gateway: G,
}

impl<G: VoteGateway> Session<G> {
    pub fn new(roster: Roster, gateway: G) -> Self {
        Self {
            reconciler: RefCell::new(Reconciler::new(roster)),
            gateway,
        }
    }

    pub fn reconciler(&self) -> Ref<'_, Reconciler> {
        self.reconciler.borrow()
    }

    pub fn gateway(&self) -> &G { &self.gateway }

    pub async fn load(&self) -> Result<LoadReport> {
        match self.gateway.fetch_mentors().await {
            Ok(response) => Ok(self.reconciler.borrow_mut().apply_load(response)),
            Err(e) => Err(self.reconciler.borrow_mut().fail_load(&e)),
        }
    }

    pub fn begin_vote(&self, id: CandidateId, now: OffsetDateTime) -> Result<VoteAttempt> {
        self.reconciler.borrow_mut().cast_vote(id, now)
    }

    pub async fn submit(&self, attempt: VoteAttempt) -> VoteOutcome {
        let result = self.gateway.submit_vote(attempt.candidate).await;
        let mut reconciler = self.reconciler.borrow_mut();
        match result {
            Ok(response) => reconciler.confirm(attempt.id, response),
            Err(e) => reconciler.fail(attempt.id, &e),
        }
    }

    /// Applies the vote before returning; the returned future performs the
    /// round trip and reconciles its result.
    pub fn cast_vote(
        &self,
        id: CandidateId,
        now: OffsetDateTime,
    ) -> Result<impl Future<Output = VoteOutcome> + '_> {
        let attempt = self.begin_vote(id, now)?;
        Ok(self.submit(attempt))
    }

    pub fn expire_overdue(&self, now: OffsetDateTime, timeout: Duration) -> Vec<VoteOutcome> {
        self.reconciler.borrow_mut().expire_overdue(now, timeout)
    }
}
