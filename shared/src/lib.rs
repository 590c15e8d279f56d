pub mod error;
pub mod models;
pub mod validation;
pub mod roster;
pub mod store;
pub mod ranking;
pub mod reconciler;
pub mod gateway;
pub mod session;

pub use error::{Error, ErrorCode, GatewayError, Result};
pub use models::*;
pub use validation::*;
pub use roster::Roster;
pub use store::VoteStore;
pub use reconciler::{AttemptId, LoadReport, LoadState, Reconciler, VoteAttempt, VoteOutcome};
pub use gateway::VoteGateway;
pub use session::Session;
