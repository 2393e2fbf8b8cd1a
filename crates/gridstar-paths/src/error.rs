use gridstar_core::{Coord, GridError};
use thiserror::Error;

/// Why a search request was refused before any state was built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidRequest {
    #[error("no start cell is set")]
    MissingStart,
    #[error("no end cell is set")]
    MissingEnd,
    #[error("start and end are the same cell {0}")]
    SameEndpoints(Coord),
    #[error("endpoint {0} is a barrier")]
    BlockedEndpoint(Coord),
}

/// Errors returned by the search entry points.
///
/// Exhaustion and cancellation are outcomes, not errors; see
/// [`SearchOutcome`](crate::SearchOutcome).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    #[error("invalid search request: {0}")]
    InvalidRequest(#[from] InvalidRequest),
    #[error(transparent)]
    Grid(#[from] GridError),
}
