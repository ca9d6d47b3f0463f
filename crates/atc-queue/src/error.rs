use atc_aircraft::{AircraftError, AircraftId, FlightDirection};
use thiserror::Error;

/// Queue misuse.  Every variant is a programmer error, never an expected
/// simulation outcome.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum QueueError {
    #[error("pop from an empty queue")]
    Empty,

    #[error("aircraft {0} is already queued")]
    Duplicate(AircraftId),

    #[error("aircraft {0} is not in the queue")]
    NotFound(AircraftId),

    #[error("aircraft {id} cannot join a {expected} queue")]
    WrongDirection {
        id:       AircraftId,
        expected: FlightDirection,
    },

    #[error(transparent)]
    Aircraft(#[from] AircraftError),
}

pub type QueueResult<T> = Result<T, QueueError>;
