use atc_core::RunwayId;
use atc_queue::QueueError;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AirportError {
    #[error("runway {0} supports neither landing nor takeoff")]
    EmptyMode(RunwayId),

    #[error("runway {0} is defined more than once")]
    DuplicateRunway(RunwayId),

    #[error("queue error: {0}")]
    Queue(#[from] QueueError),
}

pub type AirportResult<T> = Result<T, AirportError>;
