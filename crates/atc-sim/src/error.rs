use atc_aircraft::AircraftError;
use atc_airport::AirportError;
use atc_core::AtcError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error(transparent)]
    Config(#[from] AtcError),

    #[error("airport error: {0}")]
    Airport(#[from] AirportError),

    #[error("aircraft error: {0}")]
    Aircraft(#[from] AircraftError),
}

pub type SimResult<T> = Result<T, SimError>;
