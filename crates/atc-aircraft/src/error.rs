use thiserror::Error;

use crate::AircraftId;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AircraftError {
    #[error("aircraft {0} already has an emergency declared")]
    EmergencyAlreadyDeclared(AircraftId),

    #[error("aircraft {0} was already admitted to a queue")]
    AlreadyAdmitted(AircraftId),
}

pub type AircraftResult<T> = Result<T, AircraftError>;
