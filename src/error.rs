use thiserror::Error;

/// Errors of the control time calculation.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum AcpError {
    #[error("Control distance {control_km} km is out of range for a {brevet_km} km brevet")]
    InvalidDistance { control_km: f64, brevet_km: u32 },
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Unknown brevet distance {0} km, expected one of 200, 300, 400, 600, 1000")]
pub struct UnknownBrevetDistance(pub u32);
