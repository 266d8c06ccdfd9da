use serde::Serialize;
use crate::acp_times::{close_time, open_time};
use crate::brevet_distance::BrevetDistance;
use crate::brevet_time::BrevetTime;
use crate::error::AcpError;

#[derive(Serialize, PartialEq, Debug, Clone, Copy)]
pub struct ControlTimes {
    pub km: f64,
    pub open: BrevetTime,
    pub close: BrevetTime,
}

/// Open and close times of all controls of one brevet, in the order the controls were given.
#[derive(Serialize, PartialEq, Debug, Clone)]
pub struct ControlSheet {
    pub brevet: BrevetDistance,
    pub start: BrevetTime,
    pub controls: Vec<ControlTimes>,
}
impl ControlSheet {
    pub fn calculate(brevet: BrevetDistance, start: BrevetTime, controls_km: &[f64]) -> Result<Self, AcpError> {
        let controls = controls_km.iter()
            .map(|&km| -> Result<ControlTimes, AcpError> {
                Ok(ControlTimes {
                    km,
                    open: open_time(km, brevet, start)?,
                    close: close_time(km, brevet, start)?,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { brevet, start, controls })
    }
}
