//! Open and close times of brevet controls following the ACP/RUSA control time rules.

use std::fmt;
use std::ops::Add;
use log::{debug, warn};
use crate::brevet_distance::BrevetDistance;
use crate::brevet_time::BrevetTime;
use crate::error::AcpError;

/// Distance interval `[low_km, high_km)` ridden at a fixed speed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpeedBand {
    pub low_km: u32,
    pub high_km: u32,
    pub speed_kmh: f64,
}
impl SpeedBand {
    const fn new(low_km: u32, high_km: u32, speed_kmh: f64) -> Self {
        Self { low_km, high_km, speed_kmh }
    }
    /// Part of the first `distance_km` kilometers falling into this band.
    fn covered_km(&self, distance_km: u32) -> Option<u32> {
        if distance_km > self.low_km {
            Some(distance_km.min(self.high_km) - self.low_km)
        } else {
            None
        }
    }
}

/// Maximum speeds, they govern the open times.
pub const MAX_SPEEDS: [SpeedBand; 4] = [
    SpeedBand::new(0, 200, 34.),
    SpeedBand::new(200, 400, 32.),
    SpeedBand::new(400, 600, 30.),
    SpeedBand::new(600, 1000, 28.),
];
/// Minimum speeds, they govern the close times.
/// 200, 400 and 600 km brevets share the same minimum speed, hence one band up to 600 km.
pub const MIN_SPEEDS: [SpeedBand; 2] = [
    SpeedBand::new(0, 600, 15.),
    SpeedBand::new(600, 1000, 11.428),
];
/// French variant for controls up to 60 km: 20 km/h plus one hour.
pub const REGIONAL_BAND: SpeedBand = SpeedBand::new(0, 60, 20.);
const REGIONAL_EXTRA_HOURS: u32 = 1;
/// Closing time of the start control.
const START_CONTROL_CLOSE: ElapsedTime = ElapsedTime::new(1, 0);

/// Whole hours and minutes elapsed since the brevet start.
///
/// Adding two values sums hours and minutes separately, minutes are not carried
/// into hours until the time is applied to a timestamp.
#[derive(PartialEq, Eq, Debug, Clone, Copy, Default)]
pub struct ElapsedTime {
    pub hours: u32,
    pub minutes: u32,
}
impl ElapsedTime {
    pub const fn new(hours: u32, minutes: u32) -> Self {
        Self { hours, minutes }
    }
    pub fn apply_to(self, start: &BrevetTime) -> BrevetTime {
        start.shift(self.hours, self.minutes)
    }
}
impl Add for ElapsedTime {
    type Output = ElapsedTime;
    fn add(self, rhs: Self) -> Self::Output {
        ElapsedTime::new(self.hours + rhs.hours, self.minutes + rhs.minutes)
    }
}
impl fmt::Display for ElapsedTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}h{:02}m", self.hours, self.minutes)
    }
}

/// Time needed to ride `distance_km` at `speed_kmh`.
///
/// Hours are truncated, the remaining fraction of an hour is rounded to the nearest
/// minute with ties going to the even minute. A fraction rounding up to 60 minutes
/// stays 60 minutes.
pub fn convert_to_time(distance_km: f64, speed_kmh: f64) -> ElapsedTime {
    let q = distance_km / speed_kmh;
    let hours = q.floor();
    let minutes = ((q - hours) * 60.).round_ties_even();
    ElapsedTime::new(hours as u32, minutes as u32)
}

/// Rounds the control distance to whole km and checks it against the brevet length.
/// Controls up to 20% past the nominal distance count as the finish.
fn effective_distance(control_km: f64, brevet: BrevetDistance) -> Result<u32, AcpError> {
    let brevet_km = brevet.km();
    let rounded = control_km.round_ties_even();
    // d > 1.2 * brevet, compared as 5d > 6 * brevet to stay exact
    if !rounded.is_finite() || rounded < 0. || rounded * 5. > f64::from(brevet_km) * 6. {
        warn!("Control at {control_km} km rejected for {brevet} brevet");
        return Err(AcpError::InvalidDistance { control_km, brevet_km });
    }
    Ok((rounded as u32).min(brevet_km))
}

fn banded_time(distance_km: u32, bands: &[SpeedBand]) -> ElapsedTime {
    bands.iter()
        .filter_map(|band| {
            band.covered_km(distance_km)
                .map(|km| convert_to_time(f64::from(km), band.speed_kmh))
        })
        .fold(ElapsedTime::default(), |acc, t| acc + t)
}

pub fn open_elapsed_time(control_km: f64, brevet: BrevetDistance) -> Result<ElapsedTime, AcpError> {
    let distance_km = effective_distance(control_km, brevet)?;
    Ok(banded_time(distance_km, &MAX_SPEEDS))
}

pub fn close_elapsed_time(control_km: f64, brevet: BrevetDistance) -> Result<ElapsedTime, AcpError> {
    let distance_km = effective_distance(control_km, brevet)?;
    let elapsed = if distance_km == brevet.km() {
        brevet.time_limit()
    } else if distance_km > REGIONAL_BAND.high_km {
        banded_time(distance_km, &MIN_SPEEDS)
    } else if distance_km > 0 {
        convert_to_time(f64::from(distance_km), REGIONAL_BAND.speed_kmh) + ElapsedTime::new(REGIONAL_EXTRA_HOURS, 0)
    } else {
        START_CONTROL_CLOSE
    };
    Ok(elapsed)
}

/// Time the control at `control_km` opens.
///
/// Fails with [`AcpError::InvalidDistance`] for negative distances or distances
/// more than 20% past the brevet length.
pub fn open_time(control_km: f64, brevet: BrevetDistance, start: BrevetTime) -> Result<BrevetTime, AcpError> {
    let elapsed = open_elapsed_time(control_km, brevet)?;
    debug!("{brevet} brevet, control at {control_km} km opens after {elapsed}");
    Ok(elapsed.apply_to(&start))
}

/// Time the control at `control_km` closes.
///
/// Fails with [`AcpError::InvalidDistance`] under the same conditions as [`open_time`].
pub fn close_time(control_km: f64, brevet: BrevetDistance, start: BrevetTime) -> Result<BrevetTime, AcpError> {
    let elapsed = close_elapsed_time(control_km, brevet)?;
    debug!("{brevet} brevet, control at {control_km} km closes after {elapsed}");
    Ok(elapsed.apply_to(&start))
}
