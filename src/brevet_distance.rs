use std::fmt;
use serde::{Deserialize, Serialize};
use crate::acp_times::ElapsedTime;
use crate::error::UnknownBrevetDistance;

/// Nominal distance of an ACP brevet.
#[derive(Serialize, Deserialize, PartialEq, Eq, Hash, Debug, Clone, Copy)]
#[serde(try_from = "u32", into = "u32")]
pub enum BrevetDistance {
    Km200,
    Km300,
    Km400,
    Km600,
    Km1000,
}
impl BrevetDistance {
    pub const ALL: [BrevetDistance; 5] = [
        BrevetDistance::Km200,
        BrevetDistance::Km300,
        BrevetDistance::Km400,
        BrevetDistance::Km600,
        BrevetDistance::Km1000,
    ];
    pub const fn km(self) -> u32 {
        match self {
            BrevetDistance::Km200 => 200,
            BrevetDistance::Km300 => 300,
            BrevetDistance::Km400 => 400,
            BrevetDistance::Km600 => 600,
            BrevetDistance::Km1000 => 1000,
        }
    }
    /// Overall time limit of the brevet, used as the closing time of the finish control.
    pub const fn time_limit(self) -> ElapsedTime {
        match self {
            BrevetDistance::Km200 => ElapsedTime::new(13, 30),
            BrevetDistance::Km300 => ElapsedTime::new(20, 0),
            BrevetDistance::Km400 => ElapsedTime::new(27, 0),
            BrevetDistance::Km600 => ElapsedTime::new(40, 0),
            BrevetDistance::Km1000 => ElapsedTime::new(75, 0),
        }
    }
}
impl TryFrom<u32> for BrevetDistance {
    type Error = UnknownBrevetDistance;
    fn try_from(km: u32) -> Result<Self, Self::Error> {
        BrevetDistance::ALL.into_iter()
            .find(|d| d.km() == km)
            .ok_or(UnknownBrevetDistance(km))
    }
}
impl From<BrevetDistance> for u32 {
    fn from(value: BrevetDistance) -> Self {
        value.km()
    }
}
impl fmt::Display for BrevetDistance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} km", self.km())
    }
}

#[test]
fn test_brevet_distance_from_km() {
    for d in BrevetDistance::ALL {
        assert_eq!(BrevetDistance::try_from(d.km()), Ok(d));
    }
    assert_eq!(BrevetDistance::try_from(250), Err(UnknownBrevetDistance(250)));
}

#[test]
fn test_brevet_distance_serde() {
    let d: BrevetDistance = serde_json::from_str("1000").unwrap();
    assert_eq!(d, BrevetDistance::Km1000);
    assert_eq!(serde_json::to_string(&BrevetDistance::Km300).unwrap(), "300");
    assert!(serde_json::from_str::<BrevetDistance>("123").is_err());
}
