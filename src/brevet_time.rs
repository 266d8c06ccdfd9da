use chrono::{DateTime, FixedOffset, MappedLocalTime, NaiveDateTime, SecondsFormat, TimeDelta, Timelike};
use serde::Serialize;

/// Instant with a fixed UTC offset, the start and result type of control time calculations.
#[derive(Serialize, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Clone, Copy)]
pub struct BrevetTime(pub DateTime<FixedOffset>);
impl BrevetTime {
    pub fn now() -> Self {
        Self(chrono::Local::now().fixed_offset()).trimmed_to_minute()
    }
    pub fn trimmed_to_minute(&self) -> Self {
        let subminute = TimeDelta::seconds(i64::from(self.0.second()))
            + TimeDelta::nanoseconds(i64::from(self.0.nanosecond()));
        if let Some(dt) = self.0.checked_sub_signed(subminute) {
            BrevetTime(dt)
        } else {
            *self
        }
    }
    pub fn from_local_timezone(local_dt: NaiveDateTime, offset: &FixedOffset) -> Option<BrevetTime> {
        match local_dt.and_local_timezone(*offset) {
            MappedLocalTime::Single(dt) => Some(BrevetTime(dt)),
            MappedLocalTime::Ambiguous(_, _) => None,
            MappedLocalTime::None => None,
        }
    }
    pub fn offset(&self) -> FixedOffset {
        *self.0.offset()
    }
    /// Moves the instant forward, keeping the offset.
    /// Minutes above 59 spill over into hours.
    ///
    /// Panics when the result leaves the range representable by chrono.
    pub fn shift(&self, hours: u32, minutes: u32) -> Self {
        let delta = TimeDelta::hours(i64::from(hours)) + TimeDelta::minutes(i64::from(minutes));
        BrevetTime(self.0 + delta)
    }
    pub fn to_display_string(self) -> String {
        self.0.format("%F %H:%M").to_string()
    }
    pub fn to_iso_string(self) -> String {
        self.0.to_rfc3339_opts(SecondsFormat::Secs, false)
    }
    pub fn from_iso_string(datetime_str: &str) -> Result<Self, anyhow::Error> {
        let dt = DateTime::parse_from_rfc3339(datetime_str)?;
        Ok(Self(dt))
    }
}

#[test]
fn test_trimmed_to_minute() {
    let dt = BrevetTime::now();
    assert_eq!(dt.0.second(), 0);
    assert_eq!(dt.0.nanosecond(), 0);
}

#[test]
fn test_from_local_timezone() {
    let loc_dt = chrono::Local::now();
    let fx_dt = loc_dt.fixed_offset();
    let dt = BrevetTime::from_local_timezone(loc_dt.naive_local(), fx_dt.offset()).unwrap();
    assert_eq!(dt.0.timestamp(), loc_dt.timestamp());
}

#[test]
fn test_parse_brevet_time() {
    for (dtstr, dtstr2) in &[
        ("2023-01-01T06:00:00Z", "2023-01-01T06:00:00+00:00"),
        ("2023-01-01T06:00:00+00:00", "2023-01-01T06:00:00+00:00"),
        ("2025-03-05T14:32:45+10:00", "2025-03-05T14:32:45+10:00"),
        ("2025-03-05T14:32:45-01:30", "2025-03-05T14:32:45-01:30"),
    ] {
        let dt = BrevetTime::from_iso_string(dtstr)
            .map_err(|e| println!("parse {dtstr} error: {e}")).unwrap();
        assert_eq!(&dt.to_iso_string(), dtstr2)
    }
    assert!(BrevetTime::from_iso_string("yesterday").is_err());
}

#[test]
fn test_shift_keeps_offset() {
    let dt = BrevetTime::from_iso_string("2023-06-30T22:15:00-07:00").unwrap();
    let shifted = dt.shift(5, 53);
    assert_eq!(shifted.offset(), dt.offset());
    assert_eq!(shifted.to_iso_string(), "2023-07-01T04:08:00-07:00");
    // minute subtotals above an hour are normalized by the shift
    assert_eq!(dt.shift(1, 75), dt.shift(2, 15));
    assert_eq!(dt.to_display_string(), "2023-06-30 22:15");
}
