use brevets::{AcpError, BrevetTime, UnknownBrevetDistance};
use chrono::{FixedOffset, NaiveDateTime};
use rocket::http::Status;
use rocket::response::status::Custom;

pub(crate) fn acp_to_custom_error(err: AcpError) -> Custom<String> {
    warn!("Calculation error: {err}");
    Custom(Status::BadRequest, err.to_string())
}
pub(crate) fn brevet_distance_to_custom_error(err: UnknownBrevetDistance) -> Custom<String> {
    warn!("Brevet distance error: {err}");
    Custom(Status::BadRequest, err.to_string())
}
pub(crate) fn anyhow_to_custom_error(err: anyhow::Error) -> Custom<String> {
    warn!("Error: {err}");
    Custom(Status::BadRequest, format!("Error: {}", err))
}

/// Parses an RFC 3339 date-time, or a date-time without offset which is then placed at `default_offset`.
pub(crate) fn parse_brevet_time(datetime_str: &str, default_offset: &FixedOffset) -> anyhow::Result<BrevetTime> {
    let datetime_str = datetime_str.trim();
    if let Ok(dt) = BrevetTime::from_iso_string(datetime_str) {
        return Ok(dt);
    }
    for &format in &[
        "%Y-%m-%dT%H:%M:%S",       // 2023-01-01T06:00:00
        "%Y-%m-%dT%H:%M",          // 2023-01-01T06:00
        "%Y-%m-%d %H:%M:%S",       // 2023-01-01 06:00:00
        "%Y-%m-%d %H:%M",          // 2023-01-01 06:00
    ] {
        match NaiveDateTime::parse_from_str(datetime_str, format) {
            Ok(dt) => {
                return BrevetTime::from_local_timezone(dt, default_offset)
                    .ok_or_else(|| anyhow::anyhow!("Date-time {datetime_str} does not exist at offset {default_offset}"));
            }
            Err(e) => {
                trace!("Failed to parse date time {datetime_str} with {format}: {:?}", e);
            }
        }
    }
    Err(anyhow::anyhow!("Unrecognized date-time string: {datetime_str}"))
}

#[test]
fn test_parse_brevet_time() {
    let offset = FixedOffset::east_opt(3600).unwrap();
    for (dtstr, dtstr2) in &[
        ("2023-01-01T06:00:00+00:00", "2023-01-01T06:00:00+00:00"),
        ("2023-01-01T06:00:00Z", "2023-01-01T06:00:00+00:00"),
        ("2023-01-01T06:00:00", "2023-01-01T06:00:00+01:00"),
        ("2023-01-01T06:00", "2023-01-01T06:00:00+01:00"),
        (" 2023-01-01 06:00 ", "2023-01-01T06:00:00+01:00"),
    ] {
        let dt = parse_brevet_time(dtstr, &offset).unwrap();
        assert_eq!(&dt.to_iso_string(), dtstr2)
    }
    assert!(parse_brevet_time("01/01/2023", &offset).is_err());
}
