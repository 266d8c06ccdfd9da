use brevets::BrevetTime;
use rocket::http::{ContentType, Status};
use rocket::local::blocking::Client;
use crate::api::{BrevetResponse, CalcTimesResponse, ControlResponse};
use crate::config::CONFIG_KEY;

fn create_test_server() -> Client {
    Client::tracked(super::rocket()).unwrap()
}

#[test]
fn calc_times() {
    let client = create_test_server();
    for (km, open, close) in [
        ("0", "2023-01-01T06:00:00+00:00", "2023-01-01T07:00:00+00:00"),
        ("60", "2023-01-01T07:46:00+00:00", "2023-01-01T10:00:00+00:00"),
        ("100", "2023-01-01T08:56:00+00:00", "2023-01-01T12:40:00+00:00"),
        ("200", "2023-01-01T11:53:00+00:00", "2023-01-01T19:30:00+00:00"),
        ("230", "2023-01-01T11:53:00+00:00", "2023-01-01T19:30:00+00:00"),
    ] {
        let resp = client.get(format!("/_calc_times?km={km}&brevet_dist_km=200&begin_date=2023-01-01T06:00:00%2B00:00"))
            .dispatch();
        assert_eq!(resp.status(), Status::Ok);
        assert_eq!(resp.content_type(), Some(ContentType::JSON));
        let times = resp.into_json::<CalcTimesResponse>().unwrap();
        assert_eq!(times, CalcTimesResponse { open: open.to_string(), close: close.to_string() }, "control at {km} km");
    }
}

#[test]
fn calc_times_keeps_offset() {
    let client = create_test_server();
    let resp = client.get("/_calc_times?km=150&brevet_dist_km=300&begin_date=2023-05-20T07:00:00-07:00")
        .dispatch();
    assert_eq!(resp.status(), Status::Ok);
    let times = resp.into_json::<CalcTimesResponse>().unwrap();
    assert_eq!(times.open, "2023-05-20T11:25:00-07:00");
    assert_eq!(times.close, "2023-05-20T17:00:00-07:00");
}

#[test]
fn calc_times_defaults() {
    let figment = rocket::Config::figment()
        .merge((CONFIG_KEY, serde_json::json!({"default_brevet_dist_km": 400, "default_utc_offset_minutes": 120})));
    let client = Client::tracked(super::build(figment)).unwrap();
    // no brevet distance and a start time without offset
    let resp = client.get("/_calc_times?km=400&begin_date=2023-01-01T06:00").dispatch();
    assert_eq!(resp.status(), Status::Ok);
    let times = resp.into_json::<CalcTimesResponse>().unwrap();
    assert_eq!(times.open, "2023-01-01T18:08:00+02:00");
    assert_eq!(times.close, "2023-01-02T09:00:00+02:00");
    // no start time at all
    let resp = client.get("/_calc_times?km=0").dispatch();
    assert_eq!(resp.status(), Status::Ok);
    let times = resp.into_json::<CalcTimesResponse>().unwrap();
    let open = BrevetTime::from_iso_string(&times.open).unwrap();
    let close = BrevetTime::from_iso_string(&times.close).unwrap();
    assert_eq!(open.shift(1, 0), close);
}

#[test]
fn calc_times_errors() {
    let client = create_test_server();
    for query in [
        "km=241&brevet_dist_km=200&begin_date=2023-01-01T06:00:00Z",
        "km=-5&brevet_dist_km=200&begin_date=2023-01-01T06:00:00Z",
        "km=100&brevet_dist_km=250&begin_date=2023-01-01T06:00:00Z",
        "km=100&brevet_dist_km=200&begin_date=tomorrow",
    ] {
        let resp = client.get(format!("/_calc_times?{query}")).dispatch();
        assert_eq!(resp.status(), Status::BadRequest, "{query}");
    }
}

#[test]
fn post_brevet() {
    let client = create_test_server();
    let resp = client.post("/api/brevet")
        .json(&serde_json::json!({
            "brevet_dist_km": 200,
            "begin_date": "2023-01-01T06:00:00+00:00",
            "controls": [0.0, 60.0, 205.0],
        }))
        .dispatch();
    assert_eq!(resp.status(), Status::Ok);
    assert_eq!(resp.content_type(), Some(ContentType::JSON));
    let sheet = resp.into_json::<BrevetResponse>().unwrap();
    assert_eq!(sheet, BrevetResponse {
        brevet_dist_km: 200,
        begin_date: "2023-01-01T06:00:00+00:00".to_string(),
        controls: vec![
            ControlResponse { km: 0., open: "2023-01-01T06:00:00+00:00".to_string(), close: "2023-01-01T07:00:00+00:00".to_string() },
            ControlResponse { km: 60., open: "2023-01-01T07:46:00+00:00".to_string(), close: "2023-01-01T10:00:00+00:00".to_string() },
            ControlResponse { km: 205., open: "2023-01-01T11:53:00+00:00".to_string(), close: "2023-01-01T19:30:00+00:00".to_string() },
        ],
    });
}

#[test]
fn post_brevet_invalid_control() {
    let client = create_test_server();
    let resp = client.post("/api/brevet")
        .json(&serde_json::json!({
            "brevet_dist_km": 300,
            "begin_date": "2023-01-01T06:00:00+00:00",
            "controls": [0.0, 150.0, 400.0],
        }))
        .dispatch();
    assert_eq!(resp.status(), Status::BadRequest);
    let body = resp.into_string().unwrap();
    assert!(body.contains("400"), "{body}");
}
