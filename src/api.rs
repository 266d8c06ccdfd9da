use brevets::{close_time, open_time, BrevetDistance, BrevetTime, ControlSheet};
use rocket::response::status::Custom;
use rocket::serde::json::Json;
use rocket::{Build, Rocket, State};
use serde::{Deserialize, Serialize};
use crate::config::AppConfig;
use crate::util::{acp_to_custom_error, anyhow_to_custom_error, brevet_distance_to_custom_error, parse_brevet_time};

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct CalcTimesResponse {
    pub open: String,
    pub close: String,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct BrevetRequest {
    pub brevet_dist_km: Option<u32>,
    pub begin_date: Option<String>,
    pub controls: Vec<f64>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct ControlResponse {
    pub km: f64,
    pub open: String,
    pub close: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct BrevetResponse {
    pub brevet_dist_km: u32,
    pub begin_date: String,
    pub controls: Vec<ControlResponse>,
}
impl From<ControlSheet> for BrevetResponse {
    fn from(sheet: ControlSheet) -> Self {
        Self {
            brevet_dist_km: sheet.brevet.km(),
            begin_date: sheet.start.to_iso_string(),
            controls: sheet.controls.into_iter()
                .map(|c| ControlResponse {
                    km: c.km,
                    open: c.open.to_iso_string(),
                    close: c.close.to_iso_string(),
                })
                .collect(),
        }
    }
}

fn brevet_distance(brevet_dist_km: Option<u32>, cfg: &AppConfig) -> Result<BrevetDistance, Custom<String>> {
    match brevet_dist_km {
        Some(km) => BrevetDistance::try_from(km).map_err(brevet_distance_to_custom_error),
        None => Ok(cfg.default_brevet),
    }
}
fn begin_time(begin_date: Option<&str>, cfg: &AppConfig) -> Result<BrevetTime, Custom<String>> {
    match begin_date {
        Some(s) => parse_brevet_time(s, &cfg.default_offset).map_err(anyhow_to_custom_error),
        None => Ok(BrevetTime::now()),
    }
}

#[get("/_calc_times?<km>&<brevet_dist_km>&<begin_date>")]
fn get_calc_times(km: f64, brevet_dist_km: Option<u32>, begin_date: Option<&str>, cfg: &State<AppConfig>) -> Result<Json<CalcTimesResponse>, Custom<String>> {
    let brevet = brevet_distance(brevet_dist_km, cfg)?;
    let start = begin_time(begin_date, cfg)?;
    let open = open_time(km, brevet, start).map_err(acp_to_custom_error)?;
    let close = close_time(km, brevet, start).map_err(acp_to_custom_error)?;
    debug!("{brevet} brevet from {}, control {km} km: {} - {}", start.to_display_string(), open.to_display_string(), close.to_display_string());
    Ok(Json(CalcTimesResponse {
        open: open.to_iso_string(),
        close: close.to_iso_string(),
    }))
}

#[post("/api/brevet", data = "<request>")]
fn post_brevet(request: Json<BrevetRequest>, cfg: &State<AppConfig>) -> Result<Json<BrevetResponse>, Custom<String>> {
    let request = request.into_inner();
    let brevet = brevet_distance(request.brevet_dist_km, cfg)?;
    let start = begin_time(request.begin_date.as_deref(), cfg)?;
    let sheet = ControlSheet::calculate(brevet, start, &request.controls).map_err(acp_to_custom_error)?;
    info!("Control sheet calculated, {brevet} brevet, {} controls", sheet.controls.len());
    Ok(Json(sheet.into()))
}

pub fn extend(rocket: Rocket<Build>) -> Rocket<Build> {
    rocket.mount("/", routes![
            get_calc_times,
            post_brevet,
        ])
}
