use anyhow::anyhow;
use brevets::BrevetDistance;
use chrono::{FixedOffset, Offset, Utc};
use rocket::fairing::{Fairing, Info, Kind};
use rocket::figment::Figment;
use rocket::{Build, Rocket};
use serde::Deserialize;

/// Figment key of the calculator settings, `[default.brevets]` in `Rocket.toml`.
pub const CONFIG_KEY: &str = "brevets";

#[derive(Deserialize, Debug)]
#[serde(default)]
struct AppConfigValues {
    default_brevet_dist_km: u32,
    default_utc_offset_minutes: i32,
}
impl Default for AppConfigValues {
    fn default() -> Self {
        Self {
            default_brevet_dist_km: 200,
            default_utc_offset_minutes: 0,
        }
    }
}

/// Defaults used when a request does not carry a brevet distance or a start time offset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AppConfig {
    pub default_brevet: BrevetDistance,
    pub default_offset: FixedOffset,
}
impl Default for AppConfig {
    fn default() -> Self {
        Self {
            default_brevet: BrevetDistance::Km200,
            default_offset: Utc.fix(),
        }
    }
}
impl AppConfig {
    pub fn from_figment(figment: &Figment) -> anyhow::Result<Self> {
        let values: AppConfigValues = figment.focus(CONFIG_KEY).extract()?;
        let default_brevet = BrevetDistance::try_from(values.default_brevet_dist_km)?;
        let default_offset = values.default_utc_offset_minutes.checked_mul(60)
            .and_then(FixedOffset::east_opt)
            .ok_or_else(|| anyhow!("UTC offset out of range: {} min", values.default_utc_offset_minutes))?;
        Ok(Self { default_brevet, default_offset })
    }
}

pub struct AppConfigFairing();
#[rocket::async_trait]
impl Fairing for AppConfigFairing {
    fn info(&self) -> Info {
        Info {
            name: "Brevet calculator configuration",
            kind: Kind::Ignite,
        }
    }

    async fn on_ignite(&self, rocket: Rocket<Build>) -> rocket::fairing::Result {
        match AppConfig::from_figment(rocket.figment()) {
            Ok(cfg) => {
                info!("Default brevet: {}, default UTC offset: {}", cfg.default_brevet, cfg.default_offset);
                Ok(rocket.manage(cfg))
            }
            Err(err) => {
                error!("Invalid {CONFIG_KEY} configuration: {err}");
                Err(rocket)
            }
        }
    }
}

#[test]
fn test_config_defaults() {
    let cfg = AppConfig::from_figment(&Figment::new()).unwrap();
    assert_eq!(cfg, AppConfig::default());
}

#[test]
fn test_config_from_figment() {
    let figment = Figment::new()
        .merge((CONFIG_KEY, serde_json::json!({"default_brevet_dist_km": 400, "default_utc_offset_minutes": -420})));
    let cfg = AppConfig::from_figment(&figment).unwrap();
    assert_eq!(cfg.default_brevet, BrevetDistance::Km400);
    assert_eq!(cfg.default_offset.local_minus_utc(), -7 * 3600);
}

#[test]
fn test_config_invalid() {
    let figment = Figment::new()
        .merge((CONFIG_KEY, serde_json::json!({"default_brevet_dist_km": 250})));
    assert!(AppConfig::from_figment(&figment).is_err());
    let figment = Figment::new()
        .merge((CONFIG_KEY, serde_json::json!({"default_utc_offset_minutes": 24 * 60})));
    assert!(AppConfig::from_figment(&figment).is_err());
}
