#[macro_use] extern crate rocket;

use rocket::figment::Figment;
use rocket::{Build, Rocket};
use crate::config::AppConfigFairing;

#[cfg(test)]
mod tests;
mod api;
mod config;
mod util;

fn build(figment: Figment) -> Rocket<Build> {
    let rocket = rocket::custom(figment)
        .attach(AppConfigFairing());
    api::extend(rocket)
}

#[launch]
fn rocket() -> _ {
    build(rocket::Config::figment())
}
