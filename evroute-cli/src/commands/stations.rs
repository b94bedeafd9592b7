#[cfg(test)]
#[path = "../../tests/unit/commands/stations_test.rs"]
mod stations_test;

use super::*;
use clap::{Arg, Command};
use evroute_cli::format::stations::{StationsResponse, write_stations_json};
use evroute_core::models::common::Point;

const NEAR_ARG_NAME: &str = "near";
const RADIUS_ARG_NAME: &str = "radius";
const STATIONS_ARG_NAME: &str = "stations";
const OUT_RESULT_ARG_NAME: &str = "out-result";

const DEFAULT_RADIUS_KM: f64 = 50.;

pub fn get_stations_app() -> Command {
    Command::new("stations")
        .about("Lists charging stations from the catalog, optionally only the ones near a point")
        .arg(
            Arg::new(NEAR_ARG_NAME)
                .help("Specifies a point to search around in form \"lat,lon\"")
                .short('n')
                .long(NEAR_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(RADIUS_ARG_NAME)
                .help("Specifies search radius in km, default is 50")
                .short('r')
                .long(RADIUS_ARG_NAME)
                .requires(NEAR_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(STATIONS_ARG_NAME)
                .help("Specifies path to charging station catalog file used instead of the built-in one")
                .short('s')
                .long(STATIONS_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(OUT_RESULT_ARG_NAME)
                .help("Specifies path to file for result output")
                .short('o')
                .long(OUT_RESULT_ARG_NAME)
                .required(false),
        )
}

pub fn run_stations(
    matches: &ArgMatches,
    out_writer_func: fn(Option<File>) -> BufWriter<Box<dyn Write>>,
) -> Result<(), String> {
    let catalog = get_station_catalog(matches, STATIONS_ARG_NAME)?;
    let near = matches.get_one::<String>(NEAR_ARG_NAME).map(|arg| parse_point(arg)).transpose()?;
    let radius = parse_float_value::<f64>(matches, RADIUS_ARG_NAME, "search radius")?.unwrap_or(DEFAULT_RADIUS_KM);

    if radius <= 0. {
        return Err(format!("search radius should be positive, got: '{radius}'"));
    }

    let response = match near.as_ref() {
        Some(point) => StationsResponse::new(catalog.find_nearby(point, radius).as_slice(), Some(point)),
        None => StationsResponse::new(catalog.stations(), None),
    };

    let out_file =
        matches.get_one::<String>(OUT_RESULT_ARG_NAME).map(|path| create_file(path, "out result")).transpose()?;

    write_stations_json(&response, out_writer_func(out_file))
}

/// Parses point from "lat,lon" string.
fn parse_point(value: &str) -> Result<Point, String> {
    let coordinates = value
        .split(',')
        .map(|part| part.trim().parse::<f64>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|err| format!("cannot parse point '{value}': '{err}'"))?;

    match coordinates.as_slice() {
        &[lat, lon] if (-90. ..=90.).contains(&lat) && (-180. ..=180.).contains(&lon) => Ok(Point::new(lat, lon)),
        _ => Err(format!("expected point in form \"lat,lon\" with valid coordinates, got: '{value}'")),
    }
}
