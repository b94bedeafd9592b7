#[cfg(test)]
#[path = "../../tests/unit/commands/plan_test.rs"]
mod plan_test;

use super::*;
use clap::{Arg, ArgAction, Command};
use evroute_cli::config::{Config, create_planner_from_config, read_config};
use evroute_cli::format::solution::{write_geo_json, write_plan_json};
use evroute_cli::{get_errors_serialized, plan_request, read_plan_request};
use evroute_core::providers::CachedStations;
use std::sync::Arc;

const REQUEST_ARG_NAME: &str = "REQUEST";
const CONFIG_ARG_NAME: &str = "config";
const OUT_RESULT_ARG_NAME: &str = "out-result";
const GEO_JSON_ARG_NAME: &str = "geo-json";
const STATIONS_ARG_NAME: &str = "stations";
const RANDOM_SEED_ARG_NAME: &str = "seed";
const LOG_ARG_NAME: &str = "log";

pub fn get_plan_app() -> Command {
    Command::new("plan")
        .about("Plans a route with charging stops for the trip described in the request file")
        .arg(Arg::new(REQUEST_ARG_NAME).help("Sets the request file to use").required(true).index(1))
        .arg(
            Arg::new(CONFIG_ARG_NAME)
                .help("Specifies path to planner configuration file")
                .short('c')
                .long(CONFIG_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(OUT_RESULT_ARG_NAME)
                .help("Specifies path to file for result output")
                .short('o')
                .long(OUT_RESULT_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(GEO_JSON_ARG_NAME)
                .help("Specifies path to file for route output in geojson format")
                .short('g')
                .long(GEO_JSON_ARG_NAME)
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
            Arg::new(RANDOM_SEED_ARG_NAME)
                .help("Specifies random seed to make planning repeatable")
                .long(RANDOM_SEED_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(LOG_ARG_NAME)
                .help("Specifies whether default logging is enabled")
                .short('l')
                .long(LOG_ARG_NAME)
                .action(ArgAction::SetTrue)
                .required(false),
        )
}

pub fn run_plan(
    matches: &ArgMatches,
    out_writer_func: fn(Option<File>) -> BufWriter<Box<dyn Write>>,
) -> Result<(), String> {
    let request_path =
        matches.get_one::<String>(REQUEST_ARG_NAME).ok_or_else(|| "request file is not specified".to_string())?;

    let config = get_config(matches)?;
    let catalog = get_station_catalog(matches, STATIONS_ARG_NAME)?;
    let planner = create_planner_from_config(&config, Arc::new(CachedStations::new(catalog)))?;

    let request = read_plan_request(BufReader::new(open_file(request_path, "request")?))
        .map_err(|errors| get_errors_serialized(&errors))?;

    let response = plan_request(&planner, &request);

    if let Some(geo_json_path) = matches.get_one::<String>(GEO_JSON_ARG_NAME) {
        let geo_json_writer = BufWriter::new(create_file(geo_json_path, "geojson")?);
        write_geo_json(&response.route, geo_json_writer)?;
    }

    let out_file =
        matches.get_one::<String>(OUT_RESULT_ARG_NAME).map(|path| create_file(path, "out result")).transpose()?;

    write_plan_json(&response, out_writer_func(out_file))
}

fn get_config(matches: &ArgMatches) -> Result<Config, String> {
    let config = match matches.get_one::<String>(CONFIG_ARG_NAME) {
        Some(path) => read_config(BufReader::new(open_file(path, "config")?))?,
        None => Config::default(),
    };

    let config = if matches.get_flag(LOG_ARG_NAME) { config.with_logging() } else { config };

    Ok(match parse_int_value::<u64>(matches, RANDOM_SEED_ARG_NAME, "random seed")? {
        Some(seed) => config.with_seed(seed),
        None => config,
    })
}
