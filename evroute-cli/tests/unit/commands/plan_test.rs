use super::*;
use serde_json::Value;
use tempfile::TempDir;

const KYIV_LVIV_REQUEST_PATH: &str = "data/kyiv-lviv.request.json";
const SHORT_TRIP_REQUEST_PATH: &str = "data/short-trip.request.json";
const INVALID_REQUEST_PATH: &str = "data/invalid.request.json";
const FULL_CONFIG_PATH: &str = "data/config.full.json";
const STATION_CATALOG_PATH: &str = "data/stations.catalog.json";

fn run_plan_with_args(args: &[&str]) -> Result<(), String> {
    let args = std::iter::once("plan").chain(args.iter().copied()).collect::<Vec<_>>();
    let matches = get_plan_app().try_get_matches_from(args).map_err(|err| err.to_string())?;

    run_plan(&matches, create_write_buffer)
}

fn read_json(path: &std::path::Path) -> Value {
    let file = File::open(path).expect("cannot open result");
    serde_json::from_reader(BufReader::new(file)).expect("cannot parse result")
}

#[test]
fn can_plan_short_trip() {
    let tmpdir = TempDir::new().expect("cannot create temporary folder");
    let out_path = tmpdir.path().join("route.json");
    let out = out_path.to_str().expect("invalid path");

    run_plan_with_args(&[SHORT_TRIP_REQUEST_PATH, "-o", out, "--seed", "42"]).expect("cannot plan");

    let result = read_json(out_path.as_path());
    assert_eq!(result["success"], true);
    assert_eq!(result["verdict"], "direct");
    assert_eq!(result["route"]["stats"]["chargingStops"], 0);
}

#[test]
fn can_plan_trip_with_config_custom_catalog_and_geojson() {
    let tmpdir = TempDir::new().expect("cannot create temporary folder");
    let out_path = tmpdir.path().join("route.json");
    let geo_json_path = tmpdir.path().join("route.geojson");

    run_plan_with_args(&[
        KYIV_LVIV_REQUEST_PATH,
        "--config",
        FULL_CONFIG_PATH,
        "--stations",
        STATION_CATALOG_PATH,
        "--out-result",
        out_path.to_str().expect("invalid path"),
        "--geo-json",
        geo_json_path.to_str().expect("invalid path"),
    ])
    .expect("cannot plan");

    let result = read_json(out_path.as_path());
    let stop_ids = result["route"]["chargingStops"]
        .as_array()
        .map(|stops| stops.iter().filter_map(|stop| stop["id"].as_str()).collect::<Vec<_>>())
        .unwrap_or_default();
    assert_eq!(result["success"], true);
    assert_eq!(stop_ids, vec!["WEST-001", "WEST-002"]);

    let geo_json = read_json(geo_json_path.as_path());
    assert_eq!(geo_json["type"], "FeatureCollection");
    assert_eq!(geo_json["features"].as_array().map(|features| features.len()), Some(5));
}

#[test]
fn can_report_invalid_request() {
    let tmpdir = TempDir::new().expect("cannot create temporary folder");
    let out_path = tmpdir.path().join("route.json");

    let result = run_plan_with_args(&[INVALID_REQUEST_PATH, "-o", out_path.to_str().expect("invalid path")]);

    let errors = serde_json::from_str::<Value>(&result.expect_err("request should be invalid")).expect("invalid json");
    let codes = errors.as_array().map(|errors| errors.iter().map(|err| err["code"].clone()).collect::<Vec<_>>());
    assert_eq!(codes, Some(vec![Value::from("E1000"), Value::from("E1002"), Value::from("E1003")]));
    assert!(!out_path.exists());
}

#[test]
fn can_report_missing_files() {
    assert!(run_plan_with_args(&["data/unknown.json"]).is_err_and(|err| err.contains("cannot open request")));
    assert!(
        run_plan_with_args(&[SHORT_TRIP_REQUEST_PATH, "-c", "data/unknown.json"])
            .is_err_and(|err| err.contains("cannot open config"))
    );
}

#[test]
fn can_reject_invalid_seed() {
    let result = run_plan_with_args(&[SHORT_TRIP_REQUEST_PATH, "--seed", "abc"]);

    assert!(result.is_err_and(|err| err.contains("random seed")));
}

#[test]
fn can_require_request_argument() {
    assert!(get_plan_app().try_get_matches_from(vec!["plan"]).is_err());
}
