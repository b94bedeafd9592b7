use super::*;

parameterized_test! {can_calculate_haversine_distance, (a, b, expected), {
    can_calculate_haversine_distance_impl(a, b, expected);
}}

can_calculate_haversine_distance! {
    case01_same_point: ((50.4501, 30.5234), (50.4501, 30.5234), 0.),
    case02_one_degree_on_equator: ((0., 0.), (0., 1.), 111.19),
    case03_kyiv_lviv: ((50.4501, 30.5234), (49.8397, 24.0297), 467.5),
    case04_paris_warsaw: ((48.8566, 2.3522), (52.2297, 21.0122), 1366.5),
}

fn can_calculate_haversine_distance_impl(a: (f64, f64), b: (f64, f64), expected: f64) {
    let (a, b) = (Point::new(a.0, a.1), Point::new(b.0, b.1));

    assert_approx!(a.distance_to(&b), expected, 0.5);
    assert_approx!(b.distance_to(&a), expected, 0.5);
}

#[test]
fn can_keep_distance_symmetric_and_zero_for_identity() {
    let a = Point::with_address(49.2328, 28.4810, "Vinnytsia");
    let b = Point::new(46.4825, 30.7233);

    assert_eq!(a.distance_to(&a), 0.);
    assert_eq!(a.distance_to(&b), b.distance_to(&a));
}

parameterized_test! {can_calculate_distance_to_line, (point, expected), {
    let start = Point::new(0., 0.);
    let end = Point::new(0., 2.);

    assert_approx!(distance_to_line(&start, &end, &Point::new(point.0, point.1)), expected, 1E-6);
}}

can_calculate_distance_to_line! {
    case01_on_line: ((0., 1.), 0.),
    case02_above_middle: ((0.5, 1.), 55.5),
    case03_before_start: ((0., -1.), 111.),
    case04_after_end: ((0., 3.), 111.),
}

#[test]
fn can_handle_degenerate_line() {
    let start = Point::new(10., 10.);

    assert_approx!(distance_to_line(&start, &start, &Point::new(11., 10.)), 111., 1E-6);
}

#[test]
fn can_compare_locations_with_tolerance() {
    let point = Point::new(50.0, 30.0);

    assert!(point.is_same_location(&Point::new(50.0005, 29.9995), 0.001));
    assert!(!point.is_same_location(&Point::new(50.002, 30.0), 0.001));
}

#[test]
fn can_serialize_point_without_address() {
    let json = serde_json::to_string(&Point::new(1., 2.)).unwrap();
    assert_eq!(json, r#"{"lat":1.0,"lon":2.0}"#);

    let point: Point = serde_json::from_str(r#"{"lat":1.5,"lon":2.5,"address":"Somewhere"}"#).unwrap();
    assert_eq!(point, Point::with_address(1.5, 2.5, "Somewhere"));
    assert_eq!(point.as_lon_lat(), [2.5, 1.5]);
}
