use super::*;
use crate::models::common::distance_to_line;

fn generate_any_point() -> impl Strategy<Value = Point> {
    generate_point(-89.0..89.0, -179.0..179.0)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]
    #[test]
    fn can_calculate_symmetric_distance(first in generate_any_point(), second in generate_any_point()) {
        let forward = first.distance_to(&second);
        let backward = second.distance_to(&first);

        prop_assert!(forward >= 0.);
        prop_assert!((forward - backward).abs() < 1E-6);
        prop_assert!(first.distance_to(&first).abs() < 1E-9);
    }

    #[test]
    fn can_satisfy_triangle_inequality(
        first in generate_any_point(),
        second in generate_any_point(),
        third in generate_any_point(),
    ) {
        let direct = first.distance_to(&third);
        let through = first.distance_to(&second) + second.distance_to(&third);

        prop_assert!(direct <= through + 1E-6);
    }

    #[test]
    fn can_bound_distance_to_line_by_distance_to_ends(
        start in generate_point(40.0..55.0, 20.0..40.0),
        end in generate_point(40.0..55.0, 20.0..40.0),
        point in generate_point(40.0..55.0, 20.0..40.0),
    ) {
        let distance = distance_to_line(&start, &end, &point);
        let to_start = distance_to_line(&start, &start, &point);
        let to_end = distance_to_line(&end, &end, &point);
        let middle = Point::new((start.lat + end.lat) / 2., (start.lon + end.lon) / 2.);

        prop_assert!(distance >= 0.);
        prop_assert!(distance <= to_start.min(to_end) + 1E-6);
        prop_assert!(distance_to_line(&start, &end, &middle) < 1E-6);
    }
}
