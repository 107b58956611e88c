use super::*;

#[test]
fn can_compute_euclidean_distances() {
    let table = DistanceTable::new(
        vec![Coordinate { x: 0., y: 0. }, Coordinate { x: 3., y: 4. }, Coordinate { x: 3., y: 0. }].into_iter(),
    );

    assert_eq!(table.size(), 3);
    assert_eq!(table.distance(0, 1), 5.);
    assert_eq!(table.distance(1, 0), 5.);
    assert_eq!(table.distance(1, 2), 4.);
    assert_eq!(table.distance(0, 2), 3.);
    (0..3).for_each(|idx| assert_eq!(table.distance(idx, idx), 0.));
}
