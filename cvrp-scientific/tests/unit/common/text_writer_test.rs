use super::*;
use crate::helpers::create_vrp_5_4_1_problem;

#[test]
fn can_write_solution() {
    let problem = create_vrp_5_4_1_problem();
    let fleet = Fleet::from_routes(problem.as_ref(), vec![vec![3, 1], vec![], vec![2, 4], vec![]])
        .expect("cannot create fleet");
    let mut buffer = Vec::new();

    write_cvrp(BufWriter::new(&mut buffer), &fleet, 80.6423).expect("cannot write solution");

    assert_eq!(String::from_utf8(buffer).expect("invalid utf8"), "80.642300 0\n0 3 1 0\n0 0\n0 2 4 0\n0 0\n");
}
