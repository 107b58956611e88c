#[cfg(test)]
#[path = "../../tests/unit/common/initial_reader_test.rs"]
mod initial_reader_test;

use crate::common::{LineReader, expect_end, parse_value};
use cvrp_core::models::{Fleet, Problem};
use cvrp_core::prelude::{CustomerId, DEPOT, Float, GenericResult};
use std::io::{BufReader, Read};
use std::sync::Arc;

/// Reads initial solution written in the solution format. The solution is checked against
/// the problem, the cost line is parsed but its value is not used.
pub fn read_init_solution<R: Read>(reader: BufReader<R>, problem: Arc<Problem>) -> GenericResult<Fleet> {
    let mut reader = LineReader::new(reader);

    let (line, header) = reader.next_line()?.ok_or("cannot read initial solution: cost line is missing")?;
    let mut tokens = header.split_whitespace();
    parse_value::<Float>(tokens.next(), "cost", line)?;
    parse_value::<u8>(tokens.next(), "optimality flag", line)?;
    expect_end(tokens, line)?;

    let mut routes = Vec::with_capacity(problem.vehicles());
    while let Some((line, text)) = reader.next_line()? {
        let sequence = text
            .split_whitespace()
            .map(|token| parse_value::<CustomerId>(Some(token), "customer", line))
            .collect::<GenericResult<Vec<_>>>()?;

        match sequence.as_slice() {
            [DEPOT, customers @ .., DEPOT] => routes.push(customers.to_vec()),
            _ => return Err(format!("line {line}: route must start and end at the depot").into()),
        }
    }

    Fleet::from_routes(problem.as_ref(), routes).map_err(|err| format!("invalid initial solution: {err}").into())
}
