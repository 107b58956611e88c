#[cfg(test)]
#[path = "../../tests/unit/cvrp/reader_test.rs"]
mod reader_test;

use crate::common::{LineReader, expect_end, parse_value};
use cvrp_core::prelude::*;
use std::io::{BufReader, Read};

/// A trait to read a CVRP problem in the plain text format.
pub trait CvrpProblem {
    /// Reads a CVRP problem.
    fn read_cvrp(self) -> GenericResult<Problem>;
}

impl<R: Read> CvrpProblem for BufReader<R> {
    fn read_cvrp(self) -> GenericResult<Problem> {
        CvrpReader { reader: LineReader::new(self) }.read_problem()
    }
}

impl CvrpProblem for String {
    fn read_cvrp(self) -> GenericResult<Problem> {
        BufReader::new(self.as_bytes()).read_cvrp()
    }
}

struct CvrpReader<R: Read> {
    reader: LineReader<R>,
}

impl<R: Read> CvrpReader<R> {
    fn read_problem(&mut self) -> GenericResult<Problem> {
        let (size, vehicles, capacity) = self.read_header()?;

        let customers = (0..size).map(|idx| self.read_customer(idx, size)).collect::<GenericResult<Vec<_>>>()?;

        if let Some((line, _)) = self.reader.next_line()? {
            return Err(format!("line {line}: expected {size} customers, got more").into());
        }

        Problem::new(customers, vehicles, capacity)
    }

    fn read_header(&mut self) -> GenericResult<(usize, usize, Demand)> {
        let (line, text) = self.reader.next_line()?.ok_or("cannot read problem: header line is missing")?;
        let mut tokens = text.split_whitespace();

        let size = parse_value(tokens.next(), "customers amount", line)?;
        let vehicles = parse_value(tokens.next(), "vehicles amount", line)?;
        let capacity = parse_value(tokens.next(), "vehicle capacity", line)?;
        expect_end(tokens, line)?;

        Ok((size, vehicles, capacity))
    }

    fn read_customer(&mut self, idx: usize, size: usize) -> GenericResult<Customer> {
        let (line, text) =
            self.reader.next_line()?.ok_or_else(|| format!("cannot read problem: expected {size} customers, got {idx}"))?;
        let mut tokens = text.split_whitespace();

        let demand = parse_value(tokens.next(), "demand", line)?;
        let x = parse_value(tokens.next(), "x", line)?;
        let y = parse_value(tokens.next(), "y", line)?;
        expect_end(tokens, line)?;

        Ok(Customer::new(demand, x, y))
    }
}
