#[cfg(test)]
#[path = "../../tests/unit/common/text_reader_test.rs"]
mod text_reader_test;

use cvrp_core::prelude::{GenericError, GenericResult};
use std::fmt::Display;
use std::io::prelude::*;
use std::io::{BufReader, Read};
use std::str::FromStr;

/// Reads non-empty lines keeping track of their numbers.
pub(crate) struct LineReader<R: Read> {
    reader: BufReader<R>,
    buffer: String,
    line: usize,
}

impl<R: Read> LineReader<R> {
    pub fn new(reader: BufReader<R>) -> Self {
        Self { reader, buffer: String::new(), line: 0 }
    }

    /// Returns the next non-empty line with its number, or none at the end of input.
    pub fn next_line(&mut self) -> GenericResult<Option<(usize, &str)>> {
        loop {
            self.buffer.clear();
            if self.reader.read_line(&mut self.buffer)? == 0 {
                return Ok(None);
            }
            self.line += 1;

            if !self.buffer.trim().is_empty() {
                return Ok(Some((self.line, self.buffer.trim())));
            }
        }
    }
}

/// Parses a named value from the token found at the given line.
pub(crate) fn parse_value<T>(token: Option<&str>, name: &str, line: usize) -> GenericResult<T>
where
    T: FromStr,
    T::Err: Display,
{
    let token = token.ok_or_else(|| GenericError::from(format!("line {line}: {name} is missing")))?;

    token.parse::<T>().map_err(|err| format!("line {line}: cannot parse {name} from '{token}': {err}").into())
}

/// Checks that there are no more tokens left at the given line.
pub(crate) fn expect_end<'a>(mut tokens: impl Iterator<Item = &'a str>, line: usize) -> GenericResult<()> {
    match tokens.next() {
        Some(token) => Err(format!("line {line}: unexpected token '{token}'").into()),
        None => Ok(()),
    }
}
