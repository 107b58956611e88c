use clap::{Arg, ArgAction, ArgMatches, Command};

pub mod solve;

use cvrp_core::prelude::GenericResult;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::str::FromStr;

/// Creates a buffered writer into the file at given path, truncating it if it exists.
pub(crate) fn create_file_writer(path: &str) -> GenericResult<BufWriter<Box<dyn Write>>> {
    let file = create_file(path, "out solution")?;

    Ok(BufWriter::new(Box::new(file)))
}

fn open_file(path: &str, description: &str) -> GenericResult<File> {
    File::open(path).map_err(|err| format!("cannot open {description} file '{path}': '{err}'").into())
}

fn create_file(path: &str, description: &str) -> GenericResult<File> {
    File::create(path).map_err(|err| format!("cannot create {description} file '{path}': '{err}'").into())
}

fn parse_int_value<T: FromStr<Err = std::num::ParseIntError>>(
    matches: &ArgMatches,
    arg_name: &str,
    arg_desc: &str,
) -> GenericResult<Option<T>> {
    matches
        .get_one::<String>(arg_name)
        .map(|arg| {
            arg.parse::<T>()
                .map_err(|err| format!("cannot get integer value, error: '{err}': '{arg_desc}'").into())
                .map(Some)
        })
        .unwrap_or(Ok(None))
}
