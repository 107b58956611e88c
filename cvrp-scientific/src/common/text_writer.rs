#[cfg(test)]
#[path = "../../tests/unit/common/text_writer_test.rs"]
mod text_writer_test;

use cvrp_core::models::Fleet;
use cvrp_core::prelude::{DEPOT, Float, GenericResult};
use std::io::{BufWriter, Write};

/// Writes the solution: the cost line followed by one line per vehicle, including unused ones.
pub fn write_cvrp<W: Write>(writer: BufWriter<W>, fleet: &Fleet, cost: Float) -> GenericResult<()> {
    let mut writer = writer;

    writer.write_all(format!("{cost:.6} 0\n").as_bytes())?;

    fleet.vehicles().iter().try_for_each(|vehicle| {
        let customers = vehicle
            .tour()
            .tail(0)
            .chain(std::iter::once(DEPOT))
            .map(|customer| customer.to_string())
            .collect::<Vec<_>>()
            .join(" ");

        writer.write_all(format!("{customers}\n").as_bytes())
    })?;

    writer.flush()?;

    Ok(())
}
