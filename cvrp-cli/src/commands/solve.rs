#[cfg(test)]
#[path = "../../tests/unit/commands/solve_test.rs"]
mod solve_test;

use super::*;

use cvrp_cli::extensions::solve::config::{create_builder_from_config, read_config};
use cvrp_cli::extensions::solve::interruption::create_interruption_quota;
use cvrp_core::prelude::*;
use cvrp_scientific::common::{read_init_solution, write_cvrp};
use cvrp_scientific::cvrp::CvrpProblem;
use std::io::BufReader;
use std::sync::Arc;

const PROBLEM_ARG_NAME: &str = "PROBLEM";
const ITERATIONS_ARG_NAME: &str = "max-iterations";
const TIME_ARG_NAME: &str = "max-time";
const CONFIG_ARG_NAME: &str = "config";
const OUT_RESULT_ARG_NAME: &str = "out-result";
const INIT_SOLUTION_ARG_NAME: &str = "init-solution";
const LOG_ARG_NAME: &str = "log";
const CHECK_ARG_NAME: &str = "check";

const DEFAULT_OUT_RESULT: &str = "cvrp_output.txt";

/// Creates a writer for the solution file at given path.
pub type OutWriterFunc = fn(&str) -> GenericResult<BufWriter<Box<dyn Write>>>;

pub fn get_solve_app() -> Command {
    Command::new("cvrp")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Solves Capacitated Vehicle Routing Problem using guided local search")
        .arg(Arg::new(PROBLEM_ARG_NAME).help("Sets the problem file to use").required(true).index(1))
        .arg(
            Arg::new(ITERATIONS_ARG_NAME)
                .help("Specifies maximum number of search iterations")
                .short('n')
                .long(ITERATIONS_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(TIME_ARG_NAME)
                .help("Specifies max time algorithm run in seconds")
                .short('t')
                .long(TIME_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(CONFIG_ARG_NAME)
                .help("Specifies path to algorithm configuration file")
                .short('c')
                .long(CONFIG_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(OUT_RESULT_ARG_NAME)
                .help("Specifies path to file for result output, it is rewritten on each new best solution")
                .short('o')
                .long(OUT_RESULT_ARG_NAME)
                .default_value(DEFAULT_OUT_RESULT),
        )
        .arg(
            Arg::new(INIT_SOLUTION_ARG_NAME)
                .help("Specifies path to file with initial solution")
                .short('i')
                .long(INIT_SOLUTION_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(LOG_ARG_NAME)
                .help("Specifies whether default logging is enabled")
                .long(LOG_ARG_NAME)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new(CHECK_ARG_NAME)
                .help("Specifies whether final solution should be checked for feasibility")
                .long(CHECK_ARG_NAME)
                .action(ArgAction::SetTrue),
        )
}

/// Runs solver command.
pub fn run_solve(matches: &ArgMatches, out_writer_func: OutWriterFunc) -> GenericResult<()> {
    // required
    let problem_path = matches.get_one::<String>(PROBLEM_ARG_NAME).ok_or("problem path is not specified")?;
    let problem = open_file(problem_path, "problem")
        .and_then(|file| BufReader::new(file).read_cvrp())
        .map_err(|err| format!("cannot read problem from '{problem_path}': {err}"))?;
    let problem = Arc::new(problem);

    // optional
    let max_iterations = parse_int_value::<usize>(matches, ITERATIONS_ARG_NAME, "max iterations")?;
    let max_time = parse_int_value::<usize>(matches, TIME_ARG_NAME, "max time")?;
    let out_path = matches.get_one::<String>(OUT_RESULT_ARG_NAME).cloned().unwrap_or(DEFAULT_OUT_RESULT.to_string());
    let is_check_requested = matches.get_flag(CHECK_ARG_NAME);

    let config = matches
        .get_one::<String>(CONFIG_ARG_NAME)
        .map(|path| open_file(path, "config").and_then(|file| read_config(BufReader::new(file))))
        .transpose()?
        .unwrap_or_default();
    let config = if matches.get_flag(LOG_ARG_NAME) { config.with_logging_enabled() } else { config };

    // NOTE read before the observer truncates the out file which can be the same one
    let init_fleet = matches
        .get_one::<String>(INIT_SOLUTION_ARG_NAME)
        .map(|path| {
            open_file(path, "init solution")
                .and_then(|file| read_init_solution(BufReader::new(file), problem.clone()))
                .map_err(|err| GenericError::from(format!("cannot read initial solution '{err}'")))
        })
        .transpose()?;

    let observer: Arc<dyn SolutionObserver + Send + Sync> = Arc::new({
        let out_path = out_path.clone();
        move |fleet: &Fleet, cost: Float| write_cvrp(out_writer_func(out_path.as_str())?, fleet, cost)
    });

    let mut builder = create_builder_from_config(problem.clone(), Some(create_interruption_quota()?), &config)?
        .with_max_iterations(max_iterations)
        .with_max_time(max_time)
        .with_observer(observer);

    if let Some(fleet) = init_fleet {
        builder = builder.with_initial_fleet(fleet);
    }

    let (fleet, cost, _) = builder
        .build()
        .and_then(|solver| solver.solve())
        .map_err(|err| format!("cannot find any solution: '{err}'"))?;

    write_cvrp(out_writer_func(out_path.as_str())?, &fleet, cost)?;

    if is_check_requested {
        check_fleet(problem.as_ref(), &fleet).map_err(|err| format!("checker found errors: {err}"))?;
        println!("solution feasibility check is completed successfully");
    }

    Ok(())
}
