use std::{env, fs, process};

use rr_tools::check::{run_check, CheckOutcome};
use rr_tools::error::ToolError;
use rr_tools::proc::Ticks;

const DEFAULT_INPUT: &str = "input.txt";
const DEFAULT_SOLVER: &str = "solver.txt";

fn main() {
    match run() {
        Ok(CheckOutcome::Match(report)) => println!("{report}"),
        Ok(CheckOutcome::Mismatch(diff)) => {
            print!("{diff}");
            process::exit(1);
        }
        Err(err) => {
            eprintln!("{err}");
            process::exit(err.exit_code());
        }
    }
}

fn run() -> Result<CheckOutcome, ToolError> {
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 || args.len() > 4 {
        let prog = args.first().map(String::as_str).unwrap_or("check");
        return Err(ToolError::usage(format!(
            "USAGE: {prog} QUANTUM_LENGTH [INPUT_FILE] [SOLVER_OUTPUT]"
        )));
    }

    let quantum = parse_quantum(&args[1])?;
    let input_path = args.get(2).map(String::as_str).unwrap_or(DEFAULT_INPUT);
    let solver_path = args.get(3).map(String::as_str).unwrap_or(DEFAULT_SOLVER);

    let input_text = fs::read_to_string(input_path)
        .map_err(|err| ToolError::usage(format!("cannot read {input_path}: {err}")))?;
    let solver_text = fs::read_to_string(solver_path)
        .map_err(|err| ToolError::usage(format!("cannot read {solver_path}: {err}")))?;

    run_check(&input_text, &solver_text, quantum)
}

fn parse_quantum(arg: &str) -> Result<Ticks, ToolError> {
    let quantum: i64 = arg.parse().map_err(|_| {
        ToolError::usage(format!("quantum length must be an integer, got {arg:?}"))
    })?;
    if quantum < 1 {
        return Err(ToolError::validation("quantum length must be positive"));
    }
    Ok(quantum as Ticks)
}
