use std::{env, fs, process};

use rr_tools::error::ToolError;
use rr_tools::solver;

fn main() {
    if let Err(err) = run() {
        eprintln!("{err}");
        process::exit(err.exit_code());
    }
}

fn run() -> Result<(), ToolError> {
    let args: Vec<String> = env::args().collect();
    if args.len() != 2 {
        let prog = args.first().map(String::as_str).unwrap_or("solver");
        return Err(ToolError::usage(format!("USAGE: {prog} SOLVER_OUTPUT_FILE")));
    }

    let text = fs::read_to_string(&args[1])
        .map_err(|err| ToolError::usage(format!("cannot read {}: {err}", args[1])))?;
    let report = solver::parse_report(&text)?;
    println!("{report}");
    Ok(())
}
