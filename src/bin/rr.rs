use std::{env, fs, process};

use rr_tools::error::ToolError;
use rr_tools::proc::Ticks;
use rr_tools::{input, sim};

fn main() {
    if let Err(err) = run() {
        eprintln!("{err}");
        process::exit(err.exit_code());
    }
}

fn run() -> Result<(), ToolError> {
    let args: Vec<String> = env::args().collect();
    if args.len() != 3 {
        let prog = args.first().map(String::as_str).unwrap_or("rr");
        return Err(ToolError::usage(format!(
            "USAGE: {prog} INPUT_FILE QUANTUM_LENGTH"
        )));
    }

    let text = fs::read_to_string(&args[1])
        .map_err(|err| ToolError::usage(format!("cannot read {}: {err}", args[1])))?;
    let quantum = parse_quantum(&args[2])?;

    let table = input::parse_input(&text)?;
    let report = sim::simulate(table, quantum)?;
    println!("{report}");
    Ok(())
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
