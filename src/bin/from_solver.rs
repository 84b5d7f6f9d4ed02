use std::{env, process};

use rr_tools::convert;
use rr_tools::error::ToolError;

fn main() {
    if let Err(err) = run() {
        eprintln!("{err}");
        process::exit(err.exit_code());
    }
}

fn run() -> Result<(), ToolError> {
    let args: Vec<String> = env::args().collect();
    if args.len() != 3 {
        let prog = args.first().map(String::as_str).unwrap_or("from_solver");
        return Err(ToolError::usage(format!("USAGE: {prog} 'ARRIVALS' 'BURSTS'")));
    }

    let text = convert::from_solver_lists(&args[1], &args[2])?;
    print!("{text}");
    Ok(())
}
