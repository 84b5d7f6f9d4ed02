use std::{env, fs, process};

use rand::rngs::StdRng;
use rand::SeedableRng;
use rr_tools::error::ToolError;
use rr_tools::gen::{self, GenConfig};

fn main() {
    if let Err(err) = run() {
        eprintln!("{err}");
        process::exit(err.exit_code());
    }
}

fn run() -> Result<(), ToolError> {
    let args: Vec<String> = env::args().collect();
    let prog = args.first().map(String::as_str).unwrap_or("generate");
    let usage = format!(
        "USAGE: {prog} [NUM] [-a|--arrival 'MIN-MAX'] [-b|--burst 'MIN-MAX'] \
         [-s|--seed SEED] [-o|--output FILE]"
    );

    let mut cfg = GenConfig::default();
    let mut seed: Option<u64> = None;
    let mut output: Option<String> = None;
    let mut num_seen = false;

    let mut rest = args[1..].iter();
    while let Some(arg) = rest.next() {
        match arg.as_str() {
            "-a" | "--arrival" => cfg.arrival = gen::parse_bounds(expect_value(arg, &mut rest)?)?,
            "-b" | "--burst" => cfg.burst = gen::parse_bounds(expect_value(arg, &mut rest)?)?,
            "-o" | "--output" => output = Some(expect_value(arg, &mut rest)?.clone()),
            "-s" | "--seed" => {
                let value = expect_value(arg, &mut rest)?;
                seed = Some(value.parse().map_err(|_| {
                    ToolError::usage(format!("seed must be an integer, got {value:?}"))
                })?);
            }
            _ if arg.starts_with('-') => {
                return Err(ToolError::usage(format!("unknown option {arg:?}\n{usage}")))
            }
            _ if !num_seen => {
                num_seen = true;
                cfg.num = arg.parse().map_err(|_| {
                    ToolError::usage(format!("number of entries must be an integer, got {arg:?}"))
                })?;
            }
            _ => return Err(ToolError::usage(format!("unexpected argument {arg:?}\n{usage}"))),
        }
    }

    cfg.validate()?;

    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let case = gen::generate(&cfg, &mut rng);

    let (arrivals, bursts) = case.solver_lists();
    println!("{arrivals}");
    println!("{bursts}");

    if let Some(path) = output {
        fs::write(&path, case.input_file())
            .map_err(|err| ToolError::usage(format!("cannot write {path}: {err}")))?;
    }
    Ok(())
}

fn expect_value<'a>(
    flag: &str,
    rest: &mut std::slice::Iter<'a, String>,
) -> Result<&'a String, ToolError> {
    rest.next()
        .ok_or_else(|| ToolError::usage(format!("option {flag} expects a value")))
}
