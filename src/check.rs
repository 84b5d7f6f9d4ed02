use crate::error::ToolError;
use crate::proc::Ticks;
use crate::sim::simulate;
use crate::solver::parse_report;
use crate::{input, report::Report};

#[derive(Debug)]
pub enum CheckOutcome {
    // Both pipelines produced this byte-identical report.
    Match(Report),
    // The rendered reports differ; holds a unified diff of the two.
    Mismatch(String),
}

// Run the simulator over the input file and the parser over the pasted
// solver output, then diff the two renderings. A mismatch is a detected
// inequality, not a tool failure.
pub fn run_check(
    input_text: &str,
    solver_text: &str,
    quantum: Ticks,
) -> Result<CheckOutcome, ToolError> {
    let table = input::parse_input(input_text)?;
    let simulated = simulate(table, quantum)?;
    let parsed = parse_report(solver_text)?;

    let ours = simulated.to_string();
    let theirs = parsed.to_string();
    if ours == theirs {
        Ok(CheckOutcome::Match(simulated))
    } else {
        Ok(CheckOutcome::Mismatch(unified_diff(&ours, &theirs, "rr", "solver")))
    }
}

// Minimal single-hunk unified diff; the reports are two lines, so
// position-wise comparison is all the structure needed.
pub fn unified_diff(ours: &str, theirs: &str, ours_name: &str, theirs_name: &str) -> String {
    let our_lines: Vec<&str> = ours.lines().collect();
    let their_lines: Vec<&str> = theirs.lines().collect();

    let mut diff = format!(
        "--- {ours_name}\n+++ {theirs_name}\n@@ -1,{} +1,{} @@\n",
        our_lines.len(),
        their_lines.len()
    );
    for index in 0..our_lines.len().max(their_lines.len()) {
        match (our_lines.get(index), their_lines.get(index)) {
            (Some(a), Some(b)) if a == b => {
                diff.push_str(&format!(" {a}\n"));
            }
            (a, b) => {
                if let Some(a) = a {
                    diff.push_str(&format!("-{a}\n"));
                }
                if let Some(b) = b {
                    diff.push_str(&format!("+{b}\n"));
                }
            }
        }
    }
    diff
}
