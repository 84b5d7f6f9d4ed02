use crate::error::ToolError;
use crate::input::render_input;
use crate::proc::{Process, Ticks};

// Input file -> the two whitespace-separated lists the web solver's form
// fields take: arrivals in id order, then bursts.
pub fn to_solver_lists(table: &[Process]) -> (String, String) {
    let mut by_id: Vec<&Process> = table.iter().collect();
    by_id.sort_by_key(|p| p.pid);

    let arrivals = join_times(by_id.iter().map(|p| p.arrival_time));
    let bursts = join_times(by_id.iter().map(|p| p.burst_time));
    (arrivals, bursts)
}

// Inverse transform: two pasted lists back into input-file text, ids
// renumbered sequentially from 1.
pub fn from_solver_lists(arrivals: &str, bursts: &str) -> Result<String, ToolError> {
    let arrivals = parse_list(arrivals, "arrival")?;
    let bursts = parse_list(bursts, "burst")?;

    if arrivals.len() != bursts.len() {
        return Err(ToolError::validation(format!(
            "arrival list has {} entries but burst list has {}",
            arrivals.len(),
            bursts.len()
        )));
    }
    if arrivals.is_empty() {
        return Err(ToolError::validation("lists must not be empty"));
    }
    if let Some(burst) = bursts.iter().find(|&&b| b == 0) {
        return Err(ToolError::validation(format!(
            "burst time must be positive, got {burst}"
        )));
    }

    let pairs: Vec<(Ticks, Ticks)> = arrivals.into_iter().zip(bursts).collect();
    Ok(render_input(&pairs))
}

fn parse_list(text: &str, what: &str) -> Result<Vec<Ticks>, ToolError> {
    text.split_whitespace()
        .map(|token| {
            token
                .parse()
                .map_err(|_| ToolError::parse(format!("non-numeric {what} time {token:?}")))
        })
        .collect()
}

fn join_times(times: impl Iterator<Item = Ticks>) -> String {
    times
        .map(|t| t.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
