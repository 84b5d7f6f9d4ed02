use crate::error::ToolError;

// The copy-pasted solver page, split into the two regions the stats need.
// Line numbers are 1-based and kept for error reporting.
#[derive(Debug)]
pub struct Sections<'a> {
    pub gantt: Vec<(usize, &'a str)>,
    pub table: Vec<(usize, &'a str)>,
    pub num_entries: usize,
}

pub fn ensure_round_robin(raw: &str) -> Result<(), ToolError> {
    if raw.lines().any(|line| line.trim() == "Round-Robin, RR") {
        Ok(())
    } else {
        Err(ToolError::parse(
            "the pasted text does not show Round-Robin, RR as the selected algorithm",
        ))
    }
}

pub fn split_sections(raw: &str) -> Result<Sections<'_>, ToolError> {
    let lines: Vec<(usize, &str)> = raw
        .lines()
        .enumerate()
        .map(|(index, line)| (index + 1, line))
        .collect();

    let chart_at = lines
        .iter()
        .position(|(_, line)| line.trim() == "Gantt Chart")
        .ok_or_else(|| ToolError::parse("could not find the Gantt Chart header"))?;

    let header_at = lines[chart_at + 1..]
        .iter()
        .position(|(_, line)| line.trim_start().starts_with("Job"))
        .map(|offset| chart_at + 1 + offset)
        .ok_or_else(|| ToolError::parse("could not find the Job table header"))?;

    let average_at = lines[header_at + 1..]
        .iter()
        .position(|(_, line)| line.trim_start().starts_with("Average"))
        .map(|offset| header_at + 1 + offset)
        .ok_or_else(|| ToolError::parse("could not find the Average table row"))?;

    let num_entries = parse_entry_count(lines[average_at].0, lines[average_at].1)?;

    Ok(Sections {
        gantt: lines[chart_at + 1..header_at].to_vec(),
        table: lines[header_at + 1..average_at]
            .iter()
            .filter(|(_, line)| !line.trim().is_empty())
            .copied()
            .collect(),
        num_entries,
    })
}

// "Average  5587 / 30 = 186.233  ..." -> 30, the number of table entries.
fn parse_entry_count(line_no: usize, line: &str) -> Result<usize, ToolError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();

    let count = tokens.iter().enumerate().find_map(|(index, token)| {
        if *token == "/" {
            tokens.get(index + 1)?.parse().ok()
        } else {
            let (_, after) = token.split_once('/')?;
            after.trim_end_matches('=').parse().ok()
        }
    });

    match count {
        Some(count) if count > 0 => Ok(count),
        _ => Err(ToolError::parse(format!(
            "line {line_no}: could not read the entry count from the Average row"
        ))),
    }
}
