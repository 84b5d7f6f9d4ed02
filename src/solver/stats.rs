use super::gantt::GanttSegment;
use crate::error::ToolError;
use crate::proc::Ticks;
use crate::report::Report;
use rustc_hash::FxHashMap;

// Per-process times rebuilt from the chart, independent of the waiting
// column the solver page already shows.
struct ProcTimes {
    arrival: Option<Ticks>,
    first_run: Ticks,
    completion: Ticks,
    service: Ticks,
}

pub fn derive_report(
    segments: &[GanttSegment],
    table: &[(usize, &str)],
    num_entries: usize,
) -> Result<Report, ToolError> {
    // First-seen order keeps error reporting deterministic.
    let mut order: Vec<&str> = Vec::new();
    let mut times: FxHashMap<&str, ProcTimes> = FxHashMap::default();

    for segment in segments {
        let entry = times.entry(&segment.label).or_insert_with(|| {
            order.push(&segment.label);
            ProcTimes {
                arrival: None,
                first_run: segment.start,
                completion: segment.end(),
                service: 0,
            }
        });
        // Segments are chronological, so the last write wins.
        entry.completion = segment.end();
        entry.service += segment.duration;
    }

    if table.len() != num_entries {
        return Err(ToolError::parse(format!(
            "the Average row reports {num_entries} processes but the table has {} rows",
            table.len()
        )));
    }

    for &(line_no, line) in table {
        let mut tokens = line.split_whitespace();
        let label = tokens
            .next()
            .expect("blank table rows are filtered during sectioning");
        let arrival_token = tokens.next().ok_or_else(|| {
            ToolError::parse(format!("line {line_no}: table row has no arrival time"))
        })?;
        let arrival: Ticks = arrival_token.parse().map_err(|_| {
            ToolError::parse(format!(
                "line {line_no}: non-numeric arrival time {arrival_token:?}"
            ))
        })?;

        let entry = times.get_mut(label).ok_or_else(|| {
            ToolError::parse(format!(
                "line {line_no}: process {label:?} appears in the table but never in the Gantt chart"
            ))
        })?;
        if entry.arrival.is_some() {
            return Err(ToolError::parse(format!(
                "line {line_no}: duplicate table row for process {label:?}"
            )));
        }
        entry.arrival = Some(arrival);
    }

    let mut waiting = Vec::with_capacity(order.len());
    let mut response = Vec::with_capacity(order.len());
    for label in order {
        let entry = &times[label];
        let arrival = entry.arrival.ok_or_else(|| {
            ToolError::parse(format!(
                "process {label:?} runs in the Gantt chart but has no table row"
            ))
        })?;

        let first_run = entry.first_run.checked_sub(arrival).ok_or_else(|| {
            ToolError::parse(format!(
                "process {label:?} first runs at {} before its arrival at {arrival}",
                entry.first_run
            ))
        })?;
        response.push(first_run);

        let turnaround = entry.completion.checked_sub(arrival);
        let wait = turnaround.and_then(|t| t.checked_sub(entry.service));
        match wait {
            Some(wait) => waiting.push(wait),
            None => {
                return Err(ToolError::parse(format!(
                    "inconsistent times for process {label:?}: completed at {} after arriving \
                     at {arrival} with {} units of service",
                    entry.completion, entry.service
                )))
            }
        }
    }

    Ok(Report::from_times(&waiting, &response))
}

#[cfg(test)]
mod tests {
    use super::derive_report;
    use crate::error::ToolError;
    use crate::solver::gantt::GanttSegment;

    fn seg(label: &str, start: u64, duration: u64) -> GanttSegment {
        GanttSegment {
            label: label.to_string(),
            start,
            duration,
        }
    }

    #[test]
    fn preempted_process_spans_first_to_last_segment() {
        // A runs [0,3) and [5,7); B runs [3,5).
        let segments = vec![seg("A", 0, 3), seg("B", 3, 2), seg("A", 5, 2)];
        let table = vec![(1, "A\t0\t5\t7\t7\t2"), (2, "B\t1\t2\t5\t4\t2")];
        let report = derive_report(&segments, &table, 2).unwrap();
        // A: wait 7-0-5=2 resp 0; B: wait 5-1-2=2 resp 2.
        assert_eq!(
            report.to_string(),
            "Average waiting time: 2.00\nAverage response time: 1.00"
        );
    }

    #[test]
    fn row_count_mismatch_is_reported() {
        let segments = vec![seg("A", 0, 3)];
        let err = derive_report(&segments, &[(1, "A 0 3 3 3 0")], 2).unwrap_err();
        assert!(matches!(err, ToolError::Parse(_)), "{err}");
    }

    #[test]
    fn charted_process_missing_from_table() {
        let segments = vec![seg("A", 0, 3), seg("B", 3, 1)];
        let err = derive_report(&segments, &[(1, "A 0 3 3 3 0"), (2, "C 0 1 4 4 3")], 2)
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "parse error: line 2: process \"C\" appears in the table but never in the Gantt chart"
        );
    }

    #[test]
    fn first_run_before_arrival_is_inconsistent() {
        let segments = vec![seg("A", 0, 3)];
        let err = derive_report(&segments, &[(1, "A 2 3 3 3 0")], 1).unwrap_err();
        assert!(matches!(err, ToolError::Parse(_)), "{err}");
    }

    #[test]
    fn non_numeric_arrival_names_the_line() {
        let segments = vec![seg("A", 0, 3)];
        let err = derive_report(&segments, &[(7, "A x 3 3 3 0")], 1).unwrap_err();
        assert_eq!(
            err.to_string(),
            "parse error: line 7: non-numeric arrival time \"x\""
        );
    }
}
