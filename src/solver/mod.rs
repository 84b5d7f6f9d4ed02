pub mod gantt;
pub mod stats;
pub mod text;

pub use gantt::GanttSegment;

use crate::error::ToolError;
use crate::report::Report;

// Full pipeline over the text pasted from the web solver: verify the
// algorithm, isolate the chart and table, rebuild segments, recompute the
// averages the simulator also reports.
pub fn parse_report(raw: &str) -> Result<Report, ToolError> {
    text::ensure_round_robin(raw)?;
    let sections = text::split_sections(raw)?;
    let segments = gantt::parse_segments(&sections.gantt, sections.num_entries)?;
    stats::derive_report(&segments, &sections.table, sections.num_entries)
}

#[cfg(test)]
mod tests {
    use super::parse_report;
    use crate::error::ToolError;

    // Paste of the reference set (arrivals 0 2 4 5, bursts 7 4 1 4) solved
    // at quantum 3.
    const REFERENCE_PASTE: &str = "\
Process Scheduling Solver
Algorithm
Round-Robin, RR
Arrival Times
0 2 4 5
Burst Times
7 4 1 4
Time Quantum
3
Output
Gantt Chart
A
B
A
C
D
B
A
D
0
3
6
9
10
13
14
15
16
Job
A\t0\t7\t15\t15\t8
B\t2\t4\t14\t12\t8
C\t4\t1\t10\t6\t5
D\t5\t4\t16\t11\t7
Average\t28 / 4 = 7.000\t44 / 4 = 11.000
";

    #[test]
    fn reference_paste_matches_documented_output() {
        let report = parse_report(REFERENCE_PASTE).unwrap();
        assert_eq!(
            report.to_string(),
            "Average waiting time: 7.00\nAverage response time: 2.75"
        );
    }

    #[test]
    fn wrong_algorithm_is_rejected_before_parsing() {
        let text = REFERENCE_PASTE.replace("Round-Robin, RR", "Priority, PR");
        let err = parse_report(&text).unwrap_err();
        assert!(matches!(err, ToolError::Parse(_)), "{err}");
    }

    #[test]
    fn truncated_paste_is_rejected() {
        let text = &REFERENCE_PASTE[..REFERENCE_PASTE.find("Job").unwrap()];
        let err = parse_report(text).unwrap_err();
        assert!(matches!(err, ToolError::Parse(_)), "{err}");
    }
}
