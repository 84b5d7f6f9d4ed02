use crate::error::ToolError;
use crate::proc::Ticks;
use rustc_hash::FxHashSet;

// One bar of the chart: `label` ran from `start` for `duration` units.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GanttSegment {
    pub label: String,
    pub start: Ticks,
    pub duration: Ticks,
}

impl GanttSegment {
    pub fn end(&self) -> Ticks {
        self.start + self.duration
    }
}

enum Slot {
    Proc(String),
    // "_" bars, where no process is executing.
    Idle,
}

// The pasted chart interleaves process labels and boundary times, one or
// more tokens per line, with whatever spacing and punctuation the clipboard
// preserved. S labels need S+1 boundary times.
pub fn parse_segments(
    lines: &[(usize, &str)],
    num_entries: usize,
) -> Result<Vec<GanttSegment>, ToolError> {
    // Past the 26 letters the solver labels entries "10", "11", ... which
    // collide with boundary times. Such a token is a label only once the
    // chart has already reached that time.
    let numeric_labels: FxHashSet<String> = (0..num_entries.saturating_sub(26))
        .map(|offset| (10 + offset).to_string())
        .collect();

    let mut slots: Vec<Slot> = Vec::new();
    let mut times: Vec<Ticks> = Vec::new();

    for &(line_no, line) in lines {
        for raw_token in line.split_whitespace() {
            let token = raw_token.trim_matches(|c: char| !c.is_ascii_alphanumeric() && c != '_');
            if token.is_empty() {
                continue;
            }

            if token == "_" {
                slots.push(Slot::Idle);
            } else if token.chars().all(|c| c.is_ascii_alphabetic()) {
                slots.push(Slot::Proc(token.to_string()));
            } else if token.chars().all(|c| c.is_ascii_digit()) {
                let value: Ticks = token.parse().map_err(|_| {
                    ToolError::parse(format!("line {line_no}: time {token:?} is out of range"))
                })?;

                if numeric_labels.contains(token) && times.last().is_some_and(|&t| t >= value) {
                    slots.push(Slot::Proc(token.to_string()));
                } else if times.last() != Some(&value) {
                    // Equal neighbours are the chart wrapping to a new row.
                    times.push(value);
                }
            } else {
                return Err(ToolError::parse(format!(
                    "line {line_no}: unrecognized token {raw_token:?} in the Gantt chart"
                )));
            }
        }
    }

    if slots.is_empty() {
        return Err(ToolError::parse("the Gantt chart contains no process bars"));
    }
    if times.len() != slots.len() + 1 {
        return Err(ToolError::parse(format!(
            "the Gantt chart has {} bars but {} boundary times",
            slots.len(),
            times.len()
        )));
    }
    if let Some(window) = times.windows(2).find(|w| w[0] >= w[1]) {
        return Err(ToolError::parse(format!(
            "Gantt chart times do not increase: {} then {}",
            window[0], window[1]
        )));
    }

    let segments = slots
        .into_iter()
        .zip(times.windows(2))
        .filter_map(|(slot, window)| match slot {
            Slot::Proc(label) => Some(GanttSegment {
                label,
                start: window[0],
                duration: window[1] - window[0],
            }),
            Slot::Idle => None,
        })
        .collect();

    Ok(segments)
}

#[cfg(test)]
mod tests {
    use super::{parse_segments, GanttSegment};
    use crate::error::ToolError;

    fn lines(tokens: &[&'static str]) -> Vec<(usize, &'static str)> {
        tokens
            .iter()
            .enumerate()
            .map(|(index, &token)| (index + 1, token))
            .collect()
    }

    fn seg(label: &str, start: u64, duration: u64) -> GanttSegment {
        GanttSegment {
            label: label.to_string(),
            start,
            duration,
        }
    }

    #[test]
    fn interleaved_labels_and_times() {
        let segments =
            parse_segments(&lines(&["A", "B", "A", "0", "3", "6", "7"]), 3).unwrap();
        assert_eq!(segments, vec![seg("A", 0, 3), seg("B", 3, 3), seg("A", 6, 1)]);
    }

    #[test]
    fn idle_bars_consume_their_interval() {
        let segments = parse_segments(&lines(&["_", "A", "0", "2", "5"]), 1).unwrap();
        assert_eq!(segments, vec![seg("A", 2, 3)]);
    }

    #[test]
    fn punctuation_and_spacing_are_tolerated() {
        let segments = parse_segments(&lines(&["| A |  B,", "[0", "4]", " 6 "]), 2).unwrap();
        assert_eq!(segments, vec![seg("A", 0, 4), seg("B", 4, 2)]);
    }

    #[test]
    fn wrapped_chart_duplicate_time_collapses() {
        // Row wrap repeats the shared boundary time.
        let segments = parse_segments(&lines(&["A", "B", "0", "4", "4", "9"]), 2).unwrap();
        assert_eq!(segments, vec![seg("A", 0, 4), seg("B", 4, 5)]);
    }

    #[test]
    fn numeric_label_after_its_time_has_passed() {
        // 27 entries: "10" doubles as a label once the chart is past t=10.
        let segments =
            parse_segments(&lines(&["A", "0", "11", "10", "14"]), 27).unwrap();
        assert_eq!(segments, vec![seg("A", 0, 11), seg("10", 11, 3)]);
    }

    #[test]
    fn numeric_token_before_its_time_is_a_boundary() {
        let segments = parse_segments(&lines(&["A", "0", "10", "10", "12"]), 27).unwrap();
        // First "10" is a boundary time; the repeat is past it, so a label.
        assert_eq!(segments, vec![seg("A", 0, 10), seg("10", 10, 2)]);
    }

    #[test]
    fn fence_post_mismatch_is_reported() {
        let err = parse_segments(&lines(&["A", "B", "0", "3"]), 2).unwrap_err();
        assert_eq!(
            err.to_string(),
            "parse error: the Gantt chart has 2 bars but 2 boundary times"
        );
    }

    #[test]
    fn decreasing_times_are_reported() {
        let err = parse_segments(&lines(&["A", "B", "0", "5", "3"]), 2).unwrap_err();
        assert!(matches!(err, ToolError::Parse(_)), "{err}");
    }

    #[test]
    fn garbage_token_names_its_line() {
        let err = parse_segments(&lines(&["A", "x7y", "0", "3"]), 1).unwrap_err();
        assert_eq!(
            err.to_string(),
            "parse error: line 2: unrecognized token \"x7y\" in the Gantt chart"
        );
    }

    #[test]
    fn empty_chart_is_reported() {
        let err = parse_segments(&lines(&["0", "3"]), 1).unwrap_err();
        assert!(matches!(err, ToolError::Parse(_)), "{err}");
    }
}
