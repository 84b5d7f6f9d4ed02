use crate::error::ToolError;
use crate::proc::{Pid, Process, Ticks};

// Input-file format:
//
//   <N>
//   <id>, <arrival_time>, <burst_time>   (N records)
//
// Whitespace around commas is insignificant.
pub fn parse_input(text: &str) -> Result<Vec<Process>, ToolError> {
    let mut lines = text.lines().enumerate();

    let (_, count_line) = lines
        .next()
        .ok_or_else(|| ToolError::parse("empty input file"))?;
    let expected: usize = count_line.trim().parse().map_err(|_| {
        ToolError::parse(format!(
            "line 1: expected a process count, found {:?}",
            count_line.trim()
        ))
    })?;

    let mut table = Vec::with_capacity(expected);
    for (index, line) in lines {
        let line_no = index + 1;
        if line.trim().is_empty() {
            continue;
        }

        let fields: Vec<&str> = line.split(',').map(str::trim).collect();
        if fields.len() != 3 {
            return Err(ToolError::parse(format!(
                "line {line_no}: expected 3 comma-separated fields, found {}",
                fields.len()
            )));
        }

        let mut values = [0i64; 3];
        for (value, field) in values.iter_mut().zip(&fields) {
            *value = field.parse().map_err(|_| {
                ToolError::parse(format!("line {line_no}: non-numeric field {field:?}"))
            })?;
        }
        let [pid, arrival, burst] = values;

        if pid < 1 {
            return Err(ToolError::validation(format!(
                "line {line_no}: process id must be positive, got {pid}"
            )));
        }
        if arrival < 0 {
            return Err(ToolError::validation(format!(
                "line {line_no}: arrival time must be non-negative, got {arrival}"
            )));
        }
        if burst < 1 {
            return Err(ToolError::validation(format!(
                "line {line_no}: burst time must be positive, got {burst}"
            )));
        }

        table.push(Process::new(pid as Pid, arrival as Ticks, burst as Ticks));
    }

    if table.len() != expected {
        return Err(ToolError::parse(format!(
            "header promises {expected} processes, found {}",
            table.len()
        )));
    }

    Ok(table)
}

// Inverse transform; ids are assigned sequentially from 1.
pub fn render_input(pairs: &[(Ticks, Ticks)]) -> String {
    let mut out = pairs.len().to_string();
    for (pid, (arrival, burst)) in pairs.iter().enumerate() {
        out.push_str(&format!("\n{}, {arrival}, {burst}", pid + 1));
    }
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::{parse_input, render_input};
    use crate::error::ToolError;

    const REFERENCE: &str = "4\n1, 0, 7\n2, 2, 4\n3, 4, 1\n4, 5, 4\n";

    #[test]
    fn parses_reference_file() {
        let table = parse_input(REFERENCE).unwrap();
        assert_eq!(table.len(), 4);
        assert_eq!(table[0].pid, 1);
        assert_eq!(table[3].arrival_time, 5);
        assert_eq!(table[3].burst_time, 4);
        assert_eq!(table[3].remaining_time, 4);
    }

    #[test]
    fn whitespace_around_commas_is_insignificant() {
        let table = parse_input("2\n1,0,3\n2 ,  7 ,2\n").unwrap();
        assert_eq!(table[1].arrival_time, 7);
        assert_eq!(table[1].burst_time, 2);
    }

    #[test]
    fn record_count_mismatch_is_a_parse_error() {
        let err = parse_input("3\n1, 0, 7\n2, 2, 4\n").unwrap_err();
        assert!(matches!(err, ToolError::Parse(_)), "{err}");
    }

    #[test]
    fn non_numeric_field_names_the_line() {
        let err = parse_input("1\n1, zero, 7\n").unwrap_err();
        assert_eq!(err.to_string(), "parse error: line 2: non-numeric field \"zero\"");
    }

    #[test]
    fn wrong_field_count_is_rejected() {
        let err = parse_input("1\n1, 0\n").unwrap_err();
        assert!(matches!(err, ToolError::Parse(_)), "{err}");
    }

    #[test]
    fn negative_arrival_is_a_validation_error() {
        let err = parse_input("1\n1, -3, 7\n").unwrap_err();
        assert!(matches!(err, ToolError::Validation(_)), "{err}");
    }

    #[test]
    fn zero_burst_is_a_validation_error() {
        let err = parse_input("1\n1, 3, 0\n").unwrap_err();
        assert!(matches!(err, ToolError::Validation(_)), "{err}");
    }

    #[test]
    fn render_matches_the_original_shape() {
        assert_eq!(
            render_input(&[(0, 7), (2, 4), (4, 1), (5, 4)]),
            REFERENCE
        );
    }

    #[test]
    fn render_parse_round_trip() {
        let text = render_input(&[(3, 9), (0, 1)]);
        let table = parse_input(&text).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table[0].pid, 1);
        assert_eq!(table[0].arrival_time, 3);
        assert_eq!(table[1].burst_time, 1);
    }
}
