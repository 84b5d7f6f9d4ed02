use average::{Estimate, Mean};
use std::fmt;

use crate::proc::Ticks;

// The two-line summary both the simulator and the solver parser produce.
// The renderings must be byte-identical so the checker can diff them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Report {
    pub avg_waiting_time: f64,
    pub avg_response_time: f64,
}

impl Report {
    pub fn from_times(waiting: &[Ticks], response: &[Ticks]) -> Self {
        debug_assert_eq!(waiting.len(), response.len());
        debug_assert!(!waiting.is_empty(), "Report over zero processes");
        Self {
            avg_waiting_time: mean(waiting.iter().map(|&t| t as f64)),
            avg_response_time: mean(response.iter().map(|&t| t as f64)),
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Average waiting time: {:.2}", self.avg_waiting_time)?;
        write!(f, "Average response time: {:.2}", self.avg_response_time)
    }
}

pub fn mean(iter: impl Iterator<Item = f64>) -> f64 {
    iter.collect::<Mean>().estimate()
}
