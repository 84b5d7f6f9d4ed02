use crate::error::ToolError;
use crate::input::render_input;
use crate::proc::Ticks;
use rand::Rng;

pub const DEFAULT_NUM: usize = 4;
pub const DEFAULT_ARRIVAL_BOUNDS: (Ticks, Ticks) = (0, 20);
pub const DEFAULT_BURST_BOUNDS: (Ticks, Ticks) = (1, 20);

#[derive(Debug, Clone)]
pub struct GenConfig {
    pub num: usize,
    // Inclusive bounds.
    pub arrival: (Ticks, Ticks),
    pub burst: (Ticks, Ticks),
}

impl Default for GenConfig {
    fn default() -> Self {
        Self {
            num: DEFAULT_NUM,
            arrival: DEFAULT_ARRIVAL_BOUNDS,
            burst: DEFAULT_BURST_BOUNDS,
        }
    }
}

impl GenConfig {
    pub fn validate(&self) -> Result<(), ToolError> {
        if self.num < 1 {
            return Err(ToolError::validation(
                "number of entries must be a positive number",
            ));
        }
        for (what, (lower, upper)) in [("arrival", self.arrival), ("burst", self.burst)] {
            if lower > upper {
                return Err(ToolError::validation(format!(
                    "{what} bounds: UPPER should be >= LOWER, got {lower}-{upper}"
                )));
            }
        }
        // A zero-burst entry is not a schedulable process.
        if self.burst.0 < 1 {
            return Err(ToolError::validation(
                "burst bounds must be drawn from a positive range",
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestCase {
    pub arrival_times: Vec<Ticks>,
    pub burst_times: Vec<Ticks>,
}

impl TestCase {
    // The two lines the solver's input fields take.
    pub fn solver_lists(&self) -> (String, String) {
        (join(&self.arrival_times), join(&self.burst_times))
    }

    pub fn input_file(&self) -> String {
        let pairs: Vec<(Ticks, Ticks)> = self
            .arrival_times
            .iter()
            .copied()
            .zip(self.burst_times.iter().copied())
            .collect();
        render_input(&pairs)
    }
}

pub fn generate(cfg: &GenConfig, rng: &mut impl Rng) -> TestCase {
    debug_assert!(cfg.validate().is_ok(), "Generating from an invalid config");
    TestCase {
        arrival_times: draw(cfg.num, cfg.arrival, rng),
        burst_times: draw(cfg.num, cfg.burst, rng),
    }
}

fn draw(num: usize, (lower, upper): (Ticks, Ticks), rng: &mut impl Rng) -> Vec<Ticks> {
    (0..num).map(|_| rng.random_range(lower..=upper)).collect()
}

// "LOWER-UPPER" strings from the command line.
pub fn parse_bounds(s: &str) -> Result<(Ticks, Ticks), ToolError> {
    let bounds = s
        .split_once('-')
        .and_then(|(lower, upper)| Some((lower.trim().parse().ok()?, upper.trim().parse().ok()?)));
    bounds.ok_or_else(|| {
        ToolError::usage(format!(
            "bounds string should be of the form 'LOWER-UPPER', got {s:?}"
        ))
    })
}

fn join(times: &[Ticks]) -> String {
    times
        .iter()
        .map(|t| t.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
