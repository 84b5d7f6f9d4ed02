pub type Pid = u32;
pub type Ticks = u64;
// Index into the process table Vec
pub type ProcId = usize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessState {
    Unarrived,
    Ready,
    Running,
    Terminated,
}

#[derive(Debug, Clone)]
pub struct Process {
    pub pid: Pid,
    pub arrival_time: Ticks,
    pub burst_time: Ticks,
    pub remaining_time: Ticks,
    pub first_run_time: Option<Ticks>,
    pub completion_time: Option<Ticks>,
    pub state: ProcessState,
}

impl Process {
    pub fn new(pid: Pid, arrival_time: Ticks, burst_time: Ticks) -> Self {
        Self {
            pid,
            arrival_time,
            burst_time,
            remaining_time: burst_time,
            first_run_time: None,
            completion_time: None,
            state: ProcessState::Unarrived,
        }
    }

    pub fn mark_ready(&mut self) {
        debug_assert!(
            self.state == ProcessState::Unarrived || self.state == ProcessState::Running,
            "Process {} cannot become Ready from {:?}",
            self.pid,
            self.state
        );
        debug_assert!(
            self.remaining_time > 0,
            "Process {} has no work left to queue",
            self.pid
        );
        self.state = ProcessState::Ready;
    }

    // Records the first dispatch time exactly once.
    pub fn mark_running(&mut self, now: Ticks) {
        debug_assert_eq!(
            self.state,
            ProcessState::Ready,
            "Process {} must be Ready before dispatch",
            self.pid
        );
        if self.first_run_time.is_none() {
            debug_assert!(
                now >= self.arrival_time,
                "Process {} dispatched before it arrived",
                self.pid
            );
            self.first_run_time = Some(now);
        }
        self.state = ProcessState::Running;
    }

    pub fn mark_terminated(&mut self, now: Ticks) {
        debug_assert_eq!(
            self.state,
            ProcessState::Running,
            "Process {} must have been running before completion",
            self.pid
        );
        debug_assert_eq!(
            self.remaining_time, 0,
            "Process {} completed with work remaining",
            self.pid
        );
        self.completion_time = Some(now);
        self.state = ProcessState::Terminated;
    }

    pub fn is_terminated(&self) -> bool {
        self.state == ProcessState::Terminated
    }

    pub fn waiting_time(&self) -> Option<Ticks> {
        let completion = self.completion_time?;
        Some(completion - self.arrival_time - self.burst_time)
    }

    pub fn response_time(&self) -> Option<Ticks> {
        let first_run = self.first_run_time?;
        Some(first_run - self.arrival_time)
    }
}
