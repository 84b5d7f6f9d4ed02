use super::observer::Observer;
use crate::error::ToolError;
use crate::proc::{ProcId, Process, ReadyQueue, Ticks};
use crate::report::Report;

pub struct Sim {
    table: Vec<Process>,
    ready: ReadyQueue,
    // Table indices sorted by (arrival_time, pid); arrivals are admitted by
    // walking `cursor` forward, so admission at equal timestamps is by pid.
    order: Vec<ProcId>,
    cursor: usize,
    clock: Ticks,
    quantum: Ticks,
    observer: Observer,
}

impl Sim {
    pub fn new(table: Vec<Process>, quantum: Ticks) -> Result<Self, ToolError> {
        if quantum == 0 {
            return Err(ToolError::validation("quantum length must be positive"));
        }
        if table.is_empty() {
            return Err(ToolError::validation("no processes to schedule"));
        }

        let mut order: Vec<ProcId> = (0..table.len()).collect();
        order.sort_by(|&a, &b| {
            table[a]
                .arrival_time
                .cmp(&table[b].arrival_time)
                .then_with(|| table[a].pid.cmp(&table[b].pid))
        });

        let clock = table[order[0]].arrival_time;
        Ok(Self {
            table,
            ready: ReadyQueue::new(),
            order,
            cursor: 0,
            clock,
            quantum,
            observer: Observer::new(),
        })
    }

    // One scheduling decision: dispatch the queue head for up to a quantum,
    // or fast-forward an idle clock to the next arrival.
    pub fn step(&mut self) {
        self.admit_arrivals();

        if self.ready.is_empty() {
            if let Some(&next) = self.order.get(self.cursor) {
                self.clock = self.table[next].arrival_time;
                self.admit_arrivals();
            } else {
                return;
            }
        }

        let current = match self.ready.pop_front() {
            Some(proc) => proc,
            None => return,
        };

        let slice = {
            let proc = &mut self.table[current];
            proc.mark_running(self.clock);
            proc.remaining_time.min(self.quantum)
        };
        self.clock += slice;
        self.table[current].remaining_time -= slice;

        // Anything that arrived while the slice ran queues ahead of the
        // preempted process; this tie-break must hold exactly at the
        // quantum-expiry timestamp for output to match the reference.
        self.admit_arrivals();

        if self.table[current].remaining_time == 0 {
            self.table[current].mark_terminated(self.clock);
        } else {
            self.table[current].mark_ready();
            self.ready.push_back(current);
        }

        self.observer
            .observe(&self.table, &self.ready, self.clock, self.cursor);
    }

    fn admit_arrivals(&mut self) {
        // Contiguous in `order`, since it is sorted by arrival time.
        while let Some(&next) = self.order.get(self.cursor) {
            if self.table[next].arrival_time > self.clock {
                break;
            }
            self.table[next].mark_ready();
            self.ready.push_back(next);
            self.cursor += 1;
        }
    }

    pub fn all_completed(&self) -> bool {
        self.table.iter().all(Process::is_terminated)
    }

    pub fn now(&self) -> Ticks {
        self.clock
    }

    pub fn processes(&self) -> &[Process] {
        &self.table
    }

    pub fn report(&self) -> Report {
        let waiting: Vec<Ticks> = self
            .table
            .iter()
            .map(|p| p.waiting_time().expect("Report over an unfinished run"))
            .collect();
        let response: Vec<Ticks> = self
            .table
            .iter()
            .map(|p| p.response_time().expect("Report over an undispatched process"))
            .collect();
        Report::from_times(&waiting, &response)
    }
}

// Convenience wrapper for the common run-to-completion case.
pub fn simulate(table: Vec<Process>, quantum: Ticks) -> Result<Report, ToolError> {
    let mut sim = Sim::new(table, quantum)?;
    while !sim.all_completed() {
        sim.step();
    }
    Ok(sim.report())
}
