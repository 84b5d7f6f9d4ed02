use crate::proc::{Process, ProcessState, ReadyQueue, Ticks};

#[derive(Debug)]
pub struct Observer {
    step: u64,
}

impl Observer {
    pub fn new() -> Self {
        Self { step: 0 }
    }

    // Cross-checks the table/queue after every scheduling decision.
    pub fn observe(&mut self, table: &[Process], ready: &ReadyQueue, clock: Ticks, admitted: usize) {
        self.step += 1;

        let mut seen = vec![false; table.len()];
        for proc_id in ready.iter() {
            debug_assert!(
                proc_id < table.len(),
                "Queue references unknown process index {proc_id}"
            );
            debug_assert!(!seen[proc_id], "Process index {proc_id} queued twice");
            seen[proc_id] = true;

            let proc = &table[proc_id];
            debug_assert_eq!(
                proc.state,
                ProcessState::Ready,
                "Queued process {} must be Ready",
                proc.pid
            );
            debug_assert!(
                proc.remaining_time > 0,
                "Queued process {} has no work left",
                proc.pid
            );
        }

        let unarrived = table
            .iter()
            .filter(|p| p.state == ProcessState::Unarrived)
            .count();
        debug_assert_eq!(
            unarrived,
            table.len() - admitted,
            "Admission cursor out of sync with process states"
        );

        for proc in table {
            debug_assert_ne!(
                proc.state,
                ProcessState::Running,
                "Process {} left Running between steps",
                proc.pid
            );

            match proc.state {
                ProcessState::Unarrived => debug_assert!(
                    proc.arrival_time > clock,
                    "Process {} arrived at {} but was not admitted by {}",
                    proc.pid,
                    proc.arrival_time,
                    clock
                ),
                ProcessState::Terminated => {
                    debug_assert_eq!(
                        proc.remaining_time, 0,
                        "Terminated process {} has work remaining",
                        proc.pid
                    );
                    let first_run = proc
                        .first_run_time
                        .expect("Terminated process never dispatched");
                    let completion = proc
                        .completion_time
                        .expect("Terminated process has no completion time");
                    debug_assert!(
                        proc.arrival_time <= first_run && first_run <= completion,
                        "Process {} timestamps out of order",
                        proc.pid
                    );
                    debug_assert!(
                        completion <= clock,
                        "Process {} completed in the future",
                        proc.pid
                    );
                }
                _ => {}
            }
        }
    }
}
