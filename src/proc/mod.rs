pub mod process;
pub mod queue;

pub use process::{Pid, ProcId, Process, ProcessState, Ticks};
pub use queue::ReadyQueue;
