pub mod check;
pub mod convert;
pub mod error;
pub mod gen;
pub mod input;
pub mod proc;
pub mod report;
pub mod sim;
pub mod solver;

pub use error::ToolError;
pub use proc::{Pid, Process, ReadyQueue, Ticks};
pub use report::Report;
pub use sim::Sim;
