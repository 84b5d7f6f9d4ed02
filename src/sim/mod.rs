pub mod driver;
pub mod observer;

pub use driver::{simulate, Sim};
