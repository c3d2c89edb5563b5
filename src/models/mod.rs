pub mod scheduler;
pub mod task;
pub mod taskset;

pub use task::Task;
pub use taskset::TaskSet;

pub type TimeStep = usize;

pub type Priority = i32;
