pub mod ready_queue;
pub mod scheduler;

pub use ready_queue::{ReadyQueue, ReadyTask};
pub use scheduler::Scheduler;
