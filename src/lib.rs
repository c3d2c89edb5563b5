pub mod models;
pub mod utils;

pub use models::scheduler;
pub use models::{Priority, Task, TaskSet, TimeStep};
pub use utils::constants;
pub use utils::errors::LoadError;
