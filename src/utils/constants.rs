/// Fields of one well-formed input record.
pub const FIELDS_PER_RECORD: usize = 4;

/// Shape of one input record, quoted in loader diagnostics.
pub const RECORD_FORMAT: &str = "TaskName, arrivalTime, priority, burstTime";

/// Exit code when the task file cannot be read.
pub const EXIT_READ_ERROR: i32 = 5;
