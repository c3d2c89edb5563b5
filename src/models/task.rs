use super::{Priority, TimeStep};

#[derive(Clone, Debug, PartialEq)]
pub struct Task {
    name: String,                 // Display key, unique by convention.
    arrival_time: TimeStep,       // Tick at which the task becomes eligible.
    priority: Priority,           // Higher value = more important.
    burst_time: TimeStep,         // Total processor units required.
    remaining_time: TimeStep,
    start_time: Option<TimeStep>, // Set once, at admission into the ready queue.
    end_time: Option<TimeStep>,   // Set once, when remaining_time reaches 0.
}

impl Task {
    pub fn new(
        name: String,
        arrival_time: TimeStep,
        priority: Priority,
        burst_time: TimeStep,
    ) -> Self {
        Self {
            name,
            arrival_time,
            priority,
            burst_time,
            remaining_time: burst_time,
            start_time: None,
            end_time: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn arrival_time(&self) -> TimeStep {
        self.arrival_time
    }

    pub fn priority(&self) -> Priority {
        self.priority
    }

    pub fn burst_time(&self) -> TimeStep {
        self.burst_time
    }

    pub fn remaining_time(&self) -> TimeStep {
        self.remaining_time
    }

    pub fn start_time(&self) -> Option<TimeStep> {
        self.start_time
    }

    pub fn end_time(&self) -> Option<TimeStep> {
        self.end_time
    }

    pub fn is_admitted(&self) -> bool {
        self.start_time.is_some()
    }

    pub fn is_complete(&self) -> bool {
        self.remaining_time == 0
    }

    /// Marks the task admitted into the ready queue at time `t`.
    pub fn admit(&mut self, t: TimeStep) {
        self.start_time = Some(t);
    }

    /// Consumes `n_steps` units of remaining execution time.
    pub fn execute(&mut self, n_steps: TimeStep) {
        self.remaining_time -= n_steps;
    }

    /// Records the completion time.
    pub fn complete(&mut self, t: TimeStep) {
        self.end_time = Some(t);
    }
}
