use crate::models::scheduler::{ReadyQueue, ReadyTask};
use crate::models::{TaskSet, TimeStep};

/// Preemptive priority scheduler for a single processor.
///
/// Owns the task set and the logical clock for one simulation run; a
/// subsequent run takes a fresh instance rather than reusing this one.
#[derive(Debug)]
pub struct Scheduler {
    task_set: TaskSet,
    ready_queue: ReadyQueue,
    current_time: TimeStep,
    current_task: Option<usize>, // index into the task set
}

impl Scheduler {
    pub fn new(task_set: TaskSet) -> Self {
        Self {
            task_set,
            ready_queue: ReadyQueue::new(),
            current_time: 0,
            current_task: None,
        }
    }

    pub fn task_set(&self) -> &TaskSet {
        &self.task_set
    }

    /// Total elapsed ticks, busy and idle.
    pub fn current_time(&self) -> TimeStep {
        self.current_time
    }

    /// Runs the simulation to completion, one time step per iteration.
    pub fn run(&mut self) {
        // Admission order: by arrival, higher priority first on simultaneous
        // arrivals. This is a different rule than the ready-queue comparison,
        // which breaks priority ties on arrival instead.
        self.task_set.get_tasks_mut().sort_by(|a, b| {
            a.arrival_time()
                .cmp(&b.arrival_time())
                .then_with(|| b.priority().cmp(&a.priority()))
        });

        let mut unfinished = self.task_set.iter().filter(|t| !t.is_complete()).count();

        while unfinished > 0 {
            self.admit_arrivals();

            // Only a strictly higher priority preempts; on a tie the running
            // task keeps the processor.
            let best_priority = self.ready_queue.peek().map(|entry| entry.priority());
            if let Some(best_priority) = best_priority {
                let preempt = match self.current_task {
                    None => true,
                    Some(index) => best_priority > self.task_set.get_tasks()[index].priority(),
                };
                if preempt {
                    if let Some(index) = self.current_task.take() {
                        let task = &self.task_set.get_tasks()[index];
                        if !task.is_complete() {
                            self.ready_queue.push(ReadyTask::new(task, index));
                        }
                    }
                    self.current_task = self.ready_queue.pop().map(|entry| entry.index());
                }
            }

            if let Some(index) = self.current_task {
                let task = &mut self.task_set.get_tasks_mut()[index];
                task.execute(1);
                self.current_time += 1;
                if task.is_complete() {
                    task.complete(self.current_time);
                    unfinished -= 1;
                    self.current_task = None;
                }
            } else {
                // Idle step: nothing has arrived yet.
                self.current_time += 1;
            }
        }
    }

    /// Admits every task that has arrived, still has work, and was not yet
    /// admitted. `start_time` records the admission tick, which can be
    /// earlier than the first tick the task actually executes.
    fn admit_arrivals(&mut self) {
        let current_time = self.current_time;
        for (index, task) in self.task_set.get_tasks_mut().iter_mut().enumerate() {
            if task.arrival_time() <= current_time && !task.is_complete() && !task.is_admitted() {
                task.admit(current_time);
                self.ready_queue.push(ReadyTask::new(task, index));
            }
        }
    }
}
