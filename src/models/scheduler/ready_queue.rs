use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::models::{Priority, Task, TimeStep};

/// Entry of the ready queue: the scheduling rank of an admitted task plus
/// its index in the task set.
#[derive(Debug, Clone)]
pub struct ReadyTask {
    priority: Priority,
    arrival_time: TimeStep,
    index: usize,
}

impl ReadyTask {
    pub fn new(task: &Task, index: usize) -> Self {
        Self {
            priority: task.priority(),
            arrival_time: task.arrival_time(),
            index,
        }
    }

    pub fn priority(&self) -> Priority {
        self.priority
    }

    pub fn arrival_time(&self) -> TimeStep {
        self.arrival_time
    }

    pub fn index(&self) -> usize {
        self.index
    }
}

impl Ord for ReadyTask {
    /// Highest priority ranks first; on equal priority the earlier arrival wins.
    fn cmp(&self, other: &Self) -> Ordering {
        self.priority
            .cmp(&other.priority)
            .then_with(|| other.arrival_time.cmp(&self.arrival_time))
    }
}

impl PartialOrd for ReadyTask {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for ReadyTask {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for ReadyTask {}

/// Max-heap of admitted, unfinished tasks, ordered by the live comparison
/// rule above.
#[derive(Debug, Default)]
pub struct ReadyQueue {
    heap: BinaryHeap<ReadyTask>,
}

impl ReadyQueue {
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
        }
    }

    pub fn push(&mut self, entry: ReadyTask) {
        self.heap.push(entry);
    }

    pub fn pop(&mut self) -> Option<ReadyTask> {
        self.heap.pop()
    }

    pub fn peek(&self) -> Option<&ReadyTask> {
        self.heap.peek()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(priority: Priority, arrival_time: TimeStep, index: usize) -> ReadyTask {
        ReadyTask::new(
            &Task::new(format!("T{}", index), arrival_time, priority, 1),
            index,
        )
    }

    #[test]
    fn pops_highest_priority_first() {
        let mut queue = ReadyQueue::new();
        queue.push(entry(1, 0, 0));
        queue.push(entry(5, 0, 1));
        queue.push(entry(3, 0, 2));

        assert_eq!(queue.pop().map(|e| e.index()), Some(1));
        assert_eq!(queue.pop().map(|e| e.index()), Some(2));
        assert_eq!(queue.pop().map(|e| e.index()), Some(0));
        assert!(queue.is_empty());
    }

    #[test]
    fn breaks_priority_ties_by_earlier_arrival() {
        let mut queue = ReadyQueue::new();
        queue.push(entry(2, 7, 0));
        queue.push(entry(2, 3, 1));

        assert_eq!(queue.pop().map(|e| e.index()), Some(1));
        assert_eq!(queue.pop().map(|e| e.index()), Some(0));
    }

    #[test]
    fn negative_priorities_rank_below_zero() {
        let mut queue = ReadyQueue::new();
        queue.push(entry(-3, 0, 0));
        queue.push(entry(0, 0, 1));

        assert_eq!(queue.pop().map(|e| e.index()), Some(1));
    }

    #[test]
    fn peek_leaves_the_queue_intact() {
        let mut queue = ReadyQueue::new();
        queue.push(entry(4, 0, 0));

        assert_eq!(queue.peek().map(|e| e.priority()), Some(4));
        assert_eq!(queue.len(), 1);
    }
}
