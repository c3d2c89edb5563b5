use super::Task;

#[derive(Debug, Clone)]
pub struct TaskSet {
    tasks: Vec<Task>,
}

impl TaskSet {
    pub fn new(tasks: Vec<Task>) -> Self {
        Self { tasks }
    }

    pub fn new_empty() -> Self {
        Self { tasks: Vec::new() }
    }

    pub fn get_tasks(&self) -> &Vec<Task> {
        &self.tasks
    }

    pub fn get_tasks_mut(&mut self) -> &mut Vec<Task> {
        &mut self.tasks
    }

    pub fn get_task(&self, index: usize) -> Option<&Task> {
        self.tasks.get(index)
    }

    pub fn add_task(&mut self, task: Task) {
        self.tasks.push(task);
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Discards all tasks so the set can be reloaded for another run.
    pub fn reset(&mut self) {
        self.tasks.clear();
    }

    pub fn iter(&self) -> std::slice::Iter<Task> {
        self.tasks.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<Task> {
        self.tasks.iter_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reset_empties_the_set() {
        let mut task_set = TaskSet::new(vec![
            Task::new("A".to_string(), 0, 1, 2),
            Task::new("B".to_string(), 1, 2, 3),
        ]);
        assert_eq!(task_set.len(), 2);

        task_set.reset();

        assert!(task_set.is_empty());
        assert_eq!(task_set.len(), 0);
    }

    #[test]
    fn tasks_keep_load_order() {
        let mut task_set = TaskSet::new_empty();
        task_set.add_task(Task::new("B".to_string(), 5, 1, 2));
        task_set.add_task(Task::new("A".to_string(), 0, 9, 3));

        let names: Vec<&str> = task_set.iter().map(|t| t.name()).collect();
        assert_eq!(names, vec!["B", "A"]);
    }
}
