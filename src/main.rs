use std::error::Error;
use std::process;

use clap::{Arg, ArgMatches, Command};
use csv::{ReaderBuilder, StringRecord, Trim};

use uniprocessor::constants::{EXIT_READ_ERROR, FIELDS_PER_RECORD, RECORD_FORMAT};
use uniprocessor::scheduler::Scheduler;
use uniprocessor::{LoadError, Priority, Task, TaskSet, TimeStep};

/// Validates one raw record and turns it into a task.
fn parse_record(line: usize, record: &StringRecord) -> Result<Task, LoadError> {
    if record.len() != FIELDS_PER_RECORD {
        return Err(LoadError::WrongFieldCount {
            line,
            record: record.iter().collect::<Vec<_>>().join(", "),
            found: record.len(),
        });
    }

    let name = record[0].to_string();
    let arrival_time: TimeStep = record[1].parse().map_err(|_| LoadError::InvalidField {
        line,
        field: "arrivalTime",
        value: record[1].to_string(),
    })?;
    let priority: Priority = record[2].parse().map_err(|_| LoadError::InvalidField {
        line,
        field: "priority",
        value: record[2].to_string(),
    })?;
    let burst_time: TimeStep = record[3].parse().map_err(|_| LoadError::InvalidField {
        line,
        field: "burstTime",
        value: record[3].to_string(),
    })?;

    // The engine assumes positive bursts; a zero would never be admitted.
    if burst_time == 0 {
        return Err(LoadError::InvalidField {
            line,
            field: "burstTime",
            value: record[3].to_string(),
        });
    }

    Ok(Task::new(name, arrival_time, priority, burst_time))
}

/// Reads a task set file and returns a `TaskSet`.
///
/// Malformed records are reported on stderr and skipped; only failing to
/// read the file itself is an error.
pub fn read_task_file(file_path: &str) -> Result<TaskSet, Box<dyn Error>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_path(file_path)?;
    let mut tasks = Vec::new();

    for (index, result) in rdr.records().enumerate() {
        let line = index + 1;
        let record = match result {
            Ok(record) => record,
            Err(e) => {
                eprintln!("Warning: skipping unreadable line {}: {}", line, e);
                eprintln!("Expected format: {}", RECORD_FORMAT);
                continue;
            }
        };

        match parse_record(line, &record) {
            Ok(task) => tasks.push(task),
            Err(e) => {
                eprintln!("Warning: skipping malformed line: {}", e);
                eprintln!("Expected format: {}", RECORD_FORMAT);
            }
        }
    }

    Ok(TaskSet::new(tasks))
}

pub fn build_cli_command() -> Command {
    Command::new("Priority Scheduler")
        .version("1.0")
        .about("Simulates preemptive priority scheduling for a task set")
        .arg(
            Arg::new("task_file")
                .required(true)
                .help("Path to the task set file"),
        )
}

fn print_loaded_tasks(task_set: &TaskSet) {
    println!("Tasks loaded successfully:");
    for task in task_set.iter() {
        println!(
            "Task: {}, Arrival Time: {}, Priority: {}, Burst Time: {}",
            task.name(),
            task.arrival_time(),
            task.priority(),
            task.burst_time()
        );
    }
}

fn print_gantt_chart(task_set: &TaskSet) {
    println!("\nGantt Chart:");
    for task in task_set.iter() {
        println!(
            "Task: {}, Start: {}, End: {}",
            task.name(),
            format_time(task.start_time()),
            format_time(task.end_time())
        );
    }
}

fn format_time(t: Option<TimeStep>) -> String {
    t.map(|t| t.to_string()).unwrap_or_else(|| String::from("-"))
}

fn main() {
    // cargo run <task_file>
    let matches: ArgMatches = build_cli_command().get_matches();

    let task_set = match read_task_file(matches.get_one::<String>("task_file").unwrap()) {
        Ok(task_set) => task_set,
        Err(e) => {
            eprintln!("Error reading task file: {}", e);
            process::exit(EXIT_READ_ERROR);
        }
    };

    print_loaded_tasks(&task_set);

    let mut scheduler = Scheduler::new(task_set);
    scheduler.run();

    print_gantt_chart(scheduler.task_set());
}
