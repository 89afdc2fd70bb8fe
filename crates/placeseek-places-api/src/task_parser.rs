use serde::Deserialize;
use serde::Serialize;

/// Free text split into errands, e.g. "buy meds then grab lunch".
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedTask {
    pub original: String,
    pub tasks: Vec<Task>,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    #[serde(rename = "type")]
    pub task_type: String,
    pub category: String,
    pub description: String,
}

impl Task {
    fn new(task_type: &str, category: &str) -> Self {
        Task {
            task_type: task_type.to_string(),
            category: category.to_string(),
            description: format!("Find {} location", task_type),
        }
    }
}

// Checked in order; the first keyword for a task type decides its position.
const KEYWORDS: &[(&str, &str, &str)] = &[
    ("grocery", "grocery shopping", "grocery"),
    ("groceries", "grocery shopping", "grocery"),
    ("food", "grocery shopping", "grocery"),
    ("medicine", "pharmacy visit", "pharmacy"),
    ("prescription", "pharmacy visit", "pharmacy"),
    ("pharmacy", "pharmacy visit", "pharmacy"),
    ("meds", "pharmacy visit", "pharmacy"),
    ("coffee", "coffee break", "cafe"),
    ("tea", "tea break", "cafe"),
    ("cafe", "cafe visit", "cafe"),
    ("lunch", "lunch", "restaurant"),
    ("dinner", "dinner", "restaurant"),
    ("restaurant", "dining", "restaurant"),
    ("eat", "dining", "restaurant"),
    ("bank", "banking", "bank"),
    ("atm", "banking", "bank"),
    ("gas", "fuel up", "gas_station"),
    ("fuel", "fuel up", "gas_station"),
    ("shop", "shopping", "shopping"),
    ("shopping", "shopping", "shopping"),
    ("store", "shopping", "shopping"),
    ("gym", "workout", "gym"),
    ("workout", "workout", "gym"),
    ("fitness", "workout", "gym"),
];

/// Keyword match against the lower-cased input. Keywords match anywhere,
/// including inside longer words. Each task type appears once; with no
/// match the result is a single general shopping task.
pub fn parse_tasks(input: &str) -> ParsedTask {
    let lower = input.to_lowercase();
    let mut tasks: Vec<Task> = Vec::new();

    for (keyword, task_type, category) in KEYWORDS {
        if lower.contains(keyword) && !tasks.iter().any(|t| t.task_type == *task_type) {
            tasks.push(Task::new(task_type, category));
        }
    }

    if tasks.is_empty() {
        tasks.push(Task {
            task_type: "general shopping".to_string(),
            category: "shopping".to_string(),
            description: "Find shopping location".to_string(),
        });
    }

    ParsedTask {
        original: input.to_string(),
        tasks,
    }
}
