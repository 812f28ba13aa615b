//! Technology-keyed question bank.

use std::collections::HashMap;

const BUILTIN_BANK: &[(&str, &[&str])] = &[
    (
        "python",
        &[
            "Explain list comprehensions and give an example.",
            "What is the GIL in Python and how does it affect concurrency?",
            "How would you profile and optimize a slow Python function?",
            "What are Python decorators and when would you use them?",
            "Explain the difference between shallow and deep copy in Python.",
        ],
    ),
    (
        "django",
        &[
            "Explain the Django request/response lifecycle.",
            "What is Django ORM and how do you write migrations?",
            "How would you create a custom middleware in Django?",
            "What are Django signals and when to use them?",
            "How does Django handle static and media files?",
        ],
    ),
    (
        "flask",
        &[
            "Describe how routing works in Flask.",
            "How do you manage configuration and environment variables in Flask apps?",
            "How would you structure a medium-sized Flask application?",
            "What are Flask Blueprints and why are they useful?",
            "Explain how Flask handles sessions.",
        ],
    ),
    (
        "javascript",
        &[
            "Explain event loop and microtasks vs macrotasks in JavaScript.",
            "What's the difference between var, let and const?",
            "How do closures work in JavaScript?",
            "Explain promises and async/await with an example.",
            "What is hoisting in JavaScript?",
        ],
    ),
    (
        "react",
        &[
            "Explain the virtual DOM and why React uses it.",
            "When would you use useEffect and how to avoid infinite loops?",
            "Describe the difference between controlled and uncontrolled components.",
            "What is React context and when would you use it?",
            "Explain React reconciliation.",
        ],
    ),
    (
        "sql",
        &[
            "What is an index and how does it improve query performance?",
            "Explain the difference between INNER JOIN and LEFT JOIN.",
            "How do you approach query optimization for large tables?",
            "What is a primary key vs a foreign key?",
            "Explain normalization and denormalization.",
        ],
    ),
    (
        "postgresql",
        &[
            "How do you perform full-text search in PostgreSQL?",
            "Explain VACUUM and why it's necessary in PostgreSQL.",
            "How would you set up replication for a Postgres database?",
            "What are materialized views and when to use them?",
            "Explain PostgreSQL transactions and isolation levels.",
        ],
    ),
    (
        "aws",
        &[
            "Explain the difference between EC2 and Lambda and when to use each.",
            "How do you secure an S3 bucket and make static websites available?",
            "What is IAM and how do you design least-privilege policies?",
            "What is CloudFormation and how is it used?",
            "Explain VPC and subnets in AWS.",
        ],
    ),
    (
        "linux",
        &[
            "How do you troubleshoot high CPU usage on a Linux server?",
            "Explain file permissions and how to use chmod/chown.",
            "How would you set up a scheduled task using cron?",
            "What are systemd services?",
            "Explain how to check open ports on a Linux system.",
        ],
    ),
    (
        "docker",
        &[
            "What is the difference between a Docker image and a container?",
            "How do you create a multistage Dockerfile for a Python app?",
            "How do you persist data in Docker containers?",
            "What is Docker Compose and how is it useful?",
            "Explain the concept of Docker networking.",
        ],
    ),
];

/// Pre-authored questions per known technology.
///
/// Keys are stored lower-cased and looked up case-insensitively.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionBank {
    entries: HashMap<String, Vec<String>>,
}

impl QuestionBank {
    /// A bank with no known technologies; every token falls back to generic questions.
    pub fn empty() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// The bank shipped with the assistant (ten technologies, five questions each).
    pub fn builtin() -> Self {
        BUILTIN_BANK
            .iter()
            .fold(Self::empty(), |bank, (tech, questions)| {
                bank.with_entry(*tech, questions.iter().map(|q| q.to_string()).collect())
            })
    }

    /// Adds or replaces the questions for a technology.
    ///
    /// An entry with no questions is ignored.
    pub fn with_entry(mut self, technology: impl AsRef<str>, questions: Vec<String>) -> Self {
        if !questions.is_empty() {
            self.entries
                .insert(technology.as_ref().trim().to_lowercase(), questions);
        }
        self
    }

    /// Returns the questions for a technology, if it is known.
    pub fn lookup(&self, technology: &str) -> Option<&[String]> {
        self.entries
            .get(&technology.trim().to_lowercase())
            .map(Vec::as_slice)
    }

    /// Known technologies in alphabetical order.
    pub fn technologies(&self) -> Vec<&str> {
        let mut techs: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        techs.sort_unstable();
        techs
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for QuestionBank {
    fn default() -> Self {
        Self::builtin()
    }
}
