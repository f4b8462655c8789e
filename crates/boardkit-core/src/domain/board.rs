//! Board domain types used by the general and danger-zone settings.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A board column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Column {
    pub id: String,
    pub name: String,
    pub position: i64,
}

/// A task on a board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub column_id: String,
    #[serde(default)]
    pub title: String,
}

/// Top-level task-tracking workspace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Board {
    pub id: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub columns: Vec<Column>,
    #[serde(default)]
    pub tasks: Vec<Task>,
}

/// Number of tasks in one column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnTaskCount {
    pub name: String,
    pub count: usize,
}

impl Board {
    /// Total number of tasks on the board.
    pub fn total_tasks(&self) -> usize {
        self.tasks.len()
    }

    /// Task counts per column, ordered by column position.
    ///
    /// Columns with equal positions keep their API order.
    pub fn task_counts_by_column(&self) -> Vec<ColumnTaskCount> {
        let mut per_column: HashMap<&str, usize> = HashMap::new();
        for task in &self.tasks {
            *per_column.entry(task.column_id.as_str()).or_default() += 1;
        }

        let mut columns: Vec<&Column> = self.columns.iter().collect();
        columns.sort_by_key(|column| column.position);
        columns
            .into_iter()
            .map(|column| ColumnTaskCount {
                name: column.name.clone(),
                count: per_column.get(column.id.as_str()).copied().unwrap_or(0),
            })
            .collect()
    }

    /// Whether `typed` confirms deletion of this board.
    ///
    /// The comparison is exact: case-sensitive and without trimming.
    pub fn deletion_confirmed(&self, typed: &str) -> bool {
        typed == self.name
    }
}
