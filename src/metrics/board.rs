//! Board analytics
//!
//! Status distribution over the task list, in the fixed column order.

use crate::document::{Task, TaskStatus};

/// Task count for one board column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusCount {
    pub status: TaskStatus,
    pub count: usize,
}

/// Tasks per status, in the fixed order TODO, IN_PROGRESS, CODE_REVIEW,
/// DONE. Statuses with zero tasks are still reported so consumers can
/// render complete distributions.
pub fn status_distribution(tasks: &[Task]) -> Vec<StatusCount> {
    TaskStatus::ALL
        .iter()
        .map(|status| StatusCount {
            status: *status,
            count: tasks.iter().filter(|task| task.status == *status).count(),
        })
        .collect()
}
