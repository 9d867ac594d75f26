//! Task View Derivation
//!
//! Pure filtering, sorting and dedup over cached task lists. No I/O.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use crate::models::{Task, TaskPriority, TaskStatus};

/// Status filter above the task table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Pending,
    InProgress,
    Completed,
}

impl StatusFilter {
    pub const ALL_FILTERS: [StatusFilter; 4] = [
        StatusFilter::All,
        StatusFilter::Pending,
        StatusFilter::InProgress,
        StatusFilter::Completed,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            StatusFilter::All => "All",
            StatusFilter::Pending => "Pending",
            StatusFilter::InProgress => "In progress",
            StatusFilter::Completed => "Completed",
        }
    }

    fn matches(&self, status: TaskStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Pending => status == TaskStatus::Pending,
            StatusFilter::InProgress => status == TaskStatus::InProgress,
            StatusFilter::Completed => status == TaskStatus::Completed,
        }
    }
}

/// Sort selector on the employee dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOption {
    #[default]
    DueAsc,
    DueDesc,
    Priority,
    Status,
}

impl SortOption {
    pub const ALL: [SortOption; 4] = [
        SortOption::DueAsc,
        SortOption::DueDesc,
        SortOption::Priority,
        SortOption::Status,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SortOption::DueAsc => "Due date (earliest)",
            SortOption::DueDesc => "Due date (latest)",
            SortOption::Priority => "Priority",
            SortOption::Status => "Status",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortOption::DueAsc => "DUE_ASC",
            SortOption::DueDesc => "DUE_DESC",
            SortOption::Priority => "PRIORITY",
            SortOption::Status => "STATUS",
        }
    }

    pub fn parse(value: &str) -> SortOption {
        match value {
            "DUE_DESC" => SortOption::DueDesc,
            "PRIORITY" => SortOption::Priority,
            "STATUS" => SortOption::Status,
            _ => SortOption::DueAsc,
        }
    }
}

pub fn filter_tasks(tasks: &[Task], filter: StatusFilter) -> Vec<Task> {
    tasks
        .iter()
        .filter(|t| filter.matches(t.status))
        .cloned()
        .collect()
}

/// Missing priority sorts as MEDIUM
fn priority_rank(priority: Option<TaskPriority>) -> u8 {
    priority.unwrap_or(TaskPriority::Medium).rank()
}

/// Due dates ascending, tasks without one last
fn compare_due(a: &Task, b: &Task) -> Ordering {
    match (a.due_date, b.due_date) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Canonical total order: due date, then status rank, then priority rank,
/// then id as the final tie-break.
fn compare_tasks(a: &Task, b: &Task) -> Ordering {
    compare_due(a, b)
        .then_with(|| a.status.rank().cmp(&b.status.rank()))
        .then_with(|| priority_rank(a.priority).cmp(&priority_rank(b.priority)))
        .then_with(|| a.id.cmp(&b.id))
}

pub fn sort_tasks(tasks: &[Task]) -> Vec<Task> {
    let mut sorted = tasks.to_vec();
    sorted.sort_by(compare_tasks);
    sorted
}

pub fn sort_tasks_by(tasks: &[Task], option: SortOption) -> Vec<Task> {
    let mut sorted = tasks.to_vec();
    match option {
        SortOption::DueAsc => sorted.sort_by(compare_tasks),
        SortOption::DueDesc => sorted.sort_by(|a, b| {
            // Latest due first; tasks without a due date still last
            match (a.due_date, b.due_date) {
                (Some(x), Some(y)) => y.cmp(&x),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            }
            .then_with(|| a.id.cmp(&b.id))
        }),
        SortOption::Priority => sorted.sort_by(|a, b| {
            priority_rank(a.priority)
                .cmp(&priority_rank(b.priority))
                .then_with(|| a.id.cmp(&b.id))
        }),
        SortOption::Status => sorted.sort_by(|a, b| {
            a.status
                .rank()
                .cmp(&b.status.rank())
                .then_with(|| a.id.cmp(&b.id))
        }),
    }
    sorted
}

/// Combined created+assigned view for manager-like roles: each task id
/// appears exactly once, the most recently fetched record wins (the
/// created list refreshes after the assigned list on every mutation).
pub fn combined_tasks(assigned: &[Task], created: &[Task]) -> Vec<Task> {
    let mut by_id: BTreeMap<i64, Task> = BTreeMap::new();
    for task in assigned.iter().chain(created) {
        by_id.insert(task.id, task.clone());
    }
    let merged: Vec<Task> = by_id.into_values().collect();
    sort_tasks(&merged)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn make_task(id: i64, status: TaskStatus, priority: Option<TaskPriority>, due: Option<&str>) -> Task {
        Task {
            id,
            title: format!("Task {}", id),
            description: None,
            priority,
            status,
            start_date: None,
            due_date: due.map(|d| d.parse::<NaiveDate>().unwrap()),
            created_by_user_id: Some(1),
            assigned_to_user_id: Some(2),
            created_at: None,
            updated_at: None,
        }
    }

    fn ids(tasks: &[Task]) -> Vec<i64> {
        tasks.iter().map(|t| t.id).collect()
    }

    #[test]
    fn filter_keeps_matching_status_only() {
        let tasks = vec![
            make_task(1, TaskStatus::Pending, None, None),
            make_task(2, TaskStatus::Completed, None, None),
            make_task(3, TaskStatus::Pending, None, None),
        ];
        assert_eq!(ids(&filter_tasks(&tasks, StatusFilter::Pending)), [1, 3]);
        assert_eq!(ids(&filter_tasks(&tasks, StatusFilter::Completed)), [2]);
        assert!(filter_tasks(&tasks, StatusFilter::InProgress).is_empty());
        assert_eq!(ids(&filter_tasks(&tasks, StatusFilter::All)), [1, 2, 3]);
    }

    #[test]
    fn sort_orders_by_due_then_status_then_priority_then_id() {
        let tasks = vec![
            // No due date: always last
            make_task(1, TaskStatus::Pending, Some(TaskPriority::High), None),
            // Same due date: status decides
            make_task(2, TaskStatus::Completed, Some(TaskPriority::High), Some("2025-06-01")),
            make_task(3, TaskStatus::Pending, Some(TaskPriority::Low), Some("2025-06-01")),
            // Earliest due date wins overall
            make_task(4, TaskStatus::Completed, Some(TaskPriority::Low), Some("2025-05-01")),
            // Same due + status: priority decides
            make_task(5, TaskStatus::Pending, Some(TaskPriority::High), Some("2025-06-01")),
        ];
        assert_eq!(ids(&sort_tasks(&tasks)), [4, 5, 3, 2, 1]);
    }

    #[test]
    fn sort_breaks_full_ties_by_id() {
        let tasks = vec![
            make_task(9, TaskStatus::Pending, Some(TaskPriority::Medium), Some("2025-06-01")),
            make_task(2, TaskStatus::Pending, Some(TaskPriority::Medium), Some("2025-06-01")),
            make_task(5, TaskStatus::Pending, Some(TaskPriority::Medium), Some("2025-06-01")),
        ];
        assert_eq!(ids(&sort_tasks(&tasks)), [2, 5, 9]);
    }

    #[test]
    fn sort_is_total_across_permutations() {
        let tasks = vec![
            make_task(1, TaskStatus::InProgress, None, Some("2025-07-01")),
            make_task(2, TaskStatus::Pending, Some(TaskPriority::Low), None),
            make_task(3, TaskStatus::Completed, Some(TaskPriority::High), Some("2025-07-01")),
            make_task(4, TaskStatus::Pending, Some(TaskPriority::Medium), Some("2025-01-15")),
        ];
        let expected = sort_tasks(&tasks);
        let mut reversed = tasks.clone();
        reversed.reverse();
        assert_eq!(sort_tasks(&reversed), expected);
        let rotated: Vec<Task> = tasks[2..].iter().chain(&tasks[..2]).cloned().collect();
        assert_eq!(sort_tasks(&rotated), expected);
    }

    #[test]
    fn missing_priority_ranks_as_medium() {
        let tasks = vec![
            make_task(1, TaskStatus::Pending, Some(TaskPriority::Low), Some("2025-06-01")),
            make_task(2, TaskStatus::Pending, None, Some("2025-06-01")),
            make_task(3, TaskStatus::Pending, Some(TaskPriority::High), Some("2025-06-01")),
        ];
        // None ties with MEDIUM, so it lands between HIGH and LOW
        assert_eq!(ids(&sort_tasks(&tasks)), [3, 2, 1]);
    }

    #[test]
    fn due_desc_puts_latest_first_and_dateless_last() {
        let tasks = vec![
            make_task(1, TaskStatus::Pending, None, Some("2025-01-01")),
            make_task(2, TaskStatus::Pending, None, None),
            make_task(3, TaskStatus::Pending, None, Some("2025-12-01")),
        ];
        assert_eq!(ids(&sort_tasks_by(&tasks, SortOption::DueDesc)), [3, 1, 2]);
    }

    #[test]
    fn priority_sort_ignores_due_dates() {
        let tasks = vec![
            make_task(1, TaskStatus::Pending, Some(TaskPriority::Low), Some("2025-01-01")),
            make_task(2, TaskStatus::Pending, Some(TaskPriority::High), None),
            make_task(3, TaskStatus::Pending, Some(TaskPriority::Medium), Some("2025-02-01")),
        ];
        assert_eq!(ids(&sort_tasks_by(&tasks, SortOption::Priority)), [2, 3, 1]);
    }

    #[test]
    fn status_sort_uses_lifecycle_order() {
        let tasks = vec![
            make_task(1, TaskStatus::Completed, None, None),
            make_task(2, TaskStatus::Pending, None, None),
            make_task(3, TaskStatus::InProgress, None, None),
        ];
        assert_eq!(ids(&sort_tasks_by(&tasks, SortOption::Status)), [2, 3, 1]);
    }

    #[test]
    fn combined_view_dedups_by_id_latest_fetch_wins() {
        let assigned = vec![
            make_task(1, TaskStatus::Pending, None, Some("2025-06-01")),
            make_task(2, TaskStatus::Pending, None, Some("2025-06-02")),
        ];
        // Task 2 also appears in the created list with fresher fields
        let mut fresher = make_task(2, TaskStatus::Completed, Some(TaskPriority::High), Some("2025-06-02"));
        fresher.title = "Task 2 (renamed)".to_string();
        let created = vec![fresher.clone(), make_task(3, TaskStatus::Pending, None, None)];

        let combined = combined_tasks(&assigned, &created);
        assert_eq!(ids(&combined), [1, 2, 3]);
        let merged = combined.iter().find(|t| t.id == 2).unwrap();
        assert_eq!(merged, &fresher);
    }

    #[test]
    fn combined_view_of_disjoint_lists_keeps_everything() {
        let assigned = vec![make_task(1, TaskStatus::Pending, None, None)];
        let created = vec![make_task(2, TaskStatus::Pending, None, None)];
        assert_eq!(combined_tasks(&assigned, &created).len(), 2);
    }

    #[test]
    fn sort_option_round_trips_wire_values() {
        for option in SortOption::ALL {
            assert_eq!(SortOption::parse(option.as_str()), option);
        }
        assert_eq!(SortOption::parse("bogus"), SortOption::DueAsc);
    }
}
