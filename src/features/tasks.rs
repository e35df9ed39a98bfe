//! Task list tabs.

use crate::models::{Task, TaskStatus};

/// The tabs above the task list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum TaskFilter {
    #[default]
    All,
    Todo,
    #[value(name = "in-progress", alias = "inprogress")]
    InProgress,
    Completed,
}

impl TaskFilter {
    pub const ALL: [Self; 4] = [Self::All, Self::Todo, Self::InProgress, Self::Completed];

    /// The status this tab selects, or `None` for the All tab.
    #[must_use]
    pub const fn status(self) -> Option<TaskStatus> {
        match self {
            Self::All => None,
            Self::Todo => Some(TaskStatus::Todo),
            Self::InProgress => Some(TaskStatus::InProgress),
            Self::Completed => Some(TaskStatus::Completed),
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Todo => "Todo",
            Self::InProgress => "In Progress",
            Self::Completed => "Completed",
        }
    }

    #[must_use]
    pub fn matches(self, task: &Task) -> bool {
        self.status().map_or(true, |status| task.status == status)
    }

    #[must_use]
    pub fn apply(self, tasks: &[Task]) -> Vec<&Task> {
        tasks.iter().filter(|t| self.matches(t)).collect()
    }

    /// Number of tasks each tab would show.
    #[must_use]
    pub fn counts(tasks: &[Task]) -> [(Self, usize); 4] {
        Self::ALL.map(|tab| (tab, tasks.iter().filter(|t| tab.matches(t)).count()))
    }

    /// The tab to the right, wrapping around.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::All => Self::Todo,
            Self::Todo => Self::InProgress,
            Self::InProgress => Self::Completed,
            Self::Completed => Self::All,
        }
    }

    /// The tab to the left, wrapping around.
    #[must_use]
    pub const fn previous(self) -> Self {
        match self {
            Self::All => Self::Completed,
            Self::Todo => Self::All,
            Self::InProgress => Self::Todo,
            Self::Completed => Self::InProgress,
        }
    }
}
