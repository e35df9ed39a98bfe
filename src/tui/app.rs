//! Application state for the TUI.

use std::sync::Arc;

use crate::api::{ApiClient, Transport};
use crate::error::FlowError;
use crate::features::focus::{
    Boundary, BoundaryOutcome, FocusController, FocusTimer, SessionBoundaryNotifier,
};
use crate::features::tasks::TaskFilter;
use crate::models::Task;
use crate::tui::event::Action;
use crate::tui::loader::Loader;

const FOCUS_HELP: &str = "space:start/pause | r:reset | n:notifications | Tab:tasks | q:quit";

/// Which screen is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Tasks,
    Focus,
}

/// Result of a background task load.
pub struct TaskLoad {
    pub tasks: Vec<Task>,
    pub message: String,
}

/// The focus timer screen. Also used on its own by `focus run`.
pub struct FocusScreen<N> {
    controller: FocusController<N>,
    pub status: Option<String>,
}

impl<N: SessionBoundaryNotifier + Send + Sync + 'static> FocusScreen<N> {
    pub fn new(controller: FocusController<N>) -> Self {
        Self {
            controller,
            status: None,
        }
    }

    #[must_use]
    pub const fn timer(&self) -> &FocusTimer {
        self.controller.timer()
    }

    /// Handle a focus key. Returns false for actions this screen ignores.
    pub fn apply(&mut self, action: Action) -> bool {
        match action {
            Action::Toggle => {
                let outcome = self.controller.toggle();
                self.report(&outcome);
            }
            Action::Reset => {
                let outcome = self.controller.reset();
                self.report(&outcome);
                if !outcome.is_failure() {
                    self.status = Some("Timer reset".to_string());
                }
            }
            Action::Notifications => {
                let blocked = self.controller.toggle_notifications();
                self.status = Some(if blocked {
                    "Notifications blocked".to_string()
                } else {
                    "Notifications allowed".to_string()
                });
            }
            Action::Help => self.status = Some(FOCUS_HELP.to_string()),
            _ => return false,
        }
        true
    }

    /// One second of wall time has passed.
    pub fn tick(&mut self) {
        if !self.controller.timer().is_active() {
            return;
        }
        let outcome = self.controller.tick();
        if self.controller.timer().is_finished() {
            self.status = Some("Session complete".to_string());
        }
        self.report(&outcome);
    }

    /// Pick up answers from the session log.
    pub fn poll(&mut self) {
        for outcome in self.controller.poll() {
            self.report(&outcome);
        }
    }

    /// Close any open session and hand back the final timer state.
    pub fn shutdown(mut self) -> FocusTimer {
        for outcome in self.controller.shutdown() {
            self.report(&outcome);
        }
        *self.controller.timer()
    }

    fn report(&mut self, outcome: &BoundaryOutcome) {
        match outcome {
            BoundaryOutcome::NotSent
            | BoundaryOutcome::Pending(Boundary::End)
            | BoundaryOutcome::Ended(_) => {},
            BoundaryOutcome::Pending(Boundary::Start) => {
                self.status = Some("Opening session...".to_string());
            }
            BoundaryOutcome::Started(record) => {
                self.status = Some(format!("Session {} started", record.id));
            }
            BoundaryOutcome::Failed { boundary, error } => {
                self.status = Some(format!("Could not log session {boundary}: {error}"));
            }
        }
    }
}

/// Application state.
pub struct App<T: Transport + Send + Sync + 'static> {
    client: Arc<ApiClient<T>>,
    loader: Loader<TaskLoad>,
    /// Tasks as last loaded, across all tabs.
    pub tasks: Vec<Task>,
    /// Selected row on the current tab.
    pub selected: usize,
    pub tab: TaskFilter,
    pub screen: Screen,
    pub focus: FocusScreen<Arc<ApiClient<T>>>,
    /// Status message to display.
    pub status: Option<String>,
    /// Whether the app should quit.
    pub should_quit: bool,
}

impl<T: Transport + Send + Sync + 'static> App<T> {
    /// Create the app and start loading tasks.
    pub fn new(client: Arc<ApiClient<T>>, timer: FocusTimer) -> Self {
        let controller = FocusController::new(timer, Arc::clone(&client));
        let mut app = Self {
            client,
            loader: Loader::new(),
            tasks: Vec::new(),
            selected: 0,
            tab: TaskFilter::All,
            screen: Screen::Tasks,
            focus: FocusScreen::new(controller),
            status: Some("Press ? for help".to_string()),
            should_quit: false,
        };
        app.refresh();
        app
    }

    /// Tasks on the current tab.
    #[must_use]
    pub fn visible_tasks(&self) -> Vec<&Task> {
        self.tab.apply(&self.tasks)
    }

    #[must_use]
    pub fn selected_task(&self) -> Option<&Task> {
        self.visible_tasks().get(self.selected).copied()
    }

    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.loader.is_loading()
    }

    /// Reload tasks in the background.
    pub fn refresh(&mut self) {
        let client = Arc::clone(&self.client);
        self.loader.request(move || {
            let tasks = client.list_tasks()?;
            let message = format!("Loaded {} tasks", tasks.len());
            Ok(TaskLoad { tasks, message })
        });
    }

    /// Complete or reopen the selected task, then reload.
    pub fn toggle_selected(&mut self) {
        let Some(task) = self.selected_task().cloned() else {
            return;
        };
        let client = Arc::clone(&self.client);
        self.loader.request(move || {
            let updated = client.toggle_task(&task)?;
            let tasks = client.list_tasks()?;
            Ok(TaskLoad {
                tasks,
                message: format!("{}: {}", updated.status, updated.title),
            })
        });
    }

    /// Delete the selected task, then reload.
    pub fn delete_selected(&mut self) {
        let Some(task) = self.selected_task().cloned() else {
            return;
        };
        let client = Arc::clone(&self.client);
        self.loader.request(move || {
            client.delete_task(&task.id)?;
            let tasks = client.list_tasks()?;
            Ok(TaskLoad {
                tasks,
                message: format!("Deleted: {}", task.title),
            })
        });
    }

    /// Apply a finished load and any session log answers.
    pub fn poll(&mut self) {
        self.focus.poll();
        match self.loader.poll() {
            Some(Ok(load)) => {
                self.tasks = load.tasks;
                self.clamp_selection();
                self.status = Some(load.message);
            }
            Some(Err(e)) => self.status = Some(describe(&e)),
            None => {},
        }
    }

    pub fn set_tab(&mut self, tab: TaskFilter) {
        self.tab = tab;
        self.selected = 0;
    }

    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn select_next(&mut self) {
        let len = self.visible_tasks().len();
        if len > 0 && self.selected < len - 1 {
            self.selected += 1;
        }
    }

    /// Switch between the task list and the focus timer.
    ///
    /// Leaving the task list drops any load in flight; coming back reloads.
    pub fn switch_screen(&mut self) {
        self.screen = match self.screen {
            Screen::Tasks => {
                self.loader.cancel();
                Screen::Focus
            }
            Screen::Focus => {
                self.refresh();
                Screen::Tasks
            }
        };
    }

    /// One second of wall time has passed. The timer keeps running while
    /// the task list is showing.
    pub fn tick(&mut self) {
        self.focus.tick();
    }

    /// Handle an action from the event loop.
    pub fn apply(&mut self, action: Action) {
        match (self.screen, action) {
            (_, Action::Quit) => self.should_quit = true,
            (_, Action::SwitchScreen) => self.switch_screen(),
            (Screen::Tasks, Action::Help) => self.status = Some(self.help().to_string()),
            (Screen::Tasks, Action::Up) => self.select_previous(),
            (Screen::Tasks, Action::Down) => self.select_next(),
            (Screen::Tasks, Action::NextTab) => self.set_tab(self.tab.next()),
            (Screen::Tasks, Action::PreviousTab) => self.set_tab(self.tab.previous()),
            (Screen::Tasks, Action::Tab(tab)) => self.set_tab(tab),
            (Screen::Tasks, Action::Toggle) => self.toggle_selected(),
            (Screen::Tasks, Action::Delete) => self.delete_selected(),
            (Screen::Tasks, Action::Refresh | Action::Reset) => self.refresh(),
            (Screen::Focus, action) => {
                self.focus.apply(action);
            }
            (Screen::Tasks, Action::Notifications) => {},
        }
    }

    #[must_use]
    pub const fn help(&self) -> &'static str {
        match self.screen {
            Screen::Tasks => {
                "1-4/←→:tabs | j/k:nav | space:toggle | d:delete | r:refresh | Tab:focus | q:quit"
            }
            Screen::Focus => FOCUS_HELP,
        }
    }

    /// Close the focus session, if one is open.
    pub fn shutdown(self) -> FocusTimer {
        self.focus.shutdown()
    }

    fn clamp_selection(&mut self) {
        let len = self.visible_tasks().len();
        if len == 0 {
            self.selected = 0;
        } else if self.selected >= len {
            self.selected = len - 1;
        }
    }
}

fn describe(error: &FlowError) -> String {
    if error.is_unauthorized() {
        "Not signed in. Quit and run 'focusflow auth login'.".to_string()
    } else {
        error.to_string()
    }
}
