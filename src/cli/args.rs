use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::config::API_URL_ENV;
use crate::features::tasks::TaskFilter;
use crate::models::{Priority, ProductivityStyle, SettingKey, TaskStatus};

#[derive(Parser)]
#[command(name = "focusflow")]
#[command(about = "Command-line and terminal UI client for the FocusFlow productivity service")]
#[command(long_about = "focusflow - A FocusFlow client for the terminal

Manage tasks, run focus sessions and read your productivity analytics
from the command line, or open the interactive terminal UI.

QUICK START:
  focusflow auth login --email me@example.com     Sign in
  focusflow tasks                                  List your tasks
  focusflow tasks add \"Write report\" --due friday  Add a task
  focusflow focus run                              25-minute focus timer
  focusflow dashboard                              Today at a glance

OUTPUT FORMATS:
  --output pretty    Human-readable colored output (default)
  --output json      Machine-readable JSON for scripting

For more information on a specific command, run:
  focusflow <command> --help")]
#[command(version, propagate_version = true)]
pub struct Cli {
    /// Output format for command results
    ///
    /// Use 'pretty' for human-readable colored output, or 'json' for
    /// machine-readable output suitable for scripting. Defaults to
    /// general.default_output from the config file.
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    /// Base URL of the FocusFlow API
    ///
    /// Overrides api.base_url from ~/.focusflow/config.yaml.
    #[arg(long, global = true, env = API_URL_ENV)]
    pub api_url: Option<String>,

    /// Log requests and session boundaries to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for command results.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable colored output.
    #[default]
    Pretty,
    /// Machine-readable JSON output.
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Sign in, sign up or sign out
    ///
    /// The session token is kept in ~/.focusflow/focusflow.db and sent
    /// with every request. FOCUSFLOW_TOKEN takes precedence when set.
    ///
    /// # Examples
    ///
    ///   focusflow auth login --email me@example.com
    ///   focusflow auth signup --name Ada --email ada@example.com --goal "Ship v2"
    ///   focusflow auth status
    ///   focusflow auth logout
    Auth(AuthArgs),

    /// List and manage tasks
    ///
    /// Without a subcommand, lists tasks on the chosen tab.
    ///
    /// # Examples
    ///
    ///   focusflow tasks                          All tasks
    ///   focusflow t --tab completed              Only completed tasks
    ///   focusflow tasks add "Write report" --due friday --priority high
    ///   focusflow tasks toggle 42                Complete / reopen a task
    ///   focusflow tasks list --where "priority = 'High' AND due < today"
    #[command(alias = "t")]
    Tasks(TasksArgs),

    /// Focus sessions
    ///
    /// Run a countdown timer that reports session start and end to the
    /// server, or send the boundaries yourself for scripting.
    ///
    /// # Subcommands
    ///
    ///   run      Interactive countdown (space, r, n, q)
    ///   start    Open a session on the server
    ///   end      Close a session on the server
    ///   status   Show the local timer settings and last session
    ///
    /// # Examples
    ///
    ///   focusflow focus run                  25-minute session
    ///   focusflow focus run -m 50 --block    50 minutes, notifications blocked
    ///   focusflow focus start --block
    ///   focusflow focus end
    #[command(alias = "f")]
    Focus(FocusArgs),

    /// Today's focus score, alerts and next tasks
    ///
    /// Shows the summary cards, AI alerts, the next tasks and an hourly
    /// focus/distraction chart.
    ///
    /// # Examples
    ///
    ///   focusflow dashboard
    ///   focusflow d -o json
    #[command(alias = "d")]
    Dashboard,

    /// Productivity analytics
    ///
    /// Without a subcommand, shows the summary, breakdown and weekly chart.
    ///
    /// # Examples
    ///
    ///   focusflow analytics
    ///   focusflow analytics weekly
    ///   focusflow analytics trend -o json
    Analytics(AnalyticsArgs),

    /// Predictions for tomorrow and the week ahead
    ///
    /// Shows the predicted workload, the recommended focus window and the
    /// task completion forecast.
    Insights,

    /// View or edit your profile
    ///
    /// # Examples
    ///
    ///   focusflow profile
    ///   focusflow profile update --name "Ada L." --goal-hours 6
    Profile(ProfileArgs),

    /// View or change notification and sync settings
    ///
    /// # Examples
    ///
    ///   focusflow settings
    ///   focusflow settings set weekly-report off
    ///   focusflow settings set cloud-sync on
    Settings(SettingsArgs),

    /// Account management
    Account(AccountArgs),

    /// Complete first-run onboarding
    ///
    /// Walks the onboarding steps with the given answers and saves them.
    ///
    /// # Examples
    ///
    ///   focusflow onboard --style high-focus --start 08:30 --end 16:30
    ///   focusflow onboard --no-tracking
    Onboard(OnboardArgs),

    /// Open the interactive terminal UI
    ///
    /// Tasks screen: 1-4 or ←/→ switch tabs, j/k move, space/x toggle,
    /// d delete, r refresh. Tab switches to the focus timer. q quits.
    #[command(alias = "ui")]
    Tui,

    /// Generate shell completions
    ///
    /// # Examples
    ///
    ///   focusflow completions bash > ~/.local/share/bash-completion/completions/focusflow
    ///   focusflow completions zsh > ~/.zsh/completions/_focusflow
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,

        /// Print installation instructions instead of the script
        #[arg(long)]
        install: bool,
    },
}

/// Arguments for authentication.
#[derive(Args)]
pub struct AuthArgs {
    #[command(subcommand)]
    pub command: AuthCommands,
}

#[derive(Subcommand)]
pub enum AuthCommands {
    /// Sign in and store the session token
    Login {
        #[arg(long, short = 'e')]
        email: String,

        /// Account password
        #[arg(long, short = 'p', env = "FOCUSFLOW_PASSWORD", hide_env_values = true)]
        password: String,
    },

    /// Create an account and store the session token
    Signup {
        #[arg(long, short = 'n')]
        name: String,

        #[arg(long, short = 'e')]
        email: String,

        /// Account password
        #[arg(long, short = 'p', env = "FOCUSFLOW_PASSWORD", hide_env_values = true)]
        password: String,

        /// What you want to achieve with FocusFlow
        #[arg(long, short = 'g', default_value = "")]
        goal: String,
    },

    /// Forget the stored session token
    Logout,

    /// Check whether the stored token is still valid
    Status,
}

/// Arguments for task management.
#[derive(Args)]
pub struct TasksArgs {
    #[command(subcommand)]
    pub command: Option<TasksCommands>,

    /// Tab to show when no subcommand is given
    #[arg(long, value_enum, default_value = "all")]
    pub tab: TaskFilter,
}

#[derive(Subcommand)]
pub enum TasksCommands {
    /// List tasks
    ///
    /// Examples:
    ///   focusflow tasks list --tab todo
    ///   focusflow tasks list --where "title LIKE '%report%'"
    ///   focusflow tasks list --where "category IN ('Work', 'Admin') AND progress < 50"
    #[command(alias = "ls")]
    List {
        /// Tab: all, todo, in-progress, completed
        #[arg(long, value_enum, default_value = "all")]
        tab: TaskFilter,

        /// Filter query over title, category, priority, status, due, progress, id
        #[arg(long = "where", short = 'w')]
        query: Option<String>,
    },

    /// Add a task
    ///
    /// Category defaults to Work, priority to Medium and the due date to today.
    ///
    /// Examples:
    ///   focusflow tasks add "Write report"
    ///   focusflow tasks add "Dentist" --category Health --due "next tuesday"
    #[command(alias = "a")]
    Add {
        title: String,

        /// Work, Personal, Learning, Health, Admin, or your own
        #[arg(long, short = 'c')]
        category: Option<String>,

        /// Due date (today, tomorrow, friday, in 3 days, 2024-12-15)
        #[arg(long, short = 'd')]
        due: Option<String>,

        /// Priority (low, medium, high)
        #[arg(long, short = 'p', value_parser = parse_priority)]
        priority: Option<Priority>,
    },

    /// Change fields of a task
    ///
    /// Only the fields you pass are sent.
    Update {
        id: String,

        #[arg(long, short = 't')]
        title: Option<String>,

        #[arg(long, short = 'c')]
        category: Option<String>,

        /// Due date (today, tomorrow, friday, in 3 days, 2024-12-15)
        #[arg(long, short = 'd')]
        due: Option<String>,

        #[arg(long, short = 'p', value_parser = parse_priority)]
        priority: Option<Priority>,

        #[arg(long, short = 's', value_parser = parse_status)]
        status: Option<TaskStatus>,

        /// Progress in percent
        #[arg(long, value_parser = clap::value_parser!(u8).range(0..=100))]
        progress: Option<u8>,
    },

    /// Set the status of a task
    ///
    /// Examples:
    ///   focusflow tasks status 42 "in progress"
    ///   focusflow tasks status 42 done
    Status {
        id: String,

        /// todo, in-progress, completed
        #[arg(value_parser = parse_status)]
        status: TaskStatus,
    },

    /// Complete an open task, or reopen a completed one
    #[command(alias = "x")]
    Toggle { id: String },

    /// Delete a task
    #[command(alias = "rm")]
    Delete { id: String },
}

/// Arguments for focus sessions.
#[derive(Args)]
pub struct FocusArgs {
    #[command(subcommand)]
    pub command: FocusCommands,
}

/// Focus subcommands.
#[derive(Subcommand)]
pub enum FocusCommands {
    /// Run the interactive countdown
    ///
    /// space start/pause, r reset, n toggle notification blocking, q quit.
    ///
    /// Examples:
    ///   focusflow focus run
    ///   focusflow focus run --minutes 50 --block
    Run {
        /// Session length in minutes (default: focus.duration_minutes)
        #[arg(long, short = 'm', value_parser = clap::value_parser!(u32).range(1..=600))]
        minutes: Option<u32>,

        /// Start with notifications blocked
        #[arg(long, short = 'b')]
        block: bool,
    },

    /// Report a session start to the server
    ///
    /// The returned session id is remembered for 'focus end'.
    Start {
        /// Block notifications for this session
        #[arg(long, short = 'b')]
        block: bool,
    },

    /// Report a session end to the server
    End {
        /// Session to close (default: the last one started)
        session_id: Option<String>,
    },

    /// Show timer settings and the last started session
    Status,
}

/// Arguments for analytics.
#[derive(Args)]
pub struct AnalyticsArgs {
    #[command(subcommand)]
    pub command: Option<AnalyticsCommands>,
}

#[derive(Subcommand)]
pub enum AnalyticsCommands {
    /// Focus hours per day this week
    Weekly,
    /// Most productive time, consistency and top distraction
    Summary,
    /// Productive, neutral and distracted minutes
    Breakdown,
    /// Daily focus and distraction trend
    Trend,
}

/// Arguments for the profile.
#[derive(Args)]
pub struct ProfileArgs {
    #[command(subcommand)]
    pub command: Option<ProfileCommands>,
}

#[derive(Subcommand)]
pub enum ProfileCommands {
    /// Show your profile
    Show,

    /// Update profile fields
    Update {
        #[arg(long, short = 'n')]
        name: Option<String>,

        /// Avatar URL
        #[arg(long)]
        avatar: Option<String>,

        /// Productivity style (balanced, high-focus, flexible)
        #[arg(long, short = 's', value_parser = parse_style)]
        style: Option<ProductivityStyle>,

        /// Daily focus goal in hours
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..=24))]
        goal_hours: Option<u32>,
    },
}

/// Arguments for settings.
#[derive(Args)]
pub struct SettingsArgs {
    #[command(subcommand)]
    pub command: Option<SettingsCommands>,
}

#[derive(Subcommand)]
pub enum SettingsCommands {
    /// Show all settings
    Show,

    /// Turn a setting on or off
    Set {
        #[arg(value_enum)]
        key: SettingKey,

        /// on/off, true/false, yes/no
        #[arg(action = clap::ArgAction::Set, value_parser = clap::builder::BoolishValueParser::new())]
        value: bool,
    },
}

/// Arguments for account management.
#[derive(Args)]
pub struct AccountArgs {
    #[command(subcommand)]
    pub command: AccountCommands,
}

#[derive(Subcommand)]
pub enum AccountCommands {
    /// Permanently delete your account and all data
    Delete {
        /// Confirm the deletion
        #[arg(long)]
        yes: bool,
    },
}

/// Answers for the onboarding steps.
#[derive(Args)]
pub struct OnboardArgs {
    /// Productivity style (balanced, high-focus, flexible)
    #[arg(long, short = 's', value_parser = parse_style, default_value = "balanced")]
    pub style: ProductivityStyle,

    /// Start of the working day (HH:MM)
    #[arg(long, default_value = "09:00")]
    pub start: String,

    /// End of the working day (HH:MM)
    #[arg(long, default_value = "17:00")]
    pub end: String,

    /// Decline activity tracking
    #[arg(long)]
    pub no_tracking: bool,
}

fn parse_priority(s: &str) -> Result<Priority, String> {
    Priority::parse(s).map_err(|e| e.to_string())
}

fn parse_status(s: &str) -> Result<TaskStatus, String> {
    TaskStatus::parse(s).map_err(|e| e.to_string())
}

fn parse_style(s: &str) -> Result<ProductivityStyle, String> {
    ProductivityStyle::parse(s).map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_debug_assert() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_output_defaults_to_none() {
        let cli = Cli::try_parse_from(["focusflow", "dashboard"]).unwrap();
        assert!(cli.output.is_none());
        assert!(!cli.verbose);
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "focusflow",
            "tasks",
            "-o",
            "json",
            "--api-url",
            "http://api.test",
            "-v",
        ])
        .unwrap();
        assert_eq!(cli.output, Some(OutputFormat::Json));
        assert_eq!(cli.api_url.as_deref(), Some("http://api.test"));
        assert!(cli.verbose);
    }

    // ==================== Auth ====================

    #[test]
    fn test_cli_auth_login() {
        let cli = Cli::try_parse_from([
            "focusflow", "auth", "login", "--email", "me@example.com", "--password", "pw",
        ])
        .unwrap();
        if let Commands::Auth(args) = cli.command {
            if let AuthCommands::Login { email, password } = args.command {
                assert_eq!(email, "me@example.com");
                assert_eq!(password, "pw");
            } else {
                panic!("Expected Login");
            }
        } else {
            panic!("Expected Auth command");
        }
    }

    #[test]
    fn test_cli_auth_signup_goal_defaults_empty() {
        let cli = Cli::try_parse_from([
            "focusflow", "auth", "signup", "-n", "Ada", "-e", "ada@example.com", "-p", "pw",
        ])
        .unwrap();
        if let Commands::Auth(args) = cli.command {
            if let AuthCommands::Signup { name, goal, .. } = args.command {
                assert_eq!(name, "Ada");
                assert_eq!(goal, "");
            } else {
                panic!("Expected Signup");
            }
        } else {
            panic!("Expected Auth command");
        }
    }

    // ==================== Tasks ====================

    #[test]
    fn test_cli_tasks_default_tab() {
        let cli = Cli::try_parse_from(["focusflow", "t"]).unwrap();
        if let Commands::Tasks(args) = cli.command {
            assert!(args.command.is_none());
            assert_eq!(args.tab, TaskFilter::All);
        } else {
            panic!("Expected Tasks command");
        }
    }

    #[test]
    fn test_cli_tasks_list_tab_and_where() {
        let cli = Cli::try_parse_from([
            "focusflow", "tasks", "list", "--tab", "in-progress", "--where", "progress > 50",
        ])
        .unwrap();
        if let Commands::Tasks(TasksArgs {
            command: Some(TasksCommands::List { tab, query }),
            ..
        }) = cli.command
        {
            assert_eq!(tab, TaskFilter::InProgress);
            assert_eq!(query.as_deref(), Some("progress > 50"));
        } else {
            panic!("Expected tasks list");
        }
    }

    #[test]
    fn test_cli_tasks_add() {
        let cli = Cli::try_parse_from([
            "focusflow", "tasks", "add", "Write report", "-c", "Admin", "--due", "friday", "-p", "high",
        ])
        .unwrap();
        if let Commands::Tasks(TasksArgs {
            command:
                Some(TasksCommands::Add {
                    title,
                    category,
                    due,
                    priority,
                }),
            ..
        }) = cli.command
        {
            assert_eq!(title, "Write report");
            assert_eq!(category.as_deref(), Some("Admin"));
            assert_eq!(due.as_deref(), Some("friday"));
            assert_eq!(priority, Some(Priority::High));
        } else {
            panic!("Expected tasks add");
        }
    }

    #[test]
    fn test_cli_tasks_add_rejects_bad_priority() {
        let result = Cli::try_parse_from(["focusflow", "tasks", "add", "x", "-p", "urgent"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_tasks_status_accepts_display_spelling() {
        let cli =
            Cli::try_parse_from(["focusflow", "tasks", "status", "7", "In Progress"]).unwrap();
        if let Commands::Tasks(TasksArgs {
            command: Some(TasksCommands::Status { id, status }),
            ..
        }) = cli.command
        {
            assert_eq!(id, "7");
            assert_eq!(status, TaskStatus::InProgress);
        } else {
            panic!("Expected tasks status");
        }
    }

    #[test]
    fn test_cli_tasks_update_progress_range() {
        assert!(Cli::try_parse_from(["focusflow", "tasks", "update", "1", "--progress", "100"]).is_ok());
        assert!(Cli::try_parse_from(["focusflow", "tasks", "update", "1", "--progress", "101"]).is_err());
    }

    // ==================== Focus ====================

    #[test]
    fn test_cli_focus_run() {
        let cli = Cli::try_parse_from(["focusflow", "focus", "run", "-m", "50", "--block"]).unwrap();
        if let Commands::Focus(args) = cli.command {
            if let FocusCommands::Run { minutes, block } = args.command {
                assert_eq!(minutes, Some(50));
                assert!(block);
            } else {
                panic!("Expected Run");
            }
        } else {
            panic!("Expected Focus command");
        }
    }

    #[test]
    fn test_cli_focus_run_rejects_zero_minutes() {
        assert!(Cli::try_parse_from(["focusflow", "focus", "run", "-m", "0"]).is_err());
    }

    #[test]
    fn test_cli_focus_end_optional_id() {
        let cli = Cli::try_parse_from(["focusflow", "focus", "end"]).unwrap();
        if let Commands::Focus(args) = cli.command {
            assert!(matches!(args.command, FocusCommands::End { session_id: None }));
        } else {
            panic!("Expected Focus command");
        }
    }

    // ==================== Settings / Profile / Onboard ====================

    #[test]
    fn test_cli_settings_set_boolish() {
        let cli =
            Cli::try_parse_from(["focusflow", "settings", "set", "weekly-report", "off"]).unwrap();
        if let Commands::Settings(SettingsArgs {
            command: Some(SettingsCommands::Set { key, value }),
        }) = cli.command
        {
            assert_eq!(key, SettingKey::WeeklyReport);
            assert!(!value);
        } else {
            panic!("Expected settings set");
        }
    }

    #[test]
    fn test_cli_profile_update_style() {
        let cli = Cli::try_parse_from([
            "focusflow", "profile", "update", "--style", "high-focus", "--goal-hours", "6",
        ])
        .unwrap();
        if let Commands::Profile(ProfileArgs {
            command:
                Some(ProfileCommands::Update {
                    style, goal_hours, ..
                }),
        }) = cli.command
        {
            assert_eq!(style, Some(ProductivityStyle::HighFocus));
            assert_eq!(goal_hours, Some(6));
        } else {
            panic!("Expected profile update");
        }
    }

    #[test]
    fn test_cli_onboard_defaults() {
        let cli = Cli::try_parse_from(["focusflow", "onboard"]).unwrap();
        if let Commands::Onboard(args) = cli.command {
            assert_eq!(args.style, ProductivityStyle::Balanced);
            assert_eq!(args.start, "09:00");
            assert_eq!(args.end, "17:00");
            assert!(!args.no_tracking);
        } else {
            panic!("Expected Onboard command");
        }
    }

    #[test]
    fn test_cli_completions() {
        let cli = Cli::try_parse_from(["focusflow", "completions", "zsh"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Completions {
                shell: clap_complete::Shell::Zsh,
                install: false
            }
        ));
    }

    #[test]
    fn test_cli_account_delete_flag() {
        let cli = Cli::try_parse_from(["focusflow", "account", "delete", "--yes"]).unwrap();
        if let Commands::Account(args) = cli.command {
            assert!(matches!(args.command, AccountCommands::Delete { yes: true }));
        } else {
            panic!("Expected Account command");
        }
    }
}
