use colored::Colorize;
use serde_json::json;
use tracing::info;

use crate::api::{ApiClient, Transport};
use crate::cli::args::{
    AccountArgs, AccountCommands, OnboardArgs, OutputFormat, ProfileArgs, ProfileCommands,
    SettingsArgs, SettingsCommands,
};
use crate::error::FlowError;
use crate::features::onboarding::OnboardingWizard;
use crate::models::{ProfileUpdate, SettingsUpdate, UpdateAck};
use crate::output::{format_onboarding_pretty, format_profile_pretty, format_settings_pretty, render, to_json};
use crate::storage::{Database, LocalStore};

/// Execute profile command
///
/// # Errors
///
/// Returns an error if the update is empty, the API call fails or output
/// formatting fails.
pub fn profile<T: Transport>(
    client: &ApiClient<T>,
    args: ProfileArgs,
    format: OutputFormat,
) -> Result<String, FlowError> {
    match args.command.unwrap_or(ProfileCommands::Show) {
        ProfileCommands::Show => render(&client.profile()?, format, format_profile_pretty),
        ProfileCommands::Update {
            name,
            avatar,
            style,
            goal_hours,
        } => {
            let update = ProfileUpdate {
                name,
                avatar,
                style,
                daily_goal_hours: goal_hours,
            };
            let ack = client.update_profile(&update)?;
            acknowledged(&ack, "Profile updated", format)
        }
    }
}

/// Execute settings command
///
/// # Errors
///
/// Returns an error if the API call fails or output formatting fails.
pub fn settings<T: Transport>(
    client: &ApiClient<T>,
    args: SettingsArgs,
    format: OutputFormat,
) -> Result<String, FlowError> {
    match args.command.unwrap_or(SettingsCommands::Show) {
        SettingsCommands::Show => render(&client.settings()?, format, format_settings_pretty),
        SettingsCommands::Set { key, value } => {
            let ack = client.update_settings(&SettingsUpdate::single(key, value))?;
            let state = if value { "on" } else { "off" };
            acknowledged(&ack, &format!("{} turned {state}", key.label()), format)
        }
    }
}

/// Execute account command
///
/// # Errors
///
/// Returns an error if deletion is not confirmed or the API call fails.
pub fn account<T: Transport>(
    client: &ApiClient<T>,
    db: &Database,
    args: AccountArgs,
    format: OutputFormat,
) -> Result<String, FlowError> {
    match args.command {
        AccountCommands::Delete { yes } => {
            if !yes {
                return Err(FlowError::InvalidArgument(
                    "Deleting your account removes all data permanently. Re-run with --yes to confirm."
                        .to_string(),
                ));
            }

            let ack = client.delete_account()?;
            LocalStore::new(db).clear_session()?;
            info!("account deleted, local session cleared");

            match format {
                OutputFormat::Json => to_json(&ack),
                OutputFormat::Pretty => Ok(format!("{} Account deleted", "✓".green())),
            }
        }
    }
}

/// Execute onboard command
///
/// # Errors
///
/// Returns an error if the working hours are invalid or the API call fails.
pub fn onboard<T: Transport>(
    client: &ApiClient<T>,
    args: OnboardArgs,
    format: OutputFormat,
) -> Result<String, FlowError> {
    let mut wizard = OnboardingWizard::new();
    wizard.next();
    wizard.set_style(args.style);
    wizard.next();
    wizard.set_tracking(!args.no_tracking);
    wizard.next();
    wizard.set_hours(&args.start, &args.end)?;

    let payload = wizard.finish()?;
    let result = client.complete_onboarding(&payload)?;

    match format {
        OutputFormat::Json => to_json(&json!({
            "result": result,
            "tracking_enabled": wizard.tracking_enabled(),
        })),
        OutputFormat::Pretty => {
            let tracking = if wizard.tracking_enabled() { "on" } else { "off" };
            Ok(format!(
                "{}  {}: {tracking}",
                format_onboarding_pretty(&result),
                "Activity tracking".dimmed()
            ))
        }
    }
}

fn acknowledged(ack: &UpdateAck, message: &str, format: OutputFormat) -> Result<String, FlowError> {
    match format {
        OutputFormat::Json => to_json(ack),
        OutputFormat::Pretty => Ok(format!("{} {message}", "✓".green())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{Method, MockTransport};
    use crate::cli::commands::test_support::{client, ok, serving};
    use crate::models::{ProductivityStyle, SettingKey};

    #[test]
    fn test_profile_defaults_to_show() {
        let mut transport = MockTransport::new();
        serving(
            &mut transport,
            "/user/profile",
            r#"{"id": "u1", "name": "Ada", "email": "ada@example.com", "dailyGoalHours": 6}"#,
        );

        let output = profile(
            &client(transport),
            ProfileArgs { command: None },
            OutputFormat::Pretty,
        )
        .unwrap();
        assert!(output.contains("Ada"));
        assert!(output.contains("6h"));
    }

    #[test]
    fn test_empty_profile_update_is_rejected() {
        let args = ProfileArgs {
            command: Some(ProfileCommands::Update {
                name: None,
                avatar: None,
                style: None,
                goal_hours: None,
            }),
        };
        let result = profile(&client(MockTransport::new()), args, OutputFormat::Pretty);
        assert!(matches!(result, Err(FlowError::InvalidArgument(_))));
    }

    #[test]
    fn test_settings_set_sends_single_flag() {
        let mut transport = MockTransport::new();
        transport
            .expect_send()
            .withf(|req| {
                req.method == Method::Put
                    && req.body == Some(serde_json::json!({ "cloud_sync_enabled": false }))
            })
            .times(1)
            .returning(|_| ok(r#"{"status": "updated", "updated": {"cloud_sync_enabled": false}}"#));

        let args = SettingsArgs {
            command: Some(SettingsCommands::Set {
                key: SettingKey::CloudSync,
                value: false,
            }),
        };
        let output = settings(&client(transport), args, OutputFormat::Pretty).unwrap();
        assert!(output.contains("Cloud sync turned off"));
    }

    #[test]
    fn test_account_delete_requires_confirmation() {
        let db = Database::open_in_memory().unwrap();
        let args = AccountArgs {
            command: AccountCommands::Delete { yes: false },
        };
        let result = account(&client(MockTransport::new()), &db, args, OutputFormat::Pretty);
        assert!(matches!(result, Err(FlowError::InvalidArgument(_))));
    }

    #[test]
    fn test_account_delete_clears_token() {
        let mut transport = MockTransport::new();
        serving(&mut transport, "/user/delete", r#"{"status": "deleted"}"#);

        let db = Database::open_in_memory().unwrap();
        LocalStore::new(&db).set_token("tok").unwrap();

        let args = AccountArgs {
            command: AccountCommands::Delete { yes: true },
        };
        account(&client(transport), &db, args, OutputFormat::Pretty).unwrap();
        assert_eq!(LocalStore::new(&db).token().unwrap(), None);
    }

    #[test]
    fn test_onboard_submits_wizard_answers() {
        let mut transport = MockTransport::new();
        transport
            .expect_send()
            .withf(|req| {
                req.method == Method::Post
                    && req.path == "/onboarding/"
                    && req.body
                        == Some(serde_json::json!({
                            "style": "High-Focus",
                            "work_start": "08:30",
                            "work_end": "16:30"
                        }))
            })
            .times(1)
            .returning(|_| ok(r#"{"message": "Onboarding complete"}"#));

        let args = OnboardArgs {
            style: ProductivityStyle::HighFocus,
            start: "08:30".to_string(),
            end: "16:30".to_string(),
            no_tracking: true,
        };
        let output = onboard(&client(transport), args, OutputFormat::Json).unwrap();
        assert!(output.contains("Onboarding complete"));
        assert!(output.contains("\"tracking_enabled\": false"));
    }

    #[test]
    fn test_onboard_bad_hours_sends_nothing() {
        let args = OnboardArgs {
            style: ProductivityStyle::Balanced,
            start: "18:00".to_string(),
            end: "09:00".to_string(),
            no_tracking: false,
        };
        let result = onboard(&client(MockTransport::new()), args, OutputFormat::Pretty);
        assert!(matches!(result, Err(FlowError::InvalidArgument(_))));
    }
}
