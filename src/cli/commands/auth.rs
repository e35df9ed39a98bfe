use colored::Colorize;
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::json;
use tracing::info;

use crate::api::{ApiClient, Transport};
use crate::cli::args::{AuthArgs, AuthCommands, OutputFormat};
use crate::error::FlowError;
use crate::models::AuthResponse;
use crate::output::to_json;
use crate::storage::{Database, LocalStore};

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap_or_else(|e| panic!("Invalid email regex: {e}"))
});

fn validate_email(email: &str) -> Result<&str, FlowError> {
    let email = email.trim();
    if EMAIL_PATTERN.is_match(email) {
        Ok(email)
    } else {
        Err(FlowError::InvalidArgument(format!("'{email}' is not a valid email address")))
    }
}

fn require(value: &str, what: &str) -> Result<(), FlowError> {
    if value.trim().is_empty() {
        Err(FlowError::InvalidArgument(format!("{what} is required")))
    } else {
        Ok(())
    }
}

/// Execute auth command
///
/// # Errors
///
/// Returns an error if validation fails, the API call fails or the token
/// cannot be stored.
pub fn auth<T: Transport>(
    client: &ApiClient<T>,
    db: &Database,
    args: AuthArgs,
    format: OutputFormat,
) -> Result<String, FlowError> {
    match args.command {
        AuthCommands::Login { email, password } => {
            let email = validate_email(&email)?;
            require(&password, "Password")?;

            let response = client.login(email, &password)?;
            signed_in(db, &response, email, format)
        }
        AuthCommands::Signup {
            name,
            email,
            password,
            goal,
        } => {
            require(&name, "Name")?;
            let email = validate_email(&email)?;
            require(&password, "Password")?;

            let response = client.signup(name.trim(), email, &password, goal.trim())?;
            signed_in(db, &response, email, format)
        }
        AuthCommands::Logout => {
            let had_token = LocalStore::new(db).clear_session()?;
            match format {
                OutputFormat::Json => to_json(&json!({ "signed_out": had_token })),
                OutputFormat::Pretty if had_token => Ok(format!("{} Signed out", "✓".green())),
                OutputFormat::Pretty => Ok("Not signed in".to_string()),
            }
        }
        AuthCommands::Status => {
            let user = client.verify()?;
            match format {
                OutputFormat::Json => to_json(&json!({
                    "authenticated": user.is_some(),
                    "user": user,
                })),
                OutputFormat::Pretty => Ok(user.map_or_else(
                    || format!("{} Not signed in. Run 'focusflow auth login'.", "✗".red()),
                    |user| {
                        let who = user
                            .get("email")
                            .or_else(|| user.get("name"))
                            .and_then(|v| v.as_str())
                            .unwrap_or("current user");
                        format!("{} Signed in as {}", "✓".green(), who.bold())
                    },
                )),
            }
        }
    }
}

fn signed_in(
    db: &Database,
    response: &AuthResponse,
    email: &str,
    format: OutputFormat,
) -> Result<String, FlowError> {
    LocalStore::new(db).set_token(&response.token)?;
    info!(email, "signed in");

    match format {
        OutputFormat::Json => to_json(&json!({ "user": response.user })),
        OutputFormat::Pretty => {
            let who = response.user.as_ref().map_or(email, |u| u.name.as_str());
            Ok(format!("{} Signed in as {}", "✓".green(), who.bold()))
        }
    }
}
