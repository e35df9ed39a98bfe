use std::sync::Arc;

use clap::Parser;
use colored::Colorize;

use focusflow::cli::args::{Cli, Commands};
use focusflow::cli::commands::{self, AppContext};
use focusflow::config::ColorSetting;
use focusflow::error::FlowError;
use focusflow::features::completions::{completion_install_instructions, generate_completions};
use focusflow::features::focus::FocusTimer;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), FlowError> {
    let cli = Cli::parse();
    focusflow::logging::init(cli.verbose);

    // Completions need neither config nor a session
    if let Commands::Completions { shell, install } = cli.command {
        let output = if install {
            completion_install_instructions(shell)
        } else {
            generate_completions(shell)?
        };
        print!("{output}");
        return Ok(());
    }

    let ctx = AppContext::load(cli.api_url, cli.output)?;
    match ctx.config.general.color {
        ColorSetting::Always => colored::control::set_override(true),
        ColorSetting::Never => colored::control::set_override(false),
        ColorSetting::Auto => {},
    }

    let db = ctx.database()?;
    let client = ctx.client(&db)?;
    let format = ctx.format;

    let output = match cli.command {
        Commands::Auth(args) => commands::auth(&client, &db, args, format)?,
        Commands::Tasks(args) => commands::tasks(&client, args, format)?,
        Commands::Focus(args) => commands::focus(Arc::new(client), &db, &ctx.config.focus, args, format)?,
        Commands::Dashboard => commands::dashboard(&client, format)?,
        Commands::Analytics(args) => commands::analytics(&client, args, format)?,
        Commands::Insights => commands::insights(&client, format)?,
        Commands::Profile(args) => commands::profile(&client, args, format)?,
        Commands::Settings(args) => commands::settings(&client, args, format)?,
        Commands::Account(args) => commands::account(&client, &db, args, format)?,
        Commands::Onboard(args) => commands::onboard(&client, args, format)?,
        Commands::Tui => {
            let timer = FocusTimer::new(ctx.config.focus.total_seconds())
                .with_notifications_blocked(ctx.config.focus.block_notifications);
            focusflow::tui::run(Arc::new(client), timer)?;
            String::new()
        }
        Commands::Completions { .. } => String::new(),
    };

    if !output.is_empty() {
        println!("{output}");
    }
    Ok(())
}
