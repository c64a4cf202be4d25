use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use rustyline::Editor;
use rustyline::error::ReadlineError;
use tokio::sync::mpsc;
use tracing_subscriber::EnvFilter;

use profile_application::{ProfileFormController, SubmitOutcome};
use profile_core::profile::ProfileStore;
use profile_infrastructure::{InMemoryProfileStore, SettingsService, SimulatedPersistence};

mod command;
mod helper;
mod render;

use command::{ReplCommand, help_text};
use helper::FormHelper;

#[derive(Parser)]
#[command(name = "profile-form")]
#[command(about = "Edit a user profile with validation and live feedback", long_about = None)]
struct Cli {
    /// Path to a settings TOML file (defaults to ~/.config/profile-form/settings.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn print_lines(lines: Vec<String>) {
    for line in lines {
        println!("{}", line);
    }
}

/// Entry point for the profile form REPL.
///
/// The REPL is the application root: it owns the profile store and injects
/// it into the form controller. Submissions run in the background so the
/// prompt stays responsive during the commit latency.
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    // ===== Bootstrap =====
    let settings_service = match cli.config {
        Some(path) => SettingsService::with_path(path),
        None => SettingsService::new()?,
    };
    let settings = settings_service
        .load()
        .with_context(|| format!("Failed to load {}", settings_service.path().display()))?;
    tracing::info!("[Bootstrap] Using settings {:?}", settings);

    let store = InMemoryProfileStore::new();
    let controller = Arc::new(
        ProfileFormController::mount(
            Arc::new(store.clone()),
            Arc::new(SimulatedPersistence::from_settings(&settings)),
            settings,
        )
        .await,
    );

    // Background submissions report back through this channel
    let (outcome_tx, mut outcome_rx) = mpsc::channel::<SubmitOutcome>(8);
    let printer_controller = Arc::clone(&controller);
    let printer = tokio::spawn(async move {
        while let Some(outcome) = outcome_rx.recv().await {
            println!();
            match render::render_outcome(&outcome) {
                Some(line) => println!("{}", line),
                None => print_lines(render::render_form(&printer_controller.snapshot().await)),
            }
        }
    });

    // ===== REPL Setup =====
    let mut rl = Editor::new()?;
    rl.set_helper(Some(FormHelper::new()));

    println!("{}", "=== Profile Form ===".bright_magenta().bold());
    println!("{}", "Type 'help' for commands or 'quit' to exit.".bright_black());
    println!();

    // ===== Main REPL Loop =====
    loop {
        let line = match rl.readline("profile> ") {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(e) => {
                eprintln!("{}", format!("Readline error: {:?}", e).red());
                break;
            }
        };

        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        let _ = rl.add_history_entry(trimmed);

        let command = match trimmed.parse::<ReplCommand>() {
            Ok(command) => command,
            Err(message) => {
                println!("{}", message.yellow());
                continue;
            }
        };

        match command {
            ReplCommand::Set { field, value } => {
                if !controller.on_field_change(field, &value).await {
                    println!("{}", format!("Input not allowed for {}", field.label()).bright_black());
                }
            }
            ReplCommand::Focus(field) => controller.on_focus(field).await,
            ReplCommand::Blur => controller.on_blur().await,
            ReplCommand::Submit => {
                let controller = Arc::clone(&controller);
                let tx = outcome_tx.clone();
                tokio::spawn(async move {
                    let outcome = controller.on_submit().await;
                    let _ = tx.send(outcome).await;
                });
            }
            ReplCommand::Dismiss => {
                controller.dismiss_notification().await;
            }
            ReplCommand::Show => print_lines(render::render_form(&controller.snapshot().await)),
            ReplCommand::Store => print_lines(render::render_profile(&store.read().await)),
            ReplCommand::Help => println!("{}", help_text()),
            ReplCommand::Quit => break,
        }
    }

    // ===== Teardown =====
    controller.teardown().await;
    drop(outcome_tx);
    printer.abort();
    println!("{}", "Goodbye!".bright_green());

    Ok(())
}
