use std::{
    io::{self, BufRead},
    path::PathBuf,
    sync::Arc,
    thread,
    time::Duration,
};

mod backend_bridge;
mod config;
mod controller;
mod ui;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use client_core::HttpUserApi;
use crossbeam_channel::{bounded, Sender};
use tracing::info;
use tracing_subscriber::EnvFilter;

use backend_bridge::{commands::BackendCommand, runtime};
use controller::{events::UiEvent, orchestration::dispatch_backend_command};
use ui::{input::HELP_TEXT, parse_line, InputAction, TerminalRenderer};

#[derive(Parser, Debug)]
#[command(about = "Browse and edit users of a remote REST collection")]
struct Args {
    /// Collection endpoint, e.g. https://host/users
    #[arg(long)]
    users_url: Option<String>,
    #[arg(long, default_value = config::DEFAULT_CONFIG_PATH)]
    config: PathBuf,
}

fn spawn_input_thread(cmd_tx: Sender<BackendCommand>, ui_tx: Sender<UiEvent>) -> Result<()> {
    thread::Builder::new()
        .name("user-admin-input".into())
        .spawn(move || {
            let stdin = io::stdin();
            for line in stdin.lock().lines() {
                let Ok(line) = line else { break };
                match parse_line(&line) {
                    Ok(None) => {}
                    Ok(Some(InputAction::Quit)) => break,
                    Ok(Some(InputAction::Help)) => {
                        let _ = ui_tx.send(UiEvent::Notice(HELP_TEXT.to_string()));
                    }
                    Ok(Some(InputAction::Command(cmd))) => {
                        let mut status = String::new();
                        dispatch_backend_command(&cmd_tx, cmd, &mut status);
                        if !status.is_empty() {
                            let _ = ui_tx.send(UiEvent::Notice(status));
                        }
                    }
                    Err(err) => {
                        let _ = ui_tx.send(UiEvent::Notice(err.to_string()));
                    }
                }
            }
        })
        .context("failed to spawn input thread")?;
    Ok(())
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(filter)
        .init();

    let args = Args::parse();
    let mut settings = config::load_settings(&args.config);
    if let Some(users_url) = args.users_url {
        settings.users_url = users_url;
    }

    let api = HttpUserApi::with_timeout(
        &settings.users_url,
        Duration::from_secs(settings.request_timeout_secs),
    )
    .context("failed to configure users endpoint")?;
    info!(users_url = api.users_url(), "starting user admin");

    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(64);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(256);
    let backend = runtime::launch(
        cmd_rx,
        ui_tx.clone(),
        Arc::new(api),
        settings.controller_options(),
    )?;
    spawn_input_thread(cmd_tx, ui_tx)?;

    let mut renderer = TerminalRenderer::new(io::stdout());
    renderer.print_help()?;
    for event in ui_rx.iter() {
        renderer.apply(&event)?;
    }

    backend
        .join()
        .map_err(|_| anyhow!("backend worker panicked"))?;
    Ok(())
}
