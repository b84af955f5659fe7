use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use speaknest_config::Config;
use speaknest_types::AppEvent;
use tracing_subscriber::EnvFilter;

mod cli;
mod controller;
mod events;
mod io;
mod profile;
mod state;
mod ui;

#[cfg(test)]
mod tests;

use cli::{Cli, Command, ProfileCommand};
use controller::AppController;
use state::AppState;

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let env_config = Config::new();
    init_tracing(env_config.log_json);

    if let Command::Profile {
        action: ProfileCommand::Init { path, name },
    } = &cli.command
    {
        let mut config = env_config;
        cli.apply_overrides(&mut config);
        profile::init_profile(path, name, &config)?;
        println!("Created profile {name} at {}", path.display());
        return Ok(());
    }

    let mut config = profile::load_config(cli.profile.as_deref())?;
    cli.apply_overrides(&mut config);
    let capacity = config.channel_capacity;

    let state = Arc::new(
        AppState::new(config)
            .await
            .context("Failed to initialize application state")?,
    );

    let controller = AppController::new(state, capacity);
    let mut tasks = controller.spawn_tasks();

    let result = match &cli.command {
        Command::Session { user } => {
            io::run_session(user.clone(), controller.requests(), controller.responses()).await
        }
        command => match command.to_event() {
            Some(event) => run_once(&controller, event).await,
            None => Ok(()),
        },
    };

    controller.shutdown();
    while let Some(joined) = tasks.join_next().await {
        match joined {
            Ok(Ok(())) => {}
            Ok(Err(e)) => tracing::error!("task exited with error: {e:#}"),
            Err(e) => tracing::error!("task panicked: {e}"),
        }
    }

    result
}

async fn run_once(controller: &AppController, event: AppEvent) -> anyhow::Result<()> {
    let response = io::request(&controller.requests(), &controller.responses(), event).await?;

    if let AppEvent::Error(message) = response {
        anyhow::bail!(message);
    }

    println!("{}", ui::render(&response));
    Ok(())
}
