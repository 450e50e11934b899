use std::sync::Arc;

use clap::Parser;
use course_core::course::illustrator_expert;
use course_core::site::AGENCY_NAME;
use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::AppServices;
use tracing::info;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;
use ui::{App, UiApp, build_app_context};

mod cli;
mod commands;
mod config;

use cli::{Cli, Command};
use config::{AppConfig, prepare_sqlite_file};

/// `RUST_LOG` (default `info`), raised to `debug` everywhere when `verbose`.
fn log_filter(env: Option<&str>, verbose: bool) -> EnvFilter {
    let filter = env
        .and_then(|raw| EnvFilter::try_new(raw).ok())
        .unwrap_or_else(|| EnvFilter::new("info"));
    if verbose {
        filter.add_directive(LevelFilter::DEBUG.into())
    } else {
        filter
    }
}

fn init_tracing(verbose: bool) {
    let env = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(env.as_deref(), verbose))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn launch_desktop(services: AppServices) {
    let app: Arc<dyn UiApp> = Arc::new(services);
    let context = build_app_context(&app);

    // On macOS, Dioxus/tao can default to an always-on-top window in some dev setups.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title(AGENCY_NAME)
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::from_args(&cli.global)?;

    // Open + migrate SQLite at startup. Keep this in the binary glue so core/services stay pure.
    prepare_sqlite_file(&config.db_url)?;
    let services = AppServices::new_sqlite(
        &config.db_url,
        illustrator_expert(),
        &config.services_config(),
    )
    .await?;
    info!(
        db = %config.db_url,
        policy = ?config.lesson_policy,
        lessons = services.catalog().total_lessons(),
        "course data ready"
    );

    match cli.command.unwrap_or(Command::Ui) {
        Command::Ui => {
            launch_desktop(services);
            Ok(())
        }
        command => commands::execute(command, &services).await,
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.global.verbose);

    if let Err(err) = run(cli).await {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
