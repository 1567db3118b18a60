//! `themedash` binary: serves the shell over HTTP or checks its assets.

use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::{Args, Parser, Subcommand};
use console::style;
use themedash::{AppConfig, AssetDir, DefaultTheme, Theme};
use themedash_server::{create_router, spawn_session_reaper, AppState};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Parser)]
#[command(name = "themedash", version, about = "Themed dashboard shell")]
struct Cli {
    /// TOML configuration file
    #[arg(long, global = true, env = "THEMEDASH_CONFIG")]
    config: Option<PathBuf>,

    #[command(flatten)]
    serve: ServeArgs,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Serve the dashboard (default)
    Serve,
    /// Report which assets are present and exit
    Check,
}

#[derive(Debug, Args)]
struct ServeArgs {
    #[arg(long, global = true)]
    host: Option<String>,

    #[arg(long, global = true)]
    port: Option<u16>,

    /// Directory holding style.css, the theme sheets and the icon
    #[arg(long, global = true)]
    assets_dir: Option<PathBuf>,

    /// light, dark or system
    #[arg(long, global = true)]
    default_theme: Option<DefaultTheme>,
}

impl ServeArgs {
    fn apply(self, config: &mut AppConfig) {
        if let Some(host) = self.host {
            config.host = host;
        }
        if let Some(port) = self.port {
            config.port = port;
        }
        if let Some(dir) = self.assets_dir {
            config.assets_dir = dir;
        }
        if let Some(theme) = self.default_theme {
            config.default_theme = theme;
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let mut config = AppConfig::load(cli.config.as_deref()).context("failed to load configuration")?;
    cli.serve.apply(&mut config);

    match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => serve(config).await,
        Command::Check => check(&config.assets()),
    }
}

async fn serve(config: AppConfig) -> anyhow::Result<()> {
    let state = AppState::new(&config).context("failed to build page templates")?;
    let routes: Vec<&str> = state.shell.pages().routes().collect();
    info!(pages = ?routes, "registered pages");
    let reaper = spawn_session_reaper(state.sessions.clone(), config.session_ttl());
    let app = create_router(state);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    info!(
        "Serving themedash on http://{} (assets: {})",
        addr,
        config.assets_dir.display()
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    reaper.abort();
    info!("Shut down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {}", e);
    }
}

fn check(assets: &AssetDir) -> anyhow::Result<()> {
    println!("{} {}", style("Assets in").bold(), assets.root().display());

    let icon = assets.icon_path();
    report(&icon.display().to_string(), icon.is_file());

    let mut sheets = vec![themedash::assets::GLOBAL_STYLESHEET];
    sheets.extend(Theme::ALL.iter().map(|t| t.stylesheet_file()));

    let mut found = 0;
    for sheet in sheets {
        let present = assets.read_stylesheet(sheet).is_ok();
        report(sheet, present);
        if present {
            found += 1;
        }
    }

    if found == 0 {
        bail!("no stylesheets found in {}", assets.root().display());
    }
    Ok(())
}

fn report(name: &str, present: bool) {
    if present {
        println!("  {} {}", style("ok").green(), name);
    } else {
        println!("  {} {}", style("missing").yellow(), name);
    }
}
