use crate::{logging, rt, tui};
use anyhow::Context;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;
use yumcon_api::YumClient;
use yumcon_core::audit::{AuditLog, AuditOutcome};
use yumcon_core::config::{ConsoleConfig, default_config_path};
use yumcon_core::model::RepoType;
use yumcon_core::service::RepoService;

mod args;
mod repo_cmd;
mod rpm_cmd;
mod tag_cmd;
mod virtual_cmd;

use args::*;
use repo_cmd::handle_repo;
use rpm_cmd::handle_rpm;
use tag_cmd::handle_tag;
use virtual_cmd::{handle_repos, handle_virtual};

pub fn run() -> anyhow::Result<()> {
    let log_buffer = logging::LogBuffer::new(200);
    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(logging::LogLayer::new(log_buffer.clone()))
        .init();

    let cli = Cli::parse();
    let audit = AuditLog::open_default()?;
    info!(command = command_label(&cli.command), "Running command");

    let result = match cli.command {
        Commands::Config(config_args) => handle_config(config_args, cli.config),
        command => {
            let server_url = resolve_server_url(cli.server, cli.config)?;
            let service: Arc<dyn RepoService> = Arc::new(YumClient::new(&server_url)?);
            match command {
                Commands::Repos => handle_repos(service.as_ref()),
                Commands::Virtual(virtual_args) => {
                    handle_virtual(virtual_args, service.as_ref(), &audit)
                }
                Commands::Repo(repo_args) => handle_repo(repo_args, service.as_ref(), &audit),
                Commands::Tag(tag_args) => handle_tag(tag_args, service.as_ref(), &audit),
                Commands::Rpm(rpm_args) => handle_rpm(rpm_args, service.as_ref(), &audit),
                Commands::Tui(tui_args) => tui::run_tui(
                    service,
                    &audit,
                    log_buffer.clone(),
                    start_options(tui_args),
                ),
                Commands::Config(_) => unreachable!("handled above"),
            }
        }
    };

    if let Err(err) = &result {
        let _ = audit.record(
            "app.error",
            None,
            AuditOutcome::Failed,
            Some(&err.to_string()),
        );
    }
    result
}

fn handle_config(config_args: ConfigArgs, config_path: Option<PathBuf>) -> anyhow::Result<()> {
    match config_args.command {
        ConfigCommands::Init(init) => {
            let path = match config_path {
                Some(path) => path,
                None => default_config_path()?,
            };
            let config = ConsoleConfig {
                server_url: init.server,
            };
            config.save(&path).context("save console config")?;
            println!("Config written to {}", path.display());
            Ok(())
        }
    }
}

fn resolve_server_url(
    server: Option<String>,
    config_path: Option<PathBuf>,
) -> anyhow::Result<String> {
    if let Some(server) = server {
        return Ok(server);
    }
    let path = match config_path {
        Some(path) => path,
        None => default_config_path()?,
    };
    let config = ConsoleConfig::load(&path)?;
    Ok(config.server_url)
}

fn start_options(tui_args: TuiArgs) -> tui::StartOptions {
    let virtual_repo = tui_args
        .virtual_repo
        .map(|name| yumcon_core::model::VirtualRepoConfig {
            name,
            external: tui_args.external,
            target: tui_args.current.unwrap_or_default(),
        });
    tui::StartOptions { virtual_repo }
}

fn record_audit(
    audit: &AuditLog,
    action: &str,
    repo: Option<&str>,
    result: &anyhow::Result<()>,
) {
    let outcome = match result {
        Ok(()) => AuditOutcome::Ok,
        Err(_) => AuditOutcome::Failed,
    };
    let error = result.as_ref().err().map(|err| err.to_string());
    let _ = audit.record(action, repo, outcome, error.as_deref());
}

fn command_label(command: &Commands) -> &'static str {
    match command {
        Commands::Config(_) => "config",
        Commands::Repos => "repos",
        Commands::Virtual(_) => "virtual",
        Commands::Repo(_) => "repo",
        Commands::Tag(_) => "tag",
        Commands::Rpm(_) => "rpm",
        Commands::Tui(_) => "tui",
    }
}
