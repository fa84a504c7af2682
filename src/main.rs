use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use viralhook::connector::api::{Container, ContainerConfig, Router};
use viralhook::connector::http::start_http_server;
use viralhook::{Commands, GatewayConfig};

const AUTH_TOKEN_VAR: &str = "VIRALHOOK_AUTH_TOKEN";
const USAGE_LIMIT_VAR: &str = "VIRALHOOK_USAGE_LIMIT";

#[derive(Parser)]
#[command(name = "viralhook")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(short, long, global = true)]
    verbose: bool,

    #[arg(short, long, global = true, default_value = "~/.viralhook")]
    data_dir: String,

    /// Keep history and usage in memory instead of the data directory
    #[arg(long, global = true)]
    memory_storage: bool,

    /// Refuse new generations after this many (overrides VIRALHOOK_USAGE_LIMIT)
    #[arg(long, global = true)]
    usage_limit: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG wins over --verbose when set.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(if cli.verbose { "debug" } else { "info" })
    });
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let data_dir = expand_tilde(&cli.data_dir);
    if !cli.memory_storage {
        std::fs::create_dir_all(&data_dir)?;
    }

    let usage_limit = match cli.usage_limit {
        Some(limit) => Some(limit),
        None => usage_limit_from_env()?,
    };

    let container = Container::new(ContainerConfig {
        data_dir,
        memory_storage: cli.memory_storage,
        usage_limit,
        gateway: GatewayConfig::from_env(),
    });

    match cli.command {
        Commands::Serve { port, public } => {
            let ip = if public {
                IpAddr::V4(Ipv4Addr::UNSPECIFIED)
            } else {
                IpAddr::V4(Ipv4Addr::LOCALHOST)
            };
            let auth_token = std::env::var(AUTH_TOKEN_VAR)
                .ok()
                .filter(|t| !t.trim().is_empty());
            info!("Starting HTTP server (data dir {})", container.data_dir());
            start_http_server(container.http_state(), auth_token, SocketAddr::new(ip, port)).await?;
        }
        command => {
            let router = Router::new(&container);
            let output = router.route(command).await?;
            println!("{}", output);
        }
    }

    Ok(())
}

fn usage_limit_from_env() -> Result<Option<u64>> {
    match std::env::var(USAGE_LIMIT_VAR) {
        Ok(value) if !value.trim().is_empty() => Ok(Some(value.trim().parse().map_err(|e| {
            anyhow::anyhow!("{USAGE_LIMIT_VAR} must be a whole number: {e}")
        })?)),
        _ => Ok(None),
    }
}

fn expand_tilde(path: &str) -> String {
    if path == "~" || path.starts_with("~/") {
        if let Some(home) = std::env::var_os("HOME") {
            if path == "~" {
                return home.to_string_lossy().to_string();
            }
            return path.replacen("~", &home.to_string_lossy(), 1);
        }
    }
    path.to_string()
}
