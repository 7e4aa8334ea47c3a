use anyhow::{Context, Result};
use api_ingress::{ApiIngress, ApiIngressConfig};
use axum::Router;
use clap::{Parser, Subcommand};
use marriage_registry::{MarriageRegistry, MarriageRegistryConfig};
use mimalloc::MiMalloc;
use runtime::{AppConfig, CliArgs};
use std::path::PathBuf;
use std::time::Duration;
use tokio::net::TcpListener;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

const REGISTRY_MODULE: &str = "marriage_registry";
const INGRESS_MODULE: &str = "api_ingress";

/// Marriage Registry Server - registrations and marriage applications over HTTP
#[derive(Parser)]
#[command(name = "marriage-registry-server")]
#[command(about = "Marriage Registry Server - registrations and marriage applications over HTTP")]
#[command(version = "0.1.0")]
struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Port for HTTP server (overrides config)
    #[arg(short, long)]
    port: Option<u16>,

    /// Print current configuration and exit
    #[arg(long)]
    print_config: bool,

    /// Log verbosity level (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Keep users in memory instead of the JSON store
    #[arg(long)]
    mock: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the server
    Run,
    /// Check configuration
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let args = CliArgs {
        config: cli.config.as_ref().map(|p| p.to_string_lossy().to_string()),
        port: cli.port,
        print_config: cli.print_config,
        verbose: cli.verbose,
        mock: cli.mock,
    };

    // Load configuration (normalized home_dir is applied inside)
    let mut config = AppConfig::load_or_default(cli.config.as_deref())?;
    config.apply_cli_overrides(&args);

    let logging_config = config
        .logging
        .clone()
        .unwrap_or_else(runtime::config::default_logging_config);
    runtime::init_logging_from_config(&logging_config, config.home_dir());
    tracing::info!("Marriage Registry Server starting");

    if cli.print_config {
        println!("{}", config.to_yaml()?);
        return Ok(());
    }

    match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => run_server(config, args).await,
        Commands::Check => check_config(config),
    }
}

async fn run_server(config: AppConfig, args: CliArgs) -> Result<()> {
    tracing::info!("Initializing modules...");

    let registry_cfg: MarriageRegistryConfig = config.module_config(REGISTRY_MODULE)?;
    let ingress_cfg: ApiIngressConfig = config.module_config(INGRESS_MODULE)?;

    let registry = MarriageRegistry::init(&registry_cfg, config.home_dir(), args.mock)?;
    if args.mock {
        tracing::warn!("Running with an in-memory store, nothing will be persisted");
    }

    let ingress = ApiIngress::new(ingress_cfg)
        .with_request_timeout(Duration::from_secs(config.server.timeout_sec));
    let router = ingress.build_router(
        registry.register_rest(Router::new()),
        Some(MarriageRegistry::openapi()),
    )?;

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    api_ingress::serve(listener, router, api_ingress::shutdown_signal()).await
}

fn check_config(config: AppConfig) -> Result<()> {
    tracing::info!("Checking configuration...");

    // home_dir was already normalized and created by the loader; module sections
    // are only known here.
    let registry_cfg: MarriageRegistryConfig = config.module_config(REGISTRY_MODULE)?;
    let _: ApiIngressConfig = config.module_config(INGRESS_MODULE)?;

    tracing::info!("Configuration is valid");
    println!("Configuration check passed");
    println!(
        "Store file: {}",
        registry_cfg.resolve_store_path(config.home_dir()).display()
    );
    println!("{}", config.to_yaml()?);

    Ok(())
}
