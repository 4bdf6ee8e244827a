use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod deploy;
mod detect;
mod error;
mod exec;
mod runners;
mod timing;

use deploy::Deployer;
use exec::{DryRunExecutor, Executor, SystemExecutor};

#[derive(Parser, Debug)]
#[command(name = "autodeploy", version, about = "Detect a web project and publish it to Vercel, Netlify or DigitalOcean")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
    /// Project directory; provider CLIs run here
    #[arg(short = 'C', long, global = true, default_value = ".")]
    dir: PathBuf,
    /// Config file, relative to the project directory
    #[arg(long, global = true, default_value = config::CONFIG_FILE)]
    config: PathBuf,
    /// Environment file loaded before anything runs
    #[arg(long, global = true, default_value = config::ENV_FILE)]
    env_file: PathBuf,
    /// Print provider commands instead of running them
    #[arg(long, global = true)]
    dry_run: bool,
    /// Exit with status 1 when the deployment did not succeed
    #[arg(long, global = true)]
    strict: bool,
    /// Verbose logs
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
enum Commands {
    /// Detect, log in if needed and deploy (default)
    Deploy,
    /// Print the detected project type
    Detect,
    /// Check the provider login and log in if needed
    Login,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "info" } else { "warn" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("AUTODEPLOY_LOG").unwrap_or_else(|_| filter.into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    load_env_file(&cli.dir.join(&cli.env_file))?;

    match cli.command.unwrap_or(Commands::Deploy) {
        Commands::Deploy => cmd_deploy(&cli).await?,
        Commands::Detect => cmd_detect(&cli)?,
        Commands::Login => cmd_login(&cli).await?,
    }
    Ok(())
}

fn load_env_file(path: &Path) -> Result<()> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no env file");
        return Ok(());
    }
    dotenv::from_path(path).with_context(|| format!("loading env file {}", path.display()))?;
    tracing::info!(path = %path.display(), "env file loaded");
    Ok(())
}

fn make_executor(cli: &Cli) -> Box<dyn Executor> {
    if cli.dry_run {
        Box::new(DryRunExecutor)
    } else {
        Box::new(SystemExecutor::new(cli.dir.clone()))
    }
}

fn load_config(cli: &Cli) -> Result<config::DeployConfig> {
    let path = cli.dir.join(&cli.config);
    let config = config::load(&path)?;
    println!("Loaded config: {}", serde_json::to_string(&config)?);
    Ok(config)
}

async fn cmd_deploy(cli: &Cli) -> Result<()> {
    let config = load_config(cli)?;
    let exec = make_executor(cli);
    let deployer = Deployer::new(config, &cli.dir, exec.as_ref());

    let outcome = deployer.deploy().await;
    tracing::info!(provider = %deployer.config().provider, ?outcome, "deploy finished");

    if cli.strict && !outcome.is_deployed() {
        std::process::exit(1);
    }
    Ok(())
}

fn cmd_detect(cli: &Cli) -> Result<()> {
    let project_type = detect::detect(&cli.dir)?;
    println!("Detected project type: {project_type}");
    Ok(())
}

async fn cmd_login(cli: &Cli) -> Result<()> {
    let config = load_config(cli)?;
    let exec = make_executor(cli);
    let deployer = Deployer::new(config, &cli.dir, exec.as_ref());

    let provider = deployer.config().provider.clone();
    deployer.check_login(&provider).await?;
    println!("✓ Login check complete for {provider}");
    Ok(())
}
