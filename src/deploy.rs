use std::path::PathBuf;

use crate::config::DeployConfig;
use crate::detect;
use crate::error::DeployResult;
use crate::exec::Executor;
use crate::runners::{runner_for, Runner};
use crate::timing::PhaseTimer;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Deployed,
    /// The deploy command ran and failed.
    DeployFailed(String),
    /// Stopped before dispatch (detection or provider recognition).
    Aborted(String),
}

impl Outcome {
    pub fn is_deployed(&self) -> bool {
        matches!(self, Outcome::Deployed)
    }
}

pub struct Deployer<'a> {
    config: DeployConfig,
    root: PathBuf,
    exec: &'a dyn Executor,
}

impl<'a> Deployer<'a> {
    pub fn new(config: DeployConfig, root: impl Into<PathBuf>, exec: &'a dyn Executor) -> Self {
        Self { config, root: root.into(), exec }
    }

    pub fn config(&self) -> &DeployConfig {
        &self.config
    }

    /// Detect, ensure login, dispatch. Failures are logged, never returned.
    pub async fn deploy(&self) -> Outcome {
        let _total = PhaseTimer::start("Total Deployment Time");

        match self.try_deploy().await {
            Ok(outcome) => outcome,
            Err(e) => {
                eprintln!("Deployment failed: {e}");
                tracing::error!(error = %e, "deployment aborted");
                Outcome::Aborted(e.to_string())
            }
        }
    }

    async fn try_deploy(&self) -> DeployResult<Outcome> {
        let project_type = detect::detect(&self.root)?;
        println!("Detected project type: {project_type}");

        self.check_login(&self.config.provider).await?;
        self.dispatch(&self.config.provider).await
    }

    /// Runs the provider's status check and falls back to its login command.
    /// Only an unrecognized provider is an error; subprocess failures are logged.
    pub async fn check_login(&self, provider: &str) -> DeployResult<()> {
        let runner = runner_for(provider, &self.config)?;

        let status = runner.status_command();
        if let Err(e) = self.exec.run(&status).await {
            tracing::debug!(provider = %runner.provider(), error = %e, "status check failed");
            println!("Not logged in to {provider}. Please log in.");

            let login = runner.login_command();
            if let Err(e) = self.exec.run(&login).await {
                eprintln!("Login to {} failed: {e}", runner.name());
                tracing::warn!(provider = %runner.provider(), error = %e, "login failed, continuing");
            }
        }
        Ok(())
    }

    /// Runs exactly one deploy command for `provider`.
    pub async fn dispatch(&self, provider: &str) -> DeployResult<Outcome> {
        let runner = runner_for(provider, &self.config)?;
        Ok(self.run_deploy(runner.as_ref()).await)
    }

    async fn run_deploy(&self, runner: &dyn Runner) -> Outcome {
        let _timer = PhaseTimer::start(format!("Deploy to {}", runner.name()));
        println!("Deploying to {}...", runner.name());

        match self.exec.run(&runner.deploy_command()).await {
            Ok(()) => {
                tracing::info!(provider = %runner.provider(), "deploy finished");
                Outcome::Deployed
            }
            Err(e) => {
                eprintln!("Failed to deploy to {}: {e}", runner.name());
                Outcome::DeployFailed(e.to_string())
            }
        }
    }
}
