use std::{fmt, path::PathBuf, process::Stdio};
use tokio::process::Command;
use which::which;

use crate::error::{DeployError, DeployResult};

/// A program plus its arguments, rendered exactly as a user would type it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    pub program: String,
    pub args: Vec<String>,
}

impl CommandSpec {
    pub fn new(program: &str, args: &[&str]) -> Self {
        Self {
            program: program.to_string(),
            args: args.iter().map(|a| a.to_string()).collect(),
        }
    }

    /// Runs the same command through `npx`.
    pub fn via_npx(self) -> Self {
        let mut args = Vec::with_capacity(self.args.len() + 1);
        args.push(self.program);
        args.extend(self.args);
        Self { program: "npx".to_string(), args }
    }
}

impl fmt::Display for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for a in &self.args {
            write!(f, " {a}")?;
        }
        Ok(())
    }
}

#[async_trait::async_trait]
pub trait Executor: Send + Sync {
    /// Runs `cmd` to completion. Non-zero exit and spawn errors both map to
    /// `SubprocessFailure`.
    async fn run(&self, cmd: &CommandSpec) -> DeployResult<()>;
}

/// Spawns real processes in `workdir` with inherited stdio so interactive
/// logins work.
pub struct SystemExecutor {
    workdir: PathBuf,
}

impl SystemExecutor {
    pub fn new(workdir: impl Into<PathBuf>) -> Self {
        Self { workdir: workdir.into() }
    }
}

#[async_trait::async_trait]
impl Executor for SystemExecutor {
    async fn run(&self, cmd: &CommandSpec) -> DeployResult<()> {
        let failure = |reason: String| DeployError::SubprocessFailure { command: cmd.to_string(), reason };

        let program = which(&cmd.program).map_err(|_| {
            failure(format!("`{}` not found on PATH. Install it first", cmd.program))
        })?;
        tracing::debug!(command = %cmd, program = %program.display(), "spawning");

        let status = Command::new(&program)
            .args(&cmd.args)
            .current_dir(&self.workdir)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .await
            .map_err(|e| failure(e.to_string()))?;

        if !status.success() {
            return Err(failure(status.to_string()));
        }
        Ok(())
    }
}

/// Prints what would run and reports success.
pub struct DryRunExecutor;

#[async_trait::async_trait]
impl Executor for DryRunExecutor {
    async fn run(&self, cmd: &CommandSpec) -> DeployResult<()> {
        println!("→ (dry run) {cmd}");
        Ok(())
    }
}
