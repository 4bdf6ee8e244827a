pub mod digitalocean;
pub mod netlify;
pub mod vercel;

use std::{fmt, str::FromStr};

use crate::config::DeployConfig;
use crate::error::DeployError;
use crate::exec::CommandSpec;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provider {
    Vercel,
    Netlify,
    DigitalOcean,
}

impl Provider {
    pub fn tag(&self) -> &'static str {
        match self {
            Provider::Vercel => "vercel",
            Provider::Netlify => "netlify",
            Provider::DigitalOcean => "digitalocean",
        }
    }
}

impl FromStr for Provider {
    type Err = DeployError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "vercel" => Ok(Provider::Vercel),
            "netlify" => Ok(Provider::Netlify),
            "digitalocean" => Ok(Provider::DigitalOcean),
            other => Err(DeployError::UnsupportedProvider(other.to_string())),
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// The command surface of one provider CLI.
pub trait Runner: Send + Sync {
    fn provider(&self) -> Provider;
    /// Human-facing name used in progress lines ("Vercel").
    fn name(&self) -> &'static str;
    fn status_command(&self) -> CommandSpec;
    fn login_command(&self) -> CommandSpec;
    fn deploy_command(&self) -> CommandSpec;
}

pub fn make_runner(provider: Provider, config: &DeployConfig) -> Box<dyn Runner> {
    match provider {
        Provider::Vercel => Box::new(vercel::VercelRunner { npx: config.npx }),
        Provider::Netlify => Box::new(netlify::NetlifyRunner { npx: config.npx }),
        Provider::DigitalOcean => Box::new(digitalocean::DigitalOceanRunner),
    }
}

/// Resolves a provider tag to its runner.
pub fn runner_for(tag: &str, config: &DeployConfig) -> Result<Box<dyn Runner>, DeployError> {
    let provider: Provider = tag.parse()?;
    Ok(make_runner(provider, config))
}

pub(crate) fn node_cli(program: &str, args: &[&str], npx: bool) -> CommandSpec {
    let cmd = CommandSpec::new(program, args);
    if npx { cmd.via_npx() } else { cmd }
}
