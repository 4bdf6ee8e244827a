use super::{Provider, Runner};
use crate::exec::CommandSpec;

/// App platform spec consumed by `doctl`; never read here.
pub const APP_SPEC_PATH: &str = ".do/app.yaml";

pub struct DigitalOceanRunner;

impl Runner for DigitalOceanRunner {
    fn provider(&self) -> Provider { Provider::DigitalOcean }
    fn name(&self) -> &'static str { "DigitalOcean" }

    // doctl has no separate status subcommand; auth init doubles as the check.
    fn status_command(&self) -> CommandSpec {
        CommandSpec::new("doctl", &["auth", "init"])
    }

    fn login_command(&self) -> CommandSpec {
        CommandSpec::new("doctl", &["auth", "init"])
    }

    fn deploy_command(&self) -> CommandSpec {
        CommandSpec::new("doctl", &["apps", "create", "--spec", APP_SPEC_PATH])
    }
}
