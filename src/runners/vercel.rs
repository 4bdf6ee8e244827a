use super::{node_cli, Provider, Runner};
use crate::exec::CommandSpec;

pub struct VercelRunner {
    pub npx: bool,
}

impl Runner for VercelRunner {
    fn provider(&self) -> Provider { Provider::Vercel }
    fn name(&self) -> &'static str { "Vercel" }

    fn status_command(&self) -> CommandSpec {
        node_cli("vercel", &["whoami"], self.npx)
    }

    fn login_command(&self) -> CommandSpec {
        node_cli("vercel", &["login"], self.npx)
    }

    fn deploy_command(&self) -> CommandSpec {
        node_cli("vercel", &["--prod"], self.npx)
    }
}
