use super::{node_cli, Provider, Runner};
use crate::exec::CommandSpec;

pub struct NetlifyRunner {
    pub npx: bool,
}

impl Runner for NetlifyRunner {
    fn provider(&self) -> Provider { Provider::Netlify }
    fn name(&self) -> &'static str { "Netlify" }

    fn status_command(&self) -> CommandSpec {
        node_cli("netlify", &["status"], self.npx)
    }

    fn login_command(&self) -> CommandSpec {
        node_cli("netlify", &["login"], self.npx)
    }

    fn deploy_command(&self) -> CommandSpec {
        node_cli("netlify", &["deploy", "--prod"], self.npx)
    }
}
