use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DeployError {
    #[error("Configuration file not found: {}", path.display())]
    ConfigNotFound { path: PathBuf },

    #[error("invalid configuration in {}: {message}", path.display())]
    ConfigParse { path: PathBuf, message: String },

    #[error("invalid package manifest {}: {message}", path.display())]
    ManifestParse { path: PathBuf, message: String },

    #[error("Unsupported project type")]
    UnsupportedProjectType,

    #[error("Unsupported provider '{0}'")]
    UnsupportedProvider(String),

    /// Non-zero exit or spawn failure of an external tool.
    #[error("`{command}` failed: {reason}")]
    SubprocessFailure { command: String, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type DeployResult<T> = Result<T, DeployError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_not_found_message_names_the_file() {
        let err = DeployError::ConfigNotFound { path: PathBuf::from("deploy.config.json") };
        assert_eq!(err.to_string(), "Configuration file not found: deploy.config.json");
    }

    #[test]
    fn test_subprocess_failure_message() {
        let err = DeployError::SubprocessFailure {
            command: "vercel --prod".to_string(),
            reason: "exit status: 1".to_string(),
        };
        assert_eq!(err.to_string(), "`vercel --prod` failed: exit status: 1");
    }

    #[test]
    fn test_unsupported_provider_message() {
        let err = DeployError::UnsupportedProvider("heroku".to_string());
        assert_eq!(err.to_string(), "Unsupported provider 'heroku'");
    }
}
