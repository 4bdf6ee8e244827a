use serde::Deserialize;
use serde_json::{Map, Value};
use std::{fmt, fs, path::Path};

use crate::error::{DeployError, DeployResult};
use crate::timing::PhaseTimer;

pub const MANIFEST_FILE: &str = "package.json";
pub const STATIC_ENTRY_FILE: &str = "index.html";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectType {
    NextJs,
    React,
    Express,
    Static,
}

impl fmt::Display for ProjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ProjectType::NextJs => "Next.js",
            ProjectType::React => "React",
            ProjectType::Express => "Express",
            ProjectType::Static => "Static",
        };
        f.write_str(s)
    }
}

// Checked in this order; first hit wins.
const FRAMEWORKS: [(&str, ProjectType); 3] = [
    ("next", ProjectType::NextJs),
    ("react", ProjectType::React),
    ("express", ProjectType::Express),
];

#[derive(Debug, Default, Deserialize)]
struct PackageManifest {
    #[serde(default)]
    dependencies: Option<Map<String, Value>>,
}

pub fn detect(root: &Path) -> DeployResult<ProjectType> {
    let _timer = PhaseTimer::start("Detect Project Type");

    let manifest_path = root.join(MANIFEST_FILE);
    if manifest_path.exists() {
        let text = fs::read_to_string(&manifest_path)?;
        let manifest: PackageManifest =
            serde_json::from_str(&text).map_err(|e| DeployError::ManifestParse {
                path: manifest_path.clone(),
                message: e.to_string(),
            })?;

        if let Some(deps) = &manifest.dependencies {
            if let Some((name, kind)) = FRAMEWORKS.iter().find(|(name, _)| deps.contains_key(*name)) {
                tracing::debug!(dependency = *name, "framework dependency found");
                return Ok(*kind);
            }
        }
    }

    if root.join(STATIC_ENTRY_FILE).exists() {
        return Ok(ProjectType::Static);
    }

    Err(DeployError::UnsupportedProjectType)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn project_with_manifest(body: &str) -> TempDir {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(MANIFEST_FILE), body).unwrap();
        dir
    }

    #[test]
    fn test_next_wins_over_react() {
        let dir = project_with_manifest(
            r#"{"dependencies":{"react":"18.2.0","react-dom":"18.2.0","next":"14.1.0"}}"#,
        );
        assert_eq!(detect(dir.path()).unwrap(), ProjectType::NextJs);
    }

    #[test]
    fn test_react_project() {
        let dir = project_with_manifest(r#"{"dependencies":{"react":"18.0.0"}}"#);
        assert_eq!(detect(dir.path()).unwrap(), ProjectType::React);
    }

    #[test]
    fn test_react_wins_over_express() {
        let dir = project_with_manifest(r#"{"dependencies":{"express":"4.19.0","react":"18.0.0"}}"#);
        assert_eq!(detect(dir.path()).unwrap(), ProjectType::React);
    }

    #[test]
    fn test_express_project() {
        let dir = project_with_manifest(r#"{"name":"api","dependencies":{"express":"4.19.0"}}"#);
        assert_eq!(detect(dir.path()).unwrap(), ProjectType::Express);
    }

    #[test]
    fn test_dev_dependencies_are_ignored() {
        let dir = project_with_manifest(r#"{"devDependencies":{"next":"14.1.0"}}"#);
        fs::write(dir.path().join(STATIC_ENTRY_FILE), "<html></html>").unwrap();
        assert_eq!(detect(dir.path()).unwrap(), ProjectType::Static);
    }

    #[test]
    fn test_manifest_without_known_framework_falls_back_to_static() {
        let dir = project_with_manifest(r#"{"dependencies":{"lodash":"4.17.21"}}"#);
        fs::write(dir.path().join(STATIC_ENTRY_FILE), "<html></html>").unwrap();
        assert_eq!(detect(dir.path()).unwrap(), ProjectType::Static);
    }

    #[test]
    fn test_static_site_without_manifest() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(STATIC_ENTRY_FILE), "<html></html>").unwrap();
        assert_eq!(detect(dir.path()).unwrap(), ProjectType::Static);
    }

    #[test]
    fn test_empty_directory_is_unsupported() {
        let dir = TempDir::new().unwrap();
        assert!(matches!(detect(dir.path()), Err(DeployError::UnsupportedProjectType)));
    }

    #[test]
    fn test_manifest_without_dependencies_is_unsupported() {
        let dir = project_with_manifest(r#"{"name":"bare"}"#);
        assert!(matches!(detect(dir.path()), Err(DeployError::UnsupportedProjectType)));
    }

    #[test]
    fn test_malformed_manifest() {
        let dir = project_with_manifest("{ not json");
        assert!(matches!(detect(dir.path()), Err(DeployError::ManifestParse { .. })));
    }

    #[test]
    fn test_display_names() {
        assert_eq!(ProjectType::NextJs.to_string(), "Next.js");
        assert_eq!(ProjectType::React.to_string(), "React");
        assert_eq!(ProjectType::Express.to_string(), "Express");
        assert_eq!(ProjectType::Static.to_string(), "Static");
    }
}
