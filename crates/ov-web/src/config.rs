//! App configuration.
//!
//! `DEPLOY_TARGET` and `API_BASE_URL` are read at build time so the server
//! binary and the WASM bundle always agree on them. The server additionally
//! reads `LOG_LEVEL` at runtime.

use std::sync::LazyLock;

use ov_routes::{BasePath, DeployTarget};

const DEFAULT_API_BASE_URL: &str = "/api";
const DEFAULT_LOG_LEVEL: &str = "info";

pub struct AppConfig {
    pub name: &'static str,
    pub tagline: &'static str,
    pub deploy_target: DeployTarget,
    pub base_path: BasePath,
    pub api_base_url: &'static str,
}

impl AppConfig {
    pub fn from_settings(deploy_target: Option<&str>, api_base_url: Option<&'static str>) -> Self {
        let deploy_target = DeployTarget::from_setting(deploy_target);
        Self {
            name: "Online Voting System",
            tagline: "Secure, verifiable elections for your organisation",
            deploy_target,
            base_path: BasePath::for_target(deploy_target),
            api_base_url: api_base_url.filter(|url| !url.is_empty()).unwrap_or(DEFAULT_API_BASE_URL),
        }
    }
}

/// Resolved once per process; never changes afterwards.
pub static CONFIG: LazyLock<AppConfig> =
    LazyLock::new(|| AppConfig::from_settings(option_env!("DEPLOY_TARGET"), option_env!("API_BASE_URL")));

/// Runtime settings for the server binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerSettings {
    /// Default `tracing` filter when `RUST_LOG` is unset.
    pub log_level: String,
    /// Runtime `DEPLOY_TARGET`, only used to warn about a mismatch with the build.
    pub runtime_deploy_target: Option<String>,
}

impl ServerSettings {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            log_level: lookup("LOG_LEVEL")
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
            runtime_deploy_target: lookup("DEPLOY_TARGET"),
        }
    }

    /// True when the runtime environment asks for a different base path
    /// than the one compiled in.
    pub fn deploy_target_mismatch(&self, built: DeployTarget) -> bool {
        self.runtime_deploy_target.is_some()
            && DeployTarget::from_setting(self.runtime_deploy_target.as_deref()) != built
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn settings(vars: &[(&str, &str)]) -> ServerSettings {
        let vars: HashMap<String, String> = vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        ServerSettings::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn github_pages_build() {
        let config = AppConfig::from_settings(Some("github-pages"), None);
        assert_eq!(config.deploy_target, DeployTarget::GithubPages);
        assert_eq!(config.base_path.as_str(), "/Online_Voting_System");
        assert_eq!(config.api_base_url, "/api");
    }

    #[test]
    fn default_build() {
        let config = AppConfig::from_settings(None, Some("https://vote.example.org/api"));
        assert!(config.base_path.is_root());
        assert_eq!(config.api_base_url, "https://vote.example.org/api");

        let config = AppConfig::from_settings(Some("docker"), Some(""));
        assert!(config.base_path.is_root());
        assert_eq!(config.api_base_url, "/api");
    }

    #[test]
    fn server_settings_defaults() {
        let s = settings(&[]);
        assert_eq!(s.log_level, "info");
        assert!(!s.deploy_target_mismatch(DeployTarget::Default));
        assert!(!s.deploy_target_mismatch(DeployTarget::GithubPages));
    }

    #[test]
    fn server_settings_from_env() {
        let s = settings(&[("LOG_LEVEL", "debug"), ("DEPLOY_TARGET", "github-pages")]);
        assert_eq!(s.log_level, "debug");
        assert!(s.deploy_target_mismatch(DeployTarget::Default));
        assert!(!s.deploy_target_mismatch(DeployTarget::GithubPages));

        assert_eq!(settings(&[("LOG_LEVEL", "  ")]).log_level, "info");
    }
}
