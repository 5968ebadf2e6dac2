//! Deployment base path: chosen once at startup, stripped from incoming
//! paths before dispatch and prepended to generated links.

/// Deployment-target value that selects the project-site prefix.
pub const GITHUB_PAGES_SENTINEL: &str = "github-pages";

const GITHUB_PAGES_BASE: &str = "/Online_Voting_System";
const ROOT: &str = "/";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeployTarget {
    /// Served from a GitHub Pages project site under a fixed prefix.
    GithubPages,
    /// Served from the domain root (Docker, local dev).
    Default,
}

impl DeployTarget {
    /// Interpret the raw deployment-target setting. Only the exact sentinel
    /// selects GitHub Pages; anything else, including no value, is `Default`.
    pub fn from_setting(value: Option<&str>) -> Self {
        match value {
            Some(GITHUB_PAGES_SENTINEL) => DeployTarget::GithubPages,
            _ => DeployTarget::Default,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BasePath(&'static str);

impl BasePath {
    pub const ROOT: BasePath = BasePath(ROOT);

    pub fn for_target(target: DeployTarget) -> Self {
        match target {
            DeployTarget::GithubPages => BasePath(GITHUB_PAGES_BASE),
            DeployTarget::Default => BasePath::ROOT,
        }
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }

    pub fn is_root(&self) -> bool {
        self.0 == ROOT
    }

    /// Remove the prefix from an incoming path.
    ///
    /// The comparison is ASCII case-insensitive and must end on a segment
    /// boundary, so `/Online_Voting_SystemX` is outside the base. Returns
    /// `None` for paths outside the base.
    pub fn strip<'a>(&self, path: &'a str) -> Option<&'a str> {
        if self.is_root() {
            return Some(path);
        }

        let prefix = self.0;
        let head = path.get(..prefix.len())?;
        if !head.eq_ignore_ascii_case(prefix) {
            return None;
        }

        let rest = &path[prefix.len()..];
        match rest.chars().next() {
            None => Some("/"),
            Some('/' | '?' | '#') => Some(rest),
            Some(_) => None,
        }
    }

    /// Prefix a generated link with the base path.
    pub fn href(&self, to: &str) -> String {
        if self.is_root() {
            return if to.starts_with('/') { to.to_string() } else { format!("/{to}") };
        }
        match to {
            "" | "/" => self.0.to_string(),
            _ if to.starts_with('/') => format!("{}{}", self.0, to),
            _ => format!("{}/{}", self.0, to),
        }
    }
}

impl Default for BasePath {
    fn default() -> Self {
        BasePath::ROOT
    }
}
