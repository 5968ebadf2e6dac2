//! Route pattern parsing and structural matching.
//!
//! A pattern is either the bare catch-all `*` or a `/`-separated list of
//! segments, where `:name` binds one path segment to `name`.

use std::fmt;

use crate::error::RouteTableError;

/// One segment of a route pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Literal text, compared ASCII case-insensitively.
    Static(String),
    /// `:name` - matches any single non-empty segment and binds it.
    Param(String),
}

impl Segment {
    fn matches(&self, value: &str) -> bool {
        match self {
            Segment::Static(literal) => literal.eq_ignore_ascii_case(value),
            Segment::Param(_) => !value.is_empty(),
        }
    }
}

/// A parsed route pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoutePattern {
    Segments(Vec<Segment>),
    /// The catch-all `*`: matches every path, binds nothing.
    Wildcard,
}

/// Split a path into its non-empty segments.
///
/// Doubled and trailing slashes are ignored, so `/elections/` and
/// `/elections` are the same path.
pub(crate) fn split_path(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|segment| !segment.is_empty())
}

impl RoutePattern {
    pub fn parse(pattern: &str) -> Result<Self, RouteTableError> {
        let invalid = |reason| RouteTableError::InvalidPattern {
            pattern: pattern.to_string(),
            reason,
        };

        if pattern == "*" {
            return Ok(Self::Wildcard);
        }
        if !pattern.starts_with('/') {
            return Err(invalid("must start with `/`"));
        }

        let mut segments: Vec<Segment> = Vec::new();
        for raw in split_path(pattern) {
            if let Some(name) = raw.strip_prefix(':') {
                if name.is_empty() {
                    return Err(invalid("parameter segment has no name"));
                }
                if segments.iter().any(|s| matches!(s, Segment::Param(n) if n == name)) {
                    return Err(invalid("parameter name is used twice"));
                }
                segments.push(Segment::Param(name.to_string()));
            } else if raw.contains('*') {
                return Err(invalid("`*` is only supported as the whole pattern"));
            } else {
                segments.push(Segment::Static(raw.to_string()));
            }
        }

        Ok(Self::Segments(segments))
    }

    pub fn is_wildcard(&self) -> bool {
        matches!(self, Self::Wildcard)
    }

    /// Match a concrete path (no query string) against this pattern.
    ///
    /// Returns the bound parameters on success. Parameter values are
    /// percent-decoded; a value that does not decode to UTF-8 is kept raw.
    pub fn matches(&self, path: &str) -> Option<Params> {
        let segments = match self {
            Self::Wildcard => return Some(Params::default()),
            Self::Segments(segments) => segments,
        };

        let mut params = Params::default();
        let mut values = split_path(path);
        for segment in segments {
            let value = values.next()?;
            if !segment.matches(value) {
                return None;
            }
            if let Segment::Param(name) = segment {
                params.push(name.as_str(), decode_segment(value));
            }
        }

        // Extra trailing segments mean a longer path, not a match.
        if values.next().is_some() {
            return None;
        }
        Some(params)
    }

    /// True when every path matched by `other` is also matched by `self`.
    pub fn covers(&self, other: &RoutePattern) -> bool {
        match (self, other) {
            (Self::Wildcard, _) => true,
            (Self::Segments(_), Self::Wildcard) => false,
            (Self::Segments(ours), Self::Segments(theirs)) => {
                ours.len() == theirs.len()
                    && ours.iter().zip(theirs).all(|pair| match pair {
                        (Segment::Param(_), _) => true,
                        (Segment::Static(a), Segment::Static(b)) => a.eq_ignore_ascii_case(b),
                        (Segment::Static(_), Segment::Param(_)) => false,
                    })
            }
        }
    }

    /// Build a concrete path from this pattern.
    ///
    /// `None` for the wildcard, or when a parameter is missing or empty.
    pub fn render(&self, params: &Params) -> Option<String> {
        let Self::Segments(segments) = self else {
            return None;
        };
        if segments.is_empty() {
            return Some("/".to_string());
        }

        let mut path = String::new();
        for segment in segments {
            path.push('/');
            match segment {
                Segment::Static(literal) => path.push_str(literal),
                Segment::Param(name) => {
                    let value = params.get(name).filter(|v| !v.is_empty())?;
                    path.push_str(&urlencoding::encode(value));
                }
            }
        }
        Some(path)
    }
}

impl fmt::Display for RoutePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Wildcard => f.write_str("*"),
            Self::Segments(segments) if segments.is_empty() => f.write_str("/"),
            Self::Segments(segments) => {
                for segment in segments {
                    match segment {
                        Segment::Static(literal) => write!(f, "/{literal}")?,
                        Segment::Param(name) => write!(f, "/:{name}")?,
                    }
                }
                Ok(())
            }
        }
    }
}

fn decode_segment(raw: &str) -> String {
    urlencoding::decode(raw)
        .map(|value| value.into_owned())
        .unwrap_or_else(|_| raw.to_string())
}

/// Named parameters bound by a match, in pattern order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params(Vec<(String, String)>);

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert, used when generating links.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.push(name, value);
        self
    }

    /// Insert or replace `name`.
    pub fn push(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.0.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = value,
            None => self.0.push((name, value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.iter().find(|(n, _)| n == name).map(|(_, v)| v.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Params {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Params::default();
        for (name, value) in iter {
            params.push(name, value);
        }
        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pattern(s: &str) -> RoutePattern {
        RoutePattern::parse(s).unwrap()
    }

    #[test]
    fn parses_static_param_and_wildcard() {
        assert_eq!(pattern("*"), RoutePattern::Wildcard);
        assert_eq!(pattern("/"), RoutePattern::Segments(vec![]));
        assert_eq!(
            pattern("/vote/:electionId"),
            RoutePattern::Segments(vec![
                Segment::Static("vote".into()),
                Segment::Param("electionId".into())
            ])
        );
    }

    #[test]
    fn rejects_malformed_patterns() {
        for bad in ["vote", "/vote/:", "/a/:id/:id", "/files/*", ""] {
            assert!(
                matches!(RoutePattern::parse(bad), Err(RouteTableError::InvalidPattern { .. })),
                "expected `{bad}` to be rejected"
            );
        }
    }

    #[test]
    fn root_only_matches_root() {
        let root = pattern("/");
        assert!(root.matches("/").is_some());
        assert!(root.matches("").is_some());
        assert!(root.matches("/elections").is_none());
    }

    #[test]
    fn static_segments_ignore_case_and_trailing_slash() {
        let p = pattern("/auth/login");
        assert!(p.matches("/auth/login").is_some());
        assert!(p.matches("/Auth/LOGIN/").is_some());
        assert!(p.matches("/auth").is_none());
        assert!(p.matches("/auth/login/extra").is_none());
    }

    #[test]
    fn param_binds_and_decodes() {
        let p = pattern("/vote/:electionId");
        let params = p.matches("/vote/42").unwrap();
        assert_eq!(params.get("electionId"), Some("42"));

        let params = p.matches("/vote/spring%20ballot").unwrap();
        assert_eq!(params.get("electionId"), Some("spring ballot"));

        // Invalid UTF-8 after decoding stays raw.
        let params = p.matches("/vote/%FF").unwrap();
        assert_eq!(params.get("electionId"), Some("%FF"));
    }

    #[test]
    fn param_requires_exactly_one_segment() {
        let p = pattern("/vote/:electionId");
        assert!(p.matches("/vote").is_none());
        assert!(p.matches("/vote/").is_none());
        assert!(p.matches("/vote/1/2").is_none());
    }

    #[test]
    fn coverage() {
        assert!(pattern("/vote/:id").covers(&pattern("/vote/success")));
        assert!(!pattern("/vote/success").covers(&pattern("/vote/:id")));
        assert!(pattern("/vote/:a").covers(&pattern("/VOTE/:b")));
        assert!(!pattern("/vote/:id").covers(&pattern("/vote")));
        assert!(pattern("*").covers(&pattern("/anything")));
        assert!(!pattern("/anything").covers(&pattern("*")));
    }

    #[test]
    fn render_encodes_params() {
        let p = pattern("/admin/results/:electionId");
        let params = Params::new().with("electionId", "a b/c");
        assert_eq!(p.render(&params).as_deref(), Some("/admin/results/a%20b%2Fc"));
        assert_eq!(p.render(&Params::new()), None);
        assert_eq!(p.render(&Params::new().with("electionId", "")), None);
        assert_eq!(pattern("/").render(&Params::new()).as_deref(), Some("/"));
        assert_eq!(pattern("*").render(&Params::new()), None);
    }

    #[test]
    fn display_round_trips_source_shape() {
        assert_eq!(pattern("/admin//results/:electionId/").to_string(), "/admin/results/:electionId");
        assert_eq!(pattern("/").to_string(), "/");
        assert_eq!(pattern("*").to_string(), "*");
    }

    #[test]
    fn params_push_replaces() {
        let mut params: Params = [("a", "1")].into_iter().collect();
        params.push("a", "2");
        params.push("b", "3");
        assert_eq!(params.len(), 2);
        assert_eq!(params.get("a"), Some("2"));
        assert_eq!(params.iter().map(|(n, _)| n).collect::<Vec<_>>(), ["a", "b"]);
    }
}
