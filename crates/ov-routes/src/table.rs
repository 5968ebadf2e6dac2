//! Ordered route table with first-match-wins dispatch.

use std::fmt;

use tracing::debug;

use crate::error::RouteTableError;
use crate::pattern::{Params, RoutePattern};

/// A declared route: its pattern, the text it was declared with, and the page it selects.
#[derive(Debug, Clone)]
pub struct RouteEntry<P> {
    pattern: RoutePattern,
    source: String,
    page: P,
}

impl<P: Copy> RouteEntry<P> {
    pub fn pattern(&self) -> &RoutePattern {
        &self.pattern
    }

    /// The pattern exactly as it was declared.
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn page(&self) -> P {
        self.page
    }
}

/// Result of dispatching one path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMatch<'a, P> {
    pub page: P,
    /// Declared pattern of the entry that matched.
    pub pattern: &'a str,
    pub params: Params,
    fallback: bool,
}

impl<P> RouteMatch<'_, P> {
    /// True when no declared route matched and the catch-all was used.
    pub fn is_fallback(&self) -> bool {
        self.fallback
    }
}

/// Routes evaluated top to bottom, ending in exactly one catch-all.
///
/// Construction rejects tables where the catch-all is missing, duplicated
/// or not last, and tables where an entry is unreachable because an earlier
/// entry already matches everything it would. That keeps declaration order
/// the only precedence rule: a literal such as `/vote/success` must be
/// declared before `/vote/:electionId`.
#[derive(Debug, Clone)]
pub struct RouteTable<P> {
    routes: Vec<RouteEntry<P>>,
    fallback: RouteEntry<P>,
}

impl<P: Copy + PartialEq + fmt::Debug> RouteTable<P> {
    pub fn new<S: AsRef<str>>(declared: impl IntoIterator<Item = (S, P)>) -> Result<Self, RouteTableError> {
        let mut entries: Vec<RouteEntry<P>> = Vec::new();

        for (source, page) in declared {
            let source = source.as_ref();
            let pattern = RoutePattern::parse(source)?;

            if pattern.is_wildcard() {
                if entries.iter().any(|e| e.pattern.is_wildcard()) {
                    return Err(RouteTableError::DuplicateWildcard);
                }
            } else {
                let earlier = entries
                    .iter()
                    .filter(|e| !e.pattern.is_wildcard())
                    .find(|e| e.pattern.covers(&pattern));
                if let Some(earlier) = earlier {
                    return Err(if pattern.covers(&earlier.pattern) {
                        RouteTableError::DuplicatePattern {
                            pattern: source.to_string(),
                        }
                    } else {
                        RouteTableError::ShadowedRoute {
                            pattern: source.to_string(),
                            shadowed_by: earlier.source.clone(),
                        }
                    });
                }
            }

            entries.push(RouteEntry {
                pattern,
                source: source.to_string(),
                page,
            });
        }

        let len = entries.len();
        match entries.iter().position(|e| e.pattern.is_wildcard()) {
            None => Err(RouteTableError::MissingWildcard),
            Some(index) if index + 1 != len => Err(RouteTableError::WildcardNotLast { index, len }),
            Some(_) => {
                let fallback = entries.pop().ok_or(RouteTableError::MissingWildcard)?;
                Ok(Self {
                    routes: entries,
                    fallback,
                })
            }
        }
    }

    /// Resolve `path` to exactly one page.
    ///
    /// `path` must already have the base path removed. Any query string or
    /// fragment is ignored. Never fails: unmatched paths get the catch-all.
    pub fn dispatch(&self, path: &str) -> RouteMatch<'_, P> {
        let path = path.split(['?', '#']).next().unwrap_or(path);

        for entry in &self.routes {
            if let Some(params) = entry.pattern.matches(path) {
                debug!(path, pattern = %entry.source, page = ?entry.page, "route matched");
                return RouteMatch {
                    page: entry.page,
                    pattern: &entry.source,
                    params,
                    fallback: false,
                };
            }
        }

        debug!(path, page = ?self.fallback.page, "no route matched, using catch-all");
        RouteMatch {
            page: self.fallback.page,
            pattern: &self.fallback.source,
            params: Params::default(),
            fallback: true,
        }
    }

    /// Concrete path of the first declared route bound to `page`.
    ///
    /// Returns `None` for the catch-all page, for pages that are not in the
    /// table, and when a required parameter is missing.
    pub fn href_for(&self, page: P, params: &Params) -> Option<String> {
        self.routes
            .iter()
            .find(|e| e.page == page)
            .and_then(|e| e.pattern.render(params))
    }

    /// All entries in declaration order, catch-all last.
    pub fn entries(&self) -> impl Iterator<Item = &RouteEntry<P>> {
        self.routes.iter().chain(std::iter::once(&self.fallback))
    }

    pub fn fallback_page(&self) -> P {
        self.fallback.page
    }

    /// Number of entries including the catch-all.
    pub fn len(&self) -> usize {
        self.routes.len() + 1
    }

    /// Always false: a valid table holds at least the catch-all.
    pub fn is_empty(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum View {
        Home,
        Item,
        Special,
        Missing,
    }

    #[test]
    fn first_declared_match_wins() {
        let table = RouteTable::new([
            ("/", View::Home),
            ("/items/special", View::Special),
            ("/items/:id", View::Item),
            ("*", View::Missing),
        ])
        .unwrap();

        assert_eq!(table.dispatch("/items/special").page, View::Special);
        let m = table.dispatch("/items/7");
        assert_eq!(m.page, View::Item);
        assert_eq!(m.pattern, "/items/:id");
        assert_eq!(m.params.get("id"), Some("7"));
        assert!(!m.is_fallback());
    }

    #[test]
    fn unmatched_paths_use_catch_all() {
        let table = RouteTable::new([("/", View::Home), ("*", View::Missing)]).unwrap();
        let m = table.dispatch("/nope");
        assert_eq!(m.page, View::Missing);
        assert_eq!(m.pattern, "*");
        assert!(m.params.is_empty());
        assert!(m.is_fallback());
    }

    #[test]
    fn query_and_fragment_are_ignored() {
        let table = RouteTable::new([("/items/:id", View::Item), ("*", View::Missing)]).unwrap();
        assert_eq!(table.dispatch("/items/3?tab=info").params.get("id"), Some("3"));
        assert_eq!(table.dispatch("/items/3#top").params.get("id"), Some("3"));
    }

    #[test]
    fn shadowed_literal_is_rejected() {
        let err = RouteTable::new([
            ("/items/:id", View::Item),
            ("/items/special", View::Special),
            ("*", View::Missing),
        ])
        .unwrap_err();
        assert_eq!(
            err,
            RouteTableError::ShadowedRoute {
                pattern: "/items/special".into(),
                shadowed_by: "/items/:id".into(),
            }
        );
    }

    #[test]
    fn duplicate_routes_are_rejected() {
        let err = RouteTable::new([("/items/:id", View::Item), ("/Items/:key", View::Special), ("*", View::Missing)])
            .unwrap_err();
        assert_eq!(
            err,
            RouteTableError::DuplicatePattern {
                pattern: "/Items/:key".into()
            }
        );
    }

    #[test]
    fn catch_all_rules() {
        assert_eq!(
            RouteTable::new([("/", View::Home)]).unwrap_err(),
            RouteTableError::MissingWildcard
        );
        assert_eq!(
            RouteTable::<View>::new(Vec::<(&str, View)>::new()).unwrap_err(),
            RouteTableError::MissingWildcard
        );
        assert_eq!(
            RouteTable::new([("*", View::Missing), ("/", View::Home)]).unwrap_err(),
            RouteTableError::WildcardNotLast { index: 0, len: 2 }
        );
        assert_eq!(
            RouteTable::new([("*", View::Missing), ("*", View::Missing)]).unwrap_err(),
            RouteTableError::DuplicateWildcard
        );
    }

    #[test]
    fn href_for_uses_first_entry_for_page() {
        let table = RouteTable::new([
            ("/", View::Home),
            ("/items/:id", View::Item),
            ("/legacy/items/:id", View::Item),
            ("*", View::Missing),
        ])
        .unwrap();

        let params = Params::new().with("id", "9");
        assert_eq!(table.href_for(View::Item, &params).as_deref(), Some("/items/9"));
        assert_eq!(table.href_for(View::Home, &Params::new()).as_deref(), Some("/"));
        assert_eq!(table.href_for(View::Item, &Params::new()), None);
        assert_eq!(table.href_for(View::Missing, &Params::new()), None);
    }

    #[test]
    fn entries_keep_declaration_order() {
        let table = RouteTable::new([("/", View::Home), ("/items/:id", View::Item), ("*", View::Missing)]).unwrap();
        let sources: Vec<_> = table.entries().map(|e| e.source()).collect();
        assert_eq!(sources, ["/", "/items/:id", "*"]);
        assert_eq!(table.len(), 3);
        assert_eq!(table.fallback_page(), View::Missing);
    }
}
