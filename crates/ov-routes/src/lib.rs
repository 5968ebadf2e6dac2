//! Routing core for the online voting web app.
//!
//! Maps a request path to exactly one [`Page`] through an ordered,
//! validated [`RouteTable`], and handles the deployment base path that is
//! stripped before matching and prepended to generated links.
//!
//! The crate has no UI dependencies; `ov-web` renders whatever page the
//! dispatcher picks.

pub mod base_path;
pub mod error;
pub mod page;
pub mod pattern;
pub mod table;

pub use base_path::{BasePath, DeployTarget, GITHUB_PAGES_SENTINEL};
pub use error::RouteTableError;
pub use page::{APP_ROUTES, ELECTION_ID, Page, app_routes, election_params};
pub use pattern::{Params, RoutePattern, Segment};
pub use table::{RouteEntry, RouteMatch, RouteTable};
