//! Pages of the voting app and the table that routes to them.

use std::sync::OnceLock;

use crate::error::RouteTableError;
use crate::pattern::Params;
use crate::table::RouteTable;

/// Parameter name bound by the election-scoped routes.
pub const ELECTION_ID: &str = "electionId";

/// Every page the app can render. Exactly one is selected per navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Index,
    Results,
    Login,
    Register,
    ForgotPassword,
    ResetPassword,
    AdminLogin,
    AdminDashboardNew,
    /// Legacy dashboard, still reachable at `/admin/dashboard-old`.
    AdminDashboard,
    ElectionResults,
    UserHome,
    ElectionList,
    Vote,
    VoteSuccess,
    NotFound,
}

/// The app's route declarations, in precedence order.
///
/// `/vote/success` sits above `/vote/:electionId` so the literal wins under
/// first-match dispatch. The catch-all stays last.
pub const APP_ROUTES: [(&str, Page); 15] = [
    ("/", Page::Index),
    ("/results", Page::Results),
    ("/auth/login", Page::Login),
    ("/auth/register", Page::Register),
    ("/auth/forgot-password", Page::ForgotPassword),
    ("/auth/reset-password", Page::ResetPassword),
    ("/admin/login", Page::AdminLogin),
    ("/admin/dashboard", Page::AdminDashboardNew),
    ("/admin/dashboard-old", Page::AdminDashboard),
    ("/admin/results/:electionId", Page::ElectionResults),
    ("/user/home", Page::UserHome),
    ("/elections", Page::ElectionList),
    ("/vote/success", Page::VoteSuccess),
    ("/vote/:electionId", Page::Vote),
    ("*", Page::NotFound),
];

static APP_TABLE: OnceLock<Result<RouteTable<Page>, RouteTableError>> = OnceLock::new();

/// The validated app route table, built once per process.
pub fn app_routes() -> Result<&'static RouteTable<Page>, RouteTableError> {
    APP_TABLE
        .get_or_init(|| {
            let table = RouteTable::new(APP_ROUTES);
            match &table {
                Ok(t) => tracing::info!(routes = t.len(), "route table validated"),
                Err(e) => tracing::error!(error = %e, "route table rejected"),
            }
            table
        })
        .as_ref()
        .map_err(Clone::clone)
}

/// Parameters for the election-scoped routes.
pub fn election_params(election_id: &str) -> Params {
    Params::new().with(ELECTION_ID, election_id)
}

impl Page {
    pub const ALL: [Page; 15] = [
        Page::Index,
        Page::Results,
        Page::Login,
        Page::Register,
        Page::ForgotPassword,
        Page::ResetPassword,
        Page::AdminLogin,
        Page::AdminDashboardNew,
        Page::AdminDashboard,
        Page::ElectionResults,
        Page::UserHome,
        Page::ElectionList,
        Page::Vote,
        Page::VoteSuccess,
        Page::NotFound,
    ];

    /// Document title shown while this page is active.
    pub fn title(self) -> &'static str {
        match self {
            Page::Index => "Online Voting System",
            Page::Results => "Results",
            Page::Login => "Sign in",
            Page::Register => "Create account",
            Page::ForgotPassword => "Forgot password",
            Page::ResetPassword => "Reset password",
            Page::AdminLogin => "Admin sign in",
            Page::AdminDashboardNew => "Admin dashboard",
            Page::AdminDashboard => "Admin dashboard (legacy)",
            Page::ElectionResults => "Election results",
            Page::UserHome => "Home",
            Page::ElectionList => "Elections",
            Page::Vote => "Cast your vote",
            Page::VoteSuccess => "Vote recorded",
            Page::NotFound => "Page not found",
        }
    }

    /// Pages under `/admin`. Used for navigation chrome only, not access control.
    pub fn is_admin(self) -> bool {
        matches!(
            self,
            Page::AdminLogin | Page::AdminDashboardNew | Page::AdminDashboard | Page::ElectionResults
        )
    }

    /// Sign-in, registration and password recovery pages.
    pub fn is_auth_flow(self) -> bool {
        matches!(
            self,
            Page::Login | Page::Register | Page::ForgotPassword | Page::ResetPassword | Page::AdminLogin
        )
    }
}
