//! One view per routed page. Each page owns its own data and behaviour;
//! the dispatcher only decides which one is shown.

mod admin;
mod auth;
mod home;
mod not_found;
mod voting;

pub use admin::{AdminDashboardNewPage, AdminDashboardPage, ElectionResultsPage};
pub use auth::{AdminLoginPage, ForgotPasswordPage, LoginPage, RegisterPage, ResetPasswordPage};
pub use home::{IndexPage, UserHomePage};
pub use not_found::NotFoundPage;
pub use voting::{ElectionListPage, ResultsPage, VotePage, VoteSuccessPage};
