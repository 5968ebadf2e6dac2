pub mod elections;
pub(crate) mod http;

pub use elections::{ElectionStatus, ElectionSummary, elections_key, elections_url};
