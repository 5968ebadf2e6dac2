mod election_table;
mod nav_link;
mod page_header;
mod section;
mod site_nav;

pub use election_table::{ElectionLink, ElectionTable};
pub use nav_link::NavLink;
pub use page_header::PageHeader;
pub use section::Section;
pub use site_nav::SiteNav;
