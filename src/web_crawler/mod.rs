pub mod contact_links;
pub mod crawler;
pub mod page_scan;
pub mod rate_limit;
pub mod types;

pub use crawler::{EmailCrawler, EmailFinder};
pub use types::{CrawlConfig, PageResult};
