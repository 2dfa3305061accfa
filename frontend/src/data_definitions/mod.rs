pub mod browser_url;
pub mod filter_host;
pub mod timer;
