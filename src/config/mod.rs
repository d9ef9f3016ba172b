//! Configuration module

mod site;

pub use site::DateOrder;
pub use site::SiteConfig;
