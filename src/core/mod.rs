//! Core domain logic: site configuration and the waitlist signup flow

pub mod config;
pub mod waitlist;

pub use config::{ConfigError, SiteConfig};
